use bon::bon;

use crate::{
    device::{
        charge_level::ChargeLevel,
        error::{InvalidArgument, ensure_positive},
    },
    prelude::*,
    quantity::{proportions::Percent, resistance::Ohms},
};

#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct WirelessHeadphones {
    brand: String,
    model: String,
    impedance: Ohms,
    charge_level: ChargeLevel,
}

#[bon]
impl WirelessHeadphones {
    #[builder]
    pub fn new(
        #[builder(into)] brand: String,
        #[builder(into)] model: String,
        impedance: Ohms,
        #[builder(default)] charge_level: Percent,
    ) -> Result<Self, InvalidArgument> {
        ensure_positive("impedance", impedance.0)?;
        let charge_level = ChargeLevel::try_new(charge_level)?;
        Ok(Self { brand, model, impedance, charge_level })
    }
}

impl WirelessHeadphones {
    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    pub const fn impedance(&self) -> Ohms {
        self.impedance
    }

    pub const fn charge_level(&self) -> ChargeLevel {
        self.charge_level
    }

    #[must_use]
    pub fn connect(&self, device: &str) -> String {
        format!("Headphones {} {} connected to {device}.", self.brand, self.model)
    }

    pub fn charge(&mut self, amount: Percent) -> Result<(), InvalidArgument> {
        self.charge_level = self.charge_level.charged(amount)?;
        debug!(brand = %self.brand, model = %self.model, %amount, level = %self.charge_level, "charged");
        Ok(())
    }
}
