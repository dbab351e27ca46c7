use std::fmt::{Display, Formatter};

use bon::bon;

use crate::{
    device::{
        charge_level::ChargeLevel,
        error::{InvalidArgument, ensure_positive},
        shape::Shape,
    },
    prelude::*,
    quantity::{
        charge::MilliampHours,
        energy::WattHours,
        power::Watts,
        proportions::Percent,
        voltage::Volts,
    },
};

/// Rechargeable battery.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct Battery {
    /// Chemistry label, for example `Li-ion` or `Ni-Mh`.
    kind: String,

    capacity: MilliampHours,
    voltage: Volts,
    charge_level: ChargeLevel,
    shape: Shape,
}

#[bon]
impl Battery {
    #[builder]
    pub fn new(
        #[builder(into)] kind: String,
        capacity: MilliampHours,
        voltage: Volts,
        #[builder(default)] charge_level: Percent,
        #[builder(default)] shape: Shape,
    ) -> Result<Self, InvalidArgument> {
        ensure_positive("capacity", capacity.0)?;
        ensure_positive("voltage", voltage.0)?;
        let charge_level = ChargeLevel::try_new(charge_level)?;
        Ok(Self { kind, capacity, voltage, charge_level, shape })
    }
}

impl Battery {
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub const fn capacity(&self) -> MilliampHours {
        self.capacity
    }

    pub const fn voltage(&self) -> Volts {
        self.voltage
    }

    pub const fn charge_level(&self) -> ChargeLevel {
        self.charge_level
    }

    #[must_use]
    pub const fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Nominal energy: capacity in ampere-hours times the voltage.
    pub fn energy(&self) -> WattHours {
        (self.capacity * self.voltage).round_to(16)
    }

    /// Power available at the current charge level.
    pub fn power(&self) -> Watts {
        Watts(
            self.charge_level.percent().to_proportion()
                * self.capacity.to_amp_hours()
                * self.voltage.0,
        )
        .round_to(15)
    }

    pub fn charge(&mut self, amount: Percent) -> Result<(), InvalidArgument> {
        self.charge_level = self.charge_level.charged(amount)?;
        debug!(kind = %self.kind, %amount, level = %self.charge_level, "charged");
        Ok(())
    }

    pub fn discharge(&mut self, amount: Percent) -> Result<(), InvalidArgument> {
        self.charge_level = self.charge_level.discharged(amount)?;
        debug!(kind = %self.kind, %amount, level = %self.charge_level, "discharged");
        Ok(())
    }
}

impl Display for Battery {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(kind: {}, capacity: {}, voltage: {}, charge level: {}",
            self.shape.name(),
            self.kind,
            self.capacity,
            self.voltage,
            self.charge_level,
        )?;
        match self.shape {
            Shape::Unspecified => {}
            Shape::Cylindrical { diameter, height } => {
                write!(f, ", diameter: {diameter}, height: {height}")?;
            }
            Shape::Flat { width, length, height } => {
                write!(f, ", width: {width}, length: {length}, height: {height}")?;
            }
        }
        write!(f, ")")
    }
}
