use bon::bon;

use crate::{
    device::error::{InvalidArgument, ensure_finite, ensure_positive},
    prelude::*,
    quantity::{capacitance::Farads, charge::Coulombs, energy::Joules, voltage::Volts},
};

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Capacitor {
    capacitance: Farads,
    voltage_rating: Volts,

    /// Stored charge, within `0..=capacitance × voltage_rating`.
    charge: Coulombs,
}

#[bon]
impl Capacitor {
    #[builder]
    pub fn new(
        capacitance: Farads,
        voltage_rating: Volts,
        #[builder(default)] charge: Coulombs,
    ) -> Result<Self, InvalidArgument> {
        ensure_positive("capacitance", capacitance.0)?;
        ensure_positive("voltage rating", voltage_rating.0)?;
        ensure_finite("charge", charge.0)?;
        let max = capacitance * voltage_rating;
        if charge < Coulombs::ZERO || charge > max {
            return Err(InvalidArgument::ChargeOutOfRange { charge, max });
        }
        Ok(Self { capacitance, voltage_rating, charge })
    }
}

impl Capacitor {
    pub const fn capacitance(&self) -> Farads {
        self.capacitance
    }

    pub const fn voltage_rating(&self) -> Volts {
        self.voltage_rating
    }

    pub const fn charge(&self) -> Coulombs {
        self.charge
    }

    pub fn max_charge(&self) -> Coulombs {
        self.capacitance * self.voltage_rating
    }

    /// Charge the capacitor up to the given voltage, replacing the current charge.
    #[allow(clippy::wrong_self_convention)]
    pub fn to_charge(&mut self, voltage: Volts) -> Result<(), InvalidArgument> {
        self.ensure_voltage(voltage)?;
        if voltage < Volts::ZERO {
            return Err(InvalidArgument::VoltageOutOfRange { voltage, rating: self.voltage_rating });
        }
        self.charge = self.capacitance * voltage;
        debug!(%voltage, charge = %self.charge, "charged");
        Ok(())
    }

    /// Energy the capacitor would hold at the given voltage, of either polarity.
    pub fn energy_stored(&self, voltage: Volts) -> Result<Joules, InvalidArgument> {
        self.ensure_voltage(voltage)?;
        Ok(self.capacitance.energy_at(voltage))
    }

    fn ensure_voltage(&self, voltage: Volts) -> Result<(), InvalidArgument> {
        ensure_finite("voltage", voltage.0)?;
        if voltage > self.voltage_rating {
            return Err(InvalidArgument::VoltageOutOfRange { voltage, rating: self.voltage_rating });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn capacitor() -> Result<Capacitor, InvalidArgument> {
        Capacitor::builder().capacitance(Farads(0.001)).voltage_rating(Volts(10.0)).build()
    }

    #[test]
    fn test_new() -> Result<(), InvalidArgument> {
        let capacitor = capacitor()?;
        assert_eq!(capacitor.charge(), Coulombs::ZERO);
        assert_abs_diff_eq!(capacitor.max_charge().0, 0.01);

        let capacitor = Capacitor::builder()
            .capacitance(Farads(100e-9))
            .voltage_rating(Volts(350.0))
            .charge(Coulombs(1e-5))
            .build()?;
        assert_eq!(capacitor.charge(), Coulombs(1e-5));
        Ok(())
    }

    #[test]
    fn test_new_invalid() {
        assert!(matches!(
            Capacitor::builder().capacitance(Farads(0.0)).voltage_rating(Volts(10.0)).build(),
            Err(InvalidArgument::NotPositive { quantity: "capacitance", .. }),
        ));
        assert!(matches!(
            Capacitor::builder().capacitance(Farads(0.001)).voltage_rating(Volts(-1.0)).build(),
            Err(InvalidArgument::NotPositive { quantity: "voltage rating", .. }),
        ));
        assert!(matches!(
            Capacitor::builder()
                .capacitance(Farads(0.001))
                .voltage_rating(Volts(10.0))
                .charge(Coulombs(0.02))
                .build(),
            Err(InvalidArgument::ChargeOutOfRange { .. }),
        ));
        assert!(
            Capacitor::builder()
                .capacitance(Farads(0.001))
                .voltage_rating(Volts(10.0))
                .charge(Coulombs(-0.001))
                .build()
                .is_err()
        );
    }

    #[test]
    fn test_to_charge() -> Result<(), InvalidArgument> {
        let mut capacitor = capacitor()?;
        capacitor.to_charge(Volts(5.0))?;
        assert_abs_diff_eq!(capacitor.charge().0, 0.005);

        assert_eq!(
            capacitor.to_charge(Volts(11.0)),
            Err(InvalidArgument::VoltageOutOfRange { voltage: Volts(11.0), rating: Volts(10.0) }),
        );
        assert!(capacitor.to_charge(Volts(-1.0)).is_err());
        assert_abs_diff_eq!(capacitor.charge().0, 0.005);

        capacitor.to_charge(Volts(10.0))?;
        assert_eq!(capacitor.charge(), capacitor.max_charge());
        Ok(())
    }

    #[test]
    fn test_energy_stored() -> Result<(), InvalidArgument> {
        let capacitor = capacitor()?;
        assert_abs_diff_eq!(capacitor.energy_stored(Volts(5.0))?.0, 0.0125);
        assert!(capacitor.energy_stored(Volts(10.5)).is_err());
        assert!(capacitor.energy_stored(Volts(f64::NAN)).is_err());
        assert_abs_diff_eq!(capacitor.energy_stored(Volts(-5.0))?.0, 0.0125);
        Ok(())
    }
}
