use std::ops::Mul;

use crate::quantity::{energy::WattHours, voltage::Volts};

quantity!(MilliampHours, "mAh");
quantity!(Coulombs, "C");

impl MilliampHours {
    pub const fn to_amp_hours(self) -> f64 {
        self.0 / 1000.0
    }
}

impl Mul<Volts> for MilliampHours {
    type Output = WattHours;

    fn mul(self, voltage: Volts) -> Self::Output {
        WattHours(self.to_amp_hours() * voltage.0)
    }
}
