use std::ops::Mul;

use crate::quantity::{charge::Coulombs, energy::Joules, voltage::Volts};

quantity!(Farads, "F");

impl Farads {
    /// Energy stored at the given voltage: `½·C·V²`.
    pub fn energy_at(self, voltage: Volts) -> Joules {
        Joules(0.5 * self.0 * voltage.0 * voltage.0)
    }
}

/// `Q = C·V`.
impl Mul<Volts> for Farads {
    type Output = Coulombs;

    fn mul(self, voltage: Volts) -> Self::Output {
        Coulombs(self.0 * voltage.0)
    }
}
