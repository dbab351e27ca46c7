use crate::quantity::{charge::Coulombs, proportions::Percent, voltage::Volts};

#[derive(Clone, Debug, PartialEq, derive_more::Display, derive_more::Error)]
pub enum InvalidArgument {
    #[display("{quantity} must be a finite number, got {value}")]
    NotFinite { quantity: &'static str, value: f64 },

    #[display("{quantity} must be positive, got {value}")]
    NotPositive { quantity: &'static str, value: f64 },

    #[display("charge level must be between 0% and 100%, got {level}")]
    ChargeLevelOutOfRange { level: Percent },

    #[display("charge amount must be positive, got {amount}")]
    NonPositiveAmount { amount: Percent },

    #[display("charge level cannot exceed 100%: {level} + {amount}")]
    Overcharge { level: Percent, amount: Percent },

    #[display("charge level cannot be negative: {level} - {amount}")]
    Overdischarge { level: Percent, amount: Percent },

    #[display("charge must be between 0 C and {max}, got {charge}")]
    ChargeOutOfRange { charge: Coulombs, max: Coulombs },

    #[display("voltage must be between 0 V and {rating}, got {voltage}")]
    VoltageOutOfRange { voltage: Volts, rating: Volts },
}

pub const fn ensure_finite(quantity: &'static str, value: f64) -> Result<(), InvalidArgument> {
    if value.is_finite() { Ok(()) } else { Err(InvalidArgument::NotFinite { quantity, value }) }
}

pub fn ensure_positive(quantity: &'static str, value: f64) -> Result<(), InvalidArgument> {
    ensure_finite(quantity, value)?;
    if value > 0.0 { Ok(()) } else { Err(InvalidArgument::NotPositive { quantity, value }) }
}
