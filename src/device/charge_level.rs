use crate::{
    device::error::{InvalidArgument, ensure_finite},
    quantity::proportions::Percent,
};

/// State of charge, always within `0..=100%`.
#[must_use]
#[derive(Copy, Clone, Debug, Default, Eq, Ord, PartialEq, PartialOrd, derive_more::Display)]
pub struct ChargeLevel(Percent);

impl ChargeLevel {
    pub const EMPTY: Self = Self(Percent::ZERO);
    pub const FULL: Self = Self(Percent::FULL);

    pub fn try_new(level: Percent) -> Result<Self, InvalidArgument> {
        if level.is_finite() && (Self::EMPTY.0..=Self::FULL.0).contains(&level) {
            Ok(Self(level))
        } else {
            Err(InvalidArgument::ChargeLevelOutOfRange { level })
        }
    }

    pub const fn percent(self) -> Percent {
        self.0
    }

    pub fn charged(self, amount: Percent) -> Result<Self, InvalidArgument> {
        Self::ensure_amount(amount)?;
        let level = self.0 + amount;
        if level > Percent::FULL {
            return Err(InvalidArgument::Overcharge { level: self.0, amount });
        }
        Ok(Self(level))
    }

    pub fn discharged(self, amount: Percent) -> Result<Self, InvalidArgument> {
        Self::ensure_amount(amount)?;
        if amount > self.0 {
            return Err(InvalidArgument::Overdischarge { level: self.0, amount });
        }
        Ok(Self(self.0 - amount))
    }

    fn ensure_amount(amount: Percent) -> Result<(), InvalidArgument> {
        ensure_finite("charge amount", amount.0)?;
        if amount > Percent::ZERO {
            Ok(())
        } else {
            Err(InvalidArgument::NonPositiveAmount { amount })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new() {
        assert_eq!(ChargeLevel::try_new(Percent(0.0)), Ok(ChargeLevel::EMPTY));
        assert_eq!(ChargeLevel::try_new(Percent(100.0)), Ok(ChargeLevel::FULL));
        assert!(ChargeLevel::try_new(Percent(-0.5)).is_err());
        assert!(ChargeLevel::try_new(Percent(100.5)).is_err());
        assert!(ChargeLevel::try_new(Percent(f64::NAN)).is_err());
    }

    #[test]
    fn test_charged() -> Result<(), InvalidArgument> {
        let level = ChargeLevel::EMPTY.charged(Percent(50.0))?;
        assert_eq!(level.percent(), Percent(50.0));
        assert_eq!(level.charged(Percent(50.0))?, ChargeLevel::FULL);
        assert_eq!(
            level.charged(Percent(51.0)),
            Err(InvalidArgument::Overcharge { level: Percent(50.0), amount: Percent(51.0) }),
        );
        assert_eq!(
            level.charged(Percent(0.0)),
            Err(InvalidArgument::NonPositiveAmount { amount: Percent(0.0) }),
        );
        assert!(level.charged(Percent(f64::INFINITY)).is_err());
        Ok(())
    }

    #[test]
    fn test_discharged() -> Result<(), InvalidArgument> {
        let level = ChargeLevel::try_new(Percent(50.0))?;
        assert_eq!(level.discharged(Percent(20.0))?.percent(), Percent(30.0));
        assert_eq!(level.discharged(Percent(50.0))?, ChargeLevel::EMPTY);
        assert_eq!(
            level.discharged(Percent(60.0)),
            Err(InvalidArgument::Overdischarge { level: Percent(50.0), amount: Percent(60.0) }),
        );
        assert_eq!(
            level.discharged(Percent(-5.0)),
            Err(InvalidArgument::NonPositiveAmount { amount: Percent(-5.0) }),
        );
        Ok(())
    }
}
