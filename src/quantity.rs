#[macro_use]
pub mod macros;

pub mod capacitance;
pub mod charge;
pub mod energy;
pub mod length;
pub mod power;
pub mod proportions;
pub mod resistance;
pub mod voltage;

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{charge::MilliampHours, proportions::Percent, voltage::Volts};

    #[test]
    fn test_ordering() {
        assert!(Volts(1.5) < Volts(3.7));
        assert_eq!(Volts(1.5).max(Volts(3.7)), Volts(3.7));
        assert_eq!(Percent(20.0) + Percent(30.0), Percent(50.0));
    }

    #[test]
    fn test_round_to() {
        assert_abs_diff_eq!(Volts(0.600_000_000_000_000_1).round_to(15).0, 0.6);
        assert_abs_diff_eq!(Volts(1.23456).round_to(2).0, 1.23);
        assert_eq!(Volts(f64::MAX).round_to(16), Volts(f64::MAX));
        assert_eq!(Volts(7.703_966_799_999_999).round_to(16), Volts(7.703_966_799_999_999));
    }

    #[test]
    fn test_display() {
        assert_eq!(MilliampHours(3000.0).to_string(), "3000 mAh");
        assert_eq!(format!("{:.2}", Volts(3.7)), "3.70 V");
        assert_eq!(format!("{:?}", Percent(50.0)), "50.0%");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("1.2".parse::<Volts>().unwrap(), Volts(1.2));
        assert!("volts".parse::<Volts>().is_err());
    }
}
