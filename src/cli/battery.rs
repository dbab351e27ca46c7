use clap::Parser;

use crate::{
    device::{Battery, Shape},
    prelude::*,
    quantity::{
        charge::MilliampHours,
        length::Millimeters,
        proportions::Percent,
        voltage::Volts,
    },
    tables::build_batteries_table,
};

#[derive(Parser)]
pub struct BatteryArgs {
    /// Battery chemistry, for example `li-ion` or `Ni-Mh`.
    #[clap(long, default_value = "li-ion", env = "BATTERY_KIND")]
    pub kind: String,

    /// Capacity in milliampere-hours.
    #[clap(long = "capacity-mah", env = "BATTERY_CAPACITY_MAH")]
    pub capacity: MilliampHours,

    /// Nominal voltage in volts.
    #[clap(long, env = "BATTERY_VOLTAGE")]
    pub voltage: Volts,

    /// Initial charge level in percent.
    #[clap(long = "charge-level-percent", default_value = "0", env = "BATTERY_CHARGE_LEVEL_PERCENT")]
    pub charge_level: Percent,

    #[clap(flatten)]
    pub dimensions: DimensionArgs,

    /// Charge by the given percentage after construction.
    #[clap(long = "charge-percent")]
    pub charge: Option<Percent>,

    /// Discharge by the given percentage after construction (and charging).
    #[clap(long = "discharge-percent")]
    pub discharge: Option<Percent>,
}

/// Battery dimensions in millimeters.
///
/// A diameter makes the battery cylindrical, a width and length make it flat;
/// both forms need a height.
#[derive(Copy, Clone, Parser)]
pub struct DimensionArgs {
    #[clap(long = "diameter-mm", conflicts_with_all = ["width", "length"])]
    pub diameter: Option<Millimeters>,

    #[clap(long = "width-mm", requires = "length")]
    pub width: Option<Millimeters>,

    #[clap(long = "length-mm", requires = "width")]
    pub length: Option<Millimeters>,

    #[clap(long = "height-mm")]
    pub height: Option<Millimeters>,
}

impl DimensionArgs {
    pub fn shape(self) -> Result<Shape> {
        match (self.diameter, self.width, self.length, self.height) {
            (None, None, None, None) => Ok(Shape::Unspecified),
            (Some(diameter), None, None, Some(height)) => Ok(Shape::Cylindrical { diameter, height }),
            (None, Some(width), Some(length), Some(height)) => {
                Ok(Shape::Flat { width, length, height })
            }
            (_, _, _, None) => bail!("the battery height is required together with other dimensions"),
            _ => bail!("either a diameter, or a width and length must be specified"),
        }
    }
}

#[instrument(skip_all)]
pub fn battery(args: &BatteryArgs) -> Result {
    let mut battery = Battery::builder()
        .kind(args.kind.as_str())
        .capacity(args.capacity)
        .voltage(args.voltage)
        .charge_level(args.charge_level)
        .shape(args.dimensions.shape()?)
        .build()
        .context("invalid battery")?;
    info!(%battery, "built");

    if let Some(amount) = args.charge {
        battery.charge(amount).context("failed to charge the battery")?;
    }
    if let Some(amount) = args.discharge {
        battery.discharge(amount).context("failed to discharge the battery")?;
    }

    println!("{}", build_batteries_table(&[battery]));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Parser)]
    struct TestArgs {
        #[clap(flatten)]
        dimensions: DimensionArgs,
    }

    fn shape(args: &[&str]) -> Result<Shape> {
        TestArgs::try_parse_from(std::iter::once("test").chain(args.iter().copied()))?
            .dimensions
            .shape()
    }

    #[test]
    fn test_shape() -> Result {
        assert_eq!(shape(&[])?, Shape::Unspecified);
        assert_eq!(
            shape(&["--diameter-mm", "18", "--height-mm", "65"])?,
            Shape::Cylindrical { diameter: Millimeters(18.0), height: Millimeters(65.0) },
        );
        assert_eq!(
            shape(&["--width-mm", "30", "--length-mm", "40", "--height-mm", "5"])?,
            Shape::Flat {
                width: Millimeters(30.0),
                length: Millimeters(40.0),
                height: Millimeters(5.0),
            },
        );
        Ok(())
    }

    #[test]
    fn test_shape_invalid() {
        assert!(shape(&["--diameter-mm", "18"]).is_err());
        assert!(shape(&["--width-mm", "30", "--height-mm", "5"]).is_err());
        assert!(shape(&["--diameter-mm", "18", "--width-mm", "30", "--length-mm", "40"]).is_err());
    }

    #[test]
    fn test_battery_args() -> Result {
        let args = BatteryArgs::try_parse_from([
            "battery",
            "--kind",
            "Ni-Mh",
            "--capacity-mah",
            "100",
            "--voltage",
            "12",
            "--charge-level-percent",
            "50",
            "--discharge-percent",
            "20",
        ])?;
        assert_eq!(args.capacity, MilliampHours(100.0));
        assert_eq!(args.discharge, Some(Percent(20.0)));
        battery(&args)
    }
}
