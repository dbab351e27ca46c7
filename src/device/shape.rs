use std::fmt::{Display, Formatter};

use serde::Deserialize;

use crate::quantity::length::Millimeters;

/// Physical form factor of a battery.
///
/// Dimensions are descriptive only and never take part in energy calculations.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", deny_unknown_fields)]
pub enum Shape {
    #[default]
    Unspecified,

    Cylindrical {
        diameter: Millimeters,
        height: Millimeters,
    },

    Flat {
        width: Millimeters,
        length: Millimeters,
        height: Millimeters,
    },
}

impl Shape {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unspecified => "Battery",
            Self::Cylindrical { .. } => "CylindricalBattery",
            Self::Flat { .. } => "FlatBattery",
        }
    }
}

/// Renders the dimensions only, for example: `⌀18 mm × 65 mm`.
impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unspecified => Ok(()),
            Self::Cylindrical { diameter, height } => write!(f, "⌀{diameter} × {height}"),
            Self::Flat { width, length, height } => write!(f, "{width} × {length} × {height}"),
        }
    }
}
