//! Energy-storage device models.
//!
//! Every model validates its parameters on construction and re-validates them on every mutation,
//! so a value at rest is always within its documented ranges.

mod battery;
mod capacitor;
mod charge_level;
mod error;
mod headphones;
mod shape;

pub use self::{
    battery::Battery,
    capacitor::Capacitor,
    charge_level::ChargeLevel,
    error::InvalidArgument,
    headphones::WirelessHeadphones,
    shape::Shape,
};
