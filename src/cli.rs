mod battery;
mod capacitor;
mod demo;
mod headphones;
mod inventory;

use clap::{Parser, Subcommand};

pub use self::{
    battery::{BatteryArgs, battery},
    capacitor::{CapacitorArgs, capacitor},
    demo::demo,
    headphones::{HeadphonesArgs, headphones},
    inventory::{InventoryArgs, inventory},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build a battery, optionally charge or discharge it, and show its energy and power.
    #[clap(name = "battery")]
    Battery(Box<BatteryArgs>),

    /// Build a capacitor, optionally charge it, and show the stored energy.
    #[clap(name = "capacitor")]
    Capacitor(Box<CapacitorArgs>),

    /// Build wireless headphones, optionally charge and connect them.
    #[clap(name = "headphones")]
    Headphones(Box<HeadphonesArgs>),

    /// Load and validate a device inventory file.
    #[clap(name = "inventory")]
    Inventory(InventoryArgs),

    /// Build a few sample devices and report the validation errors of malformed ones.
    #[clap(name = "demo")]
    Demo,
}
