use clap::Parser;

use crate::{
    device::WirelessHeadphones,
    prelude::*,
    quantity::{proportions::Percent, resistance::Ohms},
    tables::build_headphones_table,
};

#[derive(Parser)]
pub struct HeadphonesArgs {
    #[clap(long, env = "HEADPHONES_BRAND")]
    pub brand: String,

    #[clap(long, env = "HEADPHONES_MODEL")]
    pub model: String,

    /// Impedance in ohms.
    #[clap(long = "impedance-ohms", env = "HEADPHONES_IMPEDANCE_OHMS")]
    pub impedance: Ohms,

    /// Initial charge level in percent.
    #[clap(long = "charge-level-percent", default_value = "0", env = "HEADPHONES_CHARGE_LEVEL_PERCENT")]
    pub charge_level: Percent,

    /// Charge by the given percentage after construction.
    #[clap(long = "charge-percent")]
    pub charge: Option<Percent>,

    /// Name of the device to connect the headphones to.
    #[clap(long)]
    pub connect: Option<String>,
}

#[instrument(skip_all)]
pub fn headphones(args: &HeadphonesArgs) -> Result {
    let (headphones, connection) = build_and_connect(args)?;
    if let Some(connection) = connection {
        println!("{connection}");
    }
    println!("{}", build_headphones_table(&[headphones]));
    Ok(())
}

/// Build and charge the headphones, then report the connection if a device is given.
fn build_and_connect(args: &HeadphonesArgs) -> Result<(WirelessHeadphones, Option<String>)> {
    let mut headphones = WirelessHeadphones::builder()
        .brand(args.brand.as_str())
        .model(args.model.as_str())
        .impedance(args.impedance)
        .charge_level(args.charge_level)
        .build()
        .context("invalid headphones")?;

    if let Some(amount) = args.charge {
        headphones.charge(amount).context("failed to charge the headphones")?;
    }
    let connection = args.connect.as_deref().map(|device| headphones.connect(device));
    Ok((headphones, connection))
}
