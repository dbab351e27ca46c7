#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod cli;
mod device;
mod inventory;
mod prelude;
mod quantity;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Battery(args) => cli::battery(&args)?,
        Command::Capacitor(args) => cli::capacitor(&args)?,
        Command::Headphones(args) => cli::headphones(&args)?,
        Command::Inventory(args) => cli::inventory(&args)?,
        Command::Demo => cli::demo()?,
    }

    info!("done!");
    Ok(())
}
