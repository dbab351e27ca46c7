//! Device inventory stored as TOML.
//!
//! ```toml
//! [[batteries]]
//! kind = "li-ion"
//! capacity = 3000
//! voltage = 3.7
//! shape = { type = "cylindrical", diameter = 18, height = 65 }
//!
//! [[capacitors]]
//! capacitance = 1e-7
//! voltage_rating = 350
//!
//! [[headphones]]
//! brand = "Edifier"
//! model = "W820NB Plus"
//! impedance = 32
//! ```

use std::{fs, path::Path, str::FromStr};

use serde::Deserialize;

use crate::{
    device::{Battery, Capacitor, InvalidArgument, Shape, WirelessHeadphones},
    prelude::*,
    quantity::{
        capacitance::Farads,
        charge::{Coulombs, MilliampHours},
        proportions::Percent,
        resistance::Ohms,
        voltage::Volts,
    },
};

#[must_use]
#[derive(Debug, Default)]
pub struct Inventory {
    pub batteries: Vec<Battery>,
    pub capacitors: Vec<Capacitor>,
    pub headphones: Vec<WirelessHeadphones>,
}

impl Inventory {
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let inventory: Self =
            contents.parse().with_context(|| format!("failed to load `{}`", path.display()))?;
        info!(
            n_batteries = inventory.batteries.len(),
            n_capacitors = inventory.capacitors.len(),
            n_headphones = inventory.headphones.len(),
            "loaded",
        );
        Ok(inventory)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.batteries.is_empty() && self.capacitors.is_empty() && self.headphones.is_empty()
    }
}

impl FromStr for Inventory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let document: Document = toml::from_str(s).context("malformed inventory")?;
        Ok(Self {
            batteries: validate("battery", document.batteries, BatteryEntry::try_into_battery)?,
            capacitors: validate(
                "capacitor",
                document.capacitors,
                CapacitorEntry::try_into_capacitor,
            )?,
            headphones: validate(
                "headphones",
                document.headphones,
                HeadphonesEntry::try_into_headphones,
            )?,
        })
    }
}

fn validate<E, T>(
    section: &str,
    entries: Vec<E>,
    convert: impl Fn(E) -> Result<T, InvalidArgument>,
) -> Result<Vec<T>> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| convert(entry).with_context(|| format!("invalid {section} #{index}")))
        .collect()
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Document {
    #[serde(default)]
    batteries: Vec<BatteryEntry>,

    #[serde(default)]
    capacitors: Vec<CapacitorEntry>,

    #[serde(default)]
    headphones: Vec<HeadphonesEntry>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct BatteryEntry {
    kind: String,
    capacity: MilliampHours,
    voltage: Volts,

    #[serde(default)]
    charge_level: Percent,

    #[serde(default)]
    shape: Shape,
}

impl BatteryEntry {
    fn try_into_battery(self) -> Result<Battery, InvalidArgument> {
        Battery::builder()
            .kind(self.kind)
            .capacity(self.capacity)
            .voltage(self.voltage)
            .charge_level(self.charge_level)
            .shape(self.shape)
            .build()
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CapacitorEntry {
    capacitance: Farads,
    voltage_rating: Volts,

    #[serde(default)]
    charge: Coulombs,
}

impl CapacitorEntry {
    fn try_into_capacitor(self) -> Result<Capacitor, InvalidArgument> {
        Capacitor::builder()
            .capacitance(self.capacitance)
            .voltage_rating(self.voltage_rating)
            .charge(self.charge)
            .build()
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct HeadphonesEntry {
    brand: String,
    model: String,
    impedance: Ohms,

    #[serde(default)]
    charge_level: Percent,
}

impl HeadphonesEntry {
    fn try_into_headphones(self) -> Result<WirelessHeadphones, InvalidArgument> {
        WirelessHeadphones::builder()
            .brand(self.brand)
            .model(self.model)
            .impedance(self.impedance)
            .charge_level(self.charge_level)
            .build()
    }
}
