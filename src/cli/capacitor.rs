use clap::Parser;

use crate::{
    device::Capacitor,
    prelude::*,
    quantity::{capacitance::Farads, charge::Coulombs, voltage::Volts},
    tables::build_capacitors_table,
};

#[derive(Parser)]
pub struct CapacitorArgs {
    /// Capacitance in farads, for example `1e-7` for 100 nF.
    #[clap(long = "capacitance-farads", env = "CAPACITOR_CAPACITANCE_FARADS")]
    pub capacitance: Farads,

    /// Maximum allowed voltage in volts.
    #[clap(long = "voltage-rating", env = "CAPACITOR_VOLTAGE_RATING")]
    pub voltage_rating: Volts,

    /// Initial charge in coulombs.
    #[clap(long = "charge-coulombs", default_value = "0", env = "CAPACITOR_CHARGE_COULOMBS")]
    pub charge: Coulombs,

    /// Charge the capacitor at the given voltage.
    #[clap(long = "charge-at-volts")]
    pub charge_at: Option<Volts>,

    /// Report the energy stored at the given voltage.
    #[clap(long = "energy-at-volts")]
    pub energy_at: Option<Volts>,
}

#[instrument(skip_all)]
pub fn capacitor(args: &CapacitorArgs) -> Result {
    let mut capacitor = Capacitor::builder()
        .capacitance(args.capacitance)
        .voltage_rating(args.voltage_rating)
        .charge(args.charge)
        .build()
        .context("invalid capacitor")?;
    info!(?capacitor, "built");

    if let Some(voltage) = args.charge_at {
        capacitor.to_charge(voltage).context("failed to charge the capacitor")?;
    }
    if let Some(voltage) = args.energy_at {
        let energy =
            capacitor.energy_stored(voltage).context("failed to compute the stored energy")?;
        println!("Energy stored at {voltage}: {energy}");
    }

    println!("{}", build_capacitors_table(&[capacitor]));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacitor_over_rating() -> Result {
        let args = CapacitorArgs::try_parse_from([
            "capacitor",
            "--capacitance-farads",
            "0.001",
            "--voltage-rating",
            "10",
            "--energy-at-volts",
            "12",
        ])?;
        let error = capacitor(&args).unwrap_err();
        assert_eq!(error.to_string(), "failed to compute the stored energy");
        assert_eq!(error.root_cause().to_string(), "voltage must be between 0 V and 10 V, got 12 V");
        Ok(())
    }

    #[test]
    fn test_capacitor_charge_and_energy() -> Result {
        let args = CapacitorArgs::try_parse_from([
            "capacitor",
            "--capacitance-farads",
            "0.001",
            "--voltage-rating",
            "10",
            "--charge-at-volts",
            "5",
            "--energy-at-volts",
            "5",
        ])?;
        capacitor(&args)
    }
}
