use std::path::PathBuf;

use clap::Parser;

use crate::{
    inventory::Inventory,
    prelude::*,
    tables::{build_batteries_table, build_capacitors_table, build_headphones_table},
};

#[derive(Parser)]
pub struct InventoryArgs {
    #[clap(long, env = "INVENTORY_PATH", default_value = "inventory.toml")]
    pub path: PathBuf,
}

pub fn inventory(args: &InventoryArgs) -> Result {
    let inventory = Inventory::read_from(&args.path)?;
    if inventory.is_empty() {
        warn!("the inventory is empty");
        return Ok(());
    }
    if !inventory.batteries.is_empty() {
        println!("{}", build_batteries_table(&inventory.batteries));
    }
    if !inventory.capacitors.is_empty() {
        println!("{}", build_capacitors_table(&inventory.capacitors));
    }
    if !inventory.headphones.is_empty() {
        println!("{}", build_headphones_table(&inventory.headphones));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_missing_file() {
        let args = InventoryArgs { path: PathBuf::from("/nonexistent/inventory.toml") };
        let error = inventory(&args).unwrap_err();
        assert_eq!(error.to_string(), "failed to read `/nonexistent/inventory.toml`");
        assert!(error.root_cause().downcast_ref::<std::io::Error>().is_some());
    }
}
