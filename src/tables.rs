use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    device::{Battery, Capacitor, ChargeLevel, WirelessHeadphones},
    quantity::proportions::Percent,
};

pub fn build_batteries_table(batteries: &[Battery]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Type", "Kind", "Capacity", "Voltage", "Charge", "Energy", "Power", "Dimensions",
    ]);
    for battery in batteries {
        table.add_row(vec![
            Cell::new(battery.shape().name()).add_attribute(Attribute::Dim),
            Cell::new(battery.kind()),
            Cell::new(battery.capacity()).set_alignment(CellAlignment::Right),
            Cell::new(battery.voltage()).set_alignment(CellAlignment::Right),
            charge_level_cell(battery.charge_level()),
            Cell::new(format!("{:.3}", battery.energy())).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.3}", battery.power())).set_alignment(CellAlignment::Right),
            Cell::new(battery.shape()).add_attribute(Attribute::Dim),
        ]);
    }
    table
}

pub fn build_capacitors_table(capacitors: &[Capacitor]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Capacitance", "Rating", "Charge", "Max charge", "Max energy"]);
    for capacitor in capacitors {
        let max_energy = capacitor.capacitance().energy_at(capacitor.voltage_rating());
        table.add_row(vec![
            Cell::new(format!("{:e} F", capacitor.capacitance().0)),
            Cell::new(capacitor.voltage_rating()).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:e} C", capacitor.charge().0)).fg(
                if capacitor.charge() >= capacitor.max_charge() {
                    Color::Green
                } else {
                    Color::Reset
                },
            ),
            Cell::new(format!("{:e} C", capacitor.max_charge().0)).add_attribute(Attribute::Dim),
            Cell::new(format!("{:e} J", max_energy.0)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_headphones_table(headphones: &[WirelessHeadphones]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Brand", "Model", "Impedance", "Charge"]);
    for headphones in headphones {
        table.add_row(vec![
            Cell::new(headphones.brand()),
            Cell::new(headphones.model()),
            Cell::new(headphones.impedance()).set_alignment(CellAlignment::Right),
            charge_level_cell(headphones.charge_level()),
        ]);
    }
    table
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

fn charge_level_cell(charge_level: ChargeLevel) -> Cell {
    let percent = charge_level.percent();
    Cell::new(charge_level).set_alignment(CellAlignment::Right).fg(if percent <= Percent(20.0) {
        Color::Red
    } else if percent < Percent(80.0) {
        Color::DarkYellow
    } else {
        Color::Green
    })
}
