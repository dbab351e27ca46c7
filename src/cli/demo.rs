use crate::{
    device::{Battery, Capacitor, InvalidArgument, Shape, WirelessHeadphones},
    prelude::*,
    quantity::{
        capacitance::Farads,
        charge::{Coulombs, MilliampHours},
        length::Millimeters,
        proportions::Percent,
        resistance::Ohms,
        voltage::Volts,
    },
    tables::{build_batteries_table, build_capacitors_table, build_headphones_table},
};

/// Build the sample devices and report every malformed one.
#[instrument(skip_all)]
pub fn demo() -> Result {
    let batteries = vec![
        Battery::builder()
            .kind("Ni-Mh")
            .capacity(MilliampHours(600.0))
            .voltage(Volts(1.2))
            .charge_level(Percent(60.0))
            .build()?,
        Battery::builder()
            .kind("li-ion")
            .capacity(MilliampHours(3000.0))
            .voltage(Volts(3.7))
            .shape(Shape::Cylindrical { diameter: Millimeters(18.0), height: Millimeters(65.0) })
            .build()?,
        Battery::builder()
            .kind("li-po")
            .capacity(MilliampHours(2000.0))
            .voltage(Volts(3.7))
            .charge_level(Percent(85.0))
            .shape(Shape::Flat {
                width: Millimeters(34.0),
                length: Millimeters(50.0),
                height: Millimeters(10.0),
            })
            .build()?,
    ];
    let capacitors = vec![
        Capacitor::builder().capacitance(Farads(100e-9)).voltage_rating(Volts(350.0)).build()?,
    ];
    let mut headphones = WirelessHeadphones::builder()
        .brand("Edifier")
        .model("W820NB Plus")
        .impedance(Ohms(32.0))
        .build()?;
    headphones.charge(Percent(50.0))?;
    info!("{}", headphones.connect("Vivo Y31(2021)"));

    println!("{}", build_batteries_table(&batteries));
    println!("{}", build_capacitors_table(&capacitors));
    println!("{}", build_headphones_table(&[headphones]));

    let n_rejected = malformed().filter_map(|result| result.err()).inspect(|error| warn!("{error}")).count();
    info!(n_rejected, "validated the malformed samples");
    Ok(())
}

fn malformed() -> impl Iterator<Item = Result<(), InvalidArgument>> {
    [
        Battery::builder()
            .kind("li-ion")
            .capacity(MilliampHours(3000.0))
            .voltage(Volts(3.7))
            .charge_level(Percent(220.0))
            .build()
            .map(drop),
        WirelessHeadphones::builder()
            .brand("Phillips")
            .model("TAT1108")
            .impedance(Ohms(-16.0))
            .build()
            .map(drop),
        Capacitor::builder()
            .capacitance(Farads(50e-6))
            .voltage_rating(Volts(500.0))
            .charge(Coulombs(0.05))
            .build()
            .map(drop),
    ]
    .into_iter()
}
