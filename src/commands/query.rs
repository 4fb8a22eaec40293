//! Query (read-only) command handlers.

use super::{open_device, CommandResult};
use evprobe_device::{Device, Feature};
use evprobe_transport::protocol::ev;
use std::collections::BTreeSet;
use std::path::Path;

fn names(features: &BTreeSet<Feature<'_>>) -> String {
    features
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Dump everything the device reports about itself
pub fn info(path: &Path) -> CommandResult {
    let device = open_device(path)?;
    let identity = device.bus_identity()?;

    println!("Device:    {}", device.path().display());
    println!("Interface: {}", device.interface_version()?);
    println!(
        "Bus:       0x{:02X} ({})",
        identity.bus_type,
        device.bus_type_name()?.unwrap_or("unknown")
    );
    println!("Vendor:    0x{:04X}", identity.vendor);
    println!("Product:   0x{:04X}", identity.product);
    println!("Version:   0x{:04X}", identity.version);
    println!("Name:      {}", device.name()?);
    println!("Topology:  {}", device.topology()?);
    println!("Unique ID: {}", device.unique_id()?);

    let categories = device.supported_categories()?;
    let supports = |code: u16| categories.iter().any(|c| c.code() == code);

    println!();
    if supports(ev::KEY) {
        println!("Active keys:   [{}]", names(&device.activated_keys()?));
    }
    if supports(ev::LED) {
        println!("Active LEDs:   [{}]", names(&device.activated_leds()?));
    }
    if supports(ev::SND) {
        println!("Active sounds: [{}]", names(&device.activated_sounds()?));
    }
    if supports(ev::REP) {
        let repeat = device.repeat_settings()?;
        println!(
            "Autorepeat:    delay {}ms, period {}ms",
            repeat.delay_ms, repeat.period_ms
        );
    }
    if supports(ev::ABS) {
        print_axes(&device);
    }

    println!();
    for category in &categories {
        match category.supported_features() {
            Ok(features) => println!("{category}: {}", names(&features)),
            Err(e) => println!("{category}: <{e}>"),
        }
    }
    Ok(())
}

fn print_axes(device: &Device) {
    // X and Y only, as a sample of the axis parameters
    for axis in [0x00, 0x01] {
        let name = device.category(ev::ABS).feature(axis).name();
        match device.axis_parameters(axis) {
            Ok(p) => println!(
                "Axis {name}: value {} range {}..{} fuzz {} flat {} resolution {}",
                p.value, p.minimum, p.maximum, p.fuzz, p.flat, p.resolution
            ),
            Err(e) => println!("Axis {name}: <{e}>"),
        }
    }
}
