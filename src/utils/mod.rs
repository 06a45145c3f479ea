use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::builders::director::build_vehicle;
use crate::builders::reporter::{ConsoleReporter, FleetReporter};
use crate::core::config::{ConfigManager, ConfigProvider, ExportFormat, FleetOrder};
use crate::core::fleet::FleetAssembler;
use crate::core::kind::VehicleKind;
use crate::factory::factories::factory_for;
use crate::factory::models::{BoxVan, Paintable, Sport, showroom};
use crate::studies::arrays::RandomIntArray;

pub fn initialize_config(config_manager: &ConfigManager) -> Result<()> {
    let path = config_manager.config_path().display();
    if config_manager.initialize()? {
        println!("✓ Wrote default fleet configuration to {path}");
        println!("Run 'vehicle-patterns fleet' to build it");
    } else {
        println!("Configuration already exists at {path}");
    }
    Ok(())
}

/// Runs the director for `kind` and prints what it built.
pub fn build_with_director(kind: VehicleKind) -> Result<()> {
    let vehicle = build_vehicle(kind)?;
    println!("{vehicle}");
    Ok(())
}

/// Asks the family's factory for `model` (or its default) and shows it.
pub fn select_vehicle(kind: VehicleKind, model: Option<&str>) -> Result<()> {
    let factory = factory_for(kind);
    let vehicle = match model {
        Some(key) => match factory.select_vehicle(key) {
            Some(vehicle) => vehicle,
            None => anyhow::bail!(
                "No {} model named '{}' (known models: {})",
                kind.as_str().to_lowercase(),
                key,
                factory.models().join(", ")
            ),
        },
        None => factory.build(),
    };

    describe(vehicle.as_ref())?;
    Ok(())
}

fn describe(vehicle: &dyn Paintable) -> Result<()> {
    println!(
        "{} - Engine: {}, Colour: {}",
        vehicle.model(),
        vehicle.engine(),
        vehicle.colour()
    );
    vehicle.paint()?;
    Ok(())
}

/// Walks through every company model: defaults, painting through the shared
/// trait, and changing properties after construction.
pub fn run_demo() -> Result<()> {
    println!("{}\n", "=== Company Vehicle Demo ===".cyan().bold());

    for family in [VehicleKind::Car, VehicleKind::Van] {
        println!("{}", format!("--- {family} Models ---").yellow());
        for vehicle in showroom().iter().filter(|v| v.family() == family) {
            describe(vehicle.as_ref())?;
        }
        println!();
    }

    println!("{}", "--- Painting Through Paintable ---".yellow());
    for vehicle in showroom() {
        print!("{}: ", vehicle.model());
        vehicle.paint()?;
    }
    println!();

    println!("{}", "--- Property Modification ---".yellow());
    let mut sport = Sport::new();
    println!("Original colour: {}", sport.colour);
    sport.paint()?;

    sport.colour = "Metallic Blue".to_string();
    println!("New colour: {}", sport.colour);
    sport.paint()?;

    let mut box_van = BoxVan::new();
    box_van.engine = "Electric".to_string();
    box_van.colour = "Green".to_string();
    println!(
        "Custom BoxVan - Engine: {}, Colour: {}",
        box_van.engine, box_van.colour
    );
    box_van.paint()?;

    Ok(())
}

pub fn show_fleet(config_manager: ConfigManager, verbose: bool) -> Result<()> {
    let assembler = FleetAssembler::new(config_manager);
    let verbose = verbose || assembler.config()?.settings.verbose;
    let fleet = assembler.assemble()?;
    ConsoleReporter::new().generate_fleet_report(&fleet, verbose)
}

pub fn add_order(config_manager: ConfigManager, order: FleetOrder) -> Result<()> {
    let label = order.label();
    let quantity = order.quantity;
    config_manager.add_order(order)?;
    println!("✓ Added {quantity} x {label} to the fleet");
    Ok(())
}

/// Exports the assembled fleet, defaulting to the configured format.
pub fn export_fleet(
    config_manager: ConfigManager,
    output: &Path,
    format: Option<ExportFormat>,
) -> Result<()> {
    let format = match format {
        Some(format) => format,
        None => config_manager.load_config()?.settings.export_format,
    };
    let fleet = FleetAssembler::new(config_manager).assemble()?;
    fleet
        .export(output, format)
        .with_context(|| format!("Failed to export fleet to {}", output.display()))?;
    println!(
        "✓ Exported {} vehicles to {} as {format}",
        fleet.len(),
        output.display()
    );
    Ok(())
}

pub fn print_random_array(size: usize, min: i32, max: i32) -> Result<()> {
    let values = Vec::<i32>::make_big_random_int_array(size, min, max)?;
    let rendered: Vec<String> = values.iter().map(i32::to_string).collect();
    println!("[{}]", rendered.join(", "));
    Ok(())
}

// Helper function to create ConfigManager instance
pub fn get_config_manager(config_path: Option<PathBuf>) -> Result<ConfigManager> {
    match config_path {
        Some(path) => Ok(ConfigManager::new_at(path)),
        None => ConfigManager::new(),
    }
}
