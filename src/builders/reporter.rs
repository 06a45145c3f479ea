use anyhow::Result;
use colored::Colorize;
use std::io;

use crate::core::fleet::Fleet;
use crate::core::kind::VehicleKind;
use crate::factory::models::Paintable;

pub trait FleetReporter {
    fn generate_fleet_report(&self, fleet: &Fleet, verbose: bool) -> Result<()>;
}

/// A concrete implementation of `FleetReporter` that prints the report to the console.
///
/// This is the reporter used by the `fleet` command.
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Constructs a new `ConsoleReporter` instance.
    pub fn new() -> Self {
        Self
    }

    /// Formats the one-line summary of a vehicle, e.g.
    /// `Sport - Engine: V12, Colour: Yellow`.
    fn format_vehicle(&self, vehicle: &dyn Paintable) -> String {
        format!(
            "{} - Engine: {}, Colour: {}",
            vehicle.model(),
            vehicle.engine(),
            vehicle.colour()
        )
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl FleetReporter for ConsoleReporter {
    /// Generates and prints the full fleet report to the standard output.
    fn generate_fleet_report(&self, fleet: &Fleet, verbose: bool) -> Result<()> {
        println!("{}", "🚗 Vehicle Fleet Report".cyan().bold());
        println!("=======================");

        if fleet.is_empty() && fleet.skipped().is_empty() {
            println!("No vehicles configured.");
            return Ok(());
        }

        for vehicle in fleet.vehicles() {
            let icon = match vehicle.family() {
                VehicleKind::Car => "🚗",
                VehicleKind::Van => "🚐",
            };
            println!("{icon} {}", self.format_vehicle(vehicle.as_ref()));

            if verbose {
                print!("  └─ ");
                vehicle.paint_to(&mut io::stdout())?;
            }
        }

        println!("\n{}", "📈 Summary:".bold());
        println!("  Total vehicles: {}", fleet.len());
        println!("  Cars: {}", fleet.count_family(VehicleKind::Car));
        println!("  Vans: {}", fleet.count_family(VehicleKind::Van));

        if !fleet.skipped().is_empty() {
            println!(
                "\n{}",
                format!("⚠️  {} order(s) skipped, see warnings above:", fleet.skipped().len()).yellow()
            );
            for order in fleet.skipped() {
                println!("  - {}", order.label());
            }
        }

        Ok(())
    }
}
