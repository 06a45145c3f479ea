//! Vehicle patterns:
//! Two ways of putting a vehicle together, side by side.
//! A director walks a builder through a fixed list of steps
//! and ends up with an immutable car or van, while a factory
//! picks one of its company models by name and hands it over
//! ready to repaint. The fleet file ties the factories to a
//! config so a whole set of vehicles can be built and exported.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vehicle_patterns::core::config::{ExportFormat, FleetOrder};
use vehicle_patterns::core::kind::VehicleKind;
use vehicle_patterns::utils;

#[derive(Parser)]
#[command(name = "vehicle-patterns")]
#[command(about = "Build vehicles with the builder and factory method patterns")]
struct Cli {
    /// Fleet configuration file (defaults to ./vehicle-fleet.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default fleet configuration
    Init,
    /// Build a vehicle with its director and builder
    Build {
        #[arg(value_enum)]
        kind: VehicleKind,
    },
    /// Get a vehicle from a factory, by model name or the family default
    Select {
        #[arg(value_enum)]
        kind: VehicleKind,
        model: Option<String>,
    },
    /// Show every company model, painted and repainted
    Demo,
    /// Add an order to the fleet configuration
    Order {
        #[arg(value_enum)]
        kind: VehicleKind,
        model: Option<String>,
        #[arg(short, long, default_value_t = 1)]
        quantity: usize,
        #[arg(long)]
        engine: Option<String>,
        #[arg(long)]
        colour: Option<String>,
    },
    /// Build the configured fleet and print a report
    Fleet,
    /// Check the fleet configuration for problems
    Validate,
    /// Write the configured fleet to a file
    Export {
        #[arg(short, long)]
        output: PathBuf,
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,
    },
    /// Print an array of random integers in [min, max)
    RandomArray {
        #[arg(long, default_value_t = 10)]
        size: usize,
        #[arg(long, default_value_t = 0)]
        min: i32,
        #[arg(long, default_value_t = 100)]
        max: i32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init => utils::initialize_config(&utils::get_config_manager(cli.config)?),
        Commands::Build { kind } => utils::build_with_director(kind),
        Commands::Select { kind, model } => utils::select_vehicle(kind, model.as_deref()),
        Commands::Demo => utils::run_demo(),
        Commands::Order {
            kind,
            model,
            quantity,
            engine,
            colour,
        } => {
            let order = FleetOrder {
                family: kind,
                model,
                quantity,
                engine,
                colour,
            };
            utils::add_order(utils::get_config_manager(cli.config)?, order)
        }
        Commands::Fleet => utils::show_fleet(utils::get_config_manager(cli.config)?, cli.verbose > 0),
        Commands::Validate => utils::get_config_manager(cli.config)?.validate_config(),
        Commands::Export { output, format } => {
            utils::export_fleet(utils::get_config_manager(cli.config)?, &output, format)
        }
        Commands::RandomArray { size, min, max } => utils::print_random_array(size, min, max),
    }
}
