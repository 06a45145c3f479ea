use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::builders::validator::{ConfigValidator, StandardValidator};
use crate::core::config::{ConfigManager, ConfigProvider, ExportFormat, FleetConfig, FleetOrder};
use crate::core::kind::VehicleKind;
use crate::factory::factories::factory_for;
use crate::factory::models::{CompanyModel, Paintable};

/// A serialisable snapshot of one fleet vehicle.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct VehicleRecord {
    pub family: VehicleKind,
    pub model: CompanyModel,
    pub engine: String,
    pub colour: String,
}

impl VehicleRecord {
    pub fn from_vehicle(vehicle: &dyn Paintable) -> Self {
        Self {
            family: vehicle.family(),
            model: vehicle.model(),
            engine: vehicle.engine().to_string(),
            colour: vehicle.colour().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct FleetExport {
    vehicles: Vec<VehicleRecord>,
}

/// The vehicles built from a configuration, plus the orders that were
/// skipped because they failed validation.
#[derive(Debug, Default)]
pub struct Fleet {
    vehicles: Vec<Box<dyn Paintable>>,
    skipped: Vec<FleetOrder>,
}

impl Fleet {
    pub fn vehicles(&self) -> &[Box<dyn Paintable>] {
        &self.vehicles
    }

    pub fn skipped(&self) -> &[FleetOrder] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn count_family(&self, family: VehicleKind) -> usize {
        self.vehicles.iter().filter(|v| v.family() == family).count()
    }

    pub fn records(&self) -> Vec<VehicleRecord> {
        self.vehicles
            .iter()
            .map(|v| VehicleRecord::from_vehicle(v.as_ref()))
            .collect()
    }

    /// Renders the fleet in `format`. Every format wraps the records in a
    /// top-level `vehicles` list so TOML can represent it too.
    pub fn render(&self, format: ExportFormat) -> Result<String> {
        let export = FleetExport {
            vehicles: self.records(),
        };
        let content = match format {
            ExportFormat::Json => {
                serde_json::to_string_pretty(&export).context("Failed to serialize to JSON")?
            }
            ExportFormat::Yaml => {
                serde_yaml::to_string(&export).context("Failed to serialize to YAML")?
            }
            ExportFormat::Toml => {
                toml::to_string_pretty(&export).context("Failed to serialize to TOML")?
            }
        };
        Ok(content)
    }

    pub fn export(&self, path: &Path, format: ExportFormat) -> Result<()> {
        let content = self.render(format)?;
        fs::write(path, content).context("Failed to write export file")?;
        info!(path = %path.display(), %format, vehicles = self.len(), "exported fleet");
        Ok(())
    }
}

/// Builds the fleet described by a configuration through the factories.
pub struct FleetAssembler {
    config_manager: ConfigManager,
}

impl FleetAssembler {
    pub fn new(config_manager: ConfigManager) -> Self {
        Self { config_manager }
    }

    pub fn config(&self) -> Result<FleetConfig> {
        self.config_manager.load_config()
    }

    pub fn assemble(&self) -> Result<Fleet> {
        let config = self.config()?;
        assemble_orders(&config.orders)
    }
}

/// Builds `quantity` vehicles per order and applies the order's overrides.
///
/// Every order goes through `StandardValidator` first. An order with issues
/// (unknown model, zero or oversized quantity, blank override) is skipped,
/// logged, and recorded in `Fleet::skipped`; the remaining orders are still
/// built.
pub fn assemble_orders(orders: &[FleetOrder]) -> Result<Fleet> {
    let validator = StandardValidator::new();
    let mut fleet = Fleet::default();

    for order in orders {
        let issues = validator.validate_order(order)?;
        if !issues.is_empty() {
            for issue in &issues {
                warn!(order = %order.label(), %issue, "skipping fleet order");
            }
            fleet.skipped.push(order.clone());
            continue;
        }

        let factory = factory_for(order.family);
        for _ in 0..order.quantity {
            let vehicle = match &order.model {
                Some(model) => factory.select_vehicle(model),
                None => Some(factory.build()),
            };
            let Some(mut vehicle) = vehicle else {
                warn!(order = %order.label(), "no such model, skipping order");
                fleet.skipped.push(order.clone());
                break;
            };

            if let Some(engine) = &order.engine {
                vehicle.set_engine(engine.clone());
            }
            if let Some(colour) = &order.colour {
                vehicle.set_colour(colour.clone());
            }
            debug!(
                model = %vehicle.model(),
                engine = vehicle.engine(),
                colour = vehicle.colour(),
                "built fleet vehicle"
            );
            fleet.vehicles.push(vehicle);
        }
    }

    Ok(fleet)
}
