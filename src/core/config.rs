use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::builders::validator::{ConfigValidator, StandardValidator};
use crate::core::kind::VehicleKind;

/// File name used when no `--config` path is given.
pub const DEFAULT_CONFIG_FILE: &str = "vehicle-fleet.toml";

pub const CONFIG_VERSION: &str = "1.0";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Yaml => write!(f, "yaml"),
            ExportFormat::Toml => write!(f, "toml"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct GlobalSettings {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub export_format: ExportFormat,
}

/// One line of the fleet: `quantity` vehicles from `family`'s factory.
///
/// Without a `model` the factory's default is built. `engine` and `colour`
/// override the model defaults on every vehicle of the order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FleetOrder {
    pub family: VehicleKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colour: Option<String>,
}

fn default_quantity() -> usize {
    1
}

impl FleetOrder {
    pub fn new(family: VehicleKind, model: Option<&str>) -> Self {
        Self {
            family,
            model: model.map(str::to_string),
            quantity: default_quantity(),
            engine: None,
            colour: None,
        }
    }

    pub fn with_quantity(mut self, quantity: usize) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = Some(engine.into());
        self
    }

    pub fn with_colour(mut self, colour: impl Into<String>) -> Self {
        self.colour = Some(colour.into());
        self
    }

    /// Human-readable label such as `car/sport` or `van/(default)`.
    pub fn label(&self) -> String {
        let family = self.family.as_str().to_lowercase();
        match &self.model {
            Some(model) => format!("{family}/{model}"),
            None => format!("{family}/(default)"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FleetConfig {
    pub version: String,
    #[serde(default)]
    pub settings: GlobalSettings,
    #[serde(default)]
    pub orders: Vec<FleetOrder>,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            settings: GlobalSettings::default(),
            orders: vec![
                FleetOrder::new(VehicleKind::Car, Some("saloon")),
                FleetOrder::new(VehicleKind::Car, Some("coupe")),
                FleetOrder::new(VehicleKind::Car, Some("sport")).with_colour("Metallic Blue"),
                FleetOrder::new(VehicleKind::Van, Some("boxvan"))
                    .with_engine("Electric")
                    .with_colour("Green"),
                FleetOrder::new(VehicleKind::Van, Some("pickup")),
            ],
        }
    }
}

pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Uses `vehicle-fleet.toml` in the current directory.
    pub fn new() -> Result<Self> {
        let current_dir = std::env::current_dir().context("Failed to read current directory")?;
        Ok(Self::new_at(current_dir.join(DEFAULT_CONFIG_FILE)))
    }

    pub fn new_at(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// Writes the default configuration unless a file already exists.
    /// Returns whether a file was written.
    pub fn initialize(&self) -> Result<bool> {
        if self.config_path.exists() {
            return Ok(false);
        }

        let default_config = FleetConfig::default();
        self.save_config(&default_config)?;
        info!(path = %self.config_path.display(), "wrote default fleet config");
        Ok(true)
    }

    pub fn validate_config(&self) -> Result<()> {
        let config = self.load_config()?;
        let validator = StandardValidator::new();
        let issues = validator.validate_config(&config)?;

        if issues.is_empty() {
            println!("✓ Configuration is valid.");
            Ok(())
        } else {
            println!("⚠️  Found issues in configuration:");
            for issue in issues {
                println!("  - {issue}");
            }
            anyhow::bail!("Configuration validation failed.");
        }
    }

    /// Appends `order` to the configuration file.
    pub fn add_order(&self, order: FleetOrder) -> Result<()> {
        let mut config = self.load_config()?;
        let issues = StandardValidator::new().validate_order(&order)?;
        if !issues.is_empty() {
            anyhow::bail!("Invalid order {}: {}", order.label(), issues.join("; "));
        }

        info!(order = %order.label(), quantity = order.quantity, "adding fleet order");
        config.orders.push(order);
        self.save_config(&config)?;
        Ok(())
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}

pub trait ConfigProvider {
    fn load_config(&self) -> Result<FleetConfig>;
    fn save_config(&self, config: &FleetConfig) -> Result<()>;
    fn get_config_path(&self) -> Result<PathBuf>;
}

impl ConfigProvider for ConfigManager {
    fn load_config(&self) -> Result<FleetConfig> {
        if !self.config_path.exists() {
            return Ok(FleetConfig::default());
        }

        let content =
            fs::read_to_string(&self.config_path).context("Failed to read config file")?;

        toml::from_str(&content).context("Failed to parse config file")
    }

    fn save_config(&self, config: &FleetConfig) -> Result<()> {
        let content = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, content).context("Failed to write config file")?;

        Ok(())
    }

    fn get_config_path(&self) -> Result<PathBuf> {
        Ok(self.config_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new_at(dir.path().join("absent.toml"));
        assert_eq!(manager.load_config().unwrap(), FleetConfig::default());
    }

    #[test]
    fn test_initialize_writes_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        let manager = ConfigManager::new_at(&path);

        assert!(manager.initialize().unwrap());
        assert!(path.exists());

        fs::write(&path, "version = \"1.0\"\n").unwrap();
        assert!(!manager.initialize().unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "version = \"1.0\"\n");
    }

    #[test]
    fn test_minimal_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fleet.toml");
        fs::write(
            &path,
            "version = \"1.0\"\n\n[[orders]]\nfamily = \"van\"\n",
        )
        .unwrap();

        let config = ConfigManager::new_at(&path).load_config().unwrap();
        assert_eq!(config.settings, GlobalSettings::default());
        assert_eq!(config.orders, vec![FleetOrder::new(VehicleKind::Van, None)]);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new_at(dir.path().join("fleet.toml"));

        let mut config = FleetConfig::default();
        config.settings.export_format = ExportFormat::Yaml;
        config.orders.push(
            FleetOrder::new(VehicleKind::Car, Some("Coupe"))
                .with_quantity(3)
                .with_engine("V10"),
        );
        manager.save_config(&config).unwrap();

        assert_eq!(manager.load_config().unwrap(), config);
    }

    #[test]
    fn test_add_order_rejects_unknown_model() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new_at(dir.path().join("fleet.toml"));
        manager.initialize().unwrap();

        let err = manager
            .add_order(FleetOrder::new(VehicleKind::Car, Some("tractor")))
            .unwrap_err();
        assert!(err.to_string().contains("car/tractor"));
        assert_eq!(manager.load_config().unwrap(), FleetConfig::default());

        manager
            .add_order(FleetOrder::new(VehicleKind::Van, Some("pickup")).with_quantity(2))
            .unwrap();
        assert_eq!(manager.load_config().unwrap().orders.len(), 6);
    }

    #[test]
    fn test_order_labels() {
        assert_eq!(
            FleetOrder::new(VehicleKind::Car, Some("sport")).label(),
            "car/sport"
        );
        assert_eq!(FleetOrder::new(VehicleKind::Van, None).label(), "van/(default)");
    }
}
