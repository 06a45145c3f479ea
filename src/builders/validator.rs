use anyhow::Result;

use crate::core::config::{self, FleetOrder};
use crate::factory::factories::factory_for;

/// Largest quantity a single order may ask for.
pub const MAX_ORDER_QUANTITY: usize = 1_000;

/// The `ConfigValidator` trait defines the public interface for validating the
/// fleet configuration.
///
/// This trait allows for the implementation of different validation strategies
/// by adhering to a common set of methods.
pub trait ConfigValidator {
    /// Performs a full validation of the `FleetConfig` and returns a list of
    /// issues found.
    ///
    /// # Arguments
    /// * `config`: The `FleetConfig` to be validated.
    ///
    /// # Returns
    /// A `Result<Vec<String>>` where each string describes a specific issue.
    fn validate_config(&self, config: &config::FleetConfig) -> Result<Vec<String>>;

    /// Validates a single `FleetOrder` and returns a list of issues.
    fn validate_order(&self, order: &FleetOrder) -> Result<Vec<String>>;
}

/// The `StandardValidator` is a concrete implementation of `ConfigValidator`.
///
/// It checks that every order names a model its family's factory can build
/// and that overrides would not leave a vehicle without an engine or colour.
pub struct StandardValidator;

impl StandardValidator {
    /// Creates a new instance of `StandardValidator`.
    pub fn new() -> Self {
        Self
    }

    fn check_override(&self, order: &FleetOrder, field: &str, value: Option<&str>) -> Option<String> {
        match value {
            Some(value) if value.trim().is_empty() => {
                Some(format!("Order {} has a blank {field} override", order.label()))
            }
            _ => None,
        }
    }
}

impl Default for StandardValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigValidator for StandardValidator {
    fn validate_config(&self, config: &config::FleetConfig) -> Result<Vec<String>> {
        let mut issues = Vec::new();

        // Check for an unsupported configuration version.
        if config.version != config::CONFIG_VERSION {
            issues.push(format!("Unsupported config version: {}", config.version));
        }

        if config.orders.is_empty() {
            issues.push("No fleet orders configured".to_string());
        }

        for order in &config.orders {
            issues.extend(self.validate_order(order)?);
        }

        Ok(issues)
    }

    fn validate_order(&self, order: &FleetOrder) -> Result<Vec<String>> {
        let mut issues = Vec::new();

        if let Some(model) = &order.model {
            let factory = factory_for(order.family);
            let known = factory.models();
            if !known.contains(&model.to_lowercase().as_str()) {
                issues.push(format!(
                    "Unknown {} model '{}' (expected one of: {})",
                    order.family.as_str().to_lowercase(),
                    model,
                    known.join(", ")
                ));
            }
        }

        if order.quantity == 0 {
            issues.push(format!("Order {} has a quantity of 0", order.label()));
        } else if order.quantity > MAX_ORDER_QUANTITY {
            issues.push(format!(
                "Order {} has a quantity of {} (at most {MAX_ORDER_QUANTITY} per order)",
                order.label(),
                order.quantity
            ));
        }

        issues.extend(self.check_override(order, "engine", order.engine.as_deref()));
        issues.extend(self.check_override(order, "colour", order.colour.as_deref()));

        Ok(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::FleetConfig;
    use crate::core::kind::VehicleKind;

    #[test]
    fn test_default_config_is_valid() {
        let issues = StandardValidator::new()
            .validate_config(&FleetConfig::default())
            .unwrap();
        assert!(issues.is_empty(), "{issues:?}");
    }

    #[test]
    fn test_model_keys_are_case_insensitive() {
        let order = FleetOrder::new(VehicleKind::Van, Some("BoxVan"));
        assert!(StandardValidator::new().validate_order(&order).unwrap().is_empty());
    }

    #[test]
    fn test_wrong_family_model_is_reported() {
        let order = FleetOrder::new(VehicleKind::Van, Some("sport"));
        let issues = StandardValidator::new().validate_order(&order).unwrap();
        assert_eq!(
            issues,
            ["Unknown van model 'sport' (expected one of: boxvan, pickup)"]
        );
    }

    #[test]
    fn test_zero_quantity_and_blank_overrides() {
        let order = FleetOrder::new(VehicleKind::Car, None)
            .with_quantity(0)
            .with_engine("")
            .with_colour("  ");
        let issues = StandardValidator::new().validate_order(&order).unwrap();
        assert_eq!(issues.len(), 3);
        assert!(issues[0].contains("quantity of 0"));
        assert!(issues[1].contains("blank engine"));
        assert!(issues[2].contains("blank colour"));
    }

    #[test]
    fn test_quantity_above_the_cap() {
        let validator = StandardValidator::new();
        let at_cap = FleetOrder::new(VehicleKind::Van, None).with_quantity(MAX_ORDER_QUANTITY);
        assert!(validator.validate_order(&at_cap).unwrap().is_empty());

        let order = FleetOrder::new(VehicleKind::Van, None).with_quantity(usize::MAX);
        let issues = validator.validate_order(&order).unwrap();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("at most 1000 per order"), "{issues:?}");
    }

    #[test]
    fn test_config_level_issues() {
        let config = FleetConfig {
            version: "2.0".to_string(),
            orders: Vec::new(),
            ..FleetConfig::default()
        };
        let issues = StandardValidator::new().validate_config(&config).unwrap();
        assert_eq!(
            issues,
            ["Unsupported config version: 2.0", "No fleet orders configured"]
        );
    }
}
