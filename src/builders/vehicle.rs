use serde::Serialize;
use std::fmt;

use crate::core::error::ArgumentError;
use crate::core::kind::VehicleKind;

/// A vehicle produced by a director.
///
/// Built vehicles are immutable: the feature list is fixed when the vehicle is
/// constructed and only ever exposed as a slice.
pub trait BuiltVehicle: fmt::Display + fmt::Debug {
    fn kind(&self) -> VehicleKind;

    /// The type tag, `"Car"` or `"Van"`.
    fn vehicle_type(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Feature descriptions in the order the director built them.
    fn features(&self) -> &[String];
}

/// Rejects an empty feature list. Shared by every built vehicle so the rule
/// lives in one place.
fn validate_features(kind: VehicleKind, features: Vec<String>) -> Result<Vec<String>, ArgumentError> {
    if features.is_empty() {
        return Err(ArgumentError::NoFeatures { kind });
    }
    Ok(features)
}

fn write_features(f: &mut fmt::Formatter<'_>, vehicle: &dyn BuiltVehicle) -> fmt::Result {
    write!(
        f,
        "{} with features: {}",
        vehicle.vehicle_type(),
        vehicle.features().join(", ")
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Car {
    features: Vec<String>,
}

impl Car {
    pub fn new(features: Vec<String>) -> Result<Self, ArgumentError> {
        Ok(Self {
            features: validate_features(VehicleKind::Car, features)?,
        })
    }
}

impl BuiltVehicle for Car {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Car
    }

    fn features(&self) -> &[String] {
        &self.features
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_features(f, self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Van {
    features: Vec<String>,
}

impl Van {
    pub fn new(features: Vec<String>) -> Result<Self, ArgumentError> {
        Ok(Self {
            features: validate_features(VehicleKind::Van, features)?,
        })
    }
}

impl BuiltVehicle for Van {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Van
    }

    fn features(&self) -> &[String] {
        &self.features
    }
}

impl fmt::Display for Van {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_features(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_features_are_rejected() {
        let err = Car::new(vec![]).unwrap_err();
        assert_eq!(err, ArgumentError::NoFeatures { kind: VehicleKind::Car });
        assert_eq!(err.param(), "features");
        assert_eq!(err.to_string(), "Car must have at least one feature");

        assert!(Van::new(Vec::new()).is_err());
    }

    #[test]
    fn test_display_joins_features() {
        let van = Van::new(vec!["Van Body Built".into(), "Van Windows Built".into()]).unwrap();
        assert_eq!(van.vehicle_type(), "Van");
        assert_eq!(
            van.to_string(),
            "Van with features: Van Body Built, Van Windows Built"
        );
    }
}
