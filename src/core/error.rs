use thiserror::Error;

use crate::core::kind::VehicleKind;

/// Every way a constructor in this crate can reject its arguments.
///
/// All variants are "invalid argument" errors: they are raised synchronously,
/// before anything is built, and are never retried. A lookup that simply finds
/// nothing (an unknown factory key) is an `Option::None`, not one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// A director was handed a builder for a different kind of vehicle.
    #[error("Builder must be a {expected}Builder, got a {actual}Builder")]
    BuilderMismatch {
        expected: VehicleKind,
        actual: VehicleKind,
    },

    /// A built vehicle was assembled from an empty feature list.
    #[error("{kind} must have at least one feature")]
    NoFeatures { kind: VehicleKind },

    #[error("Name cannot be null or empty")]
    BlankName,

    #[error("Id cannot be empty")]
    NilId,

    #[error("Size must be greater than zero")]
    NonPositiveSize,

    #[error("Minimum value {min} must be less than maximum value {max}")]
    EmptyRange { min: String, max: String },

    #[error("Index {index} is out of range for {len} notebooks")]
    IndexOutOfRange { index: usize, len: usize },
}

impl ArgumentError {
    /// The name of the parameter that was rejected.
    pub fn param(&self) -> &'static str {
        match self {
            ArgumentError::BuilderMismatch { .. } => "builder",
            ArgumentError::NoFeatures { .. } => "features",
            ArgumentError::BlankName => "name",
            ArgumentError::NilId => "id",
            ArgumentError::NonPositiveSize => "size",
            ArgumentError::EmptyRange { .. } => "min",
            ArgumentError::IndexOutOfRange { .. } => "index",
        }
    }

    pub(crate) fn empty_range<T: std::fmt::Display>(min: T, max: T) -> Self {
        ArgumentError::EmptyRange {
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}
