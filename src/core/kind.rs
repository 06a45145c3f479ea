use serde::{Deserialize, Serialize};
use std::fmt;

/// The two vehicle families both construction patterns know about.
///
/// Serialized (and parsed on the command line) in lowercase, displayed
/// capitalised because the display form doubles as the vehicle type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Car,
    Van,
}

impl VehicleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleKind::Car => "Car",
            VehicleKind::Van => "Van",
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
