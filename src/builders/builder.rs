use crate::core::kind::VehicleKind;

/// The `VehicleBuilder` trait lists every part a director may ask for.
///
/// Each step returns a short description of the part it produced and has no
/// other effect. A builder only overrides the steps its vehicle actually has;
/// the rest fall back to the defaults below, which describe nothing.
pub trait VehicleBuilder {
    /// The kind of vehicle this builder produces parts for. Directors use it
    /// to refuse builders meant for a different vehicle.
    fn kind(&self) -> VehicleKind;

    fn build_body(&self) -> String {
        String::new()
    }

    fn build_chassis(&self) -> String {
        String::new()
    }

    fn build_boot(&self) -> String {
        String::new()
    }

    fn build_passenger_area(&self) -> String {
        String::new()
    }

    fn build_reinforced_storage_area(&self) -> String {
        String::new()
    }

    fn build_windows(&self) -> String {
        String::new()
    }
}

/// Builds every part a car can have.
#[derive(Debug, Default, Clone, Copy)]
pub struct CarBuilder;

impl CarBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl VehicleBuilder for CarBuilder {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Car
    }

    fn build_body(&self) -> String {
        "Car Body Built".to_string()
    }

    fn build_chassis(&self) -> String {
        "Car Chassis Built".to_string()
    }

    fn build_boot(&self) -> String {
        "Car Boot Built".to_string()
    }

    fn build_passenger_area(&self) -> String {
        "Car Passenger Area Built".to_string()
    }

    fn build_reinforced_storage_area(&self) -> String {
        "Car Reinforced Storage Area Built".to_string()
    }

    fn build_windows(&self) -> String {
        "Car Windows Built".to_string()
    }
}

/// Builds van parts. Vans have no boot and no passenger area, so those two
/// steps keep the empty defaults.
#[derive(Debug, Default, Clone, Copy)]
pub struct VanBuilder;

impl VanBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl VehicleBuilder for VanBuilder {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Van
    }

    fn build_body(&self) -> String {
        "Van Body Built".to_string()
    }

    fn build_chassis(&self) -> String {
        "Van Chassis Built".to_string()
    }

    fn build_reinforced_storage_area(&self) -> String {
        "Van Reinforced Storage Area Built".to_string()
    }

    fn build_windows(&self) -> String {
        "Van Windows Built".to_string()
    }
}
