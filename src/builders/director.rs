use tracing::debug;

use crate::builders::builder::{CarBuilder, VanBuilder, VehicleBuilder};
use crate::builders::vehicle::{BuiltVehicle, Car, Van};
use crate::core::error::ArgumentError;
use crate::core::kind::VehicleKind;

/// A director owns one builder and knows the order in which to call its
/// steps for a single kind of vehicle.
///
/// Features are collected from the return values of the builder steps and
/// handed to the product constructor in one go, so the product never exists
/// in a half-built state.
pub trait VehicleDirector {
    type Product: BuiltVehicle;

    fn build(&self) -> Result<Self::Product, ArgumentError>;
}

/// Checks that `builder` produces parts for `expected` before a director
/// takes ownership of it.
fn ensure_builder(
    expected: VehicleKind,
    builder: &dyn VehicleBuilder,
) -> Result<(), ArgumentError> {
    let actual = builder.kind();
    if actual != expected {
        return Err(ArgumentError::BuilderMismatch { expected, actual });
    }
    Ok(())
}

pub struct CarDirector {
    builder: Box<dyn VehicleBuilder>,
}

impl CarDirector {
    /// Binds the director to `builder`, which must be a car builder.
    pub fn new(builder: Box<dyn VehicleBuilder>) -> Result<Self, ArgumentError> {
        ensure_builder(VehicleKind::Car, builder.as_ref())?;
        Ok(Self { builder })
    }
}

impl VehicleDirector for CarDirector {
    type Product = Car;

    fn build(&self) -> Result<Car, ArgumentError> {
        let features = vec![
            self.builder.build_body(),
            self.builder.build_chassis(),
            self.builder.build_boot(),
            self.builder.build_passenger_area(),
            self.builder.build_reinforced_storage_area(),
            self.builder.build_windows(),
        ];
        debug!(steps = features.len(), "assembled car features");
        Car::new(features)
    }
}

pub struct VanDirector {
    builder: Box<dyn VehicleBuilder>,
}

impl VanDirector {
    /// Binds the director to `builder`, which must be a van builder.
    pub fn new(builder: Box<dyn VehicleBuilder>) -> Result<Self, ArgumentError> {
        ensure_builder(VehicleKind::Van, builder.as_ref())?;
        Ok(Self { builder })
    }
}

impl VehicleDirector for VanDirector {
    type Product = Van;

    fn build(&self) -> Result<Van, ArgumentError> {
        let features = vec![
            self.builder.build_body(),
            self.builder.build_chassis(),
            self.builder.build_reinforced_storage_area(),
            self.builder.build_windows(),
        ];
        debug!(steps = features.len(), "assembled van features");
        Van::new(features)
    }
}

/// Pairs `kind` with its own builder and director and builds one vehicle.
pub fn build_vehicle(kind: VehicleKind) -> Result<Box<dyn BuiltVehicle>, ArgumentError> {
    let vehicle: Box<dyn BuiltVehicle> = match kind {
        VehicleKind::Car => Box::new(CarDirector::new(Box::new(CarBuilder::new()))?.build()?),
        VehicleKind::Van => Box::new(VanDirector::new(Box::new(VanBuilder::new()))?.build()?),
    };
    Ok(vehicle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Claims to build vans and counts how many steps it was asked for.
    struct CountingVanBuilder {
        calls: Rc<Cell<usize>>,
    }

    impl VehicleBuilder for CountingVanBuilder {
        fn kind(&self) -> VehicleKind {
            VehicleKind::Van
        }

        fn build_body(&self) -> String {
            self.calls.set(self.calls.get() + 1);
            "Counted Body".to_string()
        }
    }

    #[test]
    fn test_car_director_runs_six_steps_in_order() {
        let director = CarDirector::new(Box::new(CarBuilder::new())).unwrap();
        let car = director.build().unwrap();

        assert_eq!(car.vehicle_type(), "Car");
        assert_eq!(
            car.features(),
            [
                "Car Body Built",
                "Car Chassis Built",
                "Car Boot Built",
                "Car Passenger Area Built",
                "Car Reinforced Storage Area Built",
                "Car Windows Built",
            ]
        );
    }

    #[test]
    fn test_van_director_runs_four_steps_in_order() {
        let director = VanDirector::new(Box::new(VanBuilder::new())).unwrap();
        let van = director.build().unwrap();

        assert_eq!(van.vehicle_type(), "Van");
        assert_eq!(
            van.features(),
            [
                "Van Body Built",
                "Van Chassis Built",
                "Van Reinforced Storage Area Built",
                "Van Windows Built",
            ]
        );
    }

    #[test]
    fn test_mismatched_builders_are_rejected() {
        let err = CarDirector::new(Box::new(VanBuilder::new())).err().unwrap();
        assert_eq!(
            err,
            ArgumentError::BuilderMismatch {
                expected: VehicleKind::Car,
                actual: VehicleKind::Van,
            }
        );
        assert_eq!(err.param(), "builder");

        assert!(VanDirector::new(Box::new(CarBuilder::new())).is_err());
    }

    #[test]
    fn test_rejection_happens_before_any_step() {
        let calls = Rc::new(Cell::new(0));
        let builder = CountingVanBuilder {
            calls: Rc::clone(&calls),
        };

        assert!(CarDirector::new(Box::new(builder)).is_err());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_steps_run_only_on_build() {
        let calls = Rc::new(Cell::new(0));
        let builder = CountingVanBuilder {
            calls: Rc::clone(&calls),
        };

        let director = VanDirector::new(Box::new(builder)).unwrap();
        assert_eq!(calls.get(), 0);

        let van = director.build().unwrap();
        assert_eq!(calls.get(), 1);
        // Unsupported steps still contribute a (blank) entry.
        assert_eq!(van.features().len(), 4);
        assert_eq!(van.features()[0], "Counted Body");
    }

    #[test]
    fn test_build_vehicle_pairs_kind_with_builder() {
        let car = build_vehicle(VehicleKind::Car).unwrap();
        assert_eq!(car.kind(), VehicleKind::Car);
        assert_eq!(car.features().len(), 6);

        let van = build_vehicle(VehicleKind::Van).unwrap();
        assert_eq!(van.kind(), VehicleKind::Van);
        assert_eq!(van.features().len(), 4);
    }
}
