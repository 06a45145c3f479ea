use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

use crate::core::kind::VehicleKind;
use crate::factory::models::{BoxVan, Coupe, Paintable, Pickup, Saloon, Sport};

/// Creates a fresh, default-configured vehicle.
pub type ModelConstructor = fn() -> Box<dyn Paintable>;

/// The `VehicleFactory` trait is the factory method seam: each family decides
/// which concrete model it hands out for a request.
pub trait VehicleFactory {
    fn family(&self) -> VehicleKind;

    /// Builds the family's default model.
    fn build(&self) -> Box<dyn Paintable>;

    /// Builds the model registered under `key`, compared case-insensitively.
    ///
    /// Returns `None` when the family has no such model.
    fn select_vehicle(&self, key: &str) -> Option<Box<dyn Paintable>>;

    /// The keys `select_vehicle` recognises, sorted.
    fn models(&self) -> Vec<&'static str>;
}

static CAR_MODELS: Lazy<HashMap<&'static str, ModelConstructor>> = Lazy::new(|| {
    let mut models: HashMap<&'static str, ModelConstructor> = HashMap::new();
    models.insert("saloon", || Box::new(Saloon::new()));
    models.insert("coupe", || Box::new(Coupe::new()));
    models.insert("sport", || Box::new(Sport::new()));
    models
});

static VAN_MODELS: Lazy<HashMap<&'static str, ModelConstructor>> = Lazy::new(|| {
    let mut models: HashMap<&'static str, ModelConstructor> = HashMap::new();
    models.insert("boxvan", || Box::new(BoxVan::new()));
    models.insert("pickup", || Box::new(Pickup::new()));
    models
});

fn select_from(
    table: &HashMap<&'static str, ModelConstructor>,
    family: VehicleKind,
    key: &str,
) -> Option<Box<dyn Paintable>> {
    let normalized = key.to_lowercase();
    match table.get(normalized.as_str()) {
        Some(construct) => {
            debug!(%family, key = %normalized, "selected model");
            Some(construct())
        }
        None => {
            debug!(%family, key, "no model registered for key");
            None
        }
    }
}

fn sorted_keys(table: &HashMap<&'static str, ModelConstructor>) -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = table.keys().copied().collect();
    keys.sort_unstable();
    keys
}

/// Makes cars. The default car is a `Saloon`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CarFactory;

impl CarFactory {
    pub fn new() -> Self {
        Self
    }
}

impl VehicleFactory for CarFactory {
    fn family(&self) -> VehicleKind {
        VehicleKind::Car
    }

    fn build(&self) -> Box<dyn Paintable> {
        Box::new(Saloon::new())
    }

    fn select_vehicle(&self, key: &str) -> Option<Box<dyn Paintable>> {
        select_from(&CAR_MODELS, VehicleKind::Car, key)
    }

    fn models(&self) -> Vec<&'static str> {
        sorted_keys(&CAR_MODELS)
    }
}

/// Makes vans. The default van is a `BoxVan`.
#[derive(Debug, Default, Clone, Copy)]
pub struct VanFactory;

impl VanFactory {
    pub fn new() -> Self {
        Self
    }
}

impl VehicleFactory for VanFactory {
    fn family(&self) -> VehicleKind {
        VehicleKind::Van
    }

    fn build(&self) -> Box<dyn Paintable> {
        Box::new(BoxVan::new())
    }

    fn select_vehicle(&self, key: &str) -> Option<Box<dyn Paintable>> {
        select_from(&VAN_MODELS, VehicleKind::Van, key)
    }

    fn models(&self) -> Vec<&'static str> {
        sorted_keys(&VAN_MODELS)
    }
}

/// The factory responsible for `family`.
pub fn factory_for(family: VehicleKind) -> Box<dyn VehicleFactory> {
    match family {
        VehicleKind::Car => Box::new(CarFactory::new()),
        VehicleKind::Van => Box::new(VanFactory::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::models::CompanyModel;

    #[test]
    fn test_car_factory_default_is_saloon() {
        let car = CarFactory::new().build();
        assert_eq!(car.model(), CompanyModel::Saloon);
        assert_eq!(car.engine(), "V6");
        assert_eq!(car.colour(), "Silver");
    }

    #[test]
    fn test_van_factory_default_is_box_van() {
        let van = VanFactory::new().build();
        assert_eq!(van.model(), CompanyModel::BoxVan);
        assert_eq!(van.engine(), "Diesel Inline-4");
        assert_eq!(van.colour(), "White");
    }

    #[test]
    fn test_select_sport_ignores_case() {
        let sport = CarFactory::new().select_vehicle("Sport").unwrap();
        assert_eq!(sport.model(), CompanyModel::Sport);
        assert_eq!(sport.engine(), "V12");
        assert_eq!(sport.colour(), "Yellow");

        let shouted = CarFactory::new().select_vehicle("COUPE").unwrap();
        assert_eq!(shouted.model(), CompanyModel::Coupe);
    }

    #[test]
    fn test_every_key_selects_its_model() {
        for model in CompanyModel::ALL {
            let vehicle = factory_for(model.family())
                .select_vehicle(model.key())
                .unwrap();
            assert_eq!(vehicle.model(), model);
            assert_eq!(vehicle.engine(), model.default_engine());
            assert_eq!(vehicle.colour(), model.default_colour());
        }
    }

    #[test]
    fn test_unknown_keys_are_absent() {
        let cars = CarFactory::new();
        assert!(cars.select_vehicle("pickup").is_none());
        assert!(cars.select_vehicle("").is_none());
        assert!(cars.select_vehicle(" saloon").is_none());

        let vans = VanFactory::new();
        assert!(vans.select_vehicle("box van").is_none());
        assert!(vans.select_vehicle("sport").is_none());
    }

    #[test]
    fn test_each_selection_is_a_new_instance() {
        let factory = VanFactory::new();
        let mut first = factory.select_vehicle("pickup").unwrap();
        let second = factory.select_vehicle("pickup").unwrap();

        first.set_colour("Orange".to_string());

        assert_eq!(first.colour(), "Orange");
        assert_eq!(second.colour(), "Black");
    }

    #[test]
    fn test_models_lists_sorted_keys() {
        assert_eq!(CarFactory::new().models(), ["coupe", "saloon", "sport"]);
        assert_eq!(factory_for(VehicleKind::Van).models(), ["boxvan", "pickup"]);
        assert_eq!(factory_for(VehicleKind::Van).family(), VehicleKind::Van);
    }
}
