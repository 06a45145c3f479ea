// Module declaration file for the factory method half of the crate.

// `factories` module:
// The `VehicleFactory` trait and the `CarFactory` / `VanFactory` that map a
// model key to a freshly built vehicle.
pub mod factories;

// `models` module:
// The five company models and the `Paintable` capability they implement.
pub mod models;
