// This file is the module declaration file for the `builders` module.
// It declares and makes public all the sub-modules within the `src/builders`
// directory. These modules hold the builder pattern itself and the
// construction-adjacent checks and reports built on top of the fleet.

// `builder` module:
// Defines the `VehicleBuilder` trait, one method per constructible part,
// and the `CarBuilder` / `VanBuilder` implementations that describe each part
// they produce.
pub mod builder;

// `director` module:
// The `VehicleDirector` trait and the `CarDirector` / `VanDirector` that own
// a builder of the matching kind and run its steps in a fixed order.
pub mod director;

// `reporter` module:
// This module is responsible for generating human-readable reports. It
// defines a `FleetReporter` trait and its `ConsoleReporter` implementation,
// which displays every vehicle in the fleet and a per-family summary.
pub mod reporter;

// `validator` module:
// This module is dedicated to ensuring the integrity and correctness of
// the configuration. It defines the `ConfigValidator` trait and a
// `StandardValidator` implementation to check for unknown models, empty
// orders and blank overrides.
pub mod validator;

// `vehicle` module:
// The immutable `Car` and `Van` products a director assembles, and the
// `BuiltVehicle` trait they share.
pub mod vehicle;
