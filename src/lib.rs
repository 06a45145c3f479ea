//! Toy vehicle domain for two object-construction patterns.
//!
//! The builder half (`builders`) assembles immutable `Car` and `Van` values
//! from a fixed sequence of builder steps run by a director. The factory half
//! (`factory`) hands out company models by key, each with its own engine and
//! colour. `core` holds the shared vocabulary plus the fleet configuration
//! that drives the factories from the command line.
pub mod builders;
pub mod core;
pub mod factory;
pub mod studies;
pub mod utils;
