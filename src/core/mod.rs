// This file is the module declaration file for the `core` module.
// It declares the submodules that hold the crate's shared vocabulary and the
// application-level plumbing around the two construction patterns.

// `config` module:
// This module is responsible for managing the fleet configuration file.
// It defines the data structures for the file (e.g., `FleetConfig`,
// `FleetOrder`), provides a `ConfigProvider` trait for abstracting
// configuration access, and includes a `ConfigManager` to handle file I/O
// operations like loading, saving, and adding orders.
pub mod config;

// `error` module:
// The `ArgumentError` enum every constructor in the crate returns when it
// rejects its input.
pub mod error;

// `fleet` module:
// Turns the configured orders into vehicles through the factories and
// exports the result.
pub mod fleet;

// `kind` module:
// `VehicleKind`, the car/van split both patterns share.
pub mod kind;
