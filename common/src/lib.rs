//! Shared models and ports for the `specter` workspace.
//!
//! * [`device`]: templates (ground truth) and the records emitted from them.
//! * [`signal`]: the radio families a simulated scan can target.
//! * [`vendors`]: the port used to turn an address prefix into a manufacturer.
//! * [`network`]: identifier scheme helpers.
//! * [`config`]: scan timing and CLI configuration.

pub mod config;
pub mod device;
pub mod network;
pub mod signal;
pub mod vendors;
