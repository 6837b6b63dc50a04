//! # Device Models
//!
//! * [`template::DeviceTemplate`]: immutable ground truth for one simulated node.
//! * [`node::DiscoveredNode`]: what a scan session reveals about a template on one sighting.
//! * [`report::DeviceReport`]: the "create device" payload downstream persistence expects.

pub mod node;
pub mod report;
pub mod template;

pub use node::{DiscoveredNode, Telemetry};
pub use report::DeviceReport;
pub use template::{DeviceTemplate, MeshIdentity, TelemetryProfile};

/// Placeholder for attributes that have not been disclosed yet.
pub const UNKNOWN: &str = "Unknown";
