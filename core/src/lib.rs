//! # specter-core
//!
//! A stand-in data source that synthesizes passively "discovered" wireless nodes
//! when no radio hardware is attached. Nothing here touches real RF.
//!
//! * [`catalog`]: read-only template pools keyed by signal type.
//! * [`vendors`]: OUI prefix to manufacturer resolution.
//! * [`telemetry`]: bounded-random position samples.
//! * [`progressive`]: per-session progressive disclosure of template ground truth.
//! * [`scanner`]: the jittered, bursty emission scheduler and its session handle.
//! * [`discovery`]: wires the pieces together behind injected dependencies.

pub mod catalog;
pub mod discovery;
pub mod progressive;
pub mod scanner;
pub mod telemetry;
pub mod vendors;

pub use discovery::{DiscoveryService, start_passive_scan, stop_passive_scan};
pub use scanner::{ScanEngine, ScanSession};
