use serde::Serialize;

use crate::signal::SignalType;

/// One simulated position fix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Telemetry {
    pub lat: f64,
    pub lng: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<f64>,
}

/// What a scan session reveals about a template on a single sighting.
///
/// Early sightings carry degraded data (`resolved == false`); once an identifier
/// resolves within a session, every later record for it is resolved too.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredNode {
    pub name: String,
    pub id: String,
    pub rssi: i16,
    pub signal_type: SignalType,
    pub device_type: String,
    pub manufacturer: Option<String>,
    pub protocol: String,
    pub frequency: Option<u64>,
    pub channel: Option<u16>,
    pub encryption: String,
    pub resolved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_name: Option<String>,
    pub telemetry: Option<Telemetry>,
    pub has_telemetry: bool,
}

impl DiscoveredNode {
    pub fn manufacturer_or_unknown(&self) -> &str {
        self.manufacturer.as_deref().unwrap_or(super::UNKNOWN)
    }
}
