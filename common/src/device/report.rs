//! # Device Reports
//!
//! The "create device" request a persistence collaborator builds from a
//! [`DiscoveredNode`]. Nothing in this workspace sends it anywhere; it only
//! describes the shape downstream consumers receive.

use serde::Serialize;

use super::node::DiscoveredNode;
use crate::signal::SignalType;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceReport {
    pub name: String,
    pub mac_address: String,
    pub signal_type: SignalType,
    pub signal_strength: i16,
    pub device_type: String,
    pub manufacturer: Option<String>,
    pub protocol: String,
    pub frequency: Option<u64>,
    pub channel: Option<u16>,
    pub encryption: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    pub notes: String,
}

impl From<&DiscoveredNode> for DeviceReport {
    fn from(node: &DiscoveredNode) -> Self {
        Self {
            name: node.name.clone(),
            mac_address: node.id.clone(),
            signal_type: node.signal_type,
            signal_strength: node.rssi,
            device_type: node.device_type.clone(),
            manufacturer: node.manufacturer.clone(),
            protocol: node.protocol.clone(),
            frequency: node.frequency,
            channel: node.channel,
            encryption: node.encryption.clone(),
            latitude: node.telemetry.as_ref().map(|fix| fix.lat),
            longitude: node.telemetry.as_ref().map(|fix| fix.lng),
            notes: detection_notes(node),
        }
    }
}

fn detection_notes(node: &DiscoveredNode) -> String {
    let state = if node.resolved { "resolved" } else { "partial" };
    let mut notes = format!(
        "Simulated passive scan | {} | {} | manufacturer: {}",
        node.protocol,
        state,
        node.manufacturer_or_unknown()
    );

    if let Some(fix) = &node.telemetry {
        notes.push_str(&format!(" | position: {:.5}, {:.5}", fix.lat, fix.lng));
        if let Some(alt) = fix.alt {
            notes.push_str(&format!(" @ {alt:.0}"));
        }
    }

    notes
}
