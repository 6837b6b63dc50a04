mod lifecycle;
mod progressive;

use std::sync::Arc;

use specter_common::config::ScanConfig;
use specter_common::device::DeviceTemplate;
use specter_common::signal::SignalType;
use specter_core::DiscoveryService;
use specter_core::catalog::TemplateCatalog;
use specter_core::vendors::AddressResolver;

/// A router whose prefix the builtin table knows, resolving on its third sighting.
pub fn router(resolve_delay: u32) -> DeviceTemplate {
    DeviceTemplate::new(
        "C4:E9:84:12:34:56",
        SignalType::Wifi,
        "Archer_C7",
        "Router",
        "TP-Link Systems Inc.",
        "802.11ac",
    )
    .with_channel(36)
    .with_encryption("WPA2")
    .with_resolve_delay(resolve_delay)
    .with_telemetry(39.7392, -104.9903, 0.0005)
}

pub fn tag() -> DeviceTemplate {
    DeviceTemplate::new(
        "RFID-0042",
        SignalType::Rfid,
        "Badge 42",
        "Access Badge",
        "HID Global",
        "ISO 14443A",
    )
    .with_resolve_delay(1)
}

pub fn service(templates: Vec<DeviceTemplate>, seed: u64) -> DiscoveryService {
    DiscoveryService::new(
        Arc::new(TemplateCatalog::from_templates(templates)),
        Arc::new(AddressResolver::builtin()),
    )
    .with_config(ScanConfig::default().with_seed(seed))
}
