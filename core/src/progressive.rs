//! # Progressive Resolution
//!
//! Each scan session tracks how often it has sighted every template and discloses
//! more of the template's ground truth with each sighting:
//!
//! | sighting (pre-increment) | manufacturer          | type / encryption | telemetry |
//! |--------------------------|-----------------------|-------------------|-----------|
//! | `0`, unresolved          | OUI lookup of the id  | `Unknown`         | withheld  |
//! | `>= 1`, unresolved       | declared              | declared          | sampled   |
//! | `>= resolve_delay`       | declared, name too    | declared          | sampled   |
//!
//! The resolved check uses the count *before* the increment, so a template with
//! `resolve_delay = 1` resolves on its second sighting. Display timing downstream
//! depends on this; keep it.

use std::collections::HashMap;

use rand::Rng;
use specter_common::device::{DeviceTemplate, DiscoveredNode, UNKNOWN};

use crate::telemetry;
use crate::vendors::AddressResolver;

/// Per-sighting RSSI wobble around the template's nominal strength, in dBm.
pub const RSSI_JITTER: i16 = 6;

/// Sighting counters of one session, keyed by template identifier.
#[derive(Debug, Clone, Default)]
pub struct ProgressiveState {
    sightings: HashMap<String, u32>,
}

impl ProgressiveState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the count before this sighting and stores it incremented by one.
    pub fn record_sighting(&mut self, id: &str) -> u32 {
        let count = self.sightings.entry(id.to_owned()).or_insert(0);
        let previous = *count;
        *count = count.saturating_add(1);
        previous
    }

    pub fn sightings(&self, id: &str) -> u32 {
        self.sightings.get(id).copied().unwrap_or(0)
    }

    /// Number of distinct templates seen so far.
    pub fn tracked(&self) -> usize {
        self.sightings.len()
    }

    /// Records one sighting of `template` and builds the record it discloses.
    pub fn observe<R: Rng + ?Sized>(
        &mut self,
        template: &DeviceTemplate,
        resolver: &AddressResolver,
        rng: &mut R,
    ) -> DiscoveredNode {
        let sighting = self.record_sighting(&template.id);
        disclose(template, sighting, resolver, rng)
    }
}

/// Builds the record revealed on the sighting numbered `sighting` (zero based).
pub fn disclose<R: Rng + ?Sized>(
    template: &DeviceTemplate,
    sighting: u32,
    resolver: &AddressResolver,
    rng: &mut R,
) -> DiscoveredNode {
    let rssi = template
        .rssi
        .saturating_add(rng.random_range(-RSSI_JITTER..=RSSI_JITTER));

    if sighting >= template.resolve_delay {
        return resolved(template, rssi, rng);
    }

    let first = sighting == 0;
    let manufacturer = if first {
        resolver.lookup_manufacturer(&template.id)
    } else {
        Some(template.manufacturer.clone())
    };

    let (name, short_name) = match &template.mesh {
        Some(mesh) if !first => (mesh.short_name.clone(), Some(mesh.short_name.clone())),
        Some(_) => (template.id.clone(), None),
        None => match &manufacturer {
            Some(vendor) => (format!("{vendor} Device"), None),
            None => (template.id.clone(), None),
        },
    };

    let (device_type, encryption) = if first {
        (UNKNOWN.to_owned(), UNKNOWN.to_owned())
    } else {
        (template.device_type.clone(), template.encryption.clone())
    };

    let fix = if first {
        None
    } else {
        telemetry::sample(template, rng)
    };

    DiscoveredNode {
        name,
        id: template.id.clone(),
        rssi,
        signal_type: template.signal_type,
        device_type,
        manufacturer,
        protocol: template.protocol.clone(),
        frequency: template.frequency,
        channel: template.channel,
        encryption,
        resolved: false,
        short_name,
        long_name: None,
        has_telemetry: fix.is_some(),
        telemetry: fix,
    }
}

fn resolved<R: Rng + ?Sized>(template: &DeviceTemplate, rssi: i16, rng: &mut R) -> DiscoveredNode {
    let fix = telemetry::sample(template, rng);

    DiscoveredNode {
        name: template.display_name(),
        id: template.id.clone(),
        rssi,
        signal_type: template.signal_type,
        device_type: template.device_type.clone(),
        manufacturer: Some(template.manufacturer.clone()),
        protocol: template.protocol.clone(),
        frequency: template.frequency,
        channel: template.channel,
        encryption: template.encryption.clone(),
        resolved: true,
        short_name: template.mesh.as_ref().map(|mesh| mesh.short_name.clone()),
        long_name: template.mesh.as_ref().map(|mesh| mesh.long_name.clone()),
        has_telemetry: fix.is_some(),
        telemetry: fix,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use specter_common::signal::SignalType;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    fn tracker(resolve_delay: u32) -> DeviceTemplate {
        DeviceTemplate::new(
            "88:C6:26:0F:A2:19",
            SignalType::Bluetooth,
            "Tile Mate",
            "Tracker",
            "Tile Inc.",
            "BLE 5.0",
        )
        .with_encryption("AES-CCM")
        .with_resolve_delay(resolve_delay)
        .with_telemetry(39.74, -104.99, 0.002)
    }

    fn relay(resolve_delay: u32) -> DeviceTemplate {
        DeviceTemplate::new(
            "MESH-a3f29c01",
            SignalType::Meshtastic,
            "Ridge Relay",
            "Mesh Router",
            "RAKwireless",
            "Meshtastic",
        )
        .with_mesh_names("RDG1", "Ridge Relay")
        .with_resolve_delay(resolve_delay)
    }

    #[test]
    fn sighting_counter_returns_previous_value() {
        let mut state = ProgressiveState::new();

        assert_eq!(state.record_sighting("a"), 0);
        assert_eq!(state.record_sighting("a"), 1);
        assert_eq!(state.record_sighting("b"), 0);
        assert_eq!(state.sightings("a"), 2);
        assert_eq!(state.sightings("missing"), 0);
        assert_eq!(state.tracked(), 2);
    }

    #[test]
    fn zero_delay_resolves_on_first_sighting() {
        let template = DeviceTemplate::new(
            "C4:E9:84:66:0B:1F",
            SignalType::Wifi,
            "TP-Link_Guest",
            "Access Point",
            "TP-Link",
            "802.11n",
        )
        .with_encryption("Open");
        let resolver = AddressResolver::builtin();
        let mut state = ProgressiveState::new();

        let node = state.observe(&template, &resolver, &mut rng());

        assert!(node.resolved);
        assert_eq!(node.name, "TP-Link_Guest");
        assert_eq!(node.manufacturer.as_deref(), Some("TP-Link"));
        assert_eq!(node.device_type, "Access Point");
        assert_eq!(node.encryption, "Open");
        assert!(!node.has_telemetry);
    }

    #[test]
    fn delay_of_two_discloses_in_three_steps() {
        let template = tracker(2);
        let resolver = AddressResolver::builtin();
        let mut state = ProgressiveState::new();
        let mut rng = rng();

        let first = state.observe(&template, &resolver, &mut rng);
        assert!(!first.resolved);
        // The builtin table knows the prefix as "Tile", not the declared "Tile Inc.".
        assert_eq!(first.manufacturer.as_deref(), Some("Tile"));
        assert_eq!(first.name, "Tile Device");
        assert_eq!(first.device_type, UNKNOWN);
        assert_eq!(first.encryption, UNKNOWN);
        assert!(first.telemetry.is_none());
        assert!(!first.has_telemetry);

        let second = state.observe(&template, &resolver, &mut rng);
        assert!(!second.resolved);
        assert_eq!(second.manufacturer.as_deref(), Some("Tile Inc."));
        assert_eq!(second.name, "Tile Inc. Device");
        assert_eq!(second.device_type, "Tracker");
        assert_eq!(second.encryption, "AES-CCM");
        assert!(second.has_telemetry);

        let third = state.observe(&template, &resolver, &mut rng);
        assert!(third.resolved);
        assert_eq!(third.name, "Tile Mate");
        assert_eq!(third.manufacturer.as_deref(), Some("Tile Inc."));
        assert!(third.telemetry.is_some());
    }

    #[test]
    fn delay_of_one_resolves_on_second_sighting() {
        let template = tracker(1);
        let resolver = AddressResolver::builtin();
        let mut state = ProgressiveState::new();
        let mut rng = rng();

        assert!(!state.observe(&template, &resolver, &mut rng).resolved);
        assert!(state.observe(&template, &resolver, &mut rng).resolved);
    }

    #[test]
    fn unknown_prefix_falls_back_to_raw_identifier() {
        let template = DeviceTemplate::new(
            "3A:1F:C4:88:20:5E",
            SignalType::Bluetooth,
            "Charge 6",
            "Wearable",
            "Fitbit",
            "BLE 5.0",
        )
        .with_resolve_delay(3);
        let resolver = AddressResolver::builtin();

        let node = disclose(&template, 0, &resolver, &mut rng());

        assert_eq!(node.manufacturer, None);
        assert_eq!(node.name, "3A:1F:C4:88:20:5E");
    }

    #[test]
    fn mesh_names_are_revealed_gradually() {
        let template = relay(2);
        let resolver = AddressResolver::builtin();
        let mut rng = rng();

        let first = disclose(&template, 0, &resolver, &mut rng);
        assert_eq!(first.name, "MESH-a3f29c01");
        assert_eq!(first.manufacturer, None);
        assert_eq!(first.short_name, None);

        let second = disclose(&template, 1, &resolver, &mut rng);
        assert_eq!(second.name, "RDG1");
        assert_eq!(second.short_name.as_deref(), Some("RDG1"));
        assert_eq!(second.long_name, None);
        assert_eq!(second.manufacturer.as_deref(), Some("RAKwireless"));

        let third = disclose(&template, 2, &resolver, &mut rng);
        assert!(third.resolved);
        assert_eq!(third.name, "Ridge Relay (RDG1)");
        assert_eq!(third.long_name.as_deref(), Some("Ridge Relay"));
    }

    #[test]
    fn resolution_never_reverts() {
        let template = tracker(3);
        let resolver = AddressResolver::builtin();
        let mut state = ProgressiveState::new();
        let mut rng = rng();

        let flags: Vec<bool> = (0..10)
            .map(|_| state.observe(&template, &resolver, &mut rng).resolved)
            .collect();

        assert_eq!(flags[..3], [false, false, false]);
        assert!(flags[3..].iter().all(|resolved| *resolved));
        assert_eq!(state.sightings(&template.id), 10);
    }

    #[test]
    fn rssi_wobbles_around_nominal_strength() {
        let template = tracker(0).with_rssi(-70);
        let resolver = AddressResolver::builtin();
        let mut rng = rng();

        for sighting in 0..200 {
            let node = disclose(&template, sighting, &resolver, &mut rng);
            assert!((-76..=-64).contains(&node.rssi), "rssi {}", node.rssi);
        }
    }

    #[test]
    fn rssi_jitter_saturates_at_the_type_bounds() {
        let resolver = AddressResolver::builtin();
        let mut rng = rng();
        let weakest = tracker(0).with_rssi(i16::MIN);
        let strongest = tracker(0).with_rssi(i16::MAX);

        for sighting in 0..200 {
            let low = disclose(&weakest, sighting, &resolver, &mut rng).rssi;
            let high = disclose(&strongest, sighting, &resolver, &mut rng).rssi;
            assert!(low <= i16::MIN + RSSI_JITTER);
            assert!(high >= i16::MAX - RSSI_JITTER);
        }
    }
}
