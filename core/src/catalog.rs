//! # Template Catalog
//!
//! Read-only pools of [`DeviceTemplate`]s, one per [`SignalType`]. A session consults
//! the catalog once, when it builds its draw order.

use std::collections::BTreeMap;
use std::sync::Arc;

use specter_common::device::DeviceTemplate;
use specter_common::signal::SignalType;

mod data;

#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    pools: BTreeMap<SignalType, Vec<Arc<DeviceTemplate>>>,
}

impl TemplateCatalog {
    /// The simulated fleet shipped with the engine.
    pub fn builtin() -> Self {
        Self::from_templates(data::fleet())
    }

    /// Groups templates into pools by their signal type, keeping their relative order.
    pub fn from_templates(templates: impl IntoIterator<Item = DeviceTemplate>) -> Self {
        let mut pools: BTreeMap<SignalType, Vec<Arc<DeviceTemplate>>> = BTreeMap::new();
        for template in templates {
            pools
                .entry(template.signal_type)
                .or_default()
                .push(Arc::new(template));
        }
        Self { pools }
    }

    /// Returns the pool for `signal_type`.
    ///
    /// Unrecognised names fall back to the concatenation of every pool ("mixed" mode)
    /// instead of failing.
    pub fn pool(&self, signal_type: &str) -> Vec<Arc<DeviceTemplate>> {
        match SignalType::from_name(signal_type) {
            Some(signal) if self.pools.contains_key(&signal) => self.pool_for(signal).to_vec(),
            _ => self.mixed(),
        }
    }

    pub fn pool_for(&self, signal: SignalType) -> &[Arc<DeviceTemplate>] {
        self.pools.get(&signal).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn mixed(&self) -> Vec<Arc<DeviceTemplate>> {
        self.pools.values().flatten().cloned().collect()
    }

    /// Known signal types with the size of their pools, in catalog order.
    pub fn signal_types(&self) -> impl Iterator<Item = (SignalType, usize)> + '_ {
        self.pools.iter().map(|(signal, pool)| (*signal, pool.len()))
    }

    pub fn len(&self) -> usize {
        self.pools.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn builtin_covers_every_signal_type() {
        let catalog = TemplateCatalog::builtin();
        for signal in SignalType::ALL {
            assert!(
                !catalog.pool_for(signal).is_empty(),
                "no templates for {signal}"
            );
        }
    }

    #[test]
    fn known_names_return_their_pool() {
        let catalog = TemplateCatalog::builtin();
        let pool = catalog.pool("wifi");

        assert_eq!(pool.len(), catalog.pool_for(SignalType::Wifi).len());
        assert!(pool.iter().all(|t| t.signal_type == SignalType::Wifi));
    }

    #[test]
    fn unknown_names_fall_back_to_every_pool() {
        let catalog = TemplateCatalog::builtin();
        let mixed = catalog.pool("unknown-type");

        let total: usize = catalog.signal_types().map(|(_, len)| len).sum();
        assert!(!mixed.is_empty());
        assert_eq!(mixed.len(), total);
        assert_eq!(mixed.len(), catalog.len());
    }

    #[test]
    fn known_name_with_empty_pool_falls_back_to_mixed() {
        let catalog = TemplateCatalog::from_templates([DeviceTemplate::new(
            "RFID-01",
            SignalType::Rfid,
            "Badge",
            "Access Card",
            "HID Global",
            "125 kHz Prox",
        )]);

        assert_eq!(catalog.pool("lora").len(), 1);
        assert!(catalog.pool_for(SignalType::Lora).is_empty());
    }

    #[test]
    fn template_ids_are_unique() {
        let catalog = TemplateCatalog::builtin();
        let ids: HashSet<&str> = catalog
            .pools
            .values()
            .flatten()
            .map(|t| t.id.as_str())
            .collect();

        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn mesh_pool_carries_name_pairs() {
        let catalog = TemplateCatalog::builtin();
        let with_names = catalog
            .pool_for(SignalType::Meshtastic)
            .iter()
            .filter(|t| t.mesh.is_some())
            .count();

        assert_eq!(with_names, catalog.pool_for(SignalType::Meshtastic).len());
    }
}
