//! # Address Resolver
//!
//! Turns an address-style identifier into a manufacturer name by its OUI prefix.
//! Identifiers using a textual scheme (`RFID-`, `MESH-`, ...) never resolve.
//!
//! Two [`VendorRepository`] adapters are provided:
//! * [`StaticOuiRepo`]: a small exact-match prefix table, the default.
//! * [`MacOuiRepo`]: the full IEEE registry via the `mac_oui` crate.

use std::collections::HashMap;

use mac_oui::Oui;
use pnet::util::MacAddr;
use thiserror::Error;

use specter_common::network::mac::{self, IdentifierScheme};
use specter_common::vendors::VendorRepository;

/// Builtin OUI prefixes (3-byte prefix, vendor name).
pub static OUI_PREFIXES: &[([u8; 3], &str)] = &[
    ([0x00, 0x50, 0xF2], "Microsoft"),
    ([0x00, 0x0C, 0xE7], "MediaTek"),
    ([0x00, 0xE0, 0x4C], "Realtek"),
    ([0x48, 0x5B, 0x39], "Realtek"),
    ([0xB0, 0x7F, 0xB9], "Netgear"),
    ([0xC4, 0xE9, 0x84], "TP-Link"),
    ([0x14, 0xEB, 0xB6], "TP-Link"),
    ([0x04, 0xD9, 0xF5], "ASUS"),
    ([0x1C, 0x87, 0x2C], "ASUS"),
    ([0x78, 0x8A, 0x20], "Ubiquiti"),
    ([0xF8, 0x1E, 0xDF], "Amazon"),
    ([0xF0, 0xF0, 0xA4], "Amazon"),
    ([0x74, 0x75, 0x48], "Amazon"),
    ([0x30, 0xFD, 0x38], "Google"),
    ([0xF4, 0xF5, 0xD8], "Google"),
    ([0xA4, 0x83, 0xE7], "Apple"),
    ([0x3C, 0x22, 0xFB], "Apple"),
    ([0xDC, 0x56, 0xE7], "Apple"),
    ([0xF0, 0xD4, 0x15], "Apple"),
    ([0xDC, 0x2B, 0x61], "Samsung"),
    ([0x50, 0xDC, 0xE7], "Samsung"),
    ([0x88, 0xB4, 0xA6], "Huawei"),
    ([0xC8, 0x47, 0x8C], "Xiaomi"),
    ([0x28, 0x6C, 0x07], "Xiaomi"),
    ([0xA0, 0xC5, 0x89], "Motorola"),
    ([0x04, 0x5D, 0x4B], "Sony"),
    ([0x8C, 0x85, 0x90], "Intel"),
    ([0xA4, 0x34, 0xD9], "Intel"),
    ([0x20, 0x02, 0xAF], "Broadcom"),
    ([0x00, 0x1A, 0x2B], "Cisco"),
    ([0xF0, 0x9F, 0xC2], "Cisco"),
    ([0x9C, 0xB6, 0xD0], "HP"),
    ([0xB4, 0xA5, 0xEF], "AT&T"),
    ([0xE8, 0xED, 0xF3], "ARRIS"),
    ([0x84, 0xEA, 0xED], "Roku"),
    ([0x48, 0xA6, 0xB8], "Sonos"),
    ([0x44, 0x07, 0x0B], "Ring"),
    ([0x2C, 0xAA, 0x8E], "Wyze"),
    ([0xD4, 0xF5, 0x47], "Bose"),
    ([0x04, 0x52, 0xC7], "Bose"),
    ([0x2C, 0x41, 0xA1], "Bose"),
    ([0x7C, 0xD9, 0xF4], "JBL"),
    ([0x88, 0xC6, 0x26], "Tile"),
    ([0x8C, 0xDE, 0x52], "Beats"),
    ([0x00, 0x18, 0x09], "Garmin"),
];

/// Exact-match OUI table.
#[derive(Debug, Clone, Default)]
pub struct StaticOuiRepo {
    prefixes: HashMap<[u8; 3], String>,
}

impl StaticOuiRepo {
    pub fn builtin() -> Self {
        Self::new(OUI_PREFIXES.iter().map(|(prefix, vendor)| (*prefix, *vendor)))
    }

    pub fn new<S: Into<String>>(entries: impl IntoIterator<Item = ([u8; 3], S)>) -> Self {
        Self {
            prefixes: entries
                .into_iter()
                .map(|(prefix, vendor)| (prefix, vendor.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

impl VendorRepository for StaticOuiRepo {
    fn get_vendor(&self, mac_addr: MacAddr) -> Option<String> {
        self.prefixes
            .get(&[mac_addr.0, mac_addr.1, mac_addr.2])
            .cloned()
    }
}

#[derive(Debug, Error)]
pub enum VendorDbError {
    #[error("failed to load OUI database: {0}")]
    Load(String),
}

/// The IEEE registry bundled with `mac_oui`.
pub struct MacOuiRepo {
    db: Oui,
}

impl MacOuiRepo {
    pub fn load() -> Result<Self, VendorDbError> {
        let db = Oui::default().map_err(|e| VendorDbError::Load(e.to_string()))?;
        Ok(Self { db })
    }
}

impl VendorRepository for MacOuiRepo {
    fn get_vendor(&self, mac_addr: MacAddr) -> Option<String> {
        match self.db.lookup_by_mac(&mac_addr.to_string()) {
            Ok(Some(entry)) => Some(entry.company_name.clone()),
            Ok(None) => None,
            Err(_) => None,
        }
    }
}

/// Resolves identifiers to manufacturers through an injected [`VendorRepository`].
pub struct AddressResolver {
    repo: Box<dyn VendorRepository + Send + Sync>,
}

impl AddressResolver {
    pub fn new(repo: Box<dyn VendorRepository + Send + Sync>) -> Self {
        Self { repo }
    }

    pub fn builtin() -> Self {
        Self::new(Box::new(StaticOuiRepo::builtin()))
    }

    /// Looks up the manufacturer behind `identifier`.
    ///
    /// Only colon-delimited hardware addresses are looked up; tagged identifiers,
    /// platform UUIDs and unmatched prefixes all yield `None`.
    pub fn lookup_manufacturer(&self, identifier: &str) -> Option<String> {
        match mac::classify(identifier) {
            IdentifierScheme::Address(mac_addr) => self.repo.get_vendor(mac_addr),
            IdentifierScheme::Tagged | IdentifierScheme::Opaque => None,
        }
    }
}

impl Default for AddressResolver {
    fn default() -> Self {
        Self::builtin()
    }
}
