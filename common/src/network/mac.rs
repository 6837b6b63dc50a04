//! # Identifier Schemes
//!
//! Simulated nodes are keyed either by a colon-delimited hardware address
//! (Bluetooth, Wi-Fi) or by a textual prefix naming the radio family they came
//! from (`RFID-`, `MESH-`, ...). Only the former carries an OUI.

use std::str::FromStr;

use pnet::util::MacAddr;

/// Textual prefixes of identifiers that are not hardware addresses.
pub const NON_ADDRESS_PREFIXES: &[&str] = &["RFID-", "MESH-", "LORA-", "ADSB-", "SDR-", "SENSOR-"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierScheme {
    /// `AA:BB:CC:DD:EE:FF`
    Address(MacAddr),
    /// One of [`NON_ADDRESS_PREFIXES`].
    Tagged,
    /// Anything else, e.g. the UUIDs some platforms hand out instead of addresses.
    Opaque,
}

pub fn classify(identifier: &str) -> IdentifierScheme {
    let upper = identifier.to_ascii_uppercase();
    if NON_ADDRESS_PREFIXES
        .iter()
        .any(|prefix| upper.starts_with(prefix))
    {
        return IdentifierScheme::Tagged;
    }

    if identifier.len() != 17 || identifier.split(':').count() != 6 {
        return IdentifierScheme::Opaque;
    }

    match MacAddr::from_str(identifier) {
        Ok(mac) => IdentifierScheme::Address(mac),
        Err(_) => IdentifierScheme::Opaque,
    }
}

/// Formats the leading three octets the way OUI tables key them (`A4:83:E7`).
pub fn oui_prefix(mac: MacAddr) -> String {
    format!("{:02X}:{:02X}:{:02X}", mac.0, mac.1, mac.2)
}
