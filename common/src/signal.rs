//! # Signal Types
//!
//! The radio families a simulated scan can target. Each family owns one
//! template pool in the catalog.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalType {
    Bluetooth,
    Wifi,
    Rfid,
    Sdr,
    Lora,
    Meshtastic,
    Adsb,
    Sensor,
}

impl SignalType {
    /// Every known family, in catalog order.
    pub const ALL: [SignalType; 8] = [
        SignalType::Bluetooth,
        SignalType::Wifi,
        SignalType::Rfid,
        SignalType::Sdr,
        SignalType::Lora,
        SignalType::Meshtastic,
        SignalType::Adsb,
        SignalType::Sensor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SignalType::Bluetooth => "bluetooth",
            SignalType::Wifi => "wifi",
            SignalType::Rfid => "rfid",
            SignalType::Sdr => "sdr",
            SignalType::Lora => "lora",
            SignalType::Meshtastic => "meshtastic",
            SignalType::Adsb => "adsb",
            SignalType::Sensor => "sensor",
        }
    }

    /// Matches a user supplied name, case-insensitively, including the common aliases.
    ///
    /// Returns `None` for anything unrecognised; callers fall back to the mixed pool
    /// instead of treating it as an error.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        let signal = match lower.as_str() {
            "bluetooth" | "ble" | "bt" => SignalType::Bluetooth,
            "wifi" | "wi-fi" | "wlan" => SignalType::Wifi,
            "rfid" | "nfc" => SignalType::Rfid,
            "sdr" => SignalType::Sdr,
            "lora" | "lorawan" => SignalType::Lora,
            "meshtastic" | "mesh" => SignalType::Meshtastic,
            "adsb" | "ads-b" => SignalType::Adsb,
            "sensor" => SignalType::Sensor,
            _ => return None,
        };
        Some(signal)
    }
}

impl fmt::Display for SignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Centre frequency in Hz of an 802.11 channel.
///
/// Covers 2.4 GHz channels 1-14 (14 being the Japanese 2484 MHz outlier) and
/// 5 GHz channels 36-165.
pub fn wifi_channel_frequency(channel: u16) -> Option<u64> {
    match channel {
        14 => Some(2_484_000_000),
        1..=13 => Some((2407 + u64::from(channel) * 5) * 1_000_000),
        36..=165 => Some((5000 + u64::from(channel) * 5) * 1_000_000),
        _ => None,
    }
}
