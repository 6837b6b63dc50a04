//! The simulated fleet.
//!
//! Hardware addresses reuse prefixes from the builtin OUI table where the real
//! vendor would, so early sightings can be fingerprinted; a few deliberately use
//! randomised (locally administered) addresses that resolve to nothing.

use specter_common::device::DeviceTemplate;
use specter_common::signal::{SignalType, wifi_channel_frequency};

const BLE_ADVERTISING: u64 = 2_402_000_000;
const BT_CLASSIC: u64 = 2_440_000_000;
const RFID_HF: u64 = 13_560_000;
const RFID_UHF: u64 = 915_000_000;
const RFID_LF: u64 = 125_000;
const LORA_US915: u64 = 915_000_000;
const MESHTASTIC_US: u64 = 906_875_000;
const ADSB_1090: u64 = 1_090_000_000;

// Denver metro; airborne traffic centres on DEN.
const CITY: (f64, f64) = (39.7392, -104.9903);
const AIRPORT: (f64, f64) = (39.8561, -104.6737);

pub(super) fn fleet() -> Vec<DeviceTemplate> {
    [bluetooth(), wifi(), rfid(), sdr(), lora(), meshtastic(), adsb(), sensors()]
        .into_iter()
        .flatten()
        .collect()
}

fn ble(id: &str, name: &str, device_type: &str, manufacturer: &str) -> DeviceTemplate {
    DeviceTemplate::new(id, SignalType::Bluetooth, name, device_type, manufacturer, "BLE 5.0")
        .with_frequency(BLE_ADVERTISING)
        .with_channel(37)
        .with_encryption("AES-CCM")
}

fn bluetooth() -> Vec<DeviceTemplate> {
    vec![
        ble("A4:83:E7:3C:91:0A", "AirPods Pro", "Audio / Headphones", "Apple")
            .with_rssi(-58)
            .with_resolve_delay(1),
        ble("DC:2B:61:7E:44:B2", "Galaxy S23", "Smartphone", "Samsung")
            .with_rssi(-66)
            .with_resolve_delay(2),
        ble("88:C6:26:0F:A2:19", "Tile Mate", "Tracker", "Tile")
            .with_rssi(-79)
            .with_resolve_delay(2)
            .with_telemetry(CITY.0 + 0.004, CITY.1 - 0.002, 0.002),
        DeviceTemplate::new(
            "04:52:C7:5D:E8:33",
            SignalType::Bluetooth,
            "Bose QC45",
            "Audio / Headphones",
            "Bose",
            "Bluetooth Classic",
        )
        .with_frequency(BT_CLASSIC)
        .with_encryption("E0/AES")
        .with_rssi(-71)
        .with_resolve_delay(1),
        ble("00:18:09:B4:71:6C", "Forerunner 265", "Wearable", "Garmin")
            .with_rssi(-74)
            .with_resolve_delay(3)
            .with_telemetry(CITY.0 - 0.003, CITY.1 + 0.005, 0.003),
        ble("7C:D9:F4:20:8B:5E", "JBL Flip 6", "Smart Speaker", "JBL")
            .with_rssi(-69)
            .with_resolve_delay(0),
        ble("3A:1F:C4:88:20:5E", "Charge 6", "Wearable", "Fitbit")
            .with_rssi(-82)
            .with_resolve_delay(2),
    ]
}

fn access_point(
    id: &str,
    ssid: &str,
    device_type: &str,
    manufacturer: &str,
    protocol: &str,
    channel: u16,
) -> DeviceTemplate {
    let mut template =
        DeviceTemplate::new(id, SignalType::Wifi, ssid, device_type, manufacturer, protocol)
            .with_channel(channel);
    template.frequency = wifi_channel_frequency(channel);
    template
}

fn wifi() -> Vec<DeviceTemplate> {
    vec![
        access_point("B0:7F:B9:21:4C:E0", "NETGEAR-5G", "Router", "Netgear", "802.11ac", 36)
            .with_encryption("WPA2-PSK")
            .with_rssi(-55)
            .with_resolve_delay(1),
        // Open guest network: the SSID gives everything away on the first beacon.
        access_point("C4:E9:84:66:0B:1F", "TP-Link_Guest", "Access Point", "TP-Link", "802.11n", 6)
            .with_encryption("Open")
            .with_rssi(-63)
            .with_resolve_delay(0),
        access_point("78:8A:20:9E:3D:42", "CorpNet", "Access Point", "Ubiquiti", "802.11ax", 149)
            .with_encryption("WPA3-Enterprise")
            .with_rssi(-72)
            .with_resolve_delay(2),
        access_point("F8:1E:DF:5B:C7:08", "Echo-Kitchen", "Smart Speaker", "Amazon", "802.11n", 11)
            .with_encryption("WPA2-PSK")
            .with_rssi(-68)
            .with_resolve_delay(1),
        access_point("2C:AA:8E:14:F6:9B", "WyzeCam-Porch", "Camera", "Wyze", "802.11n", 1)
            .with_encryption("WPA2-PSK")
            .with_rssi(-77)
            .with_resolve_delay(2),
        access_point("84:EA:ED:70:3A:C5", "Roku-Living", "Streaming Device", "Roku", "802.11ac", 44)
            .with_encryption("WPA2-PSK")
            .with_rssi(-61)
            .with_resolve_delay(1),
        access_point(
            "DA:A1:19:5C:02:7E",
            "iPhone Hotspot",
            "Mobile Hotspot",
            "Apple",
            "802.11ax",
            48,
        )
        .with_encryption("WPA3-SAE")
        .with_rssi(-59)
        .with_resolve_delay(3),
    ]
}

fn rfid() -> Vec<DeviceTemplate> {
    vec![
        DeviceTemplate::new(
            "RFID-E2003412B802",
            SignalType::Rfid,
            "Pallet Tag",
            "Asset Tag",
            "Impinj",
            "EPC Gen2",
        )
        .with_frequency(RFID_UHF)
        .with_rssi(-64)
        .with_resolve_delay(1),
        DeviceTemplate::new(
            "RFID-04A23B1C5D80",
            SignalType::Rfid,
            "MIFARE Classic 1K",
            "Access Card",
            "NXP",
            "ISO 14443A",
        )
        .with_frequency(RFID_HF)
        .with_encryption("Crypto1")
        .with_rssi(-48)
        .with_resolve_delay(2),
        DeviceTemplate::new(
            "RFID-E0040150A1B2",
            SignalType::Rfid,
            "ICODE SLIX",
            "Library Tag",
            "NXP",
            "ISO 15693",
        )
        .with_frequency(RFID_HF)
        .with_rssi(-52)
        .with_resolve_delay(0),
        DeviceTemplate::new(
            "RFID-0471C2D9E3F0",
            SignalType::Rfid,
            "DESFire EV2 Badge",
            "Access Card",
            "NXP",
            "ISO 14443A",
        )
        .with_frequency(RFID_HF)
        .with_encryption("AES-128")
        .with_rssi(-50)
        .with_resolve_delay(3),
        DeviceTemplate::new(
            "RFID-HID26-1187",
            SignalType::Rfid,
            "ProxCard II",
            "Access Card",
            "HID Global",
            "125 kHz Prox",
        )
        .with_frequency(RFID_LF)
        .with_rssi(-45)
        .with_resolve_delay(1),
    ]
}

fn sdr() -> Vec<DeviceTemplate> {
    vec![
        DeviceTemplate::new(
            "SDR-433.92-ACURITE",
            SignalType::Sdr,
            "Acurite 5-in-1",
            "Weather Station",
            "AcuRite",
            "OOK/PWM",
        )
        .with_frequency(433_920_000)
        .with_rssi(-81)
        .with_resolve_delay(1)
        .with_telemetry(CITY.0 + 0.011, CITY.1 + 0.008, 0.0005),
        DeviceTemplate::new(
            "SDR-315.00-TPMS-7F3A",
            SignalType::Sdr,
            "TPMS Sensor",
            "Tire Pressure Sensor",
            "Schrader",
            "FSK Manchester",
        )
        .with_frequency(315_000_000)
        .with_rssi(-88)
        .with_resolve_delay(2)
        .with_telemetry(CITY.0, CITY.1, 0.01),
        DeviceTemplate::new(
            "SDR-929.61-POCSAG",
            SignalType::Sdr,
            "Paging Transmitter",
            "Pager Network",
            "Motorola",
            "POCSAG 1200",
        )
        .with_frequency(929_612_500)
        .with_rssi(-74)
        .with_resolve_delay(2),
        DeviceTemplate::new(
            "SDR-137.62-NOAA15",
            SignalType::Sdr,
            "NOAA-15 APT",
            "Weather Satellite",
            "NOAA",
            "APT",
        )
        .with_frequency(137_620_000)
        .with_rssi(-97)
        .with_resolve_delay(0),
        DeviceTemplate::new(
            "SDR-390.00-FOB-21C4",
            SignalType::Sdr,
            "Garage Remote",
            "Key Fob",
            "Chamberlain",
            "Security+ 2.0",
        )
        .with_frequency(390_000_000)
        .with_encryption("Rolling Code")
        .with_rssi(-86)
        .with_resolve_delay(3),
    ]
}

fn lorawan(id: &str, name: &str, device_type: &str, manufacturer: &str) -> DeviceTemplate {
    DeviceTemplate::new(id, SignalType::Lora, name, device_type, manufacturer, "LoRaWAN 1.0.3")
        .with_frequency(LORA_US915)
        .with_encryption("AES-128")
}

fn lora() -> Vec<DeviceTemplate> {
    vec![
        lorawan("LORA-70B3D57ED0041A2F", "Soil Moisture Node", "Agricultural Sensor", "Dragino")
            .with_rssi(-109)
            .with_resolve_delay(2)
            .with_telemetry(CITY.0 + 0.09, CITY.1 + 0.12, 0.0008),
        lorawan("LORA-24E124535B312044", "Parking Sensor", "Parking Sensor", "Milesight")
            .with_rssi(-101)
            .with_resolve_delay(1)
            .with_telemetry(CITY.0 + 0.002, CITY.1 + 0.001, 0.0002),
        lorawan("LORA-7276FF000B031F5A", "iStation Gateway", "Gateway", "Kerlink")
            .with_rssi(-92)
            .with_resolve_delay(0)
            .with_telemetry(CITY.0 + 0.015, CITY.1 - 0.021, 0.0001)
            .with_altitude(1_640.0),
        lorawan("LORA-24E124136B203541", "AM307 Air Monitor", "Environmental Sensor", "Milesight")
            .with_rssi(-104)
            .with_resolve_delay(1),
    ]
}

fn mesh(
    node_num: &str,
    short_name: &str,
    long_name: &str,
    device_type: &str,
    manufacturer: &str,
) -> DeviceTemplate {
    DeviceTemplate::new(
        format!("MESH-{node_num}"),
        SignalType::Meshtastic,
        long_name,
        device_type,
        manufacturer,
        "Meshtastic",
    )
    .with_frequency(MESHTASTIC_US)
    .with_encryption("AES-256")
    .with_mesh_names(short_name, long_name)
}

fn meshtastic() -> Vec<DeviceTemplate> {
    vec![
        mesh("a3f29c01", "RDG1", "Ridge Relay", "Mesh Router", "RAKwireless")
            .with_rssi(-96)
            .with_resolve_delay(2)
            .with_telemetry(39.6780, -105.2010, 0.0004)
            .with_altitude(2_210.0),
        mesh("7bd410e6", "TRN", "Trail Runner", "Handheld", "LilyGO")
            .with_rssi(-88)
            .with_resolve_delay(1)
            .with_telemetry(CITY.0 - 0.02, CITY.1 - 0.05, 0.004),
        mesh("c05e8812", "BASE", "Base Camp", "Mesh Client", "Heltec")
            .with_rssi(-91)
            .with_resolve_delay(3)
            .with_telemetry(39.7101, -105.0897, 0.0006)
            .with_altitude(1_702.0),
        // Position broadcasting disabled on this one.
        mesh("19aa04f3", "HBR", "Harbor Watch", "Mesh Repeater", "Seeed Studio")
            .with_rssi(-99)
            .with_resolve_delay(2),
    ]
}

fn aircraft(icao: &str, callsign: &str, device_type: &str, manufacturer: &str) -> DeviceTemplate {
    DeviceTemplate::new(
        format!("ADSB-{icao}"),
        SignalType::Adsb,
        callsign,
        device_type,
        manufacturer,
        "Mode S ES",
    )
    .with_frequency(ADSB_1090)
}

fn adsb() -> Vec<DeviceTemplate> {
    vec![
        aircraft("A4B2C1", "UAL1432", "Airliner (B738)", "Boeing")
            .with_rssi(-73)
            .with_resolve_delay(1)
            .with_telemetry(AIRPORT.0 + 0.08, AIRPORT.1 - 0.10, 0.05)
            .with_altitude(3_350.0),
        aircraft("AB35F0", "DAL88", "Airliner (A321)", "Airbus")
            .with_rssi(-81)
            .with_resolve_delay(2)
            .with_telemetry(AIRPORT.0 - 0.12, AIRPORT.1 + 0.06, 0.05)
            .with_altitude(10_058.0),
        aircraft("A0F2E4", "N512GA", "Business Jet (G550)", "Gulfstream")
            .with_rssi(-85)
            .with_resolve_delay(3)
            .with_telemetry(AIRPORT.0 + 0.20, AIRPORT.1 + 0.15, 0.06)
            .with_altitude(12_496.0),
        aircraft("ACD7E2", "N172SP", "General Aviation (C172)", "Cessna")
            .with_rssi(-77)
            .with_resolve_delay(1)
            .with_telemetry(39.5701, -104.8492, 0.02)
            .with_altitude(2_300.0),
        aircraft("AE0412", "RCH415", "Military Transport (C-17)", "Boeing")
            .with_rssi(-88)
            .with_resolve_delay(4)
            .with_telemetry(AIRPORT.0 - 0.30, AIRPORT.1 - 0.25, 0.08)
            .with_altitude(8_839.0),
    ]
}

fn sensors() -> Vec<DeviceTemplate> {
    vec![
        DeviceTemplate::new(
            "SENSOR-ENV-0042",
            SignalType::Sensor,
            "Air Quality Monitor",
            "Environmental Sensor",
            "PurpleAir",
            "Zigbee 3.0",
        )
        .with_frequency(2_405_000_000)
        .with_channel(11)
        .with_encryption("AES-128")
        .with_rssi(-67)
        .with_resolve_delay(1)
        .with_telemetry(CITY.0 + 0.006, CITY.1 + 0.004, 0.0001),
        DeviceTemplate::new(
            "SENSOR-RAD-0107",
            SignalType::Sensor,
            "bGeigie Nano",
            "Radiation Sensor",
            "Safecast",
            "Proprietary 915",
        )
        .with_frequency(915_000_000)
        .with_rssi(-84)
        .with_resolve_delay(2)
        .with_telemetry(CITY.0 - 0.012, CITY.1 + 0.017, 0.003)
        .with_altitude(1_609.0),
        DeviceTemplate::new(
            "SENSOR-SEIS-0009",
            SignalType::Sensor,
            "Shake 3D",
            "Seismometer",
            "Raspberry Shake",
            "Zigbee 3.0",
        )
        .with_frequency(2_425_000_000)
        .with_channel(15)
        .with_encryption("AES-128")
        .with_rssi(-90)
        .with_resolve_delay(3)
        .with_telemetry(39.7525, -105.2211, 0.0001),
        DeviceTemplate::new(
            "SENSOR-WTR-0311",
            SignalType::Sensor,
            "River Level Gauge",
            "Hydrology Sensor",
            "Campbell Scientific",
            "Proprietary 433",
        )
        .with_frequency(433_920_000)
        .with_rssi(-93)
        .with_resolve_delay(0)
        .with_telemetry(39.7547, -105.0072, 0.0001),
    ]
}
