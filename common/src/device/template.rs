use crate::signal::SignalType;

/// Base position and drift bounds of a node that reports its location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryProfile {
    pub base_lat: f64,
    pub base_lng: f64,
    pub base_alt: Option<f64>,
    /// Upper bound, in degrees, on how far a sample may land from the base coordinate.
    pub drift_radius: f64,
}

/// Short/long name pair broadcast by mesh radios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshIdentity {
    pub short_name: String,
    pub long_name: String,
}

/// Ground truth for one simulated node.
///
/// Built once when the catalog is assembled and never mutated afterwards.
/// Sessions only ever hold shared references to it.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceTemplate {
    pub id: String,
    pub signal_type: SignalType,
    pub name: String,
    pub device_type: String,
    pub manufacturer: String,
    pub protocol: String,
    /// Nominal centre frequency in Hz.
    pub frequency: Option<u64>,
    pub channel: Option<u16>,
    pub encryption: String,
    /// Nominal received signal strength in dBm.
    pub rssi: i16,
    /// Sightings required before the full ground truth is disclosed.
    ///
    /// Compared against the sighting count *before* it is incremented, so a delay of
    /// `1` resolves on the second sighting and `0` on the first.
    pub resolve_delay: u32,
    pub telemetry: Option<TelemetryProfile>,
    pub mesh: Option<MeshIdentity>,
}

impl DeviceTemplate {
    pub fn new(
        id: impl Into<String>,
        signal_type: SignalType,
        name: impl Into<String>,
        device_type: impl Into<String>,
        manufacturer: impl Into<String>,
        protocol: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            signal_type,
            name: name.into(),
            device_type: device_type.into(),
            manufacturer: manufacturer.into(),
            protocol: protocol.into(),
            frequency: None,
            channel: None,
            encryption: String::from("None"),
            rssi: -70,
            resolve_delay: 0,
            telemetry: None,
            mesh: None,
        }
    }

    pub fn with_frequency(mut self, frequency: u64) -> Self {
        self.frequency = Some(frequency);
        self
    }

    pub fn with_channel(mut self, channel: u16) -> Self {
        self.channel = Some(channel);
        self
    }

    pub fn with_encryption(mut self, encryption: impl Into<String>) -> Self {
        self.encryption = encryption.into();
        self
    }

    pub fn with_rssi(mut self, rssi: i16) -> Self {
        self.rssi = rssi;
        self
    }

    pub fn with_resolve_delay(mut self, resolve_delay: u32) -> Self {
        self.resolve_delay = resolve_delay;
        self
    }

    pub fn with_telemetry(mut self, base_lat: f64, base_lng: f64, drift_radius: f64) -> Self {
        self.telemetry = Some(TelemetryProfile {
            base_lat,
            base_lng,
            base_alt: None,
            drift_radius,
        });
        self
    }

    /// Adds a base altitude. Has no effect unless telemetry was declared first.
    pub fn with_altitude(mut self, base_alt: f64) -> Self {
        if let Some(profile) = self.telemetry.as_mut() {
            profile.base_alt = Some(base_alt);
        }
        self
    }

    pub fn with_mesh_names(
        mut self,
        short_name: impl Into<String>,
        long_name: impl Into<String>,
    ) -> Self {
        self.mesh = Some(MeshIdentity {
            short_name: short_name.into(),
            long_name: long_name.into(),
        });
        self
    }

    pub fn has_telemetry(&self) -> bool {
        self.telemetry.is_some()
    }

    /// The name shown once the template is fully resolved.
    pub fn display_name(&self) -> String {
        match &self.mesh {
            Some(mesh) => format!("{} ({})", mesh.long_name, mesh.short_name),
            None => self.name.clone(),
        }
    }
}
