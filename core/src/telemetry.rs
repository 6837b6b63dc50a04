//! # Telemetry Generator
//!
//! Draws independent position fixes around a template's base coordinate. There is
//! no persistent track; apparent movement between sightings is sampling noise.

use std::f64::consts::PI;

use rand::Rng;
use specter_common::device::{DeviceTemplate, Telemetry, TelemetryProfile};

/// Altitude samples land within this distance of the base altitude.
pub const ALTITUDE_JITTER: f64 = 10.0;

/// Samples a fix for `template`, or `None` when it does not report its position.
pub fn sample<R: Rng + ?Sized>(template: &DeviceTemplate, rng: &mut R) -> Option<Telemetry> {
    template
        .telemetry
        .as_ref()
        .map(|profile| sample_profile(profile, rng))
}

/// Uniform over the disk of `drift_radius` around the base coordinate.
///
/// Taking the square root of the radial draw spreads samples evenly by area;
/// a plain uniform radius would bunch them up at the centre.
pub fn sample_profile<R: Rng + ?Sized>(profile: &TelemetryProfile, rng: &mut R) -> Telemetry {
    let u: f64 = rng.random();
    let v: f64 = rng.random();
    let radius = profile.drift_radius * u.sqrt();
    let theta = 2.0 * PI * v;

    let alt = profile.base_alt.map(|base| {
        let jitter: f64 = rng.random();
        base + (jitter * 2.0 - 1.0) * ALTITUDE_JITTER
    });

    Telemetry {
        lat: profile.base_lat + radius * theta.cos(),
        lng: profile.base_lng + radius * theta.sin(),
        alt,
    }
}
