use colored::*;
use specter_common::device::{DiscoveredNode, UNKNOWN};

use crate::terminal::colors;

type Detail = (String, ColoredString);

/// `2412000000` -> `2.412 GHz`.
pub fn frequency_to_str(hz: u64) -> String {
    match hz {
        1_000_000_000.. => format!("{:.3} GHz", hz as f64 / 1e9),
        1_000_000.. => format!("{:.3} MHz", hz as f64 / 1e6),
        1_000.. => format!("{:.1} kHz", hz as f64 / 1e3),
        _ => format!("{hz} Hz"),
    }
}

pub fn resolution_badge(node: &DiscoveredNode) -> ColoredString {
    if node.resolved {
        "resolved".color(colors::RESOLVED).bold()
    } else {
        "partial".color(colors::PARTIAL)
    }
}

fn text_or_unknown(value: &str) -> ColoredString {
    if value == UNKNOWN {
        value.color(colors::UNKNOWN).italic()
    } else {
        value.normal()
    }
}

pub fn node_to_details(node: &DiscoveredNode) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        ("ID".to_string(), node.id.as_str().normal()),
        ("Type".to_string(), text_or_unknown(&node.device_type)),
        ("Vendor".to_string(), text_or_unknown(node.manufacturer_or_unknown())),
        ("Proto".to_string(), node.protocol.as_str().normal()),
    ];

    if let Some(hz) = node.frequency {
        details.push(("Freq".to_string(), frequency_to_str(hz).normal()));
    }
    if let Some(channel) = node.channel {
        details.push(("Channel".to_string(), channel.to_string().normal()));
    }

    details.push(("Crypto".to_string(), text_or_unknown(&node.encryption)));
    details.push(("RSSI".to_string(), format!("{} dBm", node.rssi).normal()));

    if let Some(fix) = &node.telemetry {
        let mut position = format!("{:.5}, {:.5}", fix.lat, fix.lng);
        if let Some(alt) = fix.alt {
            position.push_str(&format!(" @ {alt:.0} m"));
        }
        details.push(("Fix".to_string(), position.color(colors::ACCENT)));
    }

    details
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequencies_pick_a_readable_unit() {
        assert_eq!(frequency_to_str(2_412_000_000), "2.412 GHz");
        assert_eq!(frequency_to_str(433_920_000), "433.920 MHz");
        assert_eq!(frequency_to_str(125_000), "125.0 kHz");
        assert_eq!(frequency_to_str(60), "60 Hz");
    }
}
