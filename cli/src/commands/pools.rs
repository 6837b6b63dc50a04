use colored::*;
use serde_json::json;
use specter_common::config::Config;
use specter_common::device::DeviceTemplate;
use specter_core::catalog::TemplateCatalog;

use crate::terminal::{format, print};

pub fn pools(cfg: &Config) -> anyhow::Result<()> {
    let catalog = TemplateCatalog::builtin();

    if cfg.json {
        let pools: Vec<_> = catalog
            .signal_types()
            .map(|(signal, _)| {
                json!({
                    "signalType": signal,
                    "devices": catalog.pool_for(signal).iter().map(|template| json!({
                        "id": template.id,
                        "name": template.display_name(),
                        "resolveDelay": template.resolve_delay,
                        "located": template.has_telemetry(),
                    })).collect::<Vec<_>>(),
                })
            })
            .collect();
        print::print(&serde_json::to_string_pretty(&pools)?);
        return Ok(());
    }

    print::header("device pools", cfg.quiet);
    for (idx, (signal, count)) in catalog.signal_types().enumerate() {
        print::tree_head(idx, signal.as_str(), format!("{count} devices").bright_black());
        if cfg.quiet > 1 {
            continue;
        }
        let details = catalog
            .pool_for(signal)
            .iter()
            .map(|template| (template.id.clone(), template_summary(template).normal()))
            .collect();
        print::as_tree_one_level(details);
    }
    print::fat_separator();
    print::aligned_line("Total", 5, catalog.len().to_string().green().bold());
    Ok(())
}

/// `name [type] frequency +delay gps`, leaving out what the template lacks.
fn template_summary(template: &DeviceTemplate) -> String {
    let mut value = format!("{} [{}]", template.display_name(), template.device_type);
    if let Some(hz) = template.frequency {
        value.push_str(&format!(" {}", format::frequency_to_str(hz)));
    }
    if template.resolve_delay > 0 {
        value.push_str(&format!(" +{}", template.resolve_delay));
    }
    if template.has_telemetry() {
        value.push_str(" gps");
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use specter_common::signal::SignalType;

    #[test]
    fn summary_marks_located_templates() {
        let gauge = DeviceTemplate::new(
            "SENSOR-WTR-1",
            SignalType::Sensor,
            "River Gauge",
            "Hydrology Sensor",
            "Campbell Scientific",
            "Proprietary 433",
        )
        .with_frequency(433_920_000)
        .with_resolve_delay(2);

        assert_eq!(
            template_summary(&gauge),
            "River Gauge [Hydrology Sensor] 433.920 MHz +2"
        );
        assert_eq!(
            template_summary(&gauge.with_telemetry(39.75, -105.0, 0.001)),
            "River Gauge [Hydrology Sensor] 433.920 MHz +2 gps"
        );
    }
}
