use colored::*;
use serde_json::json;
use specter_common::config::Config;
use specter_common::network::mac::{self, IdentifierScheme};

use crate::commands::scan::resolver;
use crate::terminal::{colors, print};

pub fn lookup(identifier: &str, cfg: &Config) -> anyhow::Result<()> {
    let resolver = resolver(cfg.vendor_db)?;
    let manufacturer = resolver.lookup_manufacturer(identifier);
    let (scheme, prefix) = describe(identifier);

    if cfg.json {
        let report = json!({
            "identifier": identifier,
            "scheme": scheme,
            "oui": prefix,
            "manufacturer": manufacturer,
        });
        print::print(&report.to_string());
        return Ok(());
    }

    print::header("manufacturer lookup", cfg.quiet);
    let manufacturer: ColoredString = match manufacturer {
        Some(name) => name.green().bold(),
        None => "Unknown".color(colors::UNKNOWN).italic(),
    };
    print::aligned_line("Identifier", 10, identifier);
    print::aligned_line("Scheme", 10, scheme);
    if let Some(prefix) = &prefix {
        print::aligned_line("OUI", 10, prefix);
    }
    print::aligned_line("Vendor", 10, manufacturer);
    Ok(())
}

/// The identifier scheme and, for hardware addresses, the OUI prefix looked up.
fn describe(identifier: &str) -> (&'static str, Option<String>) {
    match mac::classify(identifier) {
        IdentifierScheme::Address(mac_addr) => ("address", Some(mac::oui_prefix(mac_addr))),
        IdentifierScheme::Tagged => ("tagged", None),
        IdentifierScheme::Opaque => ("opaque", None),
    }
}
