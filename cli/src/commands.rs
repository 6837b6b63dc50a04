pub mod lookup;
pub mod pools;
pub mod scan;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use specter_common::config::{DEFAULT_INTERVAL, VendorDb};

#[derive(Parser)]
#[command(name = "specter")]
#[command(version, about = "A passive signal discovery simulator.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output (-q drops headers, -qq prints the summary only)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Raise log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Print machine readable JSON instead of trees
    #[arg(long, global = true)]
    pub json: bool,

    /// Manufacturer prefix database used to resolve addresses
    #[arg(long, global = true, value_enum, default_value_t = VendorDbArg::Builtin)]
    pub vendor_db: VendorDbArg,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a simulated passive scan for one signal type
    #[command(alias = "s")]
    Scan {
        /// bluetooth, wifi, rfid, sdr, lora, meshtastic, adsb or sensor; others scan everything
        #[arg(default_value = "mixed")]
        signal_type: String,
        /// Mean milliseconds between scheduler ticks
        #[arg(short, long, default_value_t = DEFAULT_INTERVAL.as_millis() as u64)]
        interval: u64,
        /// Stop by itself after this many seconds
        #[arg(short, long)]
        duration: Option<u64>,
        /// Seed the session for a reproducible scan
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List the device pools of the builtin catalog
    #[command(alias = "p")]
    Pools,
    /// Resolve the manufacturer of an identifier
    #[command(alias = "l")]
    Lookup { identifier: String },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum VendorDbArg {
    Builtin,
    Ieee,
}

impl From<VendorDbArg> for VendorDb {
    fn from(arg: VendorDbArg) -> Self {
        match arg {
            VendorDbArg::Builtin => VendorDb::Builtin,
            VendorDbArg::Ieee => VendorDb::Ieee,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_line_is_well_formed() {
        CommandLine::command().debug_assert();
    }

    #[test]
    fn scan_defaults_to_the_mixed_pool() {
        let cli = CommandLine::try_parse_from(["specter", "s"]).unwrap();
        match cli.command {
            Commands::Scan {
                signal_type,
                interval,
                duration,
                seed,
            } => {
                assert_eq!(signal_type, "mixed");
                assert_eq!(interval, 1_500);
                assert_eq!(duration, None);
                assert_eq!(seed, None);
            }
            _ => panic!("expected the scan command"),
        }
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = CommandLine::try_parse_from([
            "specter",
            "scan",
            "wifi",
            "-qq",
            "--json",
            "--vendor-db",
            "ieee",
        ])
        .unwrap();
        assert_eq!(cli.quiet, 2);
        assert!(cli.json);
        assert!(matches!(cli.vendor_db, VendorDbArg::Ieee));
    }
}
