mod commands;
mod output;
mod terminal;

use std::time::Duration;

use commands::{CommandLine, Commands, lookup, pools, scan};
use specter_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        json: commands.json,
        vendor_db: commands.vendor_db.into(),
    };

    if !cfg.json {
        print::banner(cfg.no_banner, cfg.quiet);
    }

    match commands.command {
        Commands::Scan {
            signal_type,
            interval,
            duration,
            seed,
        } => {
            let args = scan::ScanArgs {
                signal_type,
                interval: Duration::from_millis(interval),
                duration: duration.map(Duration::from_secs),
                seed,
            };
            scan::scan(args, &cfg).await
        }
        Commands::Pools => pools::pools(&cfg),
        Commands::Lookup { identifier } => lookup::lookup(&identifier, &cfg),
    }
}
