use std::io::IsTerminal;
use std::sync::Arc;
use std::time::{Duration, Instant};

use colored::*;
use specter_common::config::{Config, ScanConfig, VendorDb};
use specter_common::device::DiscoveredNode;
use specter_common::signal::SignalType;
use specter_core::catalog::TemplateCatalog;
use specter_core::vendors::{AddressResolver, MacOuiRepo};
use specter_core::{DiscoveryService, stop_passive_scan};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{debug, info};

use crate::mprint;
use crate::output::{JsonSink, NodeSink, TreeSink};
use crate::terminal::input::InputHandle;
use crate::terminal::{colors, print, spinner};

const INPUT_POLL: Duration = Duration::from_millis(100);

pub struct ScanArgs {
    pub signal_type: String,
    pub interval: Duration,
    pub duration: Option<Duration>,
    pub seed: Option<u64>,
}

pub fn resolver(vendor_db: VendorDb) -> anyhow::Result<AddressResolver> {
    Ok(match vendor_db {
        VendorDb::Builtin => AddressResolver::builtin(),
        VendorDb::Ieee => AddressResolver::new(Box::new(MacOuiRepo::load()?)),
    })
}

pub async fn scan(args: ScanArgs, cfg: &Config) -> anyhow::Result<()> {
    let mut scan_config = ScanConfig::default().with_interval(args.interval);
    if let Some(seed) = args.seed {
        scan_config = scan_config.with_seed(seed);
    }
    scan_config.validate()?;

    let service = DiscoveryService::new(
        Arc::new(TemplateCatalog::builtin()),
        Arc::new(resolver(cfg.vendor_db)?),
    )
    .with_config(scan_config);

    let pool_name = SignalType::from_name(&args.signal_type)
        .map(|signal| signal.as_str())
        .unwrap_or("mixed");
    info!(
        "Listening on the {} pool ({} devices)",
        pool_name,
        service.catalog().pool(&args.signal_type).len()
    );

    let mut sink: Box<dyn NodeSink> = if cfg.json {
        Box::new(JsonSink::new())
    } else {
        print::header(&format!("{pool_name} scan"), cfg.quiet);
        spinner::start_scan_spinner();
        Box::new(TreeSink::new(cfg.quiet))
    };

    // The key listener needs a terminal; piped runs stop on Ctrl-C or the deadline.
    let mut input = (!cfg.json && std::io::stdin().is_terminal()).then(InputHandle::new);
    if let Some(input) = input.as_mut() {
        input.start();
    }

    let (tx, mut rx) = mpsc::unbounded_channel::<DiscoveredNode>();
    let start_time = Instant::now();
    let mut session = service.start_passive_scan(
        &args.signal_type,
        move |node| {
            let _ = tx.send(node);
        },
        args.interval,
    );

    let deadline = async {
        match args.duration {
            Some(duration) => tokio::time::sleep(duration).await,
            None => std::future::pending().await,
        }
    };
    tokio::pin!(deadline);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut poll = tokio::time::interval(INPUT_POLL);

    loop {
        tokio::select! {
            Some(node) = rx.recv() => sink.publish(&node).await?,
            _ = &mut deadline => {
                debug!("scan duration elapsed");
                break;
            }
            _ = &mut ctrl_c => break,
            _ = poll.tick() => {
                if input.as_ref().is_some_and(InputHandle::should_interrupt) {
                    break;
                }
            }
        }
    }

    stop_passive_scan(&mut session);
    drop(input);
    let drained = drain(&mut rx, sink.as_mut()).await?;
    debug!(drained, "published nodes buffered at stop");
    sink.finish().await?;
    spinner::get_spinner().finish_and_clear();

    let nodes = session.nodes();
    let resolved = nodes.iter().filter(|node| node.resolved).count();
    scan_ends(nodes.len(), resolved, start_time.elapsed(), cfg);
    Ok(())
}

/// Publishes the nodes the session delivered before it was stopped but the loop never read.
async fn drain(
    rx: &mut UnboundedReceiver<DiscoveredNode>,
    sink: &mut dyn NodeSink,
) -> anyhow::Result<usize> {
    let mut drained = 0;
    while let Ok(node) = rx.try_recv() {
        sink.publish(&node).await?;
        drained += 1;
    }
    Ok(drained)
}

fn scan_ends(unique: usize, resolved: usize, total_time: Duration, cfg: &Config) {
    if cfg.json {
        info!(unique, resolved, "scan stopped after {:.2}s", total_time.as_secs_f64());
        return;
    }

    if unique == 0 {
        print::header("zero signals detected", cfg.quiet);
        print::no_results();
        return;
    }

    let sighted: ColoredString = format!("{unique} nodes").bold().green();
    let resolved: ColoredString = format!("{resolved} resolved").bold().cyan();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let summary = format!("Scan Complete: {sighted} sighted, {resolved} in {total_time}");
    let output: &ColoredString = &summary.color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            mprint!();
            print::fat_separator();
            print::centerln(output);
        }
        _ => {
            mprint!();
            info!("{}", output)
        }
    }
}
