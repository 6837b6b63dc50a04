use std::collections::HashMap;

use async_trait::async_trait;
use specter_common::device::{DeviceReport, DiscoveredNode};
use tokio::io::{AsyncWriteExt, Stdout};

use crate::mprint;
use crate::terminal::{format, print, spinner};

/// Destination of the nodes a running scan emits.
#[async_trait]
pub trait NodeSink: Send {
    async fn publish(&mut self, node: &DiscoveredNode) -> anyhow::Result<()>;

    async fn finish(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Tracks the latest resolution state per identifier, in first-seen order.
#[derive(Default)]
struct Tally {
    seen: HashMap<String, (usize, bool)>,
}

impl Tally {
    /// Returns the first-seen index of `node`.
    fn record(&mut self, node: &DiscoveredNode) -> usize {
        let next = self.seen.len();
        let entry = self.seen.entry(node.id.clone()).or_insert((next, false));
        entry.1 = node.resolved;
        entry.0
    }

    fn unique(&self) -> usize {
        self.seen.len()
    }

    fn resolved(&self) -> usize {
        self.seen.values().filter(|(_, resolved)| *resolved).count()
    }
}

/// Prints every sighting as a small tree above the spinner.
pub struct TreeSink {
    tally: Tally,
    quiet: u8,
    printed: usize,
}

impl TreeSink {
    pub fn new(quiet: u8) -> Self {
        Self {
            tally: Tally::default(),
            quiet,
            printed: 0,
        }
    }
}

#[async_trait]
impl NodeSink for TreeSink {
    async fn publish(&mut self, node: &DiscoveredNode) -> anyhow::Result<()> {
        let idx = self.tally.record(node);
        spinner::report_scan_progress(self.tally.unique(), self.tally.resolved());

        match self.quiet {
            0 => {
                if self.printed > 0 {
                    mprint!();
                }
                print::tree_head(idx, &node.name, format::resolution_badge(node));
                print::as_tree_one_level(format::node_to_details(node));
            }
            1 => print::print_status(format!(
                "{} {} ({} dBm) {}",
                node.id,
                node.name,
                node.rssi,
                format::resolution_badge(node)
            )),
            _ => {}
        }
        self.printed += 1;
        Ok(())
    }
}

/// Writes one [`DeviceReport`] per line to stdout.
pub struct JsonSink {
    out: Stdout,
}

impl JsonSink {
    pub fn new() -> Self {
        Self {
            out: tokio::io::stdout(),
        }
    }
}

#[async_trait]
impl NodeSink for JsonSink {
    async fn publish(&mut self, node: &DiscoveredNode) -> anyhow::Result<()> {
        let mut line = serde_json::to_vec(&DeviceReport::from(node))?;
        line.push(b'\n');
        self.out.write_all(&line).await?;
        Ok(())
    }

    async fn finish(&mut self) -> anyhow::Result<()> {
        self.out.flush().await?;
        Ok(())
    }
}
