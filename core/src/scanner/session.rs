use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, SystemTime};

use rand::Rng;
use specter_common::device::DiscoveredNode;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::ScanEngine;

type NodeList = Arc<Mutex<Vec<DiscoveredNode>>>;

/// Handle to a running (or stopped) passive scan.
///
/// Dropping the handle stops the scan.
pub struct ScanSession {
    signal_type: String,
    active: Arc<AtomicBool>,
    nodes: NodeList,
    started_at: SystemTime,
    timer: Option<JoinHandle<()>>,
}

impl ScanSession {
    /// Spawns the scheduler loop for `engine` on the current tokio runtime.
    ///
    /// # Panics
    /// Panics when called outside of a tokio runtime, like [`tokio::spawn`].
    pub fn start<R, F>(engine: ScanEngine<R>, signal_type: &str, on_node: F) -> Self
    where
        R: Rng + Send + 'static,
        F: FnMut(DiscoveredNode) + Send + 'static,
    {
        let active = Arc::new(AtomicBool::new(true));
        let nodes: NodeList = Arc::default();

        info!(
            signal_type,
            pool = engine.draw_order().len(),
            interval_ms = engine.config().interval.as_millis() as u64,
            "passive scan started"
        );

        let timer = tokio::spawn(run(engine, Arc::clone(&active), Arc::clone(&nodes), on_node));

        Self {
            signal_type: signal_type.to_owned(),
            active,
            nodes,
            started_at: SystemTime::now(),
            timer: Some(timer),
        }
    }

    /// Clears the active flag and cancels the pending tick. Stopping twice is a no-op.
    pub fn stop(&mut self) {
        let was_active = self.active.swap(false, Ordering::AcqRel);
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        if was_active {
            info!(
                signal_type = %self.signal_type,
                discovered = self.len(),
                "passive scan stopped"
            );
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub fn signal_type(&self) -> &str {
        &self.signal_type
    }

    pub fn started_at(&self) -> SystemTime {
        self.started_at
    }

    /// Snapshot of every node discovered so far, one entry per identifier, in order
    /// of first sighting and holding the latest record.
    pub fn nodes(&self) -> Vec<DiscoveredNode> {
        self.nodes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.nodes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Drop for ScanSession {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run<R, F>(
    mut engine: ScanEngine<R>,
    active: Arc<AtomicBool>,
    nodes: NodeList,
    mut on_node: F,
)
where
    R: Rng,
    F: FnMut(DiscoveredNode),
{
    tokio::time::sleep(engine.config().startup_delay).await;
    if !active.load(Ordering::Acquire) {
        return;
    }
    let batch = engine.initial_burst();
    deliver(batch, &active, &nodes, &mut on_node);

    loop {
        let delay: Duration = engine.next_delay();
        tokio::time::sleep(delay).await;

        if !active.load(Ordering::Acquire) {
            debug!("session inactive, tick dropped");
            return;
        }
        let batch = engine.tick();
        deliver(batch, &active, &nodes, &mut on_node);
    }
}

fn deliver<F>(
    batch: Vec<DiscoveredNode>,
    active: &AtomicBool,
    nodes: &Mutex<Vec<DiscoveredNode>>,
    on_node: &mut F,
)
where
    F: FnMut(DiscoveredNode),
{
    for node in batch {
        // A stop issued mid-burst must silence the rest of it.
        if !active.load(Ordering::Acquire) {
            return;
        }
        upsert(nodes, &node);
        on_node(node);
    }
}

fn upsert(nodes: &Mutex<Vec<DiscoveredNode>>, node: &DiscoveredNode) {
    let mut nodes = nodes.lock().unwrap_or_else(PoisonError::into_inner);
    match nodes.iter_mut().find(|known| known.id == node.id) {
        Some(known) => *known = node.clone(),
        None => nodes.push(node.clone()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use specter_common::config::ScanConfig;

    use super::*;
    use crate::catalog::TemplateCatalog;
    use crate::vendors::AddressResolver;

    fn engine(signal_type: &str) -> ScanEngine<StdRng> {
        ScanEngine::new(
            TemplateCatalog::builtin().pool(signal_type),
            Arc::new(AddressResolver::builtin()),
            ScanConfig::default(),
            StdRng::seed_from_u64(21),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_is_emitted_before_the_startup_delay() {
        let (tx, rx) = mpsc::channel();
        let mut session = ScanSession::start(engine("wifi"), "wifi", move |node| {
            let _ = tx.send(node);
        });

        tokio::time::sleep(Duration::from_millis(299)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        let initial: Vec<DiscoveredNode> = rx.try_iter().collect();
        assert!((3..=6).contains(&initial.len()));

        session.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn node_list_keeps_one_entry_per_identifier() {
        let mut session = ScanSession::start(engine("rfid"), "rfid", |_| {});

        tokio::time::sleep(Duration::from_secs(60)).await;
        let nodes = session.nodes();
        session.stop();

        let pool = TemplateCatalog::builtin().pool("rfid").len();
        assert_eq!(nodes.len(), pool);
        // A minute of ticks resolves every RFID template.
        assert!(nodes.iter().all(|node| node.resolved));
    }

    #[tokio::test(start_paused = true)]
    async fn stop_silences_the_callback() {
        let (tx, rx) = mpsc::channel();
        let mut session = ScanSession::start(engine("adsb"), "adsb", move |node| {
            let _ = tx.send(node);
        });

        tokio::time::sleep(Duration::from_secs(5)).await;
        session.stop();
        let before = rx.try_iter().count();
        assert!(before > 0);

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(rx.try_iter().count(), 0);
        assert!(!session.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn stopping_twice_is_harmless() {
        let mut session = ScanSession::start(engine("lora"), "lora", |_| {});

        session.stop();
        session.stop();

        assert!(!session.is_active());
        assert!(session.is_empty());
    }
}
