use std::sync::mpsc;
use std::time::Duration;

use specter_common::config::DEFAULT_INTERVAL;
use specter_common::device::DiscoveredNode;
use specter_core::catalog::TemplateCatalog;
use specter_core::{DiscoveryService, start_passive_scan, stop_passive_scan};

use super::{router, service, tag};

fn collect(rx: &mpsc::Receiver<DiscoveredNode>) -> Vec<DiscoveredNode> {
    rx.try_iter().collect()
}

#[tokio::test(start_paused = true)]
async fn stop_before_the_first_emission_emits_nothing() {
    let (tx, rx) = mpsc::channel();
    let mut session = start_passive_scan(
        "bluetooth",
        move |node| {
            let _ = tx.send(node);
        },
        DEFAULT_INTERVAL,
    );

    tokio::time::sleep(Duration::from_millis(100)).await;
    stop_passive_scan(&mut session);
    tokio::time::sleep(Duration::from_secs(30)).await;

    assert!(collect(&rx).is_empty());
    assert!(session.is_empty());
}

#[tokio::test(start_paused = true)]
async fn no_callbacks_after_stop() {
    let (tx, rx) = mpsc::channel();
    let mut session = start_passive_scan(
        "wifi",
        move |node| {
            let _ = tx.send(node);
        },
        DEFAULT_INTERVAL,
    );

    tokio::time::sleep(Duration::from_secs(10)).await;
    stop_passive_scan(&mut session);
    assert!(!collect(&rx).is_empty());

    tokio::time::advance(Duration::from_secs(60)).await;
    tokio::task::yield_now().await;
    assert!(collect(&rx).is_empty());

    stop_passive_scan(&mut session);
    assert!(!session.is_active());
}

#[tokio::test(start_paused = true)]
async fn sessions_run_independently() {
    let (tx_a, rx_a) = mpsc::channel();
    let (tx_b, rx_b) = mpsc::channel();
    let mut lora = start_passive_scan(
        "lora",
        move |node| {
            let _ = tx_a.send(node);
        },
        DEFAULT_INTERVAL,
    );
    let mut adsb = start_passive_scan(
        "adsb",
        move |node| {
            let _ = tx_b.send(node);
        },
        DEFAULT_INTERVAL,
    );

    tokio::time::sleep(Duration::from_secs(5)).await;
    stop_passive_scan(&mut lora);
    assert!(!collect(&rx_a).is_empty());
    let _ = collect(&rx_b);

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(collect(&rx_a).is_empty());

    let later = collect(&rx_b);
    assert!(!later.is_empty());
    assert!(later.iter().all(|node| node.id.starts_with("ADSB-")));

    stop_passive_scan(&mut adsb);
}

#[tokio::test(start_paused = true)]
async fn unknown_signal_types_scan_the_mixed_pool() {
    let service = DiscoveryService::builtin();
    let engine = service.engine("tachyon", DEFAULT_INTERVAL);

    assert_eq!(engine.draw_order().len(), TemplateCatalog::builtin().len());
}

#[tokio::test(start_paused = true)]
async fn seeded_sessions_replay_the_same_emissions() {
    async fn run(seed: u64) -> Vec<(String, bool)> {
        let (tx, rx) = mpsc::channel();
        let mut session = DiscoveryService::builtin()
            .with_config(specter_common::config::ScanConfig::default().with_seed(seed))
            .start_passive_scan(
                "mixed",
                move |node| {
                    let _ = tx.send(node);
                },
                DEFAULT_INTERVAL,
            );
        tokio::time::sleep(Duration::from_secs(20)).await;
        stop_passive_scan(&mut session);
        rx.try_iter().map(|node| (node.id, node.resolved)).collect()
    }

    let first = run(99).await;
    assert!(!first.is_empty());
    assert_eq!(first, run(99).await);
}

#[tokio::test(start_paused = true)]
async fn dropping_a_session_stops_it() {
    let (tx, rx) = mpsc::channel();
    let session = service(vec![router(2), tag()], 5).start_passive_scan(
        "wifi",
        move |node| {
            let _ = tx.send(node);
        },
        DEFAULT_INTERVAL,
    );

    tokio::time::sleep(Duration::from_secs(3)).await;
    drop(session);
    let _ = collect(&rx);

    tokio::time::sleep(Duration::from_secs(30)).await;
    assert!(collect(&rx).is_empty());
}
