use std::time::Duration;

use rand::rngs::StdRng;
use specter_common::config::DEFAULT_INTERVAL;
use specter_common::device::{DiscoveredNode, UNKNOWN};
use specter_core::ScanEngine;

use super::{router, service, tag};

/// Steps `engine` until `count` nodes have been emitted.
fn emissions(engine: &mut ScanEngine<StdRng>, count: usize) -> Vec<DiscoveredNode> {
    let mut nodes = engine.initial_burst();
    while nodes.len() < count {
        nodes.extend(engine.tick());
    }
    nodes
}

#[test]
fn a_single_template_reveals_itself_over_three_sightings() {
    let mut engine = service(vec![router(2)], 1).engine("wifi", DEFAULT_INTERVAL);
    let nodes = emissions(&mut engine, 4);

    let first = &nodes[0];
    assert!(!first.resolved);
    assert_eq!(first.name, "TP-Link Device");
    assert_eq!(first.manufacturer.as_deref(), Some("TP-Link"));
    assert_eq!(first.device_type, UNKNOWN);
    assert_eq!(first.encryption, UNKNOWN);
    assert!(!first.has_telemetry);

    let second = &nodes[1];
    assert!(!second.resolved);
    assert_eq!(second.manufacturer.as_deref(), Some("TP-Link Systems Inc."));
    assert_eq!(second.device_type, "Router");
    assert_eq!(second.encryption, "WPA2");
    assert!(second.has_telemetry);

    for node in &nodes[2..] {
        assert!(node.resolved);
        assert_eq!(node.name, "Archer_C7");
        assert_eq!(node.channel, Some(36));
    }
}

#[test]
fn tagged_identifiers_start_without_a_manufacturer() {
    let mut engine = service(vec![tag()], 3).engine("rfid", DEFAULT_INTERVAL);
    let nodes = emissions(&mut engine, 2);

    assert_eq!(nodes[0].name, "RFID-0042");
    assert_eq!(nodes[0].manufacturer, None);
    assert!(!nodes[0].resolved);

    assert!(nodes[1].resolved);
    assert_eq!(nodes[1].manufacturer.as_deref(), Some("HID Global"));
}

#[test]
fn sighting_counts_match_emissions() {
    let mut engine = service(vec![router(3), tag()], 8).engine("mixed", DEFAULT_INTERVAL);
    let nodes = emissions(&mut engine, 40);

    for id in ["C4:E9:84:12:34:56", "RFID-0042"] {
        let emitted = nodes.iter().filter(|node| node.id == id).count() as u32;
        assert_eq!(engine.progress().sightings(id), emitted);
    }
    assert_eq!(engine.progress().tracked(), 2);
}

#[test]
fn resolution_never_reverts() {
    let mut engine = service(vec![router(4), tag()], 13).engine("mixed", DEFAULT_INTERVAL);
    let nodes = emissions(&mut engine, 60);

    for id in ["C4:E9:84:12:34:56", "RFID-0042"] {
        let flags: Vec<bool> = nodes.iter().filter(|n| n.id == id).map(|n| n.resolved).collect();
        let first_resolved = flags.iter().position(|resolved| *resolved).unwrap_or(flags.len());
        assert!(flags[first_resolved..].iter().all(|resolved| *resolved));
    }
}

#[tokio::test(start_paused = true)]
async fn session_node_list_holds_the_latest_record() {
    let mut session =
        service(vec![router(2), tag()], 21).start_passive_scan("mixed", |_| {}, DEFAULT_INTERVAL);

    tokio::time::sleep(Duration::from_secs(30)).await;
    session.stop();

    let nodes = session.nodes();
    assert_eq!(nodes.len(), 2);
    assert!(nodes.iter().all(|node| node.resolved));
}
