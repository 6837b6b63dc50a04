//! # Scan Scheduler
//!
//! [`ScanEngine`] holds everything that decides *what* a session emits: the
//! shuffled draw order, the round-robin cursor, the progressive state and the
//! session's random source. It has no notion of time beyond computing the next
//! delay, so it can be stepped synchronously.
//!
//! [`ScanSession`] drives an engine on a tokio task and owns the cancellation
//! handle.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use rand::seq::SliceRandom;
use specter_common::config::ScanConfig;
use specter_common::device::{DeviceTemplate, DiscoveredNode};
use tracing::{debug, trace};

use crate::progressive::ProgressiveState;
use crate::vendors::AddressResolver;

mod session;

pub use session::ScanSession;

pub struct ScanEngine<R> {
    draw_order: Vec<Arc<DeviceTemplate>>,
    cursor: usize,
    state: ProgressiveState,
    resolver: Arc<AddressResolver>,
    config: ScanConfig,
    rng: R,
}

impl<R: Rng> ScanEngine<R> {
    /// Shuffles `pool` into the session's draw order.
    pub fn new(
        mut pool: Vec<Arc<DeviceTemplate>>,
        resolver: Arc<AddressResolver>,
        config: ScanConfig,
        mut rng: R,
    ) -> Self {
        pool.shuffle(&mut rng);
        Self {
            draw_order: pool,
            cursor: 0,
            state: ProgressiveState::new(),
            resolver,
            config,
            rng,
        }
    }

    pub fn draw_order(&self) -> &[Arc<DeviceTemplate>] {
        &self.draw_order
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn progress(&self) -> &ProgressiveState {
        &self.state
    }

    /// The burst emitted once the startup delay has elapsed.
    ///
    /// Its size is drawn from the configured range and capped to the pool size, so a
    /// session never sights the same template twice before it has seen them all once.
    pub fn initial_burst(&mut self) -> Vec<DiscoveredNode> {
        let count = draw_count(&mut self.rng, self.config.initial_burst).min(self.draw_order.len());
        debug!(count, "initial burst");
        self.emit(count)
    }

    /// One regular tick: usually a single node, occasionally a burst.
    pub fn tick(&mut self) -> Vec<DiscoveredNode> {
        let probability = self.config.burst_probability.clamp(0.0, 1.0);
        let count = if self.rng.random_bool(probability) {
            draw_count(&mut self.rng, self.config.burst_size)
        } else {
            1
        };
        debug!(count, "tick");
        self.emit(count)
    }

    /// Spacing until the next tick: the interval plus a uniform jitter in
    /// `[-jitter_ms, jitter_ms)`, never below zero.
    pub fn next_delay(&mut self) -> Duration {
        let jitter_ms = self.config.jitter_ms.max(0);
        let jitter = if jitter_ms == 0 {
            0
        } else {
            self.rng.random_range(-jitter_ms..jitter_ms)
        };
        let interval_ms = i64::try_from(self.config.interval.as_millis()).unwrap_or(i64::MAX);
        let delay_ms = interval_ms.saturating_add(jitter).max(0);
        trace!(delay_ms, "next tick scheduled");
        Duration::from_millis(delay_ms as u64)
    }

    /// Draws `count` templates round-robin, wrapping around the draw order.
    fn emit(&mut self, count: usize) -> Vec<DiscoveredNode> {
        if self.draw_order.is_empty() {
            return Vec::new();
        }

        let mut nodes = Vec::with_capacity(count);
        for _ in 0..count {
            let template = Arc::clone(&self.draw_order[self.cursor]);
            self.cursor = (self.cursor + 1) % self.draw_order.len();

            let node = self.state.observe(&template, &self.resolver, &mut self.rng);
            debug!(id = %node.id, resolved = node.resolved, "node sighted");
            nodes.push(node);
        }
        nodes
    }
}

fn draw_count<R: Rng + ?Sized>(rng: &mut R, (min, max): (usize, usize)) -> usize {
    if min >= max {
        min
    } else {
        rng.random_range(min..=max)
    }
}
