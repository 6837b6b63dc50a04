//! # Passive Discovery Service
//!
//! Entry point of the simulation. Owns the injected catalog and resolver and hands
//! out independent [`ScanSession`]s; sessions share nothing but those two
//! read-only collaborators.

use std::sync::Arc;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use specter_common::config::ScanConfig;
use specter_common::device::DiscoveredNode;

use crate::catalog::TemplateCatalog;
use crate::scanner::{ScanEngine, ScanSession};
use crate::vendors::AddressResolver;

pub struct DiscoveryService {
    catalog: Arc<TemplateCatalog>,
    resolver: Arc<AddressResolver>,
    config: ScanConfig,
}

impl DiscoveryService {
    pub fn new(catalog: Arc<TemplateCatalog>, resolver: Arc<AddressResolver>) -> Self {
        Self {
            catalog,
            resolver,
            config: ScanConfig::default(),
        }
    }

    /// The builtin fleet resolved against the builtin OUI table.
    pub fn builtin() -> Self {
        Self::new(
            Arc::new(TemplateCatalog::builtin()),
            Arc::new(AddressResolver::builtin()),
        )
    }

    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    pub fn resolver(&self) -> &AddressResolver {
        &self.resolver
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Builds the engine a session for `signal_type` would run, without starting it.
    ///
    /// Useful for stepping a session synchronously.
    pub fn engine(&self, signal_type: &str, interval: Duration) -> ScanEngine<StdRng> {
        let config = self.config.clone().with_interval(interval);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        ScanEngine::new(
            self.catalog.pool(signal_type),
            Arc::clone(&self.resolver),
            config,
            rng,
        )
    }

    /// Starts emitting simulated nodes of `signal_type` to `on_node_discovered`.
    ///
    /// Unknown signal types scan the mixed pool. Must be called from within a tokio
    /// runtime.
    pub fn start_passive_scan<F>(
        &self,
        signal_type: &str,
        on_node_discovered: F,
        interval: Duration,
    ) -> ScanSession
    where
        F: FnMut(DiscoveredNode) + Send + 'static,
    {
        let engine = self.engine(signal_type, interval);
        ScanSession::start(engine, signal_type, on_node_discovered)
    }
}

impl Default for DiscoveryService {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Starts a scan over the builtin fleet. See [`DiscoveryService::start_passive_scan`].
pub fn start_passive_scan<F>(
    signal_type: &str,
    on_node_discovered: F,
    interval: Duration,
) -> ScanSession
where
    F: FnMut(DiscoveredNode) + Send + 'static,
{
    DiscoveryService::builtin().start_passive_scan(signal_type, on_node_discovered, interval)
}

/// Stops `session`. Safe to call on a session that is already stopped.
pub fn stop_passive_scan(session: &mut ScanSession) {
    session.stop();
}
