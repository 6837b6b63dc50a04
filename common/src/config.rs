use std::time::Duration;

use thiserror::Error;

/// Default spacing between scheduler ticks.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1_500);
/// Delay before the first burst of a session.
pub const STARTUP_DELAY: Duration = Duration::from_millis(300);
/// Ticks land uniformly in `[interval - JITTER_MS, interval + JITTER_MS)`.
pub const JITTER_MS: i64 = 400;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("scan interval of {interval_ms} ms must exceed the {jitter_ms} ms tick jitter")]
    IntervalBelowJitter { interval_ms: u64, jitter_ms: i64 },
    #[error("burst probability {0} is outside 0.0..=1.0")]
    BurstProbability(f64),
    #[error("burst size range {min}..={max} is empty")]
    BurstSize { min: usize, max: usize },
}

/// Timing and burst shape of a scan session.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    pub interval: Duration,
    pub startup_delay: Duration,
    pub jitter_ms: i64,
    /// Size range of the burst emitted right after startup (capped to the pool size).
    pub initial_burst: (usize, usize),
    /// Chance that a regular tick emits a burst instead of a single node.
    pub burst_probability: f64,
    pub burst_size: (usize, usize),
    /// Seeds the session's random source; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            startup_delay: STARTUP_DELAY,
            jitter_ms: JITTER_MS,
            initial_burst: (3, 6),
            burst_probability: 0.3,
            burst_size: (2, 4),
            seed: None,
        }
    }
}

impl ScanConfig {
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Rejects shapes that would make the scheduler spin or never burst sensibly.
    ///
    /// The scheduler itself tolerates any value (negative delays saturate at zero);
    /// this is for user supplied configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let interval_ms = self.interval.as_millis() as u64;
        if interval_ms as i64 <= self.jitter_ms {
            return Err(ConfigError::IntervalBelowJitter {
                interval_ms,
                jitter_ms: self.jitter_ms,
            });
        }
        if !(0.0..=1.0).contains(&self.burst_probability) {
            return Err(ConfigError::BurstProbability(self.burst_probability));
        }
        for (min, max) in [self.initial_burst, self.burst_size] {
            if min == 0 || min > max {
                return Err(ConfigError::BurstSize { min, max });
            }
        }
        Ok(())
    }
}

/// Where manufacturer prefixes are looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VendorDb {
    /// The small static prefix table the simulated fleet is built around.
    #[default]
    Builtin,
    /// The full IEEE OUI registry.
    Ieee,
}

/// Presentation settings of the command line front end.
#[derive(Debug, Clone)]
pub struct Config {
    pub no_banner: bool,
    /// 0 prints everything, 1 drops headers, 2 prints the summary only.
    pub quiet: u8,
    /// Emit NDJSON device reports instead of trees.
    pub json: bool,
    pub vendor_db: VendorDb,
}
