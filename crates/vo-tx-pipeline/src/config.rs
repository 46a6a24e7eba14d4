//! # Pipeline Configuration
//!
//! Execution context, daemon binary, and confirmation timing. The grace
//! period and poll tick are tunables rather than constants so that slow
//! networks can widen them and tests can shrink them.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the transaction pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Execution context (container name) the daemon runs in.
    pub context: String,

    /// Daemon CLI binary name inside the context.
    pub daemon: String,

    /// Expected inter-block time of the network, in seconds.
    pub block_interval_secs: u64,

    /// Grace added on top of the block interval before declaring a
    /// confirmation timeout, in seconds.
    pub confirm_grace_secs: u64,

    /// Height poll tick, in milliseconds.
    pub poll_tick_millis: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            context: "validator".to_string(),
            daemon: "chaind".to_string(),
            block_interval_secs: 10,
            confirm_grace_secs: 5,
            poll_tick_millis: 1_000,
        }
    }
}

impl PipelineConfig {
    /// Total confirmation budget: block interval plus grace.
    pub fn confirm_budget(&self) -> Duration {
        Duration::from_secs(self.budget_secs())
    }

    /// Confirmation budget in whole seconds, as reported in timeout errors.
    pub fn budget_secs(&self) -> u64 {
        self.block_interval_secs + self.confirm_grace_secs
    }

    /// Height poll tick.
    pub fn poll_tick(&self) -> Duration {
        Duration::from_millis(self.poll_tick_millis)
    }

    /// Create a config for testing (short budget, fast tick).
    pub fn for_testing() -> Self {
        Self {
            context: "validator-test".to_string(),
            daemon: "chaind".to_string(),
            block_interval_secs: 2,
            confirm_grace_secs: 1,
            poll_tick_millis: 100,
        }
    }
}
