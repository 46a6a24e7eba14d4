//! # Lifecycle Configuration
//!
//! Account, chain, and fee parameters for rendering transition
//! transactions, plus the nested pipeline timing.

use serde::{Deserialize, Serialize};

use vo_tx_pipeline::PipelineConfig;

/// Configuration for the lifecycle state machine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LifecycleConfig {
    /// Transaction pipeline settings (context, daemon, timing).
    pub pipeline: PipelineConfig,

    /// Human-readable key name in the daemon's keyring; resolved to a
    /// ledger address before any chain query.
    pub key_name: String,

    /// Chain identifier passed to every transaction.
    pub chain_id: String,

    /// Keyring backend (`test`, `file`, `os`).
    pub keyring_backend: String,

    /// Daemon home directory inside the execution context.
    pub home: String,

    /// Static transaction fee, denominated (e.g. `100uvo`).
    pub fees: String,

    /// Static gas limit.
    pub gas: u64,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            pipeline: PipelineConfig::default(),
            key_name: "validator".to_string(),
            chain_id: "localnet-1".to_string(),
            keyring_backend: "test".to_string(),
            home: "/home/validator/.chaind".to_string(),
            fees: "100uvo".to_string(),
            gas: 1_000_000,
        }
    }
}

impl LifecycleConfig {
    /// Create a config for testing (fast pipeline timing).
    pub fn for_testing() -> Self {
        Self {
            pipeline: PipelineConfig::for_testing(),
            chain_id: "testnet-1".to_string(),
            ..Default::default()
        }
    }
}
