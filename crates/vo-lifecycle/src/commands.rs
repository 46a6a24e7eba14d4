//! # Command Rendering
//!
//! Token vectors for the daemon CLI. Values are passed as single
//! `--flag=value` tokens so no shell quoting is involved anywhere.

use crate::config::LifecycleConfig;
use crate::transition::StateTransition;

/// Keyring lookup resolving the configured key name to a ledger address.
pub fn key_address(config: &LifecycleConfig) -> Vec<String> {
    vec![
        config.pipeline.daemon.clone(),
        "keys".to_string(),
        "show".to_string(),
        config.key_name.clone(),
        format!("--keyring-backend={}", config.keyring_backend),
        format!("--home={}", config.home),
        "--output=json".to_string(),
    ]
}

/// Chain query for the validator record keyed by ledger address.
pub fn validator_query(config: &LifecycleConfig, address: &str) -> Vec<String> {
    vec![
        config.pipeline.daemon.clone(),
        "query".to_string(),
        "validator".to_string(),
        format!("--addr={address}"),
        "--output=json".to_string(),
    ]
}

/// Transaction submitting `transition`, in async broadcast mode.
pub fn transition_tx(config: &LifecycleConfig, transition: StateTransition) -> Vec<String> {
    vec![
        config.pipeline.daemon.clone(),
        "tx".to_string(),
        "validator".to_string(),
        transition.subcommand().to_string(),
        format!("--from={}", config.key_name),
        format!("--chain-id={}", config.chain_id),
        format!("--keyring-backend={}", config.keyring_backend),
        format!("--home={}", config.home),
        format!("--fees={}", config.fees),
        format!("--gas={}", config.gas),
        "--broadcast-mode=async".to_string(),
        "--yes".to_string(),
        "--output=json".to_string(),
    ]
}
