//! # Lifecycle Service
//!
//! Orchestrates transitions: resolve address, check precondition, run the
//! transaction pipeline, confirm the observed effect.

use std::sync::Arc;

use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use shared_types::{CommandExecutor, ValidatorInfo, ValidatorState};
use vo_tx_pipeline::CommandPipeline;

use crate::commands;
use crate::config::LifecycleConfig;
use crate::error::LifecycleError;
use crate::transition::StateTransition;

/// Keyring record from `keys show --output=json`.
#[derive(Debug, Deserialize)]
struct KeyRecord {
    address: String,
}

/// Validator record as the chain reports it; integer fields arrive
/// string-encoded.
#[derive(Debug, Deserialize)]
struct ValidatorRecord {
    status: String,
    rank: String,
    streak: String,
}

/// Some daemon builds wrap the record in a `validator` object.
#[derive(Debug, Deserialize)]
struct ValidatorEnvelope {
    validator: ValidatorRecord,
}

/// The validator lifecycle state machine.
///
/// Strictly sequential per validator identity; one operator CLI process per
/// node is assumed, not a service fielding concurrent requests.
pub struct ValidatorLifecycle<E> {
    executor: Arc<E>,
    pipeline: CommandPipeline<E>,
    config: LifecycleConfig,
}

impl<E: CommandExecutor> ValidatorLifecycle<E> {
    /// Create the state machine over one execution context.
    pub fn new(executor: Arc<E>, config: LifecycleConfig) -> Self {
        let pipeline = CommandPipeline::new(executor.clone(), config.pipeline.clone());
        Self {
            executor,
            pipeline,
            config,
        }
    }

    /// Resolve the configured keyring name to its ledger address.
    ///
    /// The chain keys validator records by address, not by key name; every
    /// status read goes through this lookup first.
    pub async fn resolve_address(&self) -> Result<String, LifecycleError> {
        let command = commands::key_address(&self.config);
        let stdout = self
            .executor
            .execute(&self.config.pipeline.context, &command)
            .await?;
        let record: KeyRecord = serde_json::from_slice(&stdout)
            .map_err(|e| LifecycleError::decode(format!("keyring record: {e}"), &stdout))?;
        if record.address.is_empty() {
            return Err(LifecycleError::KeyNotFound {
                name: self.config.key_name.clone(),
            });
        }
        Ok(record.address)
    }

    /// Read the validator's current status, rank, and streak.
    pub async fn status(&self) -> Result<ValidatorInfo, LifecycleError> {
        let address = self.resolve_address().await?;
        self.status_of(&address).await
    }

    /// Pause an active validator; requires `Paused` to be observed after
    /// the transaction confirms.
    pub async fn pause(&self, cancel: &CancellationToken) -> Result<(), LifecycleError> {
        self.transition(StateTransition::Pause, cancel).await
    }

    /// Unpause a paused validator; status is re-read afterwards but the
    /// admission outcome (active vs. waiting) is the network's call.
    pub async fn unpause(&self, cancel: &CancellationToken) -> Result<(), LifecycleError> {
        self.transition(StateTransition::Unpause, cancel).await
    }

    /// Reactivate an inactive validator; success is the confirmation code
    /// alone.
    pub async fn activate(&self, cancel: &CancellationToken) -> Result<(), LifecycleError> {
        self.transition(StateTransition::Activate, cancel).await
    }

    async fn transition(
        &self,
        transition: StateTransition,
        cancel: &CancellationToken,
    ) -> Result<(), LifecycleError> {
        let address = self.resolve_address().await?;
        let before = self.status_of(&address).await?;

        if before.state != transition.precondition() {
            return Err(LifecycleError::MismatchStatus {
                expected: transition.precondition(),
                current: before.state,
            });
        }

        info!(%transition, address = %address, state = %before.state, "submitting transition");
        let command = commands::transition_tx(&self.config, transition);
        self.pipeline.run(&command, cancel).await?;

        if let Some(expected) = transition.postcondition() {
            let after = self.status_of(&address).await?;
            if after.state != expected {
                // The chain accepted the transaction but the expected side
                // effect was not observed; distinct from a rejected tx.
                return Err(LifecycleError::MismatchStatus {
                    expected,
                    current: after.state,
                });
            }
            info!(%transition, state = %after.state, "transition confirmed on chain");
        } else if transition.reads_status_after() {
            let after = self.status_of(&address).await?;
            info!(%transition, state = %after.state, "transition confirmed, status re-read");
        } else {
            info!(%transition, "transition confirmed");
        }

        Ok(())
    }

    async fn status_of(&self, address: &str) -> Result<ValidatorInfo, LifecycleError> {
        let command = commands::validator_query(&self.config, address);
        let stdout = self
            .executor
            .execute(&self.config.pipeline.context, &command)
            .await?;
        let record = decode_validator(&stdout)?;

        let state: ValidatorState = record.status.parse()?;
        let rank = parse_wire_int(&record.rank, "rank", &stdout)?;
        let streak = parse_wire_int(&record.streak, "streak", &stdout)?;

        Ok(ValidatorInfo {
            address: address.to_string(),
            state,
            rank,
            streak,
        })
    }
}

/// Decode a validator record, tolerating both shapes the daemon emits.
fn decode_validator(stdout: &[u8]) -> Result<ValidatorRecord, LifecycleError> {
    if let Ok(envelope) = serde_json::from_slice::<ValidatorEnvelope>(stdout) {
        return Ok(envelope.validator);
    }
    serde_json::from_slice::<ValidatorRecord>(stdout).map_err(|e| {
        warn!("validator record decoded as neither wrapped nor bare shape");
        LifecycleError::decode(format!("validator record: {e}"), stdout)
    })
}

fn parse_wire_int(raw: &str, field: &str, stdout: &[u8]) -> Result<i64, LifecycleError> {
    raw.parse::<i64>()
        .map_err(|_| LifecycleError::decode(format!("{field} is not an integer: {raw:?}"), stdout))
}
