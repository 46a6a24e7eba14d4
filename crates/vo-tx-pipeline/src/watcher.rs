//! # Block Confirmation Watcher
//!
//! Polls chain height until it advances or the confirmation budget
//! elapses. The chain RPC exposes no subscription primitive here, so an
//! explicit poll-with-ticker loop stands in for event notification.

use std::sync::Arc;

use serde::Deserialize;
use tokio::time::{interval_at, sleep_until, Instant};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use shared_types::CommandExecutor;

use crate::config::PipelineConfig;
use crate::error::PipelineError;

/// Daemon status output; only the sync section is consumed.
#[derive(Debug, Deserialize)]
struct StatusResponse {
    #[serde(rename = "SyncInfo")]
    sync_info: SyncInfo,
}

#[derive(Debug, Deserialize)]
struct SyncInfo {
    latest_block_height: String,
}

/// Watches for the next block after a submission.
pub struct BlockWatcher<E> {
    executor: Arc<E>,
    config: PipelineConfig,
}

impl<E: CommandExecutor> BlockWatcher<E> {
    /// Create a watcher over the configured execution context.
    pub fn new(executor: Arc<E>, config: PipelineConfig) -> Self {
        Self { executor, config }
    }

    /// Read the current chain height from the daemon status command.
    pub async fn current_height(&self) -> Result<u64, PipelineError> {
        let command = vec![self.config.daemon.clone(), "status".to_string()];
        let stdout = self.executor.execute(&self.config.context, &command).await?;
        let status: StatusResponse = serde_json::from_slice(&stdout)
            .map_err(|e| PipelineError::decode(format!("status: {e}"), &stdout))?;
        status
            .sync_info
            .latest_block_height
            .parse::<u64>()
            .map_err(|_| {
                PipelineError::decode("latest_block_height is not an integer", &stdout)
            })
    }

    /// Wait until a block newer than the current one is observed.
    ///
    /// Polls once per configured tick. Returns the new height on success,
    /// [`PipelineError::Timeout`] once `block_interval + grace` elapses
    /// with no progress, or [`PipelineError::Cancelled`] within one tick of
    /// the caller's token firing. Timeout and cancellation are deliberately
    /// distinct: one describes the network, the other the caller.
    pub async fn await_next_block(&self, cancel: &CancellationToken) -> Result<u64, PipelineError> {
        let start_height = self.current_height().await?;
        debug!(
            height = start_height,
            budget_secs = self.config.budget_secs(),
            "waiting for next block"
        );

        let deadline = Instant::now() + self.config.confirm_budget();
        let tick = self.config.poll_tick();
        let mut ticks = interval_at(Instant::now() + tick, tick);

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(PipelineError::Cancelled),
                _ = sleep_until(deadline) => {
                    return Err(PipelineError::Timeout {
                        budget_secs: self.config.budget_secs(),
                    });
                }
                _ = ticks.tick() => {
                    let height = self.current_height().await?;
                    if height != start_height {
                        debug!(from = start_height, to = height, "new block observed");
                        return Ok(height);
                    }
                }
            }
        }
    }
}
