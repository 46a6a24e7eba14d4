//! # Transaction Query
//!
//! Looks a transaction up by hash after confirmation and returns the
//! authoritative execution result.

use std::sync::Arc;

use tracing::debug;

use shared_types::{CommandExecutor, TransactionResult};

use crate::config::PipelineConfig;
use crate::error::PipelineError;

/// Queries transactions by hash through the daemon CLI.
pub struct TxQuery<E> {
    executor: Arc<E>,
    config: PipelineConfig,
}

impl<E: CommandExecutor> TxQuery<E> {
    /// Create a query handle over the configured execution context.
    pub fn new(executor: Arc<E>, config: PipelineConfig) -> Self {
        Self { executor, config }
    }

    /// Fetch the on-chain result for `hash`.
    ///
    /// The wrapped CLI emits non-JSON error text on some failures; that
    /// surfaces as [`PipelineError::Decode`] with the raw payload attached,
    /// never as a panic.
    pub async fn lookup(&self, hash: &str) -> Result<TransactionResult, PipelineError> {
        let command = vec![
            self.config.daemon.clone(),
            "query".to_string(),
            "tx".to_string(),
            hash.to_string(),
            "--output=json".to_string(),
        ];
        let stdout = self.executor.execute(&self.config.context, &command).await?;
        let result: TransactionResult = serde_json::from_slice(&stdout)
            .map_err(|e| PipelineError::decode(format!("tx query: {e}"), &stdout))?;
        debug!(
            hash = %result.txhash,
            code = result.code,
            height = result.height,
            "transaction result fetched"
        );
        Ok(result)
    }
}
