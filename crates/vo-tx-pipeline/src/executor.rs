//! # Transaction Executor
//!
//! Runs a fully rendered submission command in the validator's execution
//! context and decodes the immediate receipt.

use std::sync::Arc;

use tracing::debug;

use shared_types::{CommandExecutor, TransactionReceipt};

use crate::error::PipelineError;

/// Submits rendered transaction commands and parses their receipts.
///
/// Callers are responsible for correct token rendering (account, chain id,
/// keyring, fees, `--broadcast-mode=async --yes --output=json`); this type
/// only executes and decodes.
pub struct TxExecutor<E> {
    executor: Arc<E>,
    context: String,
}

impl<E: CommandExecutor> TxExecutor<E> {
    /// Create an executor bound to one execution context.
    pub fn new(executor: Arc<E>, context: impl Into<String>) -> Self {
        Self {
            executor,
            context: context.into(),
        }
    }

    /// Run a submission command and decode its [`TransactionReceipt`].
    pub async fn submit(&self, command: &[String]) -> Result<TransactionReceipt, PipelineError> {
        debug!(context = %self.context, "submitting transaction");
        let stdout = self.executor.execute(&self.context, command).await?;
        let receipt: TransactionReceipt = serde_json::from_slice(&stdout)
            .map_err(|e| PipelineError::decode(format!("receipt: {e}"), &stdout))?;
        debug!(hash = %receipt.txhash, code = receipt.code, "transaction accepted by mempool");
        Ok(receipt)
    }
}
