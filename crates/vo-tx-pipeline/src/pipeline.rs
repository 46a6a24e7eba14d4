//! # Command Pipeline
//!
//! Composition of executor, watcher, and query: every state-changing
//! operation runs through [`CommandPipeline::run`].

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use shared_types::{CommandExecutor, TransactionResult};

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::executor::TxExecutor;
use crate::query::TxQuery;
use crate::watcher::BlockWatcher;

/// Submit → await next block → query result → classify.
///
/// Ordering is strict; there is no speculative execution and no automatic
/// retry. One cancellation token spans the whole invocation.
pub struct CommandPipeline<E> {
    executor: TxExecutor<E>,
    watcher: BlockWatcher<E>,
    query: TxQuery<E>,
}

impl<E: CommandExecutor> CommandPipeline<E> {
    /// Build a pipeline over one execution context.
    pub fn new(executor: Arc<E>, config: PipelineConfig) -> Self {
        Self {
            executor: TxExecutor::new(executor.clone(), config.context.clone()),
            watcher: BlockWatcher::new(executor.clone(), config.clone()),
            query: TxQuery::new(executor, config),
        }
    }

    /// Run a rendered submission command to its confirmed conclusion.
    ///
    /// Success means the chain included the transaction in a block and
    /// executed it with code zero. A nonzero code surfaces as
    /// [`PipelineError::Transaction`] with the chain's log preserved.
    pub async fn run(
        &self,
        command: &[String],
        cancel: &CancellationToken,
    ) -> Result<TransactionResult, PipelineError> {
        let receipt = self.executor.submit(command).await?;
        info!(hash = %receipt.txhash, "transaction submitted, awaiting confirmation");

        self.watcher.await_next_block(cancel).await?;

        let result = self.query.lookup(&receipt.txhash).await?;
        if !result.succeeded() {
            warn!(
                hash = %result.txhash,
                code = result.code,
                raw_log = %result.raw_log,
                "transaction rejected by the chain"
            );
            return Err(PipelineError::Transaction {
                hash: result.txhash,
                code: result.code,
                raw_log: result.raw_log,
            });
        }

        info!(hash = %result.txhash, height = result.height, "transaction confirmed");
        Ok(result)
    }
}
