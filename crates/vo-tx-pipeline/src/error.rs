//! # Pipeline Errors
//!
//! Single failure taxonomy for submit / confirm / query.

use thiserror::Error;

use shared_types::ExecError;

/// Transaction pipeline errors.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Command execution in the validator's context failed.
    #[error(transparent)]
    Exec(#[from] ExecError),

    /// The daemon emitted output that does not decode as expected.
    ///
    /// Async broadcast is known to print partial or human-readable text on
    /// some failures, so the raw output is carried for diagnosis.
    #[error("malformed daemon output: {reason}; raw: {raw}")]
    Decode {
        /// What failed while decoding.
        reason: String,
        /// Raw stdout for diagnosis, truncated.
        raw: String,
    },

    /// No new block was observed within the confirmation budget.
    ///
    /// Distinguishes a possibly-live-but-slow network from a hung one; the
    /// caller may retry the whole pipeline call.
    #[error("no new block within {budget_secs}s")]
    Timeout {
        /// The budget that elapsed, in seconds.
        budget_secs: u64,
    },

    /// The caller cancelled the operation.
    #[error("pipeline cancelled by caller")]
    Cancelled,

    /// The chain executed the transaction and rejected it.
    ///
    /// Not retried automatically: resubmitting could duplicate side
    /// effects.
    #[error("transaction {hash} failed with code {code}: {raw_log}")]
    Transaction {
        /// Transaction hash.
        hash: String,
        /// Nonzero execution code.
        code: u32,
        /// Chain-side diagnostic log.
        raw_log: String,
    },
}

impl PipelineError {
    /// Build a [`PipelineError::Decode`] with the raw output truncated to a
    /// loggable size.
    pub fn decode(reason: impl Into<String>, raw: &[u8]) -> Self {
        const MAX_RAW: usize = 512;
        let mut raw = String::from_utf8_lossy(raw).into_owned();
        if raw.len() > MAX_RAW {
            raw.truncate(MAX_RAW);
            raw.push('…');
        }
        PipelineError::Decode {
            reason: reason.into(),
            raw,
        }
    }
}
