//! # Lifecycle Errors

use thiserror::Error;

use shared_types::{ExecError, UnknownStateError, ValidatorState};
use vo_tx_pipeline::PipelineError;

/// Validator lifecycle errors.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// The validator is not in the state a transition requires.
    ///
    /// Raised before submission (precondition, no transaction was sent) or
    /// after a confirmed transaction whose expected side effect was not
    /// observed — the `Display` text tells the operator which.
    #[error("validator status mismatch: expected {expected}, current {current}")]
    MismatchStatus {
        /// State the transition requires.
        expected: ValidatorState,
        /// State the chain reported.
        current: ValidatorState,
    },

    /// The transaction pipeline failed (submission, confirmation, or
    /// chain-side rejection).
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// A status or keyring command failed to execute.
    #[error(transparent)]
    Exec(#[from] ExecError),

    /// The daemon emitted output that does not decode as expected.
    #[error("malformed daemon output: {reason}; raw: {raw}")]
    Decode {
        /// What failed while decoding.
        reason: String,
        /// Raw stdout for diagnosis, truncated.
        raw: String,
    },

    /// The chain reported a status string this tooling does not know.
    #[error(transparent)]
    UnknownState(#[from] UnknownStateError),

    /// The keyring has no usable entry under the configured name.
    #[error("keyring entry {name:?} has no address")]
    KeyNotFound {
        /// The configured key name.
        name: String,
    },
}

impl LifecycleError {
    /// Build a [`LifecycleError::Decode`] with the raw output truncated to
    /// a loggable size.
    pub fn decode(reason: impl Into<String>, raw: &[u8]) -> Self {
        const MAX_RAW: usize = 512;
        let mut raw = String::from_utf8_lossy(raw).into_owned();
        if raw.len() > MAX_RAW {
            raw.truncate(MAX_RAW);
            raw.push('…');
        }
        LifecycleError::Decode {
            reason: reason.into(),
            raw,
        }
    }
}
