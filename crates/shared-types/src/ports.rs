//! # Outbound Ports
//!
//! Traits for external capabilities the subsystems depend on, plus the mock
//! implementations used throughout the test suites.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;
use thiserror::Error;

/// Command execution failures surfaced by a [`CommandExecutor`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecError {
    /// The runtime could not launch the command at all.
    #[error("failed to launch {program}: {message}")]
    Launch {
        /// Program that failed to start.
        program: String,
        /// OS-level failure description.
        message: String,
    },

    /// The command ran but exited nonzero.
    #[error("command exited with status {status}: {stderr}")]
    Failed {
        /// Process exit status.
        status: i32,
        /// Captured stderr.
        stderr: String,
    },
}

/// Runs a command inside a named execution context (a container) and
/// captures its output.
///
/// The subsystems render full token vectors; implementations perform no
/// quoting or interpretation of their own.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Execute `command` inside `context` and return captured stdout.
    async fn execute(&self, context: &str, command: &[String]) -> Result<Vec<u8>, ExecError>;
}

// =============================================================================
// Mock Implementation for Testing
// =============================================================================

/// One call observed by [`MockCommandExecutor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Execution context the call targeted.
    pub context: String,
    /// Full token vector of the command.
    pub tokens: Vec<String>,
}

impl RecordedCall {
    /// Whether the rendered command contains `needle` as a substring.
    pub fn contains(&self, needle: &str) -> bool {
        self.tokens.join(" ").contains(needle)
    }
}

struct Stub {
    needle: String,
    responses: VecDeque<Result<Vec<u8>, ExecError>>,
}

/// Scripted [`CommandExecutor`] for tests.
///
/// Commands are matched against registered stubs by substring over the
/// space-joined token vector. A stub with several queued responses pops
/// them in order and keeps repeating the last one, which lets tests model
/// an advancing chain height with two queued status outputs.
#[derive(Default)]
pub struct MockCommandExecutor {
    stubs: Mutex<Vec<Stub>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockCommandExecutor {
    /// Create an empty mock; unmatched commands fail the test.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a stdout payload for commands matching `needle`.
    pub fn stub_output(&self, needle: &str, stdout: impl Into<Vec<u8>>) {
        self.push(needle, Ok(stdout.into()));
    }

    /// Queue an execution failure for commands matching `needle`.
    pub fn stub_error(&self, needle: &str, error: ExecError) {
        self.push(needle, Err(error));
    }

    fn push(&self, needle: &str, response: Result<Vec<u8>, ExecError>) {
        let mut stubs = self.stubs.lock();
        if let Some(stub) = stubs.iter_mut().find(|s| s.needle == needle) {
            stub.responses.push_back(response);
        } else {
            stubs.push(Stub {
                needle: needle.to_string(),
                responses: VecDeque::from([response]),
            });
        }
    }

    /// All calls observed so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    /// Number of calls whose rendered command contains `needle`.
    pub fn calls_matching(&self, needle: &str) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| c.contains(needle))
            .count()
    }
}

#[async_trait]
impl CommandExecutor for MockCommandExecutor {
    async fn execute(&self, context: &str, command: &[String]) -> Result<Vec<u8>, ExecError> {
        self.calls.lock().push(RecordedCall {
            context: context.to_string(),
            tokens: command.to_vec(),
        });

        let rendered = command.join(" ");
        let mut stubs = self.stubs.lock();
        let stub = stubs
            .iter_mut()
            .find(|s| rendered.contains(&s.needle))
            .unwrap_or_else(|| panic!("no stub registered for command: {rendered}"));

        if stub.responses.len() > 1 {
            stub.responses.pop_front().expect("nonempty queue")
        } else {
            stub.responses
                .front()
                .cloned()
                .unwrap_or_else(|| panic!("stub {:?} has no responses", stub.needle))
        }
    }
}
