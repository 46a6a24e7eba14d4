//! # State Transitions
//!
//! The three operator-driven transitions and their state requirements.

use std::fmt;

use shared_types::ValidatorState;

/// A named lifecycle operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateTransition {
    /// Take an active validator out of consensus voluntarily.
    Pause,
    /// Return a paused validator to consensus.
    Unpause,
    /// Reactivate a validator the network deactivated.
    Activate,
}

impl StateTransition {
    /// Daemon CLI subcommand submitting this transition.
    pub fn subcommand(&self) -> &'static str {
        match self {
            StateTransition::Pause => "pause",
            StateTransition::Unpause => "unpause",
            StateTransition::Activate => "activate",
        }
    }

    /// State the validator must be in before submission.
    pub fn precondition(&self) -> ValidatorState {
        match self {
            StateTransition::Pause => ValidatorState::Active,
            StateTransition::Unpause => ValidatorState::Paused,
            StateTransition::Activate => ValidatorState::Inactive,
        }
    }

    /// State that must be observed after confirmation, if any.
    pub fn postcondition(&self) -> Option<ValidatorState> {
        match self {
            StateTransition::Pause => Some(ValidatorState::Paused),
            StateTransition::Unpause | StateTransition::Activate => None,
        }
    }

    /// Whether status is re-read after confirmation even without a gated
    /// postcondition.
    pub fn reads_status_after(&self) -> bool {
        !matches!(self, StateTransition::Activate)
    }
}

impl fmt::Display for StateTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subcommand())
    }
}
