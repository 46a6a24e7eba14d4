//! # Core Domain Entities
//!
//! Types shared by the genesis-sync and lifecycle subsystems: the verified
//! genesis document, transaction receipts/results as emitted by the daemon
//! CLI, and the validator status read from the chain.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

// =============================================================================
// GENESIS
// =============================================================================

/// The network's initial ledger state, as an opaque byte sequence.
///
/// Immutable once verified. Constructed only by the genesis acquisition
/// protocol after the mirror and checksum checks have passed.
#[derive(Clone, PartialEq, Eq)]
pub struct GenesisDocument(Vec<u8>);

impl GenesisDocument {
    /// Wrap verified genesis bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Raw document bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Document size in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the document is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the wrapper and return the bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl fmt::Debug for GenesisDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenesisDocument")
            .field("len", &self.0.len())
            .finish()
    }
}

// =============================================================================
// TRANSACTIONS
// =============================================================================

/// Immediate result of submitting a transaction in async broadcast mode.
///
/// `code` here reflects only mempool acceptance and is not authoritative;
/// the on-chain outcome is read later via [`TransactionResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    /// Hash under which the transaction can be queried once included.
    pub txhash: String,
    /// Submission-time code (mempool acceptance only).
    pub code: u32,
}

/// On-chain execution result of a transaction, queried by hash after
/// confirmation.
///
/// `code == 0` is the only authoritative success signal; any nonzero value
/// is a transaction-level failure with `raw_log` carrying the daemon's
/// diagnostic text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResult {
    /// Transaction hash.
    pub txhash: String,
    /// Execution code; zero means success.
    pub code: u32,
    /// Height of the block that included the transaction.
    #[serde(deserialize_with = "de_string_u64")]
    pub height: u64,
    /// Execution log emitted by the chain (failure diagnostics).
    #[serde(default)]
    pub raw_log: String,
}

impl TransactionResult {
    /// Whether the chain executed the transaction successfully.
    pub fn succeeded(&self) -> bool {
        self.code == 0
    }
}

/// Deserialize a string-encoded unsigned integer (`"123"`), as the daemon
/// CLI emits heights.
fn de_string_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse::<u64>()
        .map_err(|_| serde::de::Error::custom(format!("not a string-encoded integer: {raw:?}")))
}

// =============================================================================
// VALIDATOR STATUS
// =============================================================================

/// Operational state of a validator as reported by the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidatorState {
    /// Participating in consensus.
    Active,
    /// Voluntarily out of consensus; can be unpaused by the operator.
    Paused,
    /// Deactivated by the network; requires an activate transaction.
    Inactive,
    /// Claimed a seat but not yet admitted to the active set.
    Waiting,
    /// Punished by the network; cannot be recovered by this tooling.
    Jailed,
}

impl ValidatorState {
    /// Canonical uppercase form used by the chain.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidatorState::Active => "ACTIVE",
            ValidatorState::Paused => "PAUSED",
            ValidatorState::Inactive => "INACTIVE",
            ValidatorState::Waiting => "WAITING",
            ValidatorState::Jailed => "JAILED",
        }
    }
}

impl fmt::Display for ValidatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status string the chain reported that maps to no known state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown validator state: {0:?}")]
pub struct UnknownStateError(pub String);

impl FromStr for ValidatorState {
    type Err = UnknownStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ACTIVE" => Ok(ValidatorState::Active),
            "PAUSED" => Ok(ValidatorState::Paused),
            "INACTIVE" => Ok(ValidatorState::Inactive),
            "WAITING" => Ok(ValidatorState::Waiting),
            "JAILED" => Ok(ValidatorState::Jailed),
            _ => Err(UnknownStateError(s.to_string())),
        }
    }
}

/// Validator status record read from the chain, keyed by ledger address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorInfo {
    /// Ledger address the record was queried under.
    pub address: String,
    /// Current operational state.
    pub state: ValidatorState,
    /// Consensus rank.
    pub rank: i64,
    /// Current uptime streak.
    pub streak: i64,
}
