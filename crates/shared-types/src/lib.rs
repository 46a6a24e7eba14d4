//! # Shared Types Crate
//!
//! Domain entities and outbound port traits shared across the validator-ops
//! subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: all cross-subsystem types are defined here.
//! - **Typed wire formats**: everything decoded from the daemon CLI or the
//!   relay endpoints lands in a typed struct with required fields; malformed
//!   payloads surface as errors carrying the raw text, never as silent
//!   defaults.
//! - **Ports over globals**: external capabilities (command execution inside
//!   a container) are traits injected into each service constructor.

pub mod entities;
pub mod ports;

pub use entities::{
    GenesisDocument, TransactionReceipt, TransactionResult, UnknownStateError, ValidatorInfo,
    ValidatorState,
};
pub use ports::{CommandExecutor, ExecError, MockCommandExecutor, RecordedCall};
