//! # Domain Layer
//!
//! Error taxonomy and wire envelopes for the acquisition protocol.

pub mod errors;
pub mod wire;

pub use errors::GenesisSyncError;
pub use wire::{ChecksumResponse, ChunkEnvelope, ChunkPayload};
