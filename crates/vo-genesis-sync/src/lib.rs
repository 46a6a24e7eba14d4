//! # Genesis Sync
//!
//! Acquisition and verification of the genesis document when a node joins
//! an existing network.
//!
//! ## Protocol
//!
//! A joining node must not trust a single upstream service with the initial
//! ledger state. The document is therefore fetched twice from independently
//! implemented endpoints on the seed host and checked against a separately
//! published checksum:
//!
//! 1. Chunked fetch from the consensus RPC (`/genesis_chunked?chunk=N`),
//!    base64 chunks reassembled in strictly increasing order.
//! 2. Single-shot fetch from the query-relay.
//! 3. Byte comparison of the two documents.
//! 4. Checksum fetch from the query-relay (`0x`-prefixed SHA-256 hex).
//! 5. Digest comparison against the reassembled document.
//!
//! Any HTTP failure, malformed payload, or verification mismatch aborts the
//! join; retrying is the caller's decision.
//!
//! ## Module Structure
//!
//! ```text
//! vo-genesis-sync/
//! ├── domain/          # Error taxonomy, wire envelopes
//! ├── ports/           # HttpFetcher trait + mock
//! ├── adapters/        # reqwest-backed fetcher
//! ├── service.rs       # GenesisSyncService orchestrating the protocol
//! └── config.rs        # Seed host endpoints and timeouts
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::ReqwestFetcher;
pub use config::GenesisSyncConfig;
pub use domain::{ChecksumResponse, ChunkEnvelope, ChunkPayload, GenesisSyncError};
pub use ports::{FetchError, HttpFetcher, MockFetcher};
pub use service::GenesisSyncService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
