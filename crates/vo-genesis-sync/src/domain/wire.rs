//! # Wire Envelopes
//!
//! Typed shapes of the seed-host endpoints. These formats are fixed by the
//! deployed services and must be consumed bit-for-bit as published.

use serde::{Deserialize, Serialize};

use super::errors::GenesisSyncError;

/// One response from the chunked genesis endpoint:
/// `{"result": {"chunk": "<n>", "total": "<n>", "data": "<base64>"}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkEnvelope {
    /// RPC result wrapper.
    pub result: ChunkPayload,
}

/// Payload of a [`ChunkEnvelope`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkPayload {
    /// Zero-based index of this chunk, string-encoded.
    pub chunk: String,
    /// Total number of chunks, string-encoded.
    pub total: String,
    /// Base64-encoded chunk bytes.
    pub data: String,
}

impl ChunkPayload {
    /// Parse the reported chunk total.
    ///
    /// A total that does not parse as an integer, or parses to zero, makes
    /// the whole fetch unusable.
    pub fn parse_total(&self) -> Result<u64, GenesisSyncError> {
        match self.total.parse::<u64>() {
            Ok(0) | Err(_) => Err(GenesisSyncError::ChunkTotal {
                raw: self.total.clone(),
            }),
            Ok(total) => Ok(total),
        }
    }
}

/// Response of the query-relay checksum endpoint:
/// `{"checksum": "0x<hex>"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecksumResponse {
    /// Published genesis checksum, `0x`-prefixed hex.
    pub checksum: String,
}

impl ChecksumResponse {
    /// Strip the mandatory `0x` prefix.
    ///
    /// A missing prefix means the relay is not speaking the expected
    /// protocol and is an error, not something to tolerate silently.
    pub fn hex_digest(&self) -> Result<&str, GenesisSyncError> {
        self.checksum
            .strip_prefix("0x")
            .ok_or_else(|| GenesisSyncError::ChecksumFormat {
                raw: self.checksum.clone(),
            })
    }
}
