//! # Genesis Sync Service
//!
//! Orchestrates the three-way acquisition protocol: chunked RPC fetch,
//! single-shot relay fetch, and checksum verification.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use sha2::{Digest, Sha256};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use shared_types::GenesisDocument;

use crate::config::GenesisSyncConfig;
use crate::domain::{ChecksumResponse, ChunkEnvelope, GenesisSyncError};
use crate::ports::HttpFetcher;

/// Acquires and verifies the genesis document from a seed host.
///
/// One instance performs one join attempt; the caller decides whether a
/// failed attempt is retried.
pub struct GenesisSyncService<F: HttpFetcher> {
    config: GenesisSyncConfig,
    fetcher: F,
}

impl<F: HttpFetcher> GenesisSyncService<F> {
    /// Create a service for the given seed host.
    pub fn new(config: GenesisSyncConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    /// Run the full acquisition protocol and return the verified document.
    ///
    /// Aborts with the first failure: HTTP error, malformed payload,
    /// mirror mismatch, or checksum mismatch. Observes `cancel` between
    /// requests and returns [`GenesisSyncError::Cancelled`] promptly once
    /// it fires.
    pub async fn acquire(
        &self,
        cancel: &CancellationToken,
    ) -> Result<GenesisDocument, GenesisSyncError> {
        let chunked = self.fetch_chunked(cancel).await?;
        info!(bytes = chunked.len(), "reassembled chunked genesis");

        let relay_url = self.config.genesis_url();
        let mirror = self.fetch(&relay_url, cancel).await?;
        info!(bytes = mirror.len(), "fetched relay genesis");

        if chunked != mirror {
            return Err(GenesisSyncError::MirrorMismatch {
                rpc_len: chunked.len(),
                relay_len: mirror.len(),
            });
        }

        let published = self.fetch_checksum(cancel).await?;
        let computed = hex::encode(Sha256::digest(&chunked));
        if computed != published {
            return Err(GenesisSyncError::ChecksumMismatch {
                published,
                computed,
            });
        }

        info!(checksum = %computed, "genesis verified against both endpoints");
        Ok(GenesisDocument::new(chunked))
    }

    /// Fetch and reassemble the chunked genesis from the consensus RPC.
    ///
    /// Chunks are requested in strictly increasing order; the total comes
    /// from the first response.
    async fn fetch_chunked(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>, GenesisSyncError> {
        let mut document = Vec::new();
        let mut total = 1u64;
        let mut chunk = 0u64;

        while chunk < total {
            let url = self.config.chunk_url(chunk);
            let body = self.fetch(&url, cancel).await?;
            let envelope: ChunkEnvelope = serde_json::from_slice(&body)
                .map_err(|e| GenesisSyncError::decode(&url, e.to_string(), &body))?;

            if chunk == 0 {
                total = envelope.result.parse_total()?;
            }

            let data = BASE64.decode(envelope.result.data.as_bytes()).map_err(|e| {
                GenesisSyncError::decode(
                    &url,
                    format!("chunk data is not base64: {e}"),
                    envelope.result.data.as_bytes(),
                )
            })?;
            debug!(chunk, total, bytes = data.len(), "collected genesis chunk");
            document.extend_from_slice(&data);
            chunk += 1;
        }

        Ok(document)
    }

    /// Fetch the published checksum from the query-relay, prefix stripped.
    async fn fetch_checksum(
        &self,
        cancel: &CancellationToken,
    ) -> Result<String, GenesisSyncError> {
        let url = self.config.checksum_url();
        let body = self.fetch(&url, cancel).await?;
        let response: ChecksumResponse = serde_json::from_slice(&body)
            .map_err(|e| GenesisSyncError::decode(&url, e.to_string(), &body))?;
        Ok(response.hex_digest()?.to_string())
    }

    async fn fetch(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>, GenesisSyncError> {
        tokio::select! {
            // Cancellation takes priority over an in-flight request.
            biased;
            _ = cancel.cancelled() => Err(GenesisSyncError::Cancelled),
            body = self.fetcher.get_bytes(url) => Ok(body?),
        }
    }
}
