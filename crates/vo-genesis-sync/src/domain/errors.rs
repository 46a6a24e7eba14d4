//! # Domain Errors
//!
//! Failure taxonomy of the genesis acquisition protocol. None of these are
//! retried internally; every variant aborts the join attempt.

use thiserror::Error;

use crate::ports::FetchError;

/// Genesis acquisition and verification errors.
#[derive(Debug, Error)]
pub enum GenesisSyncError {
    /// An HTTP request to the seed host failed.
    #[error(transparent)]
    Http(#[from] FetchError),

    /// An endpoint returned a payload that does not decode as expected.
    #[error("malformed payload from {url}: {reason}; raw: {raw}")]
    Decode {
        /// Endpoint that produced the payload.
        url: String,
        /// What failed while decoding.
        reason: String,
        /// Raw payload text for diagnosis, truncated.
        raw: String,
    },

    /// The chunked endpoint reported a chunk total that is unusable.
    #[error("unusable chunk total {raw:?} from the chunked genesis endpoint")]
    ChunkTotal {
        /// The reported total, verbatim.
        raw: String,
    },

    /// The two genesis endpoints returned different documents.
    #[error(
        "genesis mismatch between consensus RPC ({rpc_len} bytes) and \
         query-relay ({relay_len} bytes)"
    )]
    MirrorMismatch {
        /// Reassembled chunked document size.
        rpc_len: usize,
        /// Single-shot document size.
        relay_len: usize,
    },

    /// The published checksum is not a `0x`-prefixed hex string.
    #[error("checksum is not 0x-prefixed: {raw:?}")]
    ChecksumFormat {
        /// The published checksum, verbatim.
        raw: String,
    },

    /// The document digest does not match the published checksum.
    #[error("genesis checksum mismatch: published {published}, computed {computed}")]
    ChecksumMismatch {
        /// Checksum published by the query-relay (prefix stripped).
        published: String,
        /// SHA-256 hex digest computed over the fetched document.
        computed: String,
    },

    /// The caller cancelled the join attempt.
    #[error("genesis acquisition cancelled by caller")]
    Cancelled,
}

impl GenesisSyncError {
    /// Build a [`GenesisSyncError::Decode`] with the raw payload truncated
    /// to a loggable size.
    pub fn decode(url: &str, reason: impl Into<String>, raw: &[u8]) -> Self {
        const MAX_RAW: usize = 512;
        let mut raw = String::from_utf8_lossy(raw).into_owned();
        if raw.len() > MAX_RAW {
            raw.truncate(MAX_RAW);
            raw.push('…');
        }
        GenesisSyncError::Decode {
            url: url.to_string(),
            reason: reason.into(),
            raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_truncates_raw_payload() {
        let raw = vec![b'x'; 2048];
        let err = GenesisSyncError::decode("http://seed/api/genesis", "bad json", &raw);
        match err {
            GenesisSyncError::Decode { raw, .. } => {
                assert!(raw.len() < 600);
                assert!(raw.ends_with('…'));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_checksum_mismatch_displays_both_digests() {
        let err = GenesisSyncError::ChecksumMismatch {
            published: "aa11".to_string(),
            computed: "bb22".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("aa11"));
        assert!(rendered.contains("bb22"));
    }
}
