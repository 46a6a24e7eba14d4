//! # Genesis Sync Configuration
//!
//! Seed host endpoints and HTTP timeouts for the acquisition protocol.

use serde::{Deserialize, Serialize};

/// Configuration for one genesis acquisition attempt.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenesisSyncConfig {
    /// Seed host address (IP or hostname, no scheme).
    pub host: String,

    /// Query-relay port on the seed host.
    pub relay_port: u16,

    /// Consensus RPC port on the seed host.
    pub rpc_port: u16,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,

    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl GenesisSyncConfig {
    /// Configuration for a seed host with default timeouts.
    pub fn new(host: impl Into<String>, relay_port: u16, rpc_port: u16) -> Self {
        Self {
            host: host.into(),
            relay_port,
            rpc_port,
            request_timeout_secs: 30,
            connect_timeout_secs: 5,
        }
    }

    /// Chunked genesis endpoint on the consensus RPC.
    pub fn chunk_url(&self, chunk: u64) -> String {
        format!(
            "http://{}:{}/genesis_chunked?chunk={}",
            self.host, self.rpc_port, chunk
        )
    }

    /// Single-shot genesis endpoint on the query-relay.
    pub fn genesis_url(&self) -> String {
        format!("http://{}:{}/api/genesis", self.host, self.relay_port)
    }

    /// Genesis checksum endpoint on the query-relay.
    pub fn checksum_url(&self) -> String {
        format!("http://{}:{}/api/gensum", self.host, self.relay_port)
    }

    /// Create a config for testing (local host, short timeouts).
    pub fn for_testing() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            relay_port: 11000,
            rpc_port: 26657,
            request_timeout_secs: 2,
            connect_timeout_secs: 1,
        }
    }
}
