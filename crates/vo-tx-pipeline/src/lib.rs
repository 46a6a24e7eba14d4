//! # Transaction Pipeline
//!
//! Converts the daemon's fire-and-forget async broadcast into a bounded,
//! observable call with a single failure taxonomy:
//!
//! ```text
//! submit ──► await next block ──► query by hash ──► classify
//! ```
//!
//! Submission returns only a hash and a non-authoritative code; the
//! on-chain outcome exists once a new block lands, so the pipeline waits
//! for height to advance (bounded by the network's block interval plus a
//! grace period) and then reads the authoritative execution code back.
//!
//! The pipeline never retries: resubmitting a transaction whose fate is
//! unknown could duplicate its side effects. Every state-changing
//! operation in the lifecycle subsystem runs through [`CommandPipeline`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod executor;
pub mod pipeline;
pub mod query;
pub mod watcher;

// Re-exports
pub use config::PipelineConfig;
pub use error::PipelineError;
pub use executor::TxExecutor;
pub use pipeline::CommandPipeline;
pub use query::TxQuery;
pub use watcher::BlockWatcher;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
