//! # vo-admin
//!
//! Operator CLI for a containerized validator node. Composition root only:
//! all protocol logic lives in the subsystem crates; this crate wires the
//! container-exec and HTTP adapters into them and maps results to exit
//! codes.

pub mod exec;

pub use exec::ContainerExecutor;
