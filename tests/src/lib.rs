//! # Validator Ops Test Suite
//!
//! Unified test crate containing cross-subsystem integration flows:
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── genesis_flow.rs    # Join-time acquisition and verification
//!     └── lifecycle_flow.rs  # Transitions through the command pipeline
//! ```
//!
//! Per-component tests live in `#[cfg(test)]` modules next to the code
//! they cover; this crate exercises the subsystems together, against the
//! mocks that ship with the port traits.
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p vo-tests
//!
//! # By flow
//! cargo test -p vo-tests integration::genesis_flow::
//! cargo test -p vo-tests integration::lifecycle_flow::
//! ```

#![allow(unused_imports)]

pub mod integration;
