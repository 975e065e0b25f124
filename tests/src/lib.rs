//! # AliasLedger Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Cross-crate settlement flows
//!     ├── flows.rs      # Boundary-API scenarios end to end
//!     └── properties.rs # Conservation law, rotation, atomicity
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p al-tests
//!
//! # By category
//! cargo test -p al-tests integration::
//! ```

#![allow(dead_code)]

pub mod integration;
