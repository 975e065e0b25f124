//! # Shared Types Crate
//!
//! Cross-subsystem primitives for the AliasLedger workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every type that crosses a subsystem boundary
//!   (object identities, addresses, fungible value) is defined here.
//! - **Linear Value**: `Funds` is deliberately neither `Copy` nor `Clone`;
//!   value moves, it is never duplicated. Balance arithmetic happens only
//!   through `join`/`split`.
//! - **Host-Ledger Identity**: `ObjectId::fresh()` stands in for the host
//!   ledger's unique-id generation primitive.

pub mod funds;
pub mod ids;

pub use funds::{Funds, FundsError};
pub use ids::{Address, Amount, ObjectId};
