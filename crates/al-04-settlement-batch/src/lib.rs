//! # Settlement Batch Subsystem
//!
//! **Subsystem ID:** 4
//!
//! ## Purpose
//!
//! The off-chain-authored payout set for one settlement round: appended to
//! out-of-band by the state authority, consumed exactly once by the
//! coordinator, then handed back empty for the next round.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Batch is bound to exactly one account | `domain/batch.rs` - `apply_and_drain()` check |
//! | INVARIANT-2 | Application is all-or-nothing | `domain/batch.rs` - feasibility pass before first debit |
//! | INVARIANT-3 | Payouts disburse in original append order | `domain/batch.rs` - in-order iteration |
//! | INVARIANT-4 | Batch object survives application, emptied | `apply_and_drain()` drains, never consumes `self` |

pub mod domain;

pub use domain::*;
