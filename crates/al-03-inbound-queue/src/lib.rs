//! # Inbound Queue Subsystem
//!
//! **Subsystem ID:** 3
//!
//! ## Purpose
//!
//! Append-only buffer of pending deposit requests bound to one settlement
//! account. Anyone may deposit; only a state transition drains.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Queue is bound to exactly one account forever | `domain/queue.rs` - `account_ref` has no mutator |
//! | INVARIANT-2 | Drain order equals insertion order, end-to-end | `domain/queue.rs` - front-to-back `drain_all()` |
//! | INVARIANT-3 | Pending count never exceeds the configured cap | `domain/queue.rs` - `enqueue()` check |
//!
//! Enqueues serialized after an in-flight drain land in the next settlement
//! round; the queue never rejects a deposit for timing reasons.

pub mod domain;

pub use domain::*;
