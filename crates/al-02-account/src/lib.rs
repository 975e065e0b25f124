//! # Account Subsystem
//!
//! **Subsystem ID:** 2
//!
//! ## Purpose
//!
//! The custodied-balance entity whose state transitions the protocol governs.
//! Holds funds on the base ledger while the off-chain execution layer decides
//! what each settlement round should disburse.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Balance decreases only through `debit` during batch application | mutators are coordinator/registry-internal |
//! | INVARIANT-2 | `state_index` is strictly increasing | `domain/entities.rs` - `advance_state()` |
//! | INVARIANT-3 | `issuer` and `immutable_metadata` are set once | no mutator exists |
//! | INVARIANT-4 | Generation advances only via the Capability Registry | `GovernedAccount` impl |

pub mod domain;

pub use domain::*;
