//! # State-Transition Coordinator Subsystem
//!
//! **Subsystem ID:** 5
//!
//! ## Purpose
//!
//! Runs one indivisible settlement round against an account: drains the
//! inbound queue into the balance, applies the off-chain-authored payout
//! batch, advances the state index, and disburses payout records. Also hosts
//! the external boundary API (account creation, deposits, rotation, batch
//! authoring) and the in-memory host-ledger adapters.
//!
//! ## Transition State Machine
//!
//! ```text
//! [Authorizing] ──ok──→ [Crediting] ──→ [Debiting] ──→ [Finalizing] ──→ [Done]
//!       │                    │               │
//!       └── any failure aborts the whole call, zero partial effects ──→ abort
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | All-or-nothing: failed transitions leave account/queue/batch untouched | `domain/transition.rs` - pre-flight checks before first mutation |
//! | INVARIANT-2 | `state_index` +1 per success, unchanged on abort | `domain/transition.rs` - finalize step |
//! | INVARIANT-3 | Credit trace order = queue insertion order | `domain/transition.rs` - in-order drain |
//! | INVARIANT-4 | No in-protocol retry: every precondition failure is terminal | error taxonomy in `domain/errors.rs` |
//!
//! ## Outbound Dependencies
//!
//! | Collaborator | Trait | Purpose |
//! |--------------|-------|---------|
//! | Host ledger object transfer | `PayoutDelivery` | Hand payout records to recipients |
//! | Off-chain execution layer | `PayoutPlanner` | Decide what a settlement round disburses |

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::*;
pub use domain::*;
pub use ports::inbound::{AccountCreated, Addressed, ApiError, RotationOutcome, SettlementApi};
pub use ports::outbound::{PayoutDelivery, PayoutPlanner};
pub use service::SettlementService;
