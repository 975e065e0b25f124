//! # Capability Registry Subsystem
//!
//! **Subsystem ID:** 1
//!
//! ## Purpose
//!
//! Mints, validates, and invalidates the two distinguished access tokens
//! (state authority, governance authority) that gate every privileged
//! operation on a settlement account.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Token authorizes iff account ref AND generation match | `domain/registry.rs` - `validate()` |
//! | INVARIANT-2 | Exactly one live pair per generation | `domain/registry.rs` - pair minted only at create/rotate |
//! | INVARIANT-3 | Generation advances only through `rotate()` | `ports/outbound.rs` - `GovernedAccount` contract |
//! | INVARIANT-4 | Tokens are soulbound | no transfer operation exists in the public API |
//!
//! ## Rotation Protocol
//!
//! ```text
//! [gen N pair live] ──rotate(governance token)──→ [gen N+1 pair live]
//!                                                  gen N tokens stale forever
//! ```
//!
//! Stale tokens are not force-destroyed; they fail `validate()` until their
//! holders voluntarily `discard()` them.
//!
//! ## Outbound Dependencies
//!
//! | Subsystem | Trait | Purpose |
//! |-----------|-------|---------|
//! | 2 (Account) | `GovernedAccount` | Read/advance the capability generation |

pub mod domain;
pub mod ports;

pub use domain::*;
pub use ports::outbound::GovernedAccount;
