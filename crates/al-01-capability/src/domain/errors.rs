//! Capability validation errors.

use super::entities::AuthorityKind;
use shared_types::ObjectId;
use thiserror::Error;

/// Reasons a presented token fails authorization.
///
/// All variants are terminal for the enclosing transaction; the caller must
/// re-acquire a valid token or re-submit against the correct account.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CapabilityError {
    /// Token generation does not match the account's current generation.
    #[error("Stale capability: token generation {token_generation}, account at {current_generation}")]
    StaleCapability {
        token_generation: u64,
        current_generation: u64,
    },

    /// Token is bound to a different account.
    #[error("Wrong account: token bound to {actual}, expected {expected}")]
    WrongAccount { expected: ObjectId, actual: ObjectId },

    /// Token grants a different authority than the operation requires.
    #[error("Wrong capability kind: expected {expected}, got {actual}")]
    WrongKind {
        expected: AuthorityKind,
        actual: AuthorityKind,
    },
}
