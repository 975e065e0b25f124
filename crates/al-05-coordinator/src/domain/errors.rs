//! Transition error taxonomy.
//!
//! Three terminal families: authorization, referential mismatch, and
//! insufficient funds. No variant is retried in-protocol; recovery is the
//! caller re-submitting corrected inputs.

use al_01_capability::CapabilityError;
use al_04_settlement_batch::BatchError;
use shared_types::{Amount, ObjectId};
use thiserror::Error;

/// Which supplied object failed its account-binding check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MismatchedObject {
    /// The inbound queue.
    Queue,
    /// The settlement batch.
    Batch,
}

impl std::fmt::Display for MismatchedObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Queue => write!(f, "inbound queue"),
            Self::Batch => write!(f, "settlement batch"),
        }
    }
}

use super::transition::TransitionPhase;

/// Why a state transition aborted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    /// The presented capability failed validation.
    #[error("Authorization failed: {0}")]
    Authorization(#[from] CapabilityError),

    /// Queue or batch is bound to a different account than the one supplied;
    /// the caller assembled an invalid transaction.
    #[error("Referential mismatch: {object} bound to {actual}, expected {expected}")]
    ReferentialMismatch {
        object: MismatchedObject,
        expected: ObjectId,
        actual: ObjectId,
    },

    /// The batch overdraws the post-credit balance; the off-chain authority
    /// must re-author a smaller batch.
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Amount, available: Amount },
}

impl TransitionError {
    /// The phase in which the transition aborted.
    pub fn failing_phase(&self) -> TransitionPhase {
        match self {
            Self::Authorization(_) => TransitionPhase::Authorizing,
            Self::ReferentialMismatch {
                object: MismatchedObject::Queue,
                ..
            } => TransitionPhase::Crediting,
            Self::ReferentialMismatch {
                object: MismatchedObject::Batch,
                ..
            }
            | Self::InsufficientFunds { .. } => TransitionPhase::Debiting,
        }
    }
}

impl From<BatchError> for TransitionError {
    fn from(e: BatchError) -> Self {
        match e {
            BatchError::WrongAccount { expected, actual } => Self::ReferentialMismatch {
                object: MismatchedObject::Batch,
                expected,
                actual,
            },
            BatchError::InsufficientFunds {
                requested,
                available,
            } => Self::InsufficientFunds {
                requested,
                available,
            },
        }
    }
}
