//! Settlement batch error types.

use al_02_account::AccountError;
use shared_types::{Amount, ObjectId};
use thiserror::Error;

/// Errors raised while applying a batch.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BatchError {
    /// The batch is bound to a different account than the one supplied.
    #[error("Wrong account: batch bound to {expected}, got {actual}")]
    WrongAccount { expected: ObjectId, actual: ObjectId },

    /// Some payout in the batch exceeds the running balance; nothing was
    /// applied.
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Amount, available: Amount },
}

impl From<AccountError> for BatchError {
    fn from(e: AccountError) -> Self {
        match e {
            AccountError::InsufficientFunds {
                requested,
                available,
            } => Self::InsufficientFunds {
                requested,
                available,
            },
        }
    }
}
