//! Account error types.

use shared_types::{Amount, FundsError};
use thiserror::Error;

/// Errors raised by account mutators.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    /// A debit exceeded the custodied balance.
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Amount, available: Amount },
}

impl From<FundsError> for AccountError {
    fn from(e: FundsError) -> Self {
        match e {
            FundsError::Insufficient {
                requested,
                available,
            } => Self::InsufficientFunds {
                requested,
                available,
            },
        }
    }
}
