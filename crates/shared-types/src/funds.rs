//! Linear fungible-value unit.
//!
//! `Funds` models custody of an amount of the single asset type. The type is
//! neither `Copy` nor `Clone`: once minted at the host-ledger deposit
//! boundary, value can only move between holders via `join` and `split`.
//! A debit therefore yields a transferable unit rather than a bare number.

use crate::ids::Amount;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by `Funds` arithmetic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FundsError {
    #[error("Insufficient funds: requested {requested}, available {available}")]
    Insufficient { requested: Amount, available: Amount },
}

/// A quantity of the asset under exclusive custody of its holder.
///
/// INVARIANT: total value is conserved across `join`/`split`; no operation
/// creates or destroys value except `mint` (host deposit boundary) and
/// `into_amount` (host disbursement boundary).
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Funds {
    amount: Amount,
}

impl Funds {
    /// Mints a fresh unit at the host-ledger deposit boundary.
    ///
    /// Callers outside that boundary must obtain value by splitting an
    /// existing unit.
    pub fn mint(amount: Amount) -> Self {
        Self { amount }
    }

    /// The empty unit.
    pub fn zero() -> Self {
        Self { amount: 0 }
    }

    /// Current value of this unit.
    pub fn value(&self) -> Amount {
        self.amount
    }

    /// Returns true if this unit carries no value.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Absorbs another unit into this one.
    ///
    /// Total asset supply is bounded far below `u128::MAX`, so the sum is
    /// saturating rather than fallible.
    pub fn join(&mut self, other: Funds) {
        self.amount = self.amount.saturating_add(other.amount);
    }

    /// Splits `amount` out of this unit.
    ///
    /// # Errors
    /// `FundsError::Insufficient` if `amount` exceeds the current value.
    pub fn split(&mut self, amount: Amount) -> Result<Funds, FundsError> {
        if amount > self.amount {
            return Err(FundsError::Insufficient {
                requested: amount,
                available: self.amount,
            });
        }
        self.amount -= amount;
        Ok(Funds { amount })
    }

    /// Consumes the unit at the host-ledger disbursement boundary.
    pub fn into_amount(self) -> Amount {
        self.amount
    }
}
