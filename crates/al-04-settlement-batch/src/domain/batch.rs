//! # Settlement Batch - all-or-nothing payout application
//!
//! Authored append-only by the state authority out-of-band, applied exactly
//! once per round by the coordinator, then reused empty.

use super::entities::{Payout, PayoutInstruction, PayoutRecord, SettlementReference};
use super::errors::BatchError;
use al_02_account::Account;
use shared_types::{Amount, ObjectId};

/// Ordered payout set for one settlement round, bound to one account.
#[derive(Debug)]
pub struct SettlementBatch {
    id: ObjectId,
    account_ref: ObjectId,
    instructions: Vec<PayoutInstruction>,
}

impl SettlementBatch {
    /// Creates an empty batch bound to `account_ref`.
    pub fn for_account(account_ref: ObjectId) -> Self {
        Self {
            id: ObjectId::fresh(),
            account_ref,
            instructions: Vec::new(),
        }
    }

    /// Unique identity in the host object store.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// The account this batch settles against.
    pub fn account_ref(&self) -> ObjectId {
        self.account_ref
    }

    /// Appends one payout instruction (off-chain authoring step).
    pub fn append(&mut self, instruction: PayoutInstruction) {
        self.instructions.push(instruction);
    }

    /// Number of instructions currently in the batch.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns true if the batch holds no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Sum of all instruction amounts.
    pub fn total(&self) -> Amount {
        self.instructions.iter().map(|i| i.amount).sum()
    }

    /// Checks that every debit would succeed when applied sequentially
    /// against `available`.
    ///
    /// Amounts only leave the balance during application, so simulating the
    /// running balance instruction-by-instruction is exact. The coordinator
    /// runs this against the projected post-credit balance before it touches
    /// any state.
    ///
    /// # Errors
    /// `InsufficientFunds` at the first instruction that would overdraw.
    pub fn check_feasible(&self, available: Amount) -> Result<(), BatchError> {
        let mut remaining = available;
        for instruction in &self.instructions {
            if instruction.amount > remaining {
                return Err(BatchError::InsufficientFunds {
                    requested: instruction.amount,
                    available: remaining,
                });
            }
            remaining -= instruction.amount;
        }
        Ok(())
    }

    /// Applies every instruction against `account` in append order and
    /// empties the batch.
    ///
    /// The account's balance must already include this round's inbound-queue
    /// credits. Feasibility of the whole batch is established before the
    /// first debit, so failure leaves account and batch untouched.
    ///
    /// # Errors
    /// - `WrongAccount` on binding mismatch
    /// - `InsufficientFunds` if any sequential debit would exceed the
    ///   running balance
    pub fn apply_and_drain(
        &mut self,
        account: &mut Account,
        reference: SettlementReference,
    ) -> Result<Vec<Payout>, BatchError> {
        if self.account_ref != account.id() {
            return Err(BatchError::WrongAccount {
                expected: self.account_ref,
                actual: account.id(),
            });
        }
        self.check_feasible(account.balance())?;

        let mut payouts = Vec::with_capacity(self.instructions.len());
        for instruction in self.instructions.drain(..) {
            // Cannot fail after the feasibility pass.
            let funds = account.debit(instruction.amount)?;
            payouts.push(Payout {
                recipient: instruction.recipient,
                record: PayoutRecord::new(funds, reference),
            });
        }
        Ok(payouts)
    }
}
