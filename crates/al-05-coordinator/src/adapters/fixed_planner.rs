//! Fixed-Amount Payout Planner
//!
//! Implements the `PayoutPlanner` port with the simplest possible off-chain
//! decision: `count` identical payouts of a configured amount. Stands in for
//! the real off-chain execution layer, whose computation is outside this
//! system's scope.

use crate::ports::outbound::PayoutPlanner;
use al_02_account::Account;
use al_04_settlement_batch::PayoutInstruction;
use shared_types::{Address, Amount};

/// Plans `count` identical payouts of `amount` to one recipient.
#[derive(Clone, Copy, Debug)]
pub struct FixedPayoutPlanner {
    amount: Amount,
}

impl FixedPayoutPlanner {
    /// Creates a planner disbursing `amount` per payout.
    pub fn new(amount: Amount) -> Self {
        Self { amount }
    }
}

impl PayoutPlanner for FixedPayoutPlanner {
    fn plan(&self, _account: &Account, count: usize, recipient: Address) -> Vec<PayoutInstruction> {
        vec![
            PayoutInstruction {
                amount: self.amount,
                recipient,
            };
            count
        ]
    }
}
