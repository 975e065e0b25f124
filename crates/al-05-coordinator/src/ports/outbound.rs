//! # Outbound Ports - host ledger and off-chain execution layer
//!
//! The coordinator's two external collaborators, kept behind traits so the
//! protocol stays independent of how the host ledger moves objects and of
//! what the off-chain VM actually computes.

use al_02_account::Account;
use al_04_settlement_batch::{PayoutInstruction, PayoutRecord};
use shared_types::Address;

/// Host-ledger object transfer: hands a payout record to its recipient.
///
/// Delivery is the ledger's ownership-transfer primitive and cannot fail
/// once the enclosing transaction commits.
pub trait PayoutDelivery {
    /// Transfers ownership of `record` to `recipient`.
    fn deliver(&self, recipient: Address, record: PayoutRecord);
}

/// The off-chain execution layer's payout decision.
///
/// This is the interface contract the off-chain side must honor when
/// submitting results: given the account snapshot it returns the payout
/// instructions for one settlement round. The computation itself (its VM,
/// inputs, audit trail) is out of scope; implementations range from the
/// fixed-amount stand-in used in tests to a real result submitter.
pub trait PayoutPlanner {
    /// Plans the payouts for the next settlement round.
    fn plan(&self, account: &Account, count: usize, recipient: Address) -> Vec<PayoutInstruction>;
}
