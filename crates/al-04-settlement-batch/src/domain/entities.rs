//! Payout instructions, references, and records.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Amount, Funds, ObjectId};

/// One payout decided by the off-chain execution layer.
///
/// Ephemeral: exists only inside a `SettlementBatch`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutInstruction {
    /// Amount to disburse.
    pub amount: Amount,
    /// Ledger address receiving the payout.
    pub recipient: Address,
}

/// Traceability tag stamped on every record of one settlement round.
///
/// `state_index` is the index the account holds after the round commits, so
/// records from distinct rounds are always distinguishable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementReference {
    /// The settled account.
    pub account_ref: ObjectId,
    /// Post-transition state index of the round that produced the record.
    pub state_index: u64,
}

/// Durable receipt delivered to a recipient after disbursement.
///
/// Independently owned by its recipient from the moment of delivery.
#[derive(Debug, Serialize, Deserialize)]
pub struct PayoutRecord {
    id: ObjectId,
    funds: Funds,
    settlement_reference: SettlementReference,
}

impl PayoutRecord {
    pub(crate) fn new(funds: Funds, settlement_reference: SettlementReference) -> Self {
        Self {
            id: ObjectId::fresh(),
            funds,
            settlement_reference,
        }
    }

    /// Unique identity in the host object store.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Disbursed amount.
    pub fn amount(&self) -> Amount {
        self.funds.value()
    }

    /// Which account and round produced this record.
    pub fn settlement_reference(&self) -> SettlementReference {
        self.settlement_reference
    }

    /// Consumes the record, releasing the custodied funds to the holder.
    pub fn into_funds(self) -> Funds {
        self.funds
    }
}

/// A disbursement ready for delivery: the record plus where it goes.
#[derive(Debug)]
pub struct Payout {
    /// Delivery address.
    pub recipient: Address,
    /// The receipt carrying the funds.
    pub record: PayoutRecord,
}
