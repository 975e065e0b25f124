//! In-Memory Payout Delivery Adapter
//!
//! Implements the `PayoutDelivery` port with a per-recipient inbox.
//! In production this is the host ledger's object-transfer primitive.

use crate::ports::outbound::PayoutDelivery;
use al_04_settlement_batch::PayoutRecord;
use parking_lot::RwLock;
use shared_types::{Address, Amount};
use std::collections::HashMap;
use tracing::debug;

/// Delivers payout records into in-memory inboxes.
#[derive(Default)]
pub struct InMemoryPayoutDelivery {
    /// Delivered records per recipient, in delivery order.
    inboxes: RwLock<HashMap<Address, Vec<PayoutRecord>>>,
}

impl InMemoryPayoutDelivery {
    /// Creates an adapter with empty inboxes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records delivered to `recipient`.
    pub fn delivered_count(&self, recipient: Address) -> usize {
        self.inboxes.read().get(&recipient).map_or(0, Vec::len)
    }

    /// Total amount delivered to `recipient`.
    pub fn delivered_total(&self, recipient: Address) -> Amount {
        self.inboxes
            .read()
            .get(&recipient)
            .map_or(0, |records| records.iter().map(PayoutRecord::amount).sum())
    }

    /// Takes ownership of everything delivered to `recipient` so far.
    pub fn take_inbox(&self, recipient: Address) -> Vec<PayoutRecord> {
        self.inboxes.write().remove(&recipient).unwrap_or_default()
    }
}

impl PayoutDelivery for InMemoryPayoutDelivery {
    fn deliver(&self, recipient: Address, record: PayoutRecord) {
        debug!(
            "[al-05] Delivering payout record {} ({} units) to {:02x}{:02x}..",
            record.id(),
            record.amount(),
            recipient[0],
            recipient[1]
        );
        self.inboxes.write().entry(recipient).or_default().push(record);
    }
}
