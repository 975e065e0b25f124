//! # Inbound Queue - FIFO deposit buffer
//!
//! Append-only from the outside, drain-only from the coordinator. The queue
//! is created alongside its account, shares its lifetime, and is never
//! destroyed, only emptied.

use super::entities::{InboundRequest, QueueConfig};
use super::errors::QueueError;
use shared_types::{Amount, ObjectId};
use std::collections::VecDeque;

/// FIFO buffer of pending deposits for one account.
///
/// INVARIANTS:
/// - INVARIANT-1: bound to exactly one account, set at construction
/// - INVARIANT-2: `drain_all()` yields requests in insertion order
/// - INVARIANT-3: `enqueue()` refuses deposits beyond `config.max_pending`
#[derive(Debug)]
pub struct InboundQueue {
    id: ObjectId,
    account_ref: ObjectId,
    pending: VecDeque<InboundRequest>,
    config: QueueConfig,
}

impl InboundQueue {
    /// Creates the queue paired with the account identified by `account_ref`.
    pub fn for_account(account_ref: ObjectId, config: QueueConfig) -> Self {
        Self {
            id: ObjectId::fresh(),
            account_ref,
            pending: VecDeque::new(),
            config,
        }
    }

    /// Unique identity in the host object store.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// The account this queue feeds.
    pub fn account_ref(&self) -> ObjectId {
        self.account_ref
    }

    /// Number of pending requests.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Sum of the amounts attached to pending requests.
    pub fn pending_total(&self) -> Amount {
        self.pending.iter().map(|r| r.funds.value()).sum()
    }

    /// Appends a deposit request.
    ///
    /// No authorization required; any actor may deposit. Each append is one
    /// atomic host transaction, so concurrent deposits from distinct senders
    /// serialize in arrival order.
    ///
    /// # Errors
    /// - `WrongAccount` if `account_ref` does not match the queue's binding
    /// - `QueueFull` at capacity
    pub fn enqueue(
        &mut self,
        account_ref: ObjectId,
        request: InboundRequest,
    ) -> Result<(), QueueError> {
        if account_ref != self.account_ref {
            return Err(QueueError::WrongAccount {
                expected: self.account_ref,
                actual: account_ref,
            });
        }
        if self.pending.len() >= self.config.max_pending {
            return Err(QueueError::QueueFull {
                capacity: self.config.max_pending,
            });
        }
        self.pending.push_back(request);
        Ok(())
    }

    /// Empties the queue, yielding all pending requests in insertion order.
    ///
    /// Called only from within a state transition. The credit total is
    /// order-independent; the trace order must still be deterministic, so
    /// requests come out front-to-back exactly as they went in.
    pub fn drain_all(&mut self) -> Vec<InboundRequest> {
        self.pending.drain(..).collect()
    }
}
