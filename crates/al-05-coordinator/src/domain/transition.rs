//! # The state-transition protocol
//!
//! One call = one settlement round. The host transaction boundary makes the
//! whole call atomic against the ledger; on top of that, this module orders
//! its own work so that every failable precondition is checked before the
//! first mutation, so an abort leaves account, queue, and batch exactly as
//! they were presented.

use super::errors::{MismatchedObject, TransitionError};
use al_01_capability::{registry, AuthorityKind, CapabilityToken};
use al_02_account::Account;
use al_03_inbound_queue::InboundQueue;
use al_04_settlement_batch::{Payout, SettlementBatch, SettlementReference};
use serde::{Deserialize, Serialize};
use shared_types::{Address, Amount, ObjectId};

/// Phases of a single transition, in order.
///
/// Used for tracing and abort diagnostics; the protocol never suspends
/// mid-phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionPhase {
    Authorizing,
    Crediting,
    Debiting,
    Finalizing,
    Done,
}

impl std::fmt::Display for TransitionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Authorizing => "authorizing",
            Self::Crediting => "crediting",
            Self::Debiting => "debiting",
            Self::Finalizing => "finalizing",
            Self::Done => "done",
        };
        write!(f, "{name}")
    }
}

/// One drained deposit, in trace order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditedDeposit {
    /// Ledger-verified origin of the deposit.
    pub sender: Address,
    /// Amount credited.
    pub amount: Amount,
}

/// Durable summary of a committed transition.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransitionReceipt {
    /// The settled account.
    pub account_ref: ObjectId,
    /// State index after the transition.
    pub state_index: u64,
    /// Total credited from the inbound queue this round.
    pub credited: Amount,
    /// Total disbursed as payouts this round.
    pub disbursed: Amount,
    /// Per-deposit credit trace, in queue insertion order.
    pub credits: Vec<CreditedDeposit>,
    /// Number of payout records emitted.
    pub payout_count: usize,
    /// Traceability tag stamped on every payout record of this round.
    pub reference: SettlementReference,
}

/// What a committed transition hands back to the service layer.
#[derive(Debug)]
pub struct TransitionOutcome {
    /// The receipt.
    pub receipt: TransitionReceipt,
    /// Payout records awaiting delivery to their recipients.
    pub payouts: Vec<Payout>,
}

/// Runs one settlement round.
///
/// Phases:
/// 1. **Authorizing** — the presented state token must validate against the
///    account; it is borrowed proof, never consumed.
/// 2. **Crediting** — the queue (binding-checked) is drained front-to-back
///    and each deposit credited individually, preserving trace order.
/// 3. **Debiting** — the batch (binding-checked) is applied in append order,
///    emitting one payout record per instruction.
/// 4. **Finalizing** — state index +1, state metadata replaced wholesale,
///    caller recorded as `last_sender`.
/// 5. **Done** — the emptied batch stays with its presenter; account and
///    queue remain live shared objects for the next round.
///
/// Batch feasibility is established against the projected post-credit
/// balance before anything mutates, which is exact because credits all land
/// before the first debit.
///
/// # Errors
/// - `Authorization` if the token is stale, foreign, or the wrong kind
/// - `ReferentialMismatch` if queue or batch is bound to another account
/// - `InsufficientFunds` if any sequential debit would overdraw
///
/// All errors abort the whole call with zero observable effects. No retries.
pub fn apply_state_transition(
    token: &CapabilityToken,
    caller: Address,
    account: &mut Account,
    queue: &mut InboundQueue,
    batch: &mut SettlementBatch,
    new_state_metadata: Vec<u8>,
) -> Result<TransitionOutcome, TransitionError> {
    // Authorizing.
    registry::validate(token, &*account, AuthorityKind::StateAuthority)?;

    // Binding checks for both presented collaborator objects.
    if queue.account_ref() != account.id() {
        return Err(TransitionError::ReferentialMismatch {
            object: MismatchedObject::Queue,
            expected: account.id(),
            actual: queue.account_ref(),
        });
    }
    if batch.account_ref() != account.id() {
        return Err(TransitionError::ReferentialMismatch {
            object: MismatchedObject::Batch,
            expected: account.id(),
            actual: batch.account_ref(),
        });
    }

    // Feasibility against the projected post-credit balance. After this
    // point nothing can fail.
    let projected = account.balance() + queue.pending_total();
    batch.check_feasible(projected)?;

    // Crediting: drain in insertion order, credit each deposit individually.
    let mut credits = Vec::with_capacity(queue.len());
    let mut credited: Amount = 0;
    for request in queue.drain_all() {
        credited += request.funds.value();
        credits.push(CreditedDeposit {
            sender: request.sender,
            amount: request.funds.value(),
        });
        account.credit(request.funds);
    }

    // Debiting: the feasibility pass guarantees this cannot abort.
    let reference = SettlementReference {
        account_ref: account.id(),
        state_index: account.state_index() + 1,
    };
    let payouts = batch.apply_and_drain(account, reference)?;
    let disbursed: Amount = payouts.iter().map(|p| p.record.amount()).sum();

    // Finalizing.
    account.advance_state(new_state_metadata);
    account.record_sender(caller);

    Ok(TransitionOutcome {
        receipt: TransitionReceipt {
            account_ref: account.id(),
            state_index: account.state_index(),
            credited,
            disbursed,
            credits,
            payout_count: payouts.len(),
            reference,
        },
        payouts,
    })
}
