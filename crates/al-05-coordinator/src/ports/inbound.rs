//! # Inbound Port - SettlementApi
//!
//! The boundary operations external actors may submit, each one discrete,
//! atomically-committed host transaction.
//!
//! | Operation | Caller | Required proof |
//! |-----------|--------|----------------|
//! | `create_account` | anyone | none |
//! | `discard_token` | token holder | ownership (possession) |
//! | `rotate_governance` | governance holder | valid governance token |
//! | `enqueue_request` | anyone | queue identity match |
//! | `author_settlement_batch` | state authority | valid state token |
//! | `apply_state_transition` | state authority | valid state token |

use crate::domain::{TransitionError, TransitionReceipt};
use al_01_capability::{CapabilityError, CapabilityPair, CapabilityToken};
use al_03_inbound_queue::QueueError;
use al_04_settlement_batch::SettlementBatch;
use shared_types::{Address, Funds, ObjectId};
use thiserror::Error;

/// An object addressed to the holder the host ledger should transfer it to.
///
/// Capability tokens expose no transfer operation themselves; addressing the
/// minted objects here is the only way ownership is assigned.
#[derive(Debug)]
pub struct Addressed<T> {
    /// Intended owner.
    pub owner: Address,
    /// The object to transfer.
    pub object: T,
}

/// Result of `create_account`: the new object graph plus the capability pair
/// addressed to the creator.
#[derive(Debug)]
pub struct AccountCreated {
    /// Id of the new account.
    pub account_ref: ObjectId,
    /// Id of its paired inbound queue.
    pub queue_ref: ObjectId,
    /// Generation-0 capability pair, addressed to the caller.
    pub capabilities: Addressed<CapabilityPair>,
}

/// Result of `rotate_governance`: the fresh pair, each token addressed to
/// its new holder.
#[derive(Debug)]
pub struct RotationOutcome {
    /// New state token, addressed to the incoming state authority.
    pub state: Addressed<CapabilityToken>,
    /// New governance token, addressed to the incoming governor.
    pub governance: Addressed<CapabilityToken>,
}

/// Boundary-level failures.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No object with the supplied id exists in the store.
    #[error("Unknown object: {0}")]
    UnknownObject(ObjectId),

    /// Capability validation failed outside a transition (rotation, batch
    /// authoring).
    #[error(transparent)]
    Authorization(#[from] CapabilityError),

    /// Deposit refused by the queue.
    #[error(transparent)]
    Queue(#[from] QueueError),

    /// A state transition aborted.
    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// Primary API for the settlement subsystem.
///
/// Mutating methods take `&mut self`: the host ledger serializes conflicting
/// transactions on shared objects, which this models directly.
pub trait SettlementApi {
    /// Creates an account custodying `initial_funds`, its paired inbound
    /// queue, and the generation-0 capability pair addressed to `caller`.
    fn create_account(
        &mut self,
        caller: Address,
        initial_funds: Funds,
        immutable_metadata: Vec<u8>,
    ) -> AccountCreated;

    /// Voluntarily destroys a token. Works on stale tokens; possession is
    /// the only required proof.
    fn discard_token(&mut self, token: CapabilityToken);

    /// Rotates the controller pair of `account_ref`.
    ///
    /// Consumes the presented governance token, advances the generation,
    /// and returns a fresh pair addressed to the named holders. Optionally
    /// replaces the governance metadata in the same transaction.
    ///
    /// # Errors
    /// - `UnknownObject` if the account does not exist
    /// - `Authorization` if the token is stale, foreign, or not a governance token
    ///
    /// On failure the presented token rides back with the error so its
    /// holder keeps it.
    fn rotate_governance(
        &mut self,
        governance_token: CapabilityToken,
        account_ref: ObjectId,
        new_state_holder: Address,
        new_governor: Address,
        new_governance_metadata: Option<Vec<u8>>,
    ) -> Result<RotationOutcome, (CapabilityToken, ApiError)>;

    /// Appends a deposit to the queue. No authorization needed; the only
    /// proof is that `account_ref` matches the queue's binding.
    ///
    /// # Errors
    /// - `UnknownObject` if the queue does not exist
    /// - `Queue(WrongAccount)` if the caller paired the wrong account
    /// - `Queue(QueueFull)` at capacity
    fn enqueue_request(
        &mut self,
        queue_ref: ObjectId,
        account_ref: ObjectId,
        sender: Address,
        funds: Funds,
        payload: Vec<u8>,
    ) -> Result<(), ApiError>;

    /// Authors the next settlement batch: `count` payouts to `recipient` as
    /// decided by the configured payout planner (the stand-in for the real
    /// off-chain computation).
    ///
    /// # Errors
    /// - `UnknownObject` if the account does not exist
    /// - `Authorization` if the presented token is not a valid state token
    fn author_settlement_batch(
        &mut self,
        state_token: &CapabilityToken,
        account_ref: ObjectId,
        count: usize,
        recipient: Address,
    ) -> Result<SettlementBatch, ApiError>;

    /// Runs one settlement round through the transition state machine.
    ///
    /// The token is borrowed proof and stays with its presenter; the batch
    /// is borrowed and handed back empty on success, untouched on failure.
    ///
    /// # Errors
    /// Any `TransitionError`, plus `UnknownObject` for missing account or
    /// queue. Failure leaves every object untouched.
    fn apply_state_transition(
        &mut self,
        state_token: &CapabilityToken,
        account_ref: ObjectId,
        queue_ref: ObjectId,
        batch: &mut SettlementBatch,
        new_state_metadata: Vec<u8>,
        caller: Address,
    ) -> Result<TransitionReceipt, ApiError>;
}
