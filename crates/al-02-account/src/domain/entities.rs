//! The settlement account entity.
//!
//! Mutators on this type are invoked by the State-Transition Coordinator and
//! the Capability Registry only; external actors reach the account solely
//! through the boundary API (al-05), which gates every mutation behind a
//! capability check. `issuer` and `immutable_metadata` have no mutators at
//! all.

use super::errors::AccountError;
use al_01_capability::GovernedAccount;
use serde::{Deserialize, Serialize};
use shared_types::{Address, Amount, Funds, ObjectId};

/// The custodied-balance entity.
///
/// INVARIANT-2: `state_index` starts at 0 and increases by exactly 1 per
/// successful state transition.
#[derive(Debug, Serialize, Deserialize)]
pub struct Account {
    id: ObjectId,
    balance: Funds,
    state_index: u64,
    state_metadata: Vec<u8>,
    cap_generation: u64,
    last_sender: Option<Address>,
    governance_metadata: Option<Vec<u8>>,
    issuer: Address,
    immutable_metadata: Vec<u8>,
}

impl Account {
    /// Creates a fresh account custodying `initial_funds`.
    ///
    /// State index and capability generation both start at 0; the paired
    /// inbound queue and capability pair are created by the caller in the
    /// same host transaction.
    pub fn create(issuer: Address, initial_funds: Funds, immutable_metadata: Vec<u8>) -> Self {
        Self {
            id: ObjectId::fresh(),
            balance: initial_funds,
            state_index: 0,
            state_metadata: Vec::new(),
            cap_generation: 0,
            last_sender: None,
            governance_metadata: None,
            issuer,
            immutable_metadata,
        }
    }

    /// Unique identity in the host object store.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Current custodied balance.
    pub fn balance(&self) -> Amount {
        self.balance.value()
    }

    /// Number of committed state transitions.
    pub fn state_index(&self) -> u64 {
        self.state_index
    }

    /// Opaque execution-layer state blob, replaced wholesale per transition.
    pub fn state_metadata(&self) -> &[u8] {
        &self.state_metadata
    }

    /// Sender of the most recent transition, if any.
    pub fn last_sender(&self) -> Option<Address> {
        self.last_sender
    }

    /// Governance-controlled metadata blob.
    pub fn governance_metadata(&self) -> Option<&[u8]> {
        self.governance_metadata.as_deref()
    }

    /// The account's creator.
    pub fn issuer(&self) -> Address {
        self.issuer
    }

    /// Creation-time metadata, never mutated.
    pub fn immutable_metadata(&self) -> &[u8] {
        &self.immutable_metadata
    }

    /// Joins deposited funds into the balance.
    pub fn credit(&mut self, funds: Funds) {
        self.balance.join(funds);
    }

    /// Withdraws `amount` from the balance as a transferable unit.
    ///
    /// # Errors
    /// `InsufficientFunds` if `amount` exceeds the current balance; the
    /// balance is untouched on failure.
    pub fn debit(&mut self, amount: Amount) -> Result<Funds, AccountError> {
        Ok(self.balance.split(amount)?)
    }

    /// Commits a state transition: bumps the index, replaces the metadata.
    pub fn advance_state(&mut self, new_metadata: Vec<u8>) {
        self.state_index += 1;
        self.state_metadata = new_metadata;
    }

    /// Records the originator of the current transition.
    pub fn record_sender(&mut self, addr: Address) {
        self.last_sender = Some(addr);
    }

    /// Replaces the governance metadata blob.
    ///
    /// Callers must hold a validated governance token; the boundary API
    /// enforces this before reaching the entity.
    pub fn set_governance_metadata(&mut self, data: Option<Vec<u8>>) {
        self.governance_metadata = data;
    }
}

impl GovernedAccount for Account {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn capability_generation(&self) -> u64 {
        self.cap_generation
    }

    fn rotate_capability_generation(&mut self) -> u64 {
        self.cap_generation += 1;
        self.cap_generation
    }
}
