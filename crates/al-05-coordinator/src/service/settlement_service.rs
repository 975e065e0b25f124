//! # SettlementService
//!
//! Owns the host object store (accounts and their queues) and implements the
//! boundary API. Every method is one atomically-committed host transaction;
//! `&mut self` models the ledger serializing conflicting operations, while
//! independent deposits from distinct senders simply arrive as separate
//! serialized calls.

use crate::domain::{self, TransitionReceipt};
use crate::ports::inbound::{
    AccountCreated, Addressed, ApiError, RotationOutcome, SettlementApi,
};
use crate::ports::outbound::{PayoutDelivery, PayoutPlanner};
use al_01_capability::{registry, AuthorityKind, CapabilityToken, GovernedAccount};
use al_02_account::Account;
use al_03_inbound_queue::{InboundQueue, InboundRequest, QueueConfig};
use al_04_settlement_batch::SettlementBatch;
use shared_types::{Address, Funds, ObjectId};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// The settlement subsystem service.
///
/// Generic over its two external collaborators: the host ledger's object
/// transfer (`PayoutDelivery`) and the off-chain payout decision
/// (`PayoutPlanner`).
pub struct SettlementService<D, P> {
    /// Accounts by object id.
    accounts: HashMap<ObjectId, Account>,
    /// Queues by their own object id.
    queues: HashMap<ObjectId, InboundQueue>,
    /// Queue configuration applied to newly created accounts.
    queue_config: QueueConfig,
    delivery: D,
    planner: P,
}

impl<D, P> SettlementService<D, P>
where
    D: PayoutDelivery,
    P: PayoutPlanner,
{
    /// Creates a service with default queue configuration.
    pub fn new(delivery: D, planner: P) -> Self {
        Self::with_queue_config(delivery, planner, QueueConfig::default())
    }

    /// Creates a service with an explicit queue configuration.
    pub fn with_queue_config(delivery: D, planner: P, queue_config: QueueConfig) -> Self {
        Self {
            accounts: HashMap::new(),
            queues: HashMap::new(),
            queue_config,
            delivery,
            planner,
        }
    }

    /// Read access to an account snapshot.
    pub fn account(&self, account_ref: ObjectId) -> Option<&Account> {
        self.accounts.get(&account_ref)
    }

    /// Read access to a queue.
    pub fn queue(&self, queue_ref: ObjectId) -> Option<&InboundQueue> {
        self.queues.get(&queue_ref)
    }

    /// The delivery collaborator (inspection in tests).
    pub fn delivery(&self) -> &D {
        &self.delivery
    }
}

impl<D, P> SettlementApi for SettlementService<D, P>
where
    D: PayoutDelivery,
    P: PayoutPlanner,
{
    fn create_account(
        &mut self,
        caller: Address,
        initial_funds: Funds,
        immutable_metadata: Vec<u8>,
    ) -> AccountCreated {
        let account = Account::create(caller, initial_funds, immutable_metadata);
        let queue = InboundQueue::for_account(account.id(), self.queue_config.clone());
        let capabilities = registry::mint_pair(&account);

        let account_ref = account.id();
        let queue_ref = queue.id();
        info!(
            "[al-05] Created account {} (queue {}, balance {})",
            account_ref,
            queue_ref,
            account.balance()
        );

        self.accounts.insert(account_ref, account);
        self.queues.insert(queue_ref, queue);

        AccountCreated {
            account_ref,
            queue_ref,
            capabilities: Addressed {
                owner: caller,
                object: capabilities,
            },
        }
    }

    fn discard_token(&mut self, token: CapabilityToken) {
        debug!(
            "[al-05] Discarding {} token {} (account {}, gen {})",
            token.kind(),
            token.id(),
            token.account_ref(),
            token.generation()
        );
        registry::discard(token);
    }

    fn rotate_governance(
        &mut self,
        governance_token: CapabilityToken,
        account_ref: ObjectId,
        new_state_holder: Address,
        new_governor: Address,
        new_governance_metadata: Option<Vec<u8>>,
    ) -> Result<RotationOutcome, (CapabilityToken, ApiError)> {
        let Some(account) = self.accounts.get_mut(&account_ref) else {
            return Err((governance_token, ApiError::UnknownObject(account_ref)));
        };

        let pair = registry::rotate(governance_token, account)
            .map_err(|(token, e)| (token, ApiError::Authorization(e)))?;

        if let Some(data) = new_governance_metadata {
            account.set_governance_metadata(Some(data));
        }

        info!(
            "[al-05] Rotated account {} to generation {}",
            account_ref,
            account.capability_generation()
        );

        Ok(RotationOutcome {
            state: Addressed {
                owner: new_state_holder,
                object: pair.state,
            },
            governance: Addressed {
                owner: new_governor,
                object: pair.governance,
            },
        })
    }

    fn enqueue_request(
        &mut self,
        queue_ref: ObjectId,
        account_ref: ObjectId,
        sender: Address,
        funds: Funds,
        payload: Vec<u8>,
    ) -> Result<(), ApiError> {
        let queue = self
            .queues
            .get_mut(&queue_ref)
            .ok_or(ApiError::UnknownObject(queue_ref))?;

        let amount = funds.value();
        queue.enqueue(
            account_ref,
            InboundRequest {
                funds,
                sender,
                payload,
            },
        )?;

        debug!(
            "[al-05] Enqueued deposit of {} on queue {} ({} pending)",
            amount,
            queue_ref,
            queue.len()
        );
        Ok(())
    }

    fn author_settlement_batch(
        &mut self,
        state_token: &CapabilityToken,
        account_ref: ObjectId,
        count: usize,
        recipient: Address,
    ) -> Result<SettlementBatch, ApiError> {
        let account = self
            .accounts
            .get(&account_ref)
            .ok_or(ApiError::UnknownObject(account_ref))?;
        registry::validate(state_token, account, AuthorityKind::StateAuthority)?;

        let mut batch = SettlementBatch::for_account(account_ref);
        for instruction in self.planner.plan(account, count, recipient) {
            batch.append(instruction);
        }

        info!(
            "[al-05] Authored batch {} for account {}: {} payouts totalling {}",
            batch.id(),
            account_ref,
            batch.len(),
            batch.total()
        );
        Ok(batch)
    }

    fn apply_state_transition(
        &mut self,
        state_token: &CapabilityToken,
        account_ref: ObjectId,
        queue_ref: ObjectId,
        batch: &mut SettlementBatch,
        new_state_metadata: Vec<u8>,
        caller: Address,
    ) -> Result<TransitionReceipt, ApiError> {
        let account = self
            .accounts
            .get_mut(&account_ref)
            .ok_or(ApiError::UnknownObject(account_ref))?;
        let queue = self
            .queues
            .get_mut(&queue_ref)
            .ok_or(ApiError::UnknownObject(queue_ref))?;

        let outcome = domain::apply_state_transition(
            state_token,
            caller,
            account,
            queue,
            batch,
            new_state_metadata,
        )
        .map_err(|e| {
            warn!(
                "[al-05] Transition aborted on account {} while {}: {}",
                account_ref,
                e.failing_phase(),
                e
            );
            e
        })?;

        for payout in outcome.payouts {
            self.delivery.deliver(payout.recipient, payout.record);
        }

        info!(
            "[al-05] Settled account {} at state {} (credited {}, disbursed {} across {} payouts)",
            account_ref,
            outcome.receipt.state_index,
            outcome.receipt.credited,
            outcome.receipt.disbursed,
            outcome.receipt.payout_count
        );
        Ok(outcome.receipt)
    }
}
