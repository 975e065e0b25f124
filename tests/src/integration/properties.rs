//! # Protocol Properties
//!
//! Property-style checks over randomized interleavings of deposits and
//! settlement rounds, plus the capability-generation laws.
//!
//! ## Properties Tested:
//!
//! 1. **Conservation**: final balance = initial + Σ credited − Σ disbursed
//! 2. **Generation law**: a token minted at generation g validates iff the
//!    account is still at generation g
//! 3. **Rotation law**: rotation is +1 and invalidates the whole prior pair
//! 4. **Index law**: state_index moves +1 per success, 0 per abort

#[cfg(test)]
mod tests {
    use al_01_capability::{registry, AuthorityKind, CapabilityError, GovernedAccount};
    use al_02_account::Account;
    use al_03_inbound_queue::{InboundQueue, InboundRequest, QueueConfig};
    use al_04_settlement_batch::{PayoutInstruction, SettlementBatch};
    use al_05_coordinator::domain::apply_state_transition;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use shared_types::{Address, Funds};

    const CALLER: Address = [0xC0; 32];

    fn deposit(amount: u128, sender_byte: u8) -> InboundRequest {
        InboundRequest {
            funds: Funds::mint(amount),
            sender: [sender_byte; 32],
            payload: Vec::new(),
        }
    }

    // =============================================================================
    // PROPERTY: CONSERVATION LAW
    // =============================================================================

    /// Random interleaving of deposits and settlement rounds. After every
    /// committed round, balance == initial + total credited − total
    /// disbursed; aborted rounds change nothing.
    #[test]
    fn test_conservation_under_random_interleavings() {
        // Fixed seed: failures must reproduce.
        let mut rng = StdRng::seed_from_u64(0x5E77);

        for _ in 0..50 {
            let initial: u128 = rng.gen_range(0..1_000);
            let mut account = Account::create([0xEE; 32], Funds::mint(initial), Vec::new());
            let mut queue = InboundQueue::for_account(account.id(), QueueConfig::default());
            let mut batch = SettlementBatch::for_account(account.id());
            let pair = registry::mint_pair(&account);

            let mut total_credited: u128 = 0;
            let mut total_disbursed: u128 = 0;
            let mut committed_rounds: u64 = 0;

            for step in 0..40 {
                if rng.gen_bool(0.6) {
                    // Deposit.
                    let amount = rng.gen_range(0..100u128);
                    queue
                        .enqueue(account.id(), deposit(amount, step as u8))
                        .unwrap();
                } else {
                    // Settlement round with a batch that may or may not fit.
                    let projected = account.balance() + queue.pending_total();
                    let requested = rng.gen_range(0..=projected + 50);
                    batch.append(PayoutInstruction {
                        amount: requested,
                        recipient: [0x01; 32],
                    });

                    let pending = queue.pending_total();
                    let result = apply_state_transition(
                        &pair.state,
                        CALLER,
                        &mut account,
                        &mut queue,
                        &mut batch,
                        Vec::new(),
                    );

                    if requested <= projected {
                        let outcome = result.unwrap();
                        committed_rounds += 1;
                        total_credited += pending;
                        total_disbursed += requested;
                        assert_eq!(outcome.receipt.credited, pending);
                        assert!(queue.is_empty());
                        assert!(batch.is_empty());
                    } else {
                        result.unwrap_err();
                        // Aborted round keeps its inputs; the off-chain
                        // authority re-authors, so start a fresh batch.
                        assert_eq!(batch.len(), 1);
                        batch = SettlementBatch::for_account(account.id());
                    }
                }

                assert_eq!(
                    account.balance(),
                    initial + total_credited - total_disbursed,
                );
                assert_eq!(account.state_index(), committed_rounds);
            }
        }
    }

    // =============================================================================
    // PROPERTY: GENERATION LAW
    // =============================================================================

    /// A token minted at generation g fails against any other generation.
    #[test]
    fn test_generation_g_token_only_validates_at_g() {
        let mut account = Account::create([0xEE; 32], Funds::mint(0), Vec::new());
        let mut minted = Vec::new();

        for generation in 0..8u64 {
            assert_eq!(account.capability_generation(), generation);
            minted.push((generation, registry::mint_pair(&account)));
            account.rotate_capability_generation();
        }
        // One live pair at the current generation.
        minted.push((account.capability_generation(), registry::mint_pair(&account)));

        let current = account.capability_generation();
        for (generation, pair) in &minted {
            let result = registry::validate(&pair.state, &account, AuthorityKind::StateAuthority);
            if *generation == current {
                assert!(result.is_ok());
            } else {
                assert_eq!(
                    result.unwrap_err(),
                    CapabilityError::StaleCapability {
                        token_generation: *generation,
                        current_generation: current,
                    }
                );
            }
        }
    }

    /// Rotation advances the generation by exactly 1 and invalidates both
    /// tokens of the prior pair.
    #[test]
    fn test_rotation_invalidates_entire_prior_pair() {
        let mut account = Account::create([0xEE; 32], Funds::mint(0), Vec::new());
        let old = registry::mint_pair(&account);
        let before = account.capability_generation();

        let fresh = registry::rotate(old.governance, &mut account).unwrap();
        assert_eq!(account.capability_generation(), before + 1);

        // The surviving old state token is stale.
        assert!(registry::validate(&old.state, &account, AuthorityKind::StateAuthority).is_err());
        // Both fresh tokens are live.
        assert!(registry::validate(&fresh.state, &account, AuthorityKind::StateAuthority).is_ok());
        assert!(registry::validate(
            &fresh.governance,
            &account,
            AuthorityKind::GovernanceAuthority
        )
        .is_ok());
    }

    // =============================================================================
    // PROPERTY: STATE-INDEX LAW
    // =============================================================================

    /// The index advances by exactly 1 on success and not at all on abort,
    /// whichever failure family caused the abort.
    #[test]
    fn test_state_index_tracks_committed_rounds_only() {
        let mut account = Account::create([0xEE; 32], Funds::mint(10), Vec::new());
        let mut queue = InboundQueue::for_account(account.id(), QueueConfig::default());
        let mut batch = SettlementBatch::for_account(account.id());
        let pair = registry::mint_pair(&account);

        // Abort: over-budget batch.
        batch.append(PayoutInstruction {
            amount: 11,
            recipient: [0x01; 32],
        });
        apply_state_transition(
            &pair.state,
            CALLER,
            &mut account,
            &mut queue,
            &mut batch,
            Vec::new(),
        )
        .unwrap_err();
        assert_eq!(account.state_index(), 0);

        // Abort: wrong authority kind.
        apply_state_transition(
            &pair.governance,
            CALLER,
            &mut account,
            &mut queue,
            &mut batch,
            Vec::new(),
        )
        .unwrap_err();
        assert_eq!(account.state_index(), 0);

        // Success with an affordable batch.
        let mut affordable = SettlementBatch::for_account(account.id());
        affordable.append(PayoutInstruction {
            amount: 10,
            recipient: [0x01; 32],
        });
        apply_state_transition(
            &pair.state,
            CALLER,
            &mut account,
            &mut queue,
            &mut affordable,
            Vec::new(),
        )
        .unwrap();
        assert_eq!(account.state_index(), 1);
    }
}
