//! # Integration Test Flows
//!
//! Exercises the full boundary API end to end: account creation, deposits,
//! batch authoring, settlement rounds, rotation, and the failure families.
//!
//! ## Flows Tested:
//!
//! 1. **Deposit → author → settle**: the canonical round trip
//! 2. **Rotation choreography**: old controllers locked out, new ones live
//! 3. **Next-round policy**: deposits landing between rounds settle later
//! 4. **Failure families**: authorization, referential mismatch, funds

#[cfg(test)]
mod tests {
    use al_05_coordinator::{
        ApiError, FixedPayoutPlanner, InMemoryPayoutDelivery, SettlementApi, SettlementService,
        TransitionError,
    };
    use shared_types::{Address, Funds};

    const ALICE: Address = [0xA1; 32];
    const BOB: Address = [0xB0; 32];
    const RECIPIENT: Address = [0xAB; 32];

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn service(payout: u128) -> SettlementService<InMemoryPayoutDelivery, FixedPayoutPlanner> {
        SettlementService::new(InMemoryPayoutDelivery::new(), FixedPayoutPlanner::new(payout))
    }

    // =============================================================================
    // INTEGRATION TESTS: CANONICAL SETTLEMENT ROUND
    // =============================================================================

    /// Account created with 100; 30 deposited; one payout of 50 authored;
    /// transition applied. Final balance 80, one record of 50 delivered,
    /// state index 1.
    #[test]
    fn test_reference_settlement_scenario() {
        let mut svc = service(50);
        let created = svc.create_account(ALICE, Funds::mint(100), b"alias".to_vec());
        let pair = created.capabilities.object;

        svc.enqueue_request(
            created.queue_ref,
            created.account_ref,
            BOB,
            Funds::mint(30),
            b"top-up".to_vec(),
        )
        .unwrap();

        let mut batch = svc
            .author_settlement_batch(&pair.state, created.account_ref, 1, RECIPIENT)
            .unwrap();

        let receipt = svc
            .apply_state_transition(
                &pair.state,
                created.account_ref,
                created.queue_ref,
                &mut batch,
                b"state-1".to_vec(),
                ALICE,
            )
            .unwrap();

        assert_eq!(receipt.state_index, 1);
        assert_eq!(receipt.credited, 30);
        assert_eq!(receipt.disbursed, 50);

        let account = svc.account(created.account_ref).unwrap();
        assert_eq!(account.balance(), 100 + 30 - 50);
        assert_eq!(account.state_index(), 1);
        assert_eq!(account.state_metadata(), b"state-1");
        assert_eq!(account.last_sender(), Some(ALICE));

        assert_eq!(svc.delivery().delivered_count(RECIPIENT), 1);
        assert_eq!(svc.delivery().delivered_total(RECIPIENT), 50);
    }

    /// Several rounds in sequence against the same live account and queue.
    #[test]
    fn test_multiple_rounds_share_account_and_queue() {
        let mut svc = service(10);
        let created = svc.create_account(ALICE, Funds::mint(0), Vec::new());
        let pair = created.capabilities.object;

        for round in 1..=3u64 {
            svc.enqueue_request(
                created.queue_ref,
                created.account_ref,
                BOB,
                Funds::mint(10),
                Vec::new(),
            )
            .unwrap();

            let mut batch = svc
                .author_settlement_batch(&pair.state, created.account_ref, 1, RECIPIENT)
                .unwrap();
            let receipt = svc
                .apply_state_transition(
                    &pair.state,
                    created.account_ref,
                    created.queue_ref,
                    &mut batch,
                    format!("round-{round}").into_bytes(),
                    ALICE,
                )
                .unwrap();
            assert_eq!(receipt.state_index, round);
        }

        assert_eq!(svc.account(created.account_ref).unwrap().balance(), 0);
        assert_eq!(svc.delivery().delivered_count(RECIPIENT), 3);
        assert_eq!(svc.delivery().delivered_total(RECIPIENT), 30);
    }

    // =============================================================================
    // INTEGRATION TESTS: NEXT-ROUND DEPOSIT POLICY
    // =============================================================================

    /// A deposit serialized after round N's drain is not lost and not
    /// rejected; it settles in round N+1.
    #[test]
    fn test_enqueue_during_round_settles_next_round() {
        let mut svc = service(0);
        let created = svc.create_account(ALICE, Funds::mint(0), Vec::new());
        let pair = created.capabilities.object;

        svc.enqueue_request(
            created.queue_ref,
            created.account_ref,
            BOB,
            Funds::mint(5),
            Vec::new(),
        )
        .unwrap();

        // Round 1 drains the first deposit.
        let mut batch = svc
            .author_settlement_batch(&pair.state, created.account_ref, 0, RECIPIENT)
            .unwrap();
        let receipt = svc
            .apply_state_transition(
                &pair.state,
                created.account_ref,
                created.queue_ref,
                &mut batch,
                Vec::new(),
                ALICE,
            )
            .unwrap();
        assert_eq!(receipt.credited, 5);

        // This deposit arrives between rounds: accepted, visible next round.
        svc.enqueue_request(
            created.queue_ref,
            created.account_ref,
            BOB,
            Funds::mint(7),
            Vec::new(),
        )
        .unwrap();
        assert_eq!(svc.queue(created.queue_ref).unwrap().len(), 1);

        let receipt = svc
            .apply_state_transition(
                &pair.state,
                created.account_ref,
                created.queue_ref,
                &mut batch,
                Vec::new(),
                ALICE,
            )
            .unwrap();
        assert_eq!(receipt.credited, 7);
        assert_eq!(svc.account(created.account_ref).unwrap().balance(), 12);
    }

    // =============================================================================
    // INTEGRATION TESTS: ROTATION CHOREOGRAPHY
    // =============================================================================

    /// Governance rotates controllers; the old state token is refused, the
    /// new one settles.
    #[test]
    fn test_rotation_locks_out_old_state_authority() {
        let mut svc = service(0);
        let created = svc.create_account(ALICE, Funds::mint(100), Vec::new());
        let pair = created.capabilities.object;
        let old_state = pair.state;

        let outcome = svc
            .rotate_governance(pair.governance, created.account_ref, BOB, BOB, None)
            .unwrap();

        let mut batch = svc
            .author_settlement_batch(&outcome.state.object, created.account_ref, 0, RECIPIENT)
            .unwrap();

        // Old token: authorization failure, no state advance.
        let err = svc
            .apply_state_transition(
                &old_state,
                created.account_ref,
                created.queue_ref,
                &mut batch,
                Vec::new(),
                BOB,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Transition(TransitionError::Authorization(_))
        ));
        assert_eq!(svc.account(created.account_ref).unwrap().state_index(), 0);

        // New token: success.
        svc.apply_state_transition(
            &outcome.state.object,
            created.account_ref,
            created.queue_ref,
            &mut batch,
            Vec::new(),
            BOB,
        )
        .unwrap();
        assert_eq!(svc.account(created.account_ref).unwrap().state_index(), 1);

        // The stale token's holder may still discard it voluntarily.
        svc.discard_token(old_state);
    }

    /// Two rotations in a row: each generation's governance token works
    /// exactly once.
    #[test]
    fn test_chained_rotations() {
        let mut svc = service(0);
        let created = svc.create_account(ALICE, Funds::mint(0), Vec::new());
        let pair = created.capabilities.object;

        let first = svc
            .rotate_governance(pair.governance, created.account_ref, BOB, BOB, None)
            .unwrap();
        let second = svc
            .rotate_governance(first.governance.object, created.account_ref, ALICE, ALICE, None)
            .unwrap();

        // Generation is now 2; the gen-1 state token is stale.
        let err = svc
            .author_settlement_batch(&first.state.object, created.account_ref, 0, RECIPIENT)
            .unwrap_err();
        assert!(matches!(err, ApiError::Authorization(_)));
        assert!(svc
            .author_settlement_batch(&second.state.object, created.account_ref, 0, RECIPIENT)
            .is_ok());
    }

    // =============================================================================
    // INTEGRATION TESTS: FAILURE FAMILIES
    // =============================================================================

    /// A queue belonging to another account is a referential mismatch, not an
    /// authorization failure.
    #[test]
    fn test_cross_account_queue_is_referential_mismatch() {
        let mut svc = service(0);
        let a = svc.create_account(ALICE, Funds::mint(10), Vec::new());
        let b = svc.create_account(BOB, Funds::mint(10), Vec::new());
        let pair_a = a.capabilities.object;

        let mut batch = svc
            .author_settlement_batch(&pair_a.state, a.account_ref, 0, RECIPIENT)
            .unwrap();
        let err = svc
            .apply_state_transition(
                &pair_a.state,
                a.account_ref,
                b.queue_ref,
                &mut batch,
                Vec::new(),
                ALICE,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Transition(TransitionError::ReferentialMismatch { .. })
        ));
    }

    /// An over-budget batch leaves every object untouched and delivers
    /// nothing.
    #[test]
    fn test_insufficient_funds_aborts_whole_round() {
        let mut svc = service(200);
        let created = svc.create_account(ALICE, Funds::mint(100), Vec::new());
        let pair = created.capabilities.object;

        svc.enqueue_request(
            created.queue_ref,
            created.account_ref,
            BOB,
            Funds::mint(30),
            Vec::new(),
        )
        .unwrap();

        // Planner wants 200 but only 130 will be available post-credit.
        let mut batch = svc
            .author_settlement_batch(&pair.state, created.account_ref, 1, RECIPIENT)
            .unwrap();
        let err = svc
            .apply_state_transition(
                &pair.state,
                created.account_ref,
                created.queue_ref,
                &mut batch,
                Vec::new(),
                ALICE,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Transition(TransitionError::InsufficientFunds {
                requested: 200,
                available: 130,
            })
        ));

        assert_eq!(svc.account(created.account_ref).unwrap().balance(), 100);
        assert_eq!(svc.account(created.account_ref).unwrap().state_index(), 0);
        assert_eq!(svc.queue(created.queue_ref).unwrap().len(), 1);
        assert_eq!(batch.len(), 1);
        assert_eq!(svc.delivery().delivered_count(RECIPIENT), 0);

        // The caller re-submits with a feasible batch; the stranded deposit
        // is still there and settles now.
        let mut smaller = svc
            .author_settlement_batch(&pair.state, created.account_ref, 0, RECIPIENT)
            .unwrap();
        let receipt = svc
            .apply_state_transition(
                &pair.state,
                created.account_ref,
                created.queue_ref,
                &mut smaller,
                Vec::new(),
                ALICE,
            )
            .unwrap();
        assert_eq!(receipt.credited, 30);
        assert_eq!(svc.account(created.account_ref).unwrap().balance(), 130);
    }
}
