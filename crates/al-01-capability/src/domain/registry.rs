//! Registry operations: mint, validate, rotate, discard.
//!
//! All functions are pure protocol logic over the `GovernedAccount` port.
//! `validate` never mutates; `rotate` is the sole path that advances an
//! account's generation.

use super::entities::{AuthorityKind, CapabilityPair, CapabilityToken};
use super::errors::CapabilityError;
use crate::ports::outbound::GovernedAccount;

/// Mints a state/governance token pair at the account's current generation.
///
/// No account state changes. Called at account creation and from `rotate`.
pub fn mint_pair(account: &impl GovernedAccount) -> CapabilityPair {
    let generation = account.capability_generation();
    CapabilityPair {
        state: CapabilityToken::new(account.id(), generation, AuthorityKind::StateAuthority),
        governance: CapabilityToken::new(
            account.id(),
            generation,
            AuthorityKind::GovernanceAuthority,
        ),
    }
}

/// Checks that `token` currently authorizes `expected` actions on `account`.
///
/// Check order: account binding, then generation, then kind.
///
/// # Errors
/// - `WrongAccount` if the token is bound to a different account
/// - `StaleCapability` if the token's generation is not current
/// - `WrongKind` if the token grants the other authority
pub fn validate(
    token: &CapabilityToken,
    account: &impl GovernedAccount,
    expected: AuthorityKind,
) -> Result<(), CapabilityError> {
    if token.account_ref() != account.id() {
        return Err(CapabilityError::WrongAccount {
            expected: account.id(),
            actual: token.account_ref(),
        });
    }
    if token.generation() != account.capability_generation() {
        return Err(CapabilityError::StaleCapability {
            token_generation: token.generation(),
            current_generation: account.capability_generation(),
        });
    }
    if token.kind() != expected {
        return Err(CapabilityError::WrongKind {
            expected,
            actual: token.kind(),
        });
    }
    Ok(())
}

/// Rotates the controller pair.
///
/// Validates and consumes the presented governance token, advances the
/// account's generation by 1, and mints a fresh pair at the new generation.
/// Every outstanding token from the prior generation (the state token
/// included) becomes permanently stale, though the objects survive until
/// their holders discard them.
///
/// # Errors
/// Any `CapabilityError` from validating the presented token; the account is
/// untouched on failure and the token is returned to its presenter.
pub fn rotate(
    governance_token: CapabilityToken,
    account: &mut impl GovernedAccount,
) -> Result<CapabilityPair, (CapabilityToken, CapabilityError)> {
    if let Err(e) = validate(&governance_token, account, AuthorityKind::GovernanceAuthority) {
        return Err((governance_token, e));
    }
    discard(governance_token);
    account.rotate_capability_generation();
    Ok(mint_pair(account))
}

/// Voluntary, unconditional destruction of a token by its holder.
///
/// Works on stale tokens too; validity is irrelevant.
pub fn discard(token: CapabilityToken) {
    drop(token);
}
