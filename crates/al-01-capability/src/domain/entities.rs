//! Capability token entities.
//!
//! Tokens are bearer credentials: possession is ownership. The type exposes
//! read accessors only — no mutators and no transfer operation, so ownership
//! can change hands solely through the mint/rotate path.

use serde::{Deserialize, Serialize};
use shared_types::ObjectId;

/// The two distinguished authorities over a settlement account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthorityKind {
    /// May author settlement batches and drive state transitions.
    StateAuthority,
    /// May rotate the controller pair and mutate governance metadata.
    GovernanceAuthority,
}

impl std::fmt::Display for AuthorityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StateAuthority => write!(f, "state-authority"),
            Self::GovernanceAuthority => write!(f, "governance-authority"),
        }
    }
}

/// A bearer credential granting one authority over one account at one
/// generation.
///
/// INVARIANT-1: authorizes an action iff `account_ref` equals the account's
/// id AND `generation` equals the account's current capability generation.
#[derive(Debug, Serialize, Deserialize)]
pub struct CapabilityToken {
    id: ObjectId,
    account_ref: ObjectId,
    generation: u64,
    kind: AuthorityKind,
}

impl CapabilityToken {
    /// Visible to the registry only; external code receives tokens, it never
    /// constructs them.
    pub(crate) fn new(account_ref: ObjectId, generation: u64, kind: AuthorityKind) -> Self {
        Self {
            id: ObjectId::fresh(),
            account_ref,
            generation,
            kind,
        }
    }

    /// Unique identity of this token object.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// The account this token governs.
    pub fn account_ref(&self) -> ObjectId {
        self.account_ref
    }

    /// Capability generation this token was minted at.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Which authority this token grants.
    pub fn kind(&self) -> AuthorityKind {
        self.kind
    }
}

/// The product of a mint: one state token and one governance token at the
/// same generation, addressed to possibly distinct holders.
#[derive(Debug)]
pub struct CapabilityPair {
    /// Token for the state authority (settlement driver).
    pub state: CapabilityToken,
    /// Token for the governance authority (controller of record).
    pub governance: CapabilityToken,
}
