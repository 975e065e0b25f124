//! Object identities and primitive aliases.
//!
//! Every independently addressable entity in the host ledger's object store
//! (accounts, queues, batches, capability tokens, payout records) carries an
//! `ObjectId`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A ledger-verified message origin or payout recipient (32 bytes).
pub type Address = [u8; 32];

/// Quantity of the single fungible asset type.
pub type Amount = u128;

/// Unique identity of a ledger object.
///
/// Freshness is delegated to the host ledger's id-generation primitive,
/// modeled here as a v4 UUID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObjectId(Uuid);

impl ObjectId {
    /// Generates a fresh, globally unique object id.
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }

    /// Reconstructs an id from its raw bytes (host-ledger deserialization).
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Raw byte representation.
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
