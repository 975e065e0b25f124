//! Inbound request and queue configuration.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Funds};

/// A pending deposit: attached funds, ledger-verified origin, and an opaque
/// command payload for the off-chain execution layer.
///
/// Owned by its queue until drained; never independently addressable.
#[derive(Debug, Serialize, Deserialize)]
pub struct InboundRequest {
    /// Funds attached to the deposit.
    pub funds: Funds,
    /// Origin of the request, verified by the host ledger.
    pub sender: Address,
    /// Opaque command bytes interpreted off-chain.
    pub payload: Vec<u8>,
}

/// Queue configuration.
#[derive(Clone, Debug)]
pub struct QueueConfig {
    /// Maximum pending requests before deposits are refused.
    pub max_pending: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self { max_pending: 4096 }
    }
}

impl QueueConfig {
    /// Creates a minimal config for testing.
    pub fn for_testing() -> Self {
        Self { max_pending: 8 }
    }
}
