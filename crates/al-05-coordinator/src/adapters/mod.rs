//! In-memory adapters standing in for the host ledger and the off-chain
//! execution layer.

pub mod fixed_planner;
pub mod memory_delivery;

pub use fixed_planner::FixedPayoutPlanner;
pub use memory_delivery::InMemoryPayoutDelivery;
