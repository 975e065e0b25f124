//! Settlement batch domain.

pub mod batch;
pub mod entities;
pub mod errors;

pub use batch::SettlementBatch;
pub use entities::{Payout, PayoutInstruction, PayoutRecord, SettlementReference};
pub use errors::BatchError;
