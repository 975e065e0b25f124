//! Inbound queue domain.

pub mod entities;
pub mod errors;
pub mod queue;

pub use entities::{InboundRequest, QueueConfig};
pub use errors::QueueError;
pub use queue::InboundQueue;
