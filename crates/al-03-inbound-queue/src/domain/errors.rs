//! Inbound queue error types.

use shared_types::ObjectId;
use thiserror::Error;

/// Errors raised on enqueue.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    /// The supplied account reference does not match the queue's binding.
    #[error("Wrong account: queue bound to {expected}, got {actual}")]
    WrongAccount { expected: ObjectId, actual: ObjectId },

    /// The queue is at capacity.
    #[error("Queue full at {capacity} pending requests")]
    QueueFull { capacity: usize },
}
