//! Coordinator domain: the pure transition protocol and its error taxonomy.

pub mod errors;
pub mod transition;

pub use errors::{MismatchedObject, TransitionError};
pub use transition::{
    apply_state_transition, CreditedDeposit, TransitionOutcome, TransitionPhase, TransitionReceipt,
};
