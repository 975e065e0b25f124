//! Capability domain: token entities, registry operations, errors.

pub mod entities;
pub mod errors;
pub mod registry;

pub use entities::{AuthorityKind, CapabilityPair, CapabilityToken};
pub use errors::CapabilityError;
pub use registry::{discard, mint_pair, rotate, validate};
