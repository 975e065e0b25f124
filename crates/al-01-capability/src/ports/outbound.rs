//! # Outbound Port - GovernedAccount
//!
//! The registry's only dependency: the entity whose capability generation it
//! reads and advances. Implemented by the Account subsystem (al-02).

use shared_types::ObjectId;

/// An entity governed by a rotating capability generation.
///
/// INVARIANT-3: `rotate_capability_generation` is called exclusively from
/// `registry::rotate`; no other code path may advance the generation.
pub trait GovernedAccount {
    /// Identity of the governed entity.
    fn id(&self) -> ObjectId;

    /// Current capability generation.
    fn capability_generation(&self) -> u64;

    /// Advances the generation by exactly 1 and returns the new value.
    fn rotate_capability_generation(&mut self) -> u64;
}
