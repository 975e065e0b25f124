//! Ports for the Capability Registry.

pub mod outbound;
