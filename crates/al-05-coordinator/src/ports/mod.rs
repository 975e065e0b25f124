//! Ports for the coordinator subsystem.

pub mod inbound;
pub mod outbound;
