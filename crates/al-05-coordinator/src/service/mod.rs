//! Service layer wiring the domain protocol to the boundary API.

pub mod settlement_service;

pub use settlement_service::SettlementService;
