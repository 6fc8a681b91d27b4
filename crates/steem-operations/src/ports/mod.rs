//! Ports module for Steem operations
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::OperationsApi;
pub use outbound::Clock;
