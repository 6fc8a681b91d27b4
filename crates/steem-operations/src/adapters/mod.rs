//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits.

pub mod clock;

pub use clock::{FixedClock, SystemClock};
