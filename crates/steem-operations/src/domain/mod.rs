//! Domain module for Steem operations
//!
//! Contains operation entities, metadata encoding, text helpers and errors.

pub mod entities;
pub mod errors;
pub mod metadata;
pub mod text;

pub use entities::*;
pub use errors::*;
pub use metadata::JsonMetadata;
