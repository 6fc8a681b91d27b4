//! # Steem Operations
//!
//! Builds broadcast requests for the Steem `vote`, `comment` and
//! `comment_options` operations.
//!
//! ## Architecture
//!
//! - **Domain** (`domain/`): Typed operations, the request envelope, JSON
//!   metadata, slug/limit text helpers, errors
//! - **Ports**: Inbound (`OperationsApi`) and Outbound (`Clock`)
//! - **Adapters**: `SystemClock`, `FixedClock`
//! - **Application**: `OperationBuilder` service
//!
//! ## Wire Shape
//!
//! ```text
//! {
//!   "operations": [
//!     [ "<op_name>", { <field>: <value>, ... } ]
//!   ]
//! }
//! ```
//!
//! `post` and `comment` both emit a `"comment"` operation. A post has an
//! empty `parent_author` and a title, a reply has a parent and no title.
//!
//! ## Usage
//!
//! ```
//! use steem_operations::{OperationBuilder, OperationsApi};
//!
//! let builder = OperationBuilder::new();
//! let request = builder.vote("alice", "bob", "hello-world-1700000000", 10_000);
//! let json = request.to_json().unwrap();
//! assert!(json.contains("\"vote\""));
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::clock::{FixedClock, SystemClock};
pub use application::service::OperationBuilder;
pub use config::{BuilderConfig, ConfigError};
pub use domain::entities::*;
pub use domain::errors::OperationError;
pub use domain::metadata::JsonMetadata;
pub use domain::text::{limit, slug};
pub use ports::inbound::OperationsApi;
pub use ports::outbound::Clock;
