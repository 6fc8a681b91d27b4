//! Error types for operation building

use thiserror::Error;

/// All errors that can occur while building an operation request
#[derive(Debug, Error)]
pub enum OperationError {
    /// `post` needs at least one tag; the first becomes the parent permlink
    #[error("Post requires at least one tag for the parent permlink")]
    EmptyTags,

    /// JSON metadata could not be encoded or decoded
    #[error("Invalid json_metadata: {0}")]
    Metadata(#[from] serde_json::Error),
}
