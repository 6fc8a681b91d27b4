//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::{CommentOptionsExtension, OperationRequest};
use crate::domain::errors::OperationError;

/// Request builder API.
///
/// Every method returns a request holding exactly one operation. Inputs are
/// not validated against protocol limits.
pub trait OperationsApi: Send + Sync {
    /// Build a `vote` operation.
    fn vote(&self, voter: &str, author: &str, permlink: &str, weight: i32) -> OperationRequest;

    /// Build a root post (`comment` with no parent author).
    ///
    /// The first tag is consumed as the category and becomes
    /// `parent_permlink`; the remaining tags go to `json_metadata`.
    /// The permlink is derived from the title plus the current Unix time.
    ///
    /// Fails with [`OperationError::EmptyTags`] when `tags` is empty.
    fn post(
        &self,
        author: &str,
        title: &str,
        body: &str,
        tags: &[String],
        app: &str,
    ) -> Result<OperationRequest, OperationError>;

    /// Build a reply (`comment` with an empty title).
    ///
    /// `permlink` is used as a seed: it is truncated, slugged and suffixed
    /// with the current Unix time.
    fn comment(
        &self,
        parent_author: &str,
        parent_permlink: &str,
        author: &str,
        permlink: &str,
        body: &str,
        app: &str,
    ) -> Result<OperationRequest, OperationError>;

    /// Build a `comment_options` operation. All inputs are passed through.
    #[allow(clippy::too_many_arguments)]
    fn comment_options(
        &self,
        author: &str,
        permlink: &str,
        max_accepted_payout: &str,
        percent_steem_dollars: u32,
        allow_votes: bool,
        allow_curation_rewards: bool,
        extensions: Vec<CommentOptionsExtension>,
    ) -> OperationRequest;
}
