//! Operation Builder Service
//!
//! Main service implementing OperationsApi.

use crate::adapters::clock::SystemClock;
use crate::config::BuilderConfig;
use crate::domain::entities::{
    Comment, CommentOptions, CommentOptionsExtension, OperationRequest, Vote,
};
use crate::domain::errors::OperationError;
use crate::domain::metadata::JsonMetadata;
use crate::domain::text::{limit, slug};
use crate::ports::inbound::OperationsApi;
use crate::ports::outbound::Clock;

use tracing::{debug, trace, warn};

/// Operation Builder Service
///
/// Stateless apart from its configuration and clock, so a single instance
/// can be shared across threads.
#[derive(Clone, Debug)]
pub struct OperationBuilder<C = SystemClock> {
    config: BuilderConfig,
    clock: C,
}

impl OperationBuilder<SystemClock> {
    /// Create a new builder with default config and the system clock
    pub fn new() -> Self {
        Self::with_config(BuilderConfig::default())
    }

    /// Create a new builder with custom config and the system clock
    pub fn with_config(config: BuilderConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for OperationBuilder<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> OperationBuilder<C> {
    /// Create a builder with a custom time source
    pub fn with_clock(config: BuilderConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// `slug(limit(seed)) + "-" + unix_time`
    fn generate_permlink(&self, seed: &str) -> String {
        let short = limit(seed, self.config.permlink_max_len);
        let stem = slug(&short);
        if stem.is_empty() {
            warn!(seed, "Permlink seed has no URL-safe characters");
        }
        let permlink = format!("{}-{}", stem, self.clock.unix_timestamp());
        trace!(seed, %permlink, "Generated permlink");
        permlink
    }

    fn resolve_app<'a>(&'a self, app: &'a str) -> &'a str {
        if app.is_empty() {
            &self.config.default_app
        } else {
            app
        }
    }
}

impl<C: Clock> OperationsApi for OperationBuilder<C> {
    fn vote(&self, voter: &str, author: &str, permlink: &str, weight: i32) -> OperationRequest {
        debug!(voter, author, permlink, weight, "Building vote operation");

        OperationRequest::new(Vote {
            voter: voter.to_string(),
            author: author.to_string(),
            permlink: permlink.to_string(),
            weight,
        })
    }

    fn post(
        &self,
        author: &str,
        title: &str,
        body: &str,
        tags: &[String],
        app: &str,
    ) -> Result<OperationRequest, OperationError> {
        // 1. First tag is the category
        let (category, rest) = tags.split_first().ok_or(OperationError::EmptyTags)?;
        let parent_permlink = slug(category);
        if parent_permlink.is_empty() {
            warn!(category = %category, "Category tag has no URL-safe characters");
        }

        // 2. Permlink from the title
        let permlink = self.generate_permlink(title);

        // 3. Remaining tags and app go to metadata
        let json_metadata = JsonMetadata::new(rest.to_vec(), self.resolve_app(app)).encode()?;

        debug!(
            author,
            %permlink,
            %parent_permlink,
            extra_tags = rest.len(),
            "Building post operation"
        );

        Ok(OperationRequest::new(Comment {
            parent_author: String::new(),
            parent_permlink,
            author: author.to_string(),
            permlink,
            title: title.to_string(),
            body: body.to_string(),
            json_metadata,
        }))
    }

    fn comment(
        &self,
        parent_author: &str,
        parent_permlink: &str,
        author: &str,
        permlink: &str,
        body: &str,
        app: &str,
    ) -> Result<OperationRequest, OperationError> {
        let generated = self.generate_permlink(permlink);
        let json_metadata = JsonMetadata::new(Vec::new(), self.resolve_app(app)).encode()?;

        debug!(
            parent_author,
            parent_permlink,
            author,
            permlink = %generated,
            "Building comment operation"
        );

        Ok(OperationRequest::new(Comment {
            parent_author: parent_author.to_string(),
            parent_permlink: parent_permlink.to_string(),
            author: author.to_string(),
            permlink: generated,
            title: String::new(),
            body: body.to_string(),
            json_metadata,
        }))
    }

    fn comment_options(
        &self,
        author: &str,
        permlink: &str,
        max_accepted_payout: &str,
        percent_steem_dollars: u32,
        allow_votes: bool,
        allow_curation_rewards: bool,
        extensions: Vec<CommentOptionsExtension>,
    ) -> OperationRequest {
        debug!(
            author,
            permlink,
            max_accepted_payout,
            extensions = extensions.len(),
            "Building comment_options operation"
        );

        OperationRequest::new(CommentOptions {
            author: author.to_string(),
            permlink: permlink.to_string(),
            max_accepted_payout: max_accepted_payout.to_string(),
            percent_steem_dollars,
            allow_votes,
            allow_curation_rewards,
            extensions,
        })
    }
}
