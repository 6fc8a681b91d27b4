//! Operation entities and the broadcast request envelope
//!
//! Every operation serializes as a `[name, fields]` pair, and a request is
//! `{"operations": [[name, fields], ...]}`.

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Protocol operation names
pub mod names {
    pub const VOTE: &str = "vote";
    pub const COMMENT: &str = "comment";
    pub const COMMENT_OPTIONS: &str = "comment_options";
}

/// `vote` operation fields
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub voter: String,
    pub author: String,
    pub permlink: String,
    /// Basis points, negative for a downvote. Not range checked.
    pub weight: i32,
}

/// `comment` operation fields, shared by root posts and replies
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Empty for a root post
    pub parent_author: String,
    /// Category tag for a root post, parent permlink for a reply
    pub parent_permlink: String,
    pub author: String,
    pub permlink: String,
    /// Empty for a reply
    pub title: String,
    pub body: String,
    /// Encoded `JsonMetadata`, or `""` when there is none
    pub json_metadata: String,
}

impl Comment {
    /// A root post has no parent author.
    pub fn is_root_post(&self) -> bool {
        self.parent_author.is_empty()
    }
}

/// `comment_options` operation fields
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentOptions {
    pub author: String,
    pub permlink: String,
    /// Asset string, e.g. `"1000000.000 SBD"`
    pub max_accepted_payout: String,
    pub percent_steem_dollars: u32,
    pub allow_votes: bool,
    pub allow_curation_rewards: bool,
    pub extensions: Vec<CommentOptionsExtension>,
}

/// Payout route for a share of the author reward
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Beneficiary {
    pub account: String,
    /// Basis points of the author reward
    pub weight: u16,
}

impl Beneficiary {
    pub fn new(account: impl Into<String>, weight: u16) -> Self {
        Self {
            account: account.into(),
            weight,
        }
    }
}

/// Beneficiaries extension, wire form `[0, {"beneficiaries": [...]}]`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BeneficiariesExtension {
    pub beneficiaries: Vec<Beneficiary>,
}

impl BeneficiariesExtension {
    /// Extension variant index on the wire
    pub const TAG: u8 = 0;

    pub fn new(beneficiaries: Vec<Beneficiary>) -> Self {
        Self { beneficiaries }
    }
}

#[derive(Serialize)]
struct BeneficiaryListRef<'a> {
    beneficiaries: &'a [Beneficiary],
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct BeneficiaryList {
    beneficiaries: Vec<Beneficiary>,
}

impl Serialize for BeneficiariesExtension {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&Self::TAG)?;
        tuple.serialize_element(&BeneficiaryListRef {
            beneficiaries: &self.beneficiaries,
        })?;
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for BeneficiariesExtension {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (tag, list) = <(u8, BeneficiaryList)>::deserialize(deserializer)?;
        if tag != Self::TAG {
            return Err(de::Error::custom(format!(
                "unexpected extension tag {tag}, expected {}",
                Self::TAG
            )));
        }
        Ok(Self::new(list.beneficiaries))
    }
}

/// Entry of the `comment_options.extensions` sequence.
///
/// Anything that is not an exact beneficiaries extension, including a
/// tag-0 value with extra keys, is carried verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommentOptionsExtension {
    Beneficiaries(BeneficiariesExtension),
    Other(serde_json::Value),
}

impl From<BeneficiariesExtension> for CommentOptionsExtension {
    fn from(ext: BeneficiariesExtension) -> Self {
        CommentOptionsExtension::Beneficiaries(ext)
    }
}

impl From<serde_json::Value> for CommentOptionsExtension {
    fn from(value: serde_json::Value) -> Self {
        CommentOptionsExtension::Other(value)
    }
}

/// A single tagged operation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    Vote(Vote),
    Comment(Comment),
    CommentOptions(CommentOptions),
}

impl Operation {
    /// Protocol name used as the tag on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Vote(_) => names::VOTE,
            Operation::Comment(_) => names::COMMENT,
            Operation::CommentOptions(_) => names::COMMENT_OPTIONS,
        }
    }
}

impl From<Vote> for Operation {
    fn from(op: Vote) -> Self {
        Operation::Vote(op)
    }
}

impl From<Comment> for Operation {
    fn from(op: Comment) -> Self {
        Operation::Comment(op)
    }
}

impl From<CommentOptions> for Operation {
    fn from(op: CommentOptions) -> Self {
        Operation::CommentOptions(op)
    }
}

impl Serialize for Operation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(self.name())?;
        match self {
            Operation::Vote(op) => tuple.serialize_element(op)?,
            Operation::Comment(op) => tuple.serialize_element(op)?,
            Operation::CommentOptions(op) => tuple.serialize_element(op)?,
        }
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for Operation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OperationVisitor;

        impl<'de> Visitor<'de> for OperationVisitor {
            type Value = Operation;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a [name, fields] operation pair")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Operation, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let name: String = seq
                    .next_element()?
                    .ok_or_else(|| <A::Error as de::Error>::invalid_length(0, &self))?;

                let op = match name.as_str() {
                    names::VOTE => seq.next_element::<Vote>()?.map(Operation::Vote),
                    names::COMMENT => seq.next_element::<Comment>()?.map(Operation::Comment),
                    names::COMMENT_OPTIONS => seq
                        .next_element::<CommentOptions>()?
                        .map(Operation::CommentOptions),
                    other => {
                        return Err(de::Error::unknown_variant(
                            other,
                            &[names::VOTE, names::COMMENT, names::COMMENT_OPTIONS],
                        ))
                    }
                };

                op.ok_or_else(|| de::Error::invalid_length(1, &self))
            }
        }

        deserializer.deserialize_seq(OperationVisitor)
    }
}

/// Broadcast request envelope
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationRequest {
    pub operations: Vec<Operation>,
}

impl OperationRequest {
    /// Request carrying exactly one operation
    pub fn new(operation: impl Into<Operation>) -> Self {
        Self {
            operations: vec![operation.into()],
        }
    }

    /// Append another operation to the same request
    pub fn with_operation(mut self, operation: impl Into<Operation>) -> Self {
        self.operations.push(operation.into());
        self
    }

    /// Append every operation of `other`, keeping order
    pub fn extend(mut self, other: OperationRequest) -> Self {
        self.operations.extend(other.operations);
        self
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}
