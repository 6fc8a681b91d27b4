//! `json_metadata` payload attached to comment operations

use super::errors::OperationError;
use serde::{Deserialize, Serialize};

/// Auxiliary metadata carried as a JSON string in `json_metadata`.
///
/// Keys are only present when they carry a value, so a post with a single
/// tag and no app has no metadata at all.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonMetadata {
    /// Tags after the category tag
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Posting application
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub app: String,
}

impl JsonMetadata {
    pub fn new(tags: Vec<String>, app: impl Into<String>) -> Self {
        Self {
            tags,
            app: app.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.app.is_empty()
    }

    /// Encode for the `json_metadata` field.
    ///
    /// An empty mapping encodes to `""`, never `"{}"`.
    pub fn encode(&self) -> Result<String, OperationError> {
        if self.is_empty() {
            return Ok(String::new());
        }
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a `json_metadata` field. `""` yields empty metadata.
    pub fn decode(raw: &str) -> Result<Self, OperationError> {
        if raw.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_metadata_encodes_to_empty_string() {
        let meta = JsonMetadata::default();
        assert!(meta.is_empty());
        assert_eq!(meta.encode().unwrap(), "");
    }

    #[test]
    fn test_tags_then_app_order() {
        let meta = JsonMetadata::new(vec!["tutorial".into()], "myapp");
        assert_eq!(
            meta.encode().unwrap(),
            r#"{"tags":["tutorial"],"app":"myapp"}"#
        );
    }

    #[test]
    fn test_app_only() {
        let meta = JsonMetadata::new(vec![], "myapp");
        assert_eq!(meta.encode().unwrap(), r#"{"app":"myapp"}"#);
    }

    #[test]
    fn test_decode() {
        let meta = JsonMetadata::decode(r#"{"tags":["a","b"],"format":"markdown"}"#).unwrap();
        assert_eq!(meta.tags, vec!["a".to_string(), "b".to_string()]);
        assert!(meta.app.is_empty());

        assert_eq!(JsonMetadata::decode("").unwrap(), JsonMetadata::default());
        assert!(JsonMetadata::decode("not json").is_err());
    }
}
