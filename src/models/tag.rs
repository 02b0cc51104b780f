//! Key/value resource tags
//!
//! Tags on the resource-model side are plain key/value pairs. The service
//! has its own tag shape on the wire; conversion lives in the translator.

use serde::{Deserialize, Serialize};

/// A key/value label attached to a transformer for organizational or
/// billing purposes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_serializes_camel_case() {
        let tag = Tag::new("Environment", "Dev");
        let json = serde_json::to_value(&tag).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"key": "Environment", "value": "Dev"})
        );
    }

    #[test]
    fn test_tag_round_trips_through_json() {
        let tag = Tag::new("CostCenter", "1234");
        let json = serde_json::to_string(&tag).unwrap();
        let back: Tag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tag);
    }
}
