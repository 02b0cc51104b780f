//! Declarative transformer resource model
//!
//! This is the framework-facing representation of a transformer: the shape
//! the provider framework hands to the translator and receives back from it.
//! Enum-typed service fields (`file_format`, `status`, the X12 details) are
//! flattened to plain strings here; the service's typed forms live in
//! `crate::service::types`.

use serde::{Deserialize, Serialize};

use super::tag::Tag;

/// X12 transaction details, flattened to plain strings on the model side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct X12Details {
    pub transaction_set: String,
    pub version: String,
}

/// EDI document typing for a transformer.
///
/// The service models this as a discriminated union. X12 is the only variant
/// the service defines today; it always carries both a transaction set and a
/// version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EdiType {
    X12Details(X12Details),
}

/// Resource model for a transformer.
///
/// Constructed fresh for each translation call and never mutated in place.
/// `transformer_id`, `transformer_arn`, `status`, `created_at` and
/// `modified_at` are service-assigned: they are populated only by response
/// parsing, never supplied by the caller on create or update.
///
/// Timestamps are carried as RFC 3339 strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformerModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transformer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transformer_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapping_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edi_type: Option<EdiType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_are_omitted_from_json() {
        let model = TransformerModel {
            name: Some("demo".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json, serde_json::json!({"name": "demo"}));
    }

    #[test]
    fn test_edi_type_serializes_as_tagged_union() {
        let edi = EdiType::X12Details(X12Details {
            transaction_set: "850".to_string(),
            version: "00401".to_string(),
        });
        let json = serde_json::to_value(&edi).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "x12Details": {"transactionSet": "850", "version": "00401"}
            })
        );
    }
}
