//! Request shapes of the transformer service API
//!
//! Field names and JSON casing follow the service's published contract
//! exactly. Optional fields left unset are omitted from the serialized
//! request rather than sent as empty values. No defaulting happens here:
//! required-by-the-service fields are still optional on the shape, and the
//! service rejects requests that omit them.

use serde::{Deserialize, Serialize};

use super::types::{EdiType, FileFormat, Tag, TransformerStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransformerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_format: Option<FileFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapping_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edi_type: Option<EdiType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTransformerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transformer_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTransformerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transformer_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransformerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transformer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_format: Option<FileFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapping_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edi_type: Option<EdiType>,
    /// Passed through verbatim from the model; the caller owns status
    /// legality, the service enforces it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransformerStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTransformersRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagResourceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UntagResourceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag_keys: Vec<String>,
}
