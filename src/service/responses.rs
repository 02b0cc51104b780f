//! Response shapes of the transformer service API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::{EdiType, FileFormat, TransformerStatus};

/// Describe response for a single transformer.
///
/// Every field is optional on the wire; the service has been observed to
/// return empty strings as well as omitted fields for absent values, which
/// is why the response parser normalizes both to the same absent state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTransformerResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transformer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transformer_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_format: Option<FileFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapping_template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_document: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edi_type: Option<EdiType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TransformerStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

/// One entry of a listing response.
///
/// The listing call returns a reduced field set: no ARN and no EDI typing.
/// `created_at` is required on this shape while `modified_at` is not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformerSummary {
    pub transformer_id: String,
    pub name: String,
    pub file_format: FileFormat,
    pub mapping_template: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_document: Option<String>,
    pub status: TransformerStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

/// Listing response. The pagination token is passed through untouched; no
/// pagination loop lives in this layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTransformersResponse {
    #[serde(default)]
    pub transformers: Vec<TransformerSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}
