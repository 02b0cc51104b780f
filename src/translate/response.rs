//! Response parsers
//!
//! Each parser produces a fresh resource model from an inbound response.
//! Inbound string fields are normalized so that an empty string and an
//! omitted field land in the same absent state; timestamps are rendered to
//! RFC 3339 strings.

use chrono::{DateTime, Utc};

use crate::models::TransformerModel;
use crate::service::responses::{
    GetTransformerResponse, ListTransformersResponse, TransformerSummary,
};

use super::{edi, none_if_empty};

/// Build the full resource model from a describe response.
///
/// Every string field is normalized independently; an EDI typing absent from
/// the response stays absent on the model, no default is substituted.
pub fn from_read_response(response: &GetTransformerResponse) -> TransformerModel {
    TransformerModel {
        transformer_id: none_if_empty(response.transformer_id.clone()),
        transformer_arn: none_if_empty(response.transformer_arn.clone()),
        name: none_if_empty(response.name.clone()),
        file_format: none_if_empty(
            response
                .file_format
                .as_ref()
                .map(|format| format.as_str().to_owned()),
        ),
        mapping_template: none_if_empty(response.mapping_template.clone()),
        sample_document: none_if_empty(response.sample_document.clone()),
        edi_type: response.edi_type.as_ref().map(edi::from_wire),
        status: none_if_empty(
            response
                .status
                .as_ref()
                .map(|status| status.as_str().to_owned()),
        ),
        created_at: response.created_at.map(render_timestamp),
        modified_at: response.modified_at.map(render_timestamp),
        tags: Vec::new(),
    }
}

/// Build one partial model per listing entry.
///
/// Listing entries carry only the summary field set; see
/// [`TransformerSummary`]. No ARN and no EDI typing come back from the
/// listing call, so those stay absent on the models.
pub fn from_list_response(response: &ListTransformersResponse) -> Vec<TransformerModel> {
    tracing::debug!(
        "translating {} transformer summaries",
        response.transformers.len()
    );
    response.transformers.iter().map(from_summary).collect()
}

fn from_summary(summary: &TransformerSummary) -> TransformerModel {
    TransformerModel {
        transformer_id: Some(summary.transformer_id.clone()),
        transformer_arn: None,
        name: Some(summary.name.clone()),
        file_format: Some(summary.file_format.as_str().to_owned()),
        mapping_template: Some(summary.mapping_template.clone()),
        sample_document: summary.sample_document.clone(),
        edi_type: None,
        status: Some(summary.status.as_str().to_owned()),
        // created_at is required on the summary shape, modified_at is not.
        created_at: Some(render_timestamp(summary.created_at)),
        modified_at: summary.modified_at.map(render_timestamp),
        tags: Vec::new(),
    }
}

fn render_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339()
}
