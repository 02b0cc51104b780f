//! Request builders
//!
//! Each builder produces a fresh outbound request from a resource model,
//! copying fields verbatim. No defaulting and no validation: whatever the
//! model carries goes on the request, and whatever it lacks stays unset.
//! Empty strings are NOT normalized here; normalization is an inbound-only
//! rule (see `super::response`).

use std::collections::BTreeMap;

use crate::models::{Tag, TransformerModel};
use crate::service::requests::{
    CreateTransformerRequest, DeleteTransformerRequest, GetTransformerRequest,
    ListTransformersRequest, TagResourceRequest, UntagResourceRequest, UpdateTransformerRequest,
};
use crate::service::types;

use super::edi;

/// Build the request that creates a transformer from the model's declared
/// fields.
pub fn to_create_request(model: &TransformerModel) -> CreateTransformerRequest {
    CreateTransformerRequest {
        name: model.name.clone(),
        file_format: model.file_format.clone().map(types::FileFormat::from),
        mapping_template: model.mapping_template.clone(),
        sample_document: model.sample_document.clone(),
        edi_type: model.edi_type.as_ref().map(edi::to_wire),
        tags: model.tags.iter().map(to_wire_tag).collect(),
    }
}

/// Build the describe request keyed by the model's transformer id.
pub fn to_read_request(model: &TransformerModel) -> GetTransformerRequest {
    GetTransformerRequest {
        transformer_id: model.transformer_id.clone(),
    }
}

/// Build the delete request keyed by the model's transformer id.
pub fn to_delete_request(model: &TransformerModel) -> DeleteTransformerRequest {
    DeleteTransformerRequest {
        transformer_id: model.transformer_id.clone(),
    }
}

/// Build the update request with every mutable field copied.
///
/// `status` is passed through verbatim rather than computed; whether the
/// transition is legal is between the caller and the service.
pub fn to_update_request(model: &TransformerModel) -> UpdateTransformerRequest {
    UpdateTransformerRequest {
        transformer_id: model.transformer_id.clone(),
        name: model.name.clone(),
        file_format: model.file_format.clone().map(types::FileFormat::from),
        mapping_template: model.mapping_template.clone(),
        sample_document: model.sample_document.clone(),
        edi_type: model.edi_type.as_ref().map(edi::to_wire),
        status: model.status.clone().map(types::TransformerStatus::from),
    }
}

/// Build the listing request. An absent token leaves the field unset, so it
/// is omitted from the serialized request entirely. `max_results` is left to
/// the service default.
pub fn to_list_request(next_token: Option<&str>) -> ListTransformersRequest {
    ListTransformersRequest {
        next_token: next_token.map(str::to_owned),
        max_results: None,
    }
}

/// Build the tagging request keyed by the model's ARN, converting each map
/// entry to the service's tag shape.
pub fn to_tag_request(
    model: &TransformerModel,
    tags: &BTreeMap<String, String>,
) -> TagResourceRequest {
    TagResourceRequest {
        resource_arn: model.transformer_arn.clone(),
        tags: tags
            .iter()
            .map(|(key, value)| types::Tag {
                key: key.clone(),
                value: value.clone(),
            })
            .collect(),
    }
}

/// Build the untagging request keyed by the model's ARN.
pub fn to_untag_request(model: &TransformerModel, tag_keys: &[String]) -> UntagResourceRequest {
    UntagResourceRequest {
        resource_arn: model.transformer_arn.clone(),
        tag_keys: tag_keys.to_vec(),
    }
}

fn to_wire_tag(tag: &Tag) -> types::Tag {
    types::Tag {
        key: tag.key.clone(),
        value: tag.value.clone(),
    }
}
