//! Tests for the request builders: verbatim field copy, no defaulting, and
//! wire-level omission of unset fields.

use std::collections::BTreeMap;

use b2bi_transformer_provider::models::{EdiType, Tag, TransformerModel, X12Details};
use b2bi_transformer_provider::translate::{
    to_create_request, to_delete_request, to_list_request, to_read_request, to_tag_request,
    to_untag_request, to_update_request,
};

fn demo_model() -> TransformerModel {
    TransformerModel {
        name: Some("demo".to_string()),
        file_format: Some("X12".to_string()),
        mapping_template: Some("<template>".to_string()),
        edi_type: Some(EdiType::X12Details(X12Details {
            transaction_set: "850".to_string(),
            version: "00401".to_string(),
        })),
        ..Default::default()
    }
}

#[test]
fn test_create_request_carries_declared_fields() {
    let request = to_create_request(&demo_model());

    assert_eq!(request.name.as_deref(), Some("demo"));
    assert_eq!(request.file_format.as_ref().map(|f| f.as_str()), Some("X12"));
    assert_eq!(request.mapping_template.as_deref(), Some("<template>"));
    assert_eq!(request.sample_document, None);

    let edi = request.edi_type.expect("edi type should be set");
    let b2bi_transformer_provider::service::types::EdiType::X12Details(details) = edi;
    assert_eq!(details.transaction_set.as_str(), "850");
    assert_eq!(details.version.as_str(), "00401");
}

#[test]
fn test_create_request_omits_absent_fields_on_the_wire() {
    let request = to_create_request(&demo_model());
    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "name": "demo",
            "fileFormat": "X12",
            "mappingTemplate": "<template>",
            "ediType": {
                "x12Details": {"transactionSet": "850", "version": "00401"}
            }
        })
    );
}

#[test]
fn test_create_request_converts_tags() {
    let mut model = demo_model();
    model.tags = vec![Tag::new("Environment", "Dev"), Tag::new("Team", "edi")];

    let request = to_create_request(&model);
    assert_eq!(request.tags.len(), 2);
    assert_eq!(request.tags[0].key, "Environment");
    assert_eq!(request.tags[0].value, "Dev");
    assert_eq!(request.tags[1].key, "Team");
    assert_eq!(request.tags[1].value, "edi");
}

#[test]
fn test_create_request_does_not_normalize_empty_strings() {
    let mut model = demo_model();
    model.sample_document = Some(String::new());

    let request = to_create_request(&model);
    assert_eq!(request.sample_document.as_deref(), Some(""));
}

#[test]
fn test_read_request_keyed_by_transformer_id() {
    let model = TransformerModel {
        transformer_id: Some("tr-123".to_string()),
        ..Default::default()
    };
    let request = to_read_request(&model);
    assert_eq!(request.transformer_id.as_deref(), Some("tr-123"));
}

#[test]
fn test_delete_request_keyed_by_transformer_id() {
    let model = TransformerModel {
        transformer_id: Some("tr-123".to_string()),
        ..Default::default()
    };
    let request = to_delete_request(&model);
    assert_eq!(request.transformer_id.as_deref(), Some("tr-123"));
}

#[test]
fn test_update_request_copies_mutable_fields_and_status() {
    let mut model = demo_model();
    model.transformer_id = Some("tr-123".to_string());
    model.sample_document = Some("s3://bucket/sample.edi".to_string());
    model.status = Some("inactive".to_string());

    let request = to_update_request(&model);
    assert_eq!(request.transformer_id.as_deref(), Some("tr-123"));
    assert_eq!(request.name.as_deref(), Some("demo"));
    assert_eq!(request.file_format.as_ref().map(|f| f.as_str()), Some("X12"));
    assert_eq!(request.mapping_template.as_deref(), Some("<template>"));
    assert_eq!(
        request.sample_document.as_deref(),
        Some("s3://bucket/sample.edi")
    );
    assert!(request.edi_type.is_some());
    // Status is a passthrough, not computed here.
    assert_eq!(request.status.as_ref().map(|s| s.as_str()), Some("inactive"));
}

#[test]
fn test_update_request_leaves_absent_status_unset() {
    let request = to_update_request(&demo_model());
    assert_eq!(request.status, None);
}

#[test]
fn test_list_request_with_token() {
    let request = to_list_request(Some("page-2"));
    assert_eq!(request.next_token.as_deref(), Some("page-2"));
    assert_eq!(request.max_results, None);
}

#[test]
fn test_list_request_without_token_omits_the_field() {
    let request = to_list_request(None);
    assert_eq!(request.next_token, None);

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json, serde_json::json!({}));
}

#[test]
fn test_tag_request_keyed_by_arn() {
    let model = TransformerModel {
        transformer_arn: Some("arn:aws:b2bi:eu-west-1:111122223333:transformer/tr-123".to_string()),
        ..Default::default()
    };
    let mut tags = BTreeMap::new();
    tags.insert("Environment".to_string(), "Dev".to_string());
    tags.insert("Team".to_string(), "edi".to_string());

    let request = to_tag_request(&model, &tags);
    assert_eq!(
        request.resource_arn.as_deref(),
        Some("arn:aws:b2bi:eu-west-1:111122223333:transformer/tr-123")
    );
    assert_eq!(request.tags.len(), 2);
    assert_eq!(request.tags[0].key, "Environment");
    assert_eq!(request.tags[0].value, "Dev");
    assert_eq!(request.tags[1].key, "Team");
    assert_eq!(request.tags[1].value, "edi");
}

#[test]
fn test_untag_request_keyed_by_arn() {
    let model = TransformerModel {
        transformer_arn: Some("arn:aws:b2bi:eu-west-1:111122223333:transformer/tr-123".to_string()),
        ..Default::default()
    };
    let keys = vec!["Environment".to_string(), "Team".to_string()];

    let request = to_untag_request(&model, &keys);
    assert_eq!(
        request.resource_arn.as_deref(),
        Some("arn:aws:b2bi:eu-west-1:111122223333:transformer/tr-123")
    );
    assert_eq!(request.tag_keys, keys);
}
