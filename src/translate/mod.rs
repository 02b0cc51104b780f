//! Conversions between the transformer resource model and the service wire
//! shapes
//!
//! Three groups: request builders (model → wire), response parsers
//! (wire → model) and the EDI union conversion shared by both. All of it is
//! pure and stateless; every call returns a fresh value.

pub mod edi;
pub mod request;
pub mod response;

pub use request::{
    to_create_request, to_delete_request, to_list_request, to_read_request, to_tag_request,
    to_untag_request, to_update_request,
};
pub use response::{from_list_response, from_read_response};

/// Inbound normalization: the service reports absent string values either by
/// omitting the field or by returning an empty string. Both map to `None` on
/// the model. Outbound translation never applies this rule.
pub(crate) fn none_if_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
