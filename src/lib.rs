//! Translation layer for the transformer resource provider
//!
//! Bridges the declarative resource model the provider framework works with
//! and the request/response shapes of the remote transformer service:
//! - Request builders for the create/read/update/delete/list lifecycle and
//!   for tagging operations
//! - Response parsers producing fresh resource models, with inbound
//!   empty-string normalization
//! - A bidirectional conversion for the service's EDI typing union
//! - A total classifier from service failures to framework error kinds
//!
//! Everything here is pure and synchronous: no I/O, no shared state, no
//! retries. The transport that issues the built requests and the framework
//! that sequences the calls live outside this crate.

pub mod error;
pub mod models;
pub mod service;
pub mod translate;

// Re-export commonly used types
pub use error::{HandlerError, HandlerErrorKind, classify};
pub use models::{EdiType, Tag, TransformerModel, X12Details};
pub use service::ServiceError;
pub use translate::{
    from_list_response, from_read_response, to_create_request, to_delete_request, to_list_request,
    to_read_request, to_tag_request, to_untag_request, to_update_request,
};
