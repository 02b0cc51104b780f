//! Wire contract of the remote transformer service
//!
//! Request shapes, response shapes, shared wire types and the failure
//! taxonomy. Field names and JSON casing here are the binding contract with
//! the service and are not negotiable by the translation layer.

pub mod error;
pub mod requests;
pub mod responses;
pub mod types;

pub use error::ServiceError;
pub use requests::{
    CreateTransformerRequest, DeleteTransformerRequest, GetTransformerRequest,
    ListTransformersRequest, TagResourceRequest, UntagResourceRequest, UpdateTransformerRequest,
};
pub use responses::{GetTransformerResponse, ListTransformersResponse, TransformerSummary};
