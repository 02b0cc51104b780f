//! Failure taxonomy of the transformer service
//!
//! The service publishes seven named failure kinds; everything else the
//! transport can surface (timeouts, serialization failures, unknown service
//! errors) arrives as `Unhandled`. Classification into the provider
//! framework's error kinds lives in `crate::error`.

use thiserror::Error;

/// Error raised by the transformer service or its transport.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ServiceError {
    #[error("access denied: {0}")]
    AccessDenied(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("internal server error: {0}")]
    InternalServer(String),
    #[error("resource not found: {0}")]
    ResourceNotFound(String),
    #[error("service quota exceeded: {0}")]
    ServiceQuotaExceeded(String),
    #[error("throttling: {0}")]
    Throttling(String),
    #[error("validation failure: {0}")]
    Validation(String),
    /// Catch-all for any failure outside the named taxonomy.
    #[error("{0}")]
    Unhandled(String),
}
