//! Provider-framework error classification
//!
//! The framework invoking this layer understands a closed set of error
//! kinds. `classify` maps every service failure onto exactly one of them by
//! concrete variant, never by message inspection, and falls back to
//! [`HandlerErrorKind::GeneralServiceException`] for anything outside the
//! named taxonomy. Callers therefore never observe a raw transport failure.

use std::fmt;

use thiserror::Error;

use crate::service::ServiceError;

/// The closed set of error kinds the provider framework understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerErrorKind {
    AccessDenied,
    AlreadyExists,
    ServiceInternalError,
    NotFound,
    ServiceLimitExceeded,
    Throttling,
    InvalidRequest,
    GeneralServiceException,
}

impl HandlerErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HandlerErrorKind::AccessDenied => "AccessDenied",
            HandlerErrorKind::AlreadyExists => "AlreadyExists",
            HandlerErrorKind::ServiceInternalError => "ServiceInternalError",
            HandlerErrorKind::NotFound => "NotFound",
            HandlerErrorKind::ServiceLimitExceeded => "ServiceLimitExceeded",
            HandlerErrorKind::Throttling => "Throttling",
            HandlerErrorKind::InvalidRequest => "InvalidRequest",
            HandlerErrorKind::GeneralServiceException => "GeneralServiceException",
        }
    }
}

impl fmt::Display for HandlerErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A service failure reclassified into a framework error kind, carrying the
/// original failure's message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct HandlerError {
    pub kind: HandlerErrorKind,
    pub message: String,
}

/// Classify a service failure by concrete variant.
///
/// Total: every variant of the taxonomy maps to its documented kind, and the
/// `Unhandled` catch-all (carrying anything the taxonomy does not name) maps
/// to `GeneralServiceException`. Never panics, never retries, never logs.
pub fn classify(error: &ServiceError) -> HandlerErrorKind {
    match error {
        ServiceError::AccessDenied(_) => HandlerErrorKind::AccessDenied,
        ServiceError::Conflict(_) => HandlerErrorKind::AlreadyExists,
        ServiceError::InternalServer(_) => HandlerErrorKind::ServiceInternalError,
        ServiceError::ResourceNotFound(_) => HandlerErrorKind::NotFound,
        ServiceError::ServiceQuotaExceeded(_) => HandlerErrorKind::ServiceLimitExceeded,
        ServiceError::Throttling(_) => HandlerErrorKind::Throttling,
        ServiceError::Validation(_) => HandlerErrorKind::InvalidRequest,
        _ => HandlerErrorKind::GeneralServiceException,
    }
}

impl From<ServiceError> for HandlerError {
    fn from(error: ServiceError) -> Self {
        HandlerError {
            kind: classify(&error),
            message: error.to_string(),
        }
    }
}
