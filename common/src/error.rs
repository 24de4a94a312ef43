//! Error types shared by the preview bridge, the analytics source state and
//! the storage layer.

use thiserror::Error;

use crate::model::page::Page;

/// Why an inbound cross-document message was not applied.
///
/// Rejections are expected traffic (other scripts post messages too) and are
/// only ever logged, never surfaced to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    #[error("origin `{actual}` does not match document origin `{expected}`")]
    OriginMismatch { expected: String, actual: String },

    #[error("unexpected message type {0:?}")]
    UnexpectedType(Option<String>),

    #[error("message for vendor {actual:?} ignored by preview of `{expected}`")]
    VendorMismatch {
        expected: String,
        actual: Option<String>,
    },

    #[error("message for page `{actual}` ignored by preview of `{expected}`")]
    PageMismatch { expected: Page, actual: String },

    #[error("malformed preview message: {0}")]
    Malformed(String),
}

/// Durable storage failure. Reads that fail are treated as absent values by
/// callers; writes report this and carry on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("durable storage is not available")]
    Unavailable,

    #[error("durable storage rejected `{key}`: {reason}")]
    Backend { key: String, reason: String },
}

/// A context consumer was mounted outside of its provider.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContextError {
    #[error("{0} must be used within its provider")]
    MissingProvider(&'static str),
}
