//! Error taxonomy shared by every layer.
//!
//! None of these is fatal: use cases convert them into a transient
//! [`Notification`](crate::Notification) at the operation boundary and
//! still hand them back to the caller.

use thiserror::Error;

/// The record store is unreachable or a transaction did not commit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("font store unavailable: {0}")]
    Unavailable(String),

    #[error("font store transaction aborted: {0}")]
    Aborted(String),

    #[error("font record not found: {0}")]
    NotFound(String),

    /// Stored data could not be decoded.
    #[error("font record corrupt: {0}")]
    Corrupt(String),
}

/// A file or a batch was refused before anything was written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no supported font files (.ttf, .otf, .woff, .woff2) in selection")]
    NoAcceptedFiles,

    #[error("{file_name}: file is {size} bytes, limit is {limit} bytes")]
    TooLarge {
        file_name: String,
        size: u64,
        limit: u64,
    },

    #[error("{file_name}: not a valid font file (bad signature)")]
    BadSignature {
        file_name: String,
        found: Option<u32>,
    },

    #[error("library holds {current} fonts; adding {incoming} would exceed the limit of {limit}")]
    LimitExceeded {
        current: usize,
        incoming: usize,
        limit: usize,
    },
}

/// Estimated free storage is smaller than the batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not enough storage space: batch needs {required} bytes, {available} bytes available")]
pub struct QuotaError {
    pub required: u64,
    pub available: u64,
}

/// A file's contents could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{file_name}: could not read file: {reason}")]
pub struct ReadError {
    pub file_name: String,
    pub reason: String,
}

impl ReadError {
    pub fn new(file_name: impl Into<String>, reason: impl ToString) -> Self {
        Self {
            file_name: file_name.into(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShelfError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Quota(#[from] QuotaError),

    #[error(transparent)]
    Read(#[from] ReadError),
}
