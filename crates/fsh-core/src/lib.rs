//! # fsh-core
//!
//! Core domain models and port interfaces for FontShelf.
//!
//! This crate contains pure business rules (record shape, tag sanitization,
//! signature sniffing, face identifiers, search matching) without any
//! infrastructure dependencies.

pub mod config;
pub mod error;
pub mod font;
pub mod ids;
pub mod limits;
pub mod notification;
pub mod ports;
pub mod upload;

// Re-export commonly used types at the crate root
pub use config::ShelfConfig;
pub use error::{QuotaError, ReadError, ShelfError, StorageError, ValidationError};
pub use font::{
    FontBlob, FontFaceId, FontFormat, FontPayload, FontRecord, MimeType, SearchQuery, UserTag,
};
pub use ids::{FileName, NodeId, RuleId};
pub use notification::{Notification, NotificationLevel};
pub use upload::{UploadPhase, UploadProgress};
