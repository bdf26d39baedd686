use bytes::Bytes;

use super::{FontFaceId, FontFormat, MimeType, UserTag};
use crate::ids::FileName;

/// Binary font contents together with their content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontBlob {
    pub bytes: Bytes,
    pub content_type: MimeType,
}

impl FontBlob {
    pub fn new(bytes: impl Into<Bytes>, content_type: MimeType) -> Self {
        Self {
            bytes: bytes.into(),
            content_type,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Format from the content type, falling back to the leading bytes.
    pub fn format(&self) -> Option<FontFormat> {
        FontFormat::from_mime(&self.content_type).or_else(|| FontFormat::sniff(&self.bytes))
    }
}

/// Payload of a stored record.
///
/// Records written by the upload pipeline always carry a blob. Older
/// stores may hold a plain URL, and anything else decodes as
/// `Unsupported` so the record can still be listed and deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontPayload {
    Blob(FontBlob),
    Url(String),
    Unsupported,
}

/// A stored font file plus its user-assigned tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontRecord {
    pub file_name: FileName,
    pub data: FontPayload,
    pub user_tag: Option<UserTag>,
}

impl FontRecord {
    pub fn new(file_name: FileName, blob: FontBlob) -> Self {
        Self {
            file_name,
            data: FontPayload::Blob(blob),
            user_tag: None,
        }
    }

    pub fn with_tag(mut self, user_tag: Option<UserTag>) -> Self {
        self.user_tag = user_tag;
        self
    }

    /// Identifier under which this record's face is registered, if the
    /// payload can back a face at all.
    pub fn face_id(&self) -> Option<FontFaceId> {
        match &self.data {
            FontPayload::Blob(blob) => Some(FontFaceId::derive(
                &self.file_name,
                blob.size(),
                blob.content_type.as_str(),
            )),
            FontPayload::Url(_) => Some(FontFaceId::derive(
                &self.file_name,
                0,
                MimeType::uri_list().as_str(),
            )),
            FontPayload::Unsupported => None,
        }
    }

    pub fn size(&self) -> u64 {
        match &self.data {
            FontPayload::Blob(blob) => blob.size(),
            _ => 0,
        }
    }

    pub fn tag_str(&self) -> &str {
        self.user_tag.as_ref().map(UserTag::as_str).unwrap_or("")
    }
}
