mod face_id;
mod format;
mod mime;
mod query;
mod record;
mod tag;

pub use face_id::FontFaceId;
pub use format::FontFormat;
pub use mime::MimeType;
pub use query::SearchQuery;
pub use record::{FontBlob, FontPayload, FontRecord};
pub use tag::UserTag;
