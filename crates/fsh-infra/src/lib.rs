pub mod notify;
pub mod store;
pub mod time;
pub mod upload;
pub mod view;
pub mod web;

pub use notify::{TracingNotifier, TracingProgress};
pub use store::{DirQuotaEstimator, FsFontStore, InMemoryFontStore, StaticQuota};
pub use time::{SystemClock, TokioFrameYield};
pub use upload::{FsUploadFile, MemoryUploadFile};
pub use view::{GalleryItem, RetainedDocument};
pub use web::{InMemoryObjectUrls, InMemoryStyleSheet};
