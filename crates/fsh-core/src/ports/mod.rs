//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the platform that
//! hosts them: the record store, the document tree, object URLs, the style
//! sheet, notifications and scheduling. Adapters live in `fsh-infra` (or in
//! the binary for interactive concerns such as confirmation prompts).

pub mod clock;
pub mod confirm;
pub mod font_store;
pub mod frame;
pub mod notifier;
pub mod object_url;
pub mod progress;
pub mod quota;
pub mod style_sheet;
pub mod upload_source;
pub mod view;

pub use clock::ClockPort;
pub use confirm::ConfirmPort;
pub use font_store::FontStorePort;
pub use frame::FrameYieldPort;
pub use notifier::NotifierPort;
pub use object_url::ObjectUrlPort;
pub use progress::UploadProgressPort;
pub use quota::{QuotaEstimate, StorageQuotaPort};
pub use style_sheet::StyleSheetPort;
pub use upload_source::UploadSource;
pub use view::{NodeKind, ViewPort};
