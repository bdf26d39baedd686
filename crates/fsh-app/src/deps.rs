//! # Application Dependencies
//!
//! Dependency grouping for [`FontShelf`](crate::FontShelf) construction.
//!
//! **Note**: This is NOT a Builder pattern. No defaults, no hidden logic,
//! just parameter grouping.

use std::sync::Arc;

use fsh_core::ports::*;

#[derive(Clone)]
pub struct ShelfDeps {
    // Storage
    pub store: Arc<dyn FontStorePort>,
    pub quota: Arc<dyn StorageQuotaPort>,

    // Rendering
    pub view: Arc<dyn ViewPort>,
    pub object_urls: Arc<dyn ObjectUrlPort>,
    pub style_sheet: Arc<dyn StyleSheetPort>,

    // User interaction
    pub notifier: Arc<dyn NotifierPort>,
    pub progress: Arc<dyn UploadProgressPort>,
    pub confirm: Arc<dyn ConfirmPort>,

    // System
    pub frame: Arc<dyn FrameYieldPort>,
    pub clock: Arc<dyn ClockPort>,
}
