//! Builds a [`FontShelf`] over the on-disk store and in-process adapters.

use std::sync::Arc;

use fsh_app::{FontShelf, ShelfDeps};
use fsh_core::ports::ConfirmPort;
use fsh_core::ShelfConfig;
use fsh_infra::{
    DirQuotaEstimator, FsFontStore, InMemoryObjectUrls, InMemoryStyleSheet, RetainedDocument,
    SystemClock, TokioFrameYield, TracingProgress,
};

use crate::adapters::ConsoleNotifier;

/// A wired shelf plus the view it renders into.
pub struct ShelfRuntime {
    pub shelf: FontShelf,
    pub view: Arc<RetainedDocument>,
}

pub fn build_shelf(config: &ShelfConfig, confirm: Arc<dyn ConfirmPort>) -> ShelfRuntime {
    let view = Arc::new(RetainedDocument::new());

    let deps = ShelfDeps {
        store: Arc::new(FsFontStore::new(&config.data_dir)),
        quota: Arc::new(DirQuotaEstimator::new(&config.data_dir, config.quota_bytes)),
        view: view.clone(),
        object_urls: Arc::new(InMemoryObjectUrls::new()),
        style_sheet: Arc::new(InMemoryStyleSheet::new()),
        notifier: Arc::new(ConsoleNotifier::new()),
        progress: Arc::new(TracingProgress),
        confirm,
        frame: Arc::new(TokioFrameYield),
        clock: Arc::new(SystemClock),
    };

    tracing::debug!(data_dir = %config.data_dir.display(), "font shelf wired");

    ShelfRuntime {
        shelf: FontShelf::new(
            deps,
            config.effective_preview_text(),
            config.effective_preview_font_size_px(),
        ),
        view,
    }
}
