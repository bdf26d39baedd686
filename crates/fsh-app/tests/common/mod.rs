//! Shared wiring for the shelf integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use fsh_app::{FontShelf, ShelfDeps};
use fsh_core::ports::{
    ClockPort, ConfirmPort, FrameYieldPort, NotifierPort, QuotaEstimate, UploadProgressPort,
    UploadSource,
};
use fsh_core::{Notification, NotificationLevel, UploadPhase, UploadProgress};
use fsh_infra::{
    InMemoryFontStore, InMemoryObjectUrls, InMemoryStyleSheet, MemoryUploadFile,
    RetainedDocument, StaticQuota,
};

pub const PREVIEW: &str = "Sphinx of black quartz";

pub fn ttf_bytes(extra: &[u8]) -> Vec<u8> {
    let mut bytes = vec![0x00, 0x01, 0x00, 0x00];
    bytes.extend_from_slice(extra);
    bytes
}

pub fn ttf(name: &str) -> Box<dyn UploadSource> {
    Box::new(MemoryUploadFile::new(name, ttf_bytes(name.as_bytes())).with_content_type("font/ttf"))
}

pub fn woff2(name: &str) -> Box<dyn UploadSource> {
    let mut bytes = b"wOF2".to_vec();
    bytes.extend_from_slice(name.as_bytes());
    Box::new(MemoryUploadFile::new(name, bytes))
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notes: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn all(&self) -> Vec<Notification> {
        self.notes.lock().unwrap().clone()
    }

    pub fn count(&self, level: NotificationLevel) -> usize {
        self.all().iter().filter(|n| n.level == level).count()
    }

    pub fn clear(&self) {
        self.notes.lock().unwrap().clear();
    }
}

impl NotifierPort for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notes.lock().unwrap().push(notification);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Phase(UploadPhase),
    Progress(UploadProgress),
}

#[derive(Default)]
pub struct RecordingProgress {
    pub events: Mutex<Vec<ProgressEvent>>,
}

impl RecordingProgress {
    pub fn all(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl UploadProgressPort for RecordingProgress {
    fn phase_changed(&self, phase: UploadPhase) {
        self.events.lock().unwrap().push(ProgressEvent::Phase(phase));
    }

    fn progress(&self, progress: UploadProgress) {
        self.events
            .lock()
            .unwrap()
            .push(ProgressEvent::Progress(progress));
    }
}

/// Answers prompts from a script, defaulting to "yes".
#[derive(Default)]
pub struct ScriptedConfirm {
    pub answers: Mutex<VecDeque<bool>>,
    pub prompts: Mutex<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn answer_next(&self, answer: bool) {
        self.answers.lock().unwrap().push_back(answer);
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConfirmPort for ScriptedConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answers.lock().unwrap().pop_front().unwrap_or(true)
    }
}

#[derive(Default)]
pub struct CountingFrames {
    pub yields: AtomicUsize,
}

#[async_trait]
impl FrameYieldPort for CountingFrames {
    async fn yield_frame(&self) {
        self.yields.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct FixedClock(pub i64);

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

pub struct Harness {
    pub shelf: FontShelf,
    pub store: Arc<InMemoryFontStore>,
    pub view: Arc<RetainedDocument>,
    pub urls: Arc<InMemoryObjectUrls>,
    pub sheet: Arc<InMemoryStyleSheet>,
    pub notifier: Arc<RecordingNotifier>,
    pub progress: Arc<RecordingProgress>,
    pub confirm: Arc<ScriptedConfirm>,
    pub frames: Arc<CountingFrames>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_parts(InMemoryFontStore::new(), StaticQuota(None))
    }

    pub fn with_quota(quota: QuotaEstimate) -> Self {
        Self::with_parts(InMemoryFontStore::new(), StaticQuota(Some(quota)))
    }

    pub fn with_store(store: InMemoryFontStore) -> Self {
        Self::with_parts(store, StaticQuota(None))
    }

    fn with_parts(store: InMemoryFontStore, quota: StaticQuota) -> Self {
        let store = Arc::new(store);
        let view = Arc::new(RetainedDocument::new());
        let urls = Arc::new(InMemoryObjectUrls::new());
        let sheet = Arc::new(InMemoryStyleSheet::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let progress = Arc::new(RecordingProgress::default());
        let confirm = Arc::new(ScriptedConfirm::default());
        let frames = Arc::new(CountingFrames::default());

        let deps = ShelfDeps {
            store: store.clone(),
            quota: Arc::new(quota),
            view: view.clone(),
            object_urls: urls.clone(),
            style_sheet: sheet.clone(),
            notifier: notifier.clone(),
            progress: progress.clone(),
            confirm: confirm.clone(),
            frame: frames.clone(),
            // 2024-03-01 12:00 UTC
            clock: Arc::new(FixedClock(1_709_294_400_000)),
        };

        Self {
            shelf: FontShelf::new(deps, PREVIEW, 40),
            store,
            view,
            urls,
            sheet,
            notifier,
            progress,
            confirm,
            frames,
        }
    }

    pub fn titles(&self) -> Vec<String> {
        self.view.card_titles()
    }
}
