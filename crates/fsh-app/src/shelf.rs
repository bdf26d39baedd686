//! Application facade: one entry point per user-facing operation.

use fsh_core::ports::UploadSource;
use fsh_core::{FileName, FontRecord, ShelfError, UserTag};

use crate::busy::BusyFlag;
use crate::deps::ShelfDeps;
use crate::renderer::RenderStats;
use crate::state::{lock, SharedState, ShelfState};
use crate::usecases::{
    ClearLibrary, ClearOutcome, DeleteFont, ExportPrint, LoadLibrary, PrintDocument, SearchFonts,
    SetPreviewText, UpdateTag, UploadFonts, UploadOutcome,
};

pub struct FontShelf {
    deps: ShelfDeps,
    state: SharedState,
    busy: BusyFlag,
    preview_font_size_px: u16,
}

impl FontShelf {
    pub fn new(deps: ShelfDeps, preview_text: &str, preview_font_size_px: u16) -> Self {
        Self {
            deps,
            state: ShelfState::new(preview_text).shared(),
            busy: BusyFlag::new(),
            preview_font_size_px,
        }
    }

    pub async fn load_library(&self) -> Result<usize, ShelfError> {
        LoadLibrary::new(self.deps.clone(), self.state.clone())
            .execute()
            .await
    }

    pub async fn upload(&self, files: Vec<Box<dyn UploadSource>>) -> UploadOutcome {
        UploadFonts::new(self.deps.clone(), self.state.clone(), self.busy.clone())
            .execute(files)
            .await
    }

    pub fn search(&self, query: &str) -> RenderStats {
        SearchFonts::new(self.deps.clone(), self.state.clone()).execute(query)
    }

    pub fn set_preview_text(&self, text: &str) -> String {
        SetPreviewText::new(self.deps.clone(), self.state.clone()).execute(text)
    }

    pub async fn update_tag(
        &self,
        file_name: &FileName,
        raw_tag: &str,
    ) -> Result<Option<UserTag>, ShelfError> {
        UpdateTag::new(self.deps.clone(), self.state.clone())
            .execute(file_name, raw_tag)
            .await
    }

    pub async fn delete_font(&self, file_name: &FileName) -> Result<bool, ShelfError> {
        DeleteFont::new(self.deps.clone(), self.state.clone())
            .execute(file_name)
            .await
    }

    pub async fn clear_library(&self) -> Result<ClearOutcome, ShelfError> {
        ClearLibrary::new(self.deps.clone(), self.state.clone(), self.busy.clone())
            .execute()
            .await
    }

    pub fn export_print(&self) -> PrintDocument {
        ExportPrint::new(
            self.deps.clone(),
            self.state.clone(),
            self.preview_font_size_px,
        )
        .execute()
    }

    pub fn fonts(&self) -> Vec<FontRecord> {
        lock(&self.state).registry.fonts().to_vec()
    }

    pub fn filtered(&self) -> Vec<FontRecord> {
        lock(&self.state).registry.filtered().to_vec()
    }

    pub fn preview_text(&self) -> String {
        lock(&self.state).preview_text().to_string()
    }

    /// Number of active `@font-face` rules.
    pub fn active_face_count(&self) -> usize {
        lock(&self.state).faces.active_count()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    pub fn busy_flag(&self) -> &BusyFlag {
        &self.busy
    }

    pub fn state(&self) -> &SharedState {
        &self.state
    }
}
