//! Explicit application state shared by the use cases.
//!
//! The mutex is only ever held for synchronous work (registry updates and
//! render passes), never across an `.await`.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::deps::ShelfDeps;
use crate::font_faces::FontFaceCache;
use crate::registry::FontRegistry;
use crate::renderer::{ListRenderer, RenderContext, RenderRequest, RenderStats};

#[derive(Debug)]
pub struct ShelfState {
    pub registry: FontRegistry,
    pub faces: FontFaceCache,
    pub renderer: ListRenderer,
    preview_text: String,
    default_preview_text: String,
}

pub type SharedState = Arc<Mutex<ShelfState>>;

impl ShelfState {
    pub fn new(default_preview_text: impl Into<String>) -> Self {
        let default_preview_text = default_preview_text.into();
        Self {
            registry: FontRegistry::new(),
            faces: FontFaceCache::new(),
            renderer: ListRenderer::new(),
            preview_text: default_preview_text.clone(),
            default_preview_text,
        }
    }

    pub fn shared(self) -> SharedState {
        Arc::new(Mutex::new(self))
    }

    pub fn preview_text(&self) -> &str {
        &self.preview_text
    }

    /// Stores the preview text; blank input restores the default.
    pub fn set_preview_text(&mut self, text: &str) -> &str {
        self.preview_text = if text.trim().is_empty() {
            self.default_preview_text.clone()
        } else {
            text.to_string()
        };
        &self.preview_text
    }

    /// Reconciles the gallery with the current filtered view.
    pub fn rerender(&mut self, deps: &ShelfDeps) -> RenderStats {
        let ctx = RenderContext {
            view: deps.view.as_ref(),
            urls: deps.object_urls.as_ref(),
            sheet: deps.style_sheet.as_ref(),
        };
        let request = RenderRequest {
            records: self.registry.filtered(),
            preview_text: &self.preview_text,
            library_is_empty: self.registry.is_empty(),
        };
        self.renderer.render(&request, &mut self.faces, &ctx)
    }
}

/// Locks the state, recovering the guard from a poisoned lock.
pub fn lock(state: &SharedState) -> MutexGuard<'_, ShelfState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
