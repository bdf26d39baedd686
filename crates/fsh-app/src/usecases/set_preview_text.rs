use crate::deps::ShelfDeps;
use crate::state::{lock, SharedState};

/// Live preview-text editing. Updates existing previews in place.
pub struct SetPreviewText {
    deps: ShelfDeps,
    state: SharedState,
}

impl SetPreviewText {
    pub fn new(deps: ShelfDeps, state: SharedState) -> Self {
        Self { deps, state }
    }

    /// Returns the text now in effect (blank input restores the default).
    pub fn execute(&self, text: &str) -> String {
        let mut state = lock(&self.state);
        let effective = state.set_preview_text(text).to_string();
        state
            .renderer
            .set_preview_text(&effective, self.deps.view.as_ref());
        effective
    }
}
