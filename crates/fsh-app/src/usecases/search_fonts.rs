use crate::deps::ShelfDeps;
use crate::renderer::RenderStats;
use crate::state::{lock, SharedState};

/// Search-as-you-type: refilter and reconcile the gallery.
pub struct SearchFonts {
    deps: ShelfDeps,
    state: SharedState,
}

impl SearchFonts {
    pub fn new(deps: ShelfDeps, state: SharedState) -> Self {
        Self { deps, state }
    }

    #[tracing::instrument(name = "usecase.search_fonts.execute", skip(self))]
    pub fn execute(&self, query: &str) -> RenderStats {
        let mut state = lock(&self.state);
        state.registry.filter(query);
        state.rerender(&self.deps)
    }
}
