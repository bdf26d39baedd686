use fsh_core::{Notification, ShelfError};
use tracing::{debug, info, warn};

use crate::busy::BusyFlag;
use crate::deps::ShelfDeps;
use crate::state::{lock, SharedState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// An upload batch or another clear was running.
    Skipped,
    Declined,
    Cleared { removed: usize },
}

/// Use case for removing every font from the library.
pub struct ClearLibrary {
    deps: ShelfDeps,
    state: SharedState,
    busy: BusyFlag,
}

impl ClearLibrary {
    pub fn new(deps: ShelfDeps, state: SharedState, busy: BusyFlag) -> Self {
        Self { deps, state, busy }
    }

    #[tracing::instrument(name = "usecase.clear_library.execute", skip(self))]
    pub async fn execute(&self) -> Result<ClearOutcome, ShelfError> {
        let Some(_guard) = self.busy.try_acquire() else {
            debug!("busy, clear ignored");
            return Ok(ClearOutcome::Skipped);
        };

        let count = lock(&self.state).registry.len();
        let prompt = format!("Remove all {count} fonts from your library? This cannot be undone.");
        if !self.deps.confirm.confirm(&prompt).await {
            return Ok(ClearOutcome::Declined);
        }

        if let Err(err) = self.deps.store.clear().await {
            warn!(error = %err, "failed to clear font store");
            self.deps
                .notifier
                .notify(Notification::error(format!("Could not clear library: {err}")));
            return Err(err.into());
        }

        let mut state = lock(&self.state);
        state.faces.release_all(
            self.deps.object_urls.as_ref(),
            self.deps.style_sheet.as_ref(),
        );
        state.registry.clear();
        state.rerender(&self.deps);
        drop(state);

        info!(removed = count, "font library cleared");
        self.deps
            .notifier
            .notify(Notification::success("Library cleared"));
        Ok(ClearOutcome::Cleared { removed: count })
    }
}
