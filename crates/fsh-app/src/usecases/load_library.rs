use fsh_core::{Notification, ShelfError};
use tracing::{info, warn};

use crate::deps::ShelfDeps;
use crate::state::{lock, SharedState};

/// Use case for (re)loading the registry from the record store.
pub struct LoadLibrary {
    deps: ShelfDeps,
    state: SharedState,
}

impl LoadLibrary {
    pub fn new(deps: ShelfDeps, state: SharedState) -> Self {
        Self { deps, state }
    }

    /// Replaces the registry with the store's contents and re-renders.
    ///
    /// On failure the registry and the view are left as they were.
    #[tracing::instrument(name = "usecase.load_library.execute", skip(self))]
    pub async fn execute(&self) -> Result<usize, ShelfError> {
        let records = match self.deps.store.get_all().await {
            Ok(records) => records,
            Err(err) => {
                warn!(error = %err, "failed to load font library");
                self.deps
                    .notifier
                    .notify(Notification::error(format!("Could not load fonts: {err}")));
                return Err(err.into());
            }
        };

        let count = records.len();
        let mut state = lock(&self.state);
        state.registry.replace_all(records);
        state.rerender(&self.deps);

        info!(count, "font library loaded");
        Ok(count)
    }
}
