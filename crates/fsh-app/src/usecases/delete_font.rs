use fsh_core::{FileName, Notification, ShelfError};
use tracing::{info, warn};

use crate::deps::ShelfDeps;
use crate::state::{lock, SharedState};

/// Use case for deleting one font after confirmation.
pub struct DeleteFont {
    deps: ShelfDeps,
    state: SharedState,
}

impl DeleteFont {
    pub fn new(deps: ShelfDeps, state: SharedState) -> Self {
        Self { deps, state }
    }

    /// Deletes the record, then releases its face and its card.
    ///
    /// Deletion order:
    /// 1. Ask for confirmation (declining returns `Ok(false)`).
    /// 2. Delete from the store; on failure nothing else changes.
    /// 3. Revoke the object URL and remove the `@font-face` rule.
    /// 4. Remove from the registry and reconcile the gallery.
    ///
    /// Other cards keep their nodes and relative order.
    #[tracing::instrument(
        name = "usecase.delete_font.execute",
        skip(self),
        fields(file_name = %file_name)
    )]
    pub async fn execute(&self, file_name: &FileName) -> Result<bool, ShelfError> {
        let prompt = format!("Delete \"{file_name}\" from your library?");
        if !self.deps.confirm.confirm(&prompt).await {
            return Ok(false);
        }

        if let Err(err) = self.deps.store.delete(file_name).await {
            warn!(error = %err, "failed to delete font");
            self.deps
                .notifier
                .notify(Notification::error(format!("Could not delete {file_name}: {err}")));
            return Err(err.into());
        }

        let mut state = lock(&self.state);
        state.faces.release(
            file_name,
            self.deps.object_urls.as_ref(),
            self.deps.style_sheet.as_ref(),
        );
        state.registry.remove(file_name);
        state.rerender(&self.deps);
        drop(state);

        info!("font deleted");
        self.deps
            .notifier
            .notify(Notification::info(format!("Deleted {file_name}")));
        Ok(true)
    }
}
