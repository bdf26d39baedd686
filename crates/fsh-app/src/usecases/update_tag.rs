use fsh_core::{FileName, Notification, ShelfError, StorageError, UserTag};
use tracing::{debug, warn};

use crate::deps::ShelfDeps;
use crate::state::{lock, SharedState};

/// Use case for editing a card's tag.
pub struct UpdateTag {
    deps: ShelfDeps,
    state: SharedState,
}

impl UpdateTag {
    pub fn new(deps: ShelfDeps, state: SharedState) -> Self {
        Self { deps, state }
    }

    /// Sanitizes `raw_tag`, persists the record, then mirrors it.
    ///
    /// Returns the tag as stored (`None` when the input sanitized to nothing).
    #[tracing::instrument(
        name = "usecase.update_tag.execute",
        skip(self, raw_tag),
        fields(file_name = %file_name)
    )]
    pub async fn execute(
        &self,
        file_name: &FileName,
        raw_tag: &str,
    ) -> Result<Option<UserTag>, ShelfError> {
        let tag = UserTag::sanitize(raw_tag);

        let current = lock(&self.state).registry.get(file_name).cloned();
        let Some(record) = current else {
            let err = StorageError::NotFound(file_name.to_string());
            self.deps
                .notifier
                .notify(Notification::error(format!("Could not save tag: {err}")));
            return Err(err.into());
        };

        if record.user_tag == tag {
            debug!("tag unchanged, nothing to persist");
            return Ok(tag);
        }

        let updated = record.with_tag(tag.clone());
        if let Err(err) = self.deps.store.put(&updated).await {
            warn!(error = %err, "failed to persist tag");
            self.deps
                .notifier
                .notify(Notification::error(format!("Could not save tag: {err}")));
            return Err(err.into());
        }

        let mut state = lock(&self.state);
        state.registry.upsert(updated);
        state.rerender(&self.deps);
        debug!(tag = ?tag, "tag saved");
        Ok(tag)
    }
}
