use crate::upload::{UploadPhase, UploadProgress};

/// Receives upload batch progress, in processing order.
pub trait UploadProgressPort: Send + Sync {
    fn phase_changed(&self, phase: UploadPhase);

    /// Called once per file, whatever the file's outcome.
    fn progress(&self, progress: UploadProgress);
}
