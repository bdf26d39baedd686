//! Notification and progress sinks that write to the tracing pipeline.

use fsh_core::ports::{NotifierPort, UploadProgressPort};
use fsh_core::{Notification, NotificationLevel, UploadPhase, UploadProgress};
use tracing::{debug, error, info, warn};

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl NotifierPort for TracingNotifier {
    fn notify(&self, notification: Notification) {
        let message = notification.message.as_str();
        match notification.level {
            NotificationLevel::Info => info!(target: "fontshelf::notify", "{message}"),
            NotificationLevel::Success => info!(target: "fontshelf::notify", success = true, "{message}"),
            NotificationLevel::Warning => warn!(target: "fontshelf::notify", "{message}"),
            NotificationLevel::Error => error!(target: "fontshelf::notify", "{message}"),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingProgress;

impl UploadProgressPort for TracingProgress {
    fn phase_changed(&self, phase: UploadPhase) {
        debug!(?phase, "upload phase");
    }

    fn progress(&self, progress: UploadProgress) {
        info!(
            completed = progress.completed,
            total = progress.total,
            percent = (progress.fraction() * 100.0).round() as u32,
            "upload progress"
        );
    }
}
