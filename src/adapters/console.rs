use fsh_core::ports::NotifierPort;
use fsh_core::{Notification, NotificationLevel};
use fsh_infra::TracingNotifier;

/// Prints notifications to stderr and forwards them to the log.
#[derive(Debug, Default)]
pub struct ConsoleNotifier {
    log: TracingNotifier,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self::default()
    }
}

pub(crate) fn render(notification: &Notification) -> String {
    let marker = match notification.level {
        NotificationLevel::Info => "·",
        NotificationLevel::Success => "✓",
        NotificationLevel::Warning => "!",
        NotificationLevel::Error => "✗",
    };
    format!("{marker} {}", notification.message)
}

impl NotifierPort for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!("{}", render(&notification));
        self.log.notify(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prefixes_level_marker() {
        assert_eq!(render(&Notification::success("Added 1 font")), "✓ Added 1 font");
        assert_eq!(render(&Notification::error("Nope")), "✗ Nope");
    }
}
