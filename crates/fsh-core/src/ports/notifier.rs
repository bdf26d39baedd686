use crate::notification::Notification;

/// Surfaces transient messages to the user.
pub trait NotifierPort: Send + Sync {
    fn notify(&self, notification: Notification);
}
