use async_trait::async_trait;

/// Asks the user to confirm a destructive action.
#[async_trait]
pub trait ConfirmPort: Send + Sync {
    /// Returns `true` when the user agreed.
    async fn confirm(&self, prompt: &str) -> bool;
}
