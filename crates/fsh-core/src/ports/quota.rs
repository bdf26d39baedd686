use async_trait::async_trait;

/// Best-effort storage estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaEstimate {
    pub usage: u64,
    pub quota: u64,
}

impl QuotaEstimate {
    pub fn available(&self) -> u64 {
        self.quota.saturating_sub(self.usage)
    }
}

#[async_trait]
pub trait StorageQuotaPort: Send + Sync {
    /// `None` when the platform cannot introspect its quota.
    async fn estimate(&self) -> Option<QuotaEstimate>;
}
