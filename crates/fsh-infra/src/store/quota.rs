use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fsh_core::ports::{QuotaEstimate, StorageQuotaPort};
use tracing::debug;

/// Estimates usage by summing file sizes under the data directory.
///
/// Without a configured quota there is nothing to compare against and the
/// estimate is unavailable.
pub struct DirQuotaEstimator {
    root: PathBuf,
    quota_bytes: Option<u64>,
}

impl DirQuotaEstimator {
    pub fn new(root: impl Into<PathBuf>, quota_bytes: Option<u64>) -> Self {
        Self {
            root: root.into(),
            quota_bytes,
        }
    }
}

async fn dir_usage(root: &Path) -> std::io::Result<u64> {
    let mut total = 0u64;
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(e),
        };
        while let Some(entry) = entries.next_entry().await? {
            let meta = entry.metadata().await?;
            if meta.is_dir() {
                pending.push(entry.path());
            } else {
                total = total.saturating_add(meta.len());
            }
        }
    }
    Ok(total)
}

#[async_trait]
impl StorageQuotaPort for DirQuotaEstimator {
    async fn estimate(&self) -> Option<QuotaEstimate> {
        let quota = self.quota_bytes?;
        match dir_usage(&self.root).await {
            Ok(usage) => Some(QuotaEstimate { usage, quota }),
            Err(e) => {
                debug!(error = %e, root = %self.root.display(), "quota estimate unavailable");
                None
            }
        }
    }
}

/// Fixed estimate, or none at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticQuota(pub Option<QuotaEstimate>);

#[async_trait]
impl StorageQuotaPort for StaticQuota {
    async fn estimate(&self) -> Option<QuotaEstimate> {
        self.0
    }
}
