use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use fsh_core::ports::FontStorePort;
use fsh_core::{FileName, FontRecord, StorageError};
use tokio::sync::RwLock;

/// Volatile store keyed by file name.
///
/// Can be switched unavailable, or made to abort writes for given names,
/// to exercise the failure paths of callers.
#[derive(Default)]
pub struct InMemoryFontStore {
    records: RwLock<BTreeMap<FileName, FontRecord>>,
    unavailable: AtomicBool,
    failing_puts: Mutex<HashSet<FileName>>,
}

impl InMemoryFontStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = FontRecord>) -> Self {
        let map = records
            .into_iter()
            .map(|r| (r.file_name.clone(), r))
            .collect();
        Self {
            records: RwLock::new(map),
            ..Self::default()
        }
    }

    pub fn set_available(&self, available: bool) {
        self.unavailable.store(!available, Ordering::SeqCst);
    }

    /// Makes every later `put` of `file_name` abort.
    pub fn fail_puts_for(&self, file_name: impl Into<FileName>) {
        if let Ok(mut failing) = self.failing_puts.lock() {
            failing.insert(file_name.into());
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    fn check_available(&self) -> Result<(), StorageError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(
                "in-memory store switched off".to_string(),
            ));
        }
        Ok(())
    }

    fn put_should_fail(&self, file_name: &FileName) -> bool {
        self.failing_puts
            .lock()
            .map(|failing| failing.contains(file_name))
            .unwrap_or(false)
    }
}

#[async_trait]
impl FontStorePort for InMemoryFontStore {
    async fn get_all(&self) -> Result<Vec<FontRecord>, StorageError> {
        self.check_available()?;
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn get(&self, file_name: &FileName) -> Result<Option<FontRecord>, StorageError> {
        self.check_available()?;
        Ok(self.records.read().await.get(file_name).cloned())
    }

    async fn put(&self, record: &FontRecord) -> Result<(), StorageError> {
        self.check_available()?;
        if self.put_should_fail(&record.file_name) {
            return Err(StorageError::Aborted(format!(
                "write of {} aborted",
                record.file_name
            )));
        }
        self.records
            .write()
            .await
            .insert(record.file_name.clone(), record.clone());
        Ok(())
    }

    async fn delete(&self, file_name: &FileName) -> Result<(), StorageError> {
        self.check_available()?;
        self.records.write().await.remove(file_name);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.check_available()?;
        self.records.write().await.clear();
        Ok(())
    }
}
