//! Persistent store port
//!
//! One collection named `fonts`, primary key = file name, fields
//! `fileName`, `data` (binary + content type) and `userTag`.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::font::FontRecord;
use crate::ids::FileName;

/// Key-value store owning the canonical font records.
///
/// Every operation either commits fully or fails with a [`StorageError`];
/// callers mutate their in-memory copy only after a call has resolved.
#[async_trait]
pub trait FontStorePort: Send + Sync {
    /// All records, ordered by primary key.
    async fn get_all(&self) -> Result<Vec<FontRecord>, StorageError>;

    async fn get(&self, file_name: &FileName) -> Result<Option<FontRecord>, StorageError>;

    /// Insert, or replace the record stored under the same file name.
    async fn put(&self, record: &FontRecord) -> Result<(), StorageError>;

    /// Deleting a key that is not stored succeeds.
    async fn delete(&self, file_name: &FileName) -> Result<(), StorageError>;

    async fn clear(&self) -> Result<(), StorageError>;
}
