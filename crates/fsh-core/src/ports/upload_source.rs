use async_trait::async_trait;
use bytes::Bytes;

use crate::error::ReadError;

/// One user-supplied file in an upload batch.
///
/// Name, size and declared type are known up front (as with a file picker);
/// contents are read lazily so oversize or mis-signed files are rejected
/// without loading them.
#[async_trait]
pub trait UploadSource: Send + Sync {
    fn file_name(&self) -> &str;

    fn size(&self) -> u64;

    /// Declared content type. May be missing or empty.
    fn content_type(&self) -> Option<&str>;

    /// Reads at most `len` leading bytes.
    async fn read_prefix(&self, len: usize) -> Result<Vec<u8>, ReadError>;

    async fn read_all(&self) -> Result<Bytes, ReadError>;
}
