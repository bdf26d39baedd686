use async_trait::async_trait;
use bytes::Bytes;
use fsh_core::ports::UploadSource;
use fsh_core::ReadError;

/// Upload source over bytes already in memory.
#[derive(Debug, Clone)]
pub struct MemoryUploadFile {
    file_name: String,
    bytes: Bytes,
    content_type: Option<String>,
    declared_size: Option<u64>,
    unreadable: bool,
}

impl MemoryUploadFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
            content_type: None,
            declared_size: None,
            unreadable: false,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Reports `size` instead of the byte length, like a picker entry
    /// whose contents have not been loaded.
    pub fn with_declared_size(mut self, size: u64) -> Self {
        self.declared_size = Some(size);
        self
    }

    /// Every read fails.
    pub fn unreadable(mut self) -> Self {
        self.unreadable = true;
        self
    }

    fn check_readable(&self) -> Result<(), ReadError> {
        if self.unreadable {
            return Err(ReadError::new(&self.file_name, "file could not be read"));
        }
        Ok(())
    }
}

#[async_trait]
impl UploadSource for MemoryUploadFile {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn size(&self) -> u64 {
        self.declared_size.unwrap_or(self.bytes.len() as u64)
    }

    fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    async fn read_prefix(&self, len: usize) -> Result<Vec<u8>, ReadError> {
        self.check_readable()?;
        let end = len.min(self.bytes.len());
        Ok(self.bytes[..end].to_vec())
    }

    async fn read_all(&self) -> Result<Bytes, ReadError> {
        self.check_readable()?;
        Ok(self.bytes.clone())
    }
}
