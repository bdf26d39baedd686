use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use fsh_core::ports::UploadSource;
use fsh_core::ReadError;
use tokio::io::AsyncReadExt;

/// A file on disk offered for upload.
///
/// Metadata is captured at `open`; contents are read on demand.
#[derive(Debug, Clone)]
pub struct FsUploadFile {
    path: PathBuf,
    file_name: String,
    size: u64,
    content_type: Option<String>,
}

impl FsUploadFile {
    pub async fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let meta = tokio::fs::metadata(&path).await?;
        if !meta.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a regular file", path.display()),
            ));
        }
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self {
            path,
            file_name,
            size: meta.len(),
            content_type: None,
        })
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl UploadSource for FsUploadFile {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    async fn read_prefix(&self, len: usize) -> Result<Vec<u8>, ReadError> {
        let file = tokio::fs::File::open(&self.path)
            .await
            .map_err(|e| ReadError::new(&self.file_name, e))?;
        let mut head = Vec::with_capacity(len);
        file.take(len as u64)
            .read_to_end(&mut head)
            .await
            .map_err(|e| ReadError::new(&self.file_name, e))?;
        Ok(head)
    }

    async fn read_all(&self) -> Result<Bytes, ReadError> {
        tokio::fs::read(&self.path)
            .await
            .map(Bytes::from)
            .map_err(|e| ReadError::new(&self.file_name, e))
    }
}
