//! Directory-backed font record store.
//!
//! Layout: `<root>/fonts/<blake3(file name)>/meta.json` plus `data.bin`.
//! The directory name is a fixed-length digest; the real file name lives in
//! `meta.json`, which is written last and marks the record as committed.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use fsh_core::ports::FontStorePort;
use fsh_core::{FileName, FontBlob, FontPayload, FontRecord, MimeType, StorageError, UserTag};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, warn};

const FONTS_DIR: &str = "fonts";
const META_FILE_NAME: &str = "meta.json";
const DATA_FILE_NAME: &str = "data.bin";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredMeta {
    file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_tag: Option<String>,
    data: StoredPayload,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum StoredPayload {
    Blob {
        #[serde(rename = "contentType")]
        content_type: String,
    },
    Url {
        href: String,
    },
    #[serde(other)]
    Unsupported,
}

pub struct FsFontStore {
    root: PathBuf,
}

impl FsFontStore {
    /// Create a store rooted at `root`; records live under `<root>/fonts`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn fonts_dir(&self) -> PathBuf {
        self.root.join(FONTS_DIR)
    }

    fn record_dir(&self, file_name: &FileName) -> PathBuf {
        let digest = blake3::hash(file_name.as_bytes());
        self.fonts_dir().join(digest.to_hex().as_str())
    }

    async fn read_record(&self, dir: &Path) -> Result<FontRecord, StorageError> {
        let meta_bytes = fs::read(dir.join(META_FILE_NAME))
            .await
            .map_err(|e| io_error("read record metadata", e))?;
        let meta: StoredMeta = serde_json::from_slice(&meta_bytes)
            .map_err(|e| StorageError::Corrupt(format!("{}: {e}", dir.display())))?;

        let data = match meta.data {
            StoredPayload::Blob { content_type } => {
                let bytes = fs::read(dir.join(DATA_FILE_NAME))
                    .await
                    .map_err(|e| io_error("read record data", e))?;
                FontPayload::Blob(FontBlob::new(Bytes::from(bytes), MimeType(content_type)))
            }
            StoredPayload::Url { href } => FontPayload::Url(href),
            StoredPayload::Unsupported => FontPayload::Unsupported,
        };

        Ok(FontRecord {
            file_name: FileName::from(meta.file_name),
            data,
            user_tag: meta.user_tag.as_deref().and_then(UserTag::sanitize),
        })
    }
}

async fn is_committed(dir: &Path) -> bool {
    matches!(fs::metadata(dir.join(META_FILE_NAME)).await, Ok(meta) if meta.is_file())
}

/// Writes `content` next to `path` and renames it into place.
async fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, content).await?;
    fs::rename(&tmp_path, path).await
}

fn io_error(context: &str, err: io::Error) -> StorageError {
    match err.kind() {
        io::ErrorKind::PermissionDenied => StorageError::Unavailable(format!("{context}: {err}")),
        _ => StorageError::Aborted(format!("{context}: {err}")),
    }
}

#[async_trait]
impl FontStorePort for FsFontStore {
    async fn get_all(&self) -> Result<Vec<FontRecord>, StorageError> {
        let mut entries = match fs::read_dir(self.fonts_dir()).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error("open font store", e)),
        };

        let mut records = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| io_error("list font store", e))?
        {
            let dir = entry.path();
            if !is_committed(&dir).await {
                // Uncommitted write; ignored until its metadata lands.
                continue;
            }
            match self.read_record(&dir).await {
                Ok(record) => records.push(record),
                Err(StorageError::Corrupt(reason)) => {
                    warn!(%reason, "skipping corrupt font record");
                }
                Err(e) => return Err(e),
            }
        }

        records.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(records)
    }

    async fn get(&self, file_name: &FileName) -> Result<Option<FontRecord>, StorageError> {
        let dir = self.record_dir(file_name);
        if !is_committed(&dir).await {
            return Ok(None);
        }
        self.read_record(&dir).await.map(Some)
    }

    async fn put(&self, record: &FontRecord) -> Result<(), StorageError> {
        let dir = self.record_dir(&record.file_name);
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| io_error("create record dir", e))?;

        let data = match &record.data {
            FontPayload::Blob(blob) => {
                atomic_write(&dir.join(DATA_FILE_NAME), &blob.bytes)
                    .await
                    .map_err(|e| io_error("write record data", e))?;
                StoredPayload::Blob {
                    content_type: blob.content_type.to_string(),
                }
            }
            FontPayload::Url(href) => StoredPayload::Url { href: href.clone() },
            FontPayload::Unsupported => StoredPayload::Unsupported,
        };

        let meta = StoredMeta {
            file_name: record.file_name.to_string(),
            user_tag: record.user_tag.as_ref().map(|t| t.as_str().to_string()),
            data,
        };
        let meta_bytes =
            serde_json::to_vec_pretty(&meta).map_err(|e| StorageError::Aborted(e.to_string()))?;
        atomic_write(&dir.join(META_FILE_NAME), &meta_bytes)
            .await
            .map_err(|e| io_error("write record metadata", e))?;

        debug!(file_name = %record.file_name, "font record stored");
        Ok(())
    }

    async fn delete(&self, file_name: &FileName) -> Result<(), StorageError> {
        match fs::remove_dir_all(self.record_dir(file_name)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error("delete record", e)),
        }
    }

    async fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_dir_all(self.fonts_dir()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error("clear font store", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ttf(name: &str, tag: &str) -> FontRecord {
        FontRecord::new(
            name.into(),
            FontBlob::new(vec![0u8, 1, 0, 0, 42], MimeType::from("font/ttf")),
        )
        .with_tag(UserTag::sanitize(tag))
    }

    #[tokio::test]
    async fn test_put_then_get_all_sorted_by_name() {
        let dir = TempDir::new().unwrap();
        let store = FsFontStore::new(dir.path());

        store.put(&ttf("b.ttf", "")).await.unwrap();
        store.put(&ttf("A.ttf", "caps")).await.unwrap();
        store.put(&ttf("a/../weird name?.ttf", "")).await.unwrap();

        let all = store.get_all().await.unwrap();
        let names: Vec<&str> = all.iter().map(|r| r.file_name.as_str()).collect();
        assert_eq!(names, vec!["A.ttf", "a/../weird name?.ttf", "b.ttf"]);
        assert_eq!(all[0], ttf("A.ttf", "caps"));
    }

    #[tokio::test]
    async fn test_put_replaces_same_key() {
        let dir = TempDir::new().unwrap();
        let store = FsFontStore::new(dir.path());
        store.put(&ttf("Foo.ttf", "old")).await.unwrap();

        store.put(&ttf("Foo.ttf", "new")).await.unwrap();

        let all = store.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].tag_str(), "new");
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let dir = TempDir::new().unwrap();
        let store = FsFontStore::new(dir.path());
        assert_eq!(store.get(&"nope.ttf".into()).await.unwrap(), None);
        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_and_clear() {
        let dir = TempDir::new().unwrap();
        let store = FsFontStore::new(dir.path());
        store.put(&ttf("a.ttf", "")).await.unwrap();
        store.put(&ttf("b.ttf", "")).await.unwrap();

        store.delete(&"a.ttf".into()).await.unwrap();
        store.delete(&"a.ttf".into()).await.unwrap();
        assert_eq!(store.get_all().await.unwrap().len(), 1);

        store.clear().await.unwrap();
        store.clear().await.unwrap();
        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_long_and_multibyte_names_are_stored() {
        let dir = TempDir::new().unwrap();
        let store = FsFontStore::new(dir.path());
        let long_ascii = format!("{}.ttf", "SourceSerifVariable-".repeat(10));
        let cjk = format!("{}.otf", "思源宋体".repeat(12));
        assert!(long_ascii.len() > 128);
        assert!(cjk.len() > 128);

        store.put(&ttf(&long_ascii, "serif")).await.unwrap();
        store.put(&ttf(&cjk, "")).await.unwrap();

        let all = store.get_all().await.unwrap();
        let names: Vec<&str> = all.iter().map(|r| r.file_name.as_str()).collect();
        assert_eq!(names, vec![long_ascii.as_str(), cjk.as_str()]);
        assert_eq!(
            store.get(&long_ascii.as_str().into()).await.unwrap(),
            Some(ttf(&long_ascii, "serif"))
        );
        let dir_name = store.record_dir(&cjk.as_str().into());
        assert_eq!(dir_name.file_name().unwrap().len(), 64);
    }

    #[tokio::test]
    async fn test_uncommitted_record_dir_is_ignored() {
        let dir = TempDir::new().unwrap();
        let store = FsFontStore::new(dir.path());
        let pending = store.record_dir(&"pending.ttf".into());
        std::fs::create_dir_all(&pending).unwrap();
        std::fs::write(pending.join(DATA_FILE_NAME), b"\x00\x01\x00\x00").unwrap();

        assert!(store.get_all().await.unwrap().is_empty());
        assert_eq!(store.get(&"pending.ttf".into()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_url_payload_round_trips_without_data_file() {
        let dir = TempDir::new().unwrap();
        let store = FsFontStore::new(dir.path());
        let record = FontRecord {
            file_name: "remote.woff2".into(),
            data: FontPayload::Url("https://cdn.test/remote.woff2".into()),
            user_tag: None,
        };

        store.put(&record).await.unwrap();

        assert_eq!(store.get(&record.file_name).await.unwrap(), Some(record.clone()));
        assert!(!store.record_dir(&record.file_name).join(DATA_FILE_NAME).exists());
    }

    #[tokio::test]
    async fn test_corrupt_meta_is_skipped_by_get_all() {
        let dir = TempDir::new().unwrap();
        let store = FsFontStore::new(dir.path());
        store.put(&ttf("good.ttf", "")).await.unwrap();
        let bad = store.record_dir(&"bad.ttf".into());
        std::fs::create_dir_all(&bad).unwrap();
        std::fs::write(bad.join(META_FILE_NAME), b"{not json").unwrap();

        let all = store.get_all().await.unwrap();

        assert_eq!(all.len(), 1);
        assert!(matches!(
            store.get(&"bad.ttf".into()).await,
            Err(StorageError::Corrupt(_))
        ));
    }

    #[tokio::test]
    async fn test_unknown_payload_kind_decodes_as_unsupported() {
        let dir = TempDir::new().unwrap();
        let store = FsFontStore::new(dir.path());
        let rec_dir = store.record_dir(&"odd.ttf".into());
        std::fs::create_dir_all(&rec_dir).unwrap();
        std::fs::write(
            rec_dir.join(META_FILE_NAME),
            br#"{"fileName":"odd.ttf","data":{"kind":"array_buffer"}}"#,
        )
        .unwrap();

        let record = store.get(&"odd.ttf".into()).await.unwrap().unwrap();

        assert_eq!(record.data, FontPayload::Unsupported);
        assert_eq!(record.user_tag, None);
    }
}
