use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use fsh_core::ports::ObjectUrlPort;
use fsh_core::FontBlob;
use uuid::Uuid;

const URL_PREFIX: &str = "blob:fontshelf/";

/// Process-local object URL table. Each URL pins its blob until revoked.
#[derive(Debug, Default)]
pub struct InMemoryObjectUrls {
    live: Mutex<HashMap<String, FontBlob>>,
}

impl InMemoryObjectUrls {
    pub fn new() -> Self {
        Self::default()
    }

    fn live(&self) -> MutexGuard<'_, HashMap<String, FontBlob>> {
        self.live.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn live_count(&self) -> usize {
        self.live().len()
    }

    pub fn resolve(&self, url: &str) -> Option<FontBlob> {
        self.live().get(url).cloned()
    }
}

impl ObjectUrlPort for InMemoryObjectUrls {
    fn create_object_url(&self, blob: &FontBlob) -> String {
        let url = format!("{URL_PREFIX}{}", Uuid::new_v4());
        self.live().insert(url.clone(), blob.clone());
        url
    }

    fn revoke_object_url(&self, url: &str) {
        self.live().remove(url);
    }
}
