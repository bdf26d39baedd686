//! `@font-face` injection cache.
//!
//! At most one rule is active per [`FontFaceId`]. Records deriving the same
//! id share the face registered by the first of them; the face is torn down
//! (URL revoked, rule removed) once its last holder is released.

use std::collections::{BTreeSet, HashMap};

use fsh_core::ports::{ObjectUrlPort, StyleSheetPort};
use fsh_core::{FileName, FontFaceId, FontFormat, FontPayload, FontRecord, RuleId};
use tracing::debug;

#[derive(Debug)]
struct InjectedFace {
    /// Object URL owned by this face; `None` for URL payloads.
    object_url: Option<String>,
    rule: RuleId,
    holders: BTreeSet<FileName>,
}

#[derive(Debug, Default)]
pub struct FontFaceCache {
    faces: HashMap<FontFaceId, InjectedFace>,
    owners: HashMap<FileName, FontFaceId>,
}

impl FontFaceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes sure `record`'s face is injected and returns its family name.
    ///
    /// Returns `None` when the payload can back no face.
    pub fn register(
        &mut self,
        record: &FontRecord,
        urls: &dyn ObjectUrlPort,
        sheet: &dyn StyleSheetPort,
    ) -> Option<FontFaceId> {
        let id = record.face_id()?;

        // A file name re-registering under a new key drops its old face first.
        let stale = self
            .owners
            .get(&record.file_name)
            .is_some_and(|previous| previous != &id);
        if stale {
            self.release(&record.file_name, urls, sheet);
        }

        if let Some(face) = self.faces.get_mut(&id) {
            face.holders.insert(record.file_name.clone());
            self.owners.insert(record.file_name.clone(), id.clone());
            return Some(id);
        }

        let (object_url, src) = match &record.data {
            FontPayload::Blob(blob) => {
                let url = urls.create_object_url(blob);
                let src = font_src(&url, blob.format());
                (Some(url), src)
            }
            FontPayload::Url(href) => {
                let format = record
                    .file_name
                    .extension()
                    .and_then(|ext| FontFormat::from_extension(&ext));
                (None, font_src(href, format))
            }
            FontPayload::Unsupported => return None,
        };

        let rule = sheet.insert_rule(&format!(
            "@font-face {{ font-family: \"{}\"; src: {}; font-display: swap; }}",
            id, src
        ));
        debug!(face_id = %id, file_name = %record.file_name, "font face injected");

        self.faces.insert(
            id.clone(),
            InjectedFace {
                object_url,
                rule,
                holders: BTreeSet::from([record.file_name.clone()]),
            },
        );
        self.owners.insert(record.file_name.clone(), id.clone());
        Some(id)
    }

    /// Drops `file_name`'s hold on its face. Returns `true` if the face was torn down.
    pub fn release(
        &mut self,
        file_name: &FileName,
        urls: &dyn ObjectUrlPort,
        sheet: &dyn StyleSheetPort,
    ) -> bool {
        let Some(id) = self.owners.remove(file_name) else {
            return false;
        };
        let Some(face) = self.faces.get_mut(&id) else {
            return false;
        };
        face.holders.remove(file_name);
        if !face.holders.is_empty() {
            return false;
        }

        if let Some(face) = self.faces.remove(&id) {
            teardown(&id, face, urls, sheet);
        }
        true
    }

    pub fn release_all(&mut self, urls: &dyn ObjectUrlPort, sheet: &dyn StyleSheetPort) {
        for (id, face) in self.faces.drain() {
            teardown(&id, face, urls, sheet);
        }
        self.owners.clear();
    }

    pub fn face_of(&self, file_name: &FileName) -> Option<&FontFaceId> {
        self.owners.get(file_name)
    }

    pub fn contains(&self, id: &FontFaceId) -> bool {
        self.faces.contains_key(id)
    }

    /// Number of active `@font-face` rules.
    pub fn active_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of live object URLs owned by the cache.
    pub fn object_url_count(&self) -> usize {
        self.faces
            .values()
            .filter(|f| f.object_url.is_some())
            .count()
    }
}

fn teardown(id: &FontFaceId, face: InjectedFace, urls: &dyn ObjectUrlPort, sheet: &dyn StyleSheetPort) {
    if let Some(url) = &face.object_url {
        urls.revoke_object_url(url);
    }
    sheet.remove_rule(face.rule);
    debug!(face_id = %id, "font face released");
}

/// CSS `src` descriptor value for `url`, with a `format()` hint when known.
pub(crate) fn font_src(url: &str, format: Option<FontFormat>) -> String {
    let url = css_string(url);
    match format {
        Some(format) => format!("url(\"{}\") format(\"{}\")", url, format.css_format()),
        None => format!("url(\"{}\")", url),
    }
}

/// Escapes a value for use inside a double-quoted CSS string.
pub(crate) fn css_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' | '\r' => out.push(' '),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsh_core::{FontBlob, MimeType};
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeUrls {
        next: Mutex<u64>,
        live: Mutex<Vec<String>>,
    }

    impl ObjectUrlPort for FakeUrls {
        fn create_object_url(&self, _blob: &FontBlob) -> String {
            let mut next = self.next.lock().unwrap();
            *next += 1;
            let url = format!("blob:test/{}", next);
            self.live.lock().unwrap().push(url.clone());
            url
        }

        fn revoke_object_url(&self, url: &str) {
            self.live.lock().unwrap().retain(|u| u != url);
        }
    }

    #[derive(Default)]
    struct FakeSheet {
        next: Mutex<u64>,
        rules: Mutex<Vec<(RuleId, String)>>,
    }

    impl StyleSheetPort for FakeSheet {
        fn insert_rule(&self, css: &str) -> RuleId {
            let mut next = self.next.lock().unwrap();
            *next += 1;
            let id = RuleId(*next);
            self.rules.lock().unwrap().push((id, css.to_string()));
            id
        }

        fn remove_rule(&self, rule: RuleId) {
            self.rules.lock().unwrap().retain(|(id, _)| *id != rule);
        }
    }

    fn ttf(name: &str, len: usize) -> FontRecord {
        let mut bytes = vec![0u8, 1, 0, 0];
        bytes.resize(len, 0);
        FontRecord::new(name.into(), FontBlob::new(bytes, MimeType::from("font/ttf")))
    }

    #[test]
    fn test_register_injects_once_per_id() {
        let (urls, sheet) = (FakeUrls::default(), FakeSheet::default());
        let mut cache = FontFaceCache::new();
        let record = ttf("Foo.ttf", 1024);

        let first = cache.register(&record, &urls, &sheet).unwrap();
        let second = cache.register(&record, &urls, &sheet).unwrap();

        assert_eq!(first, second);
        assert_eq!(sheet.rules.lock().unwrap().len(), 1);
        assert_eq!(urls.live.lock().unwrap().len(), 1);
        let rules = sheet.rules.lock().unwrap();
        assert!(rules[0].1.contains(first.as_str()));
        assert!(rules[0].1.contains("format(\"truetype\")"));
    }

    #[test]
    fn test_unsupported_payload_yields_none() {
        let (urls, sheet) = (FakeUrls::default(), FakeSheet::default());
        let mut cache = FontFaceCache::new();
        let record = FontRecord {
            file_name: "weird.ttf".into(),
            data: FontPayload::Unsupported,
            user_tag: None,
        };

        assert!(cache.register(&record, &urls, &sheet).is_none());
        assert_eq!(cache.active_count(), 0);
    }

    #[test]
    fn test_url_payload_uses_href_without_object_url() {
        let (urls, sheet) = (FakeUrls::default(), FakeSheet::default());
        let mut cache = FontFaceCache::new();
        let record = FontRecord {
            file_name: "remote.woff2".into(),
            data: FontPayload::Url("https://cdn.test/a\"b.woff2".into()),
            user_tag: None,
        };

        assert!(cache.register(&record, &urls, &sheet).is_some());
        assert_eq!(cache.object_url_count(), 0);
        let rules = sheet.rules.lock().unwrap();
        assert!(rules[0].1.contains("url(\"https://cdn.test/a\\\"b.woff2\") format(\"woff2\")"));
    }

    #[test]
    fn test_release_revokes_url_and_rule() {
        let (urls, sheet) = (FakeUrls::default(), FakeSheet::default());
        let mut cache = FontFaceCache::new();
        cache.register(&ttf("Foo.ttf", 64), &urls, &sheet);
        cache.register(&ttf("Bar.ttf", 64), &urls, &sheet);

        assert!(cache.release(&"Foo.ttf".into(), &urls, &sheet));

        assert_eq!(cache.active_count(), 1);
        assert_eq!(urls.live.lock().unwrap().len(), 1);
        assert_eq!(sheet.rules.lock().unwrap().len(), 1);
        assert!(!cache.release(&"Foo.ttf".into(), &urls, &sheet));
    }

    #[test]
    fn test_reregister_with_new_key_replaces_stale_face() {
        let (urls, sheet) = (FakeUrls::default(), FakeSheet::default());
        let mut cache = FontFaceCache::new();
        let old = cache.register(&ttf("Foo.ttf", 64), &urls, &sheet).unwrap();

        let new = cache.register(&ttf("Foo.ttf", 128), &urls, &sheet).unwrap();

        assert_ne!(old, new);
        assert!(!cache.contains(&old));
        assert_eq!(cache.active_count(), 1);
        assert_eq!(urls.live.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_release_all_leaves_nothing_live() {
        let (urls, sheet) = (FakeUrls::default(), FakeSheet::default());
        let mut cache = FontFaceCache::new();
        for name in ["a.ttf", "b.ttf", "c.ttf"] {
            cache.register(&ttf(name, 16), &urls, &sheet);
        }

        cache.release_all(&urls, &sheet);

        assert_eq!(cache.active_count(), 0);
        assert!(urls.live.lock().unwrap().is_empty());
        assert!(sheet.rules.lock().unwrap().is_empty());
        assert!(cache.face_of(&"a.ttf".into()).is_none());
    }
}
