use super::FontRecord;

/// Case-insensitive substring filter over file name and tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    needle: String,
}

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            needle: raw.trim().to_lowercase(),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// An empty query matches every record.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, record: &FontRecord) -> bool {
        if self.is_empty() {
            return true;
        }
        record.file_name.to_lowercase().contains(&self.needle)
            || record.tag_str().to_lowercase().contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{FontBlob, MimeType, UserTag};

    fn record(name: &str, tag: &str) -> FontRecord {
        FontRecord::new(
            name.into(),
            FontBlob::new(vec![0u8, 1, 0, 0], MimeType::from("font/ttf")),
        )
        .with_tag(UserTag::sanitize(tag))
    }

    #[test]
    fn test_matches_name_case_insensitively() {
        let q = SearchQuery::new("FOO");
        assert!(q.matches(&record("foo-Regular.ttf", "")));
        assert!(!q.matches(&record("Bar.ttf", "")));
    }

    #[test]
    fn test_matches_tag() {
        let q = SearchQuery::new("headline");
        assert!(q.matches(&record("Bar.ttf", "Headlines only")));
    }

    #[test]
    fn test_blank_query_matches_all() {
        assert!(SearchQuery::new("   ").matches(&record("x.otf", "")));
        assert_eq!(SearchQuery::new("  ").raw(), "  ");
    }
}
