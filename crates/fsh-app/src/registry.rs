//! In-memory mirror of the record store plus the derived filtered view.

use fsh_core::{FileName, FontRecord, SearchQuery};

/// `fonts` mirrors the store in store order; `filtered` is always the
/// subsequence of `fonts` matching `query`.
#[derive(Debug, Default)]
pub struct FontRegistry {
    fonts: Vec<FontRecord>,
    filtered: Vec<FontRecord>,
    query: SearchQuery,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fonts(&self) -> &[FontRecord] {
        &self.fonts
    }

    pub fn filtered(&self) -> &[FontRecord] {
        &self.filtered
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub fn get(&self, file_name: &FileName) -> Option<&FontRecord> {
        self.fonts.iter().find(|r| &r.file_name == file_name)
    }

    pub fn contains(&self, file_name: &FileName) -> bool {
        self.get(file_name).is_some()
    }

    /// Replaces the whole mirror after a (re)load from the store.
    pub fn replace_all(&mut self, records: Vec<FontRecord>) {
        self.fonts = records;
        self.refilter();
    }

    pub fn filter(&mut self, query: &str) {
        self.query = SearchQuery::new(query);
        self.refilter();
    }

    /// Mirrors a committed `put`: replaces in place, or appends.
    pub fn upsert(&mut self, record: FontRecord) {
        match self
            .fonts
            .iter_mut()
            .find(|r| r.file_name == record.file_name)
        {
            Some(slot) => *slot = record,
            None => self.fonts.push(record),
        }
        self.refilter();
    }

    /// Mirrors a committed `delete`. Returns the removed record.
    pub fn remove(&mut self, file_name: &FileName) -> Option<FontRecord> {
        let index = self.fonts.iter().position(|r| &r.file_name == file_name)?;
        let removed = self.fonts.remove(index);
        self.filtered.retain(|r| &r.file_name != file_name);
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.fonts.clear();
        self.filtered.clear();
    }

    fn refilter(&mut self) {
        self.filtered = self
            .fonts
            .iter()
            .filter(|r| self.query.matches(r))
            .cloned()
            .collect();
    }
}
