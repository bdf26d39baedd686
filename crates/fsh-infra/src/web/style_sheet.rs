use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use fsh_core::ports::StyleSheetPort;
use fsh_core::RuleId;

#[derive(Debug, Default)]
struct Sheet {
    next_id: u64,
    rules: BTreeMap<RuleId, String>,
}

/// Append-only rule list; removed rules leave no gap in ordering.
#[derive(Debug, Default)]
pub struct InMemoryStyleSheet {
    sheet: Mutex<Sheet>,
}

impl InMemoryStyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    fn sheet(&self) -> MutexGuard<'_, Sheet> {
        self.sheet.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Live rules in insertion order.
    pub fn rules(&self) -> Vec<String> {
        self.sheet().rules.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.sheet().rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheet().rules.is_empty()
    }
}

impl StyleSheetPort for InMemoryStyleSheet {
    fn insert_rule(&self, css: &str) -> RuleId {
        let mut sheet = self.sheet();
        sheet.next_id += 1;
        let id = RuleId(sheet.next_id);
        sheet.rules.insert(id, css.to_string());
        id
    }

    fn remove_rule(&self, rule: RuleId) {
        self.sheet().rules.remove(&rule);
    }
}
