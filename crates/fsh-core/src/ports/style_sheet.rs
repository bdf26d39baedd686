use crate::ids::RuleId;

/// Dynamic style sheet holding the injected `@font-face` rules.
pub trait StyleSheetPort: Send + Sync {
    fn insert_rule(&self, css: &str) -> RuleId;

    /// Removing an unknown rule is a no-op.
    fn remove_rule(&self, rule: RuleId);
}
