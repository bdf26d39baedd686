use serde::{Deserialize, Serialize};
use std::fmt;

use crate::limits::MAX_TAG_CHARS;

/// A user-assigned label on a font record.
///
/// Only [`UserTag::sanitize`] builds one, so every value holds at most
/// [`MAX_TAG_CHARS`] characters, no control or bidi formatting characters,
/// and no surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserTag(String);

impl UserTag {
    /// Cleans raw user input. Returns `None` when nothing is left.
    pub fn sanitize(raw: &str) -> Option<Self> {
        let stripped: String = raw
            .chars()
            .filter(|c| !c.is_control() && !is_bidi_control(*c))
            .collect();

        let trimmed = stripped.trim();
        let capped: String = trimmed.chars().take(MAX_TAG_CHARS).collect();
        let capped = capped.trim_end();

        if capped.len() != raw.len() {
            tracing::debug!(raw_len = raw.len(), kept_len = capped.len(), "user tag sanitized");
        }

        if capped.is_empty() {
            None
        } else {
            Some(Self(capped.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for UserTag {
    /// Stored tags go through the same sanitizer as user input.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        UserTag::sanitize(&raw).ok_or_else(|| serde::de::Error::custom("empty user tag"))
    }
}

impl fmt::Display for UserTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// LRM/RLM marks plus the embedding, override and isolate controls.
fn is_bidi_control(c: char) -> bool {
    matches!(c, '\u{200E}' | '\u{200F}' | '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}')
}
