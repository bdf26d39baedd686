use std::fmt;
use std::hash::Hasher;

use twox_hash::XxHash64;

/// Family name under which a record's `@font-face` rule is registered.
///
/// Derived purely from the record's content-addressing key
/// (file name, payload size, content type). Two records with the same key
/// share one face; the first one registered wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontFaceId(String);

impl FontFaceId {
    const SEED: u64 = 0;

    pub fn derive(file_name: &str, size: u64, content_type: &str) -> Self {
        let mut hasher = XxHash64::with_seed(Self::SEED);
        // Length prefixes keep ("ab", "c") and ("a", "bc") apart.
        for field in [file_name.as_bytes(), content_type.as_bytes()] {
            hasher.write_u64(field.len() as u64);
            hasher.write(field);
        }
        hasher.write_u64(size);
        Self(format!("ff-{:016x}", hasher.finish()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FontFaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
