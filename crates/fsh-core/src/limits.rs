//! Hard limits of the library. These are fixed, not configuration.

/// Maximum number of records the library may hold.
pub const MAX_RECORDS: usize = 500;

/// Maximum size of a single uploaded file (50 MiB).
pub const MAX_FILE_BYTES: u64 = 50 * 1024 * 1024;

/// Maximum length of a user tag, in characters.
pub const MAX_TAG_CHARS: usize = 40;

/// Extensions accepted by the upload pipeline (lower-case, no dot).
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["ttf", "otf", "woff", "woff2"];

/// Number of leading bytes inspected by the signature check.
pub const SIGNATURE_LEN: usize = 4;

pub fn is_accepted_extension(ext: &str) -> bool {
    ACCEPTED_EXTENSIONS
        .iter()
        .any(|accepted| accepted.eq_ignore_ascii_case(ext))
}
