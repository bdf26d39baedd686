use crate::font::FontBlob;

/// Scoped resource URLs for in-memory blobs.
///
/// Every URL handed out stays live until it is revoked.
pub trait ObjectUrlPort: Send + Sync {
    fn create_object_url(&self, blob: &FontBlob) -> String;

    /// Revoking an unknown URL is a no-op.
    fn revoke_object_url(&self, url: &str);
}
