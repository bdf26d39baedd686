use async_trait::async_trait;

/// Cooperative yield back to the rendering loop.
///
/// Long batches call this between items so the interface stays responsive.
#[async_trait]
pub trait FrameYieldPort: Send + Sync {
    async fn yield_frame(&self);
}
