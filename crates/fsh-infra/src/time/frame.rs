use async_trait::async_trait;
use fsh_core::ports::FrameYieldPort;

/// Hands control back to the tokio scheduler between upload items.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioFrameYield;

#[async_trait]
impl FrameYieldPort for TokioFrameYield {
    async fn yield_frame(&self) {
        tokio::task::yield_now().await;
    }
}
