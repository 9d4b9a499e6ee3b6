//! Injectable delay used for the artificial "load more" pause

use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait Delay: Send + Sync {
    async fn wait(&self, duration: Duration);
}

/// Real timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Completes immediately regardless of the requested duration
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateDelay;

#[async_trait]
impl Delay for ImmediateDelay {
    async fn wait(&self, _duration: Duration) {
        tokio::task::yield_now().await;
    }
}
