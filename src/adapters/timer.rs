use async_trait::async_trait;
use pawmap_core::gateways::Timer;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

#[async_trait(?Send)]
impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
