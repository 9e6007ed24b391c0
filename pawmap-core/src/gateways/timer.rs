use std::time::Duration;

use async_trait::async_trait;

#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}
