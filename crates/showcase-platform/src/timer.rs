use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;

use showcase_core::ports::TimerPort;

/// `setTimeout`-backed sleep
pub struct BrowserTimer;

#[async_trait(?Send)]
impl TimerPort for BrowserTimer {
    async fn sleep(&self, millis: u32) {
        TimeoutFuture::new(millis).await;
    }
}
