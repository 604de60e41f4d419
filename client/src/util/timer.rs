//! Browser [`Timer`] for request timeouts.

use std::time::Duration;

use async_trait::async_trait;
use careerconnect::timer::Timer;

/// `setTimeout`-backed sleep. Off the browser it never fires, so requests
/// (which fail fast there) always win the race.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

#[async_trait(?Send)]
impl Timer for BrowserTimer {
    async fn sleep(&self, duration: Duration) {
        #[cfg(feature = "csr")]
        {
            gloo_timers::future::sleep(duration).await;
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = duration;
            std::future::pending::<()>().await;
        }
    }
}
