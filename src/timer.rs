//! Explicit request timeouts.
//!
//! The resolver and the profile oracle race every backend call against a
//! [`Timer`] so a stalled request always resolves to a terminal state.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::{Either, select};

use crate::api::ApiError;

/// Async sleep provided by the host runtime.
#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}

/// Timer backed by `tokio::time::sleep`.
#[cfg(feature = "native")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioTimer;

#[cfg(feature = "native")]
#[async_trait(?Send)]
impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Run `request`, failing with [`ApiError::Timeout`] if `timeout` elapses first.
///
/// # Errors
///
/// Returns the request's own error, or `Timeout` on expiry.
pub async fn with_timeout<T, F>(timer: &impl Timer, timeout: Duration, request: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    let request = pin!(request);
    let expiry = pin!(timer.sleep(timeout));
    match select(request, expiry).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout),
    }
}
