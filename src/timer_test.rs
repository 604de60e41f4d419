use super::*;

/// Timer whose sleep never completes.
struct NeverTimer;

#[async_trait(?Send)]
impl Timer for NeverTimer {
    async fn sleep(&self, _duration: Duration) {
        futures::future::pending::<()>().await;
    }
}

/// Timer that fires immediately.
struct ExpiredTimer;

#[async_trait(?Send)]
impl Timer for ExpiredTimer {
    async fn sleep(&self, _duration: Duration) {}
}

#[tokio::test]
async fn with_timeout_returns_request_result() {
    let result = with_timeout(&NeverTimer, Duration::from_secs(1), async { Ok::<_, ApiError>(7) }).await;
    assert_eq!(result, Ok(7));
}

#[tokio::test]
async fn with_timeout_passes_request_errors_through() {
    let result =
        with_timeout(&NeverTimer, Duration::from_secs(1), async { Err::<(), _>(ApiError::Unavailable) }).await;
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[tokio::test]
async fn with_timeout_expires_stalled_request() {
    let stalled = futures::future::pending::<Result<(), ApiError>>();
    let result = with_timeout(&ExpiredTimer, Duration::from_secs(1), stalled).await;
    assert_eq!(result, Err(ApiError::Timeout));
}

#[cfg(feature = "native")]
#[tokio::test(start_paused = true)]
async fn tokio_timer_expires_after_duration() {
    let stalled = futures::future::pending::<Result<(), ApiError>>();
    let result = with_timeout(&TokioTimer, Duration::from_millis(50), stalled).await;
    assert_eq!(result, Err(ApiError::Timeout));
}
