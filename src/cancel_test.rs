use super::*;

#[tokio::test]
async fn completes_when_not_cancelled() {
    let (task, token) = cancellable(async { 42 });
    assert_eq!(task.await, Some(42));
    assert!(!token.is_cancelled());
}

#[tokio::test]
async fn cancelled_before_poll_yields_none() {
    let (task, token) = cancellable(async { 42 });
    token.cancel();
    assert_eq!(task.await, None);
}

#[tokio::test]
async fn cancel_through_clone_stops_pending_future() {
    let (task, token) = cancellable(futures::future::pending::<u8>());
    let clone = token.clone();
    let mut task = std::pin::pin!(task);
    assert!(futures::poll!(task.as_mut()).is_pending());
    clone.cancel();
    assert!(token.is_cancelled());
    assert_eq!(task.await, None);
}
