use super::*;
use crate::cache::{MemoryStorage, USER_CACHE_KEY};
use crate::nav::NavMode;
use crate::session::LocalSession;
use crate::test_helpers::{
    InstantTimer, MockApi, NeverTimer, Reply, employer, job_seeker, resolver, signed_in, signed_out, status,
};

fn cached(storage: &MemoryStorage, user: &User) {
    UserCache::new(storage.clone()).store(user);
}

// =============================================================
// resolve
// =============================================================

#[tokio::test]
async fn resolve_with_valid_cookie_is_authenticated() {
    let api = MockApi::new().with_status(Reply::Ready(Ok(signed_in(job_seeker(7)))));
    let storage = MemoryStorage::new();
    let ctx = LocalSession::default();

    let session = resolver(&api, &storage, NeverTimer, SessionFailurePolicy::default()).resolve(&ctx).await;

    assert_eq!(session, Session::authenticated(job_seeker(7)));
    assert_eq!(ctx.snapshot(), session);
    assert_eq!(UserCache::new(storage).load(), Some(job_seeker(7)));
    assert_eq!(api.calls().status, 1);
}

#[tokio::test]
async fn resolve_clears_stale_cache_when_backend_says_signed_out() {
    let api = MockApi::new().with_status(Reply::Ready(Ok(signed_out())));
    let storage = MemoryStorage::new();
    cached(&storage, &job_seeker(7));
    let ctx = LocalSession::default();

    let session = resolver(&api, &storage, NeverTimer, SessionFailurePolicy::default()).resolve(&ctx).await;

    assert_eq!(session, Session::anonymous());
    assert!(storage.get(USER_CACHE_KEY).is_none());
}

#[tokio::test]
async fn resolve_clears_on_unauthorized_status() {
    let api = MockApi::new().with_status(Reply::Ready(Err(status(401, "Not authenticated"))));
    let storage = MemoryStorage::new();
    cached(&storage, &employer(3));
    let ctx = LocalSession::default();

    let session = resolver(&api, &storage, NeverTimer, SessionFailurePolicy::default()).resolve(&ctx).await;

    assert_eq!(session, Session::anonymous());
    assert!(storage.is_empty());
}

#[tokio::test]
async fn resolve_backend_user_overrides_cached_user() {
    let api = MockApi::new().with_status(Reply::Ready(Ok(signed_in(employer(9)))));
    let storage = MemoryStorage::new();
    cached(&storage, &job_seeker(7));
    let ctx = LocalSession::default();

    let session = resolver(&api, &storage, NeverTimer, SessionFailurePolicy::default()).resolve(&ctx).await;

    assert_eq!(session.user_id(), Some(9));
    assert_eq!(UserCache::new(storage).load(), Some(employer(9)));
}

#[tokio::test]
async fn resolve_treats_authenticated_without_user_as_signed_out() {
    let inconsistent = AuthStatus { is_authenticated: true, user: None };
    let api = MockApi::new().with_status(Reply::Ready(Ok(inconsistent)));
    let storage = MemoryStorage::new();
    cached(&storage, &job_seeker(7));
    let ctx = LocalSession::default();

    let session = resolver(&api, &storage, NeverTimer, SessionFailurePolicy::default()).resolve(&ctx).await;

    assert_eq!(session, Session::anonymous());
    assert!(storage.is_empty());
}

#[tokio::test]
async fn resolve_clears_on_malformed_body() {
    let api = MockApi::new().with_status(Reply::Ready(Err(ApiError::Parse("expected value".to_owned()))));
    let storage = MemoryStorage::new();
    cached(&storage, &job_seeker(7));
    let ctx = LocalSession::default();

    let session = resolver(&api, &storage, NeverTimer, SessionFailurePolicy::KeepOptimistic).resolve(&ctx).await;

    assert_eq!(session, Session::anonymous());
    assert!(storage.is_empty());
}

#[tokio::test]
async fn resolve_times_out_to_signed_out() {
    let api = MockApi::new().with_status(Reply::Stall);
    let storage = MemoryStorage::new();
    cached(&storage, &job_seeker(7));
    let ctx = LocalSession::default();

    let session = resolver(&api, &storage, InstantTimer, SessionFailurePolicy::default()).resolve(&ctx).await;

    assert_eq!(session, Session::anonymous());
    assert!(!session.is_loading());
    assert!(storage.is_empty());
}

#[tokio::test]
async fn resolve_publishes_optimistic_session_before_answer() {
    let api = MockApi::new().with_status(Reply::Stall);
    let storage = MemoryStorage::new();
    cached(&storage, &job_seeker(7));
    let ctx = LocalSession::default();
    let resolver = resolver(&api, &storage, NeverTimer, SessionFailurePolicy::default());

    let mut task = std::pin::pin!(resolver.resolve(&ctx));
    assert!(futures::poll!(task.as_mut()).is_pending());

    let published = ctx.snapshot();
    assert_eq!(published, Session::provisional(job_seeker(7)));
    assert!(published.is_loading());
}

#[tokio::test]
async fn resolve_without_cache_starts_pending() {
    let api = MockApi::new().with_status(Reply::Stall);
    let storage = MemoryStorage::new();
    let ctx = LocalSession::new(Session::anonymous());
    let resolver = resolver(&api, &storage, NeverTimer, SessionFailurePolicy::default());

    let mut task = std::pin::pin!(resolver.resolve(&ctx));
    assert!(futures::poll!(task.as_mut()).is_pending());
    assert_eq!(ctx.snapshot(), Session::pending());
}

#[tokio::test]
async fn resolve_is_idempotent_for_same_answer() {
    let api = MockApi::new().with_status(Reply::Ready(Ok(signed_in(job_seeker(7)))));
    let storage = MemoryStorage::new();
    let ctx = LocalSession::default();
    let resolver = resolver(&api, &storage, NeverTimer, SessionFailurePolicy::default());

    let first = resolver.resolve(&ctx).await;
    let second = resolver.resolve(&ctx).await;

    assert_eq!(first, second);
    assert_eq!(api.calls().status, 2);
}

#[tokio::test]
async fn resolved_session_never_authenticated_without_user() {
    let answers = [
        Reply::Ready(Ok(signed_in(job_seeker(1)))),
        Reply::Ready(Ok(signed_out())),
        Reply::Ready(Ok(AuthStatus { is_authenticated: true, user: None })),
        Reply::Ready(Err(ApiError::Transport("offline".to_owned()))),
        Reply::Ready(Err(status(500, "boom"))),
        Reply::Stall,
    ];
    for answer in answers {
        for policy in [SessionFailurePolicy::ClearOnFailure, SessionFailurePolicy::KeepOptimistic] {
            let api = MockApi::new().with_status(answer.clone());
            let storage = MemoryStorage::new();
            cached(&storage, &job_seeker(1));
            let session = resolver(&api, &storage, InstantTimer, policy).resolve(&LocalSession::default()).await;
            assert!(!session.is_loading());
            assert_eq!(session.is_authenticated(), session.user().is_some());
        }
    }
}

// =============================================================
// failure policy
// =============================================================

#[tokio::test]
async fn keep_optimistic_keeps_cached_user_on_transport_failure() {
    let api = MockApi::new().with_status(Reply::Ready(Err(ApiError::Transport("offline".to_owned()))));
    let storage = MemoryStorage::new();
    cached(&storage, &job_seeker(7));
    let ctx = LocalSession::default();

    let session = resolver(&api, &storage, NeverTimer, SessionFailurePolicy::KeepOptimistic).resolve(&ctx).await;

    assert_eq!(session, Session::authenticated(job_seeker(7)));
    assert_eq!(UserCache::new(storage).load(), Some(job_seeker(7)));
}

#[tokio::test]
async fn keep_optimistic_keeps_cached_user_on_timeout() {
    let api = MockApi::new().with_status(Reply::Stall);
    let storage = MemoryStorage::new();
    cached(&storage, &job_seeker(7));

    let session = resolver(&api, &storage, InstantTimer, SessionFailurePolicy::KeepOptimistic)
        .resolve(&LocalSession::default())
        .await;

    assert_eq!(session, Session::authenticated(job_seeker(7)));
}

#[tokio::test]
async fn keep_optimistic_still_clears_on_authoritative_answer() {
    let api = MockApi::new().with_status(Reply::Ready(Err(status(401, "Not authenticated"))));
    let storage = MemoryStorage::new();
    cached(&storage, &job_seeker(7));

    let session = resolver(&api, &storage, NeverTimer, SessionFailurePolicy::KeepOptimistic)
        .resolve(&LocalSession::default())
        .await;

    assert_eq!(session, Session::anonymous());
    assert!(storage.is_empty());
}

#[tokio::test]
async fn keep_optimistic_without_cache_is_signed_out() {
    let api = MockApi::new().with_status(Reply::Ready(Err(ApiError::Transport("offline".to_owned()))));
    let storage = MemoryStorage::new();

    let session = resolver(&api, &storage, NeverTimer, SessionFailurePolicy::KeepOptimistic)
        .resolve(&LocalSession::default())
        .await;

    assert_eq!(session, Session::anonymous());
}

#[tokio::test]
async fn clear_on_failure_clears_on_transport_failure() {
    let api = MockApi::new().with_status(Reply::Ready(Err(ApiError::Transport("offline".to_owned()))));
    let storage = MemoryStorage::new();
    cached(&storage, &job_seeker(7));

    let session = resolver(&api, &storage, NeverTimer, SessionFailurePolicy::ClearOnFailure)
        .resolve(&LocalSession::default())
        .await;

    assert_eq!(session, Session::anonymous());
    assert!(storage.is_empty());
}

// =============================================================
// login / logout
// =============================================================

#[tokio::test]
async fn login_sets_session_without_persisting() {
    let api = MockApi::new();
    let storage = MemoryStorage::new();
    let ctx = LocalSession::new(Session::anonymous());

    resolver(&api, &storage, NeverTimer, SessionFailurePolicy::default()).login(&ctx, employer(4));

    assert_eq!(ctx.snapshot(), Session::authenticated(employer(4)));
    assert!(storage.is_empty());
    assert_eq!(api.calls(), crate::test_helpers::Calls::default());
}

#[tokio::test]
async fn logout_clears_and_reloads_home_on_success() {
    let api = MockApi::new().with_logout(Reply::Ready(Ok(())));
    let storage = MemoryStorage::new();
    cached(&storage, &job_seeker(7));
    let ctx = LocalSession::new(Session::authenticated(job_seeker(7)));

    let intent = resolver(&api, &storage, NeverTimer, SessionFailurePolicy::default()).logout(&ctx).await;

    assert_eq!(intent.path, "/");
    assert_eq!(intent.mode, NavMode::FullReload);
    assert_eq!(ctx.snapshot(), Session::anonymous());
    assert!(storage.is_empty());
    assert_eq!(api.calls().logout, 1);
}

#[tokio::test]
async fn logout_clears_even_when_request_fails() {
    let api = MockApi::new().with_logout(Reply::Ready(Err(status(500, "boom"))));
    let storage = MemoryStorage::new();
    cached(&storage, &job_seeker(7));
    let ctx = LocalSession::new(Session::authenticated(job_seeker(7)));

    let intent = resolver(&api, &storage, NeverTimer, SessionFailurePolicy::default()).logout(&ctx).await;

    assert_eq!(intent, NavIntent::full_reload(AppRoute::Home));
    assert_eq!(ctx.snapshot(), Session::anonymous());
    assert!(storage.is_empty());
}

#[tokio::test]
async fn logout_clears_even_when_request_stalls() {
    let api = MockApi::new().with_logout(Reply::Stall);
    let storage = MemoryStorage::new();
    cached(&storage, &job_seeker(7));
    let ctx = LocalSession::new(Session::authenticated(job_seeker(7)));

    let intent = resolver(&api, &storage, InstantTimer, SessionFailurePolicy::default()).logout(&ctx).await;

    assert_eq!(intent, NavIntent::full_reload(AppRoute::Home));
    assert_eq!(ctx.snapshot(), Session::anonymous());
    assert!(storage.is_empty());
}
