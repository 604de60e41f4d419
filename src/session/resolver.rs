//! Session resolution at startup plus the login/logout mutators.
//!
//! ARCHITECTURE
//! ============
//! `resolve` publishes an optimistic session from the local mirror, asks the
//! backend who we are, then publishes the terminal session with
//! `loading == false`. The request is bounded by the configured timeout, so
//! resolution always completes. Nothing is retried automatically.
//!
//! TRADE-OFFS
//! ==========
//! Between the two publishes the UI may treat a stale cached user as signed
//! in. Guards wait for `loading == false`, so only cosmetic chrome (the header)
//! sees that window.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use std::future::Future;
use std::time::Duration;

use crate::api::{ApiError, AuthApi};
use crate::cache::{Storage, UserCache};
use crate::config::ClientConfig;
use crate::nav::NavIntent;
use crate::routes::AppRoute;
use crate::timer::{Timer, with_timeout};
use crate::types::{AuthStatus, User};

use super::{Session, SessionContext, SessionFailurePolicy};

/// Produces and mutates the application's [`Session`].
pub struct SessionResolver<A, S, T> {
    api: A,
    cache: UserCache<S>,
    timer: T,
    timeout: Duration,
    policy: SessionFailurePolicy,
}

impl<A: AuthApi, S: Storage, T: Timer> SessionResolver<A, S, T> {
    pub fn new(api: A, storage: S, timer: T, config: &ClientConfig) -> Self {
        Self {
            api,
            cache: UserCache::new(storage),
            timer,
            timeout: config.request_timeout,
            policy: config.session_policy,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn cache(&self) -> &UserCache<S> {
        &self.cache
    }

    /// Run a backend call under the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns the call's error, or [`ApiError::Timeout`].
    pub async fn request<R>(&self, call: impl Future<Output = Result<R, ApiError>>) -> Result<R, ApiError> {
        with_timeout(&self.timer, self.timeout, call).await
    }

    /// Resolve the session once: optimistic publish, backend check, terminal publish.
    pub async fn resolve(&self, ctx: &impl SessionContext) -> Session {
        let provisional = self.optimistic();
        ctx.replace(provisional.clone());
        let resolved = self.verify(&provisional).await;
        ctx.replace(resolved.clone());
        resolved
    }

    /// Provisional session from the local mirror; always `loading`.
    pub fn optimistic(&self) -> Session {
        match self.cache.load() {
            Some(user) => {
                tracing::debug!(user_id = user.id, "optimistic session from cached user");
                Session::provisional(user)
            }
            None => Session::pending(),
        }
    }

    /// Ask the backend and settle on a terminal session (`loading == false`).
    pub async fn verify(&self, provisional: &Session) -> Session {
        match self.request(self.api.auth_status()).await {
            Ok(AuthStatus { is_authenticated: true, user: Some(user) }) => {
                tracing::info!(user_id = user.id, user_type = user.user_type.as_str(), "session verified");
                self.cache.store(&user);
                Session::authenticated(user)
            }
            Ok(AuthStatus { is_authenticated: true, user: None }) => {
                tracing::warn!("auth status claims authenticated without a user; signing out locally");
                self.clear()
            }
            Ok(AuthStatus { is_authenticated: false, .. }) => {
                tracing::info!("no active session");
                self.clear()
            }
            Err(e) => self.on_failure(provisional, &e),
        }
    }

    fn on_failure(&self, provisional: &Session, error: &ApiError) -> Session {
        if self.policy == SessionFailurePolicy::KeepOptimistic && error.is_transient() {
            if let Some(user) = provisional.user() {
                tracing::warn!(error = %error, user_id = user.id, "session check failed; keeping cached user");
                return Session::authenticated(user.clone());
            }
        }
        tracing::warn!(error = %error, "session check failed; signing out locally");
        self.clear()
    }

    fn clear(&self) -> Session {
        self.cache.clear();
        Session::anonymous()
    }

    /// Mark `user` as signed in. Does not persist or verify it.
    pub fn login(&self, ctx: &impl SessionContext, user: User) {
        tracing::info!(user_id = user.id, "signed in");
        ctx.replace(Session::authenticated(user));
    }

    /// Sign out remotely, then always clear local state and head home.
    pub async fn logout(&self, ctx: &impl SessionContext) -> NavIntent {
        match self.request(self.api.logout()).await {
            Ok(()) => tracing::info!("signed out"),
            Err(e) => tracing::warn!(error = %e, "logout request failed; clearing local session anyway"),
        }
        self.cache.clear();
        ctx.replace(Session::anonymous());
        NavIntent::full_reload(AppRoute::Home)
    }
}
