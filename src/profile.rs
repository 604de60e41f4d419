//! Profile completeness oracle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Consulted by route guards for `ProfileRequired` routes, only after the
//! session is settled and authenticated. Each mounted guard asks once; nothing
//! is cached across navigations, so every protected mount costs one request.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use std::time::Duration;

use crate::api::{ApiError, AuthApi};
use crate::config::ClientConfig;
use crate::guard::RouteGuardResult;
use crate::timer::{Timer, with_timeout};
use crate::types::ProfileProbe;

/// What a guard does when the profile check fails for a reason other than 404.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileFailurePolicy {
    /// Treat the failure like a missing profile and send the user to completion.
    #[default]
    RedirectOnFailure,
    /// Report [`RouteGuardResult::ProfileUnavailable`] so the view can offer a retry.
    SurfaceFailure,
}

/// Outcome of one profile check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileCheck {
    Present,
    Absent,
    /// The backend could not be asked, or answered with a non-404 error.
    Unavailable(ApiError),
}

/// Per-guard profile check lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProfileState {
    #[default]
    Idle,
    Checking,
    Checked(ProfileCheck),
}

impl ProfileState {
    /// Guard decision for an authenticated session in this state.
    #[must_use]
    pub fn guard_result(&self, policy: ProfileFailurePolicy) -> RouteGuardResult {
        match self {
            Self::Idle | Self::Checking => RouteGuardResult::Pending,
            Self::Checked(ProfileCheck::Present) => RouteGuardResult::Allow,
            Self::Checked(ProfileCheck::Absent) => RouteGuardResult::RedirectToProfileCompletion,
            Self::Checked(ProfileCheck::Unavailable(_)) => match policy {
                ProfileFailurePolicy::RedirectOnFailure => RouteGuardResult::RedirectToProfileCompletion,
                ProfileFailurePolicy::SurfaceFailure => RouteGuardResult::ProfileUnavailable,
            },
        }
    }
}

/// Asks the backend whether the signed-in user has completed their profile.
pub struct ProfileOracle<A, T> {
    api: A,
    timer: T,
    timeout: Duration,
}

impl<A: AuthApi, T: Timer> ProfileOracle<A, T> {
    pub fn new(api: A, timer: T, config: &ClientConfig) -> Self {
        Self { api, timer, timeout: config.request_timeout }
    }

    /// Issue one existence check. Never fails; errors become `Unavailable`.
    pub async fn check_profile(&self, user_id: i64) -> ProfileCheck {
        match with_timeout(&self.timer, self.timeout, self.api.profile()).await {
            Ok(ProfileProbe::Present) => ProfileCheck::Present,
            Ok(ProfileProbe::Absent) => {
                tracing::info!(user_id, "profile not completed");
                ProfileCheck::Absent
            }
            Err(e) => {
                tracing::warn!(user_id, error = %e, "profile check failed");
                ProfileCheck::Unavailable(e)
            }
        }
    }
}
