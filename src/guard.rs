//! Route authorization gate.
//!
//! ARCHITECTURE
//! ============
//! Stage one ([`evaluate`]) looks only at the session: wait while loading,
//! redirect when signed out, allow otherwise. Stage two applies to
//! `ProfileRequired` routes and asks the profile oracle, strictly after stage
//! one allows. Both stages are pure decisions. Redirects come back as
//! [`NavIntent`] values for the caller to execute.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::api::AuthApi;
use crate::nav::NavIntent;
use crate::profile::{ProfileCheck, ProfileFailurePolicy, ProfileOracle, ProfileState};
use crate::routes::{AppRoute, RouteAccess};
use crate::session::Session;
use crate::timer::Timer;

/// Decision for one protected route render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteGuardResult {
    Allow,
    RedirectToSignIn,
    RedirectToProfileCompletion,
    Pending,
    /// Profile check failed and the policy asks to surface it.
    ProfileUnavailable,
}

impl RouteGuardResult {
    /// Navigation to perform, if any. Redirects replace the history entry so
    /// back-navigation does not return to the guarded page.
    #[must_use]
    pub fn redirect(&self) -> Option<NavIntent> {
        match self {
            Self::RedirectToSignIn => Some(NavIntent::replace(AppRoute::SignIn)),
            Self::RedirectToProfileCompletion => Some(NavIntent::replace(AppRoute::CompleteProfile)),
            Self::Allow | Self::Pending | Self::ProfileUnavailable => None,
        }
    }
}

/// Stage one: decide from `loading` and `is_authenticated` alone.
#[must_use]
pub fn evaluate(session: &Session) -> RouteGuardResult {
    if session.is_loading() {
        RouteGuardResult::Pending
    } else if session.is_authenticated() {
        RouteGuardResult::Allow
    } else {
        RouteGuardResult::RedirectToSignIn
    }
}

/// Both stages for a route with the given access tier.
#[must_use]
pub fn evaluate_route(
    access: RouteAccess,
    session: &Session,
    profile: &ProfileState,
    policy: ProfileFailurePolicy,
) -> RouteGuardResult {
    match access {
        RouteAccess::Public => RouteGuardResult::Allow,
        RouteAccess::Authenticated => evaluate(session),
        RouteAccess::ProfileRequired => match evaluate(session) {
            RouteGuardResult::Allow => profile.guard_result(policy),
            other => other,
        },
    }
}

/// Whether the profile oracle should be asked now.
#[must_use]
pub fn should_check_profile(access: RouteAccess, session: &Session, profile: &ProfileState) -> bool {
    access == RouteAccess::ProfileRequired
        && evaluate(session) == RouteGuardResult::Allow
        && *profile == ProfileState::Idle
}

/// State of one mounted guard instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteGuard {
    access: RouteAccess,
    profile: ProfileState,
    policy: ProfileFailurePolicy,
}

impl RouteGuard {
    #[must_use]
    pub fn new(access: RouteAccess, policy: ProfileFailurePolicy) -> Self {
        Self { access, profile: ProfileState::Idle, policy }
    }

    #[must_use]
    pub fn for_route(route: AppRoute, policy: ProfileFailurePolicy) -> Self {
        Self::new(route.access(), policy)
    }

    #[must_use]
    pub fn profile_state(&self) -> &ProfileState {
        &self.profile
    }

    #[must_use]
    pub fn result(&self, session: &Session) -> RouteGuardResult {
        evaluate_route(self.access, session, &self.profile, self.policy)
    }

    /// Claim the single profile check for this instance, returning the user to check.
    pub fn begin_profile_check(&mut self, session: &Session) -> Option<i64> {
        if !should_check_profile(self.access, session, &self.profile) {
            return None;
        }
        let user_id = session.user_id()?;
        self.profile = ProfileState::Checking;
        Some(user_id)
    }

    /// Record the outcome of the check started by [`Self::begin_profile_check`].
    pub fn commit_profile_check(&mut self, check: ProfileCheck) {
        if self.profile == ProfileState::Checking {
            self.profile = ProfileState::Checked(check);
        }
    }

    /// Allow another check after a surfaced failure.
    pub fn retry_profile_check(&mut self) {
        if matches!(self.profile, ProfileState::Checked(ProfileCheck::Unavailable(_))) {
            self.profile = ProfileState::Idle;
        }
    }

    /// Run the profile stage if it is due, then decide.
    pub async fn advance<A: AuthApi, T: Timer>(
        &mut self,
        session: &Session,
        oracle: &ProfileOracle<A, T>,
    ) -> RouteGuardResult {
        if let Some(user_id) = self.begin_profile_check(session) {
            let check = oracle.check_profile(user_id).await;
            self.commit_profile_check(check);
        }
        self.result(session)
    }
}
