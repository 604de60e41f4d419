//! Sign-in, registration and profile completion flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sign-in, sign-up and profile pages call these after the user submits. Form
//! problems are caught locally and never reach the backend or the session.
//!
//! ERROR HANDLING
//! ==============
//! Backend refusals surface the server's `error` text verbatim. When there is
//! none (transport failure, timeout, odd body) a fixed fallback is shown.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use crate::api::{ApiError, AuthApi};
use crate::cache::Storage;
use crate::nav::NavIntent;
use crate::routes::AppRoute;
use crate::session::{SessionContext, SessionResolver};
use crate::timer::Timer;
use crate::types::{ProfileProbe, ProfileUpdate};
use crate::validation::{
    SignInForm, SignUpErrors, SignUpForm, validate_profile, validate_sign_in, validate_sign_up,
};

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const REGISTRATION_SUCCEEDED: &str = "Registration successful! You can now sign in with your credentials.";
pub const REGISTERED_BANNER: &str = "Registration successful! Please sign in with your credentials.";
pub const PROFILE_SAVE_FAILED: &str = "Failed to update profile";

/// Why an account flow did not complete.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    /// The sign-in or profile form failed local validation.
    #[error("{0}")]
    Invalid(&'static str),

    /// One or more sign-up fields failed local validation.
    #[error("form has {} invalid field(s)", .0.len())]
    InvalidFields(SignUpErrors),

    /// The backend refused the request.
    #[error("{0}")]
    Rejected(String),
}

fn rejection(error: &ApiError, fallback: &str) -> AccountError {
    AccountError::Rejected(error.rejection_message().unwrap_or(fallback).to_owned())
}

/// Validate, log in, record the session, then pick the landing page.
///
/// Landing is a full reload: profile completion when the backend has no
/// profile for the user, home otherwise.
///
/// # Errors
///
/// Returns `Invalid` for local form problems and `Rejected` when login fails.
pub async fn sign_in<A, S, T>(
    resolver: &SessionResolver<A, S, T>,
    ctx: &impl SessionContext,
    form: &SignInForm,
) -> Result<NavIntent, AccountError>
where
    A: AuthApi,
    S: Storage,
    T: Timer,
{
    let request = validate_sign_in(form).map_err(AccountError::Invalid)?;

    let user = match resolver.request(resolver.api().login(&request)).await {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!(error = %e, "login rejected");
            return Err(rejection(&e, LOGIN_FAILED));
        }
    };

    resolver.cache().store(&user);
    let user_id = user.id;
    resolver.login(ctx, user);

    match resolver.request(resolver.api().profile()).await {
        Ok(ProfileProbe::Absent) => Ok(NavIntent::full_reload(AppRoute::CompleteProfile)),
        Ok(ProfileProbe::Present) => Ok(NavIntent::full_reload(AppRoute::Home)),
        Err(e) => {
            tracing::warn!(user_id, error = %e, "profile probe after login failed");
            Ok(NavIntent::full_reload(AppRoute::Home))
        }
    }
}

/// Validate and register a new account. Does not sign the user in.
///
/// # Errors
///
/// Returns `InvalidFields` for local form problems and `Rejected` when the
/// backend refuses.
pub async fn register<A, S, T>(
    resolver: &SessionResolver<A, S, T>,
    form: &SignUpForm,
) -> Result<&'static str, AccountError>
where
    A: AuthApi,
    S: Storage,
    T: Timer,
{
    let request = validate_sign_up(form).map_err(AccountError::InvalidFields)?;

    match resolver.request(resolver.api().register(&request)).await {
        Ok(response) => {
            tracing::info!(user_id = ?response.user_id, user_type = request.user_type.as_str(), "registered");
            Ok(REGISTRATION_SUCCEEDED)
        }
        Err(e) => {
            tracing::warn!(error = %e, "registration rejected");
            Err(rejection(&e, REGISTRATION_FAILED))
        }
    }
}

/// Validate and save the signed-in user's profile, then open it.
///
/// A saved profile satisfies the profile gate, so the next guarded page the
/// user opens checks again and lets them through. The landing is an in-app
/// push; the session itself is unchanged.
///
/// # Errors
///
/// Returns `Invalid` for local form problems and `Rejected` when the backend
/// refuses.
pub async fn complete_profile<A, S, T>(
    resolver: &SessionResolver<A, S, T>,
    update: &ProfileUpdate,
) -> Result<NavIntent, AccountError>
where
    A: AuthApi,
    S: Storage,
    T: Timer,
{
    let update = validate_profile(update).map_err(AccountError::Invalid)?;

    match resolver.request(resolver.api().save_profile(&update)).await {
        Ok(()) => {
            tracing::info!(user_type = update.user_type().as_str(), "profile saved");
            Ok(NavIntent::push(AppRoute::Profile))
        }
        Err(e) if e.is_not_found() => {
            tracing::warn!(error = %e, "backend has no profile record for this account");
            Err(rejection(&e, PROFILE_SAVE_FAILED))
        }
        Err(e) => {
            tracing::warn!(error = %e, "profile save rejected");
            Err(rejection(&e, PROFILE_SAVE_FAILED))
        }
    }
}

/// Sign-in page banner for the `registered` query parameter.
#[must_use]
pub fn registration_notice(registered: Option<&str>) -> Option<&'static str> {
    (registered == Some("true")).then_some(REGISTERED_BANNER)
}
