//! Backend REST contract: the `AuthApi` seam and its error type.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session resolver, profile oracle and account flows only talk to the
//! backend through `AuthApi`. The browser crate implements it with `gloo-net`;
//! the `native` feature provides a `reqwest` implementation in [`http`].
//!
//! ERROR HANDLING
//! ==============
//! Transports map every outcome onto `ApiError` so callers can tell a transient
//! transport failure from an authoritative HTTP answer. What to do with that
//! distinction is policy and lives with the callers.


#[cfg(feature = "native")]
pub mod http;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::types::{
    AuthStatus, ErrorBody, LoginRequest, ProfileProbe, ProfileUpdate, RegisterRequest, RegisterResponse, User,
};

pub const AUTH_STATUS_PATH: &str = "/api/auth/status";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const LOGOUT_PATH: &str = "/api/auth/logout";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const PROFILE_PATH: &str = "/api/profile";

/// Errors produced by backend calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, offline, connection reset).
    #[error("request failed: {0}")]
    Transport(String),

    /// No response arrived within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The backend answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },

    /// The response body was not the expected JSON shape.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The transport cannot run in this environment (e.g. server-side render).
    #[error("not available in this environment")]
    Unavailable,
}

impl ApiError {
    /// `true` for a 404 answer.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }

    /// `true` when the failure says nothing about server-side state.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout)
    }

    /// Server-provided `error` text of a rejected request, if any.
    #[must_use]
    pub fn rejection_message(&self) -> Option<&str> {
        match self {
            Self::Status { message: Some(message), .. } => Some(message),
            _ => None,
        }
    }
}

/// Async client for the CareerConnect backend.
///
/// Requests carry ambient credentials (the session cookie). Futures are not
/// required to be `Send`: the browser event loop is single-threaded.
#[async_trait(?Send)]
pub trait AuthApi {
    /// `GET /api/auth/status`: who does the backend think we are?
    async fn auth_status(&self) -> Result<AuthStatus, ApiError>;

    /// `POST /api/auth/login`: exchange credentials for a session cookie.
    async fn login(&self, request: &LoginRequest) -> Result<User, ApiError>;

    /// `POST /api/auth/logout`: response body is ignored.
    async fn logout(&self) -> Result<(), ApiError>;

    /// `POST /api/auth/register`.
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError>;

    /// `GET /api/profile`: 2xx is `Present`, 404 is `Absent`, anything else an error.
    async fn profile(&self) -> Result<ProfileProbe, ApiError>;

    /// `POST /api/profile` as form fields: fill in the caller's profile record.
    async fn save_profile(&self, update: &ProfileUpdate) -> Result<(), ApiError>;
}

/// Join the API base URL and an absolute endpoint path.
#[must_use]
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Build the error for a non-2xx response, keeping the server's `error` text.
#[must_use]
pub fn status_error(status: u16, body: &str) -> ApiError {
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => Some(parsed.error),
        Err(_) => None,
    };
    ApiError::Status { status, message }
}

/// Accept any 2xx answer and ignore its body.
///
/// # Errors
///
/// Returns `Status` for non-2xx responses.
pub fn expect_success(status: u16, body: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(status_error(status, body)) }
}

/// Decode a 2xx body, or turn a non-2xx response into [`ApiError::Status`].
///
/// # Errors
///
/// Returns `Status` for non-2xx responses and `Parse` for malformed bodies.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(status_error(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Classify a `GET /api/profile` response.
///
/// # Errors
///
/// Returns `Status` for any non-2xx answer other than 404.
pub fn profile_probe(status: u16, body: &str) -> Result<ProfileProbe, ApiError> {
    match status {
        200..=299 => Ok(ProfileProbe::Present),
        404 => Ok(ProfileProbe::Absent),
        _ => Err(status_error(status, body)),
    }
}
