//! Client configuration parsed from environment variables.

use std::time::Duration;

use crate::profile::ProfileFailurePolicy;
use crate::session::SessionFailurePolicy;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Errors produced while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub session_policy: SessionFailurePolicy,
    pub profile_policy: ProfileFailurePolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            session_policy: SessionFailurePolicy::default(),
            profile_policy: ProfileFailurePolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `CAREERCONNECT_API_BASE_URL`: default `http://localhost:5000`
    /// - `CAREERCONNECT_REQUEST_TIMEOUT_MS`: default 10000
    /// - `CAREERCONNECT_SESSION_POLICY`: `clear` (default) or `keep_optimistic`
    /// - `CAREERCONNECT_PROFILE_POLICY`: `redirect` (default) or `surface`
    ///
    /// # Errors
    ///
    /// Returns an error if a policy name is not recognized.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed client config from any key/value source.
    ///
    /// Same keys and defaults as [`ClientConfig::from_env`]. The browser build
    /// has no process environment and feeds compile-time values through here.
    ///
    /// # Errors
    ///
    /// Returns an error if a policy name is not recognized.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base_url = lookup("CAREERCONNECT_API_BASE_URL")
            .filter(|raw| !raw.trim().is_empty())
            .map_or_else(|| DEFAULT_API_BASE_URL.to_owned(), |raw| normalize_base_url(&raw));
        let request_timeout = Duration::from_millis(parse_timeout_ms(
            lookup("CAREERCONNECT_REQUEST_TIMEOUT_MS").as_deref(),
            DEFAULT_REQUEST_TIMEOUT_MS,
        ));
        let session_policy =
            parse_session_policy(lookup("CAREERCONNECT_SESSION_POLICY").as_deref().unwrap_or("clear"))?;
        let profile_policy =
            parse_profile_policy(lookup("CAREERCONNECT_PROFILE_POLICY").as_deref().unwrap_or("redirect"))?;

        Ok(Self { api_base_url, request_timeout, session_policy, profile_policy })
    }

    /// Use `base` as the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base: &str) -> Self {
        self.api_base_url = normalize_base_url(base);
        self
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn parse_timeout_ms(raw: Option<&str>, default: u64) -> u64 {
    match raw.map(|v| v.trim().parse::<u64>()) {
        Some(Ok(value)) if value > 0 => value,
        _ => default,
    }
}

fn parse_session_policy(raw: &str) -> Result<SessionFailurePolicy, ConfigError> {
    match raw {
        "clear" => Ok(SessionFailurePolicy::ClearOnFailure),
        "keep_optimistic" => Ok(SessionFailurePolicy::KeepOptimistic),
        other => Err(ConfigError::Parse(format!(
            "unknown CAREERCONNECT_SESSION_POLICY '{other}' (expected 'clear' or 'keep_optimistic')"
        ))),
    }
}

fn parse_profile_policy(raw: &str) -> Result<ProfileFailurePolicy, ConfigError> {
    match raw {
        "redirect" => Ok(ProfileFailurePolicy::RedirectOnFailure),
        "surface" => Ok(ProfileFailurePolicy::SurfaceFailure),
        other => Err(ConfigError::Parse(format!(
            "unknown CAREERCONNECT_PROFILE_POLICY '{other}' (expected 'redirect' or 'surface')"
        ))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
