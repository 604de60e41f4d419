//! Build-time client configuration.
//!
//! The browser has no process environment, so every setting is baked in at
//! compile time from the same `CAREERCONNECT_*` variables the core reads with
//! `ClientConfig::from_env`, and parsed by the same code. An unusable value
//! falls back to the defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use careerconnect::config::{ClientConfig, ConfigError};

/// Compile-time value of each configuration key.
fn build_var(key: &str) -> Option<&'static str> {
    match key {
        "CAREERCONNECT_API_BASE_URL" => option_env!("CAREERCONNECT_API_BASE_URL"),
        "CAREERCONNECT_REQUEST_TIMEOUT_MS" => option_env!("CAREERCONNECT_REQUEST_TIMEOUT_MS"),
        "CAREERCONNECT_SESSION_POLICY" => option_env!("CAREERCONNECT_SESSION_POLICY"),
        "CAREERCONNECT_PROFILE_POLICY" => option_env!("CAREERCONNECT_PROFILE_POLICY"),
        _ => None,
    }
}

/// Client config for this build.
#[must_use]
pub fn web_config() -> ClientConfig {
    match config_for(build_var) {
        Ok(config) => config,
        Err(e) => {
            #[cfg(feature = "csr")]
            log::warn!("{e}; using default client config");
            #[cfg(not(feature = "csr"))]
            let _ = e;
            ClientConfig::default()
        }
    }
}

fn config_for(source: impl Fn(&str) -> Option<&'static str>) -> Result<ClientConfig, ConfigError> {
    ClientConfig::from_lookup(|key| source(key).map(str::to_owned))
}
