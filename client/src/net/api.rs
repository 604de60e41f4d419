//! Browser [`AuthApi`] transport over `gloo-net`.
//!
//! Client-side (csr): real `fetch` calls with `credentials: include` so the
//! session cookie travels cross-origin to the API host.
//! Native builds: every call returns [`ApiError::Unavailable`], which lets the
//! pure helpers in this crate be unit-tested off the browser.
//!
//! ERROR HANDLING
//! ==============
//! Fetch failures map to `Transport`, non-2xx answers to `Status` with the
//! server's `error` text, and bad bodies to `Parse`. Timeouts are applied by
//! the core around each call, not here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use careerconnect::api::{
    AUTH_STATUS_PATH, ApiError, AuthApi, LOGIN_PATH, LOGOUT_PATH, PROFILE_PATH, REGISTER_PATH, decode_response,
    endpoint, expect_success, profile_probe,
};
use careerconnect::config::ClientConfig;
use careerconnect::types::{
    AuthStatus, LoginRequest, LoginResponse, ProfileProbe, ProfileUpdate, RegisterRequest, RegisterResponse, User,
};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
}

/// Request payload, already encoded.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
enum Body {
    Empty,
    Json(String),
    Form(Vec<(&'static str, String)>),
}

impl Body {
    fn json(value: &impl Serialize) -> Result<Self, ApiError> {
        serde_json::to_string(value).map(Self::Json).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

/// `fetch`-backed client for the CareerConnect backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserApi {
    base_url: String,
}

impl BrowserApi {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self { base_url: config.api_base_url.clone() }
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    async fn send(&self, verb: Verb, path: &str, body: Body) -> Result<(u16, String), ApiError> {
        fetch(verb, &self.url(path), body).await
    }
}

#[cfg(feature = "csr")]
fn transport_error(e: gloo_net::Error) -> ApiError {
    match e {
        gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
        other => ApiError::Transport(other.to_string()),
    }
}

#[cfg(feature = "csr")]
async fn fetch(verb: Verb, url: &str, body: Body) -> Result<(u16, String), ApiError> {
    use gloo_net::http::Request;
    use web_sys::{RequestCredentials, UrlSearchParams};

    let builder = match verb {
        Verb::Get => Request::get(url),
        Verb::Post => Request::post(url),
    }
    .credentials(RequestCredentials::Include)
    .header("Accept", "application/json");

    let request = match body {
        Body::Empty => builder.build(),
        Body::Json(text) => builder.header("Content-Type", "application/json").body(text),
        Body::Form(fields) => {
            let params = UrlSearchParams::new().map_err(|e| ApiError::Transport(format!("{e:?}")))?;
            for (name, value) in &fields {
                params.append(name, value);
            }
            builder.body(params)
        }
    }
    .map_err(transport_error)?;

    let response = request.send().await.map_err(transport_error)?;
    let status = response.status();
    let text = response.text().await.map_err(transport_error)?;
    log::debug!("{url} -> {status}");
    Ok((status, text))
}

#[cfg(not(feature = "csr"))]
async fn fetch(_verb: Verb, _url: &str, _body: Body) -> Result<(u16, String), ApiError> {
    Err(ApiError::Unavailable)
}

#[async_trait(?Send)]
impl AuthApi for BrowserApi {
    async fn auth_status(&self) -> Result<AuthStatus, ApiError> {
        let (status, body) = self.send(Verb::Get, AUTH_STATUS_PATH, Body::Empty).await?;
        decode_response(status, &body)
    }

    async fn login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        let (status, body) = self.send(Verb::Post, LOGIN_PATH, Body::json(request)?).await?;
        decode_response::<LoginResponse>(status, &body).map(|r| r.user)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let (status, body) = self.send(Verb::Post, LOGOUT_PATH, Body::Empty).await?;
        expect_success(status, &body)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let (status, body) = self.send(Verb::Post, REGISTER_PATH, Body::json(request)?).await?;
        decode_response(status, &body)
    }

    async fn profile(&self) -> Result<ProfileProbe, ApiError> {
        let (status, body) = self.send(Verb::Get, PROFILE_PATH, Body::Empty).await?;
        profile_probe(status, &body)
    }

    async fn save_profile(&self, update: &ProfileUpdate) -> Result<(), ApiError> {
        let (status, body) = self.send(Verb::Post, PROFILE_PATH, Body::Form(update.form_fields())).await?;
        expect_success(status, &body)
    }
}
