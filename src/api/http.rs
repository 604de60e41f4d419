//! Native [`AuthApi`] transport over `reqwest`.
//!
//! The client keeps a cookie jar, so the session cookie set by login is sent
//! on every later call, the same way a browser does with `credentials: include`.

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::types::{
    AuthStatus, LoginRequest, LoginResponse, ProfileProbe, ProfileUpdate, RegisterRequest, RegisterResponse, User,
};

use super::{
    AUTH_STATUS_PATH, ApiError, AuthApi, LOGIN_PATH, LOGOUT_PATH, PROFILE_PATH, REGISTER_PATH, decode_response,
    endpoint, expect_success, profile_probe,
};

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() { Self::Timeout } else { Self::Transport(e.to_string()) }
    }
}

/// Cookie-carrying HTTP client for the CareerConnect backend.
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    /// # Errors
    ///
    /// Returns `Transport` if the TLS backend cannot be initialized.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self { client, base_url: config.api_base_url.clone() })
    }

    /// Send one request; `body` attaches the payload, if any.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<(u16, String), ApiError> {
        let request = self
            .client
            .request(method, endpoint(&self.base_url, path))
            .header(reqwest::header::ACCEPT, "application/json");

        let response = body(request).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        tracing::debug!(path, status, "backend responded");
        Ok((status, text))
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<T, ApiError> {
        let (status, text) = self.send(method, path, body).await?;
        decode_response(status, &text)
    }
}

fn no_body(request: RequestBuilder) -> RequestBuilder {
    request
}

#[async_trait(?Send)]
impl AuthApi for HttpApi {
    async fn auth_status(&self) -> Result<AuthStatus, ApiError> {
        self.call(Method::GET, AUTH_STATUS_PATH, no_body).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        let response: LoginResponse = self.call(Method::POST, LOGIN_PATH, |r| r.json(request)).await?;
        Ok(response.user)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let (status, text) = self.send(Method::POST, LOGOUT_PATH, no_body).await?;
        expect_success(status, &text)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.call(Method::POST, REGISTER_PATH, |r| r.json(request)).await
    }

    async fn profile(&self) -> Result<ProfileProbe, ApiError> {
        let (status, text) = self.send(Method::GET, PROFILE_PATH, no_body).await?;
        profile_probe(status, &text)
    }

    async fn save_profile(&self, update: &ProfileUpdate) -> Result<(), ApiError> {
        let fields = update.form_fields();
        let (status, text) = self.send(Method::POST, PROFILE_PATH, |r| r.form(&fields)).await?;
        expect_success(status, &text)
    }
}
