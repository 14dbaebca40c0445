//! Typed REST client for the Scoda backend.
//!
//! Each operation wraps exactly one HTTP call and returns the parsed payload.
//! Failures are folded into [`ApiError`]. The bearer token is pulled from an
//! injected [`TokenProvider`] at request time; the client never reads
//! persistent storage itself.
//!
//! Operations are grouped by backend area in the sub-modules.

mod auth;
mod error;
mod ideas;
mod insights;
mod token;

use std::sync::Arc;
use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;

pub use error::ApiError;
pub use token::{SessionToken, TokenProvider};

use error::extract_message;

pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
    tokens: Arc<dyn TokenProvider>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenProvider>) -> Result<Self, ApiError> {
        let base = Url::parse(&config.api_url)
            .map_err(|e| ApiError::Config(format!("invalid API URL '{}': {e}", config.api_url)))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::Config(format!(
                "API URL '{}' cannot carry a path",
                config.api_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::Config(format!("failed to build HTTP client: {e}")))?;

        tracing::debug!(base = %base, timeout = ?config.request_timeout, "API client ready");

        Ok(Self { http, base, tokens })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `base` extended with the given path segments (each percent-encoded).
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Start a request, stamping the provider's bearer token when one is
    /// available.
    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        self.request_as(method, segments, self.tokens.bearer_token().as_deref())
    }

    /// Start a request stamped with an explicit token, ignoring the provider.
    fn request_as(
        &self,
        method: Method,
        segments: &[&str],
        token: Option<&str>,
    ) -> RequestBuilder {
        let builder = self.http.request(method, self.url(segments));
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send the request; only transport failures are errors here.
    async fn execute(
        &self,
        builder: RequestBuilder,
        context: &'static str,
    ) -> Result<Response, ApiError> {
        let started = Instant::now();
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::from_transport(context, e))?;

        tracing::debug!(
            url = %response.url(),
            status = response.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "backend responded"
        );

        Ok(response)
    }

    /// Turn a non-2xx response into [`ApiError::Backend`].
    async fn failure(context: &'static str, response: Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = extract_message(status, &body);

        tracing::warn!(context, status = status.as_u16(), %message, "backend request failed");

        ApiError::Backend {
            context,
            status,
            message,
        }
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        context: &'static str,
    ) -> Result<T, ApiError> {
        let response = self.execute(builder, context).await?;
        Self::read_json(context, response).await
    }

    async fn send_empty(
        &self,
        builder: RequestBuilder,
        context: &'static str,
    ) -> Result<(), ApiError> {
        let response = self.execute(builder, context).await?;
        if !response.status().is_success() {
            return Err(Self::failure(context, response).await);
        }
        Ok(())
    }

    async fn read_json<T: DeserializeOwned>(
        context: &'static str,
        response: Response,
    ) -> Result<T, ApiError> {
        if !response.status().is_success() {
            return Err(Self::failure(context, response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::from_transport(context, e))
    }

    /// Liveness check. Never fails; any error reads as "down".
    pub async fn health(&self) -> bool {
        match self.request(Method::GET, &["health"]).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!(error = %e, "health check failed");
                false
            }
        }
    }
}
