//! Client for the remote shortening service.
//!
//! The service exposes a single endpoint, `POST {base}/api/v1`, that accepts a
//! [`ShortenRequest`] and answers with a [`ShortenedLink`] on success or an
//! optional `{ "error": "..." }` body otherwise.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

/// Message shown when a failure carries no message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

const ENDPOINT_PATH: &str = "/api/v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortenRequest {
    pub url: String,
    /// Custom alias. Left out of the JSON body entirely when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,
    /// Hours until the short link expires.
    pub expiry: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenedLink {
    pub url: String,
    pub short: String,
    pub expiry: i64,
    pub rate_limit: i64,
    /// Minutes until the rate limit window resets.
    pub rate_limit_reset: i64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// A failed shortening call. `Display` yields the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("{}", transport_message(.0))]
    Transport(String),

    #[error("invalid response from shortening service: {0}")]
    InvalidResponse(String),
}

fn transport_message(message: &str) -> &str {
    if message.is_empty() {
        FALLBACK_ERROR_MESSAGE
    } else {
        message
    }
}

impl ApiError {
    /// Builds a rejection from a non-success response, preferring the body's
    /// `error` field and falling back to the status code.
    pub fn rejected(status: StatusCode, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.error)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| format!("Request failed with {}", status.as_u16()));

        Self::Rejected { status, message }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(error.to_string())
    }
}

#[async_trait]
pub trait ShortenApi: Send + Sync {
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenedLink, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpShortenApi {
    client: Client,
    endpoint: Url,
}

impl HttpShortenApi {
    pub fn new(client: Client, base: &Url) -> Result<Self, url::ParseError> {
        let endpoint = Url::parse(&format!(
            "{}{ENDPOINT_PATH}",
            base.as_str().trim_end_matches('/')
        ))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ShortenApi for HttpShortenApi {
    #[instrument(skip_all)]
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenedLink, ApiError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        debug!(endpoint = %self.endpoint, %status, "shortening service responded");

        if !status.is_success() {
            // an unreadable error body is treated like an empty one
            let body = response.bytes().await.unwrap_or_default();
            return Err(ApiError::rejected(status, &body));
        }

        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|err| ApiError::InvalidResponse(err.to_string()))
    }
}
