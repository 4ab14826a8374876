/*
[INPUT]:  HTTP configuration (base URL, timeouts) and per-request options
[OUTPUT]: Configured reqwest client and normalized request outcomes
[POS]:    HTTP layer - core client and request dispatch
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use std::path::Path;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::http::outcome::{Outcome, ResponseData, failure_from_error_body};
use crate::http::{AuthgateError, Result};
use crate::session::SessionStore;

/// Path prefix shared by all API endpoints
const API_BASE_PATH: &str = "/api";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Options for a single API request: method (GET by default), extra headers
/// merged over the defaults, and an optional pre-serialized body.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    method: Method,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Main HTTP client for the Authgate API
#[derive(Debug)]
pub struct AuthgateClient {
    http_client: Client,
    base_url: Url,
    session: SessionStore,
}

impl AuthgateClient {
    /// Create a new client with default configuration and session directory
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(base_url: &str, config: ClientConfig) -> Result<Self> {
        Self::with_session_dir(base_url, config, SessionStore::default_dir())
    }

    /// Create a new client with an explicit session directory
    pub fn with_session_dir(
        base_url: &str,
        config: ClientConfig,
        session_dir: impl AsRef<Path>,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            session: SessionStore::new(session_dir),
        })
    }

    /// Session storage backing this client
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// True iff a session token is stored
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Cached user record from the last login, if any
    pub fn user(&self) -> Result<Option<Value>> {
        self.session.user()
    }

    /// Build full URL for an API endpoint
    fn api_url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(&format!("{API_BASE_PATH}{path}"))?)
    }

    /// Issue one API request and normalize the result.
    ///
    /// Never returns an error: transport failures, malformed JSON bodies,
    /// and error statuses are all folded into `Outcome::Failure`. Exactly
    /// one round trip, no retries.
    pub async fn request(&self, path: &str, options: RequestOptions) -> Outcome {
        match self.dispatch(path, options).await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(path, error = %err, "request failed before a response was normalized");
                Outcome::failure(err.to_string())
            }
        }
    }

    async fn dispatch(&self, path: &str, options: RequestOptions) -> Result<Outcome> {
        let url = self.api_url(path)?;

        // Defaults first, caller headers override, token wins last.
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| AuthgateError::InvalidHeader(e.to_string()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| AuthgateError::InvalidHeader(e.to_string()))?;
            headers.insert(name, value);
        }
        if let Some(token) = self.session.token()? {
            let value = HeaderValue::from_str(&format!("Token {token}"))
                .map_err(|e| AuthgateError::InvalidHeader(e.to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        debug!(method = %options.method, %url, "dispatching API request");

        let mut builder = self.http_client.request(options.method, url).headers(headers);
        if let Some(body) = options.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains("application/json"));

        let text = response.text().await?;
        let data = if is_json {
            ResponseData::Json(serde_json::from_str(&text)?)
        } else {
            ResponseData::Text(text)
        };

        if status.is_success() {
            debug!(status = status.as_u16(), "API request succeeded");
            Ok(Outcome::Success { data })
        } else {
            warn!(status = status.as_u16(), "API returned an error response");
            Ok(failure_from_error_body(status, &data))
        }
    }
}
