use crate::config::Config;
use crate::models::error::AppError;
use crate::services::endpoints::{Endpoint, QueryParams};
use chrono::Utc;
use reqwest::{StatusCode, Url};
use serde_json::Value;

// API CONFIGURATION
/// Configuration for the AEMO dashboard API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    origin: String,
    prefix: String,
    api_key: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Full URL for an upstream path: origin, API prefix, path, then the
    /// query string.
    pub fn url_for(&self, path: &str, params: &QueryParams) -> Result<Url, AppError> {
        let raw = format!(
            "{}{}/{}",
            self.origin.trim_end_matches('/'),
            self.prefix.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let mut url = Url::parse(&raw)
            .map_err(|e| AppError::ConfigError(format!("Invalid API URL '{raw}': {e}")))?;

        if !params.is_empty() {
            let mut query = url.query_pairs_mut();
            for (key, value) in params {
                query.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    origin: Option<String>,
    prefix: Option<String>,
    api_key: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets the origin the proxy is served from (primarily for testing).
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Builds the `ApiConfig`. Without an explicit origin, the build-time
    /// override is used, then the page origin, then a local default.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            origin: self
                .origin
                .or_else(|| Config::api_origin().map(str::to_string))
                .or_else(browser_origin)
                .unwrap_or_else(|| Config::DEFAULT_ORIGIN.to_string()),
            prefix: self.prefix.unwrap_or_else(|| Config::API_PREFIX.to_string()),
            api_key: self
                .api_key
                .unwrap_or_else(|| Config::api_key().to_string()),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn browser_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_origin() -> Option<String> {
    None
}

// AEMO CLIENT
/// HTTP gateway for the dashboard API. No retries happen here.
#[derive(Debug, Clone)]
pub struct AemoClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl AemoClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches one of the catalogued endpoints.
    pub async fn fetch_endpoint(&self, endpoint: &Endpoint) -> Result<Value, AppError> {
        self.fetch(&endpoint.path(), &endpoint.params()).await
    }

    /// The GET request for `path`, with the API key header attached.
    pub fn request(&self, path: &str, params: &QueryParams) -> Result<reqwest::Request, AppError> {
        let url = self.config.url_for(path, params)?;
        self.http
            .get(url)
            .header(Config::API_KEY_HEADER, self.config.api_key())
            .build()
            .map_err(|e| AppError::ConfigError(format!("Invalid request for {path}: {e}")))
    }

    /// Issues a GET for `path` and returns the raw JSON body.
    ///
    /// Logs path, status and duration whether the call succeeds or not.
    pub async fn fetch(&self, path: &str, params: &QueryParams) -> Result<Value, AppError> {
        let request = self.request(path, params)?;
        let started = Utc::now();

        let result = self.http.execute(request).await;
        let duration_ms = (Utc::now() - started).num_milliseconds();

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(path, duration_ms, error = %e, "upstream request failed");
                return Err(classify_error(&e));
            }
        };

        let status = response.status();
        if let Err(e) = check_status(status, path) {
            tracing::warn!(path, status = status.as_u16(), duration_ms, "upstream request failed");
            return Err(e);
        }
        tracing::info!(path, status = status.as_u16(), duration_ms, "upstream request");

        response
            .json::<Value>()
            .await
            .map_err(|e| AppError::DataError(format!("Failed to parse response from {path}: {e}")))
    }
}

/// Converts a reqwest error into an appropriate `AppError`.
fn classify_error(error: &reqwest::Error) -> AppError {
    if error.is_timeout() {
        AppError::Network(format!("Request timeout: {error}"))
    } else if error.is_request() {
        AppError::Network(format!("Request error: {error}"))
    } else {
        AppError::Network(format!("Network error: {error}"))
    }
}

/// Passes 2xx statuses through; anything else becomes `AppError::Upstream`.
pub fn check_status(status: StatusCode, path: &str) -> Result<(), AppError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(error_for_status(status, path))
    }
}

/// Creates the typed upstream failure for a non-success status.
pub fn error_for_status(status: StatusCode, path: &str) -> AppError {
    AppError::Upstream {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        path: path.to_string(),
    }
}
