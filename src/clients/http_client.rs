//! HTTP client for short.io API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests against one short.io host.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{HostUrl, ShortioConfig};
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to a short.io host.
///
/// The client handles:
/// - URL construction from the host base URL and the request path
/// - Default headers including `authorization`, `accept` and `user-agent`
/// - JSON body parsing
///
/// Requests are sent exactly once. There is no retry and no timeout beyond
/// the transport defaults.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shortio_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let client = HttpClient::new(config.api_host(), &config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/api/links")
///     .query_param("domain_id", "12345")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
pub struct HttpClient {
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.short.io`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Keeps the API key out of debug output and logs.
impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: HashMap<&str, &str> = self
            .default_headers
            .iter()
            .map(|(name, value)| {
                let value = if name.eq_ignore_ascii_case("authorization") {
                    "*****"
                } else {
                    value.as_str()
                };
                (name.as_str(), value)
            })
            .collect();

        f.debug_struct("HttpClient")
            .field("base_uri", &self.base_uri)
            .field("default_headers", &headers)
            .finish_non_exhaustive()
    }
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientInit`] if the underlying reqwest
    /// client cannot be created (e.g. TLS initialisation failure).
    pub fn new(base_uri: &HostUrl, config: &ShortioConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}short.io API Library v{SDK_VERSION} | Rust");

        let mut default_headers = HashMap::new();
        default_headers.insert("user-agent".to_string(), user_agent);
        default_headers.insert("accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "authorization".to_string(),
            config.api_key().as_ref().to_string(),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| ConfigError::HttpClientInit {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_uri: base_uri.as_ref().to_string(),
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Builds the full URL for a request path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_uri, path.trim_start_matches('/'))
    }

    /// Sends an HTTP request to the short.io API.
    ///
    /// Any 2xx response is returned as-is, even when the body reports an
    /// `error`; interpreting the body is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.path);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body_type) = &request.body_type {
            req_builder = req_builder.header("content-type", body_type.as_content_type());
        }

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(method = %request.http_method, url = %url, "sending short.io request");

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        let body = if body_text.trim().is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text)
                .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
        };

        tracing::debug!(status = code, url = %url, "received short.io response");

        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        let message = response
            .error_message()
            .unwrap_or_else(|| format!("HTTP {code}: {}", response.body));

        Err(HttpError::Response(HttpResponseError {
            code,
            message,
            body: response.body,
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
