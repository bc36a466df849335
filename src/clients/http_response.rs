//! HTTP response types for the short.io API SDK.
//!
//! This module provides the [`HttpResponse`] type for accessing response
//! status, headers and the parsed JSON body.

use std::collections::HashMap;

/// An HTTP response from the short.io API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the top-level `error` field of the body, if present.
    ///
    /// short.io reports failures through this field, sometimes alongside a
    /// 2xx status. String errors are returned as-is; any other JSON value is
    /// rendered as compact JSON. A `null` error counts as absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shortio_api::HttpResponse;
    /// use std::collections::HashMap;
    /// use serde_json::json;
    ///
    /// let response = HttpResponse::new(200, HashMap::new(), json!({"error": "Link not found"}));
    /// assert_eq!(response.error_message(), Some("Link not found".to_string()));
    ///
    /// let response = HttpResponse::new(200, HashMap::new(), json!({"id": "1"}));
    /// assert_eq!(response.error_message(), None);
    /// ```
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        match self.body.get("error")? {
            serde_json::Value::Null => None,
            serde_json::Value::String(message) => Some(message.clone()),
            other => Some(other.to_string()),
        }
    }
}
