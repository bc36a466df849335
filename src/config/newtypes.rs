//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated short.io API key.
///
/// This newtype ensures the key is non-empty and masks its value in debug
/// output so it never ends up in logs.
///
/// # Example
///
/// ```rust
/// use shortio_api::ApiKey;
///
/// let key = ApiKey::new("sk_live_123").unwrap();
/// assert_eq!(key.as_ref(), "sk_live_123");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A vanity hostname managed under a short.io account.
///
/// # Example
///
/// ```rust
/// use shortio_api::Domain;
///
/// let domain = Domain::new("link.example.com").unwrap();
/// assert_eq!(domain.as_ref(), "link.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Domain(String);

impl Domain {
    /// Creates a new validated domain.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyDomain`] if the domain is empty.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let domain = domain.into().trim().to_string();
        if domain.is_empty() {
            return Err(ConfigError::EmptyDomain);
        }
        Ok(Self(domain))
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Domain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Domain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// The identifier of a short.io domain.
///
/// short.io hands out numeric ids, but they travel as path segments and
/// query values, so the id is stored in its textual form. Empty ids and
/// the id `0` are rejected.
///
/// # Example
///
/// ```rust
/// use shortio_api::DomainId;
///
/// let id = DomainId::new("12345").unwrap();
/// assert_eq!(id.as_ref(), "12345");
///
/// let id = DomainId::try_from(12345_u64).unwrap();
/// assert_eq!(id.to_string(), "12345");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DomainId(String);

impl DomainId {
    /// Creates a new validated domain identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyDomainId`] if the id is empty, or
    /// [`ConfigError::ZeroDomainId`] if it is numerically zero.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into().trim().to_string();
        if id.is_empty() {
            return Err(ConfigError::EmptyDomainId);
        }
        if id.parse::<u64>() == Ok(0) {
            return Err(ConfigError::ZeroDomainId);
        }
        Ok(Self(id))
    }
}

impl TryFrom<u64> for DomainId {
    type Error = ConfigError;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        Self::new(id.to_string())
    }
}

impl AsRef<str> for DomainId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated base URL for one of the short.io hosts.
///
/// This newtype validates that the URL has a proper format with a scheme.
/// Trailing slashes are stripped so paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use shortio_api::HostUrl;
///
/// let url = HostUrl::new("https://api.short.io/").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), Some("api.short.io"));
/// assert_eq!(url.as_ref(), "https://api.short.io");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidHostUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
