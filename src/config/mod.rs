//! Configuration types for the short.io API SDK.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ShortioConfig`]: Account credentials plus host overrides
//! - [`ShortioConfigBuilder`]: A builder for constructing [`ShortioConfig`] instances
//! - [`Domain`], [`DomainId`], [`ApiKey`]: Validated credential newtypes
//! - [`HostUrl`]: A validated base URL for the API or statistics host
//!
//! # Example
//!
//! ```rust
//! use shortio_api::{ShortioConfig, Domain, DomainId, ApiKey};
//!
//! let config = ShortioConfig::builder()
//!     .domain(Domain::new("go.example.com").unwrap())
//!     .domain_id(DomainId::new("12345").unwrap())
//!     .api_key(ApiKey::new("sk_live_123").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_host().as_ref(), "https://api.short.io");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, Domain, DomainId, HostUrl};

use crate::error::ConfigError;

/// Default host for link management endpoints.
pub const DEFAULT_API_HOST: &str = "https://api.short.io";

/// Default host for statistics endpoints.
pub const DEFAULT_STATISTICS_HOST: &str = "https://statistics.short.io";

/// Configuration for the short.io API SDK.
///
/// Holds the account credentials every request needs and the base URLs of
/// the two short.io hosts. The hosts default to the public endpoints and are
/// only overridden to point at a proxy or a mock server.
///
/// # Thread Safety
///
/// `ShortioConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ShortioConfig {
    domain: Domain,
    domain_id: DomainId,
    api_key: ApiKey,
    api_host: HostUrl,
    statistics_host: HostUrl,
    user_agent_prefix: Option<String>,
}

impl ShortioConfig {
    /// Creates a new builder for constructing a `ShortioConfig`.
    #[must_use]
    pub fn builder() -> ShortioConfigBuilder {
        ShortioConfigBuilder::new()
    }

    /// Returns the managed domain.
    #[must_use]
    pub const fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Returns the managed domain identifier.
    #[must_use]
    pub const fn domain_id(&self) -> &DomainId {
        &self.domain_id
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the base URL for link endpoints.
    #[must_use]
    pub const fn api_host(&self) -> &HostUrl {
        &self.api_host
    }

    /// Returns the base URL for statistics endpoints.
    #[must_use]
    pub const fn statistics_host(&self) -> &HostUrl {
        &self.statistics_host
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ShortioConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShortioConfig>();
};

/// Builder for constructing [`ShortioConfig`] instances.
///
/// Required fields are `domain`, `domain_id` and `api_key`.
///
/// # Defaults
///
/// - `api_host`: `https://api.short.io`
/// - `statistics_host`: `https://statistics.short.io`
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use shortio_api::{ShortioConfig, Domain, DomainId, ApiKey, HostUrl};
///
/// let config = ShortioConfig::builder()
///     .domain(Domain::new("go.example.com").unwrap())
///     .domain_id(DomainId::new("12345").unwrap())
///     .api_key(ApiKey::new("sk_live_123").unwrap())
///     .api_host(HostUrl::new("http://localhost:8080").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ShortioConfigBuilder {
    domain: Option<Domain>,
    domain_id: Option<DomainId>,
    api_key: Option<ApiKey>,
    api_host: Option<HostUrl>,
    statistics_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ShortioConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the managed domain (required).
    #[must_use]
    pub fn domain(mut self, domain: Domain) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Sets the managed domain identifier (required).
    #[must_use]
    pub fn domain_id(mut self, domain_id: DomainId) -> Self {
        self.domain_id = Some(domain_id);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Overrides the base URL for link endpoints.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Overrides the base URL for statistics endpoints.
    #[must_use]
    pub fn statistics_host(mut self, host: HostUrl) -> Self {
        self.statistics_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ShortioConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `domain`, `domain_id`
    /// or `api_key` is not set.
    pub fn build(self) -> Result<ShortioConfig, ConfigError> {
        let domain = self
            .domain
            .ok_or(ConfigError::MissingRequiredField { field: "domain" })?;
        let domain_id = self
            .domain_id
            .ok_or(ConfigError::MissingRequiredField { field: "domain_id" })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let api_host = match self.api_host {
            Some(host) => host,
            None => HostUrl::new(DEFAULT_API_HOST)?,
        };
        let statistics_host = match self.statistics_host {
            Some(host) => host,
            None => HostUrl::new(DEFAULT_STATISTICS_HOST)?,
        };

        Ok(ShortioConfig {
            domain,
            domain_id,
            api_key,
            api_host,
            statistics_host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
