//! # short.io API Rust SDK
//!
//! A Rust SDK for the [short.io](https://short.io) URL shortening API:
//! link creation, lookup, bulk creation, update, archiving, deletion and
//! domain statistics.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ShortioConfig`] and [`ShortioConfigBuilder`]
//! - Validated newtypes for the account credentials
//! - An async client, [`ShortioClient`], with one method per remote operation
//! - [`LinkCollection`] for pages of links, with lookup by id
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shortio_api::{ShortioClient, LinkDraft, ListLinksQuery};
//!
//! let client = ShortioClient::new("go.example.com", "12345", "sk_live_123")?;
//!
//! // Create a link
//! let link = client
//!     .create_link(&LinkDraft::new("https://example.com/landing").path("promo"))
//!     .await?;
//! println!("Short URL: {:?}", link.short_url());
//!
//! // List the first page of links and find the new one
//! let page = client.list_links(&ListLinksQuery::default()).await?;
//! let found = page.get(link.id().unwrap())?;
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use shortio_api::{ShortioConfig, Domain, DomainId, ApiKey, HostUrl};
//!
//! let config = ShortioConfig::builder()
//!     .domain(Domain::new("go.example.com").unwrap())
//!     .domain_id(DomainId::new("12345").unwrap())
//!     .api_key(ApiKey::new("sk_live_123").unwrap())
//!     .user_agent_prefix("MyApp/1.0")
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Errors
//!
//! - [`ConfigError`]: Invalid credentials or configuration
//! - [`ShortioError`]: Per-call failures, from local argument checks
//!   (`InvalidArgument`) to service-reported errors (`Failed`)
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction; arguments are
//!   checked before any request is sent
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No hidden policy**: Requests are sent once, without retry or caching

pub mod clients;
pub mod config;
pub mod error;
pub mod links;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, Domain, DomainId, HostUrl, ShortioConfig, ShortioConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};

// Re-export link types
pub use links::{
    Confirmation, ConfirmedAction, LinkCollection, LinkDraft, LinkId, LinkRecord, ListLinksQuery,
    Period, ShortioClient, ShortioError,
};
