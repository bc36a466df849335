//! short.io link and statistics operations.
//!
//! # Overview
//!
//! - [`ShortioClient`]: One async method per short.io operation
//! - [`LinkCollection`]: A page of links with lookup by id
//! - [`LinkRecord`]: A link as returned by the service
//! - [`LinkDraft`]: The payload for creating or updating a link
//! - [`LinkId`]: Link identifier, normalised from JSON numbers or strings
//! - [`ListLinksQuery`]: Paging options for listing links
//! - [`Period`]: Reporting period for statistics
//! - [`Confirmation`]: Acknowledgement of archive and delete
//! - [`ShortioError`]: Error type for all of the above
//!
//! # Example
//!
//! ```rust,ignore
//! use shortio_api::links::{ShortioClient, LinkDraft, Period};
//!
//! let client = ShortioClient::new("go.example.com", "12345", "sk_live_123")?;
//!
//! let drafts = vec![
//!     LinkDraft::new("https://example.com/a"),
//!     LinkDraft::new("https://example.com/b"),
//! ];
//! let created = client.create_links_bulk(&drafts).await?;
//!
//! let stats = client.get_domain_stats(Period::Last7, 0).await?;
//! ```

mod client;
mod collection;
mod errors;
mod types;

pub use client::{ShortioClient, MAX_BULK_LINKS, MIN_BULK_LINKS};
pub use collection::LinkCollection;
pub use errors::ShortioError;
pub use types::{
    Confirmation, ConfirmedAction, LinkDraft, LinkId, LinkRecord, ListLinksQuery, Period,
    DEFAULT_LIST_LIMIT,
};
