//! HTTP client types for short.io API communication.
//!
//! This module provides the transport layer used by
//! [`ShortioClient`](crate::links::ShortioClient). It knows how to
//! authenticate, send and parse a request, but nothing about links.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client bound to one short.io host
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods
//! - [`DataType`]: Content types for request bodies
//!
//! # Example
//!
//! ```rust,ignore
//! use shortio_api::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let client = HttpClient::new(config.api_host(), &config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/links/expand")
//!     .query_param("domain", "go.example.com")
//!     .query_param("path", "promo")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
