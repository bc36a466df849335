//! Error types for short.io link operations.
//!
//! - [`ShortioError::InvalidArgument`]: Bad per-call input, detected before any request is sent
//! - [`ShortioError::Failed`]: The service reported an `error` or answered with a non-2xx status
//! - [`ShortioError::Http`]: The request could not be delivered
//! - [`ShortioError::NotFound`]: A [`LinkCollection`](crate::links::LinkCollection) lookup missed
//! - [`ShortioError::UnexpectedResponse`]: The response JSON had an unusable shape
//!
//! # Example
//!
//! ```rust,ignore
//! use shortio_api::links::ShortioError;
//!
//! match client.get_link_by_path("promo").await {
//!     Ok(link) => println!("{:?}", link.original_url()),
//!     Err(ShortioError::InvalidArgument { argument, reason }) => {
//!         println!("bad {argument}: {reason}");
//!     }
//!     Err(e) if e.is_failed() => println!("short.io rejected the call: {e}"),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use crate::clients::{HttpError, InvalidHttpRequestError};
use crate::links::types::LinkId;
use thiserror::Error;

/// Error type for short.io link and statistics operations.
#[derive(Debug, Error)]
pub enum ShortioError {
    /// A call argument was rejected locally; nothing was sent.
    #[error("Invalid argument '{argument}': {reason}")]
    InvalidArgument {
        /// The name of the offending argument.
        argument: &'static str,
        /// Why the argument was rejected.
        reason: String,
    },

    /// The remote service reported a failure.
    #[error("short.io request failed: {message}")]
    Failed {
        /// The service's error message.
        message: String,
        /// The HTTP status code of the response.
        code: Option<u16>,
    },

    /// The request could not be delivered or its response could not be read.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// No link with the requested id exists in the collection.
    #[error("Can't find link '{id}' in the links list.")]
    NotFound {
        /// The identifier that was looked up.
        id: LinkId,
    },

    /// The service answered, but not with the expected JSON shape.
    #[error("Unexpected short.io response: {reason}")]
    UnexpectedResponse {
        /// What was wrong with the response.
        reason: String,
    },
}

impl ShortioError {
    /// Returns `true` for remote and transport failures.
    ///
    /// These are the errors that surface only after a request was attempted.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. } | Self::Http(_))
    }

    pub(crate) fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    pub(crate) fn unexpected(reason: impl Into<String>) -> Self {
        Self::UnexpectedResponse {
            reason: reason.into(),
        }
    }
}

impl From<InvalidHttpRequestError> for ShortioError {
    fn from(error: InvalidHttpRequestError) -> Self {
        Self::Http(HttpError::InvalidRequest(error))
    }
}
