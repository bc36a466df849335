//! Read-only view over a page of links.

use serde_json::Value;

use crate::links::errors::ShortioError;
use crate::links::types::{LinkId, LinkRecord};

/// An immutable collection of links plus the total count reported by the service.
///
/// `count` is independent of `links().len()`: listing endpoints paginate, so
/// the count may cover links that are not part of this page.
///
/// # Example
///
/// ```rust
/// use shortio_api::{LinkCollection, LinkRecord};
/// use serde_json::json;
///
/// let links = vec![
///     LinkRecord::try_from(json!({"id": 1})).unwrap(),
///     LinkRecord::try_from(json!({"id": "2"})).unwrap(),
/// ];
/// let collection = LinkCollection::new(links, 10);
///
/// assert_eq!(collection.count(), 10);
/// assert_eq!(collection.get(2).unwrap().get("id"), Some(&json!("2")));
/// assert!(collection.get(99).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinkCollection {
    count: u64,
    links: Vec<LinkRecord>,
}

impl LinkCollection {
    /// Creates a collection from a page of links and the total count.
    #[must_use]
    pub const fn new(links: Vec<LinkRecord>, count: u64) -> Self {
        Self { count, links }
    }

    /// Returns the first link whose id equals `id`.
    ///
    /// Ids are compared in their normalised form, so numeric and string
    /// forms of the same id match.
    ///
    /// # Errors
    ///
    /// Returns [`ShortioError::NotFound`] if no link matches.
    pub fn get(&self, id: impl Into<LinkId>) -> Result<&LinkRecord, ShortioError> {
        let id = id.into();
        self.links
            .iter()
            .find(|link| link.id() == Some(&id))
            .ok_or(ShortioError::NotFound { id })
    }

    /// Returns the total count reported by the service.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Returns the links in service order.
    #[must_use]
    pub fn links(&self) -> &[LinkRecord] {
        &self.links
    }

    /// Returns the number of links held by this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns `true` if this page holds no links.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Iterates over the links in service order.
    pub fn iter(&self) -> std::slice::Iter<'_, LinkRecord> {
        self.links.iter()
    }

    /// Consumes the collection and returns its links.
    #[must_use]
    pub fn into_links(self) -> Vec<LinkRecord> {
        self.links
    }

    /// Reshapes a `{count, links}` listing body.
    ///
    /// A missing `count` falls back to the number of links received.
    pub(crate) fn from_listing(body: Value) -> Result<Self, ShortioError> {
        let Value::Object(mut fields) = body else {
            return Err(ShortioError::unexpected("expected a links listing object"));
        };
        let links = match fields.remove("links") {
            Some(Value::Array(items)) => Self::records(items)?,
            _ => {
                return Err(ShortioError::unexpected(
                    "listing is missing its 'links' array",
                ))
            }
        };
        let count = fields
            .get("count")
            .and_then(Value::as_u64)
            .unwrap_or(links.len() as u64);
        Ok(Self::new(links, count))
    }

    /// Reshapes a bulk-create body: an array of links, or a listing object.
    ///
    /// Per-link failures (`{"error": ...}` entries) are kept as records so
    /// the links that were created are not lost.
    pub(crate) fn from_bulk(body: Value) -> Result<Self, ShortioError> {
        match body {
            Value::Array(items) => {
                let links = Self::records(items)?;
                let count = links.len() as u64;
                Ok(Self::new(links, count))
            }
            other => Self::from_listing(other),
        }
    }

    fn records(items: Vec<Value>) -> Result<Vec<LinkRecord>, ShortioError> {
        items.into_iter().map(LinkRecord::try_from).collect()
    }
}

impl IntoIterator for LinkCollection {
    type Item = LinkRecord;
    type IntoIter = std::vec::IntoIter<LinkRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.into_iter()
    }
}

impl<'a> IntoIterator for &'a LinkCollection {
    type Item = &'a LinkRecord;
    type IntoIter = std::slice::Iter<'a, LinkRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}
