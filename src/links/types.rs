//! Value types exchanged with the short.io link and statistics endpoints.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::config::Domain;
use crate::links::errors::ShortioError;

/// Default page size for [`ListLinksQuery`], which is also the service maximum.
pub const DEFAULT_LIST_LIMIT: u32 = 150;

/// The canonical identifier of a short link.
///
/// short.io returns ids as JSON numbers on some endpoints and as strings on
/// others. Both are normalised to their decimal string form when a record is
/// ingested, so `1` and `"1"` compare equal.
///
/// # Example
///
/// ```rust
/// use shortio_api::LinkId;
///
/// assert_eq!(LinkId::from(2_u64), LinkId::from("2"));
/// let id: LinkId = serde_json::from_str("42").unwrap();
/// assert_eq!(id.as_ref(), "42");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkId(String);

impl LinkId {
    /// Normalises a JSON value into a link id.
    ///
    /// Returns `None` for values that cannot be identifiers (null, bools,
    /// arrays, objects, empty strings).
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.is_empty() => Some(Self(s.clone())),
            Value::Number(n) => Some(Self::from_number(n)),
            _ => None,
        }
    }

    fn from_number(n: &serde_json::Number) -> Self {
        if let Some(u) = n.as_u64() {
            return Self(u.to_string());
        }
        if let Some(i) = n.as_i64() {
            return Self(i.to_string());
        }
        match n.as_f64() {
            #[allow(clippy::cast_possible_truncation)]
            Some(f) if f.fract() == 0.0 && f.abs() < 9.0e15 => Self((f as i64).to_string()),
            _ => Self(n.to_string()),
        }
    }
}

impl AsRef<str> for LinkId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LinkId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for LinkId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&String> for LinkId {
    fn from(id: &String) -> Self {
        Self(id.clone())
    }
}

impl From<&Self> for LinkId {
    fn from(id: &Self) -> Self {
        id.clone()
    }
}

macro_rules! link_id_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for LinkId {
                fn from(id: $t) -> Self {
                    Self(id.to_string())
                }
            }
        )*
    };
}

link_id_from_int!(u32, u64, i32, i64, usize);

impl Serialize for LinkId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for LinkId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LinkIdVisitor;

        impl<'de> Visitor<'de> for LinkIdVisitor {
            type Value = LinkId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a link id as a string or a number")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<LinkId, E> {
                Ok(LinkId(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<LinkId, E> {
                Ok(LinkId(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<LinkId, E> {
                serde_json::Number::from_f64(v)
                    .map(|n| LinkId::from_number(&n))
                    .ok_or_else(|| E::custom("link id must be a finite number"))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<LinkId, E> {
                if v.is_empty() {
                    return Err(E::custom("link id cannot be empty"));
                }
                Ok(LinkId(v.to_string()))
            }
        }

        deserializer.deserialize_any(LinkIdVisitor)
    }
}

/// A short link as returned by the service.
///
/// The record keeps the full JSON object the service sent. Its `id` is
/// normalised to a [`LinkId`] once, on ingestion; when `id` is absent the
/// string form `idString` is used instead.
///
/// # Example
///
/// ```rust
/// use shortio_api::{LinkRecord, LinkId};
/// use serde_json::json;
///
/// let record = LinkRecord::try_from(json!({
///     "id": 1234,
///     "originalURL": "https://example.com",
///     "path": "promo",
/// })).unwrap();
///
/// assert_eq!(record.id(), Some(&LinkId::from("1234")));
/// assert_eq!(record.original_url(), Some("https://example.com"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct LinkRecord {
    id: Option<LinkId>,
    fields: Map<String, Value>,
}

impl LinkRecord {
    /// Builds a record from a JSON object, normalising its id.
    #[must_use]
    pub fn from_map(fields: Map<String, Value>) -> Self {
        let id = fields
            .get("id")
            .and_then(LinkId::from_value)
            .or_else(|| fields.get("idString").and_then(LinkId::from_value));
        Self { id, fields }
    }

    /// Returns the normalised id, if the record has one.
    #[must_use]
    pub const fn id(&self) -> Option<&LinkId> {
        self.id.as_ref()
    }

    /// Returns the destination URL.
    #[must_use]
    pub fn original_url(&self) -> Option<&str> {
        self.str_field("originalURL")
    }

    /// Returns the path part of the short URL.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.str_field("path")
    }

    /// Returns the full short URL.
    #[must_use]
    pub fn short_url(&self) -> Option<&str> {
        self.str_field("shortURL")
    }

    /// Returns the link title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    /// Returns the domain the link belongs to, when the service includes it.
    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        self.str_field("domain")
    }

    /// Returns a raw field of the record.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns the underlying JSON object.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consumes the record and returns the underlying JSON object.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

impl TryFrom<Value> for LinkRecord {
    type Error = ShortioError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self::from_map(fields)),
            other => Err(ShortioError::unexpected(format!(
                "expected a link object, got {other}"
            ))),
        }
    }
}

impl Serialize for LinkRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.fields.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LinkRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Map::deserialize(deserializer).map(Self::from_map)
    }
}

/// A caller-owned payload for creating or updating a link.
///
/// Client operations never modify a draft. They copy it into a fresh
/// request body and set `domain` on the copy.
///
/// # Example
///
/// ```rust
/// use shortio_api::LinkDraft;
///
/// let draft = LinkDraft::new("https://example.com/landing")
///     .path("promo")
///     .title("Spring promo")
///     .tags(["spring", "email"]);
///
/// assert_eq!(draft.original_url(), Some("https://example.com/landing"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkDraft(Map<String, Value>);

impl LinkDraft {
    /// Creates a draft pointing at `original_url`.
    #[must_use]
    pub fn new(original_url: impl Into<String>) -> Self {
        Self::default().field("originalURL", original_url.into())
    }

    /// Sets the short path. The service generates one when absent.
    #[must_use]
    pub fn path(self, path: impl Into<String>) -> Self {
        self.field("path", path.into())
    }

    /// Sets the link title.
    #[must_use]
    pub fn title(self, title: impl Into<String>) -> Self {
        self.field("title", title.into())
    }

    /// Sets the link tags.
    #[must_use]
    pub fn tags<I, T>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let tags: Vec<Value> = tags.into_iter().map(|t| Value::String(t.into())).collect();
        self.field("tags", tags)
    }

    /// Allows creating a link whose `originalURL` already has a short link.
    #[must_use]
    pub fn allow_duplicates(self, allow: bool) -> Self {
        self.field("allowDuplicates", allow)
    }

    /// Sets the expiration, as accepted by the service (timestamp or ISO date).
    #[must_use]
    pub fn expires_at(self, expires_at: impl Into<Value>) -> Self {
        self.field("expiresAt", expires_at)
    }

    /// Sets an arbitrary field.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Returns the destination URL, if set to a string.
    #[must_use]
    pub fn original_url(&self) -> Option<&str> {
        self.0.get("originalURL").and_then(Value::as_str)
    }

    /// Returns the draft as a JSON object.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Checks that the draft names a non-empty `originalURL`.
    pub(crate) fn require_original_url(&self) -> Result<(), ShortioError> {
        match self.original_url() {
            Some(url) if !url.trim().is_empty() => Ok(()),
            _ => Err(ShortioError::invalid_argument(
                "originalURL",
                "a non-empty originalURL is required",
            )),
        }
    }

    /// Builds the outgoing request body: a copy of the draft with `domain` overridden.
    pub(crate) fn to_payload(&self, domain: &Domain) -> Value {
        let mut payload = self.0.clone();
        payload.insert("domain".to_string(), Value::String(domain.as_ref().to_string()));
        Value::Object(payload)
    }
}

impl From<Map<String, Value>> for LinkDraft {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Paging and filtering options for listing links.
///
/// # Example
///
/// ```rust
/// use shortio_api::ListLinksQuery;
///
/// let query = ListLinksQuery::default();
/// assert_eq!(query.limit, 150);
/// assert_eq!(query.offset, 0);
///
/// let query = ListLinksQuery::default().limit(50).offset(100).tag("spring");
/// assert_eq!(query.tag.as_deref(), Some("spring"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListLinksQuery {
    /// Page size, passed through as-is.
    pub limit: u32,
    /// Number of links to skip.
    pub offset: u64,
    /// Only return links carrying this tag.
    pub tag: Option<String>,
}

impl Default for ListLinksQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
            offset: 0,
            tag: None,
        }
    }
}

impl ListLinksQuery {
    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the offset.
    #[must_use]
    pub const fn offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// Filters by tag.
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// Reporting period accepted by the statistics endpoints.
///
/// # Example
///
/// ```rust
/// use shortio_api::Period;
///
/// let period: Period = "last30".parse().unwrap();
/// assert_eq!(period, Period::Last30);
/// assert_eq!(period.to_string(), "last30");
///
/// assert!("bogus".parse::<Period>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Period {
    /// The current day.
    Today,
    /// The previous day.
    Yesterday,
    /// The current week.
    Week,
    /// The current month.
    Month,
    /// The previous calendar month.
    LastMonth,
    /// The last seven days.
    Last7,
    /// The last thirty days.
    Last30,
    /// All time.
    Total,
}

impl Period {
    /// Every period, in the order the service documents them.
    pub const ALL: [Self; 8] = [
        Self::Today,
        Self::Yesterday,
        Self::Week,
        Self::Month,
        Self::LastMonth,
        Self::Last7,
        Self::Last30,
        Self::Total,
    ];

    /// Returns the wire name of the period.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Yesterday => "yesterday",
            Self::Week => "week",
            Self::Month => "month",
            Self::LastMonth => "lastmonth",
            Self::Last7 => "last7",
            Self::Last30 => "last30",
            Self::Total => "total",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = ShortioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|period| period.as_str() == s)
            .ok_or_else(|| {
                ShortioError::invalid_argument(
                    "period",
                    format!(
                        "'{s}' is not one of today, yesterday, week, month, lastmonth, last7, last30, total"
                    ),
                )
            })
    }
}

/// The kind of action a [`Confirmation`] acknowledges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmedAction {
    /// The link was archived.
    Archive,
    /// The link was deleted.
    Delete,
}

/// Acknowledgement returned by archive and delete operations.
///
/// Serialises as `{"action":"archive","result":true}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    /// What was done.
    pub action: ConfirmedAction,
    /// Whether it succeeded. Always `true` for values returned by the client.
    pub result: bool,
}

impl Confirmation {
    pub(crate) const fn succeeded(action: ConfirmedAction) -> Self {
        Self {
            action,
            result: true,
        }
    }
}
