//! The short.io link client.

use std::collections::HashMap;

use serde_json::{json, Value};

use crate::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{ApiKey, Domain, DomainId, ShortioConfig};
use crate::error::ConfigError;
use crate::links::collection::LinkCollection;
use crate::links::errors::ShortioError;
use crate::links::types::{
    Confirmation, ConfirmedAction, LinkDraft, LinkId, LinkRecord, ListLinksQuery, Period,
};

/// Fewest links accepted by a bulk create.
pub const MIN_BULK_LINKS: usize = 2;

/// Most links accepted by a bulk create.
pub const MAX_BULK_LINKS: usize = 1000;

/// Client for the short.io link and statistics API.
///
/// Holds the account credentials and exposes one async method per remote
/// operation. Every call builds its own request from the immutable
/// configuration, so a single client can serve concurrent tasks.
///
/// Arguments are validated before anything is sent; those failures are
/// reported as [`ShortioError::InvalidArgument`].
///
/// # Example
///
/// ```rust,ignore
/// use shortio_api::{ShortioClient, LinkDraft, ListLinksQuery};
///
/// let client = ShortioClient::new("go.example.com", "12345", "sk_live_123")?;
///
/// let link = client
///     .create_link(&LinkDraft::new("https://example.com").path("promo"))
///     .await?;
///
/// let page = client.list_links(&ListLinksQuery::default()).await?;
/// let same = page.get(link.id().unwrap())?;
/// ```
#[derive(Debug)]
pub struct ShortioClient {
    config: ShortioConfig,
    api: HttpClient,
    statistics: HttpClient,
}

// Verify ShortioClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShortioClient>();
};

impl ShortioClient {
    /// Creates a client for the public short.io hosts.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `domain`, `domain_id` or `api_key` is
    /// empty, or if `domain_id` is zero.
    pub fn new(
        domain: impl Into<String>,
        domain_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = ShortioConfig::builder()
            .domain(Domain::new(domain)?)
            .domain_id(DomainId::new(domain_id)?)
            .api_key(ApiKey::new(api_key)?)
            .build()?;
        Self::from_config(&config)
    }

    /// Creates a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientInit`] if the HTTP stack cannot be
    /// initialised.
    pub fn from_config(config: &ShortioConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            api: HttpClient::new(config.api_host(), config)?,
            statistics: HttpClient::new(config.statistics_host(), config)?,
            config: config.clone(),
        })
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &ShortioConfig {
        &self.config
    }

    /// Lists the domain's links, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns [`ShortioError::Failed`] if the service rejects the call.
    pub async fn list_links(&self, query: &ListLinksQuery) -> Result<LinkCollection, ShortioError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/api/links")
            .query_param("domain_id", self.config.domain_id())
            .query_param("offset", query.offset)
            .query_param("limit", query.limit)
            .query_param_opt("tag", query.tag.as_deref())
            .build()?;

        let body = Self::dispatch(&self.api, request).await?;
        LinkCollection::from_listing(body)
    }

    /// Looks up a link by its short path.
    ///
    /// # Errors
    ///
    /// Returns [`ShortioError::InvalidArgument`] if `path` is empty, or
    /// [`ShortioError::Failed`] if the service rejects the call.
    pub async fn get_link_by_path(&self, path: &str) -> Result<LinkRecord, ShortioError> {
        if path.trim().is_empty() {
            return Err(ShortioError::invalid_argument("path", "must not be empty"));
        }

        let request = HttpRequest::builder(HttpMethod::Get, "/links/expand")
            .query_param("domain", self.config.domain())
            .query_param("path", path)
            .build()?;

        LinkRecord::try_from(Self::dispatch(&self.api, request).await?)
    }

    /// Looks up a link by the URL it points to.
    ///
    /// # Errors
    ///
    /// Returns [`ShortioError::InvalidArgument`] if `original_url` is empty,
    /// or [`ShortioError::Failed`] if the service rejects the call.
    pub async fn get_link_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<LinkRecord, ShortioError> {
        if original_url.trim().is_empty() {
            return Err(ShortioError::invalid_argument(
                "originalURL",
                "must not be empty",
            ));
        }

        let request = HttpRequest::builder(HttpMethod::Get, "/links/by-original-url")
            .query_param("domain", self.config.domain())
            .query_param("originalURL", original_url)
            .build()?;

        LinkRecord::try_from(Self::dispatch(&self.api, request).await?)
    }

    /// Creates a single short link on the configured domain.
    ///
    /// Any `domain` set on the draft is replaced by the configured one.
    ///
    /// # Errors
    ///
    /// Returns [`ShortioError::InvalidArgument`] if the draft has no
    /// `originalURL`, or [`ShortioError::Failed`] if the service rejects it.
    pub async fn create_link(&self, draft: &LinkDraft) -> Result<LinkRecord, ShortioError> {
        draft.require_original_url()?;

        let request = Self::json_request(
            HttpMethod::Post,
            "/links",
            draft.to_payload(self.config.domain()),
        )?;

        LinkRecord::try_from(Self::dispatch(&self.api, request).await?)
    }

    /// Creates between 2 and 1000 links in one call.
    ///
    /// Every draft has its `domain` replaced by the configured one. The
    /// service reports per-link failures inline, so an entry of the returned
    /// collection may be an `{"error": ...}` record without an id.
    ///
    /// # Errors
    ///
    /// Returns [`ShortioError::InvalidArgument`] if the batch size is out of
    /// range, or [`ShortioError::Failed`] if the service rejects it.
    pub async fn create_links_bulk(
        &self,
        drafts: &[LinkDraft],
    ) -> Result<LinkCollection, ShortioError> {
        if drafts.len() < MIN_BULK_LINKS {
            return Err(ShortioError::invalid_argument(
                "links",
                format!(
                    "cannot send fewer than {MIN_BULK_LINKS} links, use create_link for a single link"
                ),
            ));
        }
        if drafts.len() > MAX_BULK_LINKS {
            return Err(ShortioError::invalid_argument(
                "links",
                format!("cannot send more than {MAX_BULK_LINKS} links, split the batch"),
            ));
        }

        let links: Vec<Value> = drafts
            .iter()
            .map(|draft| draft.to_payload(self.config.domain()))
            .collect();
        let body = json!({
            "domain": self.config.domain(),
            "links": links,
        });
        let request = Self::json_request(HttpMethod::Post, "/links/bulk", body)?;

        LinkCollection::from_bulk(Self::dispatch(&self.api, request).await?)
    }

    /// Replaces the fields of an existing link.
    ///
    /// # Errors
    ///
    /// Returns [`ShortioError::InvalidArgument`] if the draft has no
    /// `originalURL`, or [`ShortioError::Failed`] if the service rejects it.
    pub async fn update_link(
        &self,
        id: impl Into<LinkId>,
        draft: &LinkDraft,
    ) -> Result<LinkRecord, ShortioError> {
        let id = id.into();
        draft.require_original_url()?;

        let request = Self::json_request(
            HttpMethod::Post,
            &Self::link_path(&id),
            draft.to_payload(self.config.domain()),
        )?;

        LinkRecord::try_from(Self::dispatch(&self.api, request).await?)
    }

    /// Archives a link.
    ///
    /// # Errors
    ///
    /// Returns [`ShortioError::Failed`] if the service rejects the call.
    pub async fn archive_link(&self, id: impl Into<LinkId>) -> Result<Confirmation, ShortioError> {
        let id = id.into();
        let request =
            Self::json_request(HttpMethod::Post, "/links/archive", json!({ "link_id": id }))?;

        Self::dispatch(&self.api, request).await?;
        tracing::debug!(link_id = %id, "archived short.io link");
        Ok(Confirmation::succeeded(ConfirmedAction::Archive))
    }

    /// Deletes a link.
    ///
    /// # Errors
    ///
    /// Returns [`ShortioError::Failed`] if the service rejects the call.
    pub async fn delete_link(&self, id: impl Into<LinkId>) -> Result<Confirmation, ShortioError> {
        let id = id.into();
        let request = HttpRequest::builder(HttpMethod::Delete, Self::link_path(&id)).build()?;

        Self::dispatch(&self.api, request).await?;
        tracing::debug!(link_id = %id, "deleted short.io link");
        Ok(Confirmation::succeeded(ConfirmedAction::Delete))
    }

    /// Returns the domain's click statistics for `period`.
    ///
    /// `tz_offset` is the client's UTC offset in minutes.
    ///
    /// # Errors
    ///
    /// Returns [`ShortioError::Failed`] if the service rejects the call.
    pub async fn get_domain_stats(
        &self,
        period: Period,
        tz_offset: i32,
    ) -> Result<Value, ShortioError> {
        let request = HttpRequest::builder(HttpMethod::Get, self.statistics_path(""))
            .query_param("period", period)
            .query_param("tzOffset", tz_offset)
            .build()?;

        Self::dispatch(&self.statistics, request).await
    }

    /// Returns the total click count of each requested link.
    ///
    /// # Errors
    ///
    /// Returns [`ShortioError::InvalidArgument`] if `ids` is empty,
    /// [`ShortioError::Failed`] if the service rejects the call, or
    /// [`ShortioError::UnexpectedResponse`] if a count is not a number.
    pub async fn get_links_clicks(
        &self,
        ids: &[LinkId],
    ) -> Result<HashMap<LinkId, u64>, ShortioError> {
        if ids.is_empty() {
            return Err(ShortioError::invalid_argument(
                "ids",
                "at least one link id is required",
            ));
        }

        let joined = ids
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(",");
        let request = HttpRequest::builder(HttpMethod::Get, self.statistics_path("/link_clicks"))
            .query_param("ids", joined)
            .build()?;

        let body = Self::dispatch(&self.statistics, request).await?;
        let Value::Object(counts) = body else {
            return Err(ShortioError::unexpected("expected an object of click counts"));
        };

        counts
            .into_iter()
            .map(|(id, count)| {
                count
                    .as_u64()
                    .or_else(|| count.as_str().and_then(|s| s.parse().ok()))
                    .map(|clicks| (LinkId::from(id.as_str()), clicks))
                    .ok_or_else(|| {
                        ShortioError::unexpected(format!("click count for '{id}' is {count}"))
                    })
            })
            .collect()
    }

    /// Returns the most visited paths of the domain for `period`.
    ///
    /// # Errors
    ///
    /// Returns [`ShortioError::Failed`] if the service rejects the call.
    pub async fn get_popular_paths(
        &self,
        period: Period,
        tz_offset: i32,
    ) -> Result<Value, ShortioError> {
        let request = HttpRequest::builder(HttpMethod::Get, self.statistics_path("/paths"))
            .query_param("period", period)
            .query_param("tzOffset", tz_offset)
            .build()?;

        Self::dispatch(&self.statistics, request).await
    }

    fn json_request(
        method: HttpMethod,
        path: &str,
        body: Value,
    ) -> Result<HttpRequest, ShortioError> {
        Ok(HttpRequest::builder(method, path)
            .body(body)
            .body_type(DataType::Json)
            .build()?)
    }

    fn link_path(id: &LinkId) -> String {
        format!("/links/{}", urlencoding::encode(id.as_ref()))
    }

    fn statistics_path(&self, suffix: &str) -> String {
        format!(
            "/statistics/domain/{}{suffix}",
            urlencoding::encode(self.config.domain_id().as_ref())
        )
    }

    /// Sends a request and returns its body, or the failure it reports.
    async fn dispatch(client: &HttpClient, request: HttpRequest) -> Result<Value, ShortioError> {
        let path = request.path.clone();
        Self::translate(&path, client.request(request).await)
    }

    /// Maps a transport result onto the operation error taxonomy.
    ///
    /// A top-level `error` field is a failure whatever the status code.
    fn translate(
        path: &str,
        result: Result<HttpResponse, HttpError>,
    ) -> Result<Value, ShortioError> {
        match result {
            Ok(response) => match response.error_message() {
                Some(message) => {
                    tracing::warn!(path, status = response.code, reason = %message, "short.io reported an error");
                    Err(ShortioError::Failed {
                        message,
                        code: Some(response.code),
                    })
                }
                None => Ok(response.body),
            },
            Err(HttpError::Response(e)) => {
                tracing::warn!(path, status = e.code, reason = %e.message, "short.io request failed");
                Err(ShortioError::Failed {
                    message: e.message,
                    code: Some(e.code),
                })
            }
            Err(e) => {
                tracing::warn!(path, error = %e, "short.io request could not be completed");
                Err(ShortioError::Http(e))
            }
        }
    }
}
