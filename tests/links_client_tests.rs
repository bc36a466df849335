//! Integration tests for the short.io link client.
//!
//! These tests run the client against a local mock server and verify the
//! outgoing requests and the reshaping of responses.

use serde_json::json;
use shortio_api::{
    ApiKey, ConfirmedAction, Domain, DomainId, HostUrl, LinkDraft, LinkId, ListLinksQuery,
    Period, ShortioClient, ShortioConfig, ShortioError,
};
use wiremock::matchers::{body_json, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DOMAIN: &str = "go.example.com";
const DOMAIN_ID: &str = "12345";
const API_KEY: &str = "test-api-key";

/// Creates a client whose API and statistics hosts both point at the mock server.
fn create_client(server: &MockServer) -> ShortioClient {
    let host = HostUrl::new(server.uri()).unwrap();
    let config = ShortioConfig::builder()
        .domain(Domain::new(DOMAIN).unwrap())
        .domain_id(DomainId::new(DOMAIN_ID).unwrap())
        .api_key(ApiKey::new(API_KEY).unwrap())
        .api_host(host.clone())
        .statistics_host(host)
        .build()
        .unwrap();
    ShortioClient::from_config(&config).unwrap()
}

// ============================================================================
// Listing and lookup
// ============================================================================

#[tokio::test]
async fn test_list_links_sends_defaulted_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/links"))
        .and(header("authorization", API_KEY))
        .and(query_param("domain_id", DOMAIN_ID))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "150"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 412,
            "links": [
                {"id": 1, "path": "one", "originalURL": "https://example.com/1"},
                {"id": "2", "path": "two", "originalURL": "https://example.com/2"},
            ],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let links = client.list_links(&ListLinksQuery::default()).await.unwrap();

    assert_eq!(links.count(), 412);
    assert_eq!(links.len(), 2);
    assert_eq!(links.get(2).unwrap().path(), Some("two"));
    assert_eq!(links.get("1").unwrap().path(), Some("one"));
    assert!(matches!(
        links.get(99),
        Err(ShortioError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_list_links_passes_paging_and_tag_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/links"))
        .and(query_param("domain_id", DOMAIN_ID))
        .and(query_param("offset", "300"))
        .and(query_param("limit", "25"))
        .and(query_param("tag", "spring"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 0,
            "links": [],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let query = ListLinksQuery::default().limit(25).offset(300).tag("spring");
    let links = client.list_links(&query).await.unwrap();

    assert!(links.is_empty());
    assert_eq!(links.count(), 0);
}

#[tokio::test]
async fn test_get_link_by_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/links/expand"))
        .and(query_param("domain", DOMAIN))
        .and(query_param("path", "promo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "idString": "lnk_abc",
            "path": "promo",
            "originalURL": "https://example.com/landing",
            "shortURL": "https://go.example.com/promo",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let link = client.get_link_by_path("promo").await.unwrap();

    assert_eq!(link.id(), Some(&LinkId::from("lnk_abc")));
    assert_eq!(link.short_url(), Some("https://go.example.com/promo"));
}

#[tokio::test]
async fn test_get_link_by_path_rejects_empty_path_without_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = client.get_link_by_path("").await;

    assert!(matches!(
        result,
        Err(ShortioError::InvalidArgument { argument: "path", .. })
    ));
}

#[tokio::test]
async fn test_get_link_by_original_url() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/links/by-original-url"))
        .and(query_param("domain", DOMAIN))
        .and(query_param("originalURL", "https://example.com/a?b=c"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 77,
            "originalURL": "https://example.com/a?b=c",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let link = client
        .get_link_by_original_url("https://example.com/a?b=c")
        .await
        .unwrap();

    assert_eq!(link.id(), Some(&LinkId::from(77_u64)));
}

// ============================================================================
// Writes
// ============================================================================

#[tokio::test]
async fn test_create_link_overrides_domain_and_leaves_draft_untouched() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/links"))
        .and(header("authorization", API_KEY))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "originalURL": "https://example.com/landing",
            "path": "promo",
            "domain": DOMAIN,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1001,
            "originalURL": "https://example.com/landing",
            "path": "promo",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let draft = LinkDraft::new("https://example.com/landing")
        .path("promo")
        .field("domain", "other.example.com");

    let link = client.create_link(&draft).await.unwrap();

    assert_eq!(link.id(), Some(&LinkId::from(1001_u64)));
    assert_eq!(draft.as_map()["domain"], "other.example.com");
}

#[tokio::test]
async fn test_create_link_without_original_url_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = client.create_link(&LinkDraft::default()).await;

    assert!(matches!(
        result,
        Err(ShortioError::InvalidArgument {
            argument: "originalURL",
            ..
        })
    ));
}

#[tokio::test]
async fn test_create_links_bulk_enforces_batch_bounds() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_client(&server);

    let one = vec![LinkDraft::new("https://example.com/1")];
    assert!(matches!(
        client.create_links_bulk(&one).await,
        Err(ShortioError::InvalidArgument { argument: "links", .. })
    ));

    let too_many: Vec<LinkDraft> = (0..1001)
        .map(|i| LinkDraft::new(format!("https://example.com/{i}")))
        .collect();
    assert!(matches!(
        client.create_links_bulk(&too_many).await,
        Err(ShortioError::InvalidArgument { argument: "links", .. })
    ));
}

#[tokio::test]
async fn test_create_links_bulk_wraps_response_array() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/links/bulk"))
        .and(body_json(json!({
            "domain": DOMAIN,
            "links": [
                {"originalURL": "https://example.com/a", "domain": DOMAIN},
                {"originalURL": "https://example.com/b", "path": "b", "domain": DOMAIN},
            ],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 10, "originalURL": "https://example.com/a"},
            {"id": 11, "originalURL": "https://example.com/b", "path": "b"},
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let drafts = vec![
        LinkDraft::new("https://example.com/a"),
        LinkDraft::new("https://example.com/b").path("b"),
    ];

    let created = client.create_links_bulk(&drafts).await.unwrap();

    assert_eq!(created.count(), 2);
    assert_eq!(created.get(11).unwrap().path(), Some("b"));
}

#[tokio::test]
async fn test_create_links_bulk_overrides_each_draft_domain() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/links/bulk"))
        .and(body_json(json!({
            "domain": DOMAIN,
            "links": [
                {"originalURL": "https://example.com/a", "domain": DOMAIN},
                {"originalURL": "https://example.com/b", "domain": DOMAIN},
            ],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 10, "originalURL": "https://example.com/a"},
            {"id": 11, "originalURL": "https://example.com/b"},
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let drafts = vec![
        LinkDraft::new("https://example.com/a").field("domain", "evil.example.com"),
        LinkDraft::new("https://example.com/b"),
    ];

    let created = client.create_links_bulk(&drafts).await.unwrap();

    assert_eq!(created.len(), 2);
    assert_eq!(drafts[0].as_map()["domain"], "evil.example.com");
}

#[tokio::test]
async fn test_create_links_bulk_keeps_per_link_failures_as_records() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/links/bulk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 10, "originalURL": "https://example.com/a"},
            {"error": "Link with this path already exists"},
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let drafts = vec![
        LinkDraft::new("https://example.com/a"),
        LinkDraft::new("https://example.com/b").path("taken"),
    ];

    let created = client.create_links_bulk(&drafts).await.unwrap();

    assert_eq!(created.count(), 2);
    assert!(created.get(10).is_ok());
    let failed = &created.links()[1];
    assert_eq!(failed.id(), None);
    assert_eq!(
        failed.get("error"),
        Some(&json!("Link with this path already exists"))
    );
}

#[tokio::test]
async fn test_update_link_posts_to_link_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/links/lnk_abc"))
        .and(body_partial_json(json!({
            "originalURL": "https://example.com/new",
            "domain": DOMAIN,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "idString": "lnk_abc",
            "originalURL": "https://example.com/new",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let link = client
        .update_link("lnk_abc", &LinkDraft::new("https://example.com/new"))
        .await
        .unwrap();

    assert_eq!(link.original_url(), Some("https://example.com/new"));
}

#[tokio::test]
async fn test_update_link_requires_original_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let draft = LinkDraft::default().field("title", "no destination");

    assert!(matches!(
        client.update_link(5_u64, &draft).await,
        Err(ShortioError::InvalidArgument { .. })
    ));
}

#[tokio::test]
async fn test_archive_link() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/links/archive"))
        .and(body_json(json!({"link_id": "lnk_abc"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let confirmation = client.archive_link("lnk_abc").await.unwrap();

    assert_eq!(confirmation.action, ConfirmedAction::Archive);
    assert!(confirmation.result);
}

#[tokio::test]
async fn test_delete_link() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/links/lnk_abc"))
        .and(header("authorization", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let confirmation = client.delete_link("lnk_abc").await.unwrap();

    assert_eq!(
        serde_json::to_value(confirmation).unwrap(),
        json!({"action": "delete", "result": true})
    );
}

// ============================================================================
// Statistics
// ============================================================================

#[tokio::test]
async fn test_get_domain_stats() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/statistics/domain/12345"))
        .and(query_param("period", "last7"))
        .and(query_param("tzOffset", "-120"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "clicks": 42,
            "humanClicks": 40,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let stats = client.get_domain_stats(Period::Last7, -120).await.unwrap();

    assert_eq!(stats["clicks"], 42);
}

#[tokio::test]
async fn test_get_links_clicks_joins_ids() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/statistics/domain/12345/link_clicks"))
        .and(query_param("ids", "1,2,lnk_c"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "1": 10,
            "2": 0,
            "lnk_c": "7",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let ids = vec![LinkId::from(1_u64), LinkId::from("2"), LinkId::from("lnk_c")];
    let clicks = client.get_links_clicks(&ids).await.unwrap();

    assert_eq!(clicks.len(), 3);
    assert_eq!(clicks[&LinkId::from(1_u64)], 10);
    assert_eq!(clicks[&LinkId::from("2")], 0);
    assert_eq!(clicks[&LinkId::from("lnk_c")], 7);
}

#[tokio::test]
async fn test_get_links_clicks_requires_ids() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_client(&server);

    assert!(matches!(
        client.get_links_clicks(&[]).await,
        Err(ShortioError::InvalidArgument { argument: "ids", .. })
    ));
}

#[tokio::test]
async fn test_get_popular_paths() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/statistics/domain/12345/paths"))
        .and(query_param("period", "total"))
        .and(query_param("tzOffset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"path": "promo", "score": 12},
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let paths = client.get_popular_paths(Period::Total, 0).await.unwrap();

    assert_eq!(paths[0]["path"], "promo");
}

#[test]
fn test_unknown_period_is_invalid_argument() {
    assert!(matches!(
        "bogus".parse::<Period>(),
        Err(ShortioError::InvalidArgument { argument: "period", .. })
    ));
}

// ============================================================================
// Error translation
// ============================================================================

#[tokio::test]
async fn test_error_field_on_success_status_is_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/links/expand"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": "Link not found"})),
        )
        .mount(&server)
        .await;

    let client = create_client(&server);

    match client.get_link_by_path("missing").await {
        Err(ShortioError::Failed { message, code }) => {
            assert_eq!(message, "Link not found");
            assert_eq!(code, Some(200));
        }
        other => panic!("Expected Failed, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_success_status_is_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/links"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": "Link with this path already exists",
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = client
        .create_link(&LinkDraft::new("https://example.com").path("taken"))
        .await
        .unwrap_err();

    assert!(error.is_failed());
    assert!(error.to_string().contains("already exists"));
}

#[tokio::test]
async fn test_unreachable_host_is_transport_failure() {
    let config = ShortioConfig::builder()
        .domain(Domain::new(DOMAIN).unwrap())
        .domain_id(DomainId::new(DOMAIN_ID).unwrap())
        .api_key(ApiKey::new(API_KEY).unwrap())
        .api_host(HostUrl::new("http://127.0.0.1:1").unwrap())
        .build()
        .unwrap();
    let client = ShortioClient::from_config(&config).unwrap();

    let error = client.delete_link("lnk_abc").await.unwrap_err();

    assert!(matches!(error, ShortioError::Http(_)));
    assert!(error.is_failed());
}

#[tokio::test]
async fn test_concurrent_operations_share_one_client() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/links/expand"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/statistics/domain/12345"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"clicks": 3})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let (link, stats) = tokio::join!(
        client.get_link_by_path("promo"),
        client.get_domain_stats(Period::Today, 0),
    );

    assert_eq!(link.unwrap().id(), Some(&LinkId::from(1_u64)));
    assert_eq!(stats.unwrap()["clicks"], 3);
}

#[test]
fn test_client_debug_output_hides_api_key() {
    let client = ShortioClient::new("go.example.com", "12345", "super-secret-key").unwrap();

    let debug = format!("{client:?}");

    assert!(!debug.contains("super-secret-key"));
    assert!(debug.contains("go.example.com"));
}
