//! Resolver contract tests against a mock doi.org.

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use refcite::client::{CitationClient, CitationResponse};
use refcite::config::Config;
use refcite::error::ClientError;

fn client_for(mock_server: &MockServer) -> CitationClient {
    let config = Config::for_testing(&mock_server.uri(), "unused.csv", "unused");
    CitationClient::new(&config).unwrap()
}

async fn mount_status(mock_server: &MockServer, doi_path: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(doi_path))
        .respond_with(ResponseTemplate::new(status))
        .mount(mock_server)
        .await;
}

// =============================================================================
// Status Mapping
// =============================================================================

#[tokio::test]
async fn test_200_returns_body_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/10.1038/nature12373"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("Kucsko, G. (2013). Nanometre-scale thermometry. Nature 500.\n"),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.resolve("10.1038/nature12373").await.unwrap();

    assert_eq!(
        result,
        CitationResponse::Rendered(
            "Kucsko, G. (2013). Nanometre-scale thermometry. Nature 500.\n".to_string()
        )
    );
}

#[tokio::test]
async fn test_204_no_metadata() {
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, "/10.1/empty", 204).await;

    let result = client_for(&mock_server).resolve("10.1/empty").await.unwrap();
    assert_eq!(result.into_text(), "No metadata available.");
}

#[tokio::test]
async fn test_404_not_found() {
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, "/10.1/missing", 404).await;

    let result = client_for(&mock_server).resolve("10.1/missing").await.unwrap();
    assert_eq!(result.into_text(), "DOI not found.");
}

#[tokio::test]
async fn test_406_not_acceptable() {
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, "/10.1/style", 406).await;

    let result = client_for(&mock_server).resolve("10.1/style").await.unwrap();
    assert_eq!(result.into_text(), "Cannot serve any requested content type.");
}

#[tokio::test]
async fn test_500_unexpected() {
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, "/10.1/broken", 500).await;

    let result = client_for(&mock_server).resolve("10.1/broken").await.unwrap();
    assert_eq!(result.into_text(), "Unexpected response code: 500");
}

// =============================================================================
// Request Shape
// =============================================================================

#[tokio::test]
async fn test_sends_default_accept_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/10.1/abc"))
        .and(header(
            "Accept",
            "text/x-bibliography; style=frontiers-of-biogeography; locale=en-UK",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).resolve("10.1/abc").await.unwrap();
    assert!(result.is_rendered());
}

#[tokio::test]
async fn test_style_and_locale_override() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/10.1/abc"))
        .and(header("Accept", "text/x-bibliography; style=apa; locale=en-GB"))
        .respond_with(ResponseTemplate::new(200).set_body_string("apa"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).resolve_with("10.1/abc", "apa", "en-GB").await.unwrap();
    assert_eq!(result.into_text(), "apa");
}

#[tokio::test]
async fn test_full_doi_link_is_normalized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/10.5285/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string("resolved"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result =
        client_for(&mock_server).resolve("https://doi.org/10.5285/abc123").await.unwrap();
    assert_eq!(result.into_text(), "resolved");
}

#[tokio::test]
async fn test_www_and_schemeless_doi_links_are_normalized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/10.5285/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string("resolved"))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    for link in ["https://www.doi.org/10.5285/abc123", "doi.org/10.5285/abc123"] {
        assert_eq!(client.resolve(link).await.unwrap().into_text(), "resolved");
    }
}

#[tokio::test]
async fn test_one_request_per_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/10.1/flaky"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).resolve("10.1/flaky").await.unwrap();
    assert_eq!(result, CitationResponse::Unexpected(503));
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test]
async fn test_transport_failure_is_error() {
    let config = Config::for_testing("http://127.0.0.1:1", "unused.csv", "unused");
    let client = CitationClient::new(&config).unwrap();

    let result = client.resolve("10.1/abc").await;
    assert!(matches!(result, Err(ClientError::Http(_))));
}

#[tokio::test]
async fn test_empty_identifier_is_rejected_without_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).resolve("  ").await;
    assert!(matches!(result, Err(ClientError::InvalidIdentifier { .. })));
}
