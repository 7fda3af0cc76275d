//! End-to-end pagination against a mock Genius server.

use serde_json::json;
use songhound_genius::{
    FetchEvent, GeniusClient, GeniusError, PaginatedFetcher, RecordingObserver, SearchQuery,
};
use std::sync::Arc;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn page_body(titles: &[&str]) -> serde_json::Value {
    let hits: Vec<_> = titles
        .iter()
        .map(|title| {
            json!({
                "type": "song",
                "result": {
                    "title": title,
                    "primary_artist": { "name": "Nina Simone" }
                }
            })
        })
        .collect();

    json!({ "meta": { "status": 200 }, "response": { "hits": hits } })
}

async fn mount_page(server: &MockServer, page: u32, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Nina Simone"))
        .and(query_param("page", page.to_string()))
        .and(header("authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

fn client(server: &MockServer) -> GeniusClient {
    GeniusClient::builder()
        .base_url(server.uri())
        .access_token("secret")
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_fetch_all_walks_pages_until_empty() {
    let server = MockServer::start().await;
    mount_page(&server, 1, page_body(&["Feeling Good", "Sinnerman"])).await;
    mount_page(&server, 2, page_body(&["I Put a Spell on You"])).await;
    mount_page(&server, 3, page_body(&[])).await;

    let observer = RecordingObserver::new();
    let fetcher = PaginatedFetcher::new(client(&server)).observer(Arc::new(observer.clone()));
    let query = SearchQuery::new("Nina Simone").unwrap();

    let hits = fetcher.fetch_all(&query).await.unwrap();

    let titles: Vec<_> = hits
        .iter()
        .map(|hit| hit.as_value()["result"]["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        titles,
        vec!["Feeling Good", "Sinnerman", "I Put a Spell on You"]
    );
    assert_eq!(
        observer.events().last(),
        Some(&FetchEvent::Completed {
            pages: 3,
            total_hits: 3
        })
    );
    // Mock expectations (one request per page) are verified when the server drops.
}

#[tokio::test]
async fn test_fetch_all_returns_nothing_when_a_page_fails() {
    let server = MockServer::start().await;
    mount_page(&server, 1, page_body(&["Feeling Good"])).await;
    mount_page(&server, 2, page_body(&["Sinnerman"])).await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "meta": { "status": 500, "message": "Internal server error" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = PaginatedFetcher::new(client(&server));
    let query = SearchQuery::new("Nina Simone").unwrap();

    let err = fetcher.fetch_all(&query).await.unwrap_err();

    assert!(matches!(err, GeniusError::Provider { status: 500, .. }));
}

#[tokio::test]
async fn test_fetch_all_surfaces_connection_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = GeniusClient::builder()
        .base_url(format!("http://127.0.0.1:{}", port))
        .access_token("secret")
        .build()
        .unwrap();
    let fetcher = PaginatedFetcher::new(client);
    let query = SearchQuery::new("Nina Simone").unwrap();

    let err = fetcher.fetch_all(&query).await.unwrap_err();

    assert!(matches!(err, GeniusError::Transport(_)));
    assert!(err.is_transport());
}
