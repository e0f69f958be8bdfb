#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use website_aggregator::domain::entities::SourceConfig;
use website_aggregator::infrastructure::http::HttpSourceFetcher;
use website_aggregator::routes::router;
use website_aggregator::state::AppState;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds state backed by the real HTTP fetcher with no delay between retries.
pub fn create_test_state(sources: Vec<String>, retry_budget: i32) -> AppState {
    let fetcher = HttpSourceFetcher::with_timeout(Some(Duration::from_secs(5))).unwrap();
    AppState::from_fetcher(
        Arc::new(fetcher),
        SourceConfig::new(sources, retry_budget),
        Duration::ZERO,
    )
}

pub fn create_test_server(sources: Vec<String>, retry_budget: i32) -> TestServer {
    TestServer::new(router(create_test_state(sources, retry_budget))).unwrap()
}

pub fn website(url: &str, views: i64, relevance_score: f64) -> Value {
    json!({ "url": url, "views": views, "relevanceScore": relevance_score })
}

/// Serves `{"data": websites}` at `route` and expects exactly one request.
pub async fn mount_source(server: &MockServer, route: &str, websites: Vec<Value>) -> String {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": websites })))
        .expect(1)
        .mount(server)
        .await;

    format!("{}{}", server.uri(), route)
}

/// Serves `status` at `route` and expects exactly `attempts` requests.
pub async fn mount_failing_source(
    server: &MockServer,
    route: &str,
    status: u16,
    attempts: u64,
) -> String {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .expect(attempts)
        .mount(server)
        .await;

    format!("{}{}", server.uri(), route)
}
