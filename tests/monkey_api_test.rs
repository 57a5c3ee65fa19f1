/// Integration tests for the monkey HTTP API
///
/// The upstream feed is a mockito server; the API router is exercised both
/// in-process (tower `oneshot`) and over a real socket with a second service
/// acting as a client shell pointed at `/api/monkeys`.
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use mockito::{Matcher, Server, ServerGuard};
use monkeyhub::infrastructure::web::{router, serve, AppState};
use monkeyhub::{
    build_http_client, AlwaysConnected, HttpMonkeySource, Monkey, MonkeyDataService,
    MonkeyService, SourceConfig,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceExt;

fn feed_body() -> String {
    serde_json::json!([
        {
            "Name": "Baboon",
            "Location": "Africa & Asia",
            "Details": "Baboons are African and Arabian Old World monkeys.",
            "Image": "https://example.com/baboon.jpg",
            "Population": 10000,
            "Latitude": -8.783195,
            "Longitude": 34.508523
        },
        {
            "Name": "Capuchin Monkey",
            "Location": "Central & South America",
            "Details": "The capuchin monkeys are New World monkeys.",
            "Image": "https://example.com/capuchin.jpg",
            "Population": 23000,
            "Latitude": 12.769013,
            "Longitude": -85.602364
        }
    ])
    .to_string()
}

fn service_for(url: String) -> Arc<MonkeyDataService<HttpMonkeySource>> {
    let client = build_http_client(&SourceConfig::default()).expect("client should build");
    Arc::new(MonkeyDataService::new(Arc::new(HttpMonkeySource::new(client, url))))
}

fn state_for(service: Arc<MonkeyDataService<HttpMonkeySource>>) -> AppState {
    AppState {
        monkey_service: service,
        connectivity: Arc::new(AlwaysConnected),
    }
}

async fn upstream_with_feed(expected_hits: usize) -> (ServerGuard, mockito::Mock) {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/monkeys.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(feed_body())
        .expect(expected_hits)
        .create_async()
        .await;
    (server, mock)
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_list_fetches_once_and_serves_from_cache() {
    let (upstream, mock) = upstream_with_feed(1).await;
    let service = service_for(format!("{}/monkeys.json", upstream.url()));
    let app = router(state_for(service));

    let (status, body) = get(app.clone(), "/api/monkeys").await;
    assert_eq!(status, StatusCode::OK);
    let monkeys = body.as_array().unwrap();
    assert_eq!(monkeys.len(), 2);
    assert_eq!(monkeys[0]["name"], "Baboon");
    assert_eq!(monkeys[1]["population"], 23000);

    let (status, again) = get(app, "/api/monkeys").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(again, body);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_upstream_failure_returns_empty_list_then_recovers() {
    let mut upstream = Server::new_async().await;
    let failing = upstream
        .mock("GET", "/monkeys.json")
        .with_status(500)
        .with_body("Internal Server Error")
        .expect(1)
        .create_async()
        .await;

    let service = service_for(format!("{}/monkeys.json", upstream.url()));
    let app = router(state_for(service.clone()));

    let (status, body) = get(app.clone(), "/api/monkeys").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
    failing.assert_async().await;
    failing.remove_async().await;

    let healthy = upstream
        .mock("GET", "/monkeys.json")
        .with_status(200)
        .with_body(feed_body())
        .expect(1)
        .create_async()
        .await;

    let (_, body) = get(app, "/api/monkeys").await;
    assert_eq!(body.as_array().unwrap().len(), 2);
    healthy.assert_async().await;
    assert_eq!(service.cached_len().await, 2);
}

#[tokio::test]
async fn test_lookup_by_name() {
    let (upstream, _mock) = upstream_with_feed(1).await;
    let service = service_for(format!("{}/monkeys.json", upstream.url()));
    let app = router(state_for(service));

    // Cold cache: lookup never fetches
    let (status, body) = get(app.clone(), "/api/monkeys/Baboon").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Monkey not found: Baboon");

    get(app.clone(), "/api/monkeys").await;

    let (status, body) = get(app.clone(), "/api/monkeys/Capuchin%20Monkey").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location"], "Central & South America");

    let (status, _) = get(app, "/api/monkeys/baboon").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_null_feed_is_empty_list() {
    let mut upstream = Server::new_async().await;
    let _mock = upstream
        .mock("GET", "/monkeys.json")
        .with_status(200)
        .with_body("null")
        .create_async()
        .await;

    let service = service_for(format!("{}/monkeys.json", upstream.url()));
    let (status, body) = get(router(state_for(service)), "/api/monkeys").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_health_and_connectivity() {
    let service = service_for("http://127.0.0.1:1/monkeys.json".to_string());
    let app = router(state_for(service));

    let (status, body) = get(app.clone(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = get(app, "/api/connectivity").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["connected"], true);
    assert_eq!(body["mode"], "always");
}

#[tokio::test]
async fn test_client_shell_reads_from_server_api() {
    let (upstream, mock) = upstream_with_feed(1).await;
    let server_service = service_for(format!("{}/monkeys.json", upstream.url()));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let server = tokio::spawn(serve(listener, state_for(server_service), async move {
        let _ = shutdown_rx.await;
    }));

    let client = service_for(format!("http://{addr}/api/monkeys"));
    let monkeys: Vec<Monkey> = client.get_monkeys().await;
    assert_eq!(monkeys.len(), 2);
    assert_eq!(
        client.get_monkey_by_name("Baboon").await.map(|m| m.population),
        Some(10000)
    );

    // A second client call is served from the client's own cache.
    assert_eq!(client.get_monkeys().await.len(), 2);
    mock.assert_async().await;

    shutdown_tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_request_sends_accept_header() {
    let mut upstream = Server::new_async().await;
    let mock = upstream
        .mock("GET", "/monkeys.json")
        .match_header("accept", "application/json")
        .match_header("user-agent", Matcher::Regex("^monkeyhub/".to_string()))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let service = service_for(format!("{}/monkeys.json", upstream.url()));
    assert!(service.get_monkeys().await.is_empty());
    mock.assert_async().await;
}
