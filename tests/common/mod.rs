#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{Method, Request, StatusCode};
use axum::response::{Html, Response};
use axum::routing;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use recipe_notes::config::Config;
use recipe_notes::{build_router, db, AppState};

/// Fetch timeout used by tests; the slow fixture page outlasts it.
pub const TEST_FETCH_TIMEOUT: Duration = Duration::from_millis(500);

/// State backed by a fresh in-memory database.
pub async fn test_state() -> Arc<AppState> {
    let pool = db::create_memory_pool().await.unwrap();
    db::init_schema(&pool).await.unwrap();

    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        fetch_timeout: TEST_FETCH_TIMEOUT,
        fetch_use_proxy: false,
        ..Config::default()
    };
    Arc::new(AppState::new(pool, &config).unwrap())
}

pub fn build_test_app(state: Arc<AppState>) -> Router {
    build_router(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn post_form(app: &Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// POST with no body at all, as a bare `<form>` without fields would send.
pub async fn post_empty(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Assert a 303 redirect and return its target.
pub fn redirect_location(response: &Response) -> String {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    response
        .headers()
        .get(LOCATION)
        .expect("redirect without Location")
        .to_str()
        .unwrap()
        .to_string()
}

// ---------------------------------------------------------------------------
// Fixture pages
// ---------------------------------------------------------------------------

const TITLED_PAGE: &str = r#"<!doctype html><html><head>
<title>Grandma's Pancakes</title>
<meta property="og:image" content="https://img.example.com/pancakes.jpg">
</head><body><h1>Pancakes</h1></body></html>"#;

const UNTITLED_PAGE: &str = r#"<html><head>
<meta property="og:image" content="https://img.example.com/mystery.jpg">
</head><body>no title here</body></html>"#;

const PLAIN_PAGE: &str = "<html><head><title>Plain Soup</title></head><body></body></html>";

/// Serve fixture recipe pages on an ephemeral local port.
///
/// - `/pancakes` has a title and an og:image
/// - `/untitled` has an og:image but no `<title>`
/// - `/plain` has a title and no og:image
/// - `/slow` answers only after the test fetch timeout has passed
pub async fn spawn_page_server() -> SocketAddr {
    let app = Router::new()
        .route("/pancakes", routing::get(|| async { Html(TITLED_PAGE) }))
        .route("/untitled", routing::get(|| async { Html(UNTITLED_PAGE) }))
        .route("/plain", routing::get(|| async { Html(PLAIN_PAGE) }))
        .route(
            "/slow",
            routing::get(|| async {
                tokio::time::sleep(TEST_FETCH_TIMEOUT * 6).await;
                Html(TITLED_PAGE)
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Percent-encode a value for a form body.
pub fn form_value(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
}
