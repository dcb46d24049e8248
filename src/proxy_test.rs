use std::net::SocketAddr;

use axum::Router;
use axum::extract::RawQuery;
use axum::http::header::HeaderValue;
use axum::routing::{get, post};

use super::*;
use crate::config::Config;
use crate::routes::api_routes;

// =============================================================================
// HELPERS
// =============================================================================

/// Stand-in for the session API: `me` requires `cookie: session=abc`.
fn fake_backend() -> Router {
    Router::new()
        .route(
            "/api/auth/me",
            get(|headers: HeaderMap| async move {
                let authed = headers.get(COOKIE).and_then(|v| v.to_str().ok()) == Some("session=abc");
                if authed {
                    (StatusCode::OK, Json(serde_json::json!({ "email": "test@example.com" })))
                } else {
                    (StatusCode::UNAUTHORIZED, Json(serde_json::json!({ "detail": "Not authenticated" })))
                }
            }),
        )
        .route(
            "/api/auth/login",
            post(|headers: HeaderMap, body: Bytes| async move {
                let mut out = HeaderMap::new();
                out.append(SET_COOKIE, HeaderValue::from_static("session=abc; HttpOnly; Path=/"));
                out.append(SET_COOKIE, HeaderValue::from_static("theme_hint=dark; Path=/"));
                out.insert("x-internal", HeaderValue::from_static("leak"));
                let echoed = serde_json::json!({
                    "content_type": headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
                    "has_custom_header": headers.contains_key("x-custom"),
                    "body": String::from_utf8_lossy(&body),
                });
                (out, Json(echoed))
            }),
        )
        .route("/api/echo", get(|RawQuery(query): RawQuery| async move { query.unwrap_or_default() }))
        .route("/api/auth/logout", post(|| async { StatusCode::NO_CONTENT }))
}

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    addr
}

async fn host_for(backend_url: &str) -> String {
    let config = Config::from_lookup(|key| (key == "BACKEND_URL").then(|| backend_url.to_owned())).unwrap();
    let state = AppState::new(&config).unwrap();
    format!("http://{}", serve(api_routes(state)).await)
}

async fn proxied() -> String {
    let backend = serve(fake_backend()).await;
    host_for(&format!("http://{backend}/")).await
}

// =============================================================================
// TESTS
// =============================================================================

#[test]
fn target_url_joins_without_double_slash() {
    let backend = Backend::new("http://localhost:8000/", Duration::from_secs(1)).unwrap();
    assert_eq!(backend.target_url("/api/auth/me?x=1"), "http://localhost:8000/api/auth/me?x=1");
}

#[tokio::test]
async fn unauthorized_status_and_detail_pass_through() {
    let host = proxied().await;

    let resp = reqwest::get(format!("{host}/api/auth/me")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp.headers()[CONTENT_TYPE], "application/json");
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "detail": "Not authenticated" }));
}

#[tokio::test]
async fn session_cookie_is_forwarded() {
    let host = proxied().await;

    let resp = reqwest::Client::new()
        .get(format!("{host}/api/auth/me"))
        .header(COOKIE, "session=abc")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["email"], "test@example.com");
}

#[tokio::test]
async fn login_body_and_every_set_cookie_round_trip() {
    let host = proxied().await;

    let resp = reqwest::Client::new()
        .post(format!("{host}/api/auth/login"))
        .header(CONTENT_TYPE, "application/json")
        .header("x-custom", "1")
        .body(r#"{"email":"user@example.com","password":"validpass"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let cookies: Vec<_> = resp.headers().get_all(SET_COOKIE).iter().map(|v| v.to_str().unwrap().to_owned()).collect();
    assert_eq!(cookies, vec!["session=abc; HttpOnly; Path=/", "theme_hint=dark; Path=/"]);
    assert!(!resp.headers().contains_key("x-internal"));

    let echoed: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(echoed["content_type"], "application/json");
    assert_eq!(echoed["has_custom_header"], false);
    assert_eq!(echoed["body"], r#"{"email":"user@example.com","password":"validpass"}"#);
}

#[tokio::test]
async fn query_string_is_preserved() {
    let host = proxied().await;

    let body = reqwest::get(format!("{host}/api/echo?page=2&q=a%20b")).await.unwrap().text().await.unwrap();

    assert_eq!(body, "page=2&q=a%20b");
}

#[tokio::test]
async fn empty_responses_keep_their_status() {
    let host = proxied().await;

    let resp = reqwest::Client::new().post(format!("{host}/api/auth/logout")).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn unknown_backend_route_is_backend_404() {
    let host = proxied().await;

    let resp = reqwest::get(format!("{host}/api/nope")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unreachable_backend_is_502_with_detail() {
    let closed = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let host = host_for(&format!("http://{closed}")).await;

    let resp = reqwest::get(format!("{host}/api/auth/me")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "detail": BACKEND_UNAVAILABLE }));
}

#[tokio::test]
async fn healthz_is_ok() {
    let host = host_for("http://127.0.0.1:9").await;

    let resp = reqwest::get(format!("{host}/healthz")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}
