//! Reverse proxy for the backend session API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host, so the session cookie set by the
//! backend is first-party. Every `/api/*` request is replayed against
//! `BACKEND_URL` with the same method, path, query, and body.
//!
//! DESIGN
//! ======
//! Only the headers the session flow needs cross the proxy: `cookie`,
//! `content-type`, `accept`, and `authorization` inbound; `content-type` and
//! every `set-cookie` outbound. Status and body pass through untouched, so
//! backend error envelopes reach the client as-is. Redirects are not
//! followed.
//!
//! ERROR HANDLING
//! ==============
//! A backend that cannot be reached (or times out) becomes a 502 with a
//! `detail` envelope the client already knows how to read.

use std::time::Duration;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Message returned when the backend is unreachable.
pub const BACKEND_UNAVAILABLE: &str = "Backend indisponivel";

/// Request headers copied to the backend.
pub const FORWARDED_REQUEST_HEADERS: [HeaderName; 4] = [COOKIE, CONTENT_TYPE, ACCEPT, AUTHORIZATION];

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// Connect, timeout, or body read failure talking to the backend.
    #[error("backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "proxy request failed");
        (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "detail": BACKEND_UNAVAILABLE }))).into_response()
    }
}

// =============================================================================
// BACKEND CLIENT
// =============================================================================

/// Pooled HTTP client bound to one backend origin.
#[derive(Clone, Debug)]
pub struct Backend {
    http: reqwest::Client,
    base_url: String,
}

impl Backend {
    /// # Errors
    ///
    /// Fails if the TLS backend cannot be initialized.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    pub fn target_url(&self, path_and_query: &str) -> String {
        format!("{}{path_and_query}", self.base_url)
    }

    async fn send(
        &self,
        method: Method,
        path_and_query: &str,
        headers: &HeaderMap,
        body: Bytes,
    ) -> Result<reqwest::Response, reqwest::Error> {
        let mut forwarded = HeaderMap::new();
        for name in &FORWARDED_REQUEST_HEADERS {
            for value in headers.get_all(name) {
                forwarded.append(name.clone(), value.clone());
            }
        }
        self.http
            .request(method, self.target_url(path_and_query))
            .headers(forwarded)
            .body(body)
            .send()
            .await
    }
}

// =============================================================================
// HANDLER
// =============================================================================

/// `ANY /api/{*path}`: replay the request against the backend.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    tracing::debug!(%method, path = %path_and_query, "proxying to backend");

    let upstream = state.backend.send(method, path_and_query, &headers, body).await?;
    let status = upstream.status();

    let mut returned = HeaderMap::new();
    if let Some(content_type) = upstream.headers().get(CONTENT_TYPE) {
        returned.insert(CONTENT_TYPE, content_type.clone());
    }
    for cookie in upstream.headers().get_all(SET_COOKIE) {
        returned.append(SET_COOKIE, cookie.clone());
    }
    let bytes = upstream.bytes().await?;

    if status.is_server_error() {
        tracing::warn!(status = status.as_u16(), path = %path_and_query, "backend returned server error");
    }
    Ok((status, returned, bytes).into_response())
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
