//! The network seam under the session API client.
//!
//! Client-side (hydrate): `BrowserTransport` issues `fetch` calls through
//! `gloo-net` with `credentials: include`, so the session cookie rides along.
//! Server-side (SSR): the same type exists but refuses every request, since
//! session calls are only meaningful in the browser.

use std::future::Future;

/// HTTP verbs used by the session API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One outbound call.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: &'static str,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(path: &'static str) -> Self {
        Self { method: Method::Get, path, body: None }
    }

    pub fn post(path: &'static str, body: Option<serde_json::Value>) -> Self {
        Self { method: Method::Post, path, body }
    }
}

/// Status and raw body of a completed call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a single request. Implementations never retry.
pub trait Transport {
    /// # Errors
    ///
    /// A description of the transport failure when no response was received.
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<RawResponse, String>>;
}

/// `fetch`-backed transport for the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, String> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            use web_sys::RequestCredentials;

            let builder = match request.method {
                Method::Get => Request::get(request.path),
                Method::Post => Request::post(request.path),
            }
            .credentials(RequestCredentials::Include)
            .header("Accept", "application/json");

            let req = match &request.body {
                Some(body) => builder.json(body).map_err(|e| e.to_string())?,
                None => builder.build().map_err(|e| e.to_string())?,
            };
            let resp = req.send().await.map_err(|e| e.to_string())?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| e.to_string())?;
            Ok(RawResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err("not available on server".to_owned())
        }
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! Scripted transport for driving the client without a network.

    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use super::{ApiRequest, RawResponse, Transport};

    #[derive(Clone, Default)]
    pub(crate) struct MockTransport {
        replies: Arc<Mutex<VecDeque<Result<RawResponse, String>>>>,
        sent: Arc<Mutex<Vec<ApiRequest>>>,
    }

    impl MockTransport {
        pub(crate) fn reply(self, status: u16, body: impl Into<String>) -> Self {
            self.replies
                .lock()
                .unwrap()
                .push_back(Ok(RawResponse { status, body: body.into() }));
            self
        }

        pub(crate) fn reply_json(self, status: u16, body: &serde_json::Value) -> Self {
            self.reply(status, body.to_string())
        }

        pub(crate) fn fail(self, error: &str) -> Self {
            self.replies.lock().unwrap().push_back(Err(error.to_owned()));
            self
        }

        pub(crate) fn sent(&self) -> Vec<ApiRequest> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl Transport for MockTransport {
        async fn send(&self, request: ApiRequest) -> Result<RawResponse, String> {
            self.sent.lock().unwrap().push(request);
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err("no scripted reply".to_owned()))
        }
    }
}
