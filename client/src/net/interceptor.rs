//! Response interceptors applied to every session API call.
//!
//! SYSTEM CONTEXT
//! ==============
//! Interceptors are registered once on the `ApiClient` and observe the
//! outcome of every call. They only add side effects: the caller always gets
//! the original response or error back, and no interceptor ever re-issues a
//! request.

#[cfg(test)]
#[path = "interceptor_test.rs"]
mod interceptor_test;

use super::error::ApiError;
use super::transport::RawResponse;

/// Client-side entry point for unauthenticated users.
pub const LOGIN_ROUTE: &str = "/login";

/// Observer hook for call outcomes.
pub trait ResponseInterceptor: Send + Sync {
    /// Called for every 2xx response before it is decoded.
    fn on_response(&self, _response: &RawResponse) {}

    /// Called for every failed call: transport, status, or schema errors.
    fn on_error(&self, error: &ApiError);
}

/// Access to the browser location.
pub trait Navigator: Send + Sync {
    fn current_path(&self) -> String;

    /// Full page navigation; in-flight application state is abandoned.
    fn assign(&self, path: &str);
}

/// `window.location`-backed navigator.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            String::new()
        }
    }

    fn assign(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
        }
    }
}

/// Sends the user to the login page when the session is rejected.
///
/// Fires only for an HTTP 401 and only when the user is not already on
/// [`LOGIN_ROUTE`], so a failed login attempt stays on the form.
pub struct UnauthorizedRedirect<N> {
    navigator: N,
}

impl<N: Navigator> UnauthorizedRedirect<N> {
    pub fn new(navigator: N) -> Self {
        Self { navigator }
    }
}

impl<N: Navigator> ResponseInterceptor for UnauthorizedRedirect<N> {
    fn on_error(&self, error: &ApiError) {
        if !error.is_unauthorized() {
            return;
        }
        let path = self.navigator.current_path();
        if path == LOGIN_ROUTE {
            return;
        }
        log::warn!("session rejected on {path}; redirecting to {LOGIN_ROUTE}");
        self.navigator.assign(LOGIN_ROUTE);
    }
}
