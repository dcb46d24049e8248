//! Session API client.
//!
//! Wraps the auth endpoints (signup, login, logout, whoami) and the dashboard
//! data endpoint. Each operation makes exactly one attempt.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx statuses, transport failures, and schema mismatches all come back
//! as `ApiError`. Before an error is returned, every registered interceptor
//! sees it; interceptors never change what the caller receives.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use super::error::ApiError;
use super::interceptor::{BrowserNavigator, ResponseInterceptor, UnauthorizedRedirect};
use super::transport::{ApiRequest, BrowserTransport, RawResponse, Transport};
use super::types::{self, AuthResponse, Credentials, DashboardData, MeResponse, MessageResponse};

pub const SIGNUP_PATH: &str = "/api/auth/signup";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const LOGOUT_PATH: &str = "/api/auth/logout";
pub const ME_PATH: &str = "/api/auth/me";
pub const DASHBOARD_DATA_PATH: &str = "/api/dashboard/data";

/// Client used by the browser app: `fetch` transport plus the 401 redirect.
pub type AppApi = ApiClient<BrowserTransport>;

/// Session API client over a pluggable transport.
#[derive(Clone)]
pub struct ApiClient<T> {
    transport: T,
    interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl AppApi {
    /// Build the browser client with the unauthorized-redirect interceptor.
    pub fn browser() -> Self {
        Self::new(BrowserTransport).with_interceptor(UnauthorizedRedirect::new(BrowserNavigator))
    }
}

impl<T: Transport> ApiClient<T> {
    /// Client with no interceptors.
    pub fn new(transport: T) -> Self {
        Self { transport, interceptors: Vec::new() }
    }

    /// Register an interceptor. Interceptors run in registration order.
    #[must_use]
    pub fn with_interceptor(mut self, interceptor: impl ResponseInterceptor + 'static) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    /// `POST /api/auth/signup`.
    ///
    /// # Errors
    ///
    /// 400 when the email is already registered, plus any transport failure.
    pub async fn signup(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let request = ApiRequest::post(SIGNUP_PATH, Some(credentials_body(email, password)?));
        self.call(request, types::decode).await
    }

    /// `POST /api/auth/login`.
    ///
    /// # Errors
    ///
    /// 401 on bad credentials, plus any transport failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let request = ApiRequest::post(LOGIN_PATH, Some(credentials_body(email, password)?));
        self.call(request, types::decode).await
    }

    /// `POST /api/auth/logout`.
    ///
    /// # Errors
    ///
    /// Any non-2xx status or transport failure.
    pub async fn logout(&self) -> Result<MessageResponse, ApiError> {
        self.call(ApiRequest::post(LOGOUT_PATH, None), types::decode).await
    }

    /// `GET /api/auth/me`, schema-validated.
    ///
    /// # Errors
    ///
    /// 401 when not authenticated; `ApiError::Schema` on a malformed body.
    pub async fn me(&self) -> Result<MeResponse, ApiError> {
        self.call(ApiRequest::get(ME_PATH), types::parse_me).await
    }

    /// `GET /api/dashboard/data`, schema-validated.
    ///
    /// # Errors
    ///
    /// 401 when not authenticated; `ApiError::Schema` on a malformed body.
    pub async fn dashboard_data(&self) -> Result<DashboardData, ApiError> {
        self.call(ApiRequest::get(DASHBOARD_DATA_PATH), types::parse_dashboard).await
    }

    async fn call<R>(&self, request: ApiRequest, decode: fn(&str) -> Result<R, ApiError>) -> Result<R, ApiError> {
        let outcome = match self.transport.send(request).await {
            Ok(response) if response.is_success() => {
                self.observe_response(&response);
                decode(&response.body)
            }
            Ok(RawResponse { status, body }) => Err(ApiError::from_response(status, &body)),
            Err(e) => Err(ApiError::Network(e)),
        };
        outcome.inspect_err(|error| self.observe_error(error))
    }

    fn observe_response(&self, response: &RawResponse) {
        for interceptor in &self.interceptors {
            interceptor.on_response(response);
        }
    }

    fn observe_error(&self, error: &ApiError) {
        for interceptor in &self.interceptors {
            interceptor.on_error(error);
        }
    }
}

fn credentials_body(email: &str, password: &str) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(Credentials { email, password }).map_err(|e| ApiError::Schema(e.to_string()))
}
