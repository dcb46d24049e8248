//! Wire DTOs for the session and dashboard endpoints.
//!
//! DESIGN
//! ======
//! The backend is versioned independently, so `whoami` and dashboard payloads
//! are parsed-or-failed here rather than trusted: serde enforces field
//! presence and types, then the email fields get the same syntax check the
//! forms use. Auth responses are informational and only loosely typed.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::util::validation::is_valid_email;

/// Request body for signup and login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response to signup and login.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

/// Identity echoed back by signup and login.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthUser {
    pub email: String,
}

/// Response to logout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// The authenticated identity returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MeResponse {
    pub email: String,
}

/// Payload of `/api/dashboard/data`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DashboardData {
    /// Email of the session owner.
    pub user_email: String,
    /// Sales series, in display order.
    pub chart_data: Vec<ChartDataPoint>,
    /// Product rows, in display order.
    pub table_data: Vec<TableRow>,
}

/// One point of the sales series.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChartDataPoint {
    /// Axis label as sent by the backend (e.g. `"2024-01"`).
    pub date: String,
    pub value: f64,
}

/// One product row.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TableRow {
    /// Any JSON number; whole values render without a decimal part.
    pub id: f64,
    pub nome: String,
    pub status: RowStatus,
    pub valor: f64,
}

/// Product status as labeled by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum RowStatus {
    Ativo,
    Pendente,
    Inativo,
}

impl RowStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ativo => "Ativo",
            Self::Pendente => "Pendente",
            Self::Inativo => "Inativo",
        }
    }
}

/// Parse and validate a `/api/auth/me` body.
///
/// # Errors
///
/// `ApiError::Schema` if the body is not `{ "email": <valid email> }`.
pub fn parse_me(body: &str) -> Result<MeResponse, ApiError> {
    let me: MeResponse = decode(body)?;
    check_email("email", &me.email)?;
    Ok(me)
}

/// Parse and validate a `/api/dashboard/data` body.
///
/// # Errors
///
/// `ApiError::Schema` on missing fields, wrong types, unknown statuses, or a
/// malformed `user_email`.
pub fn parse_dashboard(body: &str) -> Result<DashboardData, ApiError> {
    let data: DashboardData = decode(body)?;
    check_email("user_email", &data.user_email)?;
    Ok(data)
}

/// Deserialize a JSON body, mapping failures to `ApiError::Schema`.
///
/// # Errors
///
/// `ApiError::Schema` with the serde error text.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Schema(e.to_string()))
}

fn check_email(field: &str, value: &str) -> Result<(), ApiError> {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(ApiError::Schema(format!("{field}: invalid email {value:?}")))
    }
}
