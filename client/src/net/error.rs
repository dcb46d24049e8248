//! Normalized API errors and the user-facing message resolver.
//!
//! DESIGN
//! ======
//! Every failure from the session API collapses into one `ApiError` so views
//! never inspect raw response bodies. The backend speaks the FastAPI error
//! envelope: `{"detail": "..."}` for plain failures and
//! `{"detail": [{"loc": [...], "msg": "...", "type": "..."}]}` for request
//! validation failures.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;
use serde_json::Value;

/// Message used when an error carries nothing a user could read.
pub const DEFAULT_ERROR_MESSAGE: &str = "Erro desconhecido";

/// HTTP status the interceptor and login form treat as "not authenticated".
pub const STATUS_UNAUTHORIZED: u16 = 401;

/// Errors produced by session API client operations.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, detail: ErrorDetail },

    /// The request never produced a response (offline, DNS, CORS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// A 2xx body did not match the expected schema.
    #[error("response schema mismatch: {0}")]
    Schema(String),
}

impl ApiError {
    /// Build a status error from a raw response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Status { status, detail: ErrorDetail::parse(body) }
    }

    /// HTTP status, when the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Schema(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(STATUS_UNAUTHORIZED)
    }

    /// User-facing message with the default fallback.
    pub fn message(&self) -> String {
        error_message(Some(self), DEFAULT_ERROR_MESSAGE)
    }

    /// One-line description for logs: the error, its user-facing message and
    /// the location of every validation issue.
    pub fn summary(&self) -> String {
        let mut line = format!("{self}: {}", self.message());
        if let Self::Status { detail: ErrorDetail::Issues(issues), .. } = self {
            let paths: Vec<String> = issues.iter().map(ValidationIssue::path).collect();
            line.push_str(&format!(" [{}]", paths.join(", ")));
        }
        line
    }
}

/// The `detail` payload of a backend error envelope.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorDetail {
    /// Single human-readable message.
    Message(String),
    /// Ordered field-level validation issues.
    Issues(Vec<ValidationIssue>),
    /// Missing, non-JSON, or otherwise unknown body.
    Unrecognized,
}

impl ErrorDetail {
    /// Parse an error body, never failing: unknown shapes become `Unrecognized`.
    ///
    /// List entries are read one by one, so a malformed sibling never hides
    /// the first issue's message.
    pub fn parse(body: &str) -> Self {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(ErrorEnvelope { detail: Some(DetailWire::Message(message)) }) => Self::Message(message),
            Ok(ErrorEnvelope { detail: Some(DetailWire::Issues(items)) }) => {
                Self::Issues(items.iter().map(ValidationIssue::from_value).collect())
            }
            Ok(ErrorEnvelope { detail: None }) | Err(_) => Self::Unrecognized,
        }
    }
}

/// One entry of a validation failure list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Location of the offending value, e.g. `["body", "email"]`.
    pub loc: Vec<LocSegment>,
    /// Human-readable message, absent when the entry has no string `msg`.
    pub msg: Option<String>,
    /// Machine-readable issue kind, e.g. `"value_error"`. Empty when absent.
    pub kind: String,
}

impl ValidationIssue {
    /// Read an issue from any JSON value. Missing or mistyped fields are
    /// left empty instead of rejecting the entry.
    fn from_value(value: &Value) -> Self {
        let loc = value
            .get("loc")
            .and_then(Value::as_array)
            .map(|segments| segments.iter().map(LocSegment::from_value).collect())
            .unwrap_or_default();
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_owned);
        Self { loc, msg: text("msg"), kind: text("type").unwrap_or_default() }
    }

    /// Dotted field path, e.g. `body.email` or `items.0.name`.
    pub fn path(&self) -> String {
        self.loc
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// A path segment: object key, array index, or any other JSON value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocSegment {
    Index(u64),
    Field(String),
    Other(Value),
}

impl LocSegment {
    fn from_value(value: &Value) -> Self {
        if let Some(field) = value.as_str() {
            Self::Field(field.to_owned())
        } else if let Some(index) = value.as_u64() {
            Self::Index(index)
        } else {
            Self::Other(value.clone())
        }
    }
}

impl std::fmt::Display for LocSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Field(field) => f.write_str(field),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    detail: Option<DetailWire>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DetailWire {
    Message(String),
    Issues(Vec<Value>),
}

/// Resolve the message a view should display for `error`.
///
/// Server message first, then the first validation issue's `msg`, then
/// `fallback`. Transport and schema failures, as well as the absence of an
/// error, always resolve to `fallback`.
pub fn error_message(error: Option<&ApiError>, fallback: &str) -> String {
    let Some(ApiError::Status { detail, .. }) = error else {
        return fallback.to_owned();
    };
    match detail {
        ErrorDetail::Message(message) => message.clone(),
        ErrorDetail::Issues(issues) => issues
            .first()
            .and_then(|issue| issue.msg.clone())
            .unwrap_or_else(|| fallback.to_owned()),
        ErrorDetail::Unrecognized => fallback.to_owned(),
    }
}
