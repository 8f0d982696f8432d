use aina_core::error::AinaError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};

/// Failure classes a handler can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadInput,
    NotFound,
    Upstream,
}

impl ErrorKind {
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorKind::BadInput => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Upstream => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Unified API error type
#[derive(Debug)]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
    pub details: Option<String>,
    /// Extra top-level fields merged into the body
    pub context: Map<String, Value>,
}

impl ApiError {
    fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into(), details: None, context: Map::new() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadInput, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Wrap a data source failure under a user-facing message.
    ///
    /// Missing files become 404, everything else 500.
    pub fn source(message: impl Into<String>, err: AinaError) -> Self {
        let message = message.into();
        tracing::error!(error = %err, "{}", message);

        let kind = if err.is_not_found() { ErrorKind::NotFound } else { ErrorKind::Upstream };
        Self::new(kind, message).with_details(err.to_string())
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_context(mut self, key: &str, value: impl Serialize) -> Self {
        if let Ok(value) = serde_json::to_value(value) {
            self.context.insert(key.to_string(), value);
        }
        self
    }

    pub fn status(&self) -> StatusCode {
        self.kind.status()
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(flatten)]
    context: Map<String, Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody { message: self.message, error: self.details, context: self.context };
        (status, Json(body)).into_response()
    }
}

impl From<AinaError> for ApiError {
    fn from(err: AinaError) -> Self {
        Self::source("Internal error", err)
    }
}
