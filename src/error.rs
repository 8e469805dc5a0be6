use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::warn;

/// What went wrong on the way to (or back from) the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamCause {
    /// The request never produced a response (DNS, connect, TLS, body read).
    Transport,
    /// The upstream answered with a non-success status.
    Status(u16),
    /// The response arrived but could not be used.
    MalformedResponse,
}

/// Failure of a single Remote Client operation.
///
/// `context` is the operation-specific prefix and `detail` is the upstream
/// `error` message when the body carried one.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{context}: {detail}")]
pub struct UpstreamError {
    pub context: &'static str,
    pub cause: UpstreamCause,
    pub detail: String,
}

impl UpstreamError {
    pub fn new(context: &'static str, cause: UpstreamCause, detail: impl Into<String>) -> Self {
        UpstreamError {
            context,
            cause,
            detail: detail.into(),
        }
    }

    /// Re-tag the error with an outer operation prefix, keeping the inner
    /// message as the detail.
    pub fn within(self, context: &'static str) -> Self {
        UpstreamError {
            context,
            cause: self.cause,
            detail: self.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{message}: {source}")]
    Upstream {
        message: &'static str,
        #[source]
        source: UpstreamError,
    },

    #[error("{message}: {source}")]
    Unavailable {
        message: &'static str,
        #[source]
        source: UpstreamError,
    },
}

impl RelayError {
    /// Wrap a client failure in the route's failure message.
    pub fn upstream(message: &'static str) -> impl FnOnce(UpstreamError) -> RelayError {
        move |source| RelayError::Upstream { message, source }
    }

    pub fn unavailable(message: &'static str) -> impl FnOnce(UpstreamError) -> RelayError {
        move |source| RelayError::Unavailable { message, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            RelayError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<QueryRejection> for RelayError {
    fn from(rejection: QueryRejection) -> Self {
        RelayError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            RelayError::BadRequest(message) => serde_json::json!({
                "success": false,
                "message": message,
            }),
            RelayError::Upstream { message, source } => {
                warn!(cause = ?source.cause, "{}: {}", message, source);
                serde_json::json!({
                    "success": false,
                    "message": message,
                    "error": source.to_string(),
                })
            }
            RelayError::Unavailable { message, source } => {
                warn!(cause = ?source.cause, "{}: {}", message, source);
                serde_json::json!({
                    "success": false,
                    "message": message,
                    "error": source.to_string(),
                    "timestamp": chrono::Utc::now().to_rfc3339(),
                })
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
