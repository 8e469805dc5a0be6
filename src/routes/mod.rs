pub mod analytics;
pub mod health;
pub mod videos;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_PAGE, DEFAULT_PER_PAGE};
use crate::error::RelayError;

/// Standard success body: `{success, data, message}`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Json<Self> {
        Json(Envelope {
            success: true,
            data,
            message: message.into(),
            timestamp: None,
        })
    }

    pub fn stamped(data: T, message: impl Into<String>) -> Json<Self> {
        Json(Envelope {
            success: true,
            data,
            message: message.into(),
            timestamp: Some(chrono::Utc::now().to_rfc3339()),
        })
    }
}

/// Success body with the payload fields lifted next to `success`.
#[derive(Debug, Serialize)]
pub struct FlatEnvelope<T> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
    pub message: String,
}

impl<T: Serialize> FlatEnvelope<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Json<Self> {
        Json(FlatEnvelope {
            success: true,
            data,
            message: message.into(),
        })
    }
}

/// `Query` whose rejection is reported through the JSON failure body.
pub struct RelayQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for RelayQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = RelayError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::try_from_uri(&parts.uri)?;
        Ok(RelayQuery(value))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PagingQuery {
    pub per_page: Option<String>,
    pub page: Option<String>,
}

impl PagingQuery {
    /// `(per_page, page)` with the route defaults filled in.
    pub fn resolve(&self) -> Result<(u32, u32), RelayError> {
        Ok((
            parse_number("per_page", self.per_page.as_deref())?.unwrap_or(DEFAULT_PER_PAGE),
            parse_number("page", self.page.as_deref())?.unwrap_or(DEFAULT_PAGE),
        ))
    }
}

/// Parse an optional numeric query parameter. Missing or blank is `None`.
pub fn parse_number(name: &str, raw: Option<&str>) -> Result<Option<u32>, RelayError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<u32>()
            .map(Some)
            .map_err(|_| RelayError::BadRequest(format!("Invalid {} parameter", name))),
    }
}

pub fn parse_video_id(raw: &str) -> Result<u64, RelayError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| RelayError::BadRequest(format!("Invalid video id: {}", raw)))
}

/// Treat blank strings as absent.
pub fn non_blank(raw: Option<String>) -> Option<String> {
    raw.filter(|s| !s.trim().is_empty())
}
