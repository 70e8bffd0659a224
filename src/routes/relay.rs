//! Document relay route.

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::http::header::{CACHE_CONTROL, CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;

use crate::services::upstream::{self, PDF_CONTENT_TYPE, RelayError};
use crate::state::AppState;

pub const CONTENT_DISPOSITION_INLINE: &str = "inline; filename=\"document.pdf\"";
pub const CACHE_CONTROL_PUBLIC: &str = "public, max-age=3600";
pub const MISSING_URL_MESSAGE: &str = "Missing URL parameter";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch PDF";

#[derive(Debug, Deserialize)]
pub struct ProxyQuery {
    pub url: Option<String>,
}

/// `GET /proxy-pdf?url=<absolute URL>`: fetch the document and stream it back.
///
/// Every request goes upstream; nothing is cached here. The `Cache-Control`
/// header only tells the browser it may keep the response.
pub async fn proxy_pdf(
    State(state): State<AppState>,
    Query(query): Query<ProxyQuery>,
) -> Result<Response, RelayError> {
    let url = required_url(query)?;

    let response = upstream::fetch_document(&state.http, &url)
        .await
        .inspect_err(|e| tracing::error!(%url, error = %e, "relay fetch failed"))?;

    tracing::info!(%url, "relaying document");
    let body = Body::from_stream(response.bytes_stream());

    Ok((
        [
            (CONTENT_TYPE, PDF_CONTENT_TYPE),
            (CONTENT_DISPOSITION, CONTENT_DISPOSITION_INLINE),
            (CACHE_CONTROL, CACHE_CONTROL_PUBLIC),
        ],
        body,
    )
        .into_response())
}

fn required_url(query: ProxyQuery) -> Result<String, RelayError> {
    query
        .url
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .ok_or(RelayError::MissingParameter)
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingParameter => (StatusCode::BAD_REQUEST, MISSING_URL_MESSAGE).into_response(),
            Self::UpstreamStatus { .. } | Self::UpstreamRequest(_) | Self::HttpClientBuild(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": FETCH_FAILED_MESSAGE })),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
#[path = "relay_test.rs"]
mod tests;
