//! Handler for short-name redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Resolves a short name and issues a 301 to its destination URL.
///
/// # Endpoint
///
/// `GET /{name}` — the catch-all route. It is registered alongside the
/// `/links` subtree; axum matches literal segments ahead of captures,
/// so `/links` itself is never treated as a name lookup.
///
/// Any non-empty path segment is a legal lookup key. Names are opaque
/// identifiers chosen at creation time, so no validation happens here.
///
/// # Errors
///
/// Returns 404 with a generic body when the name is unknown; no
/// internal detail is leaked.
pub async fn redirect_handler(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let link = state.link_service.get_by_name(&name).await?;

    // Stored urls are validated at creation, so this only trips on a
    // corrupted record.
    let location = HeaderValue::from_str(&link.url).map_err(|e| {
        tracing::error!(error = %e, name, "stored url is not a valid Location header");
        AppError::Internal
    })?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}
