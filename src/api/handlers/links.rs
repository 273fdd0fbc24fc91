//! Handlers for the link management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::api::dto::{CreateLinkRequest, LinkResponse, UpdateLinkRequest};
use crate::api::extractors::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every stored link.
///
/// # Endpoint
///
/// `GET /links` — always 200, an empty array when nothing is stored.
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_all().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Creates a link.
///
/// # Endpoint
///
/// `POST /links` with body `{ "name": ..., "url": ... }`.
///
/// # Errors
///
/// Returns 400 on a missing/empty `name` or a missing/empty/relative
/// `url` (rejected by [`ValidatedJson`] before this handler runs),
/// 409 when the name is already taken, 500 on any other persistence
/// failure.
pub async fn create_link_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let link = state.link_service.create(payload.name, payload.url).await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Replaces a link's `name` and `url` wholesale.
///
/// # Endpoint
///
/// `PUT /links/{id}` with the same body shape as create.
///
/// # Errors
///
/// Returns 400 on a malformed id or body, 404 when no link has the id,
/// 409 when renaming onto a taken name.
pub async fn update_link_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    let id = parse_link_id(&id)?;

    let link = state
        .link_service
        .update(id, payload.name, payload.url)
        .await?;

    Ok(Json(link.into()))
}

/// Deletes a link.
///
/// # Endpoint
///
/// `DELETE /links/{id}` — 200 with an empty body on success.
///
/// # Errors
///
/// Returns 400 on a malformed id, 404 when no link has the id. A
/// repeated delete after success is a 404, never a silent 200.
pub async fn delete_link_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let id = parse_link_id(&id)?;

    state.link_service.delete(id).await?;

    Ok(StatusCode::OK)
}

/// Path ids must be well-formed UUIDs; anything else is a 400 that
/// never reaches the service layer.
fn parse_link_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::validation(vec!["id must be a UUID".to_string()]))
}
