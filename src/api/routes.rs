//! Route configuration for the link management API.

use axum::{
    Router,
    routing::{get, put},
};

use crate::api::handlers::{
    create_link_handler, delete_link_handler, list_links_handler, update_link_handler,
};
use crate::state::AppState;

/// The `/links` CRUD subtree.
///
/// # Endpoints
///
/// - `GET    /links`       - List all links
/// - `POST   /links`       - Create a link
/// - `PUT    /links/{id}`  - Replace a link's name and url
/// - `DELETE /links/{id}`  - Delete a link
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route(
            "/links/{id}",
            put(update_link_handler).delete(delete_link_handler),
        )
}
