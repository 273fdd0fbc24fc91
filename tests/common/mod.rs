#![allow(dead_code)]

use axum_test::TestServer;
use golinks::routes::app_router;
use golinks::state::AppState;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Builds a test server over the full application router, so routing
/// precedence between `/links` and the `/{name}` catch-all is exercised
/// exactly as in production.
pub fn make_server(pool: SqlitePool) -> TestServer {
    TestServer::new(app_router(AppState::new(pool))).unwrap()
}

/// Seeds a link directly through the store, bypassing the API.
pub async fn create_test_link(pool: &SqlitePool, name: &str, url: &str) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO links (id, name, url) VALUES (?, ?, ?)")
        .bind(id)
        .bind(name)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
    id
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}
