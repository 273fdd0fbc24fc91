mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::SqlitePool;
use uuid::Uuid;

// ─── GET /links ──────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_list_links_empty(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server.get("/links").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body, json!([]));
}

#[sqlx::test]
async fn test_list_links_with_data(pool: SqlitePool) {
    common::create_test_link(&pool, "docs", "https://example.com/docs").await;
    common::create_test_link(&pool, "wiki", "https://wiki.example.com").await;
    common::create_test_link(&pool, "repo", "https://github.com/example").await;

    let server = common::make_server(pool);
    let response = server.get("/links").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 3);

    let names: Vec<&str> = items
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"docs"));
    assert!(names.contains(&"wiki"));
    assert!(names.contains(&"repo"));
}

// ─── POST /links ─────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_link(pool: SqlitePool) {
    let server = common::make_server(pool.clone());

    let response = server
        .post("/links")
        .json(&json!({ "name": "docs", "url": "https://example.com/docs" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["name"], "docs");
    assert_eq!(body["url"], "https://example.com/docs");
    // The assigned id is a well-formed UUID.
    Uuid::parse_str(body["id"].as_str().unwrap()).unwrap();

    // The created link is retrievable afterwards.
    let list = server.get("/links").await.json::<serde_json::Value>();
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[sqlx::test]
async fn test_create_duplicate_name_conflict(pool: SqlitePool) {
    let server = common::make_server(pool.clone());
    let body = json!({ "name": "docs", "url": "https://example.com/docs" });

    server
        .post("/links")
        .json(&body)
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.post("/links").json(&body).await;

    response.assert_status(StatusCode::CONFLICT);
    let error = response.json::<serde_json::Value>();
    assert_eq!(error["error"], "Conflict");
    assert_eq!(error["message"], "Short name already exists");

    // No second record was created.
    assert_eq!(common::count_links(&pool).await, 1);
}

#[sqlx::test]
async fn test_create_concurrent_same_name(pool: SqlitePool) {
    let server = common::make_server(pool.clone());
    let body = json!({ "name": "race", "url": "https://example.com" });

    let (first, second) = tokio::join!(
        async { server.post("/links").json(&body).await },
        async { server.post("/links").json(&body).await },
    );

    let mut statuses = [first.status_code(), second.status_code()];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::CREATED, StatusCode::CONFLICT]);

    assert_eq!(common::count_links(&pool).await, 1);
}

#[sqlx::test]
async fn test_create_invalid_bodies_rejected(pool: SqlitePool) {
    let server = common::make_server(pool.clone());

    let invalid_bodies = [
        json!({}),
        json!({ "url": "https://example.com" }),
        json!({ "name": "", "url": "https://example.com" }),
        json!({ "name": 42, "url": "https://example.com" }),
        json!({ "name": true, "url": "https://example.com" }),
        json!({ "name": "docs" }),
        json!({ "name": "docs", "url": "" }),
        json!({ "name": "docs", "url": 42 }),
        json!({ "name": "docs", "url": "not-a-url" }),
    ];

    for body in &invalid_bodies {
        let response = server.post("/links").json(body).await;

        response.assert_status_bad_request();
        let error = response.json::<serde_json::Value>();
        assert_eq!(error["error"], "Bad Request", "body: {body}");
        assert!(error["message"].is_array(), "body: {body}");
        assert!(
            !error["message"].as_array().unwrap().is_empty(),
            "body: {body}"
        );
    }

    // Validation failures never touch the store.
    assert_eq!(common::count_links(&pool).await, 0);
}

// ─── PUT /links/{id} ─────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_link_replaces_wholesale(pool: SqlitePool) {
    let id = common::create_test_link(&pool, "docs", "https://example.com/docs").await;

    let server = common::make_server(pool);
    let response = server
        .put(&format!("/links/{id}"))
        .json(&json!({ "name": "x2", "url": "https://x.org" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["id"], id.to_string());
    assert_eq!(body["name"], "x2");
    assert_eq!(body["url"], "https://x.org");
}

#[sqlx::test]
async fn test_update_unknown_id_not_found(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server
        .put(&format!("/links/{}", Uuid::new_v4()))
        .json(&json!({ "name": "x2", "url": "https://x.org" }))
        .await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_update_malformed_id_rejected(pool: SqlitePool) {
    let server = common::make_server(pool);

    for bad_id in ["42", "not-a-uuid"] {
        let response = server
            .put(&format!("/links/{bad_id}"))
            .json(&json!({ "name": "x2", "url": "https://x.org" }))
            .await;

        response.assert_status_bad_request();
        let error = response.json::<serde_json::Value>();
        assert_eq!(error["error"], "Bad Request");
    }
}

#[sqlx::test]
async fn test_update_invalid_body_leaves_store_untouched(pool: SqlitePool) {
    let id = common::create_test_link(&pool, "docs", "https://example.com/docs").await;

    let server = common::make_server(pool.clone());
    let response = server
        .put(&format!("/links/{id}"))
        .json(&json!({ "name": "x2", "url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();

    let (name, url): (String, String) =
        sqlx::query_as("SELECT name, url FROM links WHERE id = ?")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(name, "docs");
    assert_eq!(url, "https://example.com/docs");
}

#[sqlx::test]
async fn test_update_rename_onto_taken_name_conflict(pool: SqlitePool) {
    common::create_test_link(&pool, "docs", "https://example.com/docs").await;
    let id = common::create_test_link(&pool, "wiki", "https://wiki.example.com").await;

    let server = common::make_server(pool);
    let response = server
        .put(&format!("/links/{id}"))
        .json(&json!({ "name": "docs", "url": "https://wiki.example.com" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

// ─── DELETE /links/{id} ──────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_link(pool: SqlitePool) {
    let id = common::create_test_link(&pool, "docs", "https://example.com/docs").await;

    let server = common::make_server(pool.clone());
    let response = server.delete(&format!("/links/{id}")).await;

    response.assert_status_ok();
    assert_eq!(response.text(), "");
    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_delete_twice_second_is_not_found(pool: SqlitePool) {
    let id = common::create_test_link(&pool, "docs", "https://example.com/docs").await;

    let server = common::make_server(pool);

    server
        .delete(&format!("/links/{id}"))
        .await
        .assert_status_ok();

    let response = server.delete(&format!("/links/{id}")).await;

    response.assert_status_not_found();
    let error = response.json::<serde_json::Value>();
    assert_eq!(error["error"], "Not Found");
    assert_eq!(
        error["message"],
        format!("Link with ID: \"{id}\" not found")
    );
}

#[sqlx::test]
async fn test_delete_unknown_id_message_carries_literal_id(pool: SqlitePool) {
    let server = common::make_server(pool);

    let id = Uuid::new_v4();
    let response = server.delete(&format!("/links/{id}")).await;

    response.assert_status_not_found();
    let error = response.json::<serde_json::Value>();
    assert!(
        error["message"]
            .as_str()
            .unwrap()
            .contains(&id.to_string())
    );
}

#[sqlx::test]
async fn test_delete_malformed_id_rejected(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server.delete("/links/not-a-uuid").await;

    response.assert_status_bad_request();
}
