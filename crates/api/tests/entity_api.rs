//! HTTP-level integration tests for the project / sign-type / sign surface.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, post_multipart, put_json};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_project_with_only_name_returns_201_and_defaults(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_multipart(app, "/api/projects", &[("name", "Test Project")], &[]).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Test Project");
    assert_eq!(json["status"], "active");
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_project_without_name_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_multipart(app, "/api/projects", &[("address", "1 Main St")], &[]).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_project_with_invalid_status_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_multipart(
        app,
        "/api/projects",
        &[("name", "Bad Status"), ("status", "archived")],
        &[],
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_nonexistent_project_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/projects/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_projects_returns_created_rows(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    post_multipart(app, "/api/projects", &[("name", "P1")], &[]).await;
    let app = common::build_test_app(pool.clone());
    post_multipart(app, "/api/projects", &[("name", "P2")], &[]).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/projects").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Sign types
// ---------------------------------------------------------------------------

async fn create_project(pool: &SqlitePool, name: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_multipart(app, "/api/projects", &[("name", name)], &[]).await;
    body_json(response).await["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn sign_type_create_and_aggregate_listing(pool: SqlitePool) {
    let project_id = create_project(&pool, "Types").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/projects/{project_id}/sign-types"),
        serde_json::json!({"name": "ADA Room ID", "category": "interior"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let sign_type = body_json(response).await;
    let sign_type_id = sign_type["id"].as_i64().unwrap();

    // A sign referencing the type shows up in the aggregate count.
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        &format!("/api/projects/{project_id}/signs"),
        serde_json::json!({"sign_type_id": sign_type_id, "unit_price": 85.0, "quantity": 4}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/projects/{project_id}/sign-types")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let listing = json.as_array().unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0]["sign_count"], 1);
    assert!(listing[0]["spec_version"].is_null());
}

// ---------------------------------------------------------------------------
// Signs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn sign_create_get_and_update(pool: SqlitePool) {
    let project_id = create_project(&pool, "Signs").await;

    let app = common::build_test_app(pool.clone());
    let sign_type = body_json(
        post_json(
            app,
            &format!("/api/projects/{project_id}/sign-types"),
            serde_json::json!({"name": "Wayfinding"}),
        )
        .await,
    )
    .await;
    let sign_type_id = sign_type["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/projects/{project_id}/signs"),
        serde_json::json!({"sign_type_id": sign_type_id, "location_ref": "L2 North"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let sign = body_json(response).await;
    assert_eq!(sign["status"], "draft");
    assert_eq!(sign["quantity"], 1);
    let sign_id = sign["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/signs/{sign_id}"),
        serde_json::json!({"unit_price": 120.0, "quantity": 6, "status": "in_review"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["status"], "in_review");
    assert_eq!(updated["quantity"], 6);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/signs/{sign_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["location_ref"], "L2 North");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn sign_with_foreign_sign_type_is_rejected(pool: SqlitePool) {
    let project_a = create_project(&pool, "A").await;
    let project_b = create_project(&pool, "B").await;

    let app = common::build_test_app(pool.clone());
    let sign_type = body_json(
        post_json(
            app,
            &format!("/api/projects/{project_a}/sign-types"),
            serde_json::json!({"name": "Exit"}),
        )
        .await,
    )
    .await;
    let foreign_type_id = sign_type["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/projects/{project_b}/signs"),
        serde_json::json!({"sign_type_id": foreign_type_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn tile_art_attach_and_fetch(pool: SqlitePool) {
    let project_id = create_project(&pool, "Art").await;
    let app = common::build_test_app(pool.clone());
    let sign_type = body_json(
        post_json(
            app,
            &format!("/api/projects/{project_id}/sign-types"),
            serde_json::json!({"name": "Room ID"}),
        )
        .await,
    )
    .await;
    let app = common::build_test_app(pool.clone());
    let sign = body_json(
        post_json(
            app,
            &format!("/api/projects/{project_id}/signs"),
            serde_json::json!({"sign_type_id": sign_type["id"]}),
        )
        .await,
    )
    .await;
    let sign_id = sign["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/signs/{sign_id}/tile-art"),
        serde_json::json!({"params": {"dpi": 300}, "version": "v1.0"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let artwork = body_json(response).await;
    // A fresh artwork record is not stale.
    assert_eq!(artwork["params"]["stale"], false);
    assert_eq!(artwork["params"]["dpi"], 300);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/signs/{sign_id}/tile-art")).await;
    assert_eq!(response.status(), StatusCode::OK);
}
