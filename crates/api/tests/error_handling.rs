//! Cross-cutting error shape tests.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_route_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn not_found_body_carries_code_and_message(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/signs/424242").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert!(json["error"].as_str().unwrap().contains("Sign"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_master_sign_type_returns_409(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/master-sign-types",
        serde_json::json!({"name": "Monument"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/master-sign-types",
        serde_json::json!({"name": "Monument"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn validation_error_body_carries_code(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let project = body_json(
        common::post_multipart(app, "/api/projects", &[("name", "Errors")], &[]).await,
    )
    .await;
    let project_id = project["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/projects/{project_id}/rfqs"),
        serde_json::json!({"scope": "x", "status": "bogus"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}
