//! HTTP-level integration tests for spec pages and artwork staleness.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, post_multipart};
use sqlx::SqlitePool;

async fn project_with_type(pool: &SqlitePool) -> (i64, i64) {
    let app = common::build_test_app(pool.clone());
    let project = body_json(post_multipart(app, "/api/projects", &[("name", "Specs")], &[]).await).await;
    let project_id = project["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let sign_type = body_json(
        post_json(
            app,
            &format!("/api/projects/{project_id}/sign-types"),
            serde_json::json!({"name": "ADA Room ID"}),
        )
        .await,
    )
    .await;
    (project_id, sign_type["id"].as_i64().unwrap())
}

#[sqlx::test(migrations = "../db/migrations")]
async fn spec_versions_walk_by_point_one(pool: SqlitePool) {
    let (_, sign_type_id) = project_with_type(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_multipart(
        app,
        &format!("/api/sign-types/{sign_type_id}/spec"),
        &[
            ("title", "Room ID Spec"),
            ("requirements", r#"{"material": "acrylic"}"#),
        ],
        &[],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let spec = body_json(response).await;
    assert_eq!(spec["version"], "v1.0");

    let app = common::build_test_app(pool.clone());
    let response = post_multipart(
        app,
        &format!("/api/sign-types/{sign_type_id}/spec"),
        &[
            ("title", "Room ID Spec (revised)"),
            ("requirements", r#"{"material": "photopolymer"}"#),
        ],
        &[],
    )
    .await;
    let spec = body_json(response).await;
    assert_eq!(spec["version"], "v1.1");
    assert_eq!(spec["requirements"]["material"], "photopolymer");

    // The aggregate listing reflects the new version.
    let app = common::build_test_app(pool.clone());
    let sign_type = body_json(get(app, &format!("/api/sign-types/{sign_type_id}")).await).await;
    let project_id = sign_type["project_id"].as_i64().unwrap();
    let app = common::build_test_app(pool);
    let listing = body_json(get(app, &format!("/api/projects/{project_id}/sign-types")).await).await;
    assert_eq!(listing[0]["spec_version"], "v1.1");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn spec_update_flags_artworks_stale(pool: SqlitePool) {
    let (project_id, sign_type_id) = project_with_type(&pool).await;

    let app = common::build_test_app(pool.clone());
    let sign = body_json(
        post_json(
            app,
            &format!("/api/projects/{project_id}/signs"),
            serde_json::json!({"sign_type_id": sign_type_id}),
        )
        .await,
    )
    .await;
    let sign_id = sign["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        &format!("/api/signs/{sign_id}/tile-art"),
        serde_json::json!({"params": {"dpi": 300}}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    post_multipart(
        app,
        &format!("/api/sign-types/{sign_type_id}/spec"),
        &[("title", "Spec")],
        &[],
    )
    .await;

    let app = common::build_test_app(pool);
    let artwork = body_json(get(app, &format!("/api/signs/{sign_id}/tile-art")).await).await;
    assert_eq!(artwork["params"]["stale"], true);
    assert_eq!(artwork["params"]["dpi"], 300);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn spec_with_invalid_requirements_json_returns_400(pool: SqlitePool) {
    let (_, sign_type_id) = project_with_type(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_multipart(
        app,
        &format!("/api/sign-types/{sign_type_id}/spec"),
        &[("title", "Spec"), ("requirements", "not-json")],
        &[],
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn spec_for_unknown_sign_type_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_multipart(
        app,
        "/api/sign-types/424242/spec",
        &[("title", "Spec")],
        &[],
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
