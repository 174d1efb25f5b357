//! HTTP-level integration tests for the auth surface.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, seed_user_and_login};
use sqlx::SqlitePool;
use tower::ServiceExt;

#[sqlx::test(migrations = "../db/migrations")]
async fn login_returns_token_and_user(pool: SqlitePool) {
    let token = seed_user_and_login(&pool, "pm@example.com", "correct-horse-battery").await;
    assert!(!token.is_empty());

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["email"], "pm@example.com");
    // The password hash never appears in responses.
    assert!(json.get("password_hash").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_with_wrong_password_returns_401(pool: SqlitePool) {
    seed_user_and_login(&pool, "pm@example.com", "right-password").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({"email": "pm@example.com", "password": "wrong-password"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_with_unknown_email_returns_401(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({"email": "nobody@example.com", "password": "whatever"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn me_without_token_returns_401(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn logout_revokes_the_session(pool: SqlitePool) {
    let token = seed_user_and_login(&pool, "pm@example.com", "some-password").await;

    let app = common::build_test_app(pool.clone());
    let response = app
        .oneshot(
            axum::http::Request::builder()
                .method(axum::http::Method::POST)
                .uri("/api/auth/logout")
                .header(
                    axum::http::header::AUTHORIZATION,
                    format!("Bearer {token}"),
                )
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
