mod common;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tower::ServiceExt;

use snapschool::middleware::role::{RequireAdmin, RequireInstructor};
use snapschool::state::AppState;

use common::{body_json, mint_token, request, seed_user, setup_test_app};

async fn instructor_area(RequireInstructor(user): RequireInstructor) -> Json<Value> {
    Json(json!({ "email": user.email() }))
}

async fn admin_area(RequireAdmin(user): RequireAdmin) -> Json<Value> {
    Json(json!({ "email": user.email() }))
}

/// Router with one route per guard, over the same state the suites use.
fn guarded_router(state: AppState) -> Router {
    Router::new()
        .route("/instructor-area", get(instructor_area))
        .route("/admin-area", get(admin_area))
        .with_state(state)
}

#[tokio::test]
async fn test_instructor_guard_requires_token() {
    let test_app = setup_test_app();
    let app = guarded_router(test_app.state);

    let response = app
        .oneshot(request("GET", "/instructor-area", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_instructor_guard_rejects_unknown_user() {
    let test_app = setup_test_app();
    let token = mint_token(&test_app.state, "ghost@x.com");
    let app = guarded_router(test_app.state);

    let response = app
        .oneshot(request("GET", "/instructor-area", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["message"], "forbidden access");
}

#[tokio::test]
async fn test_instructor_guard_rejects_unset_role() {
    let test_app = setup_test_app();
    seed_user(&test_app.state, "plain@x.com", None).await;
    let token = mint_token(&test_app.state, "plain@x.com");
    let app = guarded_router(test_app.state);

    let response = app
        .oneshot(request("GET", "/instructor-area", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_instructor_guard_rejects_student() {
    let test_app = setup_test_app();
    seed_user(&test_app.state, "student@x.com", Some("student")).await;
    let token = mint_token(&test_app.state, "student@x.com");
    let app = guarded_router(test_app.state);

    let response = app
        .oneshot(request("GET", "/instructor-area", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body, json!({ "error": true, "message": "forbidden access" }));
}

#[tokio::test]
async fn test_instructor_guard_rejects_admin() {
    // Exact-role match, no hierarchy: an admin is not an instructor
    let test_app = setup_test_app();
    seed_user(&test_app.state, "admin@x.com", Some("admin")).await;
    let token = mint_token(&test_app.state, "admin@x.com");
    let app = guarded_router(test_app.state);

    let response = app
        .oneshot(request("GET", "/instructor-area", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_instructor_guard_passes_instructor() {
    let test_app = setup_test_app();
    seed_user(&test_app.state, "teach@x.com", Some("instructor")).await;
    let token = mint_token(&test_app.state, "teach@x.com");
    let app = guarded_router(test_app.state);

    let response = app
        .oneshot(request("GET", "/instructor-area", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["email"], "teach@x.com");
}

#[tokio::test]
async fn test_admin_guard_rejects_instructor() {
    let test_app = setup_test_app();
    seed_user(&test_app.state, "teach@x.com", Some("instructor")).await;
    let token = mint_token(&test_app.state, "teach@x.com");
    let app = guarded_router(test_app.state);

    let response = app
        .oneshot(request("GET", "/admin-area", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_guard_passes_admin() {
    let test_app = setup_test_app();
    seed_user(&test_app.state, "admin@x.com", Some("admin")).await;
    let token = mint_token(&test_app.state, "admin@x.com");
    let app = guarded_router(test_app.state);

    let response = app
        .oneshot(request("GET", "/admin-area", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["email"], "admin@x.com");
}

#[tokio::test]
async fn test_guard_sees_role_changes_immediately() {
    // Roles are resolved per request, never cached
    let test_app = setup_test_app();
    let id = seed_user(&test_app.state, "late@x.com", None).await;
    let token = mint_token(&test_app.state, "late@x.com");
    let app = guarded_router(test_app.state.clone());

    let denied = app
        .clone()
        .oneshot(request("GET", "/instructor-area", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(denied.status(), StatusCode::FORBIDDEN);

    test_app
        .app
        .oneshot(request("PATCH", &format!("/users/instructor/{id}"), None, None))
        .await
        .unwrap();

    let allowed = app
        .oneshot(request("GET", "/instructor-area", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(allowed.status(), StatusCode::OK);
}
