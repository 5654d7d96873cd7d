mod common;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use common::{body_json, mint_token, request, seed_user, setup_test_app};

#[tokio::test]
async fn test_issue_token() {
    let test_app = setup_test_app();

    let response = test_app
        .app
        .oneshot(request(
            "POST",
            "/jwt",
            None,
            Some(&json!({ "email": "a@x.com" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_issue_token_requires_email() {
    let test_app = setup_test_app();

    let response = test_app
        .app
        .oneshot(request("POST", "/jwt", None, Some(&json!({}))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], true);
    assert_eq!(body["message"], "email is required");
}

#[tokio::test]
async fn test_protected_route_without_header() {
    let test_app = setup_test_app();

    let response = test_app
        .app
        .oneshot(request("GET", "/users", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], true);
    assert_eq!(body["message"], "unauthorized access");
}

#[tokio::test]
async fn test_protected_route_with_malformed_header() {
    let test_app = setup_test_app();

    // No space, so no token can be extracted
    let response = test_app
        .app
        .oneshot(
            axum::http::Request::builder()
                .method("GET")
                .uri("/users")
                .header("authorization", "garbage-without-a-space")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_invalid_token() {
    let test_app = setup_test_app();

    let response = test_app
        .app
        .oneshot(request("GET", "/users", Some("not.a.real.token"), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "unauthorized access");
}

#[tokio::test]
async fn test_admin_gate_denies_student_role() {
    let test_app = setup_test_app();
    seed_user(&test_app.state, "student@x.com", Some("student")).await;
    let token = mint_token(&test_app.state, "student@x.com");

    let response = test_app
        .app
        .oneshot(request("GET", "/users", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["error"], true);
    assert_eq!(body["message"], "forbidden access");
}

#[tokio::test]
async fn test_admin_gate_denies_instructor_role() {
    let test_app = setup_test_app();
    seed_user(&test_app.state, "teach@x.com", Some("instructor")).await;
    let token = mint_token(&test_app.state, "teach@x.com");

    let response = test_app
        .app
        .oneshot(request("GET", "/users", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_gate_denies_unset_role() {
    let test_app = setup_test_app();
    seed_user(&test_app.state, "plain@x.com", None).await;
    let token = mint_token(&test_app.state, "plain@x.com");

    let response = test_app
        .app
        .oneshot(request("GET", "/users", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_gate_denies_unknown_user() {
    let test_app = setup_test_app();
    // Valid token but no user record at all
    let token = mint_token(&test_app.state, "ghost@x.com");

    let response = test_app
        .app
        .oneshot(request("GET", "/users", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_gate_allows_admin() {
    let test_app = setup_test_app();
    seed_user(&test_app.state, "admin@x.com", Some("admin")).await;
    seed_user(&test_app.state, "other@x.com", None).await;
    let token = mint_token(&test_app.state, "admin@x.com");

    let response = test_app
        .app
        .oneshot(request("GET", "/users", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_liveness() {
    let test_app = setup_test_app();

    let response = test_app
        .app
        .oneshot(request("GET", "/", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
