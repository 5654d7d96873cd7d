use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use bson::doc;
use http_body_util::BodyExt;
use serde_json::Value;

use snapschool::config::cors::CorsConfig;
use snapschool::config::jwt::JwtConfig;
use snapschool::db::DocumentStore;
use snapschool::db::memory::InMemoryStore;
use snapschool::router::init_router;
use snapschool::state::AppState;
use snapschool::stripe::MockPaymentProvider;
use snapschool::utils::jwt::create_access_token;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

pub struct TestApp {
    pub app: axum::Router,
    pub state: AppState,
    pub payments: Arc<MockPaymentProvider>,
}

/// Builds the real router over the in-memory store and the mock payment
/// provider. `state` stays available for seeding and assertions.
pub fn setup_test_app() -> TestApp {
    let payments = Arc::new(MockPaymentProvider::default());
    let state = AppState {
        store: Arc::new(InMemoryStore::default()),
        payments: payments.clone(),
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
    };
    let app = init_router(state.clone());

    TestApp {
        app,
        state,
        payments,
    }
}

/// Inserts a user document directly into the store, returning its hex id.
#[allow(dead_code)]
pub async fn seed_user(state: &AppState, email: &str, role: Option<&str>) -> String {
    let mut document = doc! { "email": email };
    if let Some(role) = role {
        document.insert("role", role);
    }

    state
        .store
        .insert_one("users", document)
        .await
        .unwrap()
        .inserted_id
}

#[allow(dead_code)]
pub fn mint_token(state: &AppState, email: &str) -> String {
    create_access_token(email, &state.jwt_config).unwrap()
}

/// Request builder covering every shape the suites need: optional bearer
/// token, optional JSON body.
pub fn request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<&Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }

    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
