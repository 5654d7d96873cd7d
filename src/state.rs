use std::sync::Arc;

use crate::config::cors::CorsConfig;
use crate::config::database::DatabaseConfig;
use crate::config::jwt::JwtConfig;
use crate::config::stripe::StripeConfig;
use crate::db::DocumentStore;
use crate::db::mongo::MongoStore;
use crate::stripe::{PaymentProvider, StripeClient};

/// Shared application state, built once at startup and cloned per request.
/// The store and payment provider are the two long-lived external
/// collaborators; both sit behind trait objects so the tests can swap in
/// doubles.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub payments: Arc<dyn PaymentProvider>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

pub async fn init_app_state() -> AppState {
    let database_config = DatabaseConfig::from_env();
    let store = MongoStore::connect(&database_config)
        .await
        .expect("Failed to connect to MongoDB");

    let stripe_config = StripeConfig::from_env();

    AppState {
        store: Arc::new(store),
        payments: Arc::new(StripeClient::new(&stripe_config)),
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    }
}
