use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{get_payments_by_class, get_payments_by_email, record_payment};

pub fn init_payments_router() -> Router<AppState> {
    // One route per lookup dimension: `/{email}` filters by payer,
    // `/class/{class_id}` by course reference.
    Router::new()
        .route("/", post(record_payment))
        .route("/class/{class_id}", get(get_payments_by_class))
        .route("/{email}", get(get_payments_by_email))
}
