use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

use super::controller::{
    create_class, get_classes, get_classes_by_instructor, update_class, update_class_feedback,
    update_class_status,
};

pub fn init_classes_router() -> Router<AppState> {
    // `/{key}` serves both the instructor-email filter (GET) and the
    // partial patch by id (PUT); one registration, per-method handlers.
    Router::new()
        .route("/", get(get_classes).post(create_class))
        .route("/status/{id}", put(update_class_status))
        .route("/feedback/{id}", put(update_class_feedback))
        .route("/{key}", get(get_classes_by_instructor).put(update_class))
}
