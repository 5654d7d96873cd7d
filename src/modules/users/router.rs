use axum::{
    Router,
    routing::{delete, get},
};

use crate::state::AppState;

use super::controller::{
    check_admin, check_instructor, delete_user, get_instructors, get_users, promote_admin,
    promote_instructor, register_user,
};

pub fn init_users_router() -> Router<AppState> {
    // `/admin/{email}` (GET) and `/admin/{id}` (PATCH) share one segment
    // shape, so they are registered as one route with per-method handlers;
    // likewise `/instructor/{key}`.
    Router::new()
        .route("/", get(get_users).post(register_user))
        .route("/instructor", get(get_instructors))
        .route("/admin/{key}", get(check_admin).patch(promote_admin))
        .route(
            "/instructor/{key}",
            get(check_instructor).patch(promote_instructor),
        )
        .route("/{id}", delete(delete_user))
}
