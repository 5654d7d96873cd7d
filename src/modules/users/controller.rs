use axum::{
    Json,
    extract::{Path, State},
};
use bson::Document;
use serde_json::{Value, json};
use tracing::instrument;

use crate::db::{DeleteReceipt, UpdateReceipt};
use crate::middleware::auth::AuthUser;
use crate::middleware::role::RequireAdmin;
use crate::modules::users::model::{
    AdminCheckResponse, InstructorCheckResponse, RegisterUserDto, Role,
};
use crate::modules::users::service::{RegistrationOutcome, UserService};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/users",
    request_body = RegisterUserDto,
    responses(
        (status = 200, description = "Insert receipt, or `{\"message\":\"user already existed\"}` for a repeat registration"),
        (status = 400, description = "Missing email"),
        (status = 422, description = "Invalid email")
    ),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterUserDto>,
) -> Result<Json<Value>, AppError> {
    match UserService::register(state.store.as_ref(), dto).await? {
        RegistrationOutcome::AlreadyExists => Ok(Json(json!({ "message": "user already existed" }))),
        RegistrationOutcome::Created(receipt) => Ok(Json(serde_json::to_value(receipt)?)),
    }
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All user documents"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an admin")
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _admin))]
pub async fn get_users(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> Result<Json<Vec<Document>>, AppError> {
    let users = UserService::list_all(state.store.as_ref()).await?;

    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/users/instructor",
    responses(
        (status = 200, description = "User documents with role `instructor`")
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_instructors(
    State(state): State<AppState>,
) -> Result<Json<Vec<Document>>, AppError> {
    let instructors = UserService::list_instructors(state.store.as_ref()).await?;

    Ok(Json(instructors))
}

#[utoipa::path(
    get,
    path = "/users/admin/{email}",
    params(("email" = String, Path, description = "Email to check")),
    responses(
        (status = 200, description = "Whether the email belongs to an admin", body = AdminCheckResponse),
        (status = 401, description = "Missing or invalid token")
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn check_admin(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<AdminCheckResponse>, AppError> {
    // Callers may only probe their own email; a mismatch is answered
    // immediately with `false`, never with a second write.
    if auth_user.email() != email {
        return Ok(Json(AdminCheckResponse { admin: false }));
    }

    let role = UserService::role_of(state.store.as_ref(), &email).await?;

    Ok(Json(AdminCheckResponse {
        admin: role == Some(Role::Admin),
    }))
}

#[utoipa::path(
    get,
    path = "/users/instructor/{email}",
    params(("email" = String, Path, description = "Email to check")),
    responses(
        (status = 200, description = "Whether the email belongs to an instructor", body = InstructorCheckResponse),
        (status = 401, description = "Missing or invalid token")
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn check_instructor(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<InstructorCheckResponse>, AppError> {
    if auth_user.email() != email {
        return Ok(Json(InstructorCheckResponse { instructor: false }));
    }

    let role = UserService::role_of(state.store.as_ref(), &email).await?;

    Ok(Json(InstructorCheckResponse {
        instructor: role == Some(Role::Instructor),
    }))
}

#[utoipa::path(
    patch,
    path = "/users/admin/{id}",
    params(("id" = String, Path, description = "User ObjectId (24-char hex)")),
    responses(
        (status = 200, description = "Update receipt", body = UpdateReceipt),
        (status = 400, description = "Invalid id")
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn promote_admin(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UpdateReceipt>, AppError> {
    let receipt = UserService::promote(state.store.as_ref(), &id, Role::Admin).await?;

    Ok(Json(receipt))
}

#[utoipa::path(
    patch,
    path = "/users/instructor/{id}",
    params(("id" = String, Path, description = "User ObjectId (24-char hex)")),
    responses(
        (status = 200, description = "Update receipt", body = UpdateReceipt),
        (status = 400, description = "Invalid id")
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn promote_instructor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UpdateReceipt>, AppError> {
    let receipt = UserService::promote(state.store.as_ref(), &id, Role::Instructor).await?;

    Ok(Json(receipt))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User ObjectId (24-char hex)")),
    responses(
        (status = 200, description = "Delete receipt", body = DeleteReceipt),
        (status = 400, description = "Invalid id")
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteReceipt>, AppError> {
    let receipt = UserService::delete_by_id(state.store.as_ref(), &id).await?;

    Ok(Json(receipt))
}
