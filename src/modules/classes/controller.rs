use axum::{
    Json,
    extract::{Path, State},
};
use bson::Document;
use tracing::instrument;

use crate::db::{InsertReceipt, UpdateReceipt};
use crate::middleware::auth::AuthUser;
use crate::modules::classes::model::{
    CreateClassDto, UpdateClassDto, UpdateFeedbackDto, UpdateStatusDto,
};
use crate::modules::classes::service::ClassService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/class",
    responses((status = 200, description = "All class documents")),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_classes(State(state): State<AppState>) -> Result<Json<Vec<Document>>, AppError> {
    let classes = ClassService::list_all(state.store.as_ref()).await?;

    Ok(Json(classes))
}

#[utoipa::path(
    post,
    path = "/class",
    request_body = CreateClassDto,
    responses(
        (status = 200, description = "Insert receipt", body = InsertReceipt),
        (status = 400, description = "Missing required field"),
        (status = 401, description = "Missing or invalid token")
    ),
    tag = "Classes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_class(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateClassDto>,
) -> Result<Json<InsertReceipt>, AppError> {
    let receipt = ClassService::create(state.store.as_ref(), dto).await?;

    Ok(Json(receipt))
}

#[utoipa::path(
    get,
    path = "/class/{email}",
    params(("email" = String, Path, description = "Instructor email")),
    responses((status = 200, description = "Classes taught by the instructor")),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_classes_by_instructor(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Document>>, AppError> {
    let classes = ClassService::list_by_instructor(state.store.as_ref(), &email).await?;

    Ok(Json(classes))
}

#[utoipa::path(
    put,
    path = "/class/{id}",
    params(("id" = String, Path, description = "Class ObjectId (24-char hex)")),
    request_body = UpdateClassDto,
    responses(
        (status = 200, description = "Update receipt (upserts when the id is unknown)", body = UpdateReceipt),
        (status = 400, description = "Invalid id or empty patch")
    ),
    tag = "Classes"
)]
#[instrument(skip(state, dto))]
pub async fn update_class(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateClassDto>,
) -> Result<Json<UpdateReceipt>, AppError> {
    let receipt = ClassService::update(state.store.as_ref(), &id, dto).await?;

    Ok(Json(receipt))
}

#[utoipa::path(
    put,
    path = "/class/status/{id}",
    params(("id" = String, Path, description = "Class ObjectId (24-char hex)")),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Update receipt", body = UpdateReceipt),
        (status = 400, description = "Invalid id or missing status")
    ),
    tag = "Classes"
)]
#[instrument(skip(state, dto))]
pub async fn update_class_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateStatusDto>,
) -> Result<Json<UpdateReceipt>, AppError> {
    let receipt = ClassService::set_status(state.store.as_ref(), &id, dto.status).await?;

    Ok(Json(receipt))
}

#[utoipa::path(
    put,
    path = "/class/feedback/{id}",
    params(("id" = String, Path, description = "Class ObjectId (24-char hex)")),
    request_body = UpdateFeedbackDto,
    responses(
        (status = 200, description = "Update receipt", body = UpdateReceipt),
        (status = 400, description = "Invalid id or missing feedback")
    ),
    tag = "Classes"
)]
#[instrument(skip(state, dto))]
pub async fn update_class_feedback(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateFeedbackDto>,
) -> Result<Json<UpdateReceipt>, AppError> {
    let receipt = ClassService::set_feedback(state.store.as_ref(), &id, dto.feedback).await?;

    Ok(Json(receipt))
}
