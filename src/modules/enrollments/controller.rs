use axum::{
    Json,
    extract::{Path, State},
};
use bson::Document;
use tracing::instrument;

use crate::db::{DeleteReceipt, InsertReceipt};
use crate::modules::enrollments::model::CreateEnrollmentDto;
use crate::modules::enrollments::service::EnrollmentService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/enroll",
    request_body = CreateEnrollmentDto,
    responses(
        (status = 200, description = "Insert receipt", body = InsertReceipt),
        (status = 400, description = "Missing required field")
    ),
    tag = "Enrollments"
)]
#[instrument(skip(state, dto))]
pub async fn create_enrollment(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateEnrollmentDto>,
) -> Result<Json<InsertReceipt>, AppError> {
    let receipt = EnrollmentService::enroll(state.store.as_ref(), dto).await?;

    Ok(Json(receipt))
}

#[utoipa::path(
    get,
    path = "/enroll/{email}",
    params(("email" = String, Path, description = "Student email")),
    responses((status = 200, description = "Enrollments for the email")),
    tag = "Enrollments"
)]
#[instrument(skip(state))]
pub async fn get_enrollments(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Document>>, AppError> {
    let enrollments = EnrollmentService::list_by_email(state.store.as_ref(), &email).await?;

    Ok(Json(enrollments))
}

#[utoipa::path(
    delete,
    path = "/enroll/{email}",
    params(("email" = String, Path, description = "Student email")),
    responses((status = 200, description = "Delete receipt", body = DeleteReceipt)),
    tag = "Enrollments"
)]
#[instrument(skip(state))]
pub async fn delete_enrollment(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<DeleteReceipt>, AppError> {
    let receipt = EnrollmentService::withdraw(state.store.as_ref(), &email).await?;

    Ok(Json(receipt))
}
