use axum::{
    Json,
    extract::{Path, State},
};
use bson::Document;
use tracing::instrument;

use crate::db::InsertReceipt;
use crate::middleware::auth::AuthUser;
use crate::modules::payments::model::{
    CreatePaymentIntentDto, PaymentIntentResponse, RecordPaymentDto,
};
use crate::modules::payments::service::PaymentService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/payments",
    request_body = RecordPaymentDto,
    responses(
        (status = 200, description = "Insert receipt", body = InsertReceipt),
        (status = 400, description = "Missing required field")
    ),
    tag = "Payments"
)]
#[instrument(skip(state, dto))]
pub async fn record_payment(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RecordPaymentDto>,
) -> Result<Json<InsertReceipt>, AppError> {
    let receipt = PaymentService::record(state.store.as_ref(), dto).await?;

    Ok(Json(receipt))
}

#[utoipa::path(
    get,
    path = "/payments/{email}",
    params(("email" = String, Path, description = "Payer email")),
    responses((status = 200, description = "Payments made by the email")),
    tag = "Payments"
)]
#[instrument(skip(state))]
pub async fn get_payments_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Document>>, AppError> {
    let payments = PaymentService::list_by_email(state.store.as_ref(), &email).await?;

    Ok(Json(payments))
}

#[utoipa::path(
    get,
    path = "/payments/class/{class_id}",
    params(("class_id" = String, Path, description = "Class ObjectId (24-char hex)")),
    responses((status = 200, description = "Payments recorded for the class")),
    tag = "Payments"
)]
#[instrument(skip(state))]
pub async fn get_payments_by_class(
    State(state): State<AppState>,
    Path(class_id): Path<String>,
) -> Result<Json<Vec<Document>>, AppError> {
    let payments = PaymentService::list_by_class(state.store.as_ref(), &class_id).await?;

    Ok(Json(payments))
}

#[utoipa::path(
    post,
    path = "/create-payment-intent",
    request_body = CreatePaymentIntentDto,
    responses(
        (status = 200, description = "Client secret for completing the charge", body = PaymentIntentResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 502, description = "Payment processor failure")
    ),
    tag = "Payments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreatePaymentIntentDto>,
) -> Result<Json<PaymentIntentResponse>, AppError> {
    let client_secret = PaymentService::create_intent(state.payments.as_ref(), dto.price).await?;

    Ok(Json(PaymentIntentResponse { client_secret }))
}
