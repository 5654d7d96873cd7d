use axum::{Json, extract::State};
use tracing::instrument;

use crate::modules::auth::model::{IssueTokenDto, TokenResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/jwt",
    request_body = IssueTokenDto,
    responses(
        (status = 200, description = "Signed bearer token", body = TokenResponse),
        (status = 400, description = "Missing email"),
        (status = 422, description = "Invalid email")
    ),
    tag = "Auth"
)]
#[instrument(skip(state))]
pub async fn issue_token(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<IssueTokenDto>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = create_access_token(&dto.email, &state.jwt_config)?;

    Ok(Json(TokenResponse { token }))
}
