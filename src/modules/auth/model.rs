use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Payload embedded in every bearer token. `email` is the caller's claimed
/// identity; `exp`/`iat` are epoch seconds.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    pub email: String,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct IssueTokenDto {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}
