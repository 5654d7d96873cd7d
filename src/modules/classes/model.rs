use bson::Document;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

pub const COLLECTION: &str = "classes";

/// Class creation body. `extra` carries opaque metadata (image, description
/// and whatever else the frontend attaches) verbatim.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateClassDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "instructor_email must be a valid email address"))]
    pub instructor_email: String,
    pub price: f64,
    pub available_seats: i64,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Document,
}

/// Partial patch for the core class fields. At least one field must be
/// present; each provided field is `$set` independently.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateClassDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub price: Option<f64>,
    pub available_seats: Option<i64>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStatusDto {
    #[validate(length(min = 1, message = "status must not be empty"))]
    pub status: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateFeedbackDto {
    #[validate(length(min = 1, message = "feedback must not be empty"))]
    pub feedback: String,
}
