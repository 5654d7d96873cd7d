use bson::Document;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

pub const COLLECTION: &str = "enrollments";

/// Enrollment body: the student's email and the enrolled class's hex
/// ObjectId, plus opaque metadata (class name, image and the like) stored
/// verbatim.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEnrollmentDto {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "class_id must not be empty"))]
    pub class_id: String,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Document,
}

impl CreateEnrollmentDto {
    pub fn into_document(self) -> Document {
        let mut document = self.extra;
        document.insert("email", self.email);
        document.insert("class_id", self.class_id);
        document
    }
}
