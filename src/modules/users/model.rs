use bson::Document;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const COLLECTION: &str = "users";

/// The closed set of roles. An absent `role` field on a user document is
/// the fourth, non-matching state; it is modeled as `Option<Role>` at the
/// call sites, never as a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Instructor,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Instructor => "instructor",
            Role::Admin => "admin",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "student" => Some(Role::Student),
            "instructor" => Some(Role::Instructor),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// Registration body. Anything beyond `email` and `role` is opaque profile
/// data and is stored verbatim.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterUserDto {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    pub role: Option<Role>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Document,
}

impl RegisterUserDto {
    pub fn into_document(self) -> Document {
        let mut document = self.extra;
        document.insert("email", self.email);
        if let Some(role) = self.role {
            document.insert("role", role.as_str());
        }
        document
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminCheckResponse {
    pub admin: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InstructorCheckResponse {
    pub instructor: bool,
}
