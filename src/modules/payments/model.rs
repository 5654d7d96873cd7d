use bson::Document;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const COLLECTION: &str = "payments";

/// Record of a completed charge. Insert-only; never updated or deleted.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RecordPaymentDto {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "class_id must not be empty"))]
    pub class_id: String,
    pub amount: f64,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Document,
}

impl RecordPaymentDto {
    pub fn into_document(self) -> Document {
        let mut document = self.extra;
        document.insert("email", self.email);
        document.insert("class_id", self.class_id);
        document.insert("amount", self.amount);
        document
    }
}

/// Body for `/create-payment-intent`: the class price in major currency
/// units.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePaymentIntentDto {
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}
