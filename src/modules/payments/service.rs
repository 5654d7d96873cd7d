use bson::{Document, doc};
use tracing::instrument;

use crate::db::{DocumentStore, InsertReceipt};
use crate::stripe::PaymentProvider;
use crate::utils::errors::AppError;

use super::model::{COLLECTION, RecordPaymentDto};

const CURRENCY: &str = "usd";

/// Converts a price in major units to the processor's minor units.
fn to_minor_units(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

pub struct PaymentService;

impl PaymentService {
    #[instrument(skip(store, dto), fields(email = %dto.email))]
    pub async fn record(
        store: &dyn DocumentStore,
        dto: RecordPaymentDto,
    ) -> Result<InsertReceipt, AppError> {
        store.insert_one(COLLECTION, dto.into_document()).await
    }

    #[instrument(skip(store))]
    pub async fn list_by_email(
        store: &dyn DocumentStore,
        email: &str,
    ) -> Result<Vec<Document>, AppError> {
        store.find(COLLECTION, doc! { "email": email }).await
    }

    #[instrument(skip(store))]
    pub async fn list_by_class(
        store: &dyn DocumentStore,
        class_id: &str,
    ) -> Result<Vec<Document>, AppError> {
        store.find(COLLECTION, doc! { "class_id": class_id }).await
    }

    /// Creates a processor intent for the price and returns the client
    /// secret the caller needs to complete the charge. Processor failures
    /// propagate as 502; there is no retry.
    #[instrument(skip(payments))]
    pub async fn create_intent(
        payments: &dyn PaymentProvider,
        price: f64,
    ) -> Result<String, AppError> {
        let intent = payments
            .create_payment_intent(to_minor_units(price), CURRENCY)
            .await?;

        Ok(intent.client_secret)
    }
}
