use bson::{Document, doc};
use tracing::instrument;

use crate::db::{DeleteReceipt, DocumentStore, InsertReceipt};
use crate::utils::errors::AppError;

use super::model::{COLLECTION, CreateEnrollmentDto};

pub struct EnrollmentService;

impl EnrollmentService {
    #[instrument(skip(store, dto), fields(email = %dto.email))]
    pub async fn enroll(
        store: &dyn DocumentStore,
        dto: CreateEnrollmentDto,
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

    /// Withdraws one enrollment for the email. Deleting when none remains
    /// acknowledges zero rather than failing.
    #[instrument(skip(store))]
    pub async fn withdraw(
        store: &dyn DocumentStore,
        email: &str,
    ) -> Result<DeleteReceipt, AppError> {
        store.delete_one(COLLECTION, doc! { "email": email }).await
    }
}
