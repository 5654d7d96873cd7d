use anyhow::anyhow;
use bson::{Document, doc};
use tracing::instrument;

use crate::db::{DeleteReceipt, DocumentStore, InsertReceipt, UpdateReceipt, parse_object_id};
use crate::utils::errors::AppError;

use super::model::{COLLECTION, RegisterUserDto, Role};

pub enum RegistrationOutcome {
    /// A user with this email already exists; nothing was inserted.
    AlreadyExists,
    Created(InsertReceipt),
}

pub struct UserService;

impl UserService {
    /// Idempotent by email: the second registration for the same address is
    /// a no-op.
    #[instrument(skip(store, dto), fields(email = %dto.email))]
    pub async fn register(
        store: &dyn DocumentStore,
        dto: RegisterUserDto,
    ) -> Result<RegistrationOutcome, AppError> {
        let existing = store
            .find_one(COLLECTION, doc! { "email": &dto.email })
            .await?;

        if existing.is_some() {
            return Ok(RegistrationOutcome::AlreadyExists);
        }

        let receipt = store.insert_one(COLLECTION, dto.into_document()).await?;
        Ok(RegistrationOutcome::Created(receipt))
    }

    #[instrument(skip(store))]
    pub async fn list_all(store: &dyn DocumentStore) -> Result<Vec<Document>, AppError> {
        store.find(COLLECTION, doc! {}).await
    }

    #[instrument(skip(store))]
    pub async fn list_instructors(store: &dyn DocumentStore) -> Result<Vec<Document>, AppError> {
        store
            .find(COLLECTION, doc! { "role": Role::Instructor.as_str() })
            .await
    }

    /// Resolves the stored role for an email. Absent user or absent field
    /// is `None`; a role value outside the closed set is data corruption
    /// and surfaces as 500.
    pub async fn role_of(
        store: &dyn DocumentStore,
        email: &str,
    ) -> Result<Option<Role>, AppError> {
        let Some(user) = store.find_one(COLLECTION, doc! { "email": email }).await? else {
            return Ok(None);
        };

        match user.get_str("role") {
            Ok(value) => Role::parse(value)
                .map(Some)
                .ok_or_else(|| AppError::internal(anyhow!("invalid role value: {}", value))),
            Err(_) => Ok(None),
        }
    }

    #[instrument(skip(store))]
    pub async fn promote(
        store: &dyn DocumentStore,
        id: &str,
        role: Role,
    ) -> Result<UpdateReceipt, AppError> {
        let id = parse_object_id(id)?;

        store
            .update_one(
                COLLECTION,
                doc! { "_id": id },
                doc! { "role": role.as_str() },
                false,
            )
            .await
    }

    #[instrument(skip(store))]
    pub async fn delete_by_id(
        store: &dyn DocumentStore,
        id: &str,
    ) -> Result<DeleteReceipt, AppError> {
        let id = parse_object_id(id)?;

        store.delete_one(COLLECTION, doc! { "_id": id }).await
    }
}
