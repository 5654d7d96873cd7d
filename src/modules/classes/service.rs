use anyhow::anyhow;
use bson::{Document, doc};
use tracing::instrument;

use crate::db::{DocumentStore, InsertReceipt, UpdateReceipt, parse_object_id};
use crate::utils::errors::AppError;

use super::model::{COLLECTION, CreateClassDto, UpdateClassDto};

fn build_class_document(dto: CreateClassDto) -> Document {
    let mut document = dto.extra;
    document.insert("name", dto.name);
    document.insert("instructor_email", dto.instructor_email);
    document.insert("price", dto.price);
    document.insert("available_seats", dto.available_seats);
    document
}

/// `$set` document for the partial class patch. `None` when no field was
/// provided; forwarding an empty `$set` would only surface as an opaque
/// driver error.
fn build_class_patch(dto: &UpdateClassDto) -> Option<Document> {
    let mut set = Document::new();
    if let Some(name) = &dto.name {
        set.insert("name", name);
    }
    if let Some(price) = dto.price {
        set.insert("price", price);
    }
    if let Some(seats) = dto.available_seats {
        set.insert("available_seats", seats);
    }

    (!set.is_empty()).then_some(set)
}

pub struct ClassService;

impl ClassService {
    #[instrument(skip(store, dto), fields(name = %dto.name))]
    pub async fn create(
        store: &dyn DocumentStore,
        dto: CreateClassDto,
    ) -> Result<InsertReceipt, AppError> {
        store
            .insert_one(COLLECTION, build_class_document(dto))
            .await
    }

    #[instrument(skip(store))]
    pub async fn list_all(store: &dyn DocumentStore) -> Result<Vec<Document>, AppError> {
        store.find(COLLECTION, doc! {}).await
    }

    #[instrument(skip(store))]
    pub async fn list_by_instructor(
        store: &dyn DocumentStore,
        email: &str,
    ) -> Result<Vec<Document>, AppError> {
        store
            .find(COLLECTION, doc! { "instructor_email": email })
            .await
    }

    #[instrument(skip(store, dto))]
    pub async fn update(
        store: &dyn DocumentStore,
        id: &str,
        dto: UpdateClassDto,
    ) -> Result<UpdateReceipt, AppError> {
        let id = parse_object_id(id)?;
        let set = build_class_patch(&dto)
            .ok_or_else(|| AppError::bad_request(anyhow!("no fields to update")))?;

        store
            .update_one(COLLECTION, doc! { "_id": id }, set, true)
            .await
    }

    #[instrument(skip(store))]
    pub async fn set_status(
        store: &dyn DocumentStore,
        id: &str,
        status: String,
    ) -> Result<UpdateReceipt, AppError> {
        let id = parse_object_id(id)?;

        store
            .update_one(COLLECTION, doc! { "_id": id }, doc! { "status": status }, true)
            .await
    }

    #[instrument(skip(store))]
    pub async fn set_feedback(
        store: &dyn DocumentStore,
        id: &str,
        feedback: String,
    ) -> Result<UpdateReceipt, AppError> {
        let id = parse_object_id(id)?;

        store
            .update_one(
                COLLECTION,
                doc! { "_id": id },
                doc! { "feedback": feedback },
                true,
            )
            .await
    }
}
