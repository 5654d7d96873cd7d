//! Document store boundary.
//!
//! The store is consumed through the object-safe [`DocumentStore`] trait:
//! one shared client built at startup and injected into every handler via
//! `AppState`. Handlers pass raw `bson::Document` filters and get back
//! either matched documents or driver-style acknowledgement receipts.
//!
//! Two implementations: [`mongo::MongoStore`] against a hosted deployment,
//! and an in-memory store behind the `test-utils` feature that backs the
//! integration tests.

use anyhow::anyhow;
use async_trait::async_trait;
use bson::{Document, oid::ObjectId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::utils::errors::AppError;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod mongo;

/// Parses a path identifier in the store's native encoding (24-char hex
/// ObjectId). Unparseable ids answer 400 rather than surfacing as a driver
/// error.
pub fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::bad_request(anyhow!("invalid id")))
}

/// Acknowledgement for a single insert. `inserted_id` is the new document's
/// ObjectId as a 24-char hex string.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertReceipt {
    pub acknowledged: bool,
    pub inserted_id: String,
}

/// Acknowledgement for a single update. `upserted_id` is present only when
/// the operation inserted a new document.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReceipt {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upserted_id: Option<String>,
}

/// Acknowledgement for a single delete.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteReceipt {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

/// The consumed interface of the external document database.
///
/// Filters are field-equality documents. `update_one` applies `set` with
/// `$set` semantics and optionally upserts. `find` returns matches in
/// insertion order.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<InsertReceipt, AppError>;

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, AppError>;

    async fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>, AppError>;

    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        set: Document,
        upsert: bool,
    ) -> Result<UpdateReceipt, AppError>;

    async fn delete_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<DeleteReceipt, AppError>;
}
