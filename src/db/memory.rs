//! In-memory [`DocumentStore`] used by the integration tests.
//!
//! Mirrors the store semantics the handlers rely on: field-equality
//! filters, `$set` application, and Mongo's upsert shape (upserted
//! document = filter fields + set fields + generated `_id`).

use std::collections::HashMap;

use async_trait::async_trait;
use bson::{Bson, Document, oid::ObjectId};
use tokio::sync::RwLock;

use crate::db::{DeleteReceipt, DocumentStore, InsertReceipt, UpdateReceipt};
use crate::utils::errors::AppError;

#[derive(Default)]
pub struct InMemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

fn apply_set(document: &mut Document, set: &Document) {
    for (key, value) in set {
        document.insert(key.clone(), value.clone());
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn insert_one(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<InsertReceipt, AppError> {
        let id = match document.get_object_id("_id") {
            Ok(oid) => oid,
            Err(_) => {
                let oid = ObjectId::new();
                document.insert("_id", oid);
                oid
            }
        };

        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(InsertReceipt {
            acknowledged: true,
            inserted_id: id.to_hex(),
        })
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, AppError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| matches(d, &filter)).cloned()))
    }

    async fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>, AppError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| matches(d, &filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        set: Document,
        upsert: bool,
    ) -> Result<UpdateReceipt, AppError> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();

        if let Some(existing) = docs.iter_mut().find(|d| matches(d, &filter)) {
            let before = existing.clone();
            apply_set(existing, &set);
            let modified = u64::from(*existing != before);

            return Ok(UpdateReceipt {
                acknowledged: true,
                matched_count: 1,
                modified_count: modified,
                upserted_id: None,
            });
        }

        if !upsert {
            return Ok(UpdateReceipt {
                acknowledged: true,
                matched_count: 0,
                modified_count: 0,
                upserted_id: None,
            });
        }

        let mut document = Document::new();
        for (key, value) in &filter {
            document.insert(key.clone(), value.clone());
        }
        apply_set(&mut document, &set);

        let id = match document.get("_id") {
            Some(Bson::ObjectId(oid)) => *oid,
            _ => {
                let oid = ObjectId::new();
                document.insert("_id", oid);
                oid
            }
        };
        docs.push(document);

        Ok(UpdateReceipt {
            acknowledged: true,
            matched_count: 0,
            modified_count: 0,
            upserted_id: Some(id.to_hex()),
        })
    }

    async fn delete_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<DeleteReceipt, AppError> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();

        let deleted = match docs.iter().position(|d| matches(d, &filter)) {
            Some(index) => {
                docs.remove(index);
                1
            }
            None => 0,
        };

        Ok(DeleteReceipt {
            acknowledged: true,
            deleted_count: deleted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[tokio::test]
    async fn insert_then_find_by_equality() {
        let store = InMemoryStore::default();
        store
            .insert_one("users", doc! { "email": "a@x.com", "role": "admin" })
            .await
            .unwrap();
        store
            .insert_one("users", doc! { "email": "b@x.com" })
            .await
            .unwrap();

        let found = store
            .find("users", doc! { "email": "a@x.com" })
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].get_str("role").unwrap(), "admin");

        let all = store.find("users", doc! {}).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn update_applies_set_and_counts_changes() {
        let store = InMemoryStore::default();
        let receipt = store
            .insert_one("users", doc! { "email": "a@x.com" })
            .await
            .unwrap();
        let id = ObjectId::parse_str(&receipt.inserted_id).unwrap();

        let update = store
            .update_one("users", doc! { "_id": id }, doc! { "role": "admin" }, false)
            .await
            .unwrap();
        assert_eq!(update.matched_count, 1);
        assert_eq!(update.modified_count, 1);
        assert!(update.upserted_id.is_none());

        // Same value again: matched but not modified
        let update = store
            .update_one("users", doc! { "_id": id }, doc! { "role": "admin" }, false)
            .await
            .unwrap();
        assert_eq!(update.matched_count, 1);
        assert_eq!(update.modified_count, 0);
    }

    #[tokio::test]
    async fn upsert_creates_from_filter_and_set() {
        let store = InMemoryStore::default();
        let id = ObjectId::new();

        let update = store
            .update_one(
                "classes",
                doc! { "_id": id },
                doc! { "status": "approved" },
                true,
            )
            .await
            .unwrap();
        assert_eq!(update.matched_count, 0);
        assert_eq!(update.upserted_id.as_deref(), Some(id.to_hex().as_str()));

        let found = store
            .find_one("classes", doc! { "_id": id })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.get_str("status").unwrap(), "approved");
    }

    #[tokio::test]
    async fn delete_removes_at_most_one() {
        let store = InMemoryStore::default();
        store
            .insert_one("enrollments", doc! { "email": "a@x.com" })
            .await
            .unwrap();
        store
            .insert_one("enrollments", doc! { "email": "a@x.com" })
            .await
            .unwrap();

        let first = store
            .delete_one("enrollments", doc! { "email": "a@x.com" })
            .await
            .unwrap();
        assert_eq!(first.deleted_count, 1);

        let second = store
            .delete_one("enrollments", doc! { "email": "a@x.com" })
            .await
            .unwrap();
        assert_eq!(second.deleted_count, 1);

        let third = store
            .delete_one("enrollments", doc! { "email": "a@x.com" })
            .await
            .unwrap();
        assert_eq!(third.deleted_count, 0);
    }
}
