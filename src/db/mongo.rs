use async_trait::async_trait;
use bson::{Bson, Document, doc};
use futures_util::TryStreamExt;
use mongodb::{Client, Collection, Database};
use tracing::info;

use crate::config::database::DatabaseConfig;
use crate::db::{DeleteReceipt, DocumentStore, InsertReceipt, UpdateReceipt};
use crate::utils::errors::AppError;

fn bson_id_to_hex(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        other => other.to_string(),
    }
}

/// MongoDB-backed [`DocumentStore`]. The client is opened once at startup,
/// pinged to verify the connection, and lives as long as the process.
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let client = Client::with_uri_str(&config.uri)
            .await
            .map_err(AppError::database)?;

        let db = client.database(&config.db_name);

        // Verify the connection before serving traffic
        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(AppError::database)?;

        info!(database = %config.db_name, "Connected to MongoDB");

        Ok(Self { db })
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection::<Document>(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<InsertReceipt, AppError> {
        let result = self
            .collection(collection)
            .insert_one(document)
            .await
            .map_err(AppError::database)?;

        Ok(InsertReceipt {
            acknowledged: true,
            inserted_id: bson_id_to_hex(&result.inserted_id),
        })
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, AppError> {
        self.collection(collection)
            .find_one(filter)
            .await
            .map_err(AppError::database)
    }

    async fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>, AppError> {
        let cursor = self
            .collection(collection)
            .find(filter)
            .await
            .map_err(AppError::database)?;

        cursor.try_collect().await.map_err(AppError::database)
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        set: Document,
        upsert: bool,
    ) -> Result<UpdateReceipt, AppError> {
        let result = self
            .collection(collection)
            .update_one(filter, doc! { "$set": set })
            .upsert(upsert)
            .await
            .map_err(AppError::database)?;

        Ok(UpdateReceipt {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result.upserted_id.as_ref().map(bson_id_to_hex),
        })
    }

    async fn delete_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<DeleteReceipt, AppError> {
        let result = self
            .collection(collection)
            .delete_one(filter)
            .await
            .map_err(AppError::database)?;

        Ok(DeleteReceipt {
            acknowledged: true,
            deleted_count: result.deleted_count,
        })
    }
}
