use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        RwLock,
    },
};

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};

use crate::{
    store::{DocumentStore, Filter},
    RepositoryError, Response,
};

/// Process-local store with the same observable behavior as `MongoStore`:
/// ObjectId ids, insertion order, capped finds. Contents die with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// While offline every call fails with `RepositoryError::Unavailable`.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Response<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(RepositoryError::Unavailable);
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_one(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Response<String> {
        self.ensure_online()?;

        let id = match document.get_object_id("_id") {
            Ok(id) => id,
            Err(_) => {
                let id = ObjectId::new();
                document.insert("_id", id);
                id
            }
        };

        let mut collections =
            self.collections.write().map_err(|_| RepositoryError::Unavailable)?;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(id.to_hex())
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: i64,
    ) -> Response<Vec<Document>> {
        self.ensure_online()?;

        let collections =
            self.collections.read().map_err(|_| RepositoryError::Unavailable)?;
        let Some(documents) = collections.get(collection) else {
            return Ok(vec![]);
        };

        // a non-positive limit means no limit, as with MongoDB
        let limit = usize::try_from(limit)
            .ok()
            .filter(|limit| *limit > 0)
            .unwrap_or(usize::MAX);

        Ok(documents
            .iter()
            .filter(|document| filter.matches(document))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn list_collection_names(&self) -> Response<Vec<String>> {
        self.ensure_online()?;

        let collections =
            self.collections.read().map_err(|_| RepositoryError::Unavailable)?;
        Ok(collections.keys().cloned().collect())
    }
}

#[cfg(test)]
mod test {
    use mongodb::bson::doc;

    use super::MemoryStore;
    use crate::{store::DocumentStore, Filter, RepositoryError};

    #[tokio::test]
    async fn test_insert_assigns_object_id() {
        // Arrange
        let store = MemoryStore::new();

        // Act
        let id = store.insert_one("stat", doc! { "label": "a", "value": "1" }).await.unwrap();
        let documents = store.find("stat", &Filter::new(), 10).await.unwrap();

        // Assert
        assert_eq!(id.len(), 24);
        assert_eq!(documents[0].get_object_id("_id").unwrap().to_hex(), id);
    }

    #[tokio::test]
    async fn test_find_respects_limit_and_order() {
        // Arrange
        let store = MemoryStore::new();
        for i in 0..5 {
            store.insert_one("stat", doc! { "label": i.to_string() }).await.unwrap();
        }

        // Act
        let documents = store.find("stat", &Filter::new(), 3).await.unwrap();

        // Assert
        let labels: Vec<_> =
            documents.iter().map(|d| d.get_str("label").unwrap()).collect();
        assert_eq!(labels, vec!["0", "1", "2"]);
    }

    #[tokio::test]
    async fn test_collections_are_separate() {
        // Arrange
        let store = MemoryStore::new();
        store.insert_one("post", doc! { "title": "a" }).await.unwrap();

        // Act
        let stats = store.find("stat", &Filter::new(), 10).await.unwrap();
        let names = store.list_collection_names().await.unwrap();

        // Assert
        assert!(stats.is_empty());
        assert_eq!(names, vec!["post".to_string()]);
    }

    #[tokio::test]
    async fn test_offline_store_fails() {
        // Arrange
        let store = MemoryStore::new();
        store.set_offline(true);

        // Act
        let result = store.list_collection_names().await;

        // Assert
        assert!(matches!(result, Err(RepositoryError::Unavailable)));

        store.set_offline(false);
        assert!(store.list_collection_names().await.is_ok());
    }
}
