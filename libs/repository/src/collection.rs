use std::{fmt, marker::PhantomData, sync::Arc};

use entity::Record;
use mongodb::bson::{self, Bson, Document};
use tracing::debug;

use crate::{
    store::{DocumentStore, Filter},
    RepositoryError, Response,
};

/// Typed access to the collection that holds `T`.
pub struct CollectionRepository<T> {
    store: Arc<dyn DocumentStore>,
    record: PhantomData<fn() -> T>,
}

impl<T> Clone for CollectionRepository<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            record: PhantomData,
        }
    }
}

impl<T: Record> fmt::Debug for CollectionRepository<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionRepository")
            .field("collection", &T::KIND.collection())
            .field("store", &self.store)
            .finish()
    }
}

impl<T: Record> CollectionRepository<T> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            record: PhantomData,
        }
    }

    pub async fn save(&self, record: &T) -> Response<String> {
        let mut document = bson::to_document(record).map_err(|source| {
            RepositoryError::Encode {
                kind: T::KIND,
                source,
            }
        })?;
        store_timestamps_as_dates::<T>(&mut document);

        let id = self
            .store
            .insert_one(T::KIND.collection(), document)
            .await?;

        debug!(task = "save", kind = %T::KIND, id = id.as_str());

        Ok(id)
    }

    /// Every stored document goes back through `T::from_value`; one that no
    /// longer validates fails the whole call.
    pub async fn find(&self, filter: Filter, limit: i64) -> Response<Vec<T>> {
        let documents = self
            .store
            .find(T::KIND.collection(), &filter, limit)
            .await?;

        documents
            .into_iter()
            .map(|document| {
                let value = Bson::Document(document).into_relaxed_extjson();
                T::from_value(&value).map_err(|source| {
                    RepositoryError::SchemaDrift {
                        kind: T::KIND,
                        source,
                    }
                })
            })
            .collect()
    }
}

/// Rewrites `T::TIMESTAMP_FIELDS` from strings to BSON dates (millisecond
/// precision). Reads accept both shapes.
fn store_timestamps_as_dates<T: Record>(document: &mut Document) {
    for field in T::TIMESTAMP_FIELDS {
        let date = match document.get(*field) {
            Some(Bson::String(text)) => bson::DateTime::parse_rfc3339_str(text).ok(),
            _ => None,
        };
        if let Some(date) = date {
            document.insert(*field, date);
        }
    }
}
