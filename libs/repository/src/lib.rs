use std::sync::Arc;

use entity::prelude::*;
use tracing::info;

pub mod collection;
pub mod memory;
pub mod mongo;
mod response;
pub mod store;

pub use collection::CollectionRepository;
pub use mongodb::bson;
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use response::Response;
pub use store::{Condition, DocumentStore, Filter};

#[derive(Clone, Debug)]
pub struct Repository {
    pub program: CollectionRepository<Program>,
    pub post: CollectionRepository<Post>,
    pub testimonial: CollectionRepository<Testimonial>,
    pub inquiry: CollectionRepository<Inquiry>,
    pub stat: CollectionRepository<Stat>,
    store: Arc<dyn DocumentStore>,
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error(
        "in mongodb crate from unsuccessful database operations: {}: {}",
        message,
        source
    )]
    InMongoDbErr {
        message: String,
        source: mongodb::error::Error,
    },

    #[error("document store is unavailable")]
    Unavailable,

    #[error("failed to encode a {kind} document: {source}")]
    Encode {
        kind: Kind,
        source: mongodb::bson::ser::Error,
    },

    #[error("stored {kind} document does not match the current schema: {source}")]
    SchemaDrift { kind: Kind, source: ValidationError },
}

impl Repository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            program: CollectionRepository::new(store.clone()),
            post: CollectionRepository::new(store.clone()),
            testimonial: CollectionRepository::new(store.clone()),
            inquiry: CollectionRepository::new(store.clone()),
            stat: CollectionRepository::new(store.clone()),
            store,
        }
    }

    /// Round trip to the store that touches no documents.
    pub async fn ping(&self) -> Response<Vec<String>> {
        self.store.list_collection_names().await
    }
}

pub async fn init_repository(
    db_url: &str,
    db_name: &str,
) -> Response<(Repository, MongoStore)> {
    let store = MongoStore::connect(db_url, db_name).await?;

    info!(task = "connect document store", database = db_name);

    Ok((Repository::new(Arc::new(store.clone())), store))
}
