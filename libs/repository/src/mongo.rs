use async_trait::async_trait;
use futures::TryStreamExt as _;
use mongodb::{
    bson::{Bson, Document},
    options::{ClientOptions, FindOptions},
    Client, Database,
};

use crate::{
    response::{IntoResponse as _, Response},
    store::{DocumentStore, Filter},
};

const APP_NAME: &str = "unshakeable-discipline";

/// MongoDB-backed store. Connection pooling and retryable reads/writes are
/// left to the driver.
#[derive(Clone, Debug)]
pub struct MongoStore {
    client: Client,
    db: Database,
}

impl MongoStore {
    pub async fn connect(db_url: &str, db_name: &str) -> Response<Self> {
        let mut options = ClientOptions::parse(db_url)
            .await
            .into_response("in parse connection string")?;
        options.app_name = Some(APP_NAME.to_string());

        let client =
            Client::with_options(options).into_response("in client build")?;
        let db = client.database(db_name);

        Ok(Self { client, db })
    }

    /// Closes pooled connections. Call once, after the server has stopped.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Response<String> {
        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(document, None)
            .await
            .into_response("in insert one")?;

        Ok(match result.inserted_id {
            Bson::ObjectId(id) => id.to_hex(),
            Bson::String(id) => id,
            other => other.to_string(),
        })
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: i64,
    ) -> Response<Vec<Document>> {
        let options = FindOptions::builder().limit(limit).build();

        let cursor = self
            .db
            .collection::<Document>(collection)
            .find(filter.to_document(), options)
            .await
            .into_response("in find")?;

        cursor.try_collect().await.into_response("in cursor collect")
    }

    async fn list_collection_names(&self) -> Response<Vec<String>> {
        self.db
            .list_collection_names(None)
            .await
            .into_response("in list collection names")
    }
}
