pub mod queries;

use std::future::Future;

use mongodb::{
    Client, Collection, Database,
    bson::{Document, doc},
    options::ClientOptions,
};

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};

/// An open client bound to the configured collection.
pub struct Connection {
    client: Client,
    collection: Collection<Document>,
}

impl Connection {
    /// Create MongoDB connection and verify it with a ping.
    pub async fn open(config: &StoreConfig) -> Result<Self> {
        let mut options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| StoreError::connection("invalid connection string", e))?;

        if let Some(timeout) = config.timeout() {
            options.connect_timeout = Some(timeout);
            options.server_selection_timeout = Some(timeout);
        }

        let client = Client::with_options(options)
            .map_err(|e| StoreError::connection("failed to create MongoDB client", e))?;

        // Surfaces unreachable hosts and rejected credentials up front
        let ping = client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await;
        if let Err(e) = ping {
            client.shutdown().await;
            return Err(StoreError::connection("failed to ping MongoDB", e));
        }

        tracing::info!(
            database = %config.database,
            collection = %config.collection,
            "Successfully connected to MongoDB"
        );

        let collection = get_database(&client, &config.database)
            .collection::<Document>(&config.collection);

        Ok(Self { client, collection })
    }

    pub fn collection(&self) -> &Collection<Document> {
        &self.collection
    }

    pub async fn close(self) {
        self.client.shutdown().await;
        tracing::debug!("MongoDB connection closed");
    }
}

/// Get database handle
pub fn get_database(client: &Client, db_name: &str) -> Database {
    client.database(db_name)
}

/// Run `op` against the configured collection, closing the connection
/// afterwards whether `op` succeeded or not.
pub async fn with_collection<F, Fut, T>(config: &StoreConfig, op: F) -> Result<T>
where
    F: FnOnce(Collection<Document>) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let connection = Connection::open(config).await?;
    let result = op(connection.collection().clone()).await;
    connection.close().await;
    result
}
