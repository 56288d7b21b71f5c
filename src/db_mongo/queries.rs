use mongodb::{
    Collection, Cursor, IndexModel,
    bson::{Document, doc},
};

use crate::error::{Result, StoreError};
use crate::processing::Payload;

/// Append the payload to the collection. Existing documents are never
/// touched and nothing is deduplicated, so importing the same file twice
/// stores every record twice.
pub async fn insert_payload(collection: &Collection<Document>, payload: Payload) -> Result<usize> {
    match payload {
        Payload::Many(docs) => {
            // Ordered bulk insert; on failure the driver reports how far it got
            let result = collection
                .insert_many(docs)
                .await
                .map_err(StoreError::Write)?;
            Ok(result.inserted_ids.len())
        }
        Payload::One(doc) => {
            collection
                .insert_one(doc)
                .await
                .map_err(StoreError::Write)?;
            Ok(1)
        }
    }
}

/// Create a text index on `field`. Re-creating an identical index is a
/// no-op on the server.
pub async fn ensure_text_index(collection: &Collection<Document>, field: &str) -> Result<String> {
    let index = IndexModel::builder().keys(doc! { field: "text" }).build();

    let result = collection
        .create_index(index)
        .await
        .map_err(StoreError::Query)?;

    Ok(result.index_name)
}

pub async fn find_matching(collection: &Collection<Document>, filter: Document) -> Result<Cursor<Document>> {
    collection.find(filter).await.map_err(StoreError::Query)
}

/// Number of documents matching `filter`; an empty filter counts the whole
/// collection.
pub async fn count_matching(collection: &Collection<Document>, filter: Document) -> Result<u64> {
    collection
        .count_documents(filter)
        .await
        .map_err(StoreError::Query)
}
