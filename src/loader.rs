use std::path::Path;

use mongodb::{
    Collection,
    bson::{Document, doc},
};

use crate::config::StoreConfig;
use crate::db_mongo::{self, queries};
use crate::error::Result;
use crate::processing::{self, Payload};

/// Load a JSON file into the configured collection.
///
/// The file is parsed before connecting, so malformed input fails without
/// touching the store.
pub async fn import_file(config: &StoreConfig, path: &Path) -> Result<usize> {
    tracing::info!("Loading {:?}", path);

    let payload = processing::parse_file(path)?;
    let kind = match &payload {
        Payload::Many(_) => format!("array of {} records", payload.record_count()),
        Payload::One(_) => "single record".to_string(),
    };
    tracing::info!("Parsed {}", kind);

    db_mongo::with_collection(config, |collection| async move {
        import_payload(&collection, payload).await
    })
    .await
}

pub async fn import_payload(collection: &Collection<Document>, payload: Payload) -> Result<usize> {
    let inserted = queries::insert_payload(collection, payload).await?;

    let total = queries::count_matching(collection, doc! {}).await?;
    tracing::info!(
        "✓ Inserted {} documents into {} ({} total)",
        inserted,
        collection.namespace(),
        total
    );

    Ok(inserted)
}
