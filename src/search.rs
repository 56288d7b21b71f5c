use std::io::Write;

use mongodb::{
    Collection, Cursor,
    bson::{Bson, Document, doc},
};

use crate::config::StoreConfig;
use crate::db_mongo::{self, queries};
use crate::error::{Result, StoreError};

pub const DEFAULT_FIELD: &str = "NBDC Research ID";

#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub field: String,
    /// Field the text index is built on. A collection holds at most one text
    /// index, so this stays put when `field` changes.
    pub index_field: String,
    pub value: String,
    /// Match through the text index instead of by equality
    pub text: bool,
    pub pretty: bool,
    pub limit: Option<usize>,
}

impl SearchRequest {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            field: DEFAULT_FIELD.to_string(),
            index_field: DEFAULT_FIELD.to_string(),
            value: value.into(),
            text: false,
            pretty: false,
            limit: None,
        }
    }

    pub fn filter(&self) -> Document {
        if self.text {
            text_filter(&self.value)
        } else {
            equality_filter(&self.field, &self.value)
        }
    }
}

pub fn equality_filter(field: &str, value: &str) -> Document {
    doc! { field: value }
}

/// `$text` search for `value` as an exact phrase, so identifiers such as
/// `hum0386.v1` are not split into separate terms.
pub fn text_filter(value: &str) -> Document {
    doc! { "$text": { "$search": format!("\"{}\"", value.replace('"', "")) } }
}

/// Relaxed Extended JSON, one line unless `pretty`.
pub fn render_document(document: Document, pretty: bool) -> String {
    let value = Bson::Document(document).into_relaxed_extjson();
    let rendered = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    // A serde_json::Value always serializes
    rendered.unwrap_or_default()
}

/// Drain the cursor into `writer`, stopping early at `limit`.
pub async fn write_matches<W: Write>(
    cursor: &mut Cursor<Document>,
    writer: &mut W,
    pretty: bool,
    limit: Option<usize>,
) -> Result<usize> {
    let mut written = 0;

    while limit.is_none_or(|max| written < max) && cursor.advance().await.map_err(StoreError::Query)? {
        let document: Document = cursor.deserialize_current().map_err(StoreError::Query)?;
        writeln!(writer, "{}", render_document(document, pretty)).map_err(StoreError::Output)?;
        written += 1;
    }

    writer.flush().map_err(StoreError::Output)?;
    Ok(written)
}

pub async fn search_collection<W: Write>(
    collection: &Collection<Document>,
    request: &SearchRequest,
    writer: &mut W,
) -> Result<usize> {
    let index_name = queries::ensure_text_index(collection, &request.index_field).await?;
    tracing::info!("Text index {} ready on {:?}", index_name, request.index_field);

    let mut cursor = queries::find_matching(collection, request.filter()).await?;
    let matches = write_matches(&mut cursor, writer, request.pretty, request.limit).await?;

    tracing::info!("{} matching documents for {:?}", matches, request.value);
    Ok(matches)
}

/// Ensure the index exists, then print every document matching the request.
pub async fn run_search<W: Write>(
    config: &StoreConfig,
    request: &SearchRequest,
    writer: &mut W,
) -> Result<usize> {
    db_mongo::with_collection(config, |collection| async move {
        search_collection(&collection, request, writer).await
    })
    .await
}
