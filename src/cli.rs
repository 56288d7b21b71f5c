use std::path::PathBuf;

use clap::Parser;

use crate::config::StoreConfig;
use crate::search::{DEFAULT_FIELD, SearchRequest};

#[derive(Debug, Parser)]
#[command(
    name = "humandbs-import",
    version,
    about = "Insert a JSON document or array of documents into a MongoDB collection",
    long_about = None
)]
pub struct ImportCli {
    /// JSON file holding one object or an array of objects
    pub file: PathBuf,

    #[command(flatten)]
    pub store: StoreConfig,
}

#[derive(Debug, Parser)]
#[command(
    name = "humandbs-search",
    version,
    about = "Ensure the text index exists and print documents matching a value",
    long_about = None
)]
pub struct SearchCli {
    /// Value to look up, e.g. hum0386.v1
    pub value: String,

    /// Field to filter on
    #[arg(long, default_value = DEFAULT_FIELD)]
    pub field: String,

    /// Field the text index is built on (one text index per collection)
    #[arg(long, default_value = DEFAULT_FIELD)]
    pub index_field: String,

    /// Use a $text search against the index instead of an equality match
    #[arg(long)]
    pub text: bool,

    /// Pretty-print each document
    #[arg(long)]
    pub pretty: bool,

    /// Stop after this many documents
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    #[command(flatten)]
    pub store: StoreConfig,
}

impl SearchCli {
    pub fn request(&self) -> SearchRequest {
        SearchRequest {
            field: self.field.clone(),
            index_field: self.index_field.clone(),
            value: self.value.clone(),
            text: self.text,
            pretty: self.pretty,
            limit: self.limit,
        }
    }
}
