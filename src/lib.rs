//! Load HumanDBs metadata JSON into MongoDB and look records up by
//! research ID.

pub mod cli;
pub mod config;
pub mod db_mongo;
pub mod error;
pub mod loader;
pub mod processing;
pub mod search;

pub use config::StoreConfig;
pub use error::StoreError;

use tracing_subscriber::EnvFilter;

/// Log to stderr so stdout only carries documents.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}
