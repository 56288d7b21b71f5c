use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: mongodb::error::Error,
    },
    #[error("failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("write rejected: {0}")]
    Write(#[source] mongodb::error::Error),
    #[error("query rejected: {0}")]
    Query(#[source] mongodb::error::Error),
    #[error("failed to write output")]
    Output(#[source] std::io::Error),
}

impl StoreError {
    pub(crate) fn connection(message: impl Into<String>, source: mongodb::error::Error) -> Self {
        StoreError::Connection {
            message: message.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
