use std::time::Duration;

use clap::Args;

pub const DEFAULT_DATABASE: &str = "humandbs";
pub const DEFAULT_COLLECTION: &str = "metadata";

/// Where to connect and which collection to work on.
///
/// Every field can come from the environment, so a `.env` file next to the
/// binaries is enough to point both tools at the same collection.
#[derive(Debug, Clone, Args)]
pub struct StoreConfig {
    /// MongoDB connection string (credentials included)
    #[arg(long, env = "MONGODB_URI", hide_env_values = true)]
    pub uri: String,

    /// Target database
    #[arg(long, env = "MONGODB_DATABASE", default_value = DEFAULT_DATABASE)]
    pub database: String,

    /// Target collection
    #[arg(long, env = "MONGODB_COLLECTION", default_value = DEFAULT_COLLECTION)]
    pub collection: String,

    /// Connect and server-selection timeout in seconds (driver default when unset)
    #[arg(long, env = "MONGODB_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

impl StoreConfig {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            timeout_secs: None,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_metadata_collection() {
        let config = StoreConfig::new("mongodb://localhost:27017");
        assert_eq!(config.database, "humandbs");
        assert_eq!(config.collection, "metadata");
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_timeout_from_seconds() {
        let mut config = StoreConfig::new("mongodb://localhost:27017");
        config.timeout_secs = Some(5);
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }
}
