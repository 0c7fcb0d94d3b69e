//! Lazily established, process-wide MongoDB connection
//!
//! The first call to [`ConnectionManager::database`] builds the client and
//! pings the server. Later calls reuse it. Concurrent first calls share one
//! initialization; a failed attempt is not cached, so the next call retries.

use mongodb::bson::doc;
use mongodb::{Client, Database};
use tokio::sync::OnceCell;

use crate::config::{DATABASE_NAME, MONGODB_URI_ENV};
use crate::store::StoreError;

/// Owns the single MongoDB client for the process.
pub struct ConnectionManager {
    uri: Option<String>,
    client: OnceCell<Client>,
}

impl ConnectionManager {
    /// Create a manager for `uri`. Nothing is connected until first use.
    ///
    /// A missing URI is a configuration error: it is logged here, once, and
    /// every later call to [`database`](Self::database) fails.
    pub fn new(uri: Option<String>) -> Self {
        if uri.is_none() {
            tracing::error!("{} environment variable is not set", MONGODB_URI_ENV);
        }
        Self {
            uri,
            client: OnceCell::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.uri.is_some()
    }

    pub fn is_connected(&self) -> bool {
        self.client.initialized()
    }

    /// Handle to the `bloodDonorDB` database, connecting on first use.
    pub async fn database(&self) -> Result<Database, StoreError> {
        let uri = self.uri.as_deref().ok_or(StoreError::NotConfigured)?;
        let client = self.client.get_or_try_init(|| connect(uri)).await?;
        Ok(client.database(DATABASE_NAME))
    }
}

async fn connect(uri: &str) -> Result<Client, StoreError> {
    let client = Client::with_uri_str(uri)
        .await
        .map_err(StoreError::Connect)?;

    // with_uri_str only parses; the ping makes the first request fail fast
    // when the server is unreachable.
    client
        .database(DATABASE_NAME)
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(StoreError::Connect)?;

    tracing::info!(database = DATABASE_NAME, "Connected successfully to MongoDB");
    Ok(client)
}
