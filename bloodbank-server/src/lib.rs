//! bloodbank-server: HTTP backend for a blood-donor registry
//!
//! Records donors, lists them with optional filters, records blood
//! requests, and lists requests newest first. Persistence is MongoDB,
//! reached through a lazily established, process-wide connection.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod state;
pub mod store;

use std::sync::Arc;

pub use config::ServerConfig;
pub use http::{build_router, run_server, ServerError};
pub use state::AppState;
pub use store::{MemoryStore, MongoStore, RegistryStore, StoreError, StoreStatus};

/// Start the HTTP server against MongoDB.
///
/// A missing connection string does not stop the server: it is logged and
/// every persistence call then answers 500.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let store = Arc::new(MongoStore::from_uri(config.mongodb_uri.clone()));
    run_server(store, config).await
}
