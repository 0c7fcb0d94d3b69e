//! Server configuration
//!
//! Loaded from environment variables:
//! - `MONGODB_URI`: MongoDB connection string (required for persistence)

use std::net::SocketAddr;

/// Environment variable holding the MongoDB connection string
pub const MONGODB_URI_ENV: &str = "MONGODB_URI";

/// Fixed database name; not configurable
pub const DATABASE_NAME: &str = "bloodDonorDB";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:3030)
    pub bind_addr: SocketAddr,

    /// Allow any origin (default: true). When false, only localhost
    /// origins are allowed.
    pub cors_permissive: bool,

    /// MongoDB connection string. `None` leaves the server running in a
    /// degraded state where every persistence call fails.
    pub mongodb_uri: Option<String>,
}

impl ServerConfig {
    /// Read `MONGODB_URI`, treating an empty value as unset.
    pub fn mongodb_uri_from_env() -> Option<String> {
        std::env::var(MONGODB_URI_ENV)
            .ok()
            .filter(|uri| !uri.trim().is_empty())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3030)),
            cors_permissive: true,
            mongodb_uri: Self::mongodb_uri_from_env(),
        }
    }
}
