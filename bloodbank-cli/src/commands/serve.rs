//! HTTP server command for the donor registry API

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use bloodbank_server::{run_server, MemoryStore, MongoStore, RegistryStore, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// MongoDB connection string (overrides environment)
    #[arg(long, env = "MONGODB_URI", hide_env_values = true)]
    pub mongodb_uri: Option<String>,

    /// Keep donors and requests in memory instead of MongoDB (lost on exit)
    #[arg(long)]
    pub in_memory: bool,

    /// Only allow CORS requests from localhost origins
    #[arg(long)]
    pub localhost_cors: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: !args.localhost_cors,
        mongodb_uri: args.mongodb_uri.filter(|uri| !uri.trim().is_empty()),
    };

    let store: Arc<dyn RegistryStore> = if args.in_memory {
        tracing::warn!("Using in-memory store; data will be lost on exit");
        Arc::new(MemoryStore::new())
    } else {
        // Missing URI is logged by the connection manager; the server still starts.
        Arc::new(MongoStore::from_uri(config.mongodb_uri.clone()))
    };

    tracing::info!("Starting bloodbank server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(store, config).await.context("Server error")?;

    Ok(())
}
