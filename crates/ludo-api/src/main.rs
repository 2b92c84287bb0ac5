//! `ludo-api` binary entrypoint.
//!
//! Loads configuration from environment variables, selects a catalog store,
//! and starts the HTTP server.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

use std::sync::Arc;

use anyhow::Result;

use ludo_api::config::Config;
use ludo_api::server::Server;
use ludo_catalog::{CatalogStore, MemoryStore, MongoStore};
use ludo_core::observability::{LogFormat, init_logging};

fn choose_log_format(config: &Config) -> LogFormat {
    if config.debug {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    init_logging(choose_log_format(&config));

    let store: Arc<dyn CatalogStore> =
        if let (Some(url), Some(db_name)) = (config.mongo_url.as_deref(), config.db_name.as_deref())
        {
            tracing::info!(database = %db_name, "Using MongoDB catalog store");
            Arc::new(MongoStore::connect(url, db_name).await?)
        } else {
            if !config.debug {
                anyhow::bail!("LUDO_MONGO_URL and LUDO_DB_NAME are required when LUDO_DEBUG=false");
            }
            tracing::warn!("LUDO_MONGO_URL not set; using in-memory catalog store (debug only)");
            Arc::new(MemoryStore::new())
        };

    let server = Server::with_store(config, store);
    server.serve().await?;
    Ok(())
}
