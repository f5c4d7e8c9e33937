use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::api;
use crate::config::ServerConfig;
use crate::error::Result;
use crate::storage::Database;

pub fn handle_init(database: &Path) -> Result<()> {
    Database::open(database)?;
    println!("Initialized noteful database at {}", database.display());
    Ok(())
}

pub fn handle_serve(bind: SocketAddr, database: PathBuf, cors_origin: Option<String>) -> Result<()> {
    let config = ServerConfig::new(bind, database, cors_origin);
    if config.is_in_memory() {
        tracing::warn!("using an in-memory database; nothing will persist after shutdown");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(api::serve(config))
}
