use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "127.0.0.1:8000";
pub const DEFAULT_DATABASE: &str = "noteful.db";

/// Runtime settings for `noteful serve`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind: SocketAddr,
    /// SQLite file holding folders and notes (`:memory:` for a throwaway store).
    pub database: PathBuf,
    /// Single origin allowed by CORS; `None` allows any origin.
    pub cors_origin: Option<String>,
}

impl ServerConfig {
    pub fn new(bind: SocketAddr, database: PathBuf, cors_origin: Option<String>) -> Self {
        Self {
            bind,
            database,
            cors_origin: cors_origin.filter(|origin| !origin.is_empty()),
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.database.as_os_str() == ":memory:"
    }
}
