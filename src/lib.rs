pub mod api;
pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod storage;

pub use config::ServerConfig;
pub use error::{NotefulError, Result};
pub use storage::{Database, FolderStore, NoteStore};
