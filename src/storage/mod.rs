//! SQLite-backed persistence for folders and notes.
//!
//! A single [`Database`] owns the connection for the life of the process.
//! [`FolderStore`] and [`NoteStore`] are cheap handles onto it that translate
//! list/get/insert/update/delete into SQL. Each call runs as one statement;
//! there are no transactions spanning calls and no retries.

mod folders;
mod notes;

pub use folders::FolderStore;
pub use notes::NoteStore;

use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use rusqlite::Connection;
use tokio::sync::Mutex;

use crate::error::Result;

/// Shared handle to the store connection.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Open or create the database file at `path`.
    ///
    /// `:memory:` opens a private in-memory database.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Open a fresh in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        init_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn folders(&self) -> FolderStore {
        FolderStore::new(self.clone())
    }

    pub fn notes(&self) -> NoteStore {
        NoteStore::new(self.clone())
    }

    /// Run `f` against the connection once it is free.
    pub(crate) async fn call<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send,
    {
        let conn = self.conn.lock().await;
        f(&*conn)
    }
}

/// Create the tables if they do not exist yet.
///
/// `notes.folder_id` has no REFERENCES clause; a note may point at a folder
/// that does not exist.
fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS folders (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS notes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            content TEXT,
            date_modified TEXT,
            folder_id INTEGER
        );
        ",
    )?;
    Ok(())
}

/// Resource lookup used by the HTTP layer before any path-scoped handler runs.
pub trait Lookup: Clone + Send + Sync + 'static {
    type Entity: Send;

    /// Singular, lowercase resource name ("folder", "note").
    const RESOURCE: &'static str;

    /// Fetch the entity with `id`, or `None` if there is no such row.
    fn lookup(&self, id: i64) -> impl Future<Output = Result<Option<Self::Entity>>> + Send;
}
