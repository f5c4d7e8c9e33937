use std::future::Future;

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, Lookup};
use crate::entity::{Folder, FolderUpdate, NewFolder};
use crate::error::Result;

/// Data access for the `folders` table.
#[derive(Clone)]
pub struct FolderStore {
    db: Database,
}

fn folder_from_row(row: &Row<'_>) -> rusqlite::Result<Folder> {
    Ok(Folder {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

impl FolderStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// All folders in id order.
    pub async fn list_all(&self) -> Result<Vec<Folder>> {
        self.db
            .call(|conn| {
                let mut stmt = conn.prepare("SELECT id, name FROM folders ORDER BY id")?;
                let folders = stmt
                    .query_map([], folder_from_row)?
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(folders)
            })
            .await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Folder>> {
        self.db
            .call(move |conn| {
                let folder = conn
                    .query_row(
                        "SELECT id, name FROM folders WHERE id = ?1",
                        [id],
                        folder_from_row,
                    )
                    .optional()?;
                Ok(folder)
            })
            .await
    }

    /// Insert a folder and return it with its assigned id.
    pub async fn insert(&self, folder: NewFolder) -> Result<Folder> {
        self.db
            .call(move |conn| {
                let folder = conn.query_row(
                    "INSERT INTO folders (name) VALUES (?1) RETURNING id, name",
                    params![folder.name],
                    folder_from_row,
                )?;
                Ok(folder)
            })
            .await
    }

    /// Apply the provided fields to folder `id`. Returns the number of rows touched.
    pub async fn update(&self, id: i64, update: FolderUpdate) -> Result<usize> {
        let Some(name) = update.name else {
            return Ok(0);
        };

        self.db
            .call(move |conn| {
                let rows = conn.execute(
                    "UPDATE folders SET name = ?1 WHERE id = ?2",
                    params![name, id],
                )?;
                Ok(rows)
            })
            .await
    }

    /// Delete folder `id`. Returns the number of rows removed.
    ///
    /// Notes that point at the folder are left as they are.
    pub async fn delete(&self, id: i64) -> Result<usize> {
        self.db
            .call(move |conn| Ok(conn.execute("DELETE FROM folders WHERE id = ?1", [id])?))
            .await
    }
}

impl Lookup for FolderStore {
    type Entity = Folder;

    const RESOURCE: &'static str = "folder";

    fn lookup(&self, id: i64) -> impl Future<Output = Result<Option<Folder>>> + Send {
        self.get_by_id(id)
    }
}
