use std::future::Future;

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, OptionalExtension, Row};

use super::{Database, Lookup};
use crate::entity::{NewNote, Note, NoteUpdate};
use crate::error::Result;

const NOTE_COLUMNS: &str = "id, name, content, date_modified, folder_id";

/// Data access for the `notes` table.
#[derive(Clone)]
pub struct NoteStore {
    db: Database,
}

fn note_from_row(row: &Row<'_>) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get(0)?,
        name: row.get(1)?,
        content: row.get(2)?,
        date_modified: row.get(3)?,
        folder_id: row.get(4)?,
    })
}

/// Column assignments for a partial update, in bind order.
fn assignments(update: NoteUpdate) -> Vec<(&'static str, Value)> {
    let mut columns = Vec::new();
    if let Some(name) = update.name {
        columns.push(("name", Value::Text(name)));
    }
    if let Some(content) = update.content {
        columns.push(("content", content.map_or(Value::Null, Value::Text)));
    }
    if let Some(date_modified) = update.date_modified {
        columns.push(("date_modified", date_modified.map_or(Value::Null, Value::Text)));
    }
    if let Some(folder_id) = update.folder_id {
        columns.push(("folder_id", folder_id.map_or(Value::Null, Value::Integer)));
    }
    columns
}

impl NoteStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// All notes in id order.
    pub async fn list_all(&self) -> Result<Vec<Note>> {
        self.db
            .call(|conn| {
                let mut stmt =
                    conn.prepare(&format!("SELECT {NOTE_COLUMNS} FROM notes ORDER BY id"))?;
                let notes = stmt
                    .query_map([], note_from_row)?
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(notes)
            })
            .await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Note>> {
        self.db
            .call(move |conn| {
                let note = conn
                    .query_row(
                        &format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = ?1"),
                        [id],
                        note_from_row,
                    )
                    .optional()?;
                Ok(note)
            })
            .await
    }

    /// Insert a note and return it with its assigned id.
    ///
    /// `folder_id` is stored as given, whether or not that folder exists.
    pub async fn insert(&self, note: NewNote) -> Result<Note> {
        self.db
            .call(move |conn| {
                let note = conn.query_row(
                    &format!(
                        "INSERT INTO notes (name, content, date_modified, folder_id)
                         VALUES (?1, ?2, ?3, ?4)
                         RETURNING {NOTE_COLUMNS}"
                    ),
                    params![note.name, note.content, note.date_modified, note.folder_id],
                    note_from_row,
                )?;
                Ok(note)
            })
            .await
    }

    /// Apply the provided fields to note `id`. Returns the number of rows touched.
    pub async fn update(&self, id: i64, update: NoteUpdate) -> Result<usize> {
        let columns = assignments(update);
        if columns.is_empty() {
            return Ok(0);
        }

        self.db
            .call(move |conn| {
                let set = columns
                    .iter()
                    .enumerate()
                    .map(|(i, (column, _))| format!("{column} = ?{}", i + 1))
                    .collect::<Vec<_>>()
                    .join(", ");
                let sql = format!("UPDATE notes SET {set} WHERE id = ?{}", columns.len() + 1);

                let mut values: Vec<Value> = columns.into_iter().map(|(_, value)| value).collect();
                values.push(Value::Integer(id));

                Ok(conn.execute(&sql, params_from_iter(values))?)
            })
            .await
    }

    /// Delete note `id`. Returns the number of rows removed.
    pub async fn delete(&self, id: i64) -> Result<usize> {
        self.db
            .call(move |conn| Ok(conn.execute("DELETE FROM notes WHERE id = ?1", [id])?))
            .await
    }
}

impl Lookup for NoteStore {
    type Entity = Note;

    const RESOURCE: &'static str = "note";

    fn lookup(&self, id: i64) -> impl Future<Output = Result<Option<Note>>> + Send {
        self.get_by_id(id)
    }
}
