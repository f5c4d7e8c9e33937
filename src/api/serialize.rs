//! Response shapes.
//!
//! User-supplied names are echoed back in other clients verbatim, so they
//! are HTML-escaped on the way out. Every other field passes through as stored.

use serde::Serialize;

use crate::entity::{Folder, Note};

fn sanitize(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderResponse {
    pub id: i64,
    pub name: String,
}

impl From<Folder> for FolderResponse {
    fn from(folder: Folder) -> Self {
        Self {
            id: folder.id,
            name: sanitize(&folder.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    pub id: i64,
    pub name: String,
    pub content: Option<String>,
    pub date_modified: Option<String>,
    pub folder_id: Option<i64>,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            name: sanitize(&note.name),
            content: note.content,
            date_modified: note.date_modified,
            folder_id: note.folder_id,
        }
    }
}
