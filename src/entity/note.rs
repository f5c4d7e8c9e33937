// src/entity/note.rs
use serde::{Deserialize, Serialize};

use super::{folder_ref, is_filled, nullable, nullable_folder_ref, nullable_timestamp, timestamp};

/// A persisted note.
///
/// `folder_id` is a plain reference; nothing checks that the folder exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i64,
    pub name: String,
    pub content: Option<String>,
    pub date_modified: Option<String>,
    pub folder_id: Option<i64>,
}

/// Body of `POST /notes` as it arrives on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePayload {
    pub name: Option<String>,
    pub content: Option<String>,
    #[serde(default, deserialize_with = "timestamp")]
    pub date_modified: Option<String>,
    #[serde(default, deserialize_with = "folder_ref")]
    pub folder_id: Option<i64>,
}

impl NotePayload {
    /// Returns the insertable note, or `None` when `name` is missing or empty.
    pub fn validate(self) -> Option<NewNote> {
        let name = self.name.filter(|name| !name.is_empty())?;
        Some(NewNote {
            name,
            content: self.content,
            date_modified: self.date_modified,
            folder_id: self.folder_id,
        })
    }
}

/// A validated note ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub name: String,
    pub content: Option<String>,
    pub date_modified: Option<String>,
    pub folder_id: Option<i64>,
}

/// Body of `PATCH /notes/:id`.
///
/// Nullable columns are tri-state: absent leaves the column alone, `null`
/// clears it, a value replaces it. `name` cannot be cleared, so `null` there
/// reads as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteUpdate {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub content: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable_timestamp")]
    pub date_modified: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable_folder_ref")]
    pub folder_id: Option<Option<i64>>,
}

impl NoteUpdate {
    pub const REQUIRED_MESSAGE: &'static str =
        "Request body must contain either 'name', 'content','dateModified','folderId'";

    /// True when at least one recognized field carries a non-empty, non-zero value.
    ///
    /// Clearing a field (`null`), an empty string and a `folderId` of 0 do not
    /// count on their own.
    pub fn has_values(&self) -> bool {
        is_filled(self.name.as_deref())
            || is_filled(self.content.as_ref().and_then(|c| c.as_deref()))
            || is_filled(self.date_modified.as_ref().and_then(|d| d.as_deref()))
            || matches!(self.folder_id, Some(Some(id)) if id != 0)
    }
}
