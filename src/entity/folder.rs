// src/entity/folder.rs
use serde::{Deserialize, Serialize};

use super::is_filled;

/// A persisted folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: i64,
    pub name: String,
}

/// Body of `POST /folders` as it arrives on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FolderPayload {
    pub name: Option<String>,
}

impl FolderPayload {
    /// Returns the insertable folder, or `None` when `name` is missing or empty.
    pub fn validate(self) -> Option<NewFolder> {
        match self.name {
            Some(name) if !name.is_empty() => Some(NewFolder { name }),
            _ => None,
        }
    }
}

/// A validated folder ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFolder {
    pub name: String,
}

/// Body of `PATCH /folders/:id`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FolderUpdate {
    pub name: Option<String>,
}

impl FolderUpdate {
    pub const REQUIRED_MESSAGE: &'static str = "Request body must contain a 'name'";

    /// True when at least one recognized field carries a non-empty value.
    pub fn has_values(&self) -> bool {
        is_filled(self.name.as_deref())
    }
}
