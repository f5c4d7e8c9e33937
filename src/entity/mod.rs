//! Domain records for folders and notes, plus the payloads accepted when
//! creating or updating them.

mod folder;
mod note;

pub use folder::{Folder, FolderPayload, FolderUpdate, NewFolder};
pub use note::{NewNote, Note, NotePayload, NoteUpdate};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Deserialize a field that distinguishes "absent" from an explicit `null`.
///
/// Paired with `#[serde(default)]`: a missing key stays `None`, `null`
/// becomes `Some(None)` and a value becomes `Some(Some(v))`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// A folder reference as sent by clients: a JSON number or a numeric string.
#[derive(Deserialize)]
#[serde(untagged)]
enum FolderRef {
    Id(i64),
    Text(String),
}

/// Deserialize an optional folder id, accepting `3` as well as `"3"`.
///
/// An empty string reads as no folder; any other non-numeric string is an error.
pub(crate) fn folder_ref<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<FolderRef>::deserialize(deserializer)? {
        None => Ok(None),
        Some(FolderRef::Id(id)) => Ok(Some(id)),
        Some(FolderRef::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(FolderRef::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid folder id '{text}'"))),
    }
}

/// Tri-state variant of [`folder_ref`] for update payloads.
pub(crate) fn nullable_folder_ref<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Option<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    folder_ref(deserializer).map(Some)
}

/// A caller-supplied timestamp: kept as text, numbers are stored in decimal form.
#[derive(Deserialize)]
#[serde(untagged)]
enum Timestamp {
    Text(String),
    Integer(i64),
    Float(f64),
}

pub(crate) fn timestamp<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<Timestamp>::deserialize(deserializer)?.map(|value| match value {
            Timestamp::Text(text) => text,
            Timestamp::Integer(n) => n.to_string(),
            Timestamp::Float(n) => n.to_string(),
        }),
    )
}

/// Tri-state variant of [`timestamp`] for update payloads.
pub(crate) fn nullable_timestamp<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    timestamp(deserializer).map(Some)
}

/// Whether a text field carries a value an update should count.
///
/// Empty strings are treated as absent.
pub(crate) fn is_filled(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.is_empty())
}
