use axum::extract::rejection::JsonRejection;
use axum::extract::{OriginalUri, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use super::error::ApiError;
use super::lookup::Found;
use super::serialize::NoteResponse;
use super::{created, read_payload};
use crate::entity::{NotePayload, NoteUpdate};
use crate::storage::NoteStore;

/// Routes for `/notes` (with or without a trailing slash) and `/notes/{id}`.
pub fn router(store: NoteStore) -> Router {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/", get(list_notes).post(create_note))
        .route(
            "/notes/{id}",
            get(get_note).delete(delete_note).patch(update_note),
        )
        .with_state(store)
}

async fn list_notes(State(store): State<NoteStore>) -> Result<Json<Vec<NoteResponse>>, ApiError> {
    let notes = store.list_all().await?;
    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

async fn create_note(
    State(store): State<NoteStore>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<NotePayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(new_note) = read_payload(payload)?.validate() else {
        tracing::error!("Name is required");
        return Err(ApiError::InvalidData);
    };

    let note = store.insert(new_note).await?;
    tracing::info!("note with id {} created.", note.id);
    Ok(created(&uri, note.id, NoteResponse::from(note)))
}

async fn get_note(found: Found<NoteStore>) -> Json<NoteResponse> {
    Json(NoteResponse::from(found.entity))
}

async fn delete_note(
    State(store): State<NoteStore>,
    found: Found<NoteStore>,
) -> Result<StatusCode, ApiError> {
    store.delete(found.id).await?;
    tracing::info!("Note with id {} deleted.", found.id);
    Ok(StatusCode::NO_CONTENT)
}

async fn update_note(
    State(store): State<NoteStore>,
    found: Found<NoteStore>,
    payload: Result<Json<NoteUpdate>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let update = read_payload(payload)?;
    if !update.has_values() {
        return Err(ApiError::MissingFields {
            message: NoteUpdate::REQUIRED_MESSAGE,
        });
    }

    store.update(found.id, update).await?;
    Ok(StatusCode::NO_CONTENT)
}
