use axum::extract::rejection::JsonRejection;
use axum::extract::{OriginalUri, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use super::error::ApiError;
use super::lookup::Found;
use super::serialize::FolderResponse;
use super::{created, read_payload};
use crate::entity::{FolderPayload, FolderUpdate};
use crate::storage::FolderStore;

/// Routes for `/folders` (with or without a trailing slash) and `/folders/{id}`.
pub fn router(store: FolderStore) -> Router {
    Router::new()
        .route("/folders", get(list_folders).post(create_folder))
        .route("/folders/", get(list_folders).post(create_folder))
        .route(
            "/folders/{id}",
            get(get_folder).delete(delete_folder).patch(update_folder),
        )
        .with_state(store)
}

async fn list_folders(
    State(store): State<FolderStore>,
) -> Result<Json<Vec<FolderResponse>>, ApiError> {
    let folders = store.list_all().await?;
    Ok(Json(folders.into_iter().map(FolderResponse::from).collect()))
}

async fn create_folder(
    State(store): State<FolderStore>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<FolderPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(new_folder) = read_payload(payload)?.validate() else {
        tracing::error!("Name is required");
        return Err(ApiError::InvalidData);
    };

    let folder = store.insert(new_folder).await?;
    tracing::info!("folder with id {} created.", folder.id);
    Ok(created(&uri, folder.id, FolderResponse::from(folder)))
}

async fn get_folder(found: Found<FolderStore>) -> Json<FolderResponse> {
    Json(FolderResponse::from(found.entity))
}

async fn delete_folder(
    State(store): State<FolderStore>,
    found: Found<FolderStore>,
) -> Result<StatusCode, ApiError> {
    store.delete(found.id).await?;
    tracing::info!("Folder with id {} deleted.", found.id);
    Ok(StatusCode::NO_CONTENT)
}

async fn update_folder(
    State(store): State<FolderStore>,
    found: Found<FolderStore>,
    payload: Result<Json<FolderUpdate>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let update = read_payload(payload)?;
    if !update.has_values() {
        return Err(ApiError::MissingFields {
            message: FolderUpdate::REQUIRED_MESSAGE,
        });
    }

    store.update(found.id, update).await?;
    Ok(StatusCode::NO_CONTENT)
}
