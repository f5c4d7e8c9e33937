//! The existence check shared by every `/:id` route.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::storage::Lookup;

/// An entity fetched by the `{id}` path segment before the handler runs.
///
/// Extraction fails with a 404 when the id does not parse or no row matches,
/// so a handler taking `Found<S>` only ever sees entities that exist.
pub struct Found<S: Lookup> {
    pub id: i64,
    pub entity: S::Entity,
}

impl<S: Lookup> FromRequestParts<S> for Found<S> {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, store: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, store)
            .await
            .map_err(|_| ApiError::not_found(S::RESOURCE))?;

        match store.lookup(id).await? {
            Some(entity) => Ok(Found { id, entity }),
            None => Err(ApiError::not_found(S::RESOURCE)),
        }
    }
}
