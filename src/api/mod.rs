//! REST surface for folders and notes.
//!
//! Each resource gets its own router built around an explicit store handle;
//! [`router`] merges them and [`app`] adds the HTTP layers used when serving.

pub mod error;
pub mod folders;
pub mod lookup;
pub mod notes;
pub mod serialize;

use axum::extract::rejection::JsonRejection;
use axum::http::{header, HeaderValue, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::{Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::{NotefulError, Result};
use crate::storage::Database;

pub use error::ApiError;
pub use lookup::Found;

/// Folder and note routes over one shared database.
pub fn router(db: &Database) -> Router {
    Router::new()
        .merge(folders::router(db.folders()))
        .merge(notes::router(db.notes()))
}

/// [`router`] wrapped in request tracing and CORS.
pub fn app(db: &Database, config: &ServerConfig) -> Result<Router> {
    Ok(router(db)
        .layer(cors_layer(config.cors_origin.as_deref())?)
        .layer(TraceLayer::new_for_http()))
}

fn cors_layer(origin: Option<&str>) -> Result<CorsLayer> {
    let allow_origin = match origin {
        Some(origin) => AllowOrigin::exact(
            HeaderValue::from_str(origin)
                .map_err(|e| NotefulError::Config(format!("invalid CORS origin '{origin}': {e}")))?,
        ),
        None => AllowOrigin::from(Any),
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::LOCATION]))
}

/// Open the configured database and serve until Ctrl-C or SIGTERM.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let db = Database::open(&config.database)?;
    let app = app(&db, &config)?;

    let listener = TcpListener::bind(config.bind).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        database = %config.database.display(),
        "noteful listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutting down");
}

/// Path of a newly created entity: the collection path plus `/{id}`.
pub(crate) fn location(collection: &Uri, id: i64) -> String {
    format!("{}/{}", collection.path().trim_end_matches('/'), id)
}

/// 201 with a `Location` header and the serialized entity as body.
pub(crate) fn created<T: Serialize>(collection: &Uri, id: i64, body: T) -> impl IntoResponse {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location(collection, id))],
        Json(body),
    )
}

/// Read a JSON body for validation.
///
/// A body that is missing or not JSON validates as empty. Well-formed JSON
/// with a field of the wrong type is rejected with a message naming the field.
pub(crate) fn read_payload<T: Default>(
    payload: std::result::Result<Json<T>, JsonRejection>,
) -> std::result::Result<T, ApiError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(JsonRejection::JsonDataError(err)) => Err(ApiError::InvalidField {
            message: err.body_text(),
        }),
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable request body");
            Ok(T::default())
        }
    }
}
