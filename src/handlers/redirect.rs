use crate::{error::RegistryError, AppState};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

/// GET /:code
///
/// Resolve the short code against the current durable state and answer with
/// a 302 to the target URL, or a 404 page when the code is unknown.
pub async fn redirect(State(state): State<Arc<AppState>>, Path(code): Path<String>) -> Response {
    match state.registry.lookup(&code).await {
        Ok(target_url) => {
            tracing::info!("Redirecting '{}' -> {}", code, target_url);
            (StatusCode::FOUND, [(header::LOCATION, target_url)]).into_response()
        }
        Err(RegistryError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Html("<h1>Shortened URL not found</h1>"),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Store error looking up short code '{}': {:?}", code, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
