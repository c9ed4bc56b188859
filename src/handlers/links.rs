use crate::{error::RegistryError, AppState};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ── Request / response types ───────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    url: Option<String>,
    shorturl: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    success: bool,
    #[serde(rename = "shortenedUrl")]
    shortened_url: String,
}

// ── Handlers ───────────────────────────────────────────────────────────────

/// GET /
///
/// The landing page, compiled into the binary so it can never go missing at
/// runtime.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// GET /links
///
/// The full short_code → target_url mapping, pretty-printed exactly like the
/// store file.
pub async fn list_links(State(state): State<Arc<AppState>>) -> Response {
    let links = match state.registry.list_all().await {
        Ok(links) => links,
        Err(e) => {
            tracing::error!("Failed to list links: {:?}", e);
            return internal_error();
        }
    };

    match serde_json::to_string_pretty(&links) {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            tracing::error!("Failed to serialize links: {:?}", e);
            internal_error()
        }
    }
}

/// POST /shorten
///
/// Body: `{"url": "...", "shorturl": "optional-custom-code"}`.
///
/// The body is parsed by hand rather than through the `Json` extractor so a
/// malformed body yields the same 500 as any other unexpected failure, not
/// an extractor rejection.
pub async fn shorten(State(state): State<Arc<AppState>>, body: String) -> Response {
    tracing::debug!("Shorten request body: {}", body);

    let request: ShortenRequest = match serde_json::from_str(&body) {
        Ok(req) => req,
        Err(e) => {
            tracing::warn!("Malformed shorten body: {:?}", e);
            return internal_error();
        }
    };

    let url = request.url.as_deref().unwrap_or_default();

    match state.registry.create_link(url, request.shorturl.as_deref()).await {
        Ok(created) => Json(ShortenResponse {
            success: true,
            shortened_url: created.short_url,
        })
        .into_response(),
        Err(RegistryError::MissingUrl) => {
            (StatusCode::BAD_REQUEST, "URL is required").into_response()
        }
        Err(RegistryError::CodeExists(code)) => {
            tracing::debug!("Short code '{}' already taken", code);
            (
                StatusCode::BAD_REQUEST,
                "Short code already exists. Please choose another.",
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to create link: {:?}", e);
            internal_error()
        }
    }
}

fn internal_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}
