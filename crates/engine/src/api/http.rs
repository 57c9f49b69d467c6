//! HTTP routes.
//!
//! The read surface is deliberately small: one document endpoint plus health.
//! Serving the bundled document is a success (200); the only 500 is the
//! engine having no document at all.

use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use conceptforge_domain::ConceptDocument;

use crate::app::App;
use crate::use_cases::{ConceptSource, FetchError};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/concept", get(get_concept))
}

async fn health() -> &'static str {
    "OK"
}

async fn get_concept(State(app): State<Arc<App>>) -> Result<Json<ConceptDocument>, ApiError> {
    let fetched = app.fetch_concept.execute().await?;
    if fetched.source == ConceptSource::Fallback {
        tracing::info!("serving bundled concept document");
    }
    Ok(Json(fetched.document))
}

#[derive(Debug)]
pub enum ApiError {
    /// No document could be produced at all.
    Unavailable(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            // The message is short and user-facing by construction.
            ApiError::Unavailable(msg) => {
                (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg).into_response()
            }
        }
    }
}

impl From<FetchError> for ApiError {
    fn from(e: FetchError) -> Self {
        ApiError::Unavailable(e.to_string())
    }
}
