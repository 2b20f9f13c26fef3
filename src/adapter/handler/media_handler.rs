use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use super::AppState;
use crate::usecase::list_pictures::ListPicturesInput;

/// Fixed failure body; full error detail stays in the server log.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    fn internal() -> Self {
        Self {
            error: "Internal Server Error".to_string(),
        }
    }
}

fn internal_error() -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::internal()),
    )
        .into_response()
}

/// GET /api/tags
pub async fn list_tags(State(state): State<AppState>) -> impl IntoResponse {
    match state.list_tags_uc.execute().await {
        Ok(tags) => (StatusCode::OK, Json(tags)).into_response(),
        Err(e) => {
            error!(error = %e, "failed to list tags");
            internal_error()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListPicturesParams {
    /// JSON array of tag names, e.g. `tags=["sunset","beach"]`.
    pub tags: Option<String>,
}

/// GET /api/pictures-list
pub async fn list_pictures(
    State(state): State<AppState>,
    Query(params): Query<ListPicturesParams>,
) -> impl IntoResponse {
    let requested_tags = match params.tags {
        Some(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(tags) => tags,
            Err(e) => {
                error!(error = %e, "malformed tags query parameter");
                return internal_error();
            }
        },
        None => Vec::new(),
    };

    let input = ListPicturesInput { requested_tags };
    match state.list_pictures_uc.execute(&input).await {
        Ok(output) => (StatusCode::OK, Json(output.entries)).into_response(),
        Err(e) => {
            error!(error = %e, "failed to list pictures");
            internal_error()
        }
    }
}

/// GET /api/videos-list
pub async fn list_videos(State(state): State<AppState>) -> impl IntoResponse {
    match state.list_videos_uc.execute().await {
        Ok(output) => (StatusCode::OK, Json(output.entries)).into_response(),
        Err(e) => {
            error!(error = %e, "failed to list videos");
            internal_error()
        }
    }
}
