pub mod health;
pub mod media_handler;

use std::path::Path;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use crate::domain::repository::{MediaDirectoryRepository, MetadataRepository};
use crate::usecase::{ListPicturesUseCase, ListTagsUseCase, ListVideosUseCase};

/// Shared application state for REST handlers.
///
/// `metadata_probe` is the uncached metadata repository; readiness checks go
/// through it so they never populate the once-per-process cache.
#[derive(Clone)]
pub struct AppState {
    pub list_tags_uc: Arc<ListTagsUseCase>,
    pub list_pictures_uc: Arc<ListPicturesUseCase>,
    pub list_videos_uc: Arc<ListVideosUseCase>,
    pub pictures_repo: Arc<dyn MediaDirectoryRepository>,
    pub videos_repo: Arc<dyn MediaDirectoryRepository>,
    pub metadata_probe: Arc<dyn MetadataRepository>,
}

/// Build the REST API router.
///
/// The static mounts serve raw bytes straight from the media directories; a
/// missing file gets ServeDir's default 404.
pub fn router(state: AppState, pictures_dir: &Path, videos_dir: &Path) -> Router {
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz))
        .route("/api/tags", get(media_handler::list_tags))
        .route("/api/pictures-list", get(media_handler::list_pictures))
        .route("/api/videos-list", get(media_handler::list_videos))
        .nest_service("/api/pictures", ServeDir::new(pictures_dir))
        .nest_service("/api/videos", ServeDir::new(videos_dir))
        .with_state(state)
}
