use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tracing::info;

use gallery_server::adapter::handler::{self, AppState};
use gallery_server::domain::repository::{MediaDirectoryRepository, MetadataRepository};
use gallery_server::infrastructure::config::Config;
use gallery_server::infrastructure::fs_directory::FsDirectoryRepository;
use gallery_server::infrastructure::fs_metadata::FsMetadataRepository;
use gallery_server::infrastructure::metadata_store::CachedMetadataStore;
use gallery_server::usecase::{ListPicturesUseCase, ListTagsUseCase, ListVideosUseCase};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .json()
        .init();

    let config_path =
        std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config/config.yaml".to_string());
    let cfg = Config::load(&config_path)?;

    info!(
        app_name = %cfg.app.name,
        version = %cfg.app.version,
        environment = %cfg.app.environment,
        "starting gallery server"
    );

    let metadata_probe: Arc<dyn MetadataRepository> =
        Arc::new(FsMetadataRepository::new(&cfg.media.metadata_path));
    let metadata_repo: Arc<dyn MetadataRepository> =
        Arc::new(CachedMetadataStore::new(metadata_probe.clone()));
    let pictures_repo: Arc<dyn MediaDirectoryRepository> =
        Arc::new(FsDirectoryRepository::new(&cfg.media.pictures_dir));
    let videos_repo: Arc<dyn MediaDirectoryRepository> =
        Arc::new(FsDirectoryRepository::new(&cfg.media.videos_dir));

    let state = AppState {
        list_tags_uc: Arc::new(ListTagsUseCase::new(metadata_repo.clone())),
        list_pictures_uc: Arc::new(ListPicturesUseCase::new(
            pictures_repo.clone(),
            metadata_repo,
        )),
        list_videos_uc: Arc::new(ListVideosUseCase::new(videos_repo.clone())),
        pictures_repo,
        videos_repo,
        metadata_probe,
    };

    // 設定された単一オリジンからの GET のみ許可する
    let cors = CorsLayer::new()
        .allow_origin(cfg.cors.allowed_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET]);

    let app = handler::router(state, &cfg.media.pictures_dir, &cfg.media.videos_dir).layer(cors);

    let host: IpAddr = cfg.server.host.parse()?;
    let addr = SocketAddr::new(host, cfg.server.port);
    info!("REST server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
