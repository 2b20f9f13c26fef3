use std::sync::Arc;

use crate::domain::entity::media::MediaEntry;
use crate::domain::listing;
use crate::domain::repository::MediaDirectoryRepository;

pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm"];
pub const VIDEOS_MOUNT: &str = "/api/videos";

#[derive(Debug, Clone)]
pub struct ListVideosOutput {
    pub entries: Vec<MediaEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum ListVideosError {
    #[error("directory unavailable: {0}")]
    DirectoryUnavailable(String),
}

/// Video listings carry no tag metadata; only the extension allow-list applies.
pub struct ListVideosUseCase {
    dir_repo: Arc<dyn MediaDirectoryRepository>,
}

impl ListVideosUseCase {
    pub fn new(dir_repo: Arc<dyn MediaDirectoryRepository>) -> Self {
        Self { dir_repo }
    }

    pub async fn execute(&self) -> Result<ListVideosOutput, ListVideosError> {
        let names = self
            .dir_repo
            .read_file_names()
            .await
            .map_err(|e| ListVideosError::DirectoryUnavailable(e.to_string()))?;

        let entries = listing::build_entries(names, VIDEO_EXTENSIONS, VIDEOS_MOUNT);
        Ok(ListVideosOutput { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repository::media_repository::MockMediaDirectoryRepository;

    #[tokio::test]
    async fn lists_only_video_extensions() {
        let mut dir = MockMediaDirectoryRepository::new();
        dir.expect_read_file_names().returning(|| {
            Ok(vec![
                "clip.mp4".to_string(),
                "movie.WEBM".to_string(),
                "notes.txt".to_string(),
                "cover.jpg".to_string(),
            ])
        });

        let uc = ListVideosUseCase::new(Arc::new(dir));
        let output = uc.execute().await.unwrap();
        let titles: Vec<&str> = output.entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["clip.mp4", "movie.WEBM"]);
        assert_eq!(output.entries[0].file_source, "/api/videos/clip.mp4");
    }

    #[tokio::test]
    async fn empty_directory_yields_empty_listing() {
        let mut dir = MockMediaDirectoryRepository::new();
        dir.expect_read_file_names().returning(|| Ok(vec![]));

        let uc = ListVideosUseCase::new(Arc::new(dir));
        let output = uc.execute().await.unwrap();
        assert!(output.entries.is_empty());
    }

    #[tokio::test]
    async fn directory_error_is_surfaced() {
        let mut dir = MockMediaDirectoryRepository::new();
        dir.expect_read_file_names()
            .returning(|| Err(anyhow::anyhow!("no such directory")));

        let uc = ListVideosUseCase::new(Arc::new(dir));
        let err = uc.execute().await.unwrap_err();
        match err {
            ListVideosError::DirectoryUnavailable(msg) => {
                assert!(msg.contains("no such directory"))
            }
        }
    }
}
