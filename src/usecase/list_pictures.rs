use std::sync::Arc;

use crate::domain::entity::media::MediaEntry;
use crate::domain::listing;
use crate::domain::repository::{MediaDirectoryRepository, MetadataRepository};
use crate::domain::tag_filter;

pub const PICTURE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];
pub const PICTURES_MOUNT: &str = "/api/pictures";

#[derive(Debug, Clone)]
pub struct ListPicturesInput {
    pub requested_tags: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ListPicturesOutput {
    pub entries: Vec<MediaEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum ListPicturesError {
    #[error("metadata unavailable: {0}")]
    MetadataUnavailable(String),
    #[error("directory unavailable: {0}")]
    DirectoryUnavailable(String),
}

pub struct ListPicturesUseCase {
    dir_repo: Arc<dyn MediaDirectoryRepository>,
    metadata_repo: Arc<dyn MetadataRepository>,
}

impl ListPicturesUseCase {
    pub fn new(
        dir_repo: Arc<dyn MediaDirectoryRepository>,
        metadata_repo: Arc<dyn MetadataRepository>,
    ) -> Self {
        Self {
            dir_repo,
            metadata_repo,
        }
    }

    pub async fn execute(
        &self,
        input: &ListPicturesInput,
    ) -> Result<ListPicturesOutput, ListPicturesError> {
        // Metadata is loaded even when no tags were requested; a broken
        // metadata file fails the listing either way.
        let metadata = self
            .metadata_repo
            .get()
            .await
            .map_err(|e| ListPicturesError::MetadataUnavailable(e.to_string()))?;

        let names = self
            .dir_repo
            .read_file_names()
            .await
            .map_err(|e| ListPicturesError::DirectoryUnavailable(e.to_string()))?;

        let entries = listing::build_entries(names, PICTURE_EXTENSIONS, PICTURES_MOUNT);
        let entries = tag_filter::filter_by_tags(entries, &input.requested_tags, &metadata);

        Ok(ListPicturesOutput { entries })
    }
}
