use std::sync::Arc;

use crate::domain::repository::MetadataRepository;

#[derive(Debug, thiserror::Error)]
pub enum ListTagsError {
    #[error("metadata unavailable: {0}")]
    MetadataUnavailable(String),
}

pub struct ListTagsUseCase {
    metadata_repo: Arc<dyn MetadataRepository>,
}

impl ListTagsUseCase {
    pub fn new(metadata_repo: Arc<dyn MetadataRepository>) -> Self {
        Self { metadata_repo }
    }

    /// Distinct tag names in metadata document order.
    pub async fn execute(&self) -> Result<Vec<String>, ListTagsError> {
        let metadata = self
            .metadata_repo
            .get()
            .await
            .map_err(|e| ListTagsError::MetadataUnavailable(e.to_string()))?;
        Ok(metadata.tag_names())
    }
}
