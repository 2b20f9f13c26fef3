use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::entity::media::MetadataDocument;
use crate::domain::repository::MetadataRepository;

/// Reads and parses the metadata JSON file on every call.
///
/// Wrap in [`CachedMetadataStore`](crate::infrastructure::metadata_store::CachedMetadataStore)
/// to get the once-per-process read the service uses.
pub struct FsMetadataRepository {
    path: PathBuf,
}

impl FsMetadataRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MetadataRepository for FsMetadataRepository {
    async fn get(&self) -> anyhow::Result<MetadataDocument> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            anyhow::anyhow!("Failed to read metadata file {}: {}", self.path.display(), e)
        })?;
        let document: MetadataDocument = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse metadata file: {}", e))?;
        Ok(document)
    }
}
