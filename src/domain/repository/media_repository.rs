use async_trait::async_trait;

use crate::domain::entity::media::MetadataDocument;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataRepository: Send + Sync {
    async fn get(&self) -> anyhow::Result<MetadataDocument>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaDirectoryRepository: Send + Sync {
    /// Names of the directory's immediate entries, in enumeration order.
    async fn read_file_names(&self) -> anyhow::Result<Vec<String>>;
}
