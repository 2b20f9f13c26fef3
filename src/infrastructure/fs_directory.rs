use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::repository::MediaDirectoryRepository;

/// Non-recursive filesystem directory enumeration.
pub struct FsDirectoryRepository {
    dir: PathBuf,
}

impl FsDirectoryRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl MediaDirectoryRepository for FsDirectoryRepository {
    async fn read_file_names(&self) -> anyhow::Result<Vec<String>> {
        let mut read_dir = tokio::fs::read_dir(&self.dir).await.map_err(|e| {
            anyhow::anyhow!("Failed to read directory {}: {}", self.dir.display(), e)
        })?;

        let mut names = Vec::new();
        while let Some(entry) = read_dir.next_entry().await? {
            // 非 UTF-8 のファイル名は静的マウントの URL で解決できないため除外する
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        Ok(names)
    }
}
