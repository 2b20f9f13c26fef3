use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;

use crate::domain::entity::media::MetadataDocument;
use crate::domain::repository::MetadataRepository;

/// Caching decorator over a [`MetadataRepository`].
///
/// The inner repository is consulted at most once per process lifetime; there
/// is no invalidation, so on-disk changes are not observed until restart.
pub struct CachedMetadataStore {
    inner: Arc<dyn MetadataRepository>,
    cell: OnceCell<MetadataDocument>,
}

impl CachedMetadataStore {
    pub fn new(inner: Arc<dyn MetadataRepository>) -> Self {
        Self {
            inner,
            cell: OnceCell::new(),
        }
    }
}

#[async_trait]
impl MetadataRepository for CachedMetadataStore {
    async fn get(&self) -> anyhow::Result<MetadataDocument> {
        let document = self.cell.get_or_try_init(|| self.inner.get()).await?;
        Ok(document.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repository::media_repository::MockMetadataRepository;

    fn sample_document() -> MetadataDocument {
        serde_json::from_str(r#"{"tags":{"sunset":{}},"items":{}}"#).unwrap()
    }

    #[tokio::test]
    async fn second_get_does_not_reread() {
        let mut mock = MockMetadataRepository::new();
        mock.expect_get().times(1).returning(|| Ok(sample_document()));

        let store = CachedMetadataStore::new(Arc::new(mock));
        let first = store.get().await.unwrap();
        let second = store.get().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.tag_names(), vec!["sunset"]);
    }

    #[tokio::test]
    async fn failed_load_is_not_cached() {
        let mut mock = MockMetadataRepository::new();
        let mut calls = 0;
        mock.expect_get().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Err(anyhow::anyhow!("disk error"))
            } else {
                Ok(sample_document())
            }
        });

        let store = CachedMetadataStore::new(Arc::new(mock));
        assert!(store.get().await.is_err());
        // 失敗はキャッシュされず、次回の呼び出しで再読込される
        assert!(store.get().await.is_ok());
    }

    #[tokio::test]
    async fn error_propagates_from_inner() {
        let mut mock = MockMetadataRepository::new();
        mock.expect_get()
            .returning(|| Err(anyhow::anyhow!("missing metadata")));

        let store = CachedMetadataStore::new(Arc::new(mock));
        let err = store.get().await.unwrap_err();
        assert!(err.to_string().contains("missing metadata"));
    }
}
