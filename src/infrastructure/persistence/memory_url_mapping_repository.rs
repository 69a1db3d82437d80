//! Process-local implementation of the url mapping repository.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{LookupKey, NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlMappingRepository;
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    mappings: Vec<UrlMapping>,
    next_id: i64,
}

/// A repository that keeps mappings in memory for the lifetime of the process.
///
/// Mirrors the PostgreSQL repository: insertion order is preserved and no
/// uniqueness is enforced.
///
/// # Use Cases
///
/// - Local development without PostgreSQL (`STORAGE_BACKEND=memory`)
/// - HTTP-level tests that should not need a database
#[derive(Default)]
pub struct InMemoryUrlMappingRepository {
    inner: RwLock<Inner>,
}

impl InMemoryUrlMappingRepository {
    pub fn new() -> Self {
        debug!("Using in-memory url mapping store");
        Self::default()
    }

    /// Number of stored mappings.
    pub async fn len(&self) -> usize {
        self.inner.read().await.mappings.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UrlMappingRepository for InMemoryUrlMappingRepository {
    async fn find_all(&self) -> Result<Vec<UrlMapping>, AppError> {
        Ok(self.inner.read().await.mappings.clone())
    }

    async fn find_one(&self, key: &LookupKey) -> Result<Option<UrlMapping>, AppError> {
        let inner = self.inner.read().await;

        Ok(inner.mappings.iter().find(|m| key.matches(m)).cloned())
    }

    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let mut inner = self.inner.write().await;

        inner.next_id += 1;
        let mapping = UrlMapping::new(inner.next_id, new_mapping.long_url, new_mapping.short_url);
        inner.mappings.push(mapping.clone());

        Ok(mapping)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}
