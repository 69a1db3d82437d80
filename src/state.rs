use std::sync::Arc;

use crate::application::services::UrlService;
use crate::domain::repositories::UrlMappingRepository;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
}

impl AppState {
    pub fn new(url_service: Arc<UrlService>) -> Self {
        Self { url_service }
    }

    /// Builds the state over `repository` with the given generator budget.
    pub fn from_repository(repository: Arc<dyn UrlMappingRepository>, max_attempts: usize) -> Self {
        Self::new(Arc::new(UrlService::with_max_attempts(repository, max_attempts)))
    }
}
