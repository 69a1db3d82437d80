//! Url mapping creation, lookup and listing.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::services::code_generator::CodeGenerator;
use crate::domain::entities::{LongUrlShortUrl, LookupKey, NewUrlMapping};
use crate::domain::repositories::UrlMappingRepository;
use crate::error::AppError;
use crate::utils::url_validation::validate_long_url;

/// Service for creating and resolving short URLs.
///
/// Holds no state besides the injected store handle. Long URLs are stored
/// exactly as submitted.
pub struct UrlService {
    repository: Arc<dyn UrlMappingRepository>,
    code_generator: CodeGenerator,
}

impl UrlService {
    /// Creates a service using the default generator retry budget.
    pub fn new(repository: Arc<dyn UrlMappingRepository>) -> Self {
        let code_generator = CodeGenerator::new(repository.clone());
        Self {
            repository,
            code_generator,
        }
    }

    /// Creates a service whose generator tries `max_attempts` candidates.
    pub fn with_max_attempts(repository: Arc<dyn UrlMappingRepository>, max_attempts: usize) -> Self {
        let code_generator = CodeGenerator::with_max_attempts(repository.clone(), max_attempts);
        Self {
            repository,
            code_generator,
        }
    }

    /// Lists every stored mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list_all(&self) -> Result<Vec<LongUrlShortUrl>, AppError> {
        let mappings = self.repository.find_all().await?;

        Ok(mappings.into_iter().map(LongUrlShortUrl::from).collect())
    }

    /// Looks up the mapping for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping uses `short_url`.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn resolve(&self, short_url: &str) -> Result<LongUrlShortUrl, AppError> {
        self.repository
            .find_one(&LookupKey::short_url(short_url))
            .await?
            .map(LongUrlShortUrl::from)
            .ok_or(AppError::NotFound)
    }

    /// Creates a short URL for `long_url`, or returns the existing one.
    ///
    /// # Deduplication
    ///
    /// If a mapping for the exact same long URL exists it is returned
    /// unchanged, so repeated calls yield the same short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if `long_url` is not an absolute URI.
    /// Returns [`AppError::AliasUnavailable`] if no free code was found.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn create(&self, long_url: &str) -> Result<LongUrlShortUrl, AppError> {
        validate_long_url(long_url)?;

        if let Some(existing) = self
            .repository
            .find_one(&LookupKey::long_url(long_url))
            .await?
        {
            debug!(short_url = %existing.short_url, "Reusing existing mapping");
            return Ok(existing.into());
        }

        let short_url = self.code_generator.generate().await?;

        let mapping = self
            .repository
            .insert(NewUrlMapping {
                long_url: long_url.to_string(),
                short_url,
            })
            .await?;

        info!(id = mapping.id, short_url = %mapping.short_url, "Created mapping");

        Ok(mapping.into())
    }

    /// Checks that the underlying store answers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.health_check().await
    }
}
