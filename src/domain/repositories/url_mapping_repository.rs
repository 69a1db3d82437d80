//! Repository trait for url mapping data access.

use crate::domain::entities::{LookupKey, NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the long/short URL collection.
///
/// The store does not enforce uniqueness on either column. Callers check with
/// [`UrlMappingRepository::find_one`] before calling
/// [`UrlMappingRepository::insert`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlMappingRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryUrlMappingRepository`] - Process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlMappingRepository: Send + Sync {
    /// Returns every mapping, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_all(&self) -> Result<Vec<UrlMapping>, AppError>;

    /// Returns the first mapping matching `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_one(&self, key: &LookupKey) -> Result<Option<UrlMapping>, AppError>;

    /// Appends a new mapping and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError>;

    /// Performs a cheap round-trip to the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable.
    async fn health_check(&self) -> Result<(), AppError>;
}
