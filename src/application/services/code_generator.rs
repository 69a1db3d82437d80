//! Unique short code generation with bounded collision retry.

use std::sync::Arc;

use thiserror::Error;
use tracing::warn;

use crate::domain::entities::LookupKey;
use crate::domain::repositories::UrlMappingRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Attempts made before giving up on finding a free code.
pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

/// Failure modes of [`CodeGenerator::generate`].
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Every candidate was already taken.
    ///
    /// `conflicts` has one entry per rejected candidate.
    #[error("No free short code after {attempts} attempts: {}", .conflicts.join("; "))]
    AllAttemptsExhausted {
        attempts: usize,
        conflicts: Vec<String>,
    },

    /// The existence check itself failed.
    #[error(transparent)]
    Store(#[from] AppError),
}

impl From<GenerateError> for AppError {
    fn from(e: GenerateError) -> Self {
        match e {
            GenerateError::AllAttemptsExhausted { conflicts, .. } => {
                AppError::AliasUnavailable { conflicts }
            }
            GenerateError::Store(e) => e,
        }
    }
}

/// Produces short codes that are free at the time of the check.
///
/// The check and the later insert are separate store calls, so two concurrent
/// generators can still pick the same code.
pub struct CodeGenerator {
    repository: Arc<dyn UrlMappingRepository>,
    max_attempts: usize,
}

impl CodeGenerator {
    /// Creates a generator with [`DEFAULT_MAX_ATTEMPTS`].
    pub fn new(repository: Arc<dyn UrlMappingRepository>) -> Self {
        Self::with_max_attempts(repository, DEFAULT_MAX_ATTEMPTS)
    }

    pub fn with_max_attempts(repository: Arc<dyn UrlMappingRepository>, max_attempts: usize) -> Self {
        Self {
            repository,
            max_attempts,
        }
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Returns the first candidate no stored mapping uses.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::AllAttemptsExhausted`] when all `max_attempts`
    /// candidates are taken, and [`GenerateError::Store`] when the store or
    /// the random source fails.
    pub async fn generate(&self) -> Result<String, GenerateError> {
        let mut conflicts = Vec::new();

        for attempt in 1..=self.max_attempts {
            let candidate = generate_code()?;

            let taken = self
                .repository
                .find_one(&LookupKey::short_url(candidate.clone()))
                .await?
                .is_some();

            if !taken {
                return Ok(candidate);
            }

            warn!(
                attempt,
                max_attempts = self.max_attempts,
                candidate = %candidate,
                "Short code collision"
            );
            conflicts.push(format!("{candidate} already exists."));
        }

        Err(GenerateError::AllAttemptsExhausted {
            attempts: self.max_attempts,
            conflicts,
        })
    }
}
