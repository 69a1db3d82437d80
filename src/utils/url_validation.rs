//! Long URL validation.

use crate::error::AppError;
use url::Url;

/// Checks that `input` is an absolute URI with both a scheme and an authority.
///
/// The URL is only inspected, never rewritten: callers store the original
/// string so that repeated submissions match exactly. The parser drops tabs
/// and newlines on its own, so control characters are rejected up front;
/// the stored string must be usable as a `Location` header as is.
///
/// # Errors
///
/// Returns [`AppError::InvalidUrl`] if `input` contains ASCII control
/// characters, if parsing fails, or if no host is present.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_long_url("https://www.bbc.co.uk/news").is_ok());
/// assert!(validate_long_url("hdshjdshjdfhsfg").is_err());
/// ```
pub fn validate_long_url(input: &str) -> Result<(), AppError> {
    if input.chars().any(|c| c.is_ascii_control()) {
        tracing::debug!(input = ?input, "Rejected long url with control characters");
        return Err(AppError::InvalidUrl);
    }

    let parsed = Url::parse(input).map_err(|e| {
        tracing::debug!(input = %input, error = %e, "Rejected long url");
        AppError::InvalidUrl
    })?;

    if !parsed.has_host() {
        tracing::debug!(input = %input, "Rejected long url without authority");
        return Err(AppError::InvalidUrl);
    }

    Ok(())
}
