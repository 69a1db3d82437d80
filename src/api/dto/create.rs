//! Request body handling for the create endpoint.
//!
//! The long URL arrives as the whole request body, either as raw text or as a
//! JSON string literal (`"https://example.com"`).

use crate::error::AppError;

/// Extracts the long URL from a create request body.
///
/// A body that parses as a JSON string is unwrapped; anything else is used as
/// is after trimming surrounding whitespace.
///
/// # Errors
///
/// Returns [`AppError::InvalidUrl`] if the body is not valid UTF-8.
pub fn long_url_from_body(body: &[u8]) -> Result<String, AppError> {
    let body = std::str::from_utf8(body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected non UTF-8 request body");
        AppError::InvalidUrl
    })?;

    Ok(long_url_from_text(body))
}

fn long_url_from_text(body: &str) -> String {
    let trimmed = body.trim();

    if trimmed.starts_with('"')
        && let Ok(unquoted) = serde_json::from_str::<String>(trimmed)
    {
        return unquoted;
    }

    trimmed.to_string()
}
