//! Short code candidate generation.
//!
//! A candidate is 128 bits from the OS CSPRNG, encoded as standard base64,
//! made URL-safe by swapping `/` for `_` and `+` for `-`, and cut to
//! [`SHORT_CODE_LENGTH`] characters (about 42 bits of entropy).

use crate::error::AppError;
use base64::Engine as _;

/// Length of every generated short code.
pub const SHORT_CODE_LENGTH: usize = 7;

/// Random bytes drawn per candidate.
const RANDOM_BYTES: usize = 16;

/// Generates one short code candidate.
///
/// The candidate is not checked against the store; see
/// [`crate::application::services::CodeGenerator`] for the retry loop.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code()?;
/// assert_eq!(code.len(), 7);
/// ```
pub fn generate_code() -> Result<String, AppError> {
    let mut buffer = [0u8; RANDOM_BYTES];

    getrandom::fill(&mut buffer)
        .map_err(|e| AppError::internal(format!("Failed to generate random bytes: {e}")))?;

    Ok(encode_code(&buffer))
}

/// Turns random bytes into a short code.
fn encode_code(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD
        .encode(bytes)
        .replace('/', "_")
        .replace('+', "-")
        .chars()
        .take(SHORT_CODE_LENGTH)
        .collect()
}
