//! Handler for short URL creation.

use axum::{Json, body::Bytes, extract::State};
use tracing::{error, info};

use crate::api::dto::create::long_url_from_body;
use crate::domain::entities::LongUrlShortUrl;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for the long URL in the request body.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// The long URL, as raw text or as a JSON string:
///
/// ```text
/// "https://www.bbc.co.uk/news"
/// ```
///
/// # Response
///
/// ```json
/// { "longUrl": "https://www.bbc.co.uk/news", "shortUrl": "aZ1hjdg" }
/// ```
///
/// Submitting a long URL that is already stored returns the existing mapping.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not UTF-8 or the URL is not absolute.
/// Returns 503 Service Unavailable if no free short code was found.
/// Returns 500 Internal Server Error on store failures.
pub async fn create_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LongUrlShortUrl>, AppError> {
    let long_url = long_url_from_body(&body)
        .inspect_err(|e| error!(error = %e, "Failed to read create request body"))?;

    info!(long_url = %long_url, "Request received for creating short url");

    let mapping = state
        .url_service
        .create(&long_url)
        .await
        .inspect_err(|e| match e {
            AppError::AliasUnavailable { conflicts } => error!(
                long_url = %long_url,
                conflicts = ?conflicts,
                "Failed to create short url"
            ),
            other => error!(long_url = %long_url, error = %other, "Failed to create short url"),
        })?;

    Ok(Json(mapping))
}
