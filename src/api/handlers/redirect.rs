//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{short_url}`
///
/// # Response
///
/// 302 Found with the long URL in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 Internal Server Error on store failures, or if the stored long
/// URL cannot be sent as a `Location` header.
pub async fn redirect_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    info!(short_url = %short_url, "Request received for shortened url");

    let mapping = state
        .url_service
        .resolve(&short_url)
        .await
        .inspect_err(|e| error!(short_url = %short_url, error = %e, "Failed to resolve short url"))?;

    let location = HeaderValue::try_from(mapping.long_url).map_err(|e| {
        error!(short_url = %short_url, error = %e, "Stored long url is not a valid header value");
        AppError::internal(format!("Invalid redirect location: {e}"))
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
