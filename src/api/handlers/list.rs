//! Handler for listing every mapping.

use axum::{Json, extract::State};
use tracing::{error, info};

use crate::domain::entities::LongUrlShortUrl;
use crate::error::AppError;
use crate::state::AppState;

/// Returns all stored mappings.
///
/// # Endpoint
///
/// `GET /`
///
/// # Response
///
/// ```json
/// [
///   { "longUrl": "https://www.bbc.co.uk/news", "shortUrl": "aZ1hjdg" }
/// ]
/// ```
///
/// # Errors
///
/// Returns 500 Internal Server Error on store failures.
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LongUrlShortUrl>>, AppError> {
    info!("Request received for retrieving all urls");

    let mappings = state
        .url_service
        .list_all()
        .await
        .inspect_err(|e| error!(error = %e, "Failed to retrieve all urls"))?;

    Ok(Json(mappings))
}
