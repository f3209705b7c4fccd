use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
    Form,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::Palette;
use crate::server::AppState;

/// Form body for palette queries
#[derive(Debug, Deserialize, ToSchema)]
pub struct PaletteQuery {
    /// Search keyword, e.g. "ocean"
    #[serde(default)]
    pub keyword: String,
}

/// Successful palette lookup
#[derive(Debug, Serialize, ToSchema)]
pub struct PalettesResponse {
    /// Normalized keyword the palettes were found for
    pub keyword: String,
    /// Up to 5 unique palettes, each an ordered list of color values
    #[schema(value_type = Vec<Vec<String>>)]
    pub palettes: Vec<Palette>,
}

/// User-facing miss: empty keyword or nothing found
#[derive(Debug, Serialize, ToSchema)]
pub struct PalettesError {
    /// Human-readable explanation
    pub error: String,
}

/// Search the web for color palettes matching a keyword
///
/// Crawls the configured palette sites plus search results and returns up
/// to 5 unique palettes. An empty keyword or a fruitless crawl is answered
/// with an `error` body, not an HTTP failure.
#[utoipa::path(
    post,
    path = "/get_palettes",
    request_body(
        content = PaletteQuery,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Palettes found, or a user-facing miss", body = PalettesResponse),
    ),
    tag = "Palettes"
)]
pub async fn handle_palettes(
    State(state): State<AppState>,
    Form(query): Form<PaletteQuery>,
) -> Result<Response, ApiError> {
    let keyword = query.keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return Ok(Json(PalettesError {
            error: "Please enter a keyword".to_string(),
        })
        .into_response());
    }

    tracing::info!(keyword = %keyword, "Palette query received");

    let palettes = state.crawler.crawl(&keyword).await;

    if palettes.is_empty() {
        return Ok(Json(PalettesError {
            error: format!(
                "No color palettes found for \"{keyword}\". Try another word like \"happy\", \"ocean\" or \"vintage\"."
            ),
        })
        .into_response());
    }

    tracing::info!(keyword = %keyword, palettes = palettes.len(), "Palette query answered");

    Ok(Json(PalettesResponse { keyword, palettes }).into_response())
}
