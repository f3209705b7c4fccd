use axum::{extract::State, response::Html};

use crate::error::ApiError;
use crate::server::AppState;

/// Serve the search page
pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let page = state.pages.render_index()?;
    Ok(Html(page))
}
