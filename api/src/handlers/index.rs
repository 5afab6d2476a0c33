//! Index page handler

use axum::{extract::State, response::Html};

use crate::error::AppError;
use crate::feed::render_index;
use crate::AppState;

/// GET /
///
/// HTML page listing every recorded package.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let packages = state.package_service.get_packages().await?;
    Ok(Html(render_index(&packages)))
}
