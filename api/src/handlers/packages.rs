//! Package handlers
//!
//! `GET /api/get_packages` is the feed the client renders from.
//! `POST /api/packages` records a detection.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::domain::entities::Package;
use crate::error::AppError;
use crate::AppState;

/// Request body for POST /api/packages
#[derive(Debug, Deserialize)]
pub struct CreatePackageRequest {
    pub ip: String,
    pub attack_type: String,
}

/// GET /api/get_packages
///
/// Every recorded package, oldest first. `[]` when nothing was detected.
pub async fn get_packages(State(state): State<AppState>) -> Result<Json<Vec<Package>>, AppError> {
    let packages = state.package_service.get_packages().await?;
    tracing::debug!(count = packages.len(), "Serving packages");
    Ok(Json(packages))
}

/// POST /api/packages
pub async fn create_package(
    State(state): State<AppState>,
    body: Result<Json<CreatePackageRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Package>), AppError> {
    let Json(body) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let package = state
        .package_service
        .create_package(&body.ip, &body.attack_type)
        .await?;

    Ok((StatusCode::CREATED, Json(package)))
}
