//! Axum route handler for the Optimization API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::debug;

use crate::errors::AppError;
use crate::models::optimization::{OptimizationRequest, OptimizationResult};
use crate::optimize::service::optimize;
use crate::state::AppState;

/// POST /api/optimize
///
/// Rewrites the résumé and drafts a cover letter. A body that is missing or
/// not JSON is treated as an empty request, so it fails résumé validation.
pub async fn handle_optimize(
    State(state): State<AppState>,
    payload: Result<Json<OptimizationRequest>, JsonRejection>,
) -> Result<Json<OptimizationResult>, AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!("Unreadable optimize body: {rejection}");
            OptimizationRequest::default()
        }
    };

    let result = optimize(state.generator.as_ref(), request).await?;

    Ok(Json(result))
}
