//! Axum route handlers for the Diff API.

use axum::{extract::rejection::JsonRejection, Json};
use serde::{Deserialize, Serialize};

use crate::diff::renderer::{render_html, DiffToken};
use crate::diff::session::{ClientSession, RenderedResult};
use crate::errors::AppError;
use crate::models::optimization::OptimizationResult;

#[derive(Debug, Deserialize)]
pub struct DiffRequest {
    /// The résumé as the user last typed it. Empty means nothing was recorded.
    #[serde(default)]
    pub original: String,
    #[serde(default)]
    pub updated: String,
}

#[derive(Debug, Serialize)]
pub struct DiffResponse {
    pub html: String,
    pub tokens: Vec<DiffToken>,
}

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    #[serde(default)]
    pub session: ClientSession,
    pub result: OptimizationResult,
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub rendered: RenderedResult,
    /// The session after the free use is spent. The page stores `freeUsed` from it.
    pub session: ClientSession,
}

fn read_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}

/// POST /api/diff
///
/// Highlights the words of `updated` that fall out of step with `original`.
pub async fn handle_diff(
    payload: Result<Json<DiffRequest>, JsonRejection>,
) -> Result<Json<DiffResponse>, AppError> {
    let request = read_body(payload)?;

    let mut session = ClientSession::default();
    session.record_original(request.original);

    let tokens = session.diff_tokens(&request.updated);
    let html = render_html(&tokens);

    Ok(Json(DiffResponse { html, tokens }))
}

/// POST /api/render
///
/// Turns an optimization result into the text the page shows, diffed against
/// the session's recorded original, and returns the session with the free use spent.
pub async fn handle_render(
    payload: Result<Json<RenderRequest>, JsonRejection>,
) -> Result<Json<RenderResponse>, AppError> {
    let RenderRequest {
        mut session,
        result,
    } = read_body(payload)?;

    let rendered = session.apply_result(&result);

    Ok(Json(RenderResponse { rendered, session }))
}
