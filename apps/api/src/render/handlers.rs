//! Axum route handlers for rendering and downloading the portfolio.

use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use chrono::{Datelike, Utc};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::render::catalog::{SkillDisplay, SKILL_CATALOG};
use crate::render::{render_portfolio, RenderOptions, Template};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RenderQuery {
    #[serde(default)]
    pub template: Template,
}

async fn render_current(state: &AppState, template: Template) -> Result<String, AppError> {
    // Render from a snapshot so the lock is not held across templating.
    let snapshot = state.portfolio.read().await.clone();
    let options = RenderOptions {
        template,
        year: Utc::now().year(),
        empty_skills_message: state.config.empty_skills_message.clone(),
    };
    render_portfolio(&snapshot, &options)
}

/// GET /api/v1/render/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Query(query): Query<RenderQuery>,
) -> Result<Html<String>, AppError> {
    Ok(Html(render_current(&state, query.template).await?))
}

/// GET /api/v1/render/export
///
/// Same document as the preview, served as a file download.
pub async fn handle_export(
    State(state): State<AppState>,
    Query(query): Query<RenderQuery>,
) -> Result<impl IntoResponse, AppError> {
    let html = render_current(&state, query.template).await?;
    let filename = query.template.download_filename();
    info!("Exporting portfolio as {filename} ({} bytes)", html.len());

    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        html,
    ))
}

/// GET /api/v1/catalog/skills
pub async fn handle_skill_catalog() -> Json<&'static [SkillDisplay]> {
    Json(SKILL_CATALOG)
}
