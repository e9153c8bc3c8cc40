use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Form, Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::portfolio::form::{apply_form, FormFields};
use crate::portfolio::models::{Basics, Education, Experience, Portfolio, Project, SocialLinks};
use crate::portfolio::skills::Chip;
use crate::portfolio::storage::{restore, RestoreScope};
use crate::portfolio::validation::{readiness_report, ReadinessReport};
use crate::render::theme::Theme;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddSkillRequest {
    pub skill: String,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub changed: bool,
    pub chips: Vec<Chip>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: Uuid,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoadQuery {
    #[serde(default)]
    pub scope: RestoreScope,
}

#[derive(Debug, Serialize)]
pub struct LoadResponse {
    pub restored: bool,
    pub portfolio: Portfolio,
}

/// GET /api/v1/portfolio
pub async fn handle_get_portfolio(State(state): State<AppState>) -> Json<Portfolio> {
    Json(state.portfolio.read().await.clone())
}

/// POST /api/v1/portfolio/form
///
/// Accepts the builder form as `application/x-www-form-urlencoded`.
pub async fn handle_submit_form(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Json<Portfolio> {
    let fields = FormFields::from_pairs(pairs);
    let mut portfolio = state.portfolio.write().await;
    apply_form(&mut portfolio, &fields);
    Json(portfolio.clone())
}

/// PUT /api/v1/portfolio/basics
pub async fn handle_update_basics(
    State(state): State<AppState>,
    Json(basics): Json<Basics>,
) -> Json<Basics> {
    let mut portfolio = state.portfolio.write().await;
    portfolio.update_basics(basics);
    Json(portfolio.basics.clone())
}

/// PUT /api/v1/portfolio/social
pub async fn handle_update_social(
    State(state): State<AppState>,
    Json(social): Json<SocialLinks>,
) -> Json<SocialLinks> {
    let mut portfolio = state.portfolio.write().await;
    portfolio.set_social(social);
    Json(portfolio.social.clone())
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/portfolio/skills
///
/// A duplicate is not an error; `changed` reports whether the set grew.
pub async fn handle_add_skill(
    State(state): State<AppState>,
    Json(req): Json<AddSkillRequest>,
) -> Result<Json<SkillsResponse>, AppError> {
    if req.skill.trim().is_empty() {
        return Err(AppError::Validation("skill must not be empty".to_string()));
    }

    let mut portfolio = state.portfolio.write().await;
    let changed = portfolio.skills.add(&req.skill);
    if changed {
        info!("Added skill {}", req.skill.trim());
    }
    Ok(Json(SkillsResponse {
        changed,
        chips: portfolio.skills.chips(),
    }))
}

/// DELETE /api/v1/portfolio/skills/:skill
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    Path(skill): Path<String>,
) -> Json<SkillsResponse> {
    let mut portfolio = state.portfolio.write().await;
    let changed = portfolio.skills.remove(&skill);
    Json(SkillsResponse {
        changed,
        chips: portfolio.skills.chips(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Repeatable entries
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/portfolio/projects
pub async fn handle_add_project(
    State(state): State<AppState>,
    Json(project): Json<Project>,
) -> (StatusCode, Json<CreatedResponse>) {
    let id = state.portfolio.write().await.add_project(project);
    (StatusCode::CREATED, Json(CreatedResponse { id }))
}

/// DELETE /api/v1/portfolio/projects/:id
pub async fn handle_remove_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.portfolio.write().await.remove_project(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Project {id} not found")))
    }
}

/// POST /api/v1/portfolio/experience
pub async fn handle_add_experience(
    State(state): State<AppState>,
    Json(experience): Json<Experience>,
) -> (StatusCode, Json<CreatedResponse>) {
    let id = state.portfolio.write().await.add_experience(experience);
    (StatusCode::CREATED, Json(CreatedResponse { id }))
}

/// DELETE /api/v1/portfolio/experience/:id
pub async fn handle_remove_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.portfolio.write().await.remove_experience(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Experience {id} not found")))
    }
}

/// POST /api/v1/portfolio/education
pub async fn handle_add_education(
    State(state): State<AppState>,
    Json(education): Json<Education>,
) -> (StatusCode, Json<CreatedResponse>) {
    let id = state.portfolio.write().await.add_education(education);
    (StatusCode::CREATED, Json(CreatedResponse { id }))
}

/// DELETE /api/v1/portfolio/education/:id
pub async fn handle_remove_education(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.portfolio.write().await.remove_education(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Education {id} not found")))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Theme, readiness, persistence
// ────────────────────────────────────────────────────────────────────────────

/// PUT /api/v1/portfolio/theme
pub async fn handle_update_theme(
    State(state): State<AppState>,
    Json(theme): Json<Theme>,
) -> Json<Theme> {
    let mut portfolio = state.portfolio.write().await;
    portfolio.theme = theme;
    Json(portfolio.theme.clone())
}

/// POST /api/v1/portfolio/theme/reset
pub async fn handle_reset_theme(State(state): State<AppState>) -> Json<Theme> {
    let mut portfolio = state.portfolio.write().await;
    portfolio.theme.reset();
    info!("Theme reset to default settings");
    Json(portfolio.theme.clone())
}

/// GET /api/v1/portfolio/readiness
pub async fn handle_readiness(State(state): State<AppState>) -> Json<ReadinessReport> {
    let portfolio = state.portfolio.read().await;
    Json(readiness_report(&portfolio))
}

/// POST /api/v1/portfolio/save
///
/// Persists the model as it stands. Form edits must be POSTed to `/api/v1/portfolio/form`
/// first; this endpoint does not collect them.
pub async fn handle_save(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let snapshot = state.portfolio.read().await.clone();
    state.store.save(&snapshot).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/portfolio/load
///
/// Nothing saved yet is not an error: the current model is returned with `restored: false`.
/// A malformed blob yields 422 and leaves the current model untouched.
pub async fn handle_load(
    State(state): State<AppState>,
    Query(query): Query<LoadQuery>,
) -> Result<Json<LoadResponse>, AppError> {
    let saved = state.store.load().await?;
    let mut portfolio = state.portfolio.write().await;

    let restored = match saved {
        Some(saved) => {
            restore(&mut portfolio, saved, query.scope);
            info!("Restored saved portfolio ({:?})", query.scope);
            true
        }
        None => {
            warn!("No saved portfolio to restore");
            false
        }
    };

    Ok(Json(LoadResponse {
        restored,
        portfolio: portfolio.clone(),
    }))
}
