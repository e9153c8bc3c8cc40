pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::portfolio::handlers;
use crate::render::handlers as render;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Portfolio model
        .route("/api/v1/portfolio", get(handlers::handle_get_portfolio))
        .route("/api/v1/portfolio/form", post(handlers::handle_submit_form))
        .route("/api/v1/portfolio/basics", put(handlers::handle_update_basics))
        .route("/api/v1/portfolio/social", put(handlers::handle_update_social))
        .route("/api/v1/portfolio/skills", post(handlers::handle_add_skill))
        .route(
            "/api/v1/portfolio/skills/:skill",
            delete(handlers::handle_remove_skill),
        )
        .route("/api/v1/portfolio/projects", post(handlers::handle_add_project))
        .route(
            "/api/v1/portfolio/projects/:id",
            delete(handlers::handle_remove_project),
        )
        .route(
            "/api/v1/portfolio/experience",
            post(handlers::handle_add_experience),
        )
        .route(
            "/api/v1/portfolio/experience/:id",
            delete(handlers::handle_remove_experience),
        )
        .route(
            "/api/v1/portfolio/education",
            post(handlers::handle_add_education),
        )
        .route(
            "/api/v1/portfolio/education/:id",
            delete(handlers::handle_remove_education),
        )
        .route("/api/v1/portfolio/theme", put(handlers::handle_update_theme))
        .route(
            "/api/v1/portfolio/theme/reset",
            post(handlers::handle_reset_theme),
        )
        .route(
            "/api/v1/portfolio/readiness",
            get(handlers::handle_readiness),
        )
        .route("/api/v1/portfolio/save", post(handlers::handle_save))
        .route("/api/v1/portfolio/load", post(handlers::handle_load))
        // Rendering
        .route("/api/v1/render/preview", get(render::handle_preview))
        .route("/api/v1/render/export", get(render::handle_export))
        .route("/api/v1/catalog/skills", get(render::handle_skill_catalog))
        .with_state(state)
}
