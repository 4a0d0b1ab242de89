pub mod health;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::editors::handlers;
use crate::export::handlers::handle_export;
use crate::models::resume::{EducationEntry, ExperienceEntry};
use crate::preview::handlers::{handle_preview_fragment, handle_preview_page};
use crate::state::{handle_status, AppState};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resume", get(handlers::handle_get_resume))
        .route("/api/v1/status", get(handle_status))
        // Personal info
        .route(
            "/api/v1/resume/personal-info",
            put(handlers::handle_replace_personal_info).patch(handlers::handle_edit_personal_info),
        )
        .route(
            "/api/v1/resume/personal-info/summary",
            post(handlers::handle_generate_summary),
        )
        // Experience
        .route(
            "/api/v1/resume/experience",
            put(handlers::handle_replace_entries::<ExperienceEntry>)
                .post(handlers::handle_add_entry::<ExperienceEntry>),
        )
        .route(
            "/api/v1/resume/experience/:id",
            patch(handlers::handle_edit_entry::<ExperienceEntry>)
                .delete(handlers::handle_remove_entry::<ExperienceEntry>),
        )
        .route(
            "/api/v1/resume/experience/:id/current",
            put(handlers::handle_set_current::<ExperienceEntry>),
        )
        .route(
            "/api/v1/resume/experience/:id/description",
            post(handlers::handle_generate_description),
        )
        // Education
        .route(
            "/api/v1/resume/education",
            put(handlers::handle_replace_entries::<EducationEntry>)
                .post(handlers::handle_add_entry::<EducationEntry>),
        )
        .route(
            "/api/v1/resume/education/:id",
            patch(handlers::handle_edit_entry::<EducationEntry>)
                .delete(handlers::handle_remove_entry::<EducationEntry>),
        )
        .route(
            "/api/v1/resume/education/:id/current",
            put(handlers::handle_set_current::<EducationEntry>),
        )
        // Skills
        .route(
            "/api/v1/resume/skills",
            put(handlers::handle_replace_skills).post(handlers::handle_add_skill),
        )
        .route(
            "/api/v1/resume/skills/:index",
            delete(handlers::handle_remove_skill),
        )
        .route(
            "/api/v1/resume/skills/generate",
            post(handlers::handle_generate_skills),
        )
        // Preview and export
        .route("/api/v1/preview", get(handle_preview_fragment))
        .route("/preview", get(handle_preview_page))
        .route("/api/v1/export", post(handle_export))
        .with_state(state)
}
