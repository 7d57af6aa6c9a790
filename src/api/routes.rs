use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::services::ServeDir;

use crate::api::{assist_handlers, handlers, upload_handlers};
use crate::api::handlers::AppState;
use crate::api::upload_handlers::MAX_UPLOAD_BYTES;
use crate::store::traits::Store;

pub fn create_router<S: Store + 'static>() -> Router<AppState<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Current user
        .route("/api/user", get(handlers::get_current_user::<S>))
        .route("/api/user/profile", put(handlers::update_user_profile::<S>))
        // Institutions (seeded, read-only)
        .route("/api/institutions", get(handlers::list_institutions::<S>))
        // Courses
        .route(
            "/api/courses",
            get(handlers::list_courses::<S>).post(handlers::create_course::<S>),
        )
        .route(
            "/api/courses/prerequisite-chain",
            get(handlers::get_prerequisite_chain::<S>),
        )
        .route(
            "/api/courses/bulk-parse",
            post(handlers::parse_courses_bulk::<S>),
        )
        .route("/api/courses/bulk", post(handlers::import_courses_bulk::<S>))
        .route(
            "/api/courses/:id",
            put(handlers::update_course::<S>).delete(handlers::delete_course::<S>),
        )
        // Education plans and their semesters
        .route(
            "/api/education-plans",
            get(handlers::list_education_plans::<S>).post(handlers::create_education_plan::<S>),
        )
        .route(
            "/api/education-plans/:id",
            put(handlers::update_education_plan::<S>)
                .delete(handlers::delete_education_plan::<S>),
        )
        .route(
            "/api/education-plans/:plan_id/semesters",
            get(handlers::list_plan_semesters::<S>),
        )
        .route(
            "/api/planned-semesters",
            post(handlers::create_planned_semester::<S>),
        )
        .route(
            "/api/planned-semesters/:id",
            put(handlers::update_planned_semester::<S>)
                .delete(handlers::delete_planned_semester::<S>),
        )
        // Documents
        .route("/api/upload", post(upload_handlers::upload_document::<S>))
        .route("/api/documents", get(handlers::list_documents::<S>))
        .route("/api/documents/:id", delete(handlers::delete_document::<S>))
        // Articulation agreements
        .route(
            "/api/articulation-agreements",
            get(handlers::list_articulation_agreements::<S>)
                .post(handlers::create_articulation_agreement::<S>),
        )
        // Assist.org proxy
        .route(
            "/api/assist/institutions/:id/agreements",
            get(assist_handlers::get_institution_agreements::<S>),
        )
        .route(
            "/api/assist/agreements",
            get(assist_handlers::get_agreements::<S>),
        )
        // Deadlines
        .route(
            "/api/deadlines",
            get(handlers::list_deadlines::<S>).post(handlers::create_deadline::<S>),
        )
        .route("/api/deadlines/:id", put(handlers::update_deadline::<S>))
        // Activity feed
        .route("/api/activity", get(handlers::list_activity::<S>))
        // Target schools
        .route(
            "/api/target-schools",
            get(handlers::list_target_schools::<S>).post(handlers::create_target_school::<S>),
        )
        .route(
            "/api/target-schools/:id",
            delete(handlers::delete_target_school::<S>),
        )
        // Dashboard
        .route(
            "/api/dashboard/stats",
            get(handlers::get_dashboard_stats::<S>),
        )
        // Room above the 10 MB file limit for multipart framing overhead.
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 1024 * 1024))
        // Static frontend assets
        .fallback_service(ServeDir::new("public"))
}
