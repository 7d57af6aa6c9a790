use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Json as RequestJson,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

use crate::assist::AssistClient;
use crate::logic::{
    build_prerequisite_chain, compute_dashboard_stats, parse_bulk_courses, CourseDraft,
    DashboardStats, PrerequisiteChain,
};
use crate::model::{
    ActivityLog, ArticulationAgreement, Course, CourseUpdate, Deadline, DeadlineUpdate, Document,
    EducationPlan, EducationPlanUpdate, Id, Institution, NewActivityLog, NewArticulationAgreement,
    NewCourse, NewDeadline, NewEducationPlan, NewPlannedSemester, NewTargetSchool, NewUser,
    PlannedSemester, PlannedSemesterUpdate, TargetSchool, User, UserContext, UserProfile,
    UserProfileUpdate,
};
use crate::store::traits::Store;

/// Shared request state: the store plus the Assist.org client and the
/// directory uploaded files land in.
pub struct AppState<S> {
    pub store: Arc<S>,
    pub assist: AssistClient,
    pub uploads_dir: PathBuf,
}

impl<S> AppState<S> {
    pub fn new(store: Arc<S>, assist: AssistClient, uploads_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            assist,
            uploads_dir: uploads_dir.into(),
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            assist: self.assist.clone(),
            uploads_dir: self.uploads_dir.clone(),
        }
    }
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

pub(crate) fn internal_error(e: impl std::fmt::Display) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(&e.to_string())),
    )
}

pub(crate) fn not_found(message: &str) -> ApiError {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new(message)))
}

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

// Best-effort audit write: a failed log entry never fails the mutation it
// describes.
async fn log_activity<S: Store>(state: &AppState<S>, user: &UserContext, entry: NewActivityLog) {
    if let Err(e) = state.store.create_activity(&user.user_id, entry).await {
        log::warn!("failed to record activity entry: {}", e);
    }
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

pub async fn get_current_user<S: Store>(
    State(state): State<AppState<S>>,
    user: UserContext,
) -> Result<Json<User>, ApiError> {
    match state.store.get_user(&user.user_id).await {
        Ok(Some(existing)) => Ok(Json(existing)),
        Ok(None) => {
            // First read bootstraps the demo profile.
            let new_user = NewUser {
                username: "demo".to_string(),
                password: "demo".to_string(),
                first_name: Some("John".to_string()),
                last_name: Some("Doe".to_string()),
                email: Some("john.doe@example.com".to_string()),
                current_institution: Some("De Anza College".to_string()),
                target_major: Some("Computer Science Transfer".to_string()),
            };
            match state
                .store
                .create_user_with_id(user.user_id.clone(), new_user)
                .await
            {
                Ok(created) => Ok(Json(created)),
                Err(e) => Err(internal_error(e)),
            }
        }
        Err(e) => Err(internal_error(e)),
    }
}

pub async fn update_user_profile<S: Store>(
    State(state): State<AppState<S>>,
    user: UserContext,
    RequestJson(updates): RequestJson<UserProfileUpdate>,
) -> Result<Json<UserProfile>, ApiError> {
    let updated = match state.store.update_user(&user.user_id, updates.clone()).await {
        Ok(Some(updated)) => updated,
        Ok(None) => return Err(not_found("User not found")),
        Err(e) => return Err(internal_error(e)),
    };

    let description = format!(
        "Updated profile: {} {}",
        updates.first_name.as_deref().unwrap_or(""),
        updates.last_name.as_deref().unwrap_or("")
    )
    .trim()
    .to_string();
    log_activity(
        &state,
        &user,
        NewActivityLog::new("UPDATE_PROFILE", description, "USER", &user.user_id),
    )
    .await;

    Ok(Json(UserProfile::from(&updated)))
}

// ---------------------------------------------------------------------------
// Institutions (seeded, read-only)
// ---------------------------------------------------------------------------

pub async fn list_institutions<S: Store>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Institution>>, ApiError> {
    match state.store.get_institutions().await {
        Ok(institutions) => Ok(Json(institutions)),
        Err(e) => Err(internal_error(e)),
    }
}

// ---------------------------------------------------------------------------
// Courses
// ---------------------------------------------------------------------------

pub async fn list_courses<S: Store>(
    State(state): State<AppState<S>>,
    user: UserContext,
) -> Result<Json<Vec<Course>>, ApiError> {
    match state.store.get_courses_by_user(&user.user_id).await {
        Ok(courses) => Ok(Json(courses)),
        Err(e) => Err(internal_error(e)),
    }
}

pub async fn create_course<S: Store>(
    State(state): State<AppState<S>>,
    user: UserContext,
    RequestJson(new_course): RequestJson<NewCourse>,
) -> Result<Json<Course>, ApiError> {
    let course = match state.store.create_course(&user.user_id, new_course).await {
        Ok(course) => course,
        Err(e) => return Err(internal_error(e)),
    };

    log_activity(
        &state,
        &user,
        NewActivityLog::new(
            "CREATE_COURSE",
            format!("Added course {} - {}", course.course_code, course.title),
            "COURSE",
            &course.id,
        ),
    )
    .await;

    Ok(Json(course))
}

pub async fn update_course<S: Store>(
    State(state): State<AppState<S>>,
    user: UserContext,
    Path(id): Path<Id>,
    RequestJson(updates): RequestJson<CourseUpdate>,
) -> Result<Json<Course>, ApiError> {
    let course = match state.store.update_course(&id, updates).await {
        Ok(Some(course)) => course,
        Ok(None) => return Err(not_found("Course not found")),
        Err(e) => return Err(internal_error(e)),
    };

    log_activity(
        &state,
        &user,
        NewActivityLog::new(
            "UPDATE_COURSE",
            format!("Updated course {}", course.course_code),
            "COURSE",
            &course.id,
        ),
    )
    .await;

    Ok(Json(course))
}

pub async fn delete_course<S: Store>(
    State(state): State<AppState<S>>,
    user: UserContext,
    Path(id): Path<Id>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match state.store.delete_course(&id).await {
        Ok(true) => {}
        Ok(false) => return Err(not_found("Course not found")),
        Err(e) => return Err(internal_error(e)),
    }

    log_activity(
        &state,
        &user,
        NewActivityLog::new("DELETE_COURSE", "Deleted course".to_string(), "COURSE", &id),
    )
    .await;

    Ok(Json(serde_json::json!({ "success": true })))
}

pub async fn get_prerequisite_chain<S: Store>(
    State(state): State<AppState<S>>,
    user: UserContext,
) -> Result<Json<PrerequisiteChain>, ApiError> {
    match state.store.get_courses_by_user(&user.user_id).await {
        Ok(courses) => Ok(Json(build_prerequisite_chain(&courses))),
        Err(e) => Err(internal_error(e)),
    }
}

// ---------------------------------------------------------------------------
// Bulk course import
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct BulkParseRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct BulkParseResponse {
    pub drafts: Vec<CourseDraft>,
    pub total: usize,
}

pub async fn parse_courses_bulk<S: Store>(
    State(_state): State<AppState<S>>,
    RequestJson(request): RequestJson<BulkParseRequest>,
) -> Json<BulkParseResponse> {
    let drafts = parse_bulk_courses(&request.text);
    let total = drafts.len();
    Json(BulkParseResponse { drafts, total })
}

#[derive(Debug, Deserialize)]
pub struct BulkImportRequest {
    pub courses: Vec<CourseDraft>,
}

/// Aggregate outcome of a bulk import. Courses created before a failure stay
/// persisted; there is no rollback.
#[derive(Debug, Serialize)]
pub struct BulkImportSummary {
    pub created: usize,
    pub failed: usize,
    pub total: usize,
}

pub async fn import_courses_bulk<S: Store>(
    State(state): State<AppState<S>>,
    user: UserContext,
    RequestJson(request): RequestJson<BulkImportRequest>,
) -> Result<Json<BulkImportSummary>, ApiError> {
    let total = request.courses.len();
    let mut created = 0;

    for draft in request.courses {
        match state
            .store
            .create_course(&user.user_id, draft.into_new_course())
            .await
        {
            Ok(_) => created += 1,
            Err(e) => log::warn!("bulk import: failed to create course: {}", e),
        }
    }

    if created > 0 {
        log_activity(
            &state,
            &user,
            NewActivityLog {
                action: "IMPORT_COURSES".to_string(),
                description: format!("Imported {} courses", created),
                entity_type: Some("COURSE".to_string()),
                entity_id: None,
            },
        )
        .await;
    }

    Ok(Json(BulkImportSummary {
        created,
        failed: total - created,
        total,
    }))
}

// ---------------------------------------------------------------------------
// Education plans
// ---------------------------------------------------------------------------

pub async fn list_education_plans<S: Store>(
    State(state): State<AppState<S>>,
    user: UserContext,
) -> Result<Json<Vec<EducationPlan>>, ApiError> {
    match state.store.get_plans_by_user(&user.user_id).await {
        Ok(plans) => Ok(Json(plans)),
        Err(e) => Err(internal_error(e)),
    }
}

pub async fn create_education_plan<S: Store>(
    State(state): State<AppState<S>>,
    user: UserContext,
    RequestJson(new_plan): RequestJson<NewEducationPlan>,
) -> Result<Json<EducationPlan>, ApiError> {
    let plan = match state.store.create_plan(&user.user_id, new_plan).await {
        Ok(plan) => plan,
        Err(e) => return Err(internal_error(e)),
    };

    log_activity(
        &state,
        &user,
        NewActivityLog::new(
            "CREATE_PLAN",
            format!("Created education plan: {}", plan.name),
            "PLAN",
            &plan.id,
        ),
    )
    .await;

    Ok(Json(plan))
}

pub async fn update_education_plan<S: Store>(
    State(state): State<AppState<S>>,
    user: UserContext,
    Path(id): Path<Id>,
    RequestJson(updates): RequestJson<EducationPlanUpdate>,
) -> Result<Json<EducationPlan>, ApiError> {
    let plan = match state.store.update_plan(&id, updates).await {
        Ok(Some(plan)) => plan,
        Ok(None) => return Err(not_found("Education plan not found")),
        Err(e) => return Err(internal_error(e)),
    };

    log_activity(
        &state,
        &user,
        NewActivityLog::new(
            "UPDATE_PLAN",
            format!("Updated education plan: {}", plan.name),
            "PLAN",
            &plan.id,
        ),
    )
    .await;

    Ok(Json(plan))
}

pub async fn delete_education_plan<S: Store>(
    State(state): State<AppState<S>>,
    user: UserContext,
    Path(id): Path<Id>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match state.store.delete_plan(&id).await {
        Ok(true) => {}
        Ok(false) => return Err(not_found("Education plan not found")),
        Err(e) => return Err(internal_error(e)),
    }

    log_activity(
        &state,
        &user,
        NewActivityLog::new(
            "DELETE_PLAN",
            "Deleted education plan".to_string(),
            "PLAN",
            &id,
        ),
    )
    .await;

    Ok(Json(serde_json::json!({ "success": true })))
}

pub async fn list_plan_semesters<S: Store>(
    State(state): State<AppState<S>>,
    Path(plan_id): Path<Id>,
) -> Result<Json<Vec<PlannedSemester>>, ApiError> {
    match state.store.get_semesters_by_plan(&plan_id).await {
        Ok(semesters) => Ok(Json(semesters)),
        Err(e) => Err(internal_error(e)),
    }
}

// ---------------------------------------------------------------------------
// Planned semesters
// ---------------------------------------------------------------------------

pub async fn create_planned_semester<S: Store>(
    State(state): State<AppState<S>>,
    user: UserContext,
    RequestJson(new_semester): RequestJson<NewPlannedSemester>,
) -> Result<Json<PlannedSemester>, ApiError> {
    let semester = match state.store.create_semester(new_semester).await {
        Ok(semester) => semester,
        Err(e) => return Err(internal_error(e)),
    };

    log_activity(
        &state,
        &user,
        NewActivityLog::new(
            "CREATE_SEMESTER",
            format!("Added planned semester {} {}", semester.term, semester.year),
            "SEMESTER",
            &semester.id,
        ),
    )
    .await;

    Ok(Json(semester))
}

pub async fn update_planned_semester<S: Store>(
    State(state): State<AppState<S>>,
    user: UserContext,
    Path(id): Path<Id>,
    RequestJson(updates): RequestJson<PlannedSemesterUpdate>,
) -> Result<Json<PlannedSemester>, ApiError> {
    let semester = match state.store.update_semester(&id, updates).await {
        Ok(Some(semester)) => semester,
        Ok(None) => return Err(not_found("Planned semester not found")),
        Err(e) => return Err(internal_error(e)),
    };

    log_activity(
        &state,
        &user,
        NewActivityLog::new(
            "UPDATE_SEMESTER",
            format!(
                "Updated planned semester {} {}",
                semester.term, semester.year
            ),
            "SEMESTER",
            &semester.id,
        ),
    )
    .await;

    Ok(Json(semester))
}

pub async fn delete_planned_semester<S: Store>(
    State(state): State<AppState<S>>,
    user: UserContext,
    Path(id): Path<Id>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match state.store.delete_semester(&id).await {
        Ok(true) => {}
        Ok(false) => return Err(not_found("Planned semester not found")),
        Err(e) => return Err(internal_error(e)),
    }

    log_activity(
        &state,
        &user,
        NewActivityLog::new(
            "DELETE_SEMESTER",
            "Removed planned semester".to_string(),
            "SEMESTER",
            &id,
        ),
    )
    .await;

    Ok(Json(serde_json::json!({ "success": true })))
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

pub async fn list_documents<S: Store>(
    State(state): State<AppState<S>>,
    user: UserContext,
) -> Result<Json<Vec<Document>>, ApiError> {
    match state.store.get_documents_by_user(&user.user_id).await {
        Ok(documents) => Ok(Json(documents)),
        Err(e) => Err(internal_error(e)),
    }
}

/// Removes the metadata row only; bytes already written to disk stay behind.
pub async fn delete_document<S: Store>(
    State(state): State<AppState<S>>,
    user: UserContext,
    Path(id): Path<Id>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match state.store.delete_document(&id).await {
        Ok(true) => {}
        Ok(false) => return Err(not_found("Document not found")),
        Err(e) => return Err(internal_error(e)),
    }

    log_activity(
        &state,
        &user,
        NewActivityLog::new(
            "DELETE_DOCUMENT",
            "Deleted document".to_string(),
            "DOCUMENT",
            &id,
        ),
    )
    .await;

    Ok(Json(serde_json::json!({ "success": true })))
}

// ---------------------------------------------------------------------------
// Articulation agreements
// ---------------------------------------------------------------------------

pub async fn list_articulation_agreements<S: Store>(
    State(state): State<AppState<S>>,
    user: UserContext,
) -> Result<Json<Vec<ArticulationAgreement>>, ApiError> {
    match state.store.get_agreements_by_user(&user.user_id).await {
        Ok(agreements) => Ok(Json(agreements)),
        Err(e) => Err(internal_error(e)),
    }
}

pub async fn create_articulation_agreement<S: Store>(
    State(state): State<AppState<S>>,
    user: UserContext,
    RequestJson(new_agreement): RequestJson<NewArticulationAgreement>,
) -> Result<Json<ArticulationAgreement>, ApiError> {
    let agreement = match state
        .store
        .create_agreement(&user.user_id, new_agreement)
        .await
    {
        Ok(agreement) => agreement,
        Err(e) => return Err(internal_error(e)),
    };

    log_activity(
        &state,
        &user,
        NewActivityLog::new(
            "CREATE_AGREEMENT",
            "Added articulation agreement".to_string(),
            "AGREEMENT",
            &agreement.id,
        ),
    )
    .await;

    Ok(Json(agreement))
}

// ---------------------------------------------------------------------------
// Deadlines
// ---------------------------------------------------------------------------

pub async fn list_deadlines<S: Store>(
    State(state): State<AppState<S>>,
    user: UserContext,
) -> Result<Json<Vec<Deadline>>, ApiError> {
    match state.store.get_deadlines_by_user(&user.user_id).await {
        Ok(deadlines) => Ok(Json(deadlines)),
        Err(e) => Err(internal_error(e)),
    }
}

pub async fn create_deadline<S: Store>(
    State(state): State<AppState<S>>,
    user: UserContext,
    RequestJson(new_deadline): RequestJson<NewDeadline>,
) -> Result<Json<Deadline>, ApiError> {
    let deadline = match state.store.create_deadline(&user.user_id, new_deadline).await {
        Ok(deadline) => deadline,
        Err(e) => return Err(internal_error(e)),
    };

    log_activity(
        &state,
        &user,
        NewActivityLog::new(
            "CREATE_DEADLINE",
            format!("Added deadline: {}", deadline.title),
            "DEADLINE",
            &deadline.id,
        ),
    )
    .await;

    Ok(Json(deadline))
}

pub async fn update_deadline<S: Store>(
    State(state): State<AppState<S>>,
    user: UserContext,
    Path(id): Path<Id>,
    RequestJson(updates): RequestJson<DeadlineUpdate>,
) -> Result<Json<Deadline>, ApiError> {
    let deadline = match state.store.update_deadline(&id, updates).await {
        Ok(Some(deadline)) => deadline,
        Ok(None) => return Err(not_found("Deadline not found")),
        Err(e) => return Err(internal_error(e)),
    };

    log_activity(
        &state,
        &user,
        NewActivityLog::new(
            "UPDATE_DEADLINE",
            format!("Updated deadline: {}", deadline.title),
            "DEADLINE",
            &deadline.id,
        ),
    )
    .await;

    Ok(Json(deadline))
}

// ---------------------------------------------------------------------------
// Activity feed
// ---------------------------------------------------------------------------

pub async fn list_activity<S: Store>(
    State(state): State<AppState<S>>,
    user: UserContext,
) -> Result<Json<Vec<ActivityLog>>, ApiError> {
    match state.store.get_activity_by_user(&user.user_id).await {
        Ok(activity) => Ok(Json(activity)),
        Err(e) => Err(internal_error(e)),
    }
}

// ---------------------------------------------------------------------------
// Target schools
// ---------------------------------------------------------------------------

pub async fn list_target_schools<S: Store>(
    State(state): State<AppState<S>>,
    user: UserContext,
) -> Result<Json<Vec<TargetSchool>>, ApiError> {
    match state.store.get_target_schools_by_user(&user.user_id).await {
        Ok(targets) => Ok(Json(targets)),
        Err(e) => Err(internal_error(e)),
    }
}

pub async fn create_target_school<S: Store>(
    State(state): State<AppState<S>>,
    user: UserContext,
    RequestJson(new_target): RequestJson<NewTargetSchool>,
) -> Result<Json<TargetSchool>, ApiError> {
    let target = match state
        .store
        .create_target_school(&user.user_id, new_target)
        .await
    {
        Ok(target) => target,
        Err(e) => return Err(internal_error(e)),
    };

    log_activity(
        &state,
        &user,
        NewActivityLog::new(
            "ADD_TARGET_SCHOOL",
            format!("Added target school: {}", target.institution_name),
            "TARGET_SCHOOL",
            &target.id,
        ),
    )
    .await;

    Ok(Json(target))
}

pub async fn delete_target_school<S: Store>(
    State(state): State<AppState<S>>,
    user: UserContext,
    Path(id): Path<Id>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match state.store.delete_target_school(&id).await {
        Ok(true) => {}
        Ok(false) => return Err(not_found("Target school not found")),
        Err(e) => return Err(internal_error(e)),
    }

    log_activity(
        &state,
        &user,
        NewActivityLog::new(
            "DELETE_TARGET_SCHOOL",
            "Removed target school".to_string(),
            "TARGET_SCHOOL",
            &id,
        ),
    )
    .await;

    Ok(Json(serde_json::json!({ "success": true })))
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

pub async fn get_dashboard_stats<S: Store>(
    State(state): State<AppState<S>>,
    user: UserContext,
) -> Result<Json<DashboardStats>, ApiError> {
    let courses = match state.store.get_courses_by_user(&user.user_id).await {
        Ok(courses) => courses,
        Err(e) => return Err(internal_error(e)),
    };
    let plans = match state.store.get_plans_by_user(&user.user_id).await {
        Ok(plans) => plans,
        Err(e) => return Err(internal_error(e)),
    };
    let deadlines = match state.store.get_deadlines_by_user(&user.user_id).await {
        Ok(deadlines) => deadlines,
        Err(e) => return Err(internal_error(e)),
    };

    Ok(Json(compute_dashboard_stats(
        &courses,
        &plans,
        &deadlines,
        chrono::Utc::now(),
    )))
}
