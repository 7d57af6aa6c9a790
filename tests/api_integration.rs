use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use transfer_planner::api::{create_router, AppState};
use transfer_planner::assist::AssistClient;
use transfer_planner::model::generate_id;
use transfer_planner::seed::load_seed_data;
use transfer_planner::store::MemoryStore;

/// Build a router backed by a fresh seeded in-memory store. Uploads land in
/// a per-test temp directory so parallel tests never collide.
async fn test_app() -> Router {
    let store = Arc::new(MemoryStore::default());
    load_seed_data(&*store).await.unwrap();

    let uploads_dir = std::env::temp_dir().join(format!("transfer-planner-test-{}", generate_id()));
    let state = AppState::new(
        store,
        // Unroutable base URL: assist proxy tests only exercise the failure path.
        AssistClient::new("http://127.0.0.1:9"),
        uploads_dir,
    );
    create_router().with_state(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let app = test_app().await;
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn institutions_are_seeded() {
    let app = test_app().await;
    let (status, body) = get(&app, "/api/institutions").await;
    assert_eq!(status, StatusCode::OK);
    let institutions = body.as_array().unwrap();
    assert_eq!(institutions.len(), 7);
    assert!(institutions
        .iter()
        .any(|i| i["name"] == "UC Davis" && i["type"] == "UC"));
}

#[tokio::test]
async fn first_user_read_bootstraps_the_demo_profile() {
    let app = test_app().await;

    let (status, body) = get(&app, "/api/user").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "demo-user-id");
    assert_eq!(body["username"], "demo");
    assert_eq!(body["firstName"], "John");

    // Second read returns the same stored user rather than recreating it.
    let (_, again) = get(&app, "/api/user").await;
    assert_eq!(again["id"], body["id"]);
    assert_eq!(again["createdAt"], body["createdAt"]);
}

#[tokio::test]
async fn profile_update_requires_an_existing_user() {
    let app = test_app().await;

    // No GET /api/user yet, so the demo user does not exist.
    let (status, _) = put(&app, "/api/user/profile", json!({"firstName": "Jane"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    get(&app, "/api/user").await;
    let (status, body) = put(
        &app,
        "/api/user/profile",
        json!({"firstName": "Jane", "targetMajor": "Mathematics"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["firstName"], "Jane");
    // Omitted fields keep their previous values.
    assert_eq!(body["lastName"], "Doe");
    assert_eq!(body["targetMajor"], "Mathematics");
}

#[tokio::test]
async fn course_crud_round_trip() {
    let app = test_app().await;

    let (status, created) = post(
        &app,
        "/api/courses",
        json!({"courseCode": "MATH 1A", "title": "Calculus I", "units": 5, "isCompleted": true}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["courseCode"], "MATH 1A");
    assert_eq!(created["units"], 5.0);
    let id = created["id"].as_str().unwrap().to_string();

    let (_, list) = get(&app, "/api/courses").await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, updated) = put(
        &app,
        &format!("/api/courses/{}", id),
        json!({"grade": "A", "isCompleted": false}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["grade"], "A");
    assert_eq!(updated["isCompleted"], false);
    // Untouched fields survive the merge.
    assert_eq!(updated["title"], "Calculus I");

    let (status, body) = delete(&app, &format!("/api/courses/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, list) = get(&app, "/api/courses").await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn missing_course_ids_return_not_found() {
    let app = test_app().await;

    let (status, body) = put(&app, "/api/courses/no-such-id", json!({"grade": "B"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Course not found");

    let (status, _) = delete(&app, "/api/courses/no-such-id").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn courses_are_scoped_by_user_header() {
    let app = test_app().await;

    post(
        &app,
        "/api/courses",
        json!({"courseCode": "ENGL 101", "title": "Composition"}),
    )
    .await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/courses")
        .header("x-user-id", "someone-else")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let list: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn mutations_append_to_the_activity_feed_newest_first() {
    let app = test_app().await;

    let (_, created) = post(
        &app,
        "/api/courses",
        json!({"courseCode": "CHEM 1A", "title": "General Chemistry"}),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    put(&app, &format!("/api/courses/{}", id), json!({"grade": "B"})).await;
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    delete(&app, &format!("/api/courses/{}", id)).await;

    let (status, feed) = get(&app, "/api/activity").await;
    assert_eq!(status, StatusCode::OK);
    let entries = feed.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["action"], "DELETE_COURSE");
    assert_eq!(entries[1]["action"], "UPDATE_COURSE");
    assert_eq!(entries[2]["action"], "CREATE_COURSE");
    assert_eq!(
        entries[2]["description"],
        "Added course CHEM 1A - General Chemistry"
    );
}

#[tokio::test]
async fn dashboard_stats_reflect_completed_units() {
    let app = test_app().await;

    post(
        &app,
        "/api/courses",
        json!({"courseCode": "MATH 1A", "title": "Calculus I", "units": 5, "isCompleted": true}),
    )
    .await;
    post(
        &app,
        "/api/courses",
        json!({"courseCode": "MATH 1B", "title": "Calculus II", "units": 5}),
    )
    .await;
    post(
        &app,
        "/api/education-plans",
        json!({"name": "Transfer 2027", "targetMajor": "Computer Science", "isActive": true}),
    )
    .await;

    let (status, stats) = get(&app, "/api/dashboard/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["completedUnits"], 5.0);
    assert_eq!(stats["targetUnits"], 60.0);
    // round(5 / 60 * 100) = 8
    assert_eq!(stats["completionPercentage"], 8);
    assert_eq!(stats["totalCourses"], 2);
    assert_eq!(stats["completedCourses"], 1);
    assert_eq!(stats["activePlans"], 1);
    assert_eq!(stats["upcomingDeadlines"], 0);
}

#[tokio::test]
async fn prerequisite_chain_resolves_by_course_code() {
    let app = test_app().await;

    post(
        &app,
        "/api/courses",
        json!({"courseCode": "MATH 1A", "title": "Calculus I", "isCompleted": true}),
    )
    .await;
    post(
        &app,
        "/api/courses",
        json!({"courseCode": "MATH 2A", "title": "Calculus III", "prerequisites": ["MATH 1A"]}),
    )
    .await;

    let (status, chain) = get(&app, "/api/courses/prerequisite-chain").await;
    assert_eq!(status, StatusCode::OK);
    let entries = chain["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["course"]["courseCode"], "MATH 2A");
    assert_eq!(entries[0]["ready"], true);
    assert_eq!(chain["summary"]["prerequisitesMet"], 1);
    assert_eq!(chain["summary"]["prerequisitesPending"], 0);
}

#[tokio::test]
async fn bulk_parse_then_import_creates_courses() {
    let app = test_app().await;

    let text = "MATH 300|College Algebra|4|MATH 120\n\
                garbage line\n\
                ENGL 101 - English Composition (3 units)";
    let (status, parsed) = post(&app, "/api/courses/bulk-parse", json!({"text": text})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parsed["total"], 2);
    let drafts = parsed["drafts"].clone();

    let (status, summary) = post(&app, "/api/courses/bulk", json!({"courses": drafts})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["created"], 2);
    assert_eq!(summary["failed"], 0);

    let (_, list) = get(&app, "/api/courses").await;
    let courses = list.as_array().unwrap();
    assert_eq!(courses.len(), 2);
    assert!(courses.iter().any(|c| c["courseCode"] == "MATH 300"
        && c["prerequisites"] == json!(["MATH 120"])));
}

#[tokio::test]
async fn education_plan_and_semester_lifecycle() {
    let app = test_app().await;

    let (_, plan) = post(
        &app,
        "/api/education-plans",
        json!({"name": "Transfer 2027", "targetMajor": "Computer Science", "isActive": true}),
    )
    .await;
    let plan_id = plan["id"].as_str().unwrap().to_string();

    let (status, semester) = post(
        &app,
        "/api/planned-semesters",
        json!({
            "planId": plan_id,
            "term": "Fall",
            "year": 2026,
            "courseIds": [],
            "totalUnits": 0
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let semester_id = semester["id"].as_str().unwrap().to_string();

    let (_, semesters) = get(&app, &format!("/api/education-plans/{}/semesters", plan_id)).await;
    assert_eq!(semesters.as_array().unwrap().len(), 1);

    let (status, updated) = put(
        &app,
        &format!("/api/planned-semesters/{}", semester_id),
        json!({"totalUnits": 12.0}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["totalUnits"], 12.0);

    let (status, _) = delete(&app, &format!("/api/planned-semesters/{}", semester_id)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = delete(&app, &format!("/api/education-plans/{}", plan_id)).await;
    assert_eq!(status, StatusCode::OK);
    let (_, plans) = get(&app, "/api/education-plans").await;
    assert!(plans.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn deadlines_create_update_and_count_upcoming() {
    let app = test_app().await;

    let (status, deadline) = post(
        &app,
        "/api/deadlines",
        json!({
            "title": "UC application",
            "type": "APPLICATION",
            "dueDate": "2099-11-30T00:00:00Z",
            "priority": "HIGH"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = deadline["id"].as_str().unwrap().to_string();

    let (_, stats) = get(&app, "/api/dashboard/stats").await;
    assert_eq!(stats["upcomingDeadlines"], 1);

    let (status, updated) = put(
        &app,
        &format!("/api/deadlines/{}", id),
        json!({"isCompleted": true}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["isCompleted"], true);

    let (_, stats) = get(&app, "/api/dashboard/stats").await;
    assert_eq!(stats["upcomingDeadlines"], 0);
}

#[tokio::test]
async fn target_school_add_and_remove() {
    let app = test_app().await;

    let (status, target) = post(
        &app,
        "/api/target-schools",
        json!({
            "institutionId": "inst-1",
            "institutionName": "UC Davis",
            "major": "Computer Science",
            "targetDate": "2027-09-01T00:00:00Z",
            "priority": "HIGH"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = target["id"].as_str().unwrap().to_string();

    let (_, list) = get(&app, "/api/target-schools").await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, _) = delete(&app, &format!("/api/target-schools/{}", id)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, feed) = get(&app, "/api/activity").await;
    let actions: Vec<&str> = feed
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["action"].as_str().unwrap())
        .collect();
    assert!(actions.contains(&"ADD_TARGET_SCHOOL"));
    assert!(actions.contains(&"DELETE_TARGET_SCHOOL"));
}

#[tokio::test]
async fn articulation_agreements_create_and_list() {
    let app = test_app().await;

    let (status, agreement) = post(
        &app,
        "/api/articulation-agreements",
        json!({
            "sendingInstitutionId": "inst-1",
            "receivingInstitutionId": "inst-2",
            "academicYear": "2025-2026",
            "major": "Computer Science",
            "sourceType": "MANUAL"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(agreement["sourceType"], "MANUAL");

    let (_, list) = get(&app, "/api/articulation-agreements").await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

fn multipart_body(boundary: &str, filename: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}

async fn upload(app: &Router, filename: &str, content_type: &str, data: &[u8]) -> (StatusCode, Value) {
    let boundary = "test-boundary";
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(multipart_body(boundary, filename, content_type, data)))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn upload_accepts_plain_text_documents() {
    let app = test_app().await;

    let (status, document) = upload(&app, "transcript.txt", "text/plain", b"MATH 1A A").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(document["originalName"], "transcript.txt");
    assert_eq!(document["mimeType"], "text/plain");
    assert_eq!(document["size"], 9);
    assert_eq!(document["type"], "TRANSCRIPT");
    // Stored under a generated name, never the client-supplied one.
    assert_ne!(document["filename"], "transcript.txt");

    let (_, list) = get(&app, "/api/documents").await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (_, feed) = get(&app, "/api/activity").await;
    assert_eq!(feed[0]["action"], "UPLOAD_DOCUMENT");
    assert_eq!(feed[0]["description"], "Uploaded transcript.txt");
}

#[tokio::test]
async fn upload_rejects_disallowed_file_types() {
    let app = test_app().await;

    let (status, body) = upload(&app, "virus.exe", "application/x-msdownload", b"MZ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Invalid file type. Only PDF, CSV, and TXT files are allowed."
    );

    let (_, list) = get(&app, "/api/documents").await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn upload_rejects_files_over_the_size_limit() {
    let app = test_app().await;

    let oversized = vec![b'a'; 10 * 1024 * 1024 + 1];
    let (status, body) = upload(&app, "big.txt", "text/plain", &oversized).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "File exceeds the 10 MB upload limit");
}

#[tokio::test]
async fn document_delete_removes_the_record() {
    let app = test_app().await;

    let (_, document) = upload(&app, "notes.txt", "text/plain", b"hello").await;
    let id = document["id"].as_str().unwrap().to_string();

    let (status, body) = delete(&app, &format!("/api/documents/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _) = delete(&app, &format!("/api/documents/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn assist_proxy_surfaces_upstream_failures() {
    let app = test_app().await;

    let (status, body) = get(&app, "/api/assist/institutions/76/agreements").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to fetch Assist.org data"));
}
