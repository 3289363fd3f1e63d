use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use intake::application::services::SubmissionService;
use intake::infrastructure::llm::MockLlmClient;
use intake::infrastructure::reporting::LopdfRoadmapRenderer;
use intake::infrastructure::storage::CsvSubmissionStore;
use intake::infrastructure::text_processing::CompositeFileLoader;
use intake::presentation::{AppState, create_router};

const BOUNDARY: &str = "intake-test-boundary";

fn test_router(dir: &tempfile::TempDir, responses: Vec<&str>) -> Router {
    let llm = Arc::new(MockLlmClient::scripted(responses));
    let store = Arc::new(CsvSubmissionStore::new(dir.path().join("onboarding.csv")));
    let submission_service = Arc::new(SubmissionService::new(
        llm,
        Arc::new(CompositeFileLoader::with_default_adapters()),
        store,
        Arc::new(LopdfRoadmapRenderer::new()),
        dir.path().join("submissions"),
    ));
    create_router(AppState { submission_service })
}

fn multipart_body(fields: &[(&str, &str)]) -> Body {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));
    Body::from(body)
}

fn submission_request(fields: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/submissions")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(multipart_body(fields))
        .unwrap()
}

#[tokio::test]
async fn given_running_service_when_checking_health_then_status_is_healthy() {
    let dir = tempfile::TempDir::new().unwrap();
    let router = test_router(&dir, vec![]);

    let response = router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn given_complete_form_when_submitting_then_created_and_row_is_stored() {
    let dir = tempfile::TempDir::new().unwrap();
    let router = test_router(
        &dir,
        vec![
            r#"["SmartCAMA"]"#,
            "[]",
            "[]",
            "[]",
            r#"{"CAMA Vendor": ["SmartCAMA"]}"#,
            "Draft roadmap text.",
        ],
    );

    let response = router
        .oneshot(submission_request(&[
            ("office_name", "Clark County Assessor"),
            ("office_county", "Clark"),
            ("office_state", "Nevada"),
            ("contact_person", "Pat Doe"),
            ("email", "pat@example.com"),
            ("phone", "702-555-0100"),
            ("software_cama", "smartcama"),
            ("software_imagery", ""),
            ("website_provider", "in-house"),
            ("other_providers", ""),
            ("other_issues", "contract renewals"),
        ]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["message"], "Form submitted successfully");
    assert!(json["columns"]
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c == "CAMA Vendor"));
    assert!(json.get("category_warning").is_none());

    assert!(dir.path().join("onboarding.csv").exists());
}

#[tokio::test]
async fn given_invalid_state_when_submitting_then_bad_request() {
    let dir = tempfile::TempDir::new().unwrap();
    let router = test_router(&dir, vec![]);

    let response = router
        .oneshot(submission_request(&[("office_state", "Atlantis")]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(!dir.path().join("onboarding.csv").exists());
}

#[tokio::test]
async fn given_malformed_categorizer_output_when_submitting_then_warning_is_returned() {
    let dir = tempfile::TempDir::new().unwrap();
    let router = test_router(
        &dir,
        vec!["[]", "[]", "[]", "[]", "not a dict", "Roadmap text."],
    );

    let response = router
        .oneshot(submission_request(&[("office_state", "Texas")]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert!(json["category_warning"].is_string());
    assert!(dir.path().join("onboarding.csv").exists());
}
