mod common;

use vitae::models::cv::{CvDocument, Responsibilities};

#[tokio::test]
async fn cv_data_returns_fixture_document() {
    let env = common::TestEnv::start();
    let server = env.server();

    let response = server.get("/api/cv-data").await;
    let doc: CvDocument = response.json();

    assert_eq!(doc.name.as_deref(), Some("Jane Doe"));
    assert_eq!(doc.title.as_deref(), Some("Software Engineer"));
    assert_eq!(doc.experience.len(), 2);
    assert_eq!(doc.education.len(), 1);
    assert_eq!(doc.skills[0].items, vec!["Rust", "Python"]);
    assert_eq!(doc.projects[0].name, "vitae");
}

#[tokio::test]
async fn cv_data_preserves_responsibility_shapes() {
    let env = common::TestEnv::start();
    let server = env.server();

    let doc: CvDocument = server.get("/api/cv-data").await.json();

    match &doc.experience[0].responsibilities {
        Some(Responsibilities::Bullets(items)) => {
            assert_eq!(items, &["first duty", "second duty", "third duty"]);
        }
        other => panic!("Expected bullets, got: {:?}", other),
    }
    match &doc.experience[1].responsibilities {
        Some(Responsibilities::Paragraph(text)) => {
            assert_eq!(text, "Did full-stack work.");
        }
        other => panic!("Expected paragraph, got: {:?}", other),
    }
}

#[tokio::test]
async fn cv_data_omits_absent_optional_fields() {
    let env = common::TestEnv::start();
    let server = env.server();

    let body: serde_json::Value = server.get("/api/cv-data").await.json();

    // The fixture has no phone and its second experience entry has no location
    assert!(body.get("phone").is_none());
    assert!(body["experience"][1].get("location").is_none());
}

#[tokio::test]
async fn missing_source_file_yields_500() {
    let env = common::TestEnv::with_cv_file("/nonexistent/cv_data.json");
    let server = env.server_permissive();

    let response = server.get("/api/cv-data").await;
    response.assert_status_internal_server_error();

    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("CV source error"));
}

#[tokio::test]
async fn invalid_source_json_yields_500() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cv_data.json");
    std::fs::write(&path, "{ definitely not json").unwrap();

    let env = common::TestEnv::with_cv_file(path.to_str().unwrap());
    let server = env.server_permissive();

    let response = server.get("/api/cv-data").await;
    response.assert_status_internal_server_error();
}

#[tokio::test]
async fn health_reports_healthy() {
    let env = common::TestEnv::start();
    let server = env.server();

    let body: serde_json::Value = server.get("/health").await.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}
