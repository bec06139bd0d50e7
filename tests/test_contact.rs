mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn contact_submission_is_stored() {
    let env = common::TestEnv::start();
    let server = env.server();

    let response = env
        .contact(
            &server,
            "Ada Example",
            "ada@example.com",
            "Job offer",
            "We should talk.",
        )
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "Thank you for your message! I will get back to you soon."
    );
    assert!(!body["id"].as_str().unwrap().is_empty());

    assert_eq!(env.contact_repo.count().await.unwrap(), 1);
    let stored = env.contact_repo.recent(1).await.unwrap();
    assert_eq!(stored[0].name, "Ada Example");
    assert_eq!(stored[0].subject, "Job offer");
    assert_eq!(stored[0].id, body["id"].as_str().unwrap());
}

#[tokio::test]
async fn blank_subject_defaults() {
    let env = common::TestEnv::start();
    let server = env.server();

    env.contact(&server, "Ada", "ada@example.com", "", "Hello!")
        .await;

    let stored = env.contact_repo.recent(1).await.unwrap();
    assert_eq!(stored[0].subject, "No subject");
}

#[tokio::test]
async fn missing_required_field_is_rejected() {
    let env = common::TestEnv::start();
    let server = env.server_permissive();

    let response = env
        .contact(&server, "Ada", "", "Subject", "Hello!")
        .await;
    response.assert_status_bad_request();

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Missing required field: email");

    // Nothing stored
    assert_eq!(env.contact_repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn omitted_field_is_rejected_not_a_deserialization_error() {
    let env = common::TestEnv::start();
    let server = env.server_permissive();

    // "message" missing entirely from the payload
    let response = server
        .post("/api/contact")
        .json(&serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com"
        }))
        .await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Missing required field: message");
}

#[tokio::test]
async fn user_agent_is_recorded_when_present() {
    let env = common::TestEnv::start();
    let server = env.server();

    server
        .post("/api/contact")
        .add_header("user-agent", "integration-test/1.0")
        .json(&serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "UA check",
            "message": "Hello!"
        }))
        .await;

    let stored = env.contact_repo.recent(1).await.unwrap();
    assert_eq!(stored[0].user_agent.as_deref(), Some("integration-test/1.0"));
}
