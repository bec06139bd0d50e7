mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn page_view_is_recorded() {
    let env = common::TestEnv::start();
    let server = env.server();

    let response = server
        .post("/api/analytics")
        .json(&serde_json::json!({
            "page": "/",
            "referrer": "https://example.org",
            "screen_width": 1920,
            "screen_height": 1080
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(env.analytics_repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn empty_payload_uses_defaults() {
    let env = common::TestEnv::start();
    let server = env.server();

    let response = server
        .post("/api/analytics")
        .json(&serde_json::json!({}))
        .await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(env.analytics_repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn stats_aggregates_contacts_and_views() {
    let env = common::TestEnv::start();
    let server = env.server();

    for _ in 0..3 {
        server
            .post("/api/analytics")
            .json(&serde_json::json!({"page": "/"}))
            .await;
    }
    env.contact(&server, "Ada", "ada@example.com", "Hi", "Hello!")
        .await;

    let stats: serde_json::Value = server.get("/api/stats").await.json();
    assert_eq!(stats["total_contacts"], 1);
    assert_eq!(stats["total_page_views"], 3);
    assert_eq!(stats["recent_contacts"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn stats_exposes_no_sensitive_contact_fields() {
    let env = common::TestEnv::start();
    let server = env.server();

    env.contact(
        &server,
        "Ada",
        "ada@example.com",
        "Subject line",
        "A private message",
    )
    .await;

    let stats: serde_json::Value = server.get("/api/stats").await.json();
    let recent = &stats["recent_contacts"][0];
    assert_eq!(recent["name"], "Ada");
    assert_eq!(recent["subject"], "Subject line");
    assert!(recent["submitted_at"].is_string());
    assert!(recent.get("email").is_none());
    assert!(recent.get("message").is_none());
}

#[tokio::test]
async fn stats_caps_recent_contacts_at_ten() {
    let env = common::TestEnv::start();
    let server = env.server();

    for i in 0..12 {
        env.contact(
            &server,
            &format!("visitor-{i}"),
            "v@example.com",
            "Hi",
            "Hello!",
        )
        .await;
    }

    let stats: serde_json::Value = server.get("/api/stats").await.json();
    let recent = stats["recent_contacts"].as_array().unwrap();
    assert_eq!(stats["total_contacts"], 12);
    assert_eq!(recent.len(), 10);
    // Newest first
    assert_eq!(recent[0]["name"], "visitor-11");
    assert_eq!(recent[9]["name"], "visitor-2");
}
