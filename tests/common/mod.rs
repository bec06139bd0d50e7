use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use vitae::api;
use vitae::cv_source::{CvSource, FileCvSource};
use vitae::db::repository::{
    AnalyticsRepository, ContactRepository, MemoryAnalyticsRepository, MemoryContactRepository,
};
use vitae::state::AppState;

/// Provides the Axum API router wired to in-memory repositories and a
/// fixture CV file, plus direct handles on the repositories for assertions.
pub struct TestEnv {
    pub router: Router,
    pub contact_repo: Arc<dyn ContactRepository>,
    pub analytics_repo: Arc<dyn AnalyticsRepository>,
}

impl TestEnv {
    /// Environment backed by the standard fixture document.
    pub fn start() -> Self {
        Self::with_cv_file("tests/fixtures/cv_data.json")
    }

    /// Environment with an arbitrary CV file path (may be missing, for
    /// failure tests).
    pub fn with_cv_file(path: &str) -> Self {
        let cv_source: Arc<dyn CvSource> = Arc::new(FileCvSource::new(path));
        let contact_repo: Arc<dyn ContactRepository> = Arc::new(MemoryContactRepository::new());
        let analytics_repo: Arc<dyn AnalyticsRepository> =
            Arc::new(MemoryAnalyticsRepository::new());

        let leptos_options = leptos::prelude::LeptosOptions::builder()
            .output_name("vitae")
            .build();

        let app_state = AppState {
            cv_source,
            contact_repo: contact_repo.clone(),
            analytics_repo: analytics_repo.clone(),
            leptos_options,
        };

        // API routes only, no Leptos SSR
        let router = Router::new()
            .route("/api/cv-data", get(api::cv_data::cv_data_handler))
            .route("/api/contact", post(api::contact::contact_handler))
            .route("/api/analytics", post(api::analytics::track_handler))
            .route("/api/stats", get(api::analytics::stats_handler))
            .route("/health", get(api::health::health_handler))
            .with_state(app_state);

        Self {
            router,
            contact_repo,
            analytics_repo,
        }
    }

    /// Build an `axum_test::TestServer` from this environment's router.
    pub fn server(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .expect_success_by_default()
            .build(self.router.clone())
            .expect("Failed to build TestServer")
    }

    /// Build a `TestServer` that does NOT expect success by default (for error tests).
    pub fn server_permissive(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .build(self.router.clone())
            .expect("Failed to build TestServer")
    }

    /// Helper: submit the contact form via the API.
    pub async fn contact(
        &self,
        server: &axum_test::TestServer,
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
    ) -> axum_test::TestResponse {
        server
            .post("/api/contact")
            .json(&serde_json::json!({
                "name": name,
                "email": email,
                "subject": subject,
                "message": message
            }))
            .await
    }
}
