#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use std::sync::Arc;

    use axum::routing::{get, post};
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::services::ServeDir;

    use vitae::api;
    use vitae::app::{shell, App};
    use vitae::cv_source::{CvSource, FileCvSource};
    use vitae::db::repository::{
        AnalyticsRepository, ContactRepository, MemoryAnalyticsRepository,
        MemoryContactRepository, MongoAnalyticsRepository, MongoContactRepository,
    };
    use vitae::state::AppState;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitae=info,tower_http=info".into()),
        )
        .init();

    tracing::info!("Starting vitae server...");

    // Load Leptos options from Cargo.toml metadata
    let conf = get_configuration(None).unwrap();
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.to_string();

    // CV document source
    let cv_path =
        std::env::var("CV_DATA_PATH").unwrap_or_else(|_| "data/cv_data.json".to_string());
    let cv_source: Arc<dyn CvSource> = Arc::new(FileCvSource::new(&cv_path));
    tracing::info!("Serving CV data from {cv_path}");

    // Contacts and analytics go to MongoDB when configured, otherwise to an
    // in-memory store that lasts for the process lifetime.
    let (contact_repo, analytics_repo): (Arc<dyn ContactRepository>, Arc<dyn AnalyticsRepository>) =
        match std::env::var("MONGODB_URI") {
            Ok(mongo_uri) => {
                let db_name =
                    std::env::var("MONGODB_DATABASE").unwrap_or_else(|_| "vitae".to_string());
                let client = mongodb::Client::with_uri_str(&mongo_uri)
                    .await
                    .expect("Failed to connect to MongoDB");
                let db = client.database(&db_name);
                tracing::info!("Connected to MongoDB at {mongo_uri}");
                (
                    Arc::new(MongoContactRepository::new(&db)),
                    Arc::new(MongoAnalyticsRepository::new(&db)),
                )
            }
            Err(_) => {
                tracing::warn!("MONGODB_URI not set, storing contacts and analytics in memory");
                (
                    Arc::new(MemoryContactRepository::new()),
                    Arc::new(MemoryAnalyticsRepository::new()),
                )
            }
        };

    // Build application state
    let app_state = AppState {
        cv_source,
        contact_repo,
        analytics_repo,
        leptos_options: leptos_options.clone(),
    };

    // Generate the Leptos route list for SSR
    let routes = generate_route_list(App);

    // Build the Axum router
    let server_fn_state = app_state.clone();
    let context_state = app_state.clone();
    let app = Router::new()
        // API routes
        .route("/api/cv-data", get(api::cv_data::cv_data_handler))
        .route("/api/contact", post(api::contact::contact_handler))
        .route("/api/analytics", post(api::analytics::track_handler))
        .route("/api/stats", get(api::analytics::stats_handler))
        .route("/health", get(api::health::health_handler))
        // Leptos server functions (contact form submit, page-view ping)
        .route(
            "/api/{*fn_name}",
            axum::routing::any(move |req: axum::extract::Request| {
                let state = server_fn_state.clone();
                async move {
                    leptos_axum::handle_server_fns_with_context(
                        move || provide_context(state.clone()),
                        req,
                    )
                    .await
                }
            }),
        )
        // Leptos SSR routes
        .leptos_routes_with_context(
            &app_state,
            routes,
            move || provide_context(context_state.clone()),
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        // Static files
        .fallback_service(ServeDir::new(&site_root))
        .with_state(app_state);

    // Start the server
    tracing::info!("Listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

// When compiled for WASM (client-side), there's no main function.
// The hydrate() function in lib.rs handles client-side initialization.
#[cfg(not(feature = "ssr"))]
fn main() {
    // This is intentionally empty.
    // Client-side hydration is handled by lib.rs::hydrate()
}
