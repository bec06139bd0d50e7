use chrono::Utc;
use leptos::prelude::*;

use crate::db::models::{AnalyticsEvent, AnalyticsRequest, ContactSummary, StatsResponse};
use crate::db::repository::{AnalyticsRepository, ContactRepository};
use crate::error::AppError;

/// How many submissions the stats view lists.
const RECENT_CONTACTS_LIMIT: usize = 10;

/// Record a page-view event.
pub async fn process_track(
    repo: &dyn AnalyticsRepository,
    request: AnalyticsRequest,
    user_agent: Option<String>,
) -> Result<(), AppError> {
    repo.insert(AnalyticsEvent {
        page: request.page,
        referrer: request.referrer,
        screen_width: request.screen_width,
        screen_height: request.screen_height,
        user_agent,
        recorded_at: Utc::now(),
    })
    .await
}

/// Aggregate visitor statistics: totals plus the newest submissions reduced
/// to their non-sensitive fields.
pub async fn process_stats(
    contacts: &dyn ContactRepository,
    analytics: &dyn AnalyticsRepository,
) -> Result<StatsResponse, AppError> {
    let total_contacts = contacts.count().await?;
    let total_page_views = analytics.count().await?;
    let recent_contacts = contacts
        .recent(RECENT_CONTACTS_LIMIT)
        .await?
        .iter()
        .map(ContactSummary::from)
        .collect();

    Ok(StatsResponse {
        total_contacts,
        total_page_views,
        recent_contacts,
    })
}

/// Server function backing the page-view ping fired after hydration.
#[server]
pub async fn track_page_view(
    page: String,
    referrer: String,
    screen_width: Option<u32>,
    screen_height: Option<u32>,
) -> Result<(), ServerFnError> {
    use crate::state::AppState;

    let state = use_context::<AppState>()
        .ok_or_else(|| ServerFnError::new("AppState not found in context"))?;

    let headers: axum::http::HeaderMap = leptos_axum::extract().await?;
    let user_agent = headers
        .get(axum::http::header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let request = AnalyticsRequest {
        page,
        referrer,
        screen_width,
        screen_height,
    };

    process_track(state.analytics_repo.as_ref(), request, user_agent)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Axum handler for `POST /api/analytics`.
///
/// Only available when the `ssr` feature is enabled.
#[cfg(feature = "ssr")]
pub async fn track_handler(
    axum::extract::State(state): axum::extract::State<crate::state::AppState>,
    headers: axum::http::HeaderMap,
    axum::Json(request): axum::Json<AnalyticsRequest>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let user_agent = headers
        .get(axum::http::header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    process_track(state.analytics_repo.as_ref(), request, user_agent)
        .await
        .map_err(|e| {
            tracing::warn!("Failed to record analytics event: {e}");
            e
        })?;

    Ok((
        axum::http::StatusCode::CREATED,
        axum::Json(serde_json::json!({ "success": true })),
    ))
}

/// Axum handler for `GET /api/stats`.
#[cfg(feature = "ssr")]
pub async fn stats_handler(
    axum::extract::State(state): axum::extract::State<crate::state::AppState>,
) -> Result<axum::Json<StatsResponse>, AppError> {
    let stats = process_stats(
        state.contact_repo.as_ref(),
        state.analytics_repo.as_ref(),
    )
    .await?;

    Ok(axum::Json(stats))
}
