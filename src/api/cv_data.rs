use leptos::prelude::*;

use crate::models::cv::CvDocument;

/// Fetch the CV document.
///
/// During SSR this runs in-process against the configured source; after
/// hydration the generated client calls it over the network.
#[server]
pub async fn get_cv_data() -> Result<CvDocument, ServerFnError> {
    use crate::state::AppState;

    let state = use_context::<AppState>()
        .ok_or_else(|| ServerFnError::new("AppState not found in context"))?;

    state
        .cv_source
        .load()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Axum handler for `GET /api/cv-data`.
///
/// Only available when the `ssr` feature is enabled.
#[cfg(feature = "ssr")]
pub async fn cv_data_handler(
    axum::extract::State(state): axum::extract::State<crate::state::AppState>,
) -> Result<axum::Json<CvDocument>, crate::error::AppError> {
    let doc = state.cv_source.load().await.map_err(|e| {
        tracing::error!("Failed to load CV data: {e}");
        e
    })?;

    Ok(axum::Json(doc))
}
