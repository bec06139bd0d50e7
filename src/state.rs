use std::sync::Arc;

use crate::cv_source::CvSource;
use crate::db::repository::{AnalyticsRepository, ContactRepository};

#[derive(Clone)]
pub struct AppState {
    pub cv_source: Arc<dyn CvSource>,
    pub contact_repo: Arc<dyn ContactRepository>,
    pub analytics_repo: Arc<dyn AnalyticsRepository>,
    pub leptos_options: leptos::prelude::LeptosOptions,
}

impl axum::extract::FromRef<AppState> for leptos::prelude::LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}
