use async_trait::async_trait;

use crate::error::AppError;
use crate::models::cv::CvDocument;

/// Source of the CV document served to the page.
///
/// This trait allows swapping the backing store in tests.
#[async_trait]
pub trait CvSource: Send + Sync {
    /// Load the current CV document.
    async fn load(&self) -> Result<CvDocument, AppError>;
}

/// Reads the CV document from a JSON file on every request.
///
/// The file is small and edited out-of-band, so re-reading per request keeps
/// updates live without a reload hook.
pub struct FileCvSource {
    path: std::path::PathBuf,
}

impl FileCvSource {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CvSource for FileCvSource {
    async fn load(&self) -> Result<CvDocument, AppError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            AppError::CvSource(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            AppError::CvSource(format!("Invalid CV data in {}: {}", self.path.display(), e))
        })
    }
}
