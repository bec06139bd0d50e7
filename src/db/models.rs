use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contact-form submission stored in the `contacts` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// Server-assigned identifier (UUID v4).
    pub id: String,
    pub name: String,
    pub email: String,
    /// Defaults to "No subject" when the form field is left blank.
    pub subject: String,
    pub message: String,
    /// The submitter's User-Agent header, when available.
    #[serde(default)]
    pub user_agent: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

/// The request payload for `POST /api/contact`.
///
/// All fields are defaulted so that a missing field produces our own
/// "Missing required field" response instead of a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// The response from a successful contact submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    /// A message indicating success, shown verbatim by the form status line.
    pub message: String,
    /// The id of the stored submission.
    pub id: String,
}

/// A page-view event stored in the `analytics` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub page: String,
    pub referrer: String,
    #[serde(default)]
    pub screen_width: Option<u32>,
    #[serde(default)]
    pub screen_height: Option<u32>,
    #[serde(default)]
    pub user_agent: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

/// The request payload for `POST /api/analytics`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsRequest {
    #[serde(default = "default_page")]
    pub page: String,
    #[serde(default)]
    pub referrer: String,
    #[serde(default)]
    pub screen_width: Option<u32>,
    #[serde(default)]
    pub screen_height: Option<u32>,
}

fn default_page() -> String {
    "/".to_string()
}

/// The response for `GET /api/stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_contacts: u64,
    pub total_page_views: u64,
    pub recent_contacts: Vec<ContactSummary>,
}

/// A contact reduced to non-sensitive fields for the stats view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSummary {
    pub name: String,
    pub subject: String,
    pub submitted_at: DateTime<Utc>,
}

impl From<&ContactSubmission> for ContactSummary {
    fn from(contact: &ContactSubmission) -> Self {
        Self {
            name: contact.name.clone(),
            subject: contact.subject.clone(),
            submitted_at: contact.submitted_at,
        }
    }
}
