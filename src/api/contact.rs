use chrono::Utc;
use leptos::prelude::*;

use crate::db::models::{ContactRequest, ContactResponse, ContactSubmission};
use crate::db::repository::ContactRepository;
use crate::error::AppError;

/// Success message returned to the form, verbatim from the backend contract.
pub const CONTACT_THANKS: &str = "Thank you for your message! I will get back to you soon.";

const DEFAULT_SUBJECT: &str = "No subject";

/// Core contact-form logic — separated from the HTTP layer for testability.
///
/// Validates the required fields, applies the subject fallback and persists
/// the submission.
pub async fn process_contact(
    repo: &dyn ContactRepository,
    request: ContactRequest,
    user_agent: Option<String>,
) -> Result<ContactResponse, AppError> {
    for (field, value) in [
        ("name", &request.name),
        ("email", &request.email),
        ("message", &request.message),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::BadRequest(format!(
                "Missing required field: {field}"
            )));
        }
    }

    let subject = if request.subject.trim().is_empty() {
        DEFAULT_SUBJECT.to_string()
    } else {
        request.subject
    };

    let submission = ContactSubmission {
        id: uuid::Uuid::new_v4().to_string(),
        name: request.name,
        email: request.email,
        subject,
        message: request.message,
        user_agent,
        submitted_at: Utc::now(),
    };

    let id = repo.insert(submission).await?;
    tracing::info!("Stored contact submission {id}");

    Ok(ContactResponse {
        success: true,
        message: CONTACT_THANKS.to_string(),
        id,
    })
}

/// Carry the backend's message across the server-fn boundary verbatim.
///
/// The form status line shows this text as-is, so it must not pick up the
/// `AppError` Display prefix ("Bad request: ...") on the way out.
fn to_server_fn_error(e: AppError) -> ServerFnError {
    match e {
        AppError::BadRequest(msg) | AppError::NotFound(msg) | AppError::Internal(msg) => {
            ServerFnError::new(msg)
        }
        other => ServerFnError::new(other.to_string()),
    }
}

/// Server function backing the contact form component.
#[server]
pub async fn submit_contact(
    name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<ContactResponse, ServerFnError> {
    use crate::state::AppState;

    let state = use_context::<AppState>()
        .ok_or_else(|| ServerFnError::new("AppState not found in context"))?;

    let headers: axum::http::HeaderMap = leptos_axum::extract().await?;
    let user_agent = headers
        .get(axum::http::header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let request = ContactRequest {
        name,
        email,
        subject,
        message,
    };

    process_contact(state.contact_repo.as_ref(), request, user_agent)
        .await
        .map_err(to_server_fn_error)
}

/// Axum handler for `POST /api/contact`.
///
/// Only available when the `ssr` feature is enabled.
#[cfg(feature = "ssr")]
pub async fn contact_handler(
    axum::extract::State(state): axum::extract::State<crate::state::AppState>,
    headers: axum::http::HeaderMap,
    axum::Json(request): axum::Json<ContactRequest>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let user_agent = headers
        .get(axum::http::header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let response = process_contact(state.contact_repo.as_ref(), request, user_agent)
        .await
        .map_err(|e| {
            tracing::warn!("Contact submission rejected: {e}");
            e
        })?;

    Ok((axum::http::StatusCode::CREATED, axum::Json(response)))
}
