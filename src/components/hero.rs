use leptos::prelude::*;

use crate::models::cv::CvDocument;

/// Hero section: name, title and contact details.
///
/// Absent name/title keep their static placeholder text; absent contact
/// fields are omitted entirely.
#[component]
pub fn Hero(cv: CvDocument) -> impl IntoView {
    view! {
        <section id="hero" class="hero">
            <h1 id="hero-name">
                {cv.name.clone().unwrap_or_else(|| "Your Name".to_string())}
            </h1>
            <p id="hero-title" class="hero-title">
                {cv.title.clone().unwrap_or_else(|| "Your Title".to_string())}
            </p>
            <div class="hero-contact">
                {cv.email.map(|email| view! { <span id="hero-email">{email}</span> })}
                {cv.phone.map(|phone| view! { <span id="hero-phone">{phone}</span> })}
                {cv.location.map(|location| view! { <span id="hero-location">{location}</span> })}
            </div>
        </section>
    }
}

/// About section: the free-text summary. Renders nothing when absent.
#[component]
pub fn About(summary: Option<String>) -> impl IntoView {
    summary.map(|summary| {
        view! {
            <section id="about" class="about">
                <h2>"About"</h2>
                <p id="about-summary">{summary}</p>
            </section>
        }
    })
}
