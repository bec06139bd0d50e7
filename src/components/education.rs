use leptos::prelude::*;

use crate::models::cv::EducationEntry;

/// Education timeline, mirroring the experience section's layout.
#[component]
pub fn EducationSection(entries: Vec<EducationEntry>) -> impl IntoView {
    (!entries.is_empty()).then(|| {
        view! {
            <section id="education" class="education">
                <h2>"Education"</h2>
                <div id="education-list" class="timeline">
                    {entries
                        .into_iter()
                        .map(|entry| view! { <EducationItem entry/> })
                        .collect_view()}
                </div>
            </section>
        }
    })
}

#[component]
fn EducationItem(entry: EducationEntry) -> impl IntoView {
    view! {
        <div class="timeline-item">
            <h3>{entry.degree}</h3>
            <div class="timeline-meta">
                <span class="timeline-company">{entry.institution}</span>
                <span class="separator">"|"</span>
                <span>{entry.duration}</span>
                {entry.location.map(|location| view! {
                    <span class="separator">"|"</span>
                    <span class="timeline-location">{location}</span>
                })}
            </div>
            {entry.description.map(|description| view! {
                <div class="timeline-description">
                    <p>{description}</p>
                </div>
            })}
        </div>
    }
}
