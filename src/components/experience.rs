use leptos::prelude::*;

use crate::models::cv::{ExperienceEntry, Responsibilities};

/// Experience timeline. Renders nothing when the document has no entries;
/// entries appear in document order.
#[component]
pub fn ExperienceSection(entries: Vec<ExperienceEntry>) -> impl IntoView {
    (!entries.is_empty()).then(|| {
        view! {
            <section id="experience" class="experience">
                <h2>"Experience"</h2>
                <div id="experience-list" class="timeline">
                    {entries
                        .into_iter()
                        .map(|entry| view! { <ExperienceItem entry/> })
                        .collect_view()}
                </div>
            </section>
        }
    })
}

#[component]
fn ExperienceItem(entry: ExperienceEntry) -> impl IntoView {
    view! {
        <div class="timeline-item">
            <h3>{entry.position}</h3>
            <div class="timeline-meta">
                <span class="timeline-company">{entry.company}</span>
                <span class="separator">"|"</span>
                <span>{entry.duration}</span>
                {entry.location.map(|location| view! {
                    <span class="separator">"|"</span>
                    <span class="timeline-location">{location}</span>
                })}
            </div>
            {entry.responsibilities.map(|responsibilities| view! {
                <div class="timeline-description">
                    {match responsibilities {
                        Responsibilities::Bullets(items) => view! {
                            <ul>
                                {items
                                    .into_iter()
                                    .map(|item| view! { <li>{item}</li> })
                                    .collect_view()}
                            </ul>
                        }
                        .into_any(),
                        Responsibilities::Paragraph(text) => {
                            view! { <p>{text}</p> }.into_any()
                        }
                    }}
                </div>
            })}
        </div>
    }
}
