use leptos::prelude::*;

use crate::models::cv::Project;

/// Portfolio project cards.
#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> impl IntoView {
    (!projects.is_empty()).then(|| {
        view! {
            <section id="projects" class="projects">
                <h2>"Projects"</h2>
                <div id="projects-grid" class="projects-grid">
                    {projects
                        .into_iter()
                        .map(|project| view! {
                            <div class="project-card">
                                <div class="project-content">
                                    <h3>{project.name}</h3>
                                    <p class="project-tech">{project.technologies}</p>
                                    <p class="project-description">{project.description}</p>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>
        }
    })
}
