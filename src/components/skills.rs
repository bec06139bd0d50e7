use leptos::prelude::*;

use crate::models::cv::SkillCategory;

/// Skill categories rendered as groups of tags.
#[component]
pub fn SkillsSection(categories: Vec<SkillCategory>) -> impl IntoView {
    (!categories.is_empty()).then(|| {
        view! {
            <section id="skills" class="skills">
                <h2>"Skills"</h2>
                <div id="skills-container" class="skills-grid">
                    {categories
                        .into_iter()
                        .map(|category| view! {
                            <div class="skill-category">
                                <h3>{category.category}</h3>
                                <div class="skill-tags">
                                    {category
                                        .items
                                        .into_iter()
                                        .map(|item| view! { <span class="skill-tag">{item}</span> })
                                        .collect_view()}
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>
        }
    })
}
