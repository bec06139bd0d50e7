use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::components::*;
use leptos_router::path;

use crate::api::cv_data::get_cv_data;
use crate::components::contact_form::ContactForm;
use crate::components::education::EducationSection;
use crate::components::experience::ExperienceSection;
use crate::components::hero::{About, Hero};
use crate::components::projects::ProjectsSection;
use crate::components::skills::SkillsSection;
use crate::models::cv::CvDocument;

/// The HTML document shell rendered by the server.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/vitae.css"/>
        <Stylesheet id="custom" href="/custom.css"/>
        <Title text="CV"/>

        <Router>
            <main>
                <Routes fallback=|| view! { "Page not found." }.into_view()>
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

/// The single CV page.
///
/// The document is fetched once per page load; the resulting snapshot is
/// passed by value into the section components. A load failure leaves the
/// page unpopulated and shows a generic message — recovery is a refresh.
#[component]
fn HomePage() -> impl IntoView {
    let cv = Resource::new(|| (), |_| async move { get_cv_data().await });

    // One page-view ping per load, fired from the browser only. Failures
    // are logged and otherwise ignored.
    Effect::new(move |_| {
        leptos::task::spawn_local(async move {
            let (page, referrer) = page_context();
            let (width, height) = screen_size();
            if let Err(e) =
                crate::api::analytics::track_page_view(page, referrer, width, height).await
            {
                leptos::logging::warn!("Failed to record page view: {e}");
            }
        });
    });

    view! {
        <Title text=move || {
            cv.get()
                .and_then(|res| res.ok())
                .and_then(|doc| doc.name)
                .map(|name| format!("CV - {name}"))
                .unwrap_or_else(|| "CV".to_string())
        }/>

        <Suspense fallback=|| view! { <p class="loading">"Loading..."</p> }>
            {move || cv.get().map(|res| match res {
                Ok(doc) => view! { <CvPage cv=doc/> }.into_any(),
                Err(_) => view! {
                    <p id="load-error" class="error">
                        "Failed to load CV data. Please refresh the page."
                    </p>
                }
                .into_any(),
            })}
        </Suspense>
    }
}

#[component]
fn CvPage(cv: CvDocument) -> impl IntoView {
    let nav_name = cv.name.clone().unwrap_or_else(|| "CV".to_string());
    let footer_name = cv.name.clone().unwrap_or_default();

    view! {
        <nav class="top-nav">
            <div id="nav-name" class="logo">{nav_name}</div>
            <div class="nav-links">
                <a href="#experience">"Experience"</a>
                <a href="#education">"Education"</a>
                <a href="#skills">"Skills"</a>
                <a href="#projects">"Projects"</a>
                <a href="#contact">"Contact"</a>
            </div>
        </nav>
        <Hero cv=cv.clone()/>
        <About summary=cv.summary.clone()/>
        <ExperienceSection entries=cv.experience/>
        <EducationSection entries=cv.education/>
        <SkillsSection categories=cv.skills/>
        <ProjectsSection projects=cv.projects/>
        <ContactForm/>
        <footer>
            <p>
                <span id="footer-name">{footer_name}</span>
                " © "
                <span id="current-year">{current_year()}</span>
            </p>
        </footer>
    }
}

/// Current path and referrer, read from the browser when running client-side.
#[cfg(feature = "hydrate")]
fn page_context() -> (String, String) {
    let window = web_sys::window();
    let page = window
        .as_ref()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    let referrer = window
        .and_then(|w| w.document())
        .map(|d| d.referrer())
        .unwrap_or_default();
    (page, referrer)
}

#[cfg(not(feature = "hydrate"))]
fn page_context() -> (String, String) {
    ("/".to_string(), String::new())
}

#[cfg(feature = "hydrate")]
fn screen_size() -> (Option<u32>, Option<u32>) {
    match web_sys::window().and_then(|w| w.screen().ok()) {
        Some(screen) => (
            screen.width().ok().map(|w| w as u32),
            screen.height().ok().map(|h| h as u32),
        ),
        None => (None, None),
    }
}

#[cfg(not(feature = "hydrate"))]
fn screen_size() -> (Option<u32>, Option<u32>) {
    (None, None)
}

#[cfg(feature = "hydrate")]
fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

#[cfg(not(feature = "hydrate"))]
fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Utc::now().year()
}
