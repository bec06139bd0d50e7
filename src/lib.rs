pub mod app;
pub mod error;
pub mod cv_source;
pub mod models {
    pub mod cv;
}
pub mod db {
    pub mod models;
    pub mod repository;
}
pub mod api {
    pub mod analytics;
    pub mod contact;
    pub mod cv_data;
    pub mod errors;
    #[cfg(feature = "ssr")]
    pub mod health;
}
pub mod components {
    pub mod contact_form;
    pub mod education;
    pub mod experience;
    pub mod hero;
    pub mod projects;
    pub mod skills;
}
#[cfg(feature = "ssr")]
pub mod state;

/// Client-side entry point, invoked by the JS shim once the WASM bundle loads.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
