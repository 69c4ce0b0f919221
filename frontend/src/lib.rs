use leptos::*;

mod components;
pub mod config;
pub mod logging;

pub use components::error::{meal_create_fallback, ErrorNotice, MealCreateBoundary};

/// Panic hook, runtime config and logging for the hosting app.
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn init_runtime() {
    console_error_panic_hook::set_once();
    let cfg = config::load();
    logging::init(&cfg);
    log::info!("Meals frontend runtime initialized");
}

/// Mounts the notice on its own, for hosts that replace the page on failure.
pub fn mount_error_notice() {
    mount_to_body(|| view! { <ErrorNotice/> });
}
