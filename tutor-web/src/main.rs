//! Docs Tutor chat widget
//!
//! Floating chat panel embedded into documentation pages. The page only needs
//! to load the wasm bundle; optional configuration comes from the mount
//! element:
//!
//! ```html
//! <div id="docs-tutor" data-api-url="https://tutor.example.com" data-chapter-slug="module-1/nodes"></div>
//! ```
//!
//! Without a mount element the widget attaches to `<body>` with defaults.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
pub mod components;
pub mod services;
pub mod state;
pub mod utils;

use app::App;
use utils::constants::MOUNT_ELEMENT_ID;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());

    let mount = find_mount_element();
    let config = utils::host::read_widget_config(mount.as_deref());
    log::info!(
        "Docs tutor starting: endpoint={} chapter={:?}",
        config.chat_endpoint(),
        config.chapter_slug
    );

    match mount {
        Some(element) => {
            leptos::mount::mount_to(element, move || view! { <App config=config.clone()/> }).forget();
        }
        None => {
            log::debug!("No #{} element, mounting to body", MOUNT_ELEMENT_ID);
            leptos::mount::mount_to_body(move || view! { <App config=config.clone()/> });
        }
    }
}

/// The host page's dedicated mount point, if it has one.
fn find_mount_element() -> Option<HtmlElement> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(MOUNT_ELEMENT_ID)?;
    match element.dyn_into::<HtmlElement>() {
        Ok(html) => Some(html),
        Err(_) => {
            log::warn!("#{} is not an HTML element, ignoring it", MOUNT_ELEMENT_ID);
            None
        }
    }
}
