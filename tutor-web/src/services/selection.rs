//! Document text-selection listener
//!
//! Registers a `mouseup` handler on the document that feeds the current
//! selection to the [`SelectionObserver`]. The handler is removed when the
//! listener is dropped.

use lib_core::{SelectionObserver, SessionHandle};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, MouseEvent};

const SELECTION_END_EVENT: &str = "mouseup";

pub struct SelectionListener {
    document: Document,
    callback: Closure<dyn FnMut(MouseEvent)>,
}

impl SelectionListener {
    /// Start observing selections for `session`.
    ///
    /// Returns `None` outside an interactive document (no window or
    /// document, or not running in a browser); nothing is registered then.
    pub fn attach<H>(session: H) -> Option<Self>
    where
        H: SessionHandle + 'static,
    {
        if !cfg!(target_arch = "wasm32") {
            return None;
        }

        let document = web_sys::window()?.document()?;
        let callback = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
            SelectionObserver.on_selection_end(&read_document_selection, &session);
        });

        if let Err(e) = document.add_event_listener_with_callback(SELECTION_END_EVENT, callback.as_ref().unchecked_ref()) {
            log::warn!("Could not observe text selection: {:?}", e);
            return None;
        }

        Some(Self { document, callback })
    }
}

impl Drop for SelectionListener {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback(SELECTION_END_EVENT, self.callback.as_ref().unchecked_ref());
    }
}

/// Plain text of the window's current selection.
fn read_document_selection() -> Option<String> {
    let selection = web_sys::window()?.get_selection().ok()??;
    Some(String::from(selection.to_string()))
}
