use web_sys::{Document, Window};

/// Retrieve the global `window`, when running in a browser context.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document for DOM interactions, when one exists.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Set the page title. Silently skipped outside a browser context.
pub fn set_document_title(title: &str) {
    if let Some(doc) = document() {
        doc.set_title(title);
    }
}
