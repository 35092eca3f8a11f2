//! Error types for the DOM layer.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors from building the tune's DOM.
///
/// These only cover the DOM being unavailable or refusing an element
/// operation; behavioral edge cases (unknown persisted values, clicks
/// outside any toggle, an unrendered panel) are silent no-ops by design.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TuneError {
    /// No `window.document` in this environment.
    #[error("no document available")]
    NoDocument,

    /// A DOM operation failed.
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for TuneError {
    fn from(value: JsValue) -> Self {
        TuneError::Dom(format!("{value:?}"))
    }
}
