//! JsVariantTune - the tune wrapper for JavaScript hosts.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Element, Node};

use variant_tune_browser::VariantTune;
use variant_tune_core::{EditorExtension, ExtensionKind, TuneConfig};

use crate::host::{JsBlock, JsHost};
use crate::types::JsTuneOptions;

/// The variant tune exposed to JavaScript.
///
/// One instance per block. Wire it up with `setOnChange` (and optionally
/// `setTooltipHandler`), mount `render()` in the settings panel and
/// `wrap()` as the block root, and read `save()` at serialization time.
#[wasm_bindgen]
pub struct JsVariantTune {
    tune: VariantTune,
    host: Rc<JsHost>,
    block: Rc<JsBlock>,
}

#[wasm_bindgen]
impl JsVariantTune {
    /// Create a tune for one block. `options` may be omitted entirely.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<JsVariantTune, JsError> {
        let options: JsTuneOptions = if options.is_undefined() || options.is_null() {
            JsTuneOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options)
                .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))?
        };

        let host = Rc::new(JsHost::from_options(&options));
        let block = Rc::new(JsBlock::new());
        let tune = VariantTune::new(
            host.clone(),
            options.saved_variant.as_deref(),
            TuneConfig::default(),
            block.clone(),
        );
        Ok(Self { tune, host, block })
    }

    /// Whether this extension is a per-block tune (it is), as opposed to
    /// a standalone block type.
    #[wasm_bindgen(js_name = isTune)]
    pub fn is_tune() -> bool {
        matches!(VariantTune::KIND, ExtensionKind::Tune)
    }

    /// Set the callback invoked after every variant change.
    #[wasm_bindgen(js_name = setOnChange)]
    pub fn set_on_change(&self, callback: js_sys::Function) {
        self.block.set_on_change(callback);
    }

    /// Set the tooltip handler, called as `(element, label, { placement,
    /// hidingDelay })` for each toggle at render time. Without one,
    /// toggles simply render without tooltips.
    #[wasm_bindgen(js_name = setTooltipHandler)]
    pub fn set_tooltip_handler(&self, callback: js_sys::Function) {
        self.host.set_tooltip_handler(callback);
    }

    /// Build the toggle row for the block settings panel.
    pub fn render(&self) -> Result<Element, JsError> {
        self.tune
            .render()
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Create the wrapper element around the block's content.
    pub fn wrap(&self, content: &Node) -> Result<Element, JsError> {
        self.tune
            .wrap(content)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// The persisted variant value, empty string if none.
    pub fn save(&self) -> String {
        self.tune.save().to_string()
    }
}
