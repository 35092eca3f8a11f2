//! Host/block adapters bridging JavaScript callbacks to the capability
//! contract of `variant-tune-browser`.

use std::cell::RefCell;
use std::collections::HashMap;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use variant_tune_browser::{
    BlockHandle, HostApi, StyleTokens, TooltipOptions, TooltipPlacement,
};

use crate::types::JsTuneOptions;

/// Host services backed by the JS-supplied options and callbacks.
pub(crate) struct JsHost {
    tokens: StyleTokens,
    labels: HashMap<String, String>,
    tooltip: RefCell<Option<js_sys::Function>>,
}

impl JsHost {
    pub(crate) fn from_options(options: &JsTuneOptions) -> Self {
        let mut tokens = StyleTokens::default();
        if let Some(class) = &options.settings_button_class {
            tokens.settings_button = class.clone();
        }
        if let Some(class) = &options.settings_button_active_class {
            tokens.settings_button_active = class.clone();
        }
        Self {
            tokens,
            labels: options.labels.clone().unwrap_or_default(),
            tooltip: RefCell::new(None),
        }
    }

    pub(crate) fn set_tooltip_handler(&self, callback: js_sys::Function) {
        *self.tooltip.borrow_mut() = Some(callback);
    }
}

impl HostApi for JsHost {
    fn translate(&self, label: &str) -> String {
        self.labels
            .get(label)
            .cloned()
            .unwrap_or_else(|| label.to_string())
    }

    fn tooltip_on_hover(&self, target: &Element, label: &str, options: &TooltipOptions) {
        let Some(callback) = self.tooltip.borrow().clone() else {
            return;
        };

        // Pass options as a plain `{ placement, hidingDelay }` object.
        let opts = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &opts,
            &JsValue::from_str("placement"),
            &JsValue::from_str(placement_name(options.placement)),
        );
        let _ = js_sys::Reflect::set(
            &opts,
            &JsValue::from_str("hidingDelay"),
            &JsValue::from_f64(options.hiding_delay_ms as f64),
        );

        let this = JsValue::null();
        let _ = callback.call3(&this, target, &JsValue::from_str(label), &opts);
    }

    fn style_tokens(&self) -> StyleTokens {
        self.tokens.clone()
    }
}

/// Block handle dispatching change notifications to a JS callback.
pub(crate) struct JsBlock {
    on_change: RefCell<Option<js_sys::Function>>,
}

impl JsBlock {
    pub(crate) fn new() -> Self {
        Self {
            on_change: RefCell::new(None),
        }
    }

    pub(crate) fn set_on_change(&self, callback: js_sys::Function) {
        *self.on_change.borrow_mut() = Some(callback);
    }
}

impl BlockHandle for JsBlock {
    fn dispatch_change(&self) {
        if let Some(callback) = self.on_change.borrow().clone() {
            let this = JsValue::null();
            let _ = callback.call0(&this);
        }
    }
}

fn placement_name(placement: TooltipPlacement) -> &'static str {
    match placement {
        TooltipPlacement::Top => "top",
        TooltipPlacement::Bottom => "bottom",
        TooltipPlacement::Left => "left",
        TooltipPlacement::Right => "right",
    }
}
