//! Types exposed to JavaScript via wasm-bindgen.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tsify_next::Tsify;

/// Options for constructing a tune instance from JavaScript.
///
/// Everything is optional; an absent options object yields a tune with
/// no prior variant and the default style tokens.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct JsTuneOptions {
    /// Previously persisted variant value for this block.
    #[serde(default)]
    pub saved_variant: Option<String>,

    /// Override for the settings-button class from the host theme.
    #[serde(default)]
    pub settings_button_class: Option<String>,

    /// Override for the active settings-button class.
    #[serde(default)]
    pub settings_button_active_class: Option<String>,

    /// Localized labels keyed by the default English label, consulted
    /// when rendering tooltips. Missing keys fall back to the default.
    #[serde(default)]
    pub labels: Option<HashMap<String, String>>,
}
