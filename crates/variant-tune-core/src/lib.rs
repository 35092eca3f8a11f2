//! variant-tune-core: Pure Rust logic for the block variant tune.
//!
//! This crate provides:
//! - The fixed variant catalog (call-out, citation, details, and the
//!   text-size presets) with stable names, default labels, and icons
//! - `VariantState` - the single-select-or-none toggle state machine
//! - `TuneConfig` - reserved per-block configuration
//! - The `EditorExtension` capability marker distinguishing per-block
//!   tunes from standalone block types
//!
//! No DOM or wasm dependencies live here; the browser layer is in
//! `variant-tune-browser`.

pub mod catalog;
pub mod icons;
pub mod state;
pub mod types;

pub use catalog::{
    DATA_ATTR, TOGGLE_ROW_CLASS, VARIANTS, VariantDef, WRAPPER_CLASS, variant_by_name,
    variant_class,
};
pub use smol_str::SmolStr;
pub use state::VariantState;
pub use types::{EditorExtension, ExtensionKind, TuneConfig};
