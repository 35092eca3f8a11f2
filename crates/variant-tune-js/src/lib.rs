//! WASM bindings for the variant tune.
//!
//! Exposes the tune to a JavaScript block editor: the host constructs
//! one `VariantTune` per block, mounts `render()` in its settings panel
//! and `wrap()` as the block's visual root, and reads `save()` back at
//! serialization time.

mod host;
mod tune;
mod types;

pub use tune::*;
pub use types::*;

use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}
