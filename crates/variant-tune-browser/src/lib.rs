//! Browser DOM layer for the variant tune.
//!
//! This crate renders the toggle row, owns the block wrapper, and keeps
//! persisted state, wrapper CSS, and toggle visuals mutually consistent.
//! It assumes a `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `host`: the capability contract the host editor must provide
//! - `tune`: the `VariantTune` component (render / wrap / save)
//! - `error`: DOM-layer error type
//!
//! # Re-exports
//!
//! This crate re-exports `variant-tune-core` for convenience, so
//! consumers only need to depend on `variant-tune-browser`.

// Re-export core crate
pub use variant_tune_core;
pub use variant_tune_core::*;

pub mod error;
pub mod host;
pub mod tune;

pub use error::TuneError;
pub use host::{BlockHandle, HostApi, StyleTokens, TooltipOptions, TooltipPlacement};
pub use tune::VariantTune;
