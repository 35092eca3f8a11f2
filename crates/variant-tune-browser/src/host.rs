//! The host capability contract.
//!
//! The tune needs a handful of services from the host editor: label
//! translation, tooltip registration, the settings-panel style tokens,
//! and a way to report that the block changed. This module names exactly
//! those capabilities; the component depends on nothing else from the
//! host.

use web_sys::Element;

/// Where a tooltip appears relative to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TooltipPlacement {
    /// Above the target.
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

/// Tooltip behavior passed along when registering a hover tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipOptions {
    pub placement: TooltipPlacement,
    /// Delay before the tooltip hides once the pointer leaves, in ms.
    pub hiding_delay_ms: u32,
}

/// CSS class names from the host's settings-panel style contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTokens {
    /// Class for a settings button in its resting state.
    pub settings_button: String,
    /// Class added while a settings button is active.
    pub settings_button_active: String,
}

impl Default for StyleTokens {
    fn default() -> Self {
        Self {
            settings_button: "settings-button".into(),
            settings_button_active: "settings-button--active".into(),
        }
    }
}

/// Services the host editor provides to the tune.
pub trait HostApi {
    /// Resolve a literal UI label to its localized form.
    fn translate(&self, label: &str) -> String;

    /// Attach a hover tooltip to `target`. Rendering and timing are
    /// owned by the host; the tune never awaits it.
    fn tooltip_on_hover(&self, target: &Element, label: &str, options: &TooltipOptions);

    /// The settings-panel style tokens. Read once at construction.
    fn style_tokens(&self) -> StyleTokens;
}

/// Handle to the block this tune instance is attached to.
pub trait BlockHandle {
    /// Inform the host that the block's content changed, feeding its
    /// history/sync pipeline.
    fn dispatch_change(&self);
}
