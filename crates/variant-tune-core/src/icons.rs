//! Inline SVG icons for the toggle row.
//!
//! All glyphs are 20x20, stroke/fill `currentColor` so they pick up the
//! settings-panel text color from the host theme.

/// Call-out: exclamation mark in a circle.
pub const CALL_OUT: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><circle cx="12" cy="12" r="8.25" stroke="currentColor" stroke-width="2"/><path d="M12 8v4.5" stroke="currentColor" stroke-width="2" stroke-linecap="round"/><circle cx="12" cy="15.5" r="1.1" fill="currentColor"/></svg>"#;

/// Citation: double quotation marks.
pub const CITATION: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M10 8.2c-2 1-3.2 2.7-3.2 5v2.6h4.4v-4.4H8.7c.1-1.2.8-2.1 1.9-2.7L10 8.2Z" fill="currentColor"/><path d="M17 8.2c-2 1-3.2 2.7-3.2 5v2.6h4.4v-4.4h-2.5c.1-1.2.8-2.1 1.9-2.7L17 8.2Z" fill="currentColor"/></svg>"#;

/// Details: summary bar with a disclosure chevron.
pub const DETAILS: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M5 7.2h14" stroke="currentColor" stroke-width="2" stroke-linecap="round"/><path d="M9 12.2l3 3 3-3" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;

/// Extra small text: small capital A.
pub const TEXT_XS: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M9.5 15.7l2.5-6.2 2.5 6.2M10.4 13.8h3.2" stroke="currentColor" stroke-width="1.8" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;

/// Small text.
pub const TEXT_SM: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M9 16.2l3-7.4 3 7.4M10 14h4" stroke="currentColor" stroke-width="1.9" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;

/// Large text.
pub const TEXT_LG: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M8 17l4-9.8 4 9.8M9.4 14.1h5.2" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;

/// Extra large text.
pub const TEXT_XL: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M7.4 17.6l4.6-11.2 4.6 11.2M9 14.3h6" stroke="currentColor" stroke-width="2.1" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;

/// Huge text.
pub const TEXT_2XL: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M6.8 18.2l5.2-12.6 5.2 12.6M8.6 14.6h6.8" stroke="currentColor" stroke-width="2.2" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;
