//! The toggle state machine.
//!
//! A block has either no variant or exactly one, so the whole machine is
//! a single string: empty means "no variant", anything else is a variant
//! name. The in-memory value is the single source of truth for click
//! decisions; DOM classes are a projection of it, never an input.

use smol_str::SmolStr;

use crate::catalog::{VariantDef, variant_by_name};

/// Per-block toggle state.
///
/// Holds the persisted variant value. Unknown values (anything that is
/// not a catalog name) are kept verbatim: they match no toggle and no
/// wrapper class, and are only discarded when the next click replaces
/// them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantState {
    current: SmolStr,
}

impl VariantState {
    /// Create state from the host-supplied prior value, if any.
    pub fn new(saved: Option<&str>) -> Self {
        Self {
            current: SmolStr::new(saved.unwrap_or_default()),
        }
    }

    /// The current persisted value. Empty string means "no variant".
    pub fn value(&self) -> &str {
        &self.current
    }

    /// Whether no variant is selected.
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Whether the toggle for `name` should show as active.
    pub fn is_active(&self, name: &str) -> bool {
        !name.is_empty() && self.current == name
    }

    /// The catalog entry for the current value, if it names one.
    pub fn active_def(&self) -> Option<&'static VariantDef> {
        variant_by_name(&self.current)
    }

    /// Replace the persisted value outright.
    pub fn set(&mut self, value: &str) {
        self.current = SmolStr::new(value);
    }

    /// Apply a click on the toggle named `name` and return the new value.
    ///
    /// Clicking the active toggle clears the selection; clicking any
    /// other toggle selects it. Mutual exclusivity is implicit: a single
    /// value can only ever equal one name.
    pub fn toggle(&mut self, name: &str) -> &str {
        if self.is_active(name) {
            self.current = SmolStr::default();
        } else {
            self.current = SmolStr::new(name);
        }
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VARIANTS;

    #[test]
    fn test_round_trip() {
        assert_eq!(VariantState::new(None).value(), "");
        assert_eq!(VariantState::new(Some("")).value(), "");
        assert_eq!(VariantState::new(Some("citation")).value(), "citation");
    }

    #[test]
    fn test_toggle_on_from_empty() {
        let mut state = VariantState::new(None);
        assert_eq!(state.toggle("call-out"), "call-out");
        assert!(state.is_active("call-out"));
        assert_eq!(state.active_def().map(|d| d.name), Some("call-out"));
    }

    #[test]
    fn test_toggle_off_returns_to_empty() {
        let mut state = VariantState::new(Some("details"));
        assert_eq!(state.toggle("details"), "");
        assert!(state.is_empty());
        assert!(state.active_def().is_none());
    }

    #[test]
    fn test_switch_between_variants() {
        let mut state = VariantState::new(Some("text-sm"));
        // The clicked toggle reads as inactive, so it becomes the value
        // directly; no intermediate "no variant" state.
        assert_eq!(state.toggle("text-xl"), "text-xl");
        assert!(state.is_active("text-xl"));
        assert!(!state.is_active("text-sm"));
    }

    #[test]
    fn test_unknown_value_preserved_until_click() {
        let mut state = VariantState::new(Some("bogus"));
        assert_eq!(state.value(), "bogus");
        assert!(state.active_def().is_none());
        for def in &VARIANTS {
            assert!(!state.is_active(def.name));
        }
        // First click replaces the unknown value.
        assert_eq!(state.toggle("citation"), "citation");
    }

    #[test]
    fn test_empty_never_active() {
        let state = VariantState::new(None);
        assert!(!state.is_active(""));
    }

    #[test]
    fn test_reads_are_side_effect_free() {
        let state = VariantState::new(Some("call-out"));
        for _ in 0..3 {
            assert_eq!(state.value(), "call-out");
            assert!(state.is_active("call-out"));
        }
    }

    #[test]
    fn test_single_selection_over_click_sequences() {
        // After any click sequence, at most one catalog entry is active
        // and it matches value().
        let mut state = VariantState::new(None);
        let clicks = [
            "call-out", "call-out", "citation", "text-xs", "text-xs", "details", "text-2xl",
            "details", "details",
        ];
        for name in clicks {
            state.toggle(name);
            let active: Vec<_> = VARIANTS
                .iter()
                .filter(|def| state.is_active(def.name))
                .collect();
            assert!(active.len() <= 1);
            match active.first() {
                Some(def) => assert_eq!(def.name, state.value()),
                None => assert_eq!(state.value(), ""),
            }
        }
    }

    #[test]
    fn test_all_states_reachable_in_one_click() {
        // From any selected variant, one click reaches "none" (same
        // toggle) or any other variant (that toggle).
        for from in &VARIANTS {
            for to in &VARIANTS {
                let mut state = VariantState::new(Some(from.name));
                state.toggle(to.name);
                if from.name == to.name {
                    assert_eq!(state.value(), "");
                } else {
                    assert_eq!(state.value(), to.name);
                }
            }
        }
    }
}
