//! The fixed variant catalog.
//!
//! Each supported variant is a `VariantDef`: a stable name (doubling as
//! the CSS-class suffix and `data-variant` attribute value), a default
//! display label, and an inline SVG icon. The catalog order is the
//! left-to-right display order of the toggle row.
//!
//! Localization is not baked in here: `title` is the literal label the
//! rendering layer hands to the host's translation service, so the
//! catalog itself stays free of host-service dependencies.

use crate::icons;

/// One supported variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantDef {
    /// Stable identifier. CSS-class suffix and `data-variant` value.
    pub name: &'static str,
    /// Default display label, also the translation key.
    pub title: &'static str,
    /// Inline SVG markup. Render-only.
    pub icon: &'static str,
}

/// CSS class prefix for the wrapper element. The active variant adds a
/// `variant-tune--<name>` modifier next to it.
pub const WRAPPER_CLASS: &str = "variant-tune";

/// CSS class for the toggle-row container built by `render()`.
pub const TOGGLE_ROW_CLASS: &str = "variant-tune__toggles";

/// Attribute carrying the variant name on each toggle control.
pub const DATA_ATTR: &str = "data-variant";

/// All supported variants, in display order.
///
/// Names are unique and fixed at build time. "No variant" is not an
/// entry; it is the empty persisted value.
pub const VARIANTS: [VariantDef; 8] = [
    VariantDef {
        name: "call-out",
        title: "Call-out",
        icon: icons::CALL_OUT,
    },
    VariantDef {
        name: "citation",
        title: "Citation",
        icon: icons::CITATION,
    },
    VariantDef {
        name: "details",
        title: "Details",
        icon: icons::DETAILS,
    },
    VariantDef {
        name: "text-xs",
        title: "Extra small text",
        icon: icons::TEXT_XS,
    },
    VariantDef {
        name: "text-sm",
        title: "Small text",
        icon: icons::TEXT_SM,
    },
    VariantDef {
        name: "text-lg",
        title: "Large text",
        icon: icons::TEXT_LG,
    },
    VariantDef {
        name: "text-xl",
        title: "Extra large text",
        icon: icons::TEXT_XL,
    },
    VariantDef {
        name: "text-2xl",
        title: "Huge text",
        icon: icons::TEXT_2XL,
    },
];

/// Look up a catalog entry by its stable name.
///
/// Unknown names (including the empty string) return `None`; persisted
/// values that match nothing are treated as "no variant" everywhere.
pub fn variant_by_name(name: &str) -> Option<&'static VariantDef> {
    VARIANTS.iter().find(|def| def.name == name)
}

/// The wrapper CSS class for a variant name, e.g. `variant-tune--call-out`.
pub fn variant_class(name: &str) -> String {
    format!("{WRAPPER_CLASS}--{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_names_unique() {
        for (i, a) in VARIANTS.iter().enumerate() {
            for b in &VARIANTS[i + 1..] {
                assert_ne!(a.name, b.name, "duplicate catalog name");
            }
        }
    }

    #[test]
    fn test_catalog_order() {
        let names: Vec<_> = VARIANTS.iter().map(|def| def.name).collect();
        assert_eq!(
            names,
            [
                "call-out", "citation", "details", "text-xs", "text-sm", "text-lg", "text-xl",
                "text-2xl"
            ]
        );
    }

    #[test]
    fn test_lookup() {
        assert_eq!(variant_by_name("citation").map(|d| d.title), Some("Citation"));
        assert!(variant_by_name("bogus").is_none());
        assert!(variant_by_name("").is_none());
    }

    #[test]
    fn test_variant_class_shape() {
        assert_eq!(variant_class("call-out"), "variant-tune--call-out");
        assert_eq!(variant_class("text-2xl"), "variant-tune--text-2xl");
    }

    #[test]
    fn test_icons_present() {
        for def in &VARIANTS {
            assert!(def.icon.starts_with("<svg"), "{} icon is not svg", def.name);
            assert!(!def.title.is_empty());
        }
    }
}
