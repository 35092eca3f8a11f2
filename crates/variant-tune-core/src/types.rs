//! Contract types shared with the host editor.

use serde::{Deserialize, Serialize};

/// How an extension plugs into the host editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionKind {
    /// A standalone block type with its own content model.
    Block,
    /// A per-block settings extension contributing controls to the
    /// block's settings panel.
    Tune,
}

/// Static capability marker for editor extensions.
///
/// Purely a contract flag; hosts read `KIND` to decide where the
/// extension mounts. No runtime behavior hangs off it.
pub trait EditorExtension {
    /// What kind of extension this is.
    const KIND: ExtensionKind;
}

/// Per-block tune configuration passed by the host at construction.
///
/// Reserved for future options; currently carries nothing. Unknown
/// fields are ignored so older builds tolerate newer host configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TuneConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_tolerates_unknown_fields() {
        let config: TuneConfig = serde_json::from_str(r#"{"future":"option"}"#).unwrap();
        let _ = config;
    }

    #[test]
    fn test_config_default_from_empty() {
        let config: TuneConfig = serde_json::from_str("{}").unwrap();
        let _ = config;
    }
}
