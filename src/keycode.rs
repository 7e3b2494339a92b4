//! Keycode descriptors.
//!
//! A [`Keycode`] describes one symbolic keycode: its canonical id, how to show
//! it and which other names refer to it. Masked keycodes take another keycode
//! as parameter and use the template id `OUTER(kc)`:
//!
//! ```text
//! KC_A          → plain keycode
//! LSFT(kc)      → masked template, outer prefix "LSFT"
//! LSFT(KC_A)    → composite id, see CompositeId
//! ```

use std::fmt;

/// Placeholder for the inner keycode inside a masked template.
pub const MASK_PLACEHOLDER: &str = "kc";

const MASK_SUFFIX: &str = "(kc)";

/// Strip the `(kc)` template suffix; plain ids come back unchanged.
pub fn outer_prefix(id: &str) -> &str {
    id.strip_suffix(MASK_SUFFIX).unwrap_or(id)
}

/// Immutable description of one keycode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keycode {
    id: String,
    label: String,
    tooltip: Option<String>,
    masked: bool,
    printable: Option<char>,
    aliases: Vec<String>,
    recorder_aliases: Vec<String>,
}

impl Keycode {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            aliases: vec![id.clone()],
            id,
            label: label.into(),
            tooltip: None,
            masked: false,
            printable: None,
            recorder_aliases: Vec::new(),
        }
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Mark as a masked template. The id must end in `(kc)`; the registry
    /// rejects it otherwise.
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn with_printable(mut self, printable: char) -> Self {
        self.printable = Some(printable);
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        let alias = alias.into();
        if !self.aliases.contains(&alias) {
            self.aliases.push(alias);
        }
        self
    }

    pub fn with_recorder_alias(mut self, alias: impl Into<String>) -> Self {
        self.recorder_aliases.push(alias.into());
        self
    }

    /// Canonical id, e.g. `KC_A` or `LSFT(kc)`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Id without the `(kc)` suffix, the prefix used in composite ids.
    pub fn outer_id(&self) -> &str {
        outer_prefix(&self.id)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    /// Character produced without modifiers, for printable keys.
    pub fn printable(&self) -> Option<char> {
        self.printable
    }

    /// All ids resolving to this keycode, canonical id first.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn recorder_aliases(&self) -> &[String] {
        &self.recorder_aliases
    }

    /// True if the id follows the `OUTER(kc)` template form.
    pub fn has_mask_template(&self) -> bool {
        self.id.ends_with(MASK_SUFFIX) && self.id.len() > MASK_SUFFIX.len()
    }
}

/// Compile-time keycode definition for the static catalog.
///
/// Built with `const fn` setters so whole groups can live in `const` slices.
#[derive(Debug, Clone, Copy)]
pub struct KeycodeDef {
    pub id: &'static str,
    pub label: &'static str,
    pub tooltip: Option<&'static str>,
    pub masked: bool,
    pub printable: Option<char>,
    pub aliases: &'static [&'static str],
    pub recorder_aliases: &'static [&'static str],
}

impl KeycodeDef {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            tooltip: None,
            masked: false,
            printable: None,
            aliases: &[],
            recorder_aliases: &[],
        }
    }

    pub const fn tooltip(self, tooltip: &'static str) -> Self {
        Self {
            tooltip: Some(tooltip),
            ..self
        }
    }

    pub const fn masked(self) -> Self {
        Self {
            masked: true,
            ..self
        }
    }

    pub const fn printable(self, printable: char) -> Self {
        Self {
            printable: Some(printable),
            ..self
        }
    }

    pub const fn aliases(self, aliases: &'static [&'static str]) -> Self {
        Self { aliases, ..self }
    }

    pub const fn recorder(self, recorder_aliases: &'static [&'static str]) -> Self {
        Self {
            recorder_aliases,
            ..self
        }
    }
}

impl From<&KeycodeDef> for Keycode {
    fn from(def: &KeycodeDef) -> Self {
        let mut keycode = Keycode::new(def.id, def.label);
        keycode.tooltip = def.tooltip.map(str::to_string);
        keycode.masked = def.masked;
        keycode.printable = def.printable;
        for alias in def.aliases {
            keycode = keycode.with_alias(*alias);
        }
        keycode.recorder_aliases = def.recorder_aliases.iter().map(|a| a.to_string()).collect();
        keycode
    }
}

/// A masked composite id split into its outer prefix and inner id.
///
/// `LSFT(KC_A)` is `CompositeId { outer: "LSFT", inner: "KC_A" }`. Only the
/// first `(` splits, so nested composites keep their inner text intact:
/// `LSFT(LCTL(KC_A))` has inner `LCTL(KC_A)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositeId<'a> {
    pub outer: &'a str,
    pub inner: &'a str,
}

impl<'a> CompositeId<'a> {
    pub fn new(outer: &'a str, inner: &'a str) -> Self {
        Self { outer, inner }
    }

    /// Split `OUTER(INNER)` syntax without checking that `OUTER` is masked.
    pub fn split(id: &'a str) -> Option<Self> {
        let open = id.find('(')?;
        let inner = id[open + 1..].strip_suffix(')')?;
        let outer = &id[..open];
        if outer.is_empty() {
            return None;
        }
        Some(Self { outer, inner })
    }

    /// Compose from a masked template (`LSFT(kc)`) and an inner id.
    pub fn from_template(template: &'a str, inner: &'a str) -> Self {
        Self {
            outer: outer_prefix(template),
            inner,
        }
    }
}

impl fmt::Display for CompositeId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.outer, self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Keycode tests ---

    #[test]
    fn test_new_keycode_aliases_itself() {
        let kc = Keycode::new("KC_ENTER", "Enter").with_alias("KC_ENT");
        assert_eq!(kc.aliases(), &["KC_ENTER".to_string(), "KC_ENT".to_string()]);
        assert!(!kc.is_masked());
        assert_eq!(kc.tooltip(), None);
    }

    #[test]
    fn test_duplicate_alias_ignored() {
        let kc = Keycode::new("KC_A", "A").with_alias("KC_A");
        assert_eq!(kc.aliases().len(), 1);
    }

    #[test]
    fn test_outer_id() {
        let kc = Keycode::new("LSFT(kc)", "LSft\n(kc)").masked();
        assert_eq!(kc.outer_id(), "LSFT");
        assert!(kc.has_mask_template());
        assert_eq!(Keycode::new("KC_A", "A").outer_id(), "KC_A");
        assert!(!Keycode::new("(kc)", "").has_mask_template());
    }

    #[test]
    fn test_def_conversion() {
        const DEF: KeycodeDef = KeycodeDef::new("KC_GRAVE", "~\n`")
            .printable('`')
            .recorder(&["`"])
            .aliases(&["KC_GRV", "KC_ZKHK"])
            .tooltip("Grave accent");
        let kc = Keycode::from(&DEF);
        assert_eq!(kc.id(), "KC_GRAVE");
        assert_eq!(kc.printable(), Some('`'));
        assert_eq!(kc.aliases().len(), 3);
        assert_eq!(kc.recorder_aliases(), &["`".to_string()]);
        assert_eq!(kc.tooltip(), Some("Grave accent"));
    }

    // --- CompositeId tests ---

    #[test]
    fn test_composite_split() {
        let c = CompositeId::split("LSFT(KC_A)").unwrap();
        assert_eq!(c.outer, "LSFT");
        assert_eq!(c.inner, "KC_A");
    }

    #[test]
    fn test_composite_split_nested() {
        let c = CompositeId::split("LSFT(LCTL(KC_A))").unwrap();
        assert_eq!(c.outer, "LSFT");
        assert_eq!(c.inner, "LCTL(KC_A)");
    }

    #[test]
    fn test_composite_split_rejects() {
        assert!(CompositeId::split("KC_A").is_none());
        assert!(CompositeId::split("LSFT(KC_A").is_none());
        assert!(CompositeId::split("(KC_A)").is_none());
    }

    #[test]
    fn test_composite_display() {
        let c = CompositeId::from_template("LT3(kc)", "KC_SPACE");
        assert_eq!(c.to_string(), "LT3(KC_SPACE)");
        // The formatter does not care how often "kc" appears in the names
        let c = CompositeId::new("LCTL", "KC_KANA");
        assert_eq!(c.to_string(), "LCTL(KC_KANA)");
    }
}
