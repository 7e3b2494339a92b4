// Keycode registry
// Id and raw-value lookup for the active protocol, rebuilt per device

use crate::catalog::{self, KeycodeGroup};
use crate::error::KeycodeError;
use crate::expression::{DefaultExpressionParser, ExpressionParser, SymbolTable};
use crate::generator::{self, Capabilities};
use crate::keycode::{outer_prefix, CompositeId, Keycode, MASK_PLACEHOLDER};
use crate::protocol::{Protocol, ProtocolTable};
use arc_swap::ArcSwap;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Id that the bare `kc` placeholder resolves to.
const NO_KEYCODE: &str = "KC_NO";

/// Collects descriptors for one generation.
///
/// Descriptors are registered group by group in priority order; registering
/// an id again overwrites the earlier entry.
pub struct GenerationBuilder {
    table: &'static ProtocolTable,
    groups: Vec<(KeycodeGroup, Vec<Arc<Keycode>>)>,
    by_id: HashMap<String, Arc<Keycode>>,
    by_raw: HashMap<u16, Arc<Keycode>>,
    by_recorder_alias: HashMap<String, Arc<Keycode>>,
    masked_outer_prefixes: HashSet<String>,
    masked_raw: HashSet<u16>,
}

impl GenerationBuilder {
    pub fn new(protocol: Protocol) -> Self {
        Self {
            table: protocol.table(),
            groups: Vec::new(),
            by_id: HashMap::new(),
            by_raw: HashMap::new(),
            by_recorder_alias: HashMap::new(),
            masked_outer_prefixes: HashSet::new(),
            masked_raw: HashSet::new(),
        }
    }

    /// Register one descriptor under `group`.
    pub fn register(&mut self, group: KeycodeGroup, keycode: Arc<Keycode>) -> Result<(), KeycodeError> {
        if keycode.is_masked() && !keycode.has_mask_template() {
            return Err(KeycodeError::InvalidMaskTemplate {
                id: keycode.id().to_string(),
            });
        }

        let raw = self.table.get(keycode.id()).ok_or_else(|| KeycodeError::ResolutionMiss {
            id: keycode.id().to_string(),
            protocol: self.table.protocol(),
        })?;

        for alias in keycode.recorder_aliases() {
            if let Some(existing) = self.by_recorder_alias.get(alias) {
                if existing.id() != keycode.id() {
                    return Err(KeycodeError::DuplicateRecorderAlias {
                        alias: alias.clone(),
                        existing: existing.id().to_string(),
                        id: keycode.id().to_string(),
                    });
                }
            }
        }
        for alias in keycode.recorder_aliases() {
            self.by_recorder_alias.insert(alias.clone(), keycode.clone());
        }

        for alias in keycode.aliases() {
            self.by_id.insert(alias.clone(), keycode.clone());
        }
        if keycode.is_masked() {
            for alias in keycode.aliases() {
                self.by_id.insert(outer_prefix(alias).to_string(), keycode.clone());
            }
            self.masked_outer_prefixes.insert(keycode.outer_id().to_string());
            self.masked_raw.insert(raw);
        }
        self.by_raw.insert(raw, keycode.clone());

        match self.groups.last_mut() {
            Some((last, keycodes)) if *last == group => keycodes.push(keycode),
            _ => self.groups.push((group, vec![keycode])),
        }
        Ok(())
    }

    pub fn register_group<I>(&mut self, group: KeycodeGroup, keycodes: I) -> Result<(), KeycodeError>
    where
        I: IntoIterator<Item = Arc<Keycode>>,
    {
        for keycode in keycodes {
            self.register(group, keycode)?;
        }
        Ok(())
    }

    fn finish(self, version: u64, capabilities: Capabilities, parser: Arc<dyn ExpressionParser>) -> Generation {
        Generation {
            version,
            capabilities,
            table: self.table,
            groups: self.groups,
            by_id: self.by_id,
            by_raw: self.by_raw,
            by_recorder_alias: self.by_recorder_alias,
            masked_outer_prefixes: self.masked_outer_prefixes,
            masked_raw: self.masked_raw,
            parser,
        }
    }
}

/// One complete, immutable registry state.
///
/// Readers hold an `Arc<Generation>`; a rebuild never mutates a published
/// generation.
pub struct Generation {
    version: u64,
    capabilities: Capabilities,
    pub(crate) table: &'static ProtocolTable,
    groups: Vec<(KeycodeGroup, Vec<Arc<Keycode>>)>,
    by_id: HashMap<String, Arc<Keycode>>,
    pub(crate) by_raw: HashMap<u16, Arc<Keycode>>,
    by_recorder_alias: HashMap<String, Arc<Keycode>>,
    masked_outer_prefixes: HashSet<String>,
    pub(crate) masked_raw: HashSet<u16>,
    pub(crate) parser: Arc<dyn ExpressionParser>,
}

impl Generation {
    /// Build a generation from the static catalog plus the groups derived
    /// from `capabilities`.
    pub fn build(
        version: u64,
        capabilities: Capabilities,
        parser: Arc<dyn ExpressionParser>,
    ) -> Result<Self, KeycodeError> {
        let mut dynamic = generator::generate(&capabilities)?;
        let mut builder = GenerationBuilder::new(capabilities.protocol);

        for group in KeycodeGroup::ALL {
            if group.is_dynamic() {
                if let Some(pos) = dynamic.iter().position(|(g, _)| *g == group) {
                    let (_, keycodes) = dynamic.swap_remove(pos);
                    builder.register_group(group, keycodes)?;
                }
            } else {
                builder.register_group(group, catalog::static_group(group).iter().cloned())?;
            }
        }

        Ok(builder.finish(version, capabilities, parser))
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn protocol(&self) -> Protocol {
        self.table.protocol()
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Exact id or alias lookup. The bare `kc` placeholder means `KC_NO`.
    pub fn find(&self, id: &str) -> Option<&Arc<Keycode>> {
        self.by_id.get(id).or_else(|| {
            if id == MASK_PLACEHOLDER {
                self.by_id.get(NO_KEYCODE)
            } else {
                None
            }
        })
    }

    /// Parse `OUTER(INNER)` where `OUTER` is a registered masked prefix.
    pub fn parse_composite<'a>(&self, id: &'a str) -> Option<CompositeId<'a>> {
        CompositeId::split(id).filter(|c| self.masked_outer_prefixes.contains(c.outer))
    }

    /// Outer descriptor of a masked composite, otherwise `find`.
    pub fn find_outer(&self, id: &str) -> Option<&Arc<Keycode>> {
        match self.parse_composite(id) {
            Some(composite) => self.by_id.get(composite.outer),
            None => self.find(id),
        }
    }

    /// Inner descriptor of a masked composite, otherwise `find`.
    pub fn find_inner(&self, id: &str) -> Option<&Arc<Keycode>> {
        match self.parse_composite(id) {
            Some(composite) => self.find(composite.inner),
            None => self.find(id),
        }
    }

    pub fn find_by_recorder_alias(&self, alias: &str) -> Option<&Arc<Keycode>> {
        self.by_recorder_alias.get(alias)
    }

    /// Descriptor currently rendered for a raw value.
    pub fn find_by_raw(&self, raw: u16) -> Option<&Arc<Keycode>> {
        self.by_raw.get(&raw)
    }

    /// Display label; unknown ids are shown as themselves.
    pub fn label<'a>(&'a self, id: &'a str) -> &'a str {
        self.find_outer(id).map_or(id, |kc| kc.label())
    }

    pub fn tooltip(&self, id: &str) -> Option<String> {
        let kc = self.find_outer(id)?;
        Some(match kc.tooltip() {
            Some(tooltip) => format!("{}: {}", kc.id(), tooltip),
            None => kc.id().to_string(),
        })
    }

    pub fn is_mask(&self, id: &str) -> bool {
        self.parse_composite(id).is_some()
    }

    /// True for plain HID keycodes (raw value below `0xFF`).
    pub fn is_basic(&self, id: &str) -> bool {
        self.deserialize(id) < 0x00FF
    }

    /// Suffix-stripped ids of every masked descriptor.
    pub fn masked_outer_prefixes(&self) -> impl Iterator<Item = &str> {
        self.masked_outer_prefixes.iter().map(String::as_str)
    }

    /// Descriptors registered under `group`, in registration order.
    pub fn group(&self, group: KeycodeGroup) -> &[Arc<Keycode>] {
        self.groups
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, keycodes)| keycodes.as_slice())
            .unwrap_or_default()
    }

    /// Every live descriptor in priority order, one per id.
    ///
    /// A descriptor overwritten by a later group appears at the later
    /// group's position.
    pub fn keycodes(&self) -> Vec<&Arc<Keycode>> {
        let mut seen = HashSet::new();
        let mut live = Vec::new();
        for (_, keycodes) in &self.groups {
            for kc in keycodes {
                let current = self.by_id.get(kc.id()).is_some_and(|c| Arc::ptr_eq(c, kc));
                if current && seen.insert(kc.id()) {
                    live.push(kc);
                }
            }
        }
        live
    }

    /// Number of id/alias keys.
    pub fn id_count(&self) -> usize {
        self.by_id.len()
    }

    /// All id/alias keys, unordered.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.by_id.keys().map(String::as_str)
    }
}

impl SymbolTable for Generation {
    fn table(&self) -> &'static ProtocolTable {
        self.table
    }

    fn symbol(&self, name: &str) -> Option<u16> {
        match self.find(name) {
            Some(kc) => self.table.get(kc.id()),
            None => self.table.get(name),
        }
    }

    fn masked_outer(&self, prefix: &str) -> Option<u16> {
        match self.by_id.get(prefix).filter(|kc| kc.is_masked()) {
            Some(kc) => self.table.get(kc.id()),
            None => self
                .table
                .get(&format!("{prefix}({MASK_PLACEHOLDER})"))
                .filter(|raw| self.table.is_masked(*raw)),
        }
    }
}

impl fmt::Debug for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generation")
            .field("version", &self.version)
            .field("protocol", &self.protocol())
            .field("ids", &self.by_id.len())
            .field("raw", &self.by_raw.len())
            .field("masked", &self.masked_outer_prefixes.len())
            .finish()
    }
}

/// Process-wide keycode registry.
///
/// Reads are lock-free snapshots of the current [`Generation`]. Rebuilds are
/// serialized, construct the next generation completely and publish it with
/// one pointer swap, so a reader sees either the old or the new state.
pub struct KeycodeRegistry {
    current: ArcSwap<Generation>,
    rebuild_lock: Mutex<()>,
    parser: Arc<dyn ExpressionParser>,
}

impl KeycodeRegistry {
    /// Registry with the static catalog and no device capabilities.
    pub fn new(protocol: Protocol) -> Result<Self, KeycodeError> {
        Self::with_parser(protocol, Arc::new(DefaultExpressionParser))
    }

    /// Like [`new`](Self::new), with a different expression fallback.
    pub fn with_parser(protocol: Protocol, parser: Arc<dyn ExpressionParser>) -> Result<Self, KeycodeError> {
        let generation = Generation::build(1, Capabilities::new(protocol), parser.clone())?;
        info!(protocol = %protocol, ids = generation.id_count(), "Keycode registry initialized");
        Ok(Self {
            current: ArcSwap::from_pointee(generation),
            rebuild_lock: Mutex::new(()),
            parser,
        })
    }

    /// Registry already rebuilt for `capabilities`.
    pub fn for_capabilities(capabilities: &Capabilities) -> Result<Self, KeycodeError> {
        let registry = Self::new(capabilities.protocol)?;
        registry.rebuild(capabilities)?;
        Ok(registry)
    }

    /// Regenerate every capability-dependent group and publish a new
    /// generation. On error the current generation stays in place.
    pub fn rebuild(&self, capabilities: &Capabilities) -> Result<Arc<Generation>, KeycodeError> {
        let _guard = self.rebuild_lock.lock();
        let version = self.current.load().version + 1;
        let generation = Arc::new(Generation::build(version, capabilities.clone(), self.parser.clone())?);
        self.current.store(generation.clone());

        info!(
            version,
            protocol = %capabilities.protocol,
            layers = capabilities.layers,
            ids = generation.id_count(),
            "Published keycode generation"
        );
        Ok(generation)
    }

    /// Rebuild with the current capabilities under another protocol.
    pub fn set_protocol(&self, protocol: Protocol) -> Result<Arc<Generation>, KeycodeError> {
        let mut capabilities = self.current.load().capabilities.clone();
        capabilities.protocol = protocol;
        self.rebuild(&capabilities)
    }

    /// Current generation. Hold it to get consistent answers across calls.
    pub fn snapshot(&self) -> Arc<Generation> {
        self.current.load_full()
    }

    pub fn version(&self) -> u64 {
        self.current.load().version
    }

    pub fn protocol(&self) -> Protocol {
        self.current.load().protocol()
    }

    pub fn find(&self, id: &str) -> Option<Arc<Keycode>> {
        self.current.load().find(id).cloned()
    }

    pub fn find_outer(&self, id: &str) -> Option<Arc<Keycode>> {
        self.current.load().find_outer(id).cloned()
    }

    pub fn find_inner(&self, id: &str) -> Option<Arc<Keycode>> {
        self.current.load().find_inner(id).cloned()
    }

    pub fn find_by_recorder_alias(&self, alias: &str) -> Option<Arc<Keycode>> {
        self.current.load().find_by_recorder_alias(alias).cloned()
    }

    pub fn label(&self, id: &str) -> String {
        self.current.load().label(id).to_string()
    }

    pub fn tooltip(&self, id: &str) -> Option<String> {
        self.current.load().tooltip(id)
    }

    pub fn is_mask(&self, id: &str) -> bool {
        self.current.load().is_mask(id)
    }

    pub fn is_basic(&self, id: &str) -> bool {
        self.current.load().is_basic(id)
    }

    pub fn group(&self, group: KeycodeGroup) -> Vec<Arc<Keycode>> {
        self.current.load().group(group).to_vec()
    }

    pub fn keycodes(&self) -> Vec<Arc<Keycode>> {
        self.current.load().keycodes().into_iter().cloned().collect()
    }
}

impl fmt::Debug for KeycodeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeycodeRegistry")
            .field("current", &*self.current.load())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(caps: Capabilities) -> KeycodeRegistry {
        KeycodeRegistry::for_capabilities(&caps).unwrap()
    }

    // --- Builder tests ---

    #[test]
    fn test_register_aliases_and_stripped_prefix() {
        let mut builder = GenerationBuilder::new(Protocol::V6);
        builder
            .register_group(KeycodeGroup::Modifiers, catalog::static_group(KeycodeGroup::Modifiers).iter().cloned())
            .unwrap();
        let generation = builder.finish(1, Capabilities::new(Protocol::V6), Arc::new(DefaultExpressionParser));

        assert_eq!(generation.find("C_S(kc)").unwrap().id(), "C_S(kc)");
        assert_eq!(generation.find("LCS(kc)").unwrap().id(), "C_S(kc)");
        assert_eq!(generation.find("LCS").unwrap().id(), "C_S(kc)");
        assert!(generation.masked_outer_prefixes().any(|p| p == "C_S"));
        assert!(!generation.masked_outer_prefixes().any(|p| p == "LCS"));
    }

    #[test]
    fn test_duplicate_recorder_alias_rejected() {
        let mut builder = GenerationBuilder::new(Protocol::V6);
        builder
            .register(KeycodeGroup::Basic, Arc::new(Keycode::new("KC_A", "A").with_recorder_alias("a")))
            .unwrap();
        let err = builder
            .register(KeycodeGroup::Basic, Arc::new(Keycode::new("KC_B", "B").with_recorder_alias("a")))
            .unwrap_err();
        assert!(matches!(err, KeycodeError::DuplicateRecorderAlias { ref alias, .. } if alias == "a"));
    }

    #[test]
    fn test_reregister_same_id_overwrites() {
        let mut builder = GenerationBuilder::new(Protocol::V6);
        let first = Arc::new(Keycode::new("KC_A", "A").with_recorder_alias("a"));
        let second = Arc::new(Keycode::new("KC_A", "Alpha").with_recorder_alias("a"));
        builder.register(KeycodeGroup::Basic, first).unwrap();
        builder.register(KeycodeGroup::Media, second).unwrap();
        let generation = builder.finish(1, Capabilities::default(), Arc::new(DefaultExpressionParser));
        assert_eq!(generation.label("KC_A"), "Alpha");
        assert_eq!(generation.find_by_recorder_alias("a").unwrap().label(), "Alpha");
        assert_eq!(generation.keycodes().len(), 1);
    }

    #[test]
    fn test_invalid_mask_template_rejected() {
        let mut builder = GenerationBuilder::new(Protocol::V6);
        let err = builder
            .register(KeycodeGroup::Modifiers, Arc::new(Keycode::new("KC_A", "A").masked()))
            .unwrap_err();
        assert!(matches!(err, KeycodeError::InvalidMaskTemplate { .. }));
    }

    #[test]
    fn test_unresolvable_id_rejected() {
        let mut builder = GenerationBuilder::new(Protocol::V5);
        let err = builder
            .register(KeycodeGroup::Layers, Arc::new(Keycode::new("MO(20)", "MO(20)")))
            .unwrap_err();
        assert!(matches!(err, KeycodeError::ResolutionMiss { protocol: Protocol::V5, .. }));
    }

    // --- Lookup tests ---

    #[test]
    fn test_find_placeholder_is_no_keycode() {
        let registry = KeycodeRegistry::new(Protocol::V6).unwrap();
        assert_eq!(registry.find("kc").unwrap().id(), "KC_NO");
        assert!(registry.find("KC_BOGUS").is_none());
    }

    #[test]
    fn test_find_outer_and_inner() {
        let registry = KeycodeRegistry::new(Protocol::V6).unwrap();
        assert_eq!(registry.find_outer("LSFT(KC_A)").unwrap().id(), "LSFT(kc)");
        assert_eq!(registry.find_inner("LSFT(KC_A)").unwrap().id(), "KC_A");
        assert_eq!(registry.find_outer("KC_ENT").unwrap().id(), "KC_ENTER");
        assert_eq!(registry.find_inner("KC_ENT").unwrap().id(), "KC_ENTER");
        // TD is not a masked prefix
        assert_eq!(registry.find_outer("TD(3)").unwrap().id(), "TD(3)");
    }

    #[test]
    fn test_label_and_tooltip() {
        let registry = KeycodeRegistry::new(Protocol::V6).unwrap();
        assert_eq!(registry.label("KC_A"), "A");
        assert_eq!(registry.label("LSFT(KC_A)"), "LSft\n(kc)");
        assert_eq!(registry.label("NOT_A_KEY"), "NOT_A_KEY");
        assert_eq!(registry.tooltip("KC_A").as_deref(), Some("KC_A"));
        assert_eq!(
            registry.tooltip("MEH(KC_A)").as_deref(),
            Some("MEH(kc): LCTL + LSFT + LALT")
        );
        assert_eq!(registry.tooltip("NOT_A_KEY"), None);
    }

    #[test]
    fn test_is_mask() {
        let registry = registry(Capabilities::new(Protocol::V6).with_layers(2));
        assert!(registry.is_mask("LSFT(KC_A)"));
        assert!(registry.is_mask("LT1(KC_SPACE)"));
        assert!(!registry.is_mask("LT5(KC_SPACE)"));
        assert!(!registry.is_mask("MO(1)"));
        assert!(!registry.is_mask("LSFT"));
    }

    #[test]
    fn test_is_basic() {
        let registry = KeycodeRegistry::new(Protocol::V6).unwrap();
        assert!(registry.is_basic("KC_A"));
        assert!(!registry.is_basic("LSFT(KC_A)"));
        assert!(!registry.is_basic("RESET"));
    }

    #[test]
    fn test_recorder_alias_lookup() {
        let registry = KeycodeRegistry::new(Protocol::V5).unwrap();
        assert_eq!(registry.find_by_recorder_alias("shift").unwrap().id(), "KC_LSHIFT");
        assert!(registry.find_by_recorder_alias("hyper").is_none());
    }

    #[test]
    fn test_tap_dance_group_wins_over_hidden() {
        let registry = registry(Capabilities::new(Protocol::V6).with_tap_dance(2));
        assert_eq!(registry.tooltip("TD(1)").as_deref(), Some("TD(1): Tap dance keycode"));
        assert_eq!(registry.tooltip("TD(2)").as_deref(), Some("TD(2)"));
        assert_eq!(registry.group(KeycodeGroup::TapDance).len(), 2);
    }

    // --- Rebuild tests ---

    #[test]
    fn test_rebuild_bumps_version() {
        let registry = KeycodeRegistry::new(Protocol::V6).unwrap();
        assert_eq!(registry.version(), 1);
        let old = registry.snapshot();
        registry.rebuild(&Capabilities::new(Protocol::V6).with_layers(4)).unwrap();
        assert_eq!(registry.version(), 2);
        // Held snapshots are unaffected
        assert!(old.find("MO(0)").is_none());
        assert!(registry.find("MO(0)").is_some());
    }

    #[test]
    fn test_failed_rebuild_keeps_generation() {
        let registry = KeycodeRegistry::new(Protocol::V5).unwrap();
        let err = registry.rebuild(&Capabilities::new(Protocol::V5).with_layers(17));
        assert!(err.is_err());
        assert_eq!(registry.version(), 1);
    }

    #[test]
    fn test_set_protocol() {
        let registry = registry(Capabilities::new(Protocol::V5).with_layers(4));
        assert_eq!(registry.snapshot().resolve("RESET").unwrap(), 0x5C00);
        registry.set_protocol(Protocol::V6).unwrap();
        assert_eq!(registry.protocol(), Protocol::V6);
        assert_eq!(registry.snapshot().resolve("RESET").unwrap(), 0x7C00);
        assert!(registry.find("MO(3)").is_some());
    }

    #[test]
    fn test_concurrent_reads_during_rebuild() {
        let registry = Arc::new(KeycodeRegistry::new(Protocol::V6).unwrap());
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let registry = registry.clone();
                std::thread::spawn(move || {
                    for _ in 0..200 {
                        let snapshot = registry.snapshot();
                        let layers = snapshot.capabilities().layers;
                        assert_eq!(snapshot.group(KeycodeGroup::Layers).is_empty(), layers == 0);
                    }
                })
            })
            .collect();

        for layers in [2, 4, 8, 0, 3] {
            registry.rebuild(&Capabilities::new(Protocol::V6).with_layers(layers)).unwrap();
        }
        for reader in readers {
            reader.join().unwrap();
        }
        assert_eq!(registry.version(), 6);
    }
}
