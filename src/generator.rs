// Dynamic keycode generation
// Derive capability-dependent keycode groups from a device snapshot

use crate::catalog::{self, KeycodeGroup};
use crate::error::{KeycodeError, LoadError};
use crate::keycode::Keycode;
use crate::protocol::{LayerAction, Protocol, LAYER_TAP_LAYERS, MAX_TAP_DANCE, MAX_USER_KEYCODES};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// Generic user keycodes offered when the device declares none.
const GENERIC_USER_KEYCODES: usize = 16;

/// Layer count from which the `FN_MO13`/`FN_MO23` keys are offered.
const FN_MO_MIN_LAYERS: usize = 4;

/// How much of the MIDI keycode set the device supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MidiLevel {
    #[default]
    None,
    Basic,
    Advanced,
}

impl fmt::Display for MidiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MidiLevel::None => write!(f, "none"),
            MidiLevel::Basic => write!(f, "basic"),
            MidiLevel::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for MidiLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(MidiLevel::None),
            "basic" => Ok(MidiLevel::Basic),
            "advanced" => Ok(MidiLevel::Advanced),
            other => Err(format!("unknown MIDI level: \"{other}\"")),
        }
    }
}

/// Custom keycode declared by the keyboard definition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomKeycode {
    /// Alias the keycode can be typed as, e.g. `CUSTOM_RGB_NEXT`
    #[serde(default)]
    pub name: Option<String>,
    /// Tooltip text
    #[serde(default)]
    pub title: Option<String>,
    /// Key label
    #[serde(default)]
    pub short_name: Option<String>,
}

impl CustomKeycode {
    pub fn new(name: impl Into<String>, title: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            title: Some(title.into()),
            short_name: Some(short_name.into()),
        }
    }
}

/// Capability snapshot reported for the connected keyboard.
///
/// `custom_keycodes: None` (no list declared) and `Some(vec![])` are distinct
/// in the file format; both fall back to the generic `USER00..USER15` set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    #[serde(default)]
    pub protocol: Protocol,
    #[serde(default)]
    pub layers: usize,
    #[serde(default)]
    pub macro_count: usize,
    #[serde(default)]
    pub tap_dance_count: usize,
    /// An empty list is treated like an absent one, as Vial itself does.
    #[serde(default)]
    pub custom_keycodes: Option<Vec<CustomKeycode>>,
    #[serde(default)]
    pub midi: MidiLevel,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::new(Protocol::default())
    }
}

impl Capabilities {
    /// Snapshot with no layers, macros, tap dance or MIDI.
    pub fn new(protocol: Protocol) -> Self {
        Self {
            protocol,
            layers: 0,
            macro_count: 0,
            tap_dance_count: 0,
            custom_keycodes: None,
            midi: MidiLevel::None,
        }
    }

    pub fn with_layers(mut self, layers: usize) -> Self {
        self.layers = layers;
        self
    }

    pub fn with_macros(mut self, macro_count: usize) -> Self {
        self.macro_count = macro_count;
        self
    }

    pub fn with_tap_dance(mut self, tap_dance_count: usize) -> Self {
        self.tap_dance_count = tap_dance_count;
        self
    }

    pub fn with_custom_keycodes(mut self, custom: Vec<CustomKeycode>) -> Self {
        self.custom_keycodes = Some(custom);
        self
    }

    pub fn with_midi(mut self, midi: MidiLevel) -> Self {
        self.midi = midi;
        self
    }

    /// Load a snapshot from a `.json` or `.toml` file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::load_from_json(&content),
            Some("toml") => Self::load_from_toml(&content),
            other => Err(LoadError::Parse(format!(
                "unsupported capabilities file extension: {}",
                other.unwrap_or("<none>")
            ))),
        }
    }

    pub fn load_from_json(json: &str) -> Result<Self, LoadError> {
        let caps: Self = serde_json::from_str(json).map_err(|e| LoadError::Parse(e.to_string()))?;
        caps.validate()?;
        Ok(caps)
    }

    pub fn load_from_toml(content: &str) -> Result<Self, LoadError> {
        let caps: Self = toml::from_str(content).map_err(|e| LoadError::Parse(e.to_string()))?;
        caps.validate()?;
        Ok(caps)
    }

    /// Check every count against the limits of the snapshot's protocol.
    pub fn validate(&self) -> Result<(), KeycodeError> {
        let custom = self.custom_keycodes.as_ref().map_or(0, Vec::len);
        let checks = [
            ("layers", self.layers, self.protocol.max_layers()),
            ("macros", self.macro_count, self.protocol.max_macros()),
            ("tap dance", self.tap_dance_count, MAX_TAP_DANCE),
            ("custom keycodes", custom, MAX_USER_KEYCODES),
        ];

        for (what, requested, limit) in checks {
            if requested > limit {
                return Err(KeycodeError::CapabilityOutOfRange {
                    what,
                    requested,
                    limit,
                    protocol: self.protocol,
                });
            }
        }
        Ok(())
    }
}

/// Keycode groups that depend on device capabilities.
pub type DynamicGroups = Vec<(KeycodeGroup, Vec<Arc<Keycode>>)>;

/// Build every capability-dependent group, in registration order.
///
/// Validates the snapshot first; nothing is built for an out-of-range count.
pub fn generate(caps: &Capabilities) -> Result<DynamicGroups, KeycodeError> {
    caps.validate()?;

    let groups = vec![
        (KeycodeGroup::Layers, layer_keycodes(caps.layers)),
        (KeycodeGroup::TapDance, tap_dance_keycodes(caps.tap_dance_count)),
        (KeycodeGroup::Macro, macro_keycodes(caps.macro_count)),
        (KeycodeGroup::User, user_keycodes(caps.custom_keycodes.as_deref())),
        (KeycodeGroup::Midi, midi_keycodes(caps.midi)),
    ];

    debug!(
        protocol = %caps.protocol,
        layers = caps.layers,
        macros = caps.macro_count,
        tap_dance = caps.tap_dance_count,
        midi = %caps.midi,
        "Generated dynamic keycodes"
    );
    Ok(groups)
}

fn layer_keycodes(layers: usize) -> Vec<Arc<Keycode>> {
    let mut keycodes = Vec::new();

    if layers >= FN_MO_MIN_LAYERS {
        keycodes.push(Arc::new(Keycode::new("FN_MO13", "Fn1\n(Fn3)")));
        keycodes.push(Arc::new(Keycode::new("FN_MO23", "Fn2\n(Fn3)")));
    }

    for action in LayerAction::ALL {
        for layer in 0..layers {
            let id = action.id(layer);
            keycodes.push(Arc::new(
                Keycode::new(id.clone(), id).with_tooltip(action.description()),
            ));
        }
    }

    for layer in 0..layers.min(LAYER_TAP_LAYERS) {
        keycodes.push(Arc::new(
            Keycode::new(format!("LT{layer}(kc)"), format!("LT {layer}\n(kc)"))
                .with_tooltip(format!("Tap for keycode, hold to switch to layer {layer}"))
                .masked(),
        ));
    }

    keycodes
}

fn macro_keycodes(macro_count: usize) -> Vec<Arc<Keycode>> {
    (0..macro_count)
        .map(|n| {
            let id = format!("M{n}");
            Arc::new(Keycode::new(id.clone(), id))
        })
        .chain(catalog::macro_controls().iter().cloned())
        .collect()
}

fn tap_dance_keycodes(count: usize) -> Vec<Arc<Keycode>> {
    (0..count)
        .map(|n| {
            let id = format!("TD({n})");
            Arc::new(Keycode::new(id.clone(), id).with_tooltip("Tap dance keycode"))
        })
        .collect()
}

fn user_keycodes(custom: Option<&[CustomKeycode]>) -> Vec<Arc<Keycode>> {
    match custom {
        Some(custom) if !custom.is_empty() => custom
            .iter()
            .enumerate()
            .map(|(n, c)| {
                let id = format!("USER{n:02}");
                let pick = |field: &Option<String>| field.clone().unwrap_or_else(|| id.clone());
                Arc::new(
                    Keycode::new(id.clone(), pick(&c.short_name))
                        .with_tooltip(pick(&c.title))
                        .with_alias(pick(&c.name)),
                )
            })
            .collect(),
        _ => (0..GENERIC_USER_KEYCODES)
            .map(|n| {
                Arc::new(
                    Keycode::new(format!("USER{n:02}"), format!("User {n}"))
                        .with_tooltip(format!("User keycode {n}")),
                )
            })
            .collect(),
    }
}

fn midi_keycodes(level: MidiLevel) -> Vec<Arc<Keycode>> {
    match level {
        MidiLevel::None => Vec::new(),
        MidiLevel::Basic => catalog::midi_basic().to_vec(),
        MidiLevel::Advanced => catalog::midi_basic()
            .iter()
            .chain(catalog::midi_advanced())
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(groups: &DynamicGroups, kind: KeycodeGroup) -> &[Arc<Keycode>] {
        groups
            .iter()
            .find(|(g, _)| *g == kind)
            .map(|(_, k)| k.as_slice())
            .unwrap()
    }

    fn ids(keycodes: &[Arc<Keycode>]) -> Vec<&str> {
        keycodes.iter().map(|k| k.id()).collect()
    }

    // --- Layer tests ---

    #[test]
    fn test_layer_group_counts() {
        assert!(layer_keycodes(0).is_empty());
        assert_eq!(layer_keycodes(3).len(), 18 + 3);
        assert_eq!(layer_keycodes(4).len(), 2 + 24 + 4);
        // LT stops at 16 layers
        assert_eq!(layer_keycodes(32).len(), 2 + 6 * 32 + 16);
    }

    #[test]
    fn test_layer_group_order() {
        let layers = layer_keycodes(4);
        let ids = ids(&layers);
        assert_eq!(&ids[..4], &["FN_MO13", "FN_MO23", "MO(0)", "MO(1)"]);
        assert_eq!(ids[6], "DF(0)");
        assert_eq!(ids[25], "TO(3)");
        assert_eq!(ids[26], "LT0(kc)");
        assert!(layers[26].is_masked());
        assert_eq!(layers[26].label(), "LT 0\n(kc)");
        assert_eq!(layers[2].label(), "MO(0)");
        assert_eq!(layers[2].tooltip(), Some(LayerAction::Momentary.description()));
    }

    // --- Macro and tap dance tests ---

    #[test]
    fn test_macro_group() {
        let macros = macro_keycodes(2);
        assert_eq!(
            ids(&macros),
            ["M0", "M1", "DYN_REC_START1", "DYN_REC_START2", "DYN_REC_STOP", "DYN_MACRO_PLAY1", "DYN_MACRO_PLAY2"]
        );
        assert_eq!(macro_keycodes(0).len(), 5);
    }

    #[test]
    fn test_tap_dance_group() {
        let td = tap_dance_keycodes(3);
        assert_eq!(ids(&td), ["TD(0)", "TD(1)", "TD(2)"]);
        assert_eq!(td[1].tooltip(), Some("Tap dance keycode"));
    }

    // --- User keycode tests ---

    #[test]
    fn test_generic_user_keycodes() {
        for custom in [None, Some(&[][..])] {
            let user = user_keycodes(custom);
            assert_eq!(user.len(), 16);
            assert_eq!(user[3].id(), "USER03");
            assert_eq!(user[3].label(), "User 3");
            assert_eq!(user[3].tooltip(), Some("User keycode 3"));
        }
    }

    #[test]
    fn test_custom_user_keycodes() {
        let custom = [
            CustomKeycode::new("CUSTOM_BT1", "Bluetooth device 1", "BT1"),
            CustomKeycode::default(),
        ];
        let user = user_keycodes(Some(&custom));
        assert_eq!(user.len(), 2);
        assert_eq!(user[0].label(), "BT1");
        assert_eq!(user[0].tooltip(), Some("Bluetooth device 1"));
        assert_eq!(user[0].aliases(), &["USER00".to_string(), "CUSTOM_BT1".to_string()]);
        assert_eq!(user[1].label(), "USER01");
        assert_eq!(user[1].tooltip(), Some("USER01"));
        assert_eq!(user[1].aliases().len(), 1);
    }

    // --- MIDI tests ---

    #[test]
    fn test_midi_levels() {
        assert!(midi_keycodes(MidiLevel::None).is_empty());
        let basic = midi_keycodes(MidiLevel::Basic);
        let advanced = midi_keycodes(MidiLevel::Advanced);
        assert_eq!(basic.len(), catalog::midi_basic().len());
        assert_eq!(advanced.len(), basic.len() + catalog::midi_advanced().len());
        assert_eq!(basic[0].id(), advanced[0].id());
    }

    #[test]
    fn test_midi_level_parse() {
        assert_eq!("Advanced".parse::<MidiLevel>(), Ok(MidiLevel::Advanced));
        assert_eq!(MidiLevel::Basic.to_string(), "basic");
        assert!("full".parse::<MidiLevel>().is_err());
    }

    // --- Validation tests ---

    #[test]
    fn test_limits_per_protocol() {
        assert!(Capabilities::new(Protocol::V6).with_layers(32).validate().is_ok());
        assert!(Capabilities::new(Protocol::V5).with_layers(17).validate().is_err());
        assert!(Capabilities::new(Protocol::V5).with_macros(110).validate().is_ok());
        assert!(Capabilities::new(Protocol::V5).with_macros(111).validate().is_err());
        assert!(Capabilities::new(Protocol::V6).with_tap_dance(257).validate().is_err());

        let err = Capabilities::new(Protocol::V6).with_layers(33).validate().unwrap_err();
        assert!(matches!(
            err,
            KeycodeError::CapabilityOutOfRange { what: "layers", requested: 33, limit: 32, .. }
        ));
    }

    #[test]
    fn test_too_many_custom_keycodes() {
        let caps = Capabilities::new(Protocol::V6).with_custom_keycodes(vec![CustomKeycode::default(); 65]);
        assert!(generate(&caps).is_err());
    }

    #[test]
    fn test_generate_group_order() {
        let groups = generate(&Capabilities::new(Protocol::V6).with_layers(2)).unwrap();
        let kinds: Vec<_> = groups.iter().map(|(g, _)| *g).collect();
        assert_eq!(
            kinds,
            [KeycodeGroup::Layers, KeycodeGroup::TapDance, KeycodeGroup::Macro, KeycodeGroup::User, KeycodeGroup::Midi]
        );
        assert_eq!(group(&groups, KeycodeGroup::Layers).len(), 12 + 2);
    }

    // --- Snapshot loading tests ---

    #[test]
    fn test_load_from_json() {
        let json = r#"{
            "protocol": "v5",
            "layers": 4,
            "macroCount": 16,
            "tapDanceCount": 8,
            "customKeycodes": [{"name": "CUSTOM_1", "title": "Custom one", "shortName": "C1"}],
            "midi": "basic"
        }"#;
        let caps = Capabilities::load_from_json(json).unwrap();
        assert_eq!(caps.protocol, Protocol::V5);
        assert_eq!(caps.macro_count, 16);
        assert_eq!(caps.custom_keycodes.as_ref().map(Vec::len), Some(1));
        assert_eq!(caps.midi, MidiLevel::Basic);
    }

    #[test]
    fn test_custom_keycodes_absent_vs_empty() {
        let absent = Capabilities::load_from_json(r#"{"layers": 1}"#).unwrap();
        let empty = Capabilities::load_from_json(r#"{"layers": 1, "customKeycodes": []}"#).unwrap();
        assert_eq!(absent.custom_keycodes, None);
        assert_eq!(empty.custom_keycodes, Some(Vec::new()));
        assert_eq!(absent.protocol, Protocol::V6);

        // Both still render the generic user set
        for caps in [&absent, &empty] {
            let users = user_keycodes(caps.custom_keycodes.as_deref());
            assert_eq!(ids(&users)[..2], ["USER00", "USER01"]);
            assert_eq!(users.len(), 16);
        }
    }

    #[test]
    fn test_load_from_toml() {
        let caps = Capabilities::load_from_toml(
            "protocol = \"v6\"\nlayers = 8\nmacroCount = 4\nmidi = \"advanced\"\n",
        )
        .unwrap();
        assert_eq!(caps.layers, 8);
        assert_eq!(caps.tap_dance_count, 0);
        assert_eq!(caps.midi, MidiLevel::Advanced);
    }

    #[test]
    fn test_load_rejects_out_of_range() {
        let result = Capabilities::load_from_json(r#"{"protocol": "v5", "layers": 20}"#);
        assert!(matches!(result, Err(LoadError::Validation(_))));
        assert!(matches!(Capabilities::load_from_json("{"), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_load_from_file_by_extension() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("vial-caps-{}.toml", std::process::id()));
        std::fs::write(&path, "layers = 2\n").unwrap();
        let caps = Capabilities::load_from_file(&path).unwrap();
        assert_eq!(caps.layers, 2);
        std::fs::remove_file(&path).unwrap();

        let bad = dir.join(format!("vial-caps-{}.yaml", std::process::id()));
        std::fs::write(&bad, "layers: 2\n").unwrap();
        assert!(matches!(Capabilities::load_from_file(&bad), Err(LoadError::Parse(_))));
        std::fs::remove_file(&bad).unwrap();
    }
}
