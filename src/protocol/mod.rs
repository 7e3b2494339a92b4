// Firmware keycode numbering
// Raw 16-bit keycode tables for the two Vial/QMK protocol generations

mod basic;
mod v5;
mod v6;

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// QMK modifier bits used by `OSM()`, `MT()` and the modifier wrappers.
///
/// Bit 4 selects the right-hand modifiers, so `MOD_RSFT` is `0x12`, not `0x20`.
pub mod mods {
    pub const MOD_LCTL: u8 = 0x01;
    pub const MOD_LSFT: u8 = 0x02;
    pub const MOD_LALT: u8 = 0x04;
    pub const MOD_LGUI: u8 = 0x08;
    pub const MOD_RCTL: u8 = 0x11;
    pub const MOD_RSFT: u8 = 0x12;
    pub const MOD_RALT: u8 = 0x14;
    pub const MOD_RGUI: u8 = 0x18;
    pub const MOD_MEH: u8 = 0x07;
    pub const MOD_HYPR: u8 = 0x0F;

    /// Only the low five bits are encodable.
    pub const MOD_MASK: u8 = 0x1F;

    const NAMED: &[(&str, u8)] = &[
        ("MOD_LCTL", MOD_LCTL),
        ("MOD_LSFT", MOD_LSFT),
        ("MOD_LALT", MOD_LALT),
        ("MOD_LGUI", MOD_LGUI),
        ("MOD_RCTL", MOD_RCTL),
        ("MOD_RSFT", MOD_RSFT),
        ("MOD_RALT", MOD_RALT),
        ("MOD_RGUI", MOD_RGUI),
        ("MOD_MEH", MOD_MEH),
        ("MOD_HYPR", MOD_HYPR),
    ];

    /// Look up a single `MOD_*` constant.
    pub fn by_name(name: &str) -> Option<u8> {
        NAMED.iter().find(|(n, _)| *n == name).map(|(_, bits)| *bits)
    }

    /// Evaluate a `MOD_A|MOD_B` combination.
    pub fn parse_combo(combo: &str) -> Option<u8> {
        combo
            .split('|')
            .map(|part| by_name(part.trim()))
            .try_fold(0u8, |acc, bits| bits.map(|b| acc | b))
    }

    /// Modifier combinations offered as one-shot keycodes, `OSM(<combo>)`.
    pub const ONE_SHOT_COMBOS: &[&str] = &[
        "MOD_LSFT",
        "MOD_LCTL",
        "MOD_LALT",
        "MOD_LGUI",
        "MOD_RSFT",
        "MOD_RCTL",
        "MOD_RALT",
        "MOD_RGUI",
        "MOD_LCTL|MOD_LSFT",
        "MOD_LCTL|MOD_LALT",
        "MOD_LCTL|MOD_LGUI",
        "MOD_LSFT|MOD_LALT",
        "MOD_LSFT|MOD_LGUI",
        "MOD_LALT|MOD_LGUI",
        "MOD_RCTL|MOD_RSFT",
        "MOD_RCTL|MOD_RALT",
        "MOD_RCTL|MOD_RGUI",
        "MOD_RSFT|MOD_RALT",
        "MOD_RSFT|MOD_RGUI",
        "MOD_RALT|MOD_RGUI",
        "MOD_LCTL|MOD_LSFT|MOD_LGUI",
        "MOD_LCTL|MOD_LALT|MOD_LGUI",
        "MOD_LSFT|MOD_LALT|MOD_LGUI",
        "MOD_RCTL|MOD_RSFT|MOD_RGUI",
        "MOD_RCTL|MOD_RALT|MOD_RGUI",
        "MOD_RSFT|MOD_RALT|MOD_RGUI",
        "MOD_MEH",
        "MOD_HYPR",
        "MOD_RCTL|MOD_RSFT|MOD_RALT",
        "MOD_RCTL|MOD_RSFT|MOD_RALT|MOD_RGUI",
    ];

    /// Modifier wrappers `NAME(kc)`: the modifier bits land in the high byte.
    pub const WRAPPERS: &[(&str, u8)] = &[
        ("LCTL", MOD_LCTL),
        ("LSFT", MOD_LSFT),
        ("LALT", MOD_LALT),
        ("LGUI", MOD_LGUI),
        ("RCTL", MOD_RCTL),
        ("RSFT", MOD_RSFT),
        ("RALT", MOD_RALT),
        ("RGUI", MOD_RGUI),
        ("C_S", MOD_LCTL | MOD_LSFT),
        ("LCA", MOD_LCTL | MOD_LALT),
        ("LCG", MOD_LCTL | MOD_LGUI),
        ("LSA", MOD_LSFT | MOD_LALT),
        ("SGUI", MOD_LGUI | MOD_LSFT),
        ("LCAG", MOD_LCTL | MOD_LALT | MOD_LGUI),
        ("RCG", MOD_RCTL | MOD_RGUI),
        ("MEH", MOD_MEH),
        ("HYPR", MOD_HYPR),
    ];

    /// Mod-tap keycodes `NAME(kc)`: hold for the modifiers, tap for `kc`.
    pub const MOD_TAPS: &[(&str, u8)] = &[
        ("LCTL_T", MOD_LCTL),
        ("LSFT_T", MOD_LSFT),
        ("LALT_T", MOD_LALT),
        ("LGUI_T", MOD_LGUI),
        ("RCTL_T", MOD_RCTL),
        ("RSFT_T", MOD_RSFT),
        ("RALT_T", MOD_RALT),
        ("RGUI_T", MOD_RGUI),
        ("C_S_T", MOD_LCTL | MOD_LSFT),
        ("LCA_T", MOD_LCTL | MOD_LALT),
        ("LCG_T", MOD_LCTL | MOD_LGUI),
        ("LSA_T", MOD_LSFT | MOD_LALT),
        ("SGUI_T", MOD_LGUI | MOD_LSFT),
        ("LCAG_T", MOD_LCTL | MOD_LALT | MOD_LGUI),
        ("RCG_T", MOD_RCTL | MOD_RGUI),
        ("RCAG_T", MOD_RCTL | MOD_RALT | MOD_RGUI),
        ("MEH_T", MOD_MEH),
        ("ALL_T", MOD_HYPR),
    ];
}

/// Layer-tap keycodes only encode four bits of layer index.
pub const LAYER_TAP_LAYERS: usize = 16;

/// Tap dance slots addressable by `TD(n)`.
pub const MAX_TAP_DANCE: usize = 256;

/// User/custom keycode slots (`USER00..USER63`).
pub const MAX_USER_KEYCODES: usize = 64;

/// Which keycode numbering the connected firmware speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// Vial protocol < 6 (QMK before the 0.19 keycode overhaul).
    V5,
    /// Vial protocol 6 and later.
    #[default]
    V6,
}

impl Protocol {
    pub const ALL: [Protocol; 2] = [Protocol::V5, Protocol::V6];

    /// Map the Vial protocol version reported by the device.
    pub fn from_vial_version(version: u32) -> Self {
        if version >= 6 {
            Protocol::V6
        } else {
            Protocol::V5
        }
    }

    /// Raw keycode table for this protocol, built on first use.
    pub fn table(self) -> &'static ProtocolTable {
        static V5_TABLE: OnceLock<ProtocolTable> = OnceLock::new();
        static V6_TABLE: OnceLock<ProtocolTable> = OnceLock::new();

        match self {
            Protocol::V5 => V5_TABLE.get_or_init(|| ProtocolTable::build(self, &v5::ENCODING, v5::KEYCODES)),
            Protocol::V6 => V6_TABLE.get_or_init(|| ProtocolTable::build(self, &v6::ENCODING, v6::KEYCODES)),
        }
    }

    fn encoding(self) -> &'static Encoding {
        match self {
            Protocol::V5 => &v5::ENCODING,
            Protocol::V6 => &v6::ENCODING,
        }
    }

    /// Highest layer count the protocol can address.
    pub fn max_layers(self) -> usize {
        self.encoding().max_layers
    }

    /// Highest macro count the protocol can address.
    pub fn max_macros(self) -> usize {
        self.encoding().max_macros
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::V5 => write!(f, "v5"),
            Protocol::V6 => write!(f, "v6"),
        }
    }
}

impl FromStr for Protocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "5" | "v5" => Ok(Protocol::V5),
            "6" | "v6" => Ok(Protocol::V6),
            other => Err(format!("unknown protocol: \"{other}\" (expected v5 or v6)")),
        }
    }
}

/// Per-layer actions generated for every layer of the keymap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerAction {
    /// `MO(n)` momentary switch while held
    Momentary,
    /// `DF(n)` set default layer
    DefaultLayer,
    /// `TG(n)` toggle
    Toggle,
    /// `TT(n)` momentary, toggles after repeated taps
    TapToggle,
    /// `OSL(n)` one-shot layer
    OneShot,
    /// `TO(n)` switch to layer
    To,
}

impl LayerAction {
    /// Generation order of the layer group.
    pub const ALL: [LayerAction; 6] = [
        LayerAction::Momentary,
        LayerAction::DefaultLayer,
        LayerAction::Toggle,
        LayerAction::TapToggle,
        LayerAction::OneShot,
        LayerAction::To,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            LayerAction::Momentary => "MO",
            LayerAction::DefaultLayer => "DF",
            LayerAction::Toggle => "TG",
            LayerAction::TapToggle => "TT",
            LayerAction::OneShot => "OSL",
            LayerAction::To => "TO",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.prefix() == prefix)
    }

    pub fn description(self) -> &'static str {
        match self {
            LayerAction::Momentary => "Momentarily turn on layer when pressed",
            LayerAction::DefaultLayer => "Set the base (default) layer",
            LayerAction::Toggle => "Toggle layer on or off",
            LayerAction::TapToggle => {
                "Normally acts like MO unless it's tapped multiple times, which toggles layer on"
            }
            LayerAction::OneShot => "Momentarily activates layer until a key is pressed",
            LayerAction::To => "Turns on layer and turns off all other layers, except the default layer",
        }
    }

    /// Keycode id for this action on `layer`, e.g. `MO(3)`.
    pub fn id(self, layer: usize) -> String {
        format!("{}({layer})", self.prefix())
    }
}

/// Base values of the index-addressed keycode families.
pub(crate) struct Encoding {
    pub momentary: u16,
    pub default_layer: u16,
    pub toggle: u16,
    pub tap_toggle: u16,
    pub one_shot_layer: u16,
    pub to: u16,
    pub layer_tap: u16,
    pub mod_tap: u16,
    pub one_shot_mod: u16,
    pub tap_dance: u16,
    pub macro_base: u16,
    pub user_base: u16,
    pub fn_mo13: u16,
    pub fn_mo23: u16,
    pub max_layers: usize,
    pub max_macros: usize,
}

impl Encoding {
    fn layer_base(&self, action: LayerAction) -> u16 {
        match action {
            LayerAction::Momentary => self.momentary,
            LayerAction::DefaultLayer => self.default_layer,
            LayerAction::Toggle => self.toggle,
            LayerAction::TapToggle => self.tap_toggle,
            LayerAction::OneShot => self.one_shot_layer,
            LayerAction::To => self.to,
        }
    }
}

/// Immutable id → raw table of one protocol, plus its masked outer prefixes.
pub struct ProtocolTable {
    protocol: Protocol,
    encoding: &'static Encoding,
    by_id: HashMap<String, u16>,
    masked: HashSet<u16>,
}

impl ProtocolTable {
    fn build(protocol: Protocol, encoding: &'static Encoding, keycodes: &[(&str, u16)]) -> Self {
        let mut table = Self {
            protocol,
            encoding,
            by_id: HashMap::new(),
            masked: HashSet::new(),
        };

        for &(id, raw) in basic::KEYCODES.iter().chain(basic::SHIFTED).chain(keycodes) {
            table.insert(id.to_string(), raw);
        }

        for &(name, bits) in mods::WRAPPERS {
            table.insert_masked(name, u16::from(bits & mods::MOD_MASK) << 8);
        }
        for &(name, bits) in mods::MOD_TAPS {
            table.insert_masked(name, encoding.mod_tap | u16::from(bits & mods::MOD_MASK) << 8);
        }
        for layer in 0..LAYER_TAP_LAYERS {
            table.insert_masked(&format!("LT{layer}"), encoding.layer_tap | (layer as u16) << 8);
        }

        for &combo in mods::ONE_SHOT_COMBOS {
            if let Some(bits) = mods::parse_combo(combo) {
                table.insert(format!("OSM({combo})"), encoding.one_shot_mod | u16::from(bits));
            }
        }

        for layer in 0..encoding.max_layers {
            for action in LayerAction::ALL {
                table.insert(action.id(layer), encoding.layer_base(action) | layer as u16);
            }
        }
        table.insert("FN_MO13".to_string(), encoding.fn_mo13);
        table.insert("FN_MO23".to_string(), encoding.fn_mo23);

        for n in 0..encoding.max_macros {
            table.insert(format!("M{n}"), encoding.macro_base + n as u16);
        }
        for n in 0..MAX_TAP_DANCE {
            table.insert(format!("TD({n})"), encoding.tap_dance | n as u16);
        }
        for n in 0..MAX_USER_KEYCODES {
            table.insert(format!("USER{n:02}"), encoding.user_base + n as u16);
        }

        table
    }

    fn insert(&mut self, id: String, raw: u16) {
        self.by_id.insert(id, raw);
    }

    fn insert_masked(&mut self, name: &str, raw: u16) {
        self.by_id.insert(format!("{name}(kc)"), raw);
        self.masked.insert(raw);
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Raw value of a canonical id.
    pub fn get(&self, id: &str) -> Option<u16> {
        self.by_id.get(id).copied()
    }

    /// True if `outer` (a value with an empty low byte) wraps an inner keycode.
    pub fn is_masked(&self, outer: u16) -> bool {
        self.masked.contains(&outer)
    }

    /// Raw value of a layer action, `None` past the protocol's layer limit.
    pub fn layer_action(&self, action: LayerAction, layer: u16) -> Option<u16> {
        ((layer as usize) < self.encoding.max_layers).then(|| self.encoding.layer_base(action) | layer)
    }

    /// `LT(layer, kc)`
    pub fn layer_tap(&self, layer: u16, kc: u16) -> Option<u16> {
        ((layer as usize) < LAYER_TAP_LAYERS).then(|| self.encoding.layer_tap | layer << 8 | (kc & 0xFF))
    }

    /// `MT(mods, kc)`
    pub fn mod_tap(&self, bits: u16, kc: u16) -> u16 {
        self.encoding.mod_tap | (bits & u16::from(mods::MOD_MASK)) << 8 | (kc & 0xFF)
    }

    /// `OSM(mods)`
    pub fn one_shot_mod(&self, bits: u16) -> u16 {
        self.encoding.one_shot_mod | (bits & u16::from(mods::MOD_MASK))
    }

    /// `TD(n)`
    pub fn tap_dance(&self, n: u16) -> Option<u16> {
        ((n as usize) < MAX_TAP_DANCE).then(|| self.encoding.tap_dance | n)
    }

    /// `M(n)`, the macro keycode `Mn`.
    pub fn macro_keycode(&self, n: u16) -> Option<u16> {
        ((n as usize) < self.encoding.max_macros).then(|| self.encoding.macro_base + n)
    }

    /// Combine a masked outer value with an inner keycode.
    ///
    /// Modifier wrappers keep the whole inner value so they can nest
    /// (`LCTL(LSFT(kc))`); every other mask only carries the inner low byte.
    pub fn apply_mask(&self, outer: u16, inner: u16) -> u16 {
        if outer < 0x2000 {
            outer | inner
        } else {
            outer | (inner & 0xFF)
        }
    }
}

impl fmt::Debug for ProtocolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProtocolTable")
            .field("protocol", &self.protocol)
            .field("keycodes", &self.by_id.len())
            .field("masked", &self.masked.len())
            .finish()
    }
}
