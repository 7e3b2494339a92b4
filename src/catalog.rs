// Static keycode catalog
// Always-present keycode groups, in registration priority order

use crate::keycode::{Keycode, KeycodeDef};
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

/// Keycode groups in registration order. When two groups register the same
/// id the later group wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeycodeGroup {
    Special,
    Basic,
    Shifted,
    Iso,
    Layers,
    Boot,
    Modifiers,
    Quantum,
    Backlight,
    Media,
    /// `TD(0)..TD(255)`, always registered so any tap dance value renders.
    ///
    /// Registered ahead of `TapDance`, so the first `tap_dance_count` slots
    /// keep the "Tap dance keycode" tooltip and only slots past the
    /// device's count fall back to these bare entries.
    Hidden,
    TapDance,
    Macro,
    User,
    Midi,
}

impl KeycodeGroup {
    pub const ALL: [KeycodeGroup; 15] = [
        KeycodeGroup::Special,
        KeycodeGroup::Basic,
        KeycodeGroup::Shifted,
        KeycodeGroup::Iso,
        KeycodeGroup::Layers,
        KeycodeGroup::Boot,
        KeycodeGroup::Modifiers,
        KeycodeGroup::Quantum,
        KeycodeGroup::Backlight,
        KeycodeGroup::Media,
        KeycodeGroup::Hidden,
        KeycodeGroup::TapDance,
        KeycodeGroup::Macro,
        KeycodeGroup::User,
        KeycodeGroup::Midi,
    ];

    pub fn name(self) -> &'static str {
        match self {
            KeycodeGroup::Special => "special",
            KeycodeGroup::Basic => "basic",
            KeycodeGroup::Shifted => "shifted",
            KeycodeGroup::Iso => "iso",
            KeycodeGroup::Layers => "layers",
            KeycodeGroup::Boot => "boot",
            KeycodeGroup::Modifiers => "modifiers",
            KeycodeGroup::Quantum => "quantum",
            KeycodeGroup::Backlight => "backlight",
            KeycodeGroup::Media => "media",
            KeycodeGroup::Hidden => "hidden",
            KeycodeGroup::TapDance => "tap-dance",
            KeycodeGroup::Macro => "macro",
            KeycodeGroup::User => "user",
            KeycodeGroup::Midi => "midi",
        }
    }

    /// Groups derived from device capabilities rather than the catalog.
    pub fn is_dynamic(self) -> bool {
        matches!(
            self,
            KeycodeGroup::Layers
                | KeycodeGroup::TapDance
                | KeycodeGroup::Macro
                | KeycodeGroup::User
                | KeycodeGroup::Midi
        )
    }
}

impl fmt::Display for KeycodeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeycodeGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|g| g.name() == s)
            .ok_or_else(|| format!("unknown keycode group: \"{s}\""))
    }
}

const fn k(id: &'static str, label: &'static str) -> KeycodeDef {
    KeycodeDef::new(id, label)
}

pub const SPECIAL: &[KeycodeDef] = &[
    k("KC_NO", ""),
    k("KC_TRNS", "▽").aliases(&["KC_TRANSPARENT"]),
];

pub const BASIC: &[KeycodeDef] = &[
    k("KC_A", "A").printable('a').recorder(&["a"]),
    k("KC_B", "B").printable('b').recorder(&["b"]),
    k("KC_C", "C").printable('c').recorder(&["c"]),
    k("KC_D", "D").printable('d').recorder(&["d"]),
    k("KC_E", "E").printable('e').recorder(&["e"]),
    k("KC_F", "F").printable('f').recorder(&["f"]),
    k("KC_G", "G").printable('g').recorder(&["g"]),
    k("KC_H", "H").printable('h').recorder(&["h"]),
    k("KC_I", "I").printable('i').recorder(&["i"]),
    k("KC_J", "J").printable('j').recorder(&["j"]),
    k("KC_K", "K").printable('k').recorder(&["k"]),
    k("KC_L", "L").printable('l').recorder(&["l"]),
    k("KC_M", "M").printable('m').recorder(&["m"]),
    k("KC_N", "N").printable('n').recorder(&["n"]),
    k("KC_O", "O").printable('o').recorder(&["o"]),
    k("KC_P", "P").printable('p').recorder(&["p"]),
    k("KC_Q", "Q").printable('q').recorder(&["q"]),
    k("KC_R", "R").printable('r').recorder(&["r"]),
    k("KC_S", "S").printable('s').recorder(&["s"]),
    k("KC_T", "T").printable('t').recorder(&["t"]),
    k("KC_U", "U").printable('u').recorder(&["u"]),
    k("KC_V", "V").printable('v').recorder(&["v"]),
    k("KC_W", "W").printable('w').recorder(&["w"]),
    k("KC_X", "X").printable('x').recorder(&["x"]),
    k("KC_Y", "Y").printable('y').recorder(&["y"]),
    k("KC_Z", "Z").printable('z').recorder(&["z"]),
    k("KC_1", "!\n1").printable('1').recorder(&["1"]),
    k("KC_2", "@\n2").printable('2').recorder(&["2"]),
    k("KC_3", "#\n3").printable('3').recorder(&["3"]),
    k("KC_4", "$\n4").printable('4').recorder(&["4"]),
    k("KC_5", "%\n5").printable('5').recorder(&["5"]),
    k("KC_6", "^\n6").printable('6').recorder(&["6"]),
    k("KC_7", "&\n7").printable('7').recorder(&["7"]),
    k("KC_8", "*\n8").printable('8').recorder(&["8"]),
    k("KC_9", "(\n9").printable('9').recorder(&["9"]),
    k("KC_0", ")\n0").printable('0').recorder(&["0"]),
    k("KC_ENTER", "Enter").recorder(&["enter"]).aliases(&["KC_ENT"]),
    k("KC_ESCAPE", "Esc").recorder(&["esc"]).aliases(&["KC_ESC"]),
    k("KC_BSPACE", "Bksp").recorder(&["backspace"]).aliases(&["KC_BSPC"]),
    k("KC_TAB", "Tab").recorder(&["tab"]),
    k("KC_SPACE", "Space").recorder(&["space"]).aliases(&["KC_SPC"]),
    k("KC_MINUS", "_\n-").printable('-').recorder(&["-"]).aliases(&["KC_MINS"]),
    k("KC_EQUAL", "+\n=").printable('=').recorder(&["="]).aliases(&["KC_EQL"]),
    k("KC_LBRACKET", "{\n[").printable('[').recorder(&["["]).aliases(&["KC_LBRC"]),
    k("KC_RBRACKET", "}\n]").printable(']').recorder(&["]"]).aliases(&["KC_RBRC"]),
    k("KC_BSLASH", "|\n\\").printable('\\').recorder(&["\\"]).aliases(&["KC_BSLS"]),
    k("KC_SCOLON", ":\n;").printable(';').recorder(&[";"]).aliases(&["KC_SCLN"]),
    k("KC_QUOTE", "\"\n'").printable('\'').recorder(&["'"]).aliases(&["KC_QUOT"]),
    k("KC_GRAVE", "~\n`").printable('`').recorder(&["`"]).aliases(&["KC_GRV", "KC_ZKHK"]),
    k("KC_COMMA", "<\n,").printable(',').recorder(&[","]).aliases(&["KC_COMM"]),
    k("KC_DOT", ">\n.").printable('.').recorder(&["."]),
    k("KC_SLASH", "?\n/").printable('/').recorder(&["/"]).aliases(&["KC_SLSH"]),
    k("KC_CAPSLOCK", "Caps\nLock").recorder(&["caps lock"]).aliases(&["KC_CLCK", "KC_CAPS"]),
    k("KC_F1", "F1").recorder(&["f1"]),
    k("KC_F2", "F2").recorder(&["f2"]),
    k("KC_F3", "F3").recorder(&["f3"]),
    k("KC_F4", "F4").recorder(&["f4"]),
    k("KC_F5", "F5").recorder(&["f5"]),
    k("KC_F6", "F6").recorder(&["f6"]),
    k("KC_F7", "F7").recorder(&["f7"]),
    k("KC_F8", "F8").recorder(&["f8"]),
    k("KC_F9", "F9").recorder(&["f9"]),
    k("KC_F10", "F10").recorder(&["f10"]),
    k("KC_F11", "F11").recorder(&["f11"]),
    k("KC_F12", "F12").recorder(&["f12"]),
    k("KC_APPLICATION", "Menu").recorder(&["menu", "left menu", "right menu"]).aliases(&["KC_APP"]),
    k("KC_LCTRL", "LCtrl").recorder(&["left ctrl", "ctrl"]).aliases(&["KC_LCTL"]),
    k("KC_LSHIFT", "LShift").recorder(&["left shift", "shift"]).aliases(&["KC_LSFT"]),
    k("KC_LALT", "LAlt").recorder(&["alt"]).aliases(&["KC_LOPT"]),
    k("KC_LGUI", "LGui").recorder(&["left windows", "windows"]).aliases(&["KC_LCMD", "KC_LWIN"]),
    k("KC_RCTRL", "RCtrl").recorder(&["right ctrl"]).aliases(&["KC_RCTL"]),
    k("KC_RSHIFT", "RShift").recorder(&["right shift"]).aliases(&["KC_RSFT"]),
    k("KC_RALT", "RAlt").aliases(&["KC_ALGR", "KC_ROPT"]),
    k("KC_RGUI", "RGui").recorder(&["right windows"]).aliases(&["KC_RCMD", "KC_RWIN"]),
    // Numpad
    k("KC_NUMLOCK", "Num\nLock").recorder(&["num lock"]).aliases(&["KC_NLCK"]),
    k("KC_KP_SLASH", "/").aliases(&["KC_PSLS"]),
    k("KC_KP_ASTERISK", "*").aliases(&["KC_PAST"]),
    k("KC_KP_MINUS", "-").aliases(&["KC_PMNS"]),
    k("KC_KP_PLUS", "+").aliases(&["KC_PPLS"]),
    k("KC_KP_ENTER", "Num\nEnter").aliases(&["KC_PENT"]),
    k("KC_KP_1", "1").aliases(&["KC_P1"]),
    k("KC_KP_2", "2").aliases(&["KC_P2"]),
    k("KC_KP_3", "3").aliases(&["KC_P3"]),
    k("KC_KP_4", "4").aliases(&["KC_P4"]),
    k("KC_KP_5", "5").aliases(&["KC_P5"]),
    k("KC_KP_6", "6").aliases(&["KC_P6"]),
    k("KC_KP_7", "7").aliases(&["KC_P7"]),
    k("KC_KP_8", "8").aliases(&["KC_P8"]),
    k("KC_KP_9", "9").aliases(&["KC_P9"]),
    k("KC_KP_0", "0").aliases(&["KC_P0"]),
    k("KC_KP_DOT", ".").aliases(&["KC_PDOT"]),
    k("KC_KP_EQUAL", "=").aliases(&["KC_PEQL"]),
    k("KC_KP_COMMA", ",").aliases(&["KC_PCMM"]),
    // Navigation
    k("KC_PSCREEN", "Print\nScreen").aliases(&["KC_PSCR"]),
    k("KC_SCROLLLOCK", "Scroll\nLock").recorder(&["scroll lock"]).aliases(&["KC_SLCK", "KC_BRMD"]),
    k("KC_PAUSE", "Pause").recorder(&["pause", "break"]).aliases(&["KC_PAUS", "KC_BRK", "KC_BRMU"]),
    k("KC_INSERT", "Insert").recorder(&["insert"]).aliases(&["KC_INS"]),
    k("KC_HOME", "Home").recorder(&["home"]),
    k("KC_PGUP", "Page\nUp").recorder(&["page up"]),
    k("KC_DELETE", "Del").recorder(&["delete"]).aliases(&["KC_DEL"]),
    k("KC_END", "End").recorder(&["end"]),
    k("KC_PGDOWN", "Page\nDown").recorder(&["page down"]).aliases(&["KC_PGDN"]),
    k("KC_RIGHT", "Right").recorder(&["right"]).aliases(&["KC_RGHT"]),
    k("KC_LEFT", "Left").recorder(&["left"]),
    k("KC_DOWN", "Down").recorder(&["down"]),
    k("KC_UP", "Up").recorder(&["up"]),
];

pub const SHIFTED: &[KeycodeDef] = &[
    k("KC_TILD", "~"),
    k("KC_EXLM", "!"),
    k("KC_AT", "@"),
    k("KC_HASH", "#"),
    k("KC_DLR", "$"),
    k("KC_PERC", "%"),
    k("KC_CIRC", "^"),
    k("KC_AMPR", "&"),
    k("KC_ASTR", "*"),
    k("KC_LPRN", "("),
    k("KC_RPRN", ")"),
    k("KC_UNDS", "_"),
    k("KC_PLUS", "+"),
    k("KC_LCBR", "{"),
    k("KC_RCBR", "}"),
    k("KC_LT", "<"),
    k("KC_GT", ">"),
    k("KC_COLN", ":"),
    k("KC_PIPE", "|"),
    k("KC_QUES", "?"),
    k("KC_DQUO", "\""),
];

pub const ISO: &[KeycodeDef] = &[
    k("KC_NONUS_HASH", "~\n#").tooltip("Non-US # and ~").aliases(&["KC_NUHS"]),
    k("KC_NONUS_BSLASH", "|\n\\").tooltip("Non-US \\ and |").aliases(&["KC_NUBS"]),
    k("KC_RO", "_\n\\").tooltip("JIS \\ and _").aliases(&["KC_INT1"]),
    k("KC_KANA", "カタカナ\nひらがな").tooltip("JIS Katakana/Hiragana").aliases(&["KC_INT2"]),
    k("KC_JYEN", "|\n¥").aliases(&["KC_INT3"]),
    k("KC_HENK", "変換").tooltip("JIS Henkan").aliases(&["KC_INT4"]),
    k("KC_MHEN", "無変換").tooltip("JIS Muhenkan").aliases(&["KC_INT5"]),
    k("KC_LANG1", "한영\nかな").tooltip("Korean Han/Yeong / JP Mac Kana").aliases(&["KC_HAEN"]),
    k("KC_LANG2", "漢字\n英数").tooltip("Korean Hanja / JP Mac Eisu").aliases(&["KC_HANJ"]),
];

/// Id of the reboot-to-bootloader keycode.
pub const RESET_KEYCODE: &str = "RESET";

pub const BOOT: &[KeycodeDef] = &[k(RESET_KEYCODE, "Reset").tooltip("Reboot to bootloader")];

pub const MODIFIERS: &[KeycodeDef] = &[
    k("OSM(MOD_LSFT)", "OSM\nLSft").tooltip("Enable Left Shift for one keypress"),
    k("OSM(MOD_LCTL)", "OSM\nLCtl").tooltip("Enable Left Control for one keypress"),
    k("OSM(MOD_LALT)", "OSM\nLAlt").tooltip("Enable Left Alt for one keypress"),
    k("OSM(MOD_LGUI)", "OSM\nLGUI").tooltip("Enable Left GUI for one keypress"),
    k("OSM(MOD_RSFT)", "OSM\nRSft").tooltip("Enable Right Shift for one keypress"),
    k("OSM(MOD_RCTL)", "OSM\nRCtl").tooltip("Enable Right Control for one keypress"),
    k("OSM(MOD_RALT)", "OSM\nRAlt").tooltip("Enable Right Alt for one keypress"),
    k("OSM(MOD_RGUI)", "OSM\nRGUI").tooltip("Enable Right GUI for one keypress"),
    k("OSM(MOD_LCTL|MOD_LSFT)", "OSM\nCS").tooltip("Enable Left Control and Shift for one keypress"),
    k("OSM(MOD_LCTL|MOD_LALT)", "OSM\nCA").tooltip("Enable Left Control and Alt for one keypress"),
    k("OSM(MOD_LCTL|MOD_LGUI)", "OSM\nCG").tooltip("Enable Left Control and GUI for one keypress"),
    k("OSM(MOD_LSFT|MOD_LALT)", "OSM\nSA").tooltip("Enable Left Shift and Alt for one keypress"),
    k("OSM(MOD_LSFT|MOD_LGUI)", "OSM\nSG").tooltip("Enable Left Shift and GUI for one keypress"),
    k("OSM(MOD_LALT|MOD_LGUI)", "OSM\nAG").tooltip("Enable Left Alt and GUI for one keypress"),
    k("OSM(MOD_RCTL|MOD_RSFT)", "OSM\nRCS").tooltip("Enable Right Control and Shift for one keypress"),
    k("OSM(MOD_RCTL|MOD_RALT)", "OSM\nRCA").tooltip("Enable Right Control and Alt for one keypress"),
    k("OSM(MOD_RCTL|MOD_RGUI)", "OSM\nRCG").tooltip("Enable Right Control and GUI for one keypress"),
    k("OSM(MOD_RSFT|MOD_RALT)", "OSM\nRSA").tooltip("Enable Right Shift and Alt for one keypress"),
    k("OSM(MOD_RSFT|MOD_RGUI)", "OSM\nRSG").tooltip("Enable Right Shift and GUI for one keypress"),
    k("OSM(MOD_RALT|MOD_RGUI)", "OSM\nRAG").tooltip("Enable Right Alt and GUI for one keypress"),
    k("OSM(MOD_LCTL|MOD_LSFT|MOD_LGUI)", "OSM\nCSG")
        .tooltip("Enable Left Control, Shift and GUI for one keypress"),
    k("OSM(MOD_LCTL|MOD_LALT|MOD_LGUI)", "OSM\nCAG")
        .tooltip("Enable Left Control, Alt and GUI for one keypress"),
    k("OSM(MOD_LSFT|MOD_LALT|MOD_LGUI)", "OSM\nSAG")
        .tooltip("Enable Left Shift, Alt and GUI for one keypress"),
    k("OSM(MOD_RCTL|MOD_RSFT|MOD_RGUI)", "OSM\nRCSG")
        .tooltip("Enable Right Control, Shift and GUI for one keypress"),
    k("OSM(MOD_RCTL|MOD_RALT|MOD_RGUI)", "OSM\nRCAG")
        .tooltip("Enable Right Control, Alt and GUI for one keypress"),
    k("OSM(MOD_RSFT|MOD_RALT|MOD_RGUI)", "OSM\nRSAG")
        .tooltip("Enable Right Shift, Alt and GUI for one keypress"),
    k("OSM(MOD_MEH)", "OSM\nMeh").tooltip("Enable Left Control, Shift and Alt for one keypress"),
    k("OSM(MOD_HYPR)", "OSM\nHyper")
        .tooltip("Enable Left Control, Shift, Alt and GUI for one keypress"),
    k("OSM(MOD_RCTL|MOD_RSFT|MOD_RALT)", "OSM\nRMeh")
        .tooltip("Enable Right Control, Shift and Alt for one keypress"),
    k("OSM(MOD_RCTL|MOD_RSFT|MOD_RALT|MOD_RGUI)", "OSM\nRHyp")
        .tooltip("Enable Right Control, Shift, Alt and GUI for one keypress"),
    // Modifier wrappers
    k("LSFT(kc)", "LSft\n(kc)").masked(),
    k("LCTL(kc)", "LCtl\n(kc)").masked(),
    k("LALT(kc)", "LAlt\n(kc)").masked(),
    k("LGUI(kc)", "LGui\n(kc)").masked(),
    k("RSFT(kc)", "RSft\n(kc)").masked(),
    k("RCTL(kc)", "RCtl\n(kc)").masked(),
    k("RALT(kc)", "RAlt\n(kc)").masked(),
    k("RGUI(kc)", "RGui\n(kc)").masked(),
    k("C_S(kc)", "LCS\n(kc)").tooltip("LCTL + LSFT").masked().aliases(&["LCS(kc)"]),
    k("LCA(kc)", "LCA\n(kc)").tooltip("LCTL + LALT").masked(),
    k("LCG(kc)", "LCG\n(kc)").tooltip("LCTL + LGUI").masked(),
    k("LSA(kc)", "LSA\n(kc)").tooltip("LSFT + LALT").masked(),
    k("SGUI(kc)", "LSG\n(kc)").tooltip("LGUI + LSFT").masked().aliases(&["LSG(kc)"]),
    k("LCAG(kc)", "LCAG\n(kc)").tooltip("LCTL + LALT + LGUI").masked(),
    k("RCG(kc)", "RCG\n(kc)").tooltip("RCTL + RGUI").masked(),
    k("MEH(kc)", "Meh\n(kc)").tooltip("LCTL + LSFT + LALT").masked(),
    k("HYPR(kc)", "Hyper\n(kc)").tooltip("LCTL + LSFT + LALT + LGUI").masked(),
    // Mod-tap
    k("LSFT_T(kc)", "LSft_T\n(kc)").tooltip("Left Shift when held, kc when tapped").masked(),
    k("LCTL_T(kc)", "LCtl_T\n(kc)").tooltip("Left Control when held, kc when tapped").masked(),
    k("LALT_T(kc)", "LAlt_T\n(kc)").tooltip("Left Alt when held, kc when tapped").masked(),
    k("LGUI_T(kc)", "LGui_T\n(kc)").tooltip("Left GUI when held, kc when tapped").masked(),
    k("RSFT_T(kc)", "RSft_T\n(kc)").tooltip("Right Shift when held, kc when tapped").masked(),
    k("RCTL_T(kc)", "RCtl_T\n(kc)").tooltip("Right Control when held, kc when tapped").masked(),
    k("RALT_T(kc)", "RAlt_T\n(kc)").tooltip("Right Alt when held, kc when tapped").masked(),
    k("RGUI_T(kc)", "RGui_T\n(kc)").tooltip("Right GUI when held, kc when tapped").masked(),
    k("C_S_T(kc)", "LCS_T\n(kc)")
        .tooltip("Left Control + Left Shift when held, kc when tapped")
        .masked()
        .aliases(&["LCS_T(kc)"]),
    k("LCA_T(kc)", "LCA_T\n(kc)").tooltip("LCTL + LALT when held, kc when tapped").masked(),
    k("LCG_T(kc)", "LCG_T\n(kc)").tooltip("LCTL + LGUI when held, kc when tapped").masked(),
    k("LSA_T(kc)", "LSA_T\n(kc)").tooltip("LSFT + LALT when held, kc when tapped").masked(),
    k("SGUI_T(kc)", "LSG_T\n(kc)")
        .tooltip("LGUI + LSFT when held, kc when tapped")
        .masked()
        .aliases(&["LSG_T(kc)"]),
    k("LCAG_T(kc)", "LCAG_T\n(kc)").tooltip("LCTL + LALT + LGUI when held, kc when tapped").masked(),
    k("RCG_T(kc)", "RCG_T\n(kc)").tooltip("RCTL + RGUI when held, kc when tapped").masked(),
    k("RCAG_T(kc)", "RCAG_T\n(kc)").tooltip("RCTL + RALT + RGUI when held, kc when tapped").masked(),
    k("MEH_T(kc)", "Meh_T\n(kc)").tooltip("LCTL + LSFT + LALT when held, kc when tapped").masked(),
    k("ALL_T(kc)", "ALL_T\n(kc)")
        .tooltip("LCTL + LSFT + LALT + LGUI when held, kc when tapped")
        .masked(),
    // Grave escape and space cadet
    k("KC_GESC", "~\nEsc").tooltip("Esc normally, but ~ when Shift or GUI is pressed"),
    k("KC_LSPO", "LS\n(").tooltip("Left Shift when held, ( when tapped"),
    k("KC_RSPC", "RS\n)").tooltip("Right Shift when held, ) when tapped"),
    k("KC_LCPO", "LC\n(").tooltip("Left Control when held, ( when tapped"),
    k("KC_RCPC", "RC\n)").tooltip("Right Control when held, ) when tapped"),
    k("KC_LAPO", "LA\n(").tooltip("Left Alt when held, ( when tapped"),
    k("KC_RAPC", "RA\n)").tooltip("Right Alt when held, ) when tapped"),
    k("KC_SFTENT", "RS\nEnter").tooltip("Right Shift when held, Enter when tapped"),
];

pub const QUANTUM: &[KeycodeDef] = &[
    k("MAGIC_SWAP_CONTROL_CAPSLOCK", "Swap\nCtrl\nCaps")
        .tooltip("Swap Caps Lock and Left Control")
        .aliases(&["CL_SWAP"]),
    k("MAGIC_UNSWAP_CONTROL_CAPSLOCK", "Unswap\nCtrl\nCaps")
        .tooltip("Unswap Caps Lock and Left Control")
        .aliases(&["CL_NORM"]),
    k("MAGIC_CAPSLOCK_TO_CONTROL", "Caps\nto\nCtrl")
        .tooltip("Treat Caps Lock as Control")
        .aliases(&["CL_CTRL"]),
    k("MAGIC_UNCAPSLOCK_TO_CONTROL", "Caps\nnot to\nCtrl")
        .tooltip("Stop treating Caps Lock as Control")
        .aliases(&["CL_CAPS"]),
    k("MAGIC_SWAP_LCTL_LGUI", "Swap\nLCtl\nLGui")
        .tooltip("Swap Left Control and GUI")
        .aliases(&["LCG_SWP"]),
    k("MAGIC_UNSWAP_LCTL_LGUI", "Unswap\nLCtl\nLGui")
        .tooltip("Unswap Left Control and GUI")
        .aliases(&["LCG_NRM"]),
    k("MAGIC_SWAP_RCTL_RGUI", "Swap\nRCtl\nRGui")
        .tooltip("Swap Right Control and GUI")
        .aliases(&["RCG_SWP"]),
    k("MAGIC_UNSWAP_RCTL_RGUI", "Unswap\nRCtl\nRGui")
        .tooltip("Unswap Right Control and GUI")
        .aliases(&["RCG_NRM"]),
    k("MAGIC_SWAP_CTL_GUI", "Swap\nCtl\nGui")
        .tooltip("Swap Control and GUI on both sides")
        .aliases(&["CG_SWAP"]),
    k("MAGIC_UNSWAP_CTL_GUI", "Unswap\nCtl\nGui")
        .tooltip("Unswap Control and GUI on both sides")
        .aliases(&["CG_NORM"]),
    k("MAGIC_TOGGLE_CTL_GUI", "Toggle\nCtl\nGui")
        .tooltip("Toggle Control and GUI swap on both sides")
        .aliases(&["CG_TOGG"]),
    k("MAGIC_SWAP_LALT_LGUI", "Swap\nLAlt\nLGui")
        .tooltip("Swap Left Alt and GUI")
        .aliases(&["LAG_SWP"]),
    k("MAGIC_UNSWAP_LALT_LGUI", "Unswap\nLAlt\nLGui")
        .tooltip("Unswap Left Alt and GUI")
        .aliases(&["LAG_NRM"]),
    k("MAGIC_SWAP_RALT_RGUI", "Swap\nRAlt\nRGui")
        .tooltip("Swap Right Alt and GUI")
        .aliases(&["RAG_SWP"]),
    k("MAGIC_UNSWAP_RALT_RGUI", "Unswap\nRAlt\nRGui")
        .tooltip("Unswap Right Alt and GUI")
        .aliases(&["RAG_NRM"]),
    k("MAGIC_SWAP_ALT_GUI", "Swap\nAlt\nGui")
        .tooltip("Swap Alt and GUI on both sides")
        .aliases(&["AG_SWAP"]),
    k("MAGIC_UNSWAP_ALT_GUI", "Unswap\nAlt\nGui")
        .tooltip("Unswap Alt and GUI on both sides")
        .aliases(&["AG_NORM"]),
    k("MAGIC_TOGGLE_ALT_GUI", "Toggle\nAlt\nGui")
        .tooltip("Toggle Alt and GUI swap on both sides")
        .aliases(&["AG_TOGG"]),
    k("MAGIC_NO_GUI", "GUI\nOff").tooltip("Disable the GUI keys").aliases(&["GUI_OFF"]),
    k("MAGIC_UNNO_GUI", "GUI\nOn").tooltip("Enable the GUI keys").aliases(&["GUI_ON"]),
    k("MAGIC_SWAP_GRAVE_ESC", "Swap\n`\nEsc").tooltip("Swap ` and Escape").aliases(&["GE_SWAP"]),
    k("MAGIC_UNSWAP_GRAVE_ESC", "Unswap\n`\nEsc").tooltip("Unswap ` and Escape").aliases(&["GE_NORM"]),
    k("MAGIC_SWAP_BACKSLASH_BACKSPACE", "Swap\n\\\nBS")
        .tooltip("Swap \\ and Backspace")
        .aliases(&["BS_SWAP"]),
    k("MAGIC_UNSWAP_BACKSLASH_BACKSPACE", "Unswap\n\\\nBS")
        .tooltip("Unswap \\ and Backspace")
        .aliases(&["BS_NORM"]),
    k("MAGIC_HOST_NKRO", "NKRO\nOn").tooltip("Enable N-key rollover").aliases(&["NK_ON"]),
    k("MAGIC_UNHOST_NKRO", "NKRO\nOff").tooltip("Disable N-key rollover").aliases(&["NK_OFF"]),
    k("MAGIC_TOGGLE_NKRO", "NKRO\nToggle").tooltip("Toggle N-key rollover").aliases(&["NK_TOGG"]),
    k("MAGIC_EE_HANDS_LEFT", "EEH\nLeft")
        .tooltip("Set the master half of a split keyboard as the left hand (for EE_HANDS)")
        .aliases(&["EH_LEFT"]),
    k("MAGIC_EE_HANDS_RIGHT", "EEH\nRight")
        .tooltip("Set the master half of a split keyboard as the right hand (for EE_HANDS)")
        .aliases(&["EH_RGHT"]),
    // Audio
    k("AU_ON", "Audio\nON").tooltip("Audio mode on"),
    k("AU_OFF", "Audio\nOFF").tooltip("Audio mode off"),
    k("AU_TOG", "Audio\nToggle").tooltip("Toggles audio mode"),
    k("CLICKY_TOGGLE", "Clicky\nToggle").tooltip("Toggles clicky sounds").aliases(&["CK_TOGG"]),
    k("CLICKY_UP", "Clicky\nUp").tooltip("Increases frequency of the clicks").aliases(&["CK_UP"]),
    k("CLICKY_DOWN", "Clicky\nDown").tooltip("Decreases frequency of the clicks").aliases(&["CK_DOWN"]),
    k("CLICKY_RESET", "Clicky\nReset").tooltip("Resets frequency to default").aliases(&["CK_RST"]),
    k("MU_ON", "Music\nOn").tooltip("Turns on Music Mode"),
    k("MU_OFF", "Music\nOff").tooltip("Turns off Music Mode"),
    k("MU_TOG", "Music\nToggle").tooltip("Toggles Music Mode"),
    k("MU_MOD", "Music\nCycle").tooltip("Cycles through the music modes"),
    // Haptic
    k("HPT_ON", "Haptic\nOn").tooltip("Turn haptic feedback on"),
    k("HPT_OFF", "Haptic\nOff").tooltip("Turn haptic feedback off"),
    k("HPT_TOG", "Haptic\nToggle").tooltip("Toggle haptic feedback on/off"),
    k("HPT_RST", "Haptic\nReset").tooltip("Reset haptic feedback config to default"),
    k("HPT_FBK", "Haptic\nFeed\nback").tooltip("Toggle feedback to occur on keypress, release or both"),
    k("HPT_BUZ", "Haptic\nBuzz").tooltip("Toggle solenoid buzz on/off"),
    k("HPT_MODI", "Haptic\nNext").tooltip("Go to next DRV2605L waveform"),
    k("HPT_MODD", "Haptic\nPrev").tooltip("Go to previous DRV2605L waveform"),
    k("HPT_CONT", "Haptic\nCont.").tooltip("Toggle continuous haptic mode on/off"),
    k("HPT_CONI", "Haptic\n+").tooltip("Increase DRV2605L continous haptic strength"),
    k("HPT_COND", "Haptic\n-").tooltip("Decrease DRV2605L continous haptic strength"),
    k("HPT_DWLI", "Haptic\nDwell+").tooltip("Increase Solenoid dwell time"),
    k("HPT_DWLD", "Haptic\nDwell-").tooltip("Decrease Solenoid dwell time"),
    // Auto shift
    k("KC_ASDN", "Auto-\nshift\nDown").tooltip("Lower the Auto Shift timeout variable (down)"),
    k("KC_ASUP", "Auto-\nshift\nUp").tooltip("Raise the Auto Shift timeout variable (up)"),
    k("KC_ASRP", "Auto-\nshift\nReport").tooltip("Report your current Auto Shift timeout value"),
    k("KC_ASON", "Auto-\nshift\nOn").tooltip("Turns on the Auto Shift Function"),
    k("KC_ASOFF", "Auto-\nshift\nOff").tooltip("Turns off the Auto Shift Function"),
    k("KC_ASTG", "Auto-\nshift\nToggle").tooltip("Toggles the state of the Auto Shift feature"),
    // Combos
    k("CMB_ON", "Combo\nOn").tooltip("Turns on Combo feature"),
    k("CMB_OFF", "Combo\nOff").tooltip("Turns off Combo feature"),
    k("CMB_TOG", "Combo\nToggle").tooltip("Toggles Combo feature on and off"),
];

pub const BACKLIGHT: &[KeycodeDef] = &[
    k("BL_TOGG", "BL\nToggle").tooltip("Turn the backlight on or off"),
    k("BL_STEP", "BL\nCycle").tooltip("Cycle through backlight levels"),
    k("BL_BRTG", "BL\nBreath").tooltip("Toggle backlight breathing"),
    k("BL_ON", "BL On").tooltip("Set the backlight to max brightness"),
    k("BL_OFF", "BL Off").tooltip("Turn the backlight off"),
    k("BL_INC", "BL +").tooltip("Increase the backlight level"),
    k("BL_DEC", "BL - ").tooltip("Decrease the backlight level"),
    k("RGB_TOG", "RGB\nToggle").tooltip("Toggle RGB lighting on or off"),
    k("RGB_MOD", "RGB\nMode +").tooltip("Next RGB mode"),
    k("RGB_RMOD", "RGB\nMode -").tooltip("Previous RGB mode"),
    k("RGB_HUI", "Hue +").tooltip("Increase hue"),
    k("RGB_HUD", "Hue -").tooltip("Decrease hue"),
    k("RGB_SAI", "Sat +").tooltip("Increase saturation"),
    k("RGB_SAD", "Sat -").tooltip("Decrease saturation"),
    k("RGB_VAI", "Bright +").tooltip("Increase value"),
    k("RGB_VAD", "Bright -").tooltip("Decrease value"),
    k("RGB_SPI", "Effect +").tooltip("Increase RGB effect speed"),
    k("RGB_SPD", "Effect -").tooltip("Decrease RGB effect speed"),
    k("RGB_M_P", "RGB\nMode P").tooltip("RGB Mode: Plain"),
    k("RGB_M_B", "RGB\nMode B").tooltip("RGB Mode: Breathe"),
    k("RGB_M_R", "RGB\nMode R").tooltip("RGB Mode: Rainbow"),
    k("RGB_M_SW", "RGB\nMode SW").tooltip("RGB Mode: Swirl"),
    k("RGB_M_SN", "RGB\nMode SN").tooltip("RGB Mode: Snake"),
    k("RGB_M_K", "RGB\nMode K").tooltip("RGB Mode: Knight Rider"),
    k("RGB_M_X", "RGB\nMode X").tooltip("RGB Mode: Christmas"),
    k("RGB_M_G", "RGB\nMode G").tooltip("RGB Mode: Gradient"),
    k("RGB_M_T", "RGB\nMode T").tooltip("RGB Mode: Test"),
];

pub const MEDIA: &[KeycodeDef] = &[
    k("KC_F13", "F13"),
    k("KC_F14", "F14"),
    k("KC_F15", "F15"),
    k("KC_F16", "F16"),
    k("KC_F17", "F17"),
    k("KC_F18", "F18"),
    k("KC_F19", "F19"),
    k("KC_F20", "F20"),
    k("KC_F21", "F21"),
    k("KC_F22", "F22"),
    k("KC_F23", "F23"),
    k("KC_F24", "F24"),
    k("KC_PWR", "Power").tooltip("System Power Down").aliases(&["KC_SYSTEM_POWER"]),
    k("KC_SLEP", "Sleep").tooltip("System Sleep").aliases(&["KC_SYSTEM_SLEEP"]),
    k("KC_WAKE", "Wake").tooltip("System Wake").aliases(&["KC_SYSTEM_WAKE"]),
    k("KC_EXEC", "Exec").tooltip("Execute").aliases(&["KC_EXECUTE"]),
    k("KC_HELP", "Help"),
    k("KC_SLCT", "Select").aliases(&["KC_SELECT"]),
    k("KC_STOP", "Stop"),
    k("KC_AGIN", "Again").aliases(&["KC_AGAIN"]),
    k("KC_UNDO", "Undo"),
    k("KC_CUT", "Cut"),
    k("KC_COPY", "Copy"),
    k("KC_PSTE", "Paste").aliases(&["KC_PASTE"]),
    k("KC_FIND", "Find"),
    k("KC_CALC", "Calc").tooltip("Launch Calculator (Windows)").aliases(&["KC_CALCULATOR"]),
    k("KC_MAIL", "Mail").tooltip("Launch Mail (Windows)"),
    k("KC_MSEL", "Media\nPlayer").tooltip("Launch Media Player (Windows)").aliases(&["KC_MEDIA_SELECT"]),
    k("KC_MYCM", "My\nPC").tooltip("Launch My Computer (Windows)").aliases(&["KC_MY_COMPUTER"]),
    k("KC_WSCH", "Browser\nSearch").tooltip("Browser Search (Windows)").aliases(&["KC_WWW_SEARCH"]),
    k("KC_WHOM", "Browser\nHome").tooltip("Browser Home (Windows)").aliases(&["KC_WWW_HOME"]),
    k("KC_WBAK", "Browser\nBack").tooltip("Browser Back (Windows)").aliases(&["KC_WWW_BACK"]),
    k("KC_WFWD", "Browser\nForward").tooltip("Browser Forward (Windows)").aliases(&["KC_WWW_FORWARD"]),
    k("KC_WSTP", "Browser\nStop").tooltip("Browser Stop (Windows)").aliases(&["KC_WWW_STOP"]),
    k("KC_WREF", "Browser\nRefresh").tooltip("Browser Refresh (Windows)").aliases(&["KC_WWW_REFRESH"]),
    k("KC_WFAV", "Browser\nFav.").tooltip("Browser Favorites (Windows)").aliases(&["KC_WWW_FAVORITES"]),
    k("KC_BRIU", "Bright.\nUp").tooltip("Increase the brightness of screen (Laptop)").aliases(&["KC_BRIGHTNESS_UP"]),
    k("KC_BRID", "Bright.\nDown").tooltip("Decrease the brightness of screen (Laptop)").aliases(&["KC_BRIGHTNESS_DOWN"]),
    k("KC_MPRV", "Media\nPrev").tooltip("Previous Track").aliases(&["KC_MEDIA_PREV_TRACK"]),
    k("KC_MNXT", "Media\nNext").tooltip("Next Track").aliases(&["KC_MEDIA_NEXT_TRACK"]),
    k("KC_MUTE", "Mute").tooltip("Mute Audio").aliases(&["KC_AUDIO_MUTE"]),
    k("KC_VOLD", "Vol -").tooltip("Volume Down").aliases(&["KC_AUDIO_VOL_DOWN"]),
    k("KC_VOLU", "Vol +").tooltip("Volume Up").aliases(&["KC_AUDIO_VOL_UP"]),
    k("KC__VOLDOWN", "Vol -\nAlt").tooltip("Volume Down Alternate"),
    k("KC__VOLUP", "Vol +\nAlt").tooltip("Volume Up Alternate"),
    k("KC_MSTP", "Media\nStop").aliases(&["KC_MEDIA_STOP"]),
    k("KC_MPLY", "Media\nPlay").tooltip("Play/Pause").aliases(&["KC_MEDIA_PLAY_PAUSE"]),
    k("KC_MRWD", "Prev\nTrack\n(macOS)")
        .tooltip("Previous Track / Rewind (macOS)")
        .aliases(&["KC_MEDIA_REWIND"]),
    k("KC_MFFD", "Next\nTrack\n(macOS)")
        .tooltip("Next Track / Fast Forward (macOS)")
        .aliases(&["KC_MEDIA_FAST_FORWARD"]),
    k("KC_EJCT", "Eject").tooltip("Eject (macOS)").aliases(&["KC_MEDIA_EJECT"]),
    k("KC_MS_U", "Mouse\nUp").tooltip("Mouse Cursor Up").aliases(&["KC_MS_UP"]),
    k("KC_MS_D", "Mouse\nDown").tooltip("Mouse Cursor Down").aliases(&["KC_MS_DOWN"]),
    k("KC_MS_L", "Mouse\nLeft").tooltip("Mouse Cursor Left").aliases(&["KC_MS_LEFT"]),
    k("KC_MS_R", "Mouse\nRight").tooltip("Mouse Cursor Right").aliases(&["KC_MS_RIGHT"]),
    k("KC_BTN1", "Mouse\n1").tooltip("Mouse Button 1").aliases(&["KC_MS_BTN1"]),
    k("KC_BTN2", "Mouse\n2").tooltip("Mouse Button 2").aliases(&["KC_MS_BTN2"]),
    k("KC_BTN3", "Mouse\n3").tooltip("Mouse Button 3").aliases(&["KC_MS_BTN3"]),
    k("KC_BTN4", "Mouse\n4").tooltip("Mouse Button 4").aliases(&["KC_MS_BTN4"]),
    k("KC_BTN5", "Mouse\n5").tooltip("Mouse Button 5").aliases(&["KC_MS_BTN5"]),
    k("KC_WH_U", "Mouse\nWheel\nUp").aliases(&["KC_MS_WH_UP"]),
    k("KC_WH_D", "Mouse\nWheel\nDown").aliases(&["KC_MS_WH_DOWN"]),
    k("KC_WH_L", "Mouse\nWheel\nLeft").aliases(&["KC_MS_WH_LEFT"]),
    k("KC_WH_R", "Mouse\nWheel\nRight").aliases(&["KC_MS_WH_RIGHT"]),
    k("KC_ACL0", "Mouse\nAccel\n0").tooltip("Set mouse acceleration to 0").aliases(&["KC_MS_ACCEL0"]),
    k("KC_ACL1", "Mouse\nAccel\n1").tooltip("Set mouse acceleration to 1").aliases(&["KC_MS_ACCEL1"]),
    k("KC_ACL2", "Mouse\nAccel\n2").tooltip("Set mouse acceleration to 2").aliases(&["KC_MS_ACCEL2"]),
    k("KC_LCAP", "Locking\nCaps").tooltip("Locking Caps Lock").aliases(&["KC_LOCKING_CAPS"]),
    k("KC_LNUM", "Locking\nNum").tooltip("Locking Num Lock").aliases(&["KC_LOCKING_NUM"]),
    k("KC_LSCR", "Locking\nScroll").tooltip("Locking Scroll Lock").aliases(&["KC_LOCKING_SCROLL"]),
];

/// Dynamic macro controls, appended to the macro group whatever the slot count.
pub const MACRO_CONTROLS: &[KeycodeDef] = &[
    k("DYN_REC_START1", "DM1\nRec").tooltip("Dynamic Macro 1 Rec Start").aliases(&["DM_REC1"]),
    k("DYN_REC_START2", "DM2\nRec").tooltip("Dynamic Macro 2 Rec Start").aliases(&["DM_REC2"]),
    k("DYN_REC_STOP", "DM Rec\nStop").tooltip("Dynamic Macro Rec Stop").aliases(&["DM_RSTP"]),
    k("DYN_MACRO_PLAY1", "DM1\nPlay").tooltip("Dynamic Macro 1 Play").aliases(&["DM_PLY1"]),
    k("DYN_MACRO_PLAY2", "DM2\nPlay").tooltip("Dynamic Macro 2 Play").aliases(&["DM_PLY2"]),
];

const fn note(id: &'static str, label: &'static str, tooltip: &'static str) -> KeycodeDef {
    KeycodeDef::new(id, label).tooltip(tooltip)
}

pub const MIDI_BASIC: &[KeycodeDef] = &[
    note("MI_C", "ᴹᴵᴰᴵ\nC", "Midi send note C"),
    note("MI_Cs", "ᴹᴵᴰᴵ\nC#/Dᵇ", "Midi send note C#/Dᵇ").aliases(&["MI_Db"]),
    note("MI_D", "ᴹᴵᴰᴵ\nD", "Midi send note D"),
    note("MI_Ds", "ᴹᴵᴰᴵ\nD#/Eᵇ", "Midi send note D#/Eᵇ").aliases(&["MI_Eb"]),
    note("MI_E", "ᴹᴵᴰᴵ\nE", "Midi send note E"),
    note("MI_F", "ᴹᴵᴰᴵ\nF", "Midi send note F"),
    note("MI_Fs", "ᴹᴵᴰᴵ\nF#/Gᵇ", "Midi send note F#/Gᵇ").aliases(&["MI_Gb"]),
    note("MI_G", "ᴹᴵᴰᴵ\nG", "Midi send note G"),
    note("MI_Gs", "ᴹᴵᴰᴵ\nG#/Aᵇ", "Midi send note G#/Aᵇ").aliases(&["MI_Ab"]),
    note("MI_A", "ᴹᴵᴰᴵ\nA", "Midi send note A"),
    note("MI_As", "ᴹᴵᴰᴵ\nA#/Bᵇ", "Midi send note A#/Bᵇ").aliases(&["MI_Bb"]),
    note("MI_B", "ᴹᴵᴰᴵ\nB", "Midi send note B"),
    note("MI_C_1", "ᴹᴵᴰᴵ\nC₁", "Midi send note C₁"),
    note("MI_Cs_1", "ᴹᴵᴰᴵ\nC#₁/Dᵇ₁", "Midi send note C#₁/Dᵇ₁").aliases(&["MI_Db_1"]),
    note("MI_D_1", "ᴹᴵᴰᴵ\nD₁", "Midi send note D₁"),
    note("MI_Ds_1", "ᴹᴵᴰᴵ\nD#₁/Eᵇ₁", "Midi send note D#₁/Eᵇ₁").aliases(&["MI_Eb_1"]),
    note("MI_E_1", "ᴹᴵᴰᴵ\nE₁", "Midi send note E₁"),
    note("MI_F_1", "ᴹᴵᴰᴵ\nF₁", "Midi send note F₁"),
    note("MI_Fs_1", "ᴹᴵᴰᴵ\nF#₁/Gᵇ₁", "Midi send note F#₁/Gᵇ₁").aliases(&["MI_Gb_1"]),
    note("MI_G_1", "ᴹᴵᴰᴵ\nG₁", "Midi send note G₁"),
    note("MI_Gs_1", "ᴹᴵᴰᴵ\nG#₁/Aᵇ₁", "Midi send note G#₁/Aᵇ₁").aliases(&["MI_Ab_1"]),
    note("MI_A_1", "ᴹᴵᴰᴵ\nA₁", "Midi send note A₁"),
    note("MI_As_1", "ᴹᴵᴰᴵ\nA#₁/Bᵇ₁", "Midi send note A#₁/Bᵇ₁").aliases(&["MI_Bb_1"]),
    note("MI_B_1", "ᴹᴵᴰᴵ\nB₁", "Midi send note B₁"),
    note("MI_C_2", "ᴹᴵᴰᴵ\nC₂", "Midi send note C₂"),
    note("MI_Cs_2", "ᴹᴵᴰᴵ\nC#₂/Dᵇ₂", "Midi send note C#₂/Dᵇ₂").aliases(&["MI_Db_2"]),
    note("MI_D_2", "ᴹᴵᴰᴵ\nD₂", "Midi send note D₂"),
    note("MI_Ds_2", "ᴹᴵᴰᴵ\nD#₂/Eᵇ₂", "Midi send note D#₂/Eᵇ₂").aliases(&["MI_Eb_2"]),
    note("MI_E_2", "ᴹᴵᴰᴵ\nE₂", "Midi send note E₂"),
    note("MI_F_2", "ᴹᴵᴰᴵ\nF₂", "Midi send note F₂"),
    note("MI_Fs_2", "ᴹᴵᴰᴵ\nF#₂/Gᵇ₂", "Midi send note F#₂/Gᵇ₂").aliases(&["MI_Gb_2"]),
    note("MI_G_2", "ᴹᴵᴰᴵ\nG₂", "Midi send note G₂"),
    note("MI_Gs_2", "ᴹᴵᴰᴵ\nG#₂/Aᵇ₂", "Midi send note G#₂/Aᵇ₂").aliases(&["MI_Ab_2"]),
    note("MI_A_2", "ᴹᴵᴰᴵ\nA₂", "Midi send note A₂"),
    note("MI_As_2", "ᴹᴵᴰᴵ\nA#₂/Bᵇ₂", "Midi send note A#₂/Bᵇ₂").aliases(&["MI_Bb_2"]),
    note("MI_B_2", "ᴹᴵᴰᴵ\nB₂", "Midi send note B₂"),
    note("MI_C_3", "ᴹᴵᴰᴵ\nC₃", "Midi send note C₃"),
    note("MI_Cs_3", "ᴹᴵᴰᴵ\nC#₃/Dᵇ₃", "Midi send note C#₃/Dᵇ₃").aliases(&["MI_Db_3"]),
    note("MI_D_3", "ᴹᴵᴰᴵ\nD₃", "Midi send note D₃"),
    note("MI_Ds_3", "ᴹᴵᴰᴵ\nD#₃/Eᵇ₃", "Midi send note D#₃/Eᵇ₃").aliases(&["MI_Eb_3"]),
    note("MI_E_3", "ᴹᴵᴰᴵ\nE₃", "Midi send note E₃"),
    note("MI_F_3", "ᴹᴵᴰᴵ\nF₃", "Midi send note F₃"),
    note("MI_Fs_3", "ᴹᴵᴰᴵ\nF#₃/Gᵇ₃", "Midi send note F#₃/Gᵇ₃").aliases(&["MI_Gb_3"]),
    note("MI_G_3", "ᴹᴵᴰᴵ\nG₃", "Midi send note G₃"),
    note("MI_Gs_3", "ᴹᴵᴰᴵ\nG#₃/Aᵇ₃", "Midi send note G#₃/Aᵇ₃").aliases(&["MI_Ab_3"]),
    note("MI_A_3", "ᴹᴵᴰᴵ\nA₃", "Midi send note A₃"),
    note("MI_As_3", "ᴹᴵᴰᴵ\nA#₃/Bᵇ₃", "Midi send note A#₃/Bᵇ₃").aliases(&["MI_Bb_3"]),
    note("MI_B_3", "ᴹᴵᴰᴵ\nB₃", "Midi send note B₃"),
    note("MI_C_4", "ᴹᴵᴰᴵ\nC₄", "Midi send note C₄"),
    note("MI_Cs_4", "ᴹᴵᴰᴵ\nC#₄/Dᵇ₄", "Midi send note C#₄/Dᵇ₄").aliases(&["MI_Db_4"]),
    note("MI_D_4", "ᴹᴵᴰᴵ\nD₄", "Midi send note D₄"),
    note("MI_Ds_4", "ᴹᴵᴰᴵ\nD#₄/Eᵇ₄", "Midi send note D#₄/Eᵇ₄").aliases(&["MI_Eb_4"]),
    note("MI_E_4", "ᴹᴵᴰᴵ\nE₄", "Midi send note E₄"),
    note("MI_F_4", "ᴹᴵᴰᴵ\nF₄", "Midi send note F₄"),
    note("MI_Fs_4", "ᴹᴵᴰᴵ\nF#₄/Gᵇ₄", "Midi send note F#₄/Gᵇ₄").aliases(&["MI_Gb_4"]),
    note("MI_G_4", "ᴹᴵᴰᴵ\nG₄", "Midi send note G₄"),
    note("MI_Gs_4", "ᴹᴵᴰᴵ\nG#₄/Aᵇ₄", "Midi send note G#₄/Aᵇ₄").aliases(&["MI_Ab_4"]),
    note("MI_A_4", "ᴹᴵᴰᴵ\nA₄", "Midi send note A₄"),
    note("MI_As_4", "ᴹᴵᴰᴵ\nA#₄/Bᵇ₄", "Midi send note A#₄/Bᵇ₄").aliases(&["MI_Bb_4"]),
    note("MI_B_4", "ᴹᴵᴰᴵ\nB₄", "Midi send note B₄"),
    note("MI_C_5", "ᴹᴵᴰᴵ\nC₅", "Midi send note C₅"),
    note("MI_Cs_5", "ᴹᴵᴰᴵ\nC#₅/Dᵇ₅", "Midi send note C#₅/Dᵇ₅").aliases(&["MI_Db_5"]),
    note("MI_D_5", "ᴹᴵᴰᴵ\nD₅", "Midi send note D₅"),
    note("MI_Ds_5", "ᴹᴵᴰᴵ\nD#₅/Eᵇ₅", "Midi send note D#₅/Eᵇ₅").aliases(&["MI_Eb_5"]),
    note("MI_E_5", "ᴹᴵᴰᴵ\nE₅", "Midi send note E₅"),
    note("MI_F_5", "ᴹᴵᴰᴵ\nF₅", "Midi send note F₅"),
    note("MI_Fs_5", "ᴹᴵᴰᴵ\nF#₅/Gᵇ₅", "Midi send note F#₅/Gᵇ₅").aliases(&["MI_Gb_5"]),
    note("MI_G_5", "ᴹᴵᴰᴵ\nG₅", "Midi send note G₅"),
    note("MI_Gs_5", "ᴹᴵᴰᴵ\nG#₅/Aᵇ₅", "Midi send note G#₅/Aᵇ₅").aliases(&["MI_Ab_5"]),
    note("MI_A_5", "ᴹᴵᴰᴵ\nA₅", "Midi send note A₅"),
    note("MI_As_5", "ᴹᴵᴰᴵ\nA#₅/Bᵇ₅", "Midi send note A#₅/Bᵇ₅").aliases(&["MI_Bb_5"]),
    note("MI_B_5", "ᴹᴵᴰᴵ\nB₅", "Midi send note B₅"),
    note("MI_ALLOFF", "ᴹᴵᴰᴵ\nNotesᵒᶠᶠ", "Midi send all notes OFF"),
];

pub const MIDI_ADVANCED: &[KeycodeDef] = &[
    note("MI_OCT_N2", "ᴹᴵᴰᴵ\nOct₋₂", "Midi set octave to -2"),
    note("MI_OCT_N1", "ᴹᴵᴰᴵ\nOct₋₁", "Midi set octave to -1"),
    note("MI_OCT_0", "ᴹᴵᴰᴵ\nOct₀", "Midi set octave to 0"),
    note("MI_OCT_1", "ᴹᴵᴰᴵ\nOct₊₁", "Midi set octave to 1"),
    note("MI_OCT_2", "ᴹᴵᴰᴵ\nOct₊₂", "Midi set octave to 2"),
    note("MI_OCT_3", "ᴹᴵᴰᴵ\nOct₊₃", "Midi set octave to 3"),
    note("MI_OCT_4", "ᴹᴵᴰᴵ\nOct₊₄", "Midi set octave to 4"),
    note("MI_OCT_5", "ᴹᴵᴰᴵ\nOct₊₅", "Midi set octave to 5"),
    note("MI_OCT_6", "ᴹᴵᴰᴵ\nOct₊₆", "Midi set octave to 6"),
    note("MI_OCT_7", "ᴹᴵᴰᴵ\nOct₊₇", "Midi set octave to 7"),
    note("MI_OCTD", "ᴹᴵᴰᴵ\nOctᴰᴺ", "Midi move down an octave"),
    note("MI_OCTU", "ᴹᴵᴰᴵ\nOctᵁᴾ", "Midi move up an octave"),
    note("MI_TRNS_N6", "ᴹᴵᴰᴵ\nTrans₋₆", "Midi set transposition to -6 semitones"),
    note("MI_TRNS_N5", "ᴹᴵᴰᴵ\nTrans₋₅", "Midi set transposition to -5 semitones"),
    note("MI_TRNS_N4", "ᴹᴵᴰᴵ\nTrans₋₄", "Midi set transposition to -4 semitones"),
    note("MI_TRNS_N3", "ᴹᴵᴰᴵ\nTrans₋₃", "Midi set transposition to -3 semitones"),
    note("MI_TRNS_N2", "ᴹᴵᴰᴵ\nTrans₋₂", "Midi set transposition to -2 semitones"),
    note("MI_TRNS_N1", "ᴹᴵᴰᴵ\nTrans₋₁", "Midi set transposition to -1 semitones"),
    note("MI_TRNS_0", "ᴹᴵᴰᴵ\nTrans₀", "Midi set no transposition"),
    note("MI_TRNS_1", "ᴹᴵᴰᴵ\nTrans₊₁", "Midi set transposition to +1 semitones"),
    note("MI_TRNS_2", "ᴹᴵᴰᴵ\nTrans₊₂", "Midi set transposition to +2 semitones"),
    note("MI_TRNS_3", "ᴹᴵᴰᴵ\nTrans₊₃", "Midi set transposition to +3 semitones"),
    note("MI_TRNS_4", "ᴹᴵᴰᴵ\nTrans₊₄", "Midi set transposition to +4 semitones"),
    note("MI_TRNS_5", "ᴹᴵᴰᴵ\nTrans₊₅", "Midi set transposition to +5 semitones"),
    note("MI_TRNS_6", "ᴹᴵᴰᴵ\nTrans₊₆", "Midi set transposition to +6 semitones"),
    note("MI_TRNSD", "ᴹᴵᴰᴵ\nTransᴰᴺ", "Midi decrease transposition"),
    note("MI_TRNSU", "ᴹᴵᴰᴵ\nTransᵁᴾ", "Midi increase transposition"),
    note("MI_VEL_1", "ᴹᴵᴰᴵ\nVel₁", "Midi set velocity to 0").aliases(&["MI_VEL_0"]),
    note("MI_VEL_2", "ᴹᴵᴰᴵ\nVel₂", "Midi set velocity to 25"),
    note("MI_VEL_3", "ᴹᴵᴰᴵ\nVel₃", "Midi set velocity to 38"),
    note("MI_VEL_4", "ᴹᴵᴰᴵ\nVel₄", "Midi set velocity to 51"),
    note("MI_VEL_5", "ᴹᴵᴰᴵ\nVel₅", "Midi set velocity to 64"),
    note("MI_VEL_6", "ᴹᴵᴰᴵ\nVel₆", "Midi set velocity to 76"),
    note("MI_VEL_7", "ᴹᴵᴰᴵ\nVel₇", "Midi set velocity to 89"),
    note("MI_VEL_8", "ᴹᴵᴰᴵ\nVel₈", "Midi set velocity to 102"),
    note("MI_VEL_9", "ᴹᴵᴰᴵ\nVel₉", "Midi set velocity to 114"),
    note("MI_VEL_10", "ᴹᴵᴰᴵ\nVel₁₀", "Midi set velocity to 127"),
    note("MI_VELD", "ᴹᴵᴰᴵ\nVelᴰᴺ", "Midi decrease velocity"),
    note("MI_VELU", "ᴹᴵᴰᴵ\nVelᵁᴾ", "Midi increase velocity"),
    note("MI_CH1", "ᴹᴵᴰᴵ\nCH₁", "Midi set channel to 1"),
    note("MI_CH2", "ᴹᴵᴰᴵ\nCH₂", "Midi set channel to 2"),
    note("MI_CH3", "ᴹᴵᴰᴵ\nCH₃", "Midi set channel to 3"),
    note("MI_CH4", "ᴹᴵᴰᴵ\nCH₄", "Midi set channel to 4"),
    note("MI_CH5", "ᴹᴵᴰᴵ\nCH₅", "Midi set channel to 5"),
    note("MI_CH6", "ᴹᴵᴰᴵ\nCH₆", "Midi set channel to 6"),
    note("MI_CH7", "ᴹᴵᴰᴵ\nCH₇", "Midi set channel to 7"),
    note("MI_CH8", "ᴹᴵᴰᴵ\nCH₈", "Midi set channel to 8"),
    note("MI_CH9", "ᴹᴵᴰᴵ\nCH₉", "Midi set channel to 9"),
    note("MI_CH10", "ᴹᴵᴰᴵ\nCH₁₀", "Midi set channel to 10"),
    note("MI_CH11", "ᴹᴵᴰᴵ\nCH₁₁", "Midi set channel to 11"),
    note("MI_CH12", "ᴹᴵᴰᴵ\nCH₁₂", "Midi set channel to 12"),
    note("MI_CH13", "ᴹᴵᴰᴵ\nCH₁₃", "Midi set channel to 13"),
    note("MI_CH14", "ᴹᴵᴰᴵ\nCH₁₄", "Midi set channel to 14"),
    note("MI_CH15", "ᴹᴵᴰᴵ\nCH₁₅", "Midi set channel to 15"),
    note("MI_CH16", "ᴹᴵᴰᴵ\nCH₁₆", "Midi set channel to 16"),
    note("MI_CHD", "ᴹᴵᴰᴵ\nCHᴰᴺ", "Midi decrease channel"),
    note("MI_CHU", "ᴹᴵᴰᴵ\nCHᵁᴾ", "Midi increase channel"),
    note("MI_SUS", "ᴹᴵᴰᴵ\nSust", "Midi Sustain"),
    note("MI_PORT", "ᴹᴵᴰᴵ\nPort", "Midi Portmento"),
    note("MI_SOST", "ᴹᴵᴰᴵ\nSost", "Midi Sostenuto"),
    note("MI_SOFT", "ᴹᴵᴰᴵ\nSPedal", "Midi Soft Pedal"),
    note("MI_LEG", "ᴹᴵᴰᴵ\nLegat", "Midi Legato"),
    note("MI_MOD", "ᴹᴵᴰᴵ\nModul", "Midi Modulation"),
    note("MI_MODSD", "ᴹᴵᴰᴵ\nModulᴰᴺ", "Midi decrease modulation speed"),
    note("MI_MODSU", "ᴹᴵᴰᴵ\nModulᵁᴾ", "Midi increase modulation speed"),
    note("MI_BENDD", "ᴹᴵᴰᴵ\nBendᴰᴺ", "Midi bend pitch down"),
    note("MI_BENDU", "ᴹᴵᴰᴵ\nBendᵁᴾ", "Midi bend pitch up"),
];

/// Every `TD(n)` value, registered so raw tap dance codes always serialize.
const HIDDEN_TAP_DANCE: usize = 256;

/// Catalog groups converted to shared descriptors, built once per process.
struct StaticCatalog {
    groups: Vec<(KeycodeGroup, Vec<Arc<Keycode>>)>,
    macro_controls: Vec<Arc<Keycode>>,
    midi_basic: Vec<Arc<Keycode>>,
    midi_advanced: Vec<Arc<Keycode>>,
}

fn materialize(defs: &[KeycodeDef]) -> Vec<Arc<Keycode>> {
    defs.iter().map(|def| Arc::new(Keycode::from(def))).collect()
}

fn catalog() -> &'static StaticCatalog {
    static CATALOG: OnceLock<StaticCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let hidden = (0..HIDDEN_TAP_DANCE)
            .map(|n| {
                let id = format!("TD({n})");
                Arc::new(Keycode::new(id.clone(), id))
            })
            .collect();

        StaticCatalog {
            groups: vec![
                (KeycodeGroup::Special, materialize(SPECIAL)),
                (KeycodeGroup::Basic, materialize(BASIC)),
                (KeycodeGroup::Shifted, materialize(SHIFTED)),
                (KeycodeGroup::Iso, materialize(ISO)),
                (KeycodeGroup::Boot, materialize(BOOT)),
                (KeycodeGroup::Modifiers, materialize(MODIFIERS)),
                (KeycodeGroup::Quantum, materialize(QUANTUM)),
                (KeycodeGroup::Backlight, materialize(BACKLIGHT)),
                (KeycodeGroup::Media, materialize(MEDIA)),
                (KeycodeGroup::Hidden, hidden),
            ],
            macro_controls: materialize(MACRO_CONTROLS),
            midi_basic: materialize(MIDI_BASIC),
            midi_advanced: materialize(MIDI_ADVANCED),
        }
    })
}

/// Descriptors of a static group. Dynamic groups are empty here; the
/// generator produces them.
pub fn static_group(group: KeycodeGroup) -> &'static [Arc<Keycode>] {
    catalog()
        .groups
        .iter()
        .find(|(g, _)| *g == group)
        .map(|(_, keycodes)| keycodes.as_slice())
        .unwrap_or(&[])
}

pub fn macro_controls() -> &'static [Arc<Keycode>] {
    &catalog().macro_controls
}

pub fn midi_basic() -> &'static [Arc<Keycode>] {
    &catalog().midi_basic
}

pub fn midi_advanced() -> &'static [Arc<Keycode>] {
    &catalog().midi_advanced
}
