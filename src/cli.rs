// CLI definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vial_keycodes::{KeycodeGroup, MidiLevel, Protocol};

#[derive(Parser)]
#[command(name = "vial-keycodes")]
#[command(author, version, about = "Inspect and convert Vial/QMK keycodes")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Keycode protocol (v5, v6)
    #[arg(long, global = true, default_value = "v6")]
    pub protocol: Protocol,

    /// Number of keymap layers
    #[arg(long, global = true, default_value_t = 4)]
    pub layers: usize,

    /// Number of macro slots
    #[arg(long, global = true, default_value_t = 16)]
    pub macros: usize,

    /// Number of tap dance slots
    #[arg(long = "tap-dance", global = true, default_value_t = 0)]
    pub tap_dance: usize,

    /// MIDI keycode level (none, basic, advanced)
    #[arg(long, global = true, default_value = "none")]
    pub midi: MidiLevel,

    /// Capabilities file (.json or .toml); overrides the flags above
    #[arg(long = "caps", global = true, value_name = "FILE")]
    pub caps_file: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Raw value to keycode text (hex with 0x, or decimal)
    #[command(visible_alias = "ser")]
    Serialize { raw: String },

    /// Keycode text to raw value
    #[command(visible_alias = "de")]
    Deserialize {
        text: String,
        /// Fail on unknown text instead of printing 0
        #[arg(long)]
        strict: bool,
    },

    /// Canonical text of a keycode
    #[command(visible_alias = "norm")]
    Normalize { text: String },

    /// Label, tooltip, mask flag and raw value of a keycode
    #[command(visible_alias = "i")]
    Info { id: String },

    /// List registered keycodes
    #[command(visible_alias = "ls")]
    List {
        /// Only this group (special, basic, layers, macro, user, midi, ...)
        #[arg(short, long)]
        group: Option<KeycodeGroup>,
    },
}

/// Parse `0x`-prefixed hex or decimal.
pub fn parse_raw(text: &str) -> Result<u16, std::num::ParseIntError> {
    let text = text.trim();
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => text.parse(),
    }
}
