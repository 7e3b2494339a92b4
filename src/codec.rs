//! Text ↔ raw keycode conversion.
//!
//! A masked keycode packs two keycodes into one 16-bit value:
//!
//! ```text
//!   15            8 7             0
//!  +---------------+---------------+
//!  |  outer (mask) |     inner     |
//!  +---------------+---------------+
//!   LSFT(kc)=0x02    KC_A=0x04      → LSFT(KC_A) = 0x0204
//! ```
//!
//! `serialize` never fails: anything it cannot name comes back as a
//! lowercase hex literal that `deserialize` accepts again.

use crate::error::KeycodeError;
use crate::keycode::CompositeId;
use crate::registry::{Generation, KeycodeRegistry};
use tracing::debug;

const OUTER_MASK: u16 = 0xFF00;
const INNER_MASK: u16 = 0x00FF;

/// Input accepted by `deserialize`: either a raw value or keycode text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeycodeValue<'a> {
    Raw(u16),
    Text(&'a str),
}

impl From<u16> for KeycodeValue<'_> {
    fn from(raw: u16) -> Self {
        KeycodeValue::Raw(raw)
    }
}

impl<'a> From<&'a str> for KeycodeValue<'a> {
    fn from(text: &'a str) -> Self {
        KeycodeValue::Text(text)
    }
}

impl<'a> From<&'a String> for KeycodeValue<'a> {
    fn from(text: &'a String) -> Self {
        KeycodeValue::Text(text)
    }
}

impl Generation {
    /// Raw value → keycode text.
    pub fn serialize(&self, raw: u16) -> String {
        let outer = raw & OUTER_MASK;

        if !self.masked_raw.contains(&outer) {
            if let Some(kc) = self.by_raw.get(&raw) {
                return kc.id().to_string();
            }
        } else if let (Some(outer_kc), Some(inner_kc)) =
            (self.by_raw.get(&outer), self.by_raw.get(&(raw & INNER_MASK)))
        {
            if outer_kc.is_masked() {
                return CompositeId::from_template(outer_kc.id(), inner_kc.id()).to_string();
            }
        }

        format!("{raw:#x}")
    }

    /// Lenient text → raw conversion; anything unparseable becomes `0`.
    ///
    /// `0` is also `KC_NO`, so callers cannot tell the two apart. Use
    /// [`deserialize_strict`](Self::deserialize_strict) when that matters.
    pub fn deserialize<'a>(&self, value: impl Into<KeycodeValue<'a>>) -> u16 {
        let value = value.into();
        match self.deserialize_strict(value) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(?value, error = %e, "Keycode deserialization failed, using 0");
                0
            }
        }
    }

    /// Text → raw conversion that reports why the text was rejected.
    pub fn deserialize_strict<'a>(&self, value: impl Into<KeycodeValue<'a>>) -> Result<u16, KeycodeError> {
        match value.into() {
            KeycodeValue::Raw(raw) => Ok(raw),
            KeycodeValue::Text(text) => {
                if let Some(kc) = self.find(text) {
                    return self.resolve(kc.id());
                }
                debug!(text, "Not a registered keycode, evaluating as expression");
                Ok(self.parser.parse(text, self)?)
            }
        }
    }

    /// Canonical text of a keycode, e.g. `KC_TILD` → `LSFT(KC_GRAVE)`.
    pub fn normalize(&self, text: &str) -> String {
        self.serialize(self.deserialize(text))
    }

    /// Raw value of a known id or alias in the active protocol table.
    pub fn resolve(&self, id: &str) -> Result<u16, KeycodeError> {
        let canonical = self.find(id).map_or(id, |kc| kc.id());
        self.table.get(canonical).ok_or_else(|| KeycodeError::ResolutionMiss {
            id: id.to_string(),
            protocol: self.protocol(),
        })
    }
}

impl KeycodeRegistry {
    pub fn serialize(&self, raw: u16) -> String {
        self.snapshot().serialize(raw)
    }

    pub fn deserialize<'a>(&self, value: impl Into<KeycodeValue<'a>>) -> u16 {
        self.snapshot().deserialize(value)
    }

    pub fn deserialize_strict<'a>(&self, value: impl Into<KeycodeValue<'a>>) -> Result<u16, KeycodeError> {
        self.snapshot().deserialize_strict(value)
    }

    pub fn normalize(&self, text: &str) -> String {
        self.snapshot().normalize(text)
    }

    pub fn resolve(&self, id: &str) -> Result<u16, KeycodeError> {
        self.snapshot().resolve(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpressionError;
    use crate::generator::Capabilities;
    use crate::protocol::Protocol;

    fn registry(protocol: Protocol) -> KeycodeRegistry {
        KeycodeRegistry::for_capabilities(&Capabilities::new(protocol).with_layers(4).with_macros(2)).unwrap()
    }

    // --- serialize tests ---

    #[test]
    fn test_serialize_flat() {
        let r = registry(Protocol::V6);
        assert_eq!(r.serialize(0x04), "KC_A");
        assert_eq!(r.serialize(0x00), "KC_NO");
        assert_eq!(r.serialize(0x7C00), "RESET");
        assert_eq!(r.serialize(0x5221), "MO(1)");
        assert_eq!(r.serialize(0x7701), "M1");
    }

    #[test]
    fn test_serialize_masked() {
        let r = registry(Protocol::V6);
        assert_eq!(r.serialize(0x0204), "LSFT(KC_A)");
        assert_eq!(r.serialize(0x432C), "LT3(KC_SPACE)");
        assert_eq!(r.serialize(0x2229), "LSFT_T(KC_ESCAPE)");
        // The shifted symbol table collapses into its wrapped form
        assert_eq!(r.serialize(0x0235), "LSFT(KC_GRAVE)");
    }

    #[test]
    fn test_serialize_protocol_specific() {
        assert_eq!(registry(Protocol::V5).serialize(0x6204), "LSFT_T(KC_A)");
        assert_eq!(registry(Protocol::V6).serialize(0x6204), "0x6204");
        assert_eq!(registry(Protocol::V5).serialize(0x2204), "0x2204");
    }

    #[test]
    fn test_serialize_hex_fallback() {
        let r = registry(Protocol::V6);
        let text = r.serialize(0x7FFF);
        assert_eq!(text, "0x7fff");
        assert_eq!(u16::from_str_radix(text.trim_start_matches("0x"), 16).unwrap(), 0x7FFF);
        // Layer-tap past the registered layers is not decomposed
        assert_eq!(r.serialize(0x4504), "0x4504");
        // Known mask, unknown inner
        assert_eq!(r.serialize(0x02E8), "0x2e8");
    }

    // --- deserialize tests ---

    #[test]
    fn test_deserialize_raw_is_identity() {
        let r = registry(Protocol::V6);
        assert_eq!(r.deserialize(0x1234u16), 0x1234);
        assert_eq!(r.deserialize_strict(KeycodeValue::Raw(0xFFFF)).unwrap(), 0xFFFF);
    }

    #[test]
    fn test_deserialize_ids_and_aliases() {
        let r = registry(Protocol::V6);
        assert_eq!(r.deserialize("KC_A"), 0x04);
        assert_eq!(r.deserialize("KC_ENT"), 0x28);
        assert_eq!(r.deserialize("CL_SWAP"), 0x7000);
        assert_eq!(r.deserialize("LSFT"), 0x0200);
        assert_eq!(r.deserialize("kc"), 0x00);
        let owned = String::from("KC_B");
        assert_eq!(r.deserialize(&owned), 0x05);
    }

    #[test]
    fn test_deserialize_expressions() {
        let r = registry(Protocol::V6);
        assert_eq!(r.deserialize("LSFT(KC_A)"), 0x0204);
        assert_eq!(r.deserialize("LCTL(LSFT(KC_A))"), 0x0304);
        assert_eq!(r.deserialize("LT3(KC_SPACE)"), 0x432C);
        assert_eq!(r.deserialize("0x7fff"), 0x7FFF);
        // Unregistered but valid in the protocol table
        assert_eq!(r.deserialize("MO(10)"), 0x522A);
    }

    #[test]
    fn test_deserialize_lenient_vs_strict() {
        let r = registry(Protocol::V6);
        assert_eq!(r.deserialize("definitely not a keycode"), 0);
        let err = r.deserialize_strict("KC_BOGUS").unwrap_err();
        assert!(matches!(
            err,
            KeycodeError::Expression(ExpressionError::UnknownIdentifier(ref id)) if id == "KC_BOGUS"
        ));
    }

    #[test]
    fn test_deserialize_zero_is_ambiguous() {
        let r = registry(Protocol::V6);
        // Known limitation: an explicit KC_NO and a failed parse look the same
        assert_eq!(r.deserialize("KC_NO"), r.deserialize("KC_BOGUS"));
        assert!(r.deserialize_strict("KC_NO").is_ok());
        assert!(r.deserialize_strict("KC_BOGUS").is_err());
    }

    // --- normalize and resolve tests ---

    #[test]
    fn test_normalize() {
        let r = registry(Protocol::V6);
        assert_eq!(r.normalize("KC_ENT"), "KC_ENTER");
        assert_eq!(r.normalize("KC_TILD"), "LSFT(KC_GRAVE)");
        assert_eq!(r.normalize("LCS(KC_A)"), "C_S(KC_A)");
        assert_eq!(r.normalize("0x04"), "KC_A");
        assert_eq!(r.normalize("garbage"), "KC_NO");
    }

    #[test]
    fn test_resolve() {
        let r = registry(Protocol::V5);
        assert_eq!(r.resolve("RESET").unwrap(), 0x5C00);
        assert_eq!(r.resolve("KC_ESC").unwrap(), 0x29);
        assert_eq!(r.resolve("LSFT(kc)").unwrap(), 0x0200);
        assert!(matches!(r.resolve("KC_BOGUS"), Err(KeycodeError::ResolutionMiss { .. })));
    }
}
