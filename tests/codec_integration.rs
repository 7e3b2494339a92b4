//! Integration tests for keycode serialization.
//!
//! Every check runs against a fully populated registry on both protocols:
//! all layers and macros, every tap dance slot, advanced MIDI and a custom
//! keycode list.

use vial_keycodes::{
    Capabilities, CompositeId, CustomKeycode, KeycodeError, KeycodeRegistry, KeycodeValue,
    MidiLevel, Protocol,
};

fn custom_keycodes() -> Vec<CustomKeycode> {
    vec![
        CustomKeycode::new("CUSTOM_RGB_NEXT", "Next lighting effect", "RGB\nNext"),
        CustomKeycode::new("CUSTOM_SLEEP", "Put the board to sleep", "Sleep"),
    ]
}

fn full_registry(protocol: Protocol) -> KeycodeRegistry {
    let caps = Capabilities::new(protocol)
        .with_layers(protocol.max_layers())
        .with_macros(protocol.max_macros())
        .with_tap_dance(256)
        .with_midi(MidiLevel::Advanced)
        .with_custom_keycodes(custom_keycodes());
    KeycodeRegistry::for_capabilities(&caps).unwrap()
}

// ── Round trips ──

#[test]
fn every_descriptor_round_trips() {
    for protocol in Protocol::ALL {
        let registry = full_registry(protocol);
        let snapshot = registry.snapshot();

        for kc in snapshot.keycodes() {
            let raw = snapshot.resolve(kc.id()).unwrap();
            let text = snapshot.serialize(raw);
            assert_eq!(
                snapshot.deserialize_strict(text.as_str()).unwrap(),
                raw,
                "{protocol}: {} -> {raw:#06x} -> {text}",
                kc.id()
            );
        }
    }
}

#[test]
fn every_raw_value_round_trips() {
    for protocol in Protocol::ALL {
        let snapshot = full_registry(protocol).snapshot();
        for raw in 0..=u16::MAX {
            let text = snapshot.serialize(raw);
            assert_eq!(
                snapshot.deserialize_strict(text.as_str()).unwrap(),
                raw,
                "{protocol}: {raw:#06x} -> {text}"
            );
        }
    }
}

#[test]
fn masked_outer_with_basic_inner_serializes_as_composite() {
    for protocol in Protocol::ALL {
        let snapshot = full_registry(protocol).snapshot();
        let outers: Vec<_> = snapshot
            .keycodes()
            .into_iter()
            .filter(|kc| kc.is_masked())
            .cloned()
            .collect();
        assert!(!outers.is_empty());

        for outer in &outers {
            let outer_raw = snapshot.resolve(outer.id()).unwrap();
            assert_eq!(outer_raw & 0x00FF, 0, "{}", outer.id());
            // Shared raw values render through whichever descriptor registered last
            let rendered = snapshot.find_by_raw(outer_raw).unwrap();
            assert!(rendered.is_masked());

            for inner_raw in 0..0x100u16 {
                let Some(inner) = snapshot.find_by_raw(inner_raw) else {
                    continue;
                };
                let expected = CompositeId::new(rendered.outer_id(), inner.id()).to_string();
                assert_eq!(snapshot.serialize(outer_raw | inner_raw), expected);
                assert_eq!(snapshot.deserialize(expected.as_str()), outer_raw | inner_raw);
            }
        }
    }
}

#[test]
fn normalize_is_idempotent() {
    for protocol in Protocol::ALL {
        let snapshot = full_registry(protocol).snapshot();
        let ids: Vec<String> = snapshot.ids().map(str::to_string).collect();
        for id in ids.iter().map(String::as_str).chain(["LSFT(KC_A)", "LCS(KC_ENT)", "0x7fff", "junk"]) {
            let once = snapshot.normalize(id);
            assert_eq!(snapshot.normalize(&once), once, "{protocol}: {id}");
        }
    }
}

// ── Lenient and strict parsing ──

#[test]
fn unknown_text_is_zero_leniently_and_an_error_strictly() {
    let registry = full_registry(Protocol::V6);
    for text in ["KC_BOGUS", "LSFT(", "FOO(KC_A)", "0x10000", ""] {
        assert_eq!(registry.deserialize(text), 0, "{text:?}");
        assert!(registry.deserialize_strict(text).is_err(), "{text:?}");
    }
    assert!(matches!(
        registry.deserialize_strict("FOO(KC_A)"),
        Err(KeycodeError::Expression(_))
    ));
}

#[test]
fn deeply_nested_text_is_rejected_not_fatal() {
    let registry = full_registry(Protocol::V6);
    let nested = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert_eq!(registry.deserialize(nested.as_str()), 0);
    assert!(matches!(
        registry.deserialize_strict(nested.as_str()),
        Err(KeycodeError::Expression(_))
    ));
    assert_eq!(registry.normalize(&nested), "KC_NO");

    let wrapped = format!("{}KC_A{}", "LSFT(".repeat(5_000), ")".repeat(5_000));
    assert_eq!(registry.deserialize(wrapped.as_str()), 0);
    assert!(registry.deserialize_strict(wrapped.as_str()).is_err());
}

#[test]
fn unnamed_values_come_back_as_hex() {
    for protocol in Protocol::ALL {
        let registry = full_registry(protocol);
        let text = registry.serialize(0x7FFF);
        let digits = text.strip_prefix("0x").unwrap();
        assert_eq!(u16::from_str_radix(digits, 16).unwrap(), 0x7FFF);
        assert_eq!(registry.deserialize(text.as_str()), 0x7FFF);
    }
}

#[test]
fn raw_input_passes_through() {
    let registry = full_registry(Protocol::V5);
    assert_eq!(registry.deserialize(KeycodeValue::Raw(0xBEEF)), 0xBEEF);
    assert_eq!(registry.deserialize(0x0004u16), 0x0004);
}

// ── Aliases ──

#[test]
fn custom_keycode_names_are_aliases() {
    let v6 = full_registry(Protocol::V6);
    let v5 = full_registry(Protocol::V5);
    assert_eq!(v6.deserialize("CUSTOM_RGB_NEXT"), 0x7E00);
    assert_eq!(v5.deserialize("CUSTOM_RGB_NEXT"), 0x5F80);
    assert_eq!(v6.deserialize("CUSTOM_SLEEP"), 0x7E01);
    assert_eq!(v6.serialize(0x7E01), "USER01");
    assert_eq!(v6.normalize("CUSTOM_SLEEP"), "USER01");
}

#[test]
fn masked_aliases_parse_but_render_canonically() {
    let registry = full_registry(Protocol::V6);
    let raw = registry.deserialize("LCS(KC_A)");
    assert_eq!(raw, registry.deserialize("C_S(KC_A)"));
    assert_eq!(registry.serialize(raw), "C_S(KC_A)");
    // Aliases are not registered prefixes
    assert!(!registry.is_mask("LCS(KC_A)"));
    assert!(registry.is_mask("C_S(KC_A)"));
}

#[test]
fn tap_dance_uses_tap_dance_descriptors() {
    let registry = full_registry(Protocol::V6);
    let raw = registry.resolve("TD(42)").unwrap();
    assert_eq!(registry.serialize(raw), "TD(42)");
    let snapshot = registry.snapshot();
    let kc = snapshot.find_by_raw(raw).unwrap();
    assert_eq!(kc.tooltip(), Some("Tap dance keycode"));
}
