//! Integration tests for registry generation.
//!
//! These rebuild full registries from capability snapshots on both protocols
//! and check the group counts, idempotence and alias rules that editors rely
//! on.

use std::collections::BTreeSet;
use vial_keycodes::{
    Capabilities, CustomKeycode, KeycodeError, KeycodeGroup, KeycodeRegistry, MidiLevel, Protocol,
};

fn build(caps: Capabilities) -> KeycodeRegistry {
    KeycodeRegistry::for_capabilities(&caps).unwrap()
}

fn id_set(registry: &KeycodeRegistry) -> BTreeSet<String> {
    registry.snapshot().ids().map(str::to_string).collect()
}

fn layer_group_len(protocol: Protocol, layers: usize) -> usize {
    build(Capabilities::new(protocol).with_layers(layers))
        .group(KeycodeGroup::Layers)
        .len()
}

// ── Example scenario: 4 layers, 2 macros, nothing else ──

#[test]
fn scenario_four_layers_two_macros() {
    for protocol in Protocol::ALL {
        let baseline = build(Capabilities::new(protocol));
        let registry = build(Capabilities::new(protocol).with_layers(4).with_macros(2));

        // 24 layer actions + FN_MO13/FN_MO23 + 4 layer-tap
        assert_eq!(registry.group(KeycodeGroup::Layers).len(), 24 + 2 + 4);
        // 2 macro slots + 5 dynamic macro controls
        assert_eq!(registry.group(KeycodeGroup::Macro).len(), 2 + 5);
        assert_eq!(registry.group(KeycodeGroup::User).len(), 16);
        assert!(registry.group(KeycodeGroup::TapDance).is_empty());
        assert!(registry.group(KeycodeGroup::Midi).is_empty());

        // Everything else is the static set the baseline already has
        assert_eq!(registry.keycodes().len(), baseline.keycodes().len() + 30 + 2);
    }
}

// ── Layer count deltas ──

#[test]
fn layer_delta_is_six_per_layer_plus_extras() {
    for protocol in Protocol::ALL {
        let expected = |l: usize| 6 * l + l.min(16) + if l >= 4 { 2 } else { 0 };
        for (n, m) in [(1, 2), (2, 3), (3, 4), (4, 8), (8, 16)] {
            let delta = layer_group_len(protocol, m) as i64 - layer_group_len(protocol, n) as i64;
            assert_eq!(delta, expected(m) as i64 - expected(n) as i64, "{protocol}: {n} -> {m}");
        }
    }
}

#[test]
fn layer_tap_capped_at_sixteen() {
    let registry = build(Capabilities::new(Protocol::V6).with_layers(20));
    let layer_taps = registry
        .group(KeycodeGroup::Layers)
        .iter()
        .filter(|kc| kc.is_masked())
        .count();
    assert_eq!(layer_taps, 16);
    assert_eq!(registry.group(KeycodeGroup::Layers).len(), 6 * 20 + 16 + 2);
    assert!(registry.find("LT15(kc)").is_some());
    assert!(registry.find("LT16(kc)").is_none());
    assert!(registry.find("TO(19)").is_some());
}

#[test]
fn fn_mo_keys_appear_at_four_layers() {
    let three = build(Capabilities::new(Protocol::V5).with_layers(3));
    let four = build(Capabilities::new(Protocol::V5).with_layers(4));
    assert!(three.find("FN_MO13").is_none());
    assert_eq!(four.find("FN_MO13").unwrap().label(), "Fn1\n(Fn3)");
    assert_eq!(four.find("FN_MO23").unwrap().label(), "Fn2\n(Fn3)");
}

// ── Idempotence ──

#[test]
fn regenerate_twice_yields_identical_ids() {
    let caps = Capabilities::new(Protocol::V6)
        .with_layers(8)
        .with_macros(16)
        .with_tap_dance(4)
        .with_midi(MidiLevel::Advanced);
    let registry = build(caps.clone());
    let first = id_set(&registry);
    let first_len = registry.keycodes().len();

    registry.rebuild(&caps).unwrap();
    assert_eq!(id_set(&registry), first);
    assert_eq!(registry.keycodes().len(), first_len);
    assert_eq!(registry.version(), 3);
}

#[test]
fn shrinking_capabilities_drops_ids() {
    let registry = build(Capabilities::new(Protocol::V6).with_layers(8).with_tap_dance(8));
    registry.rebuild(&Capabilities::new(Protocol::V6).with_layers(2)).unwrap();
    assert!(registry.find("MO(7)").is_none());
    assert!(registry.find("LT7(kc)").is_none());
    // TD(n) stays renderable through the hidden group
    assert_eq!(registry.tooltip("TD(5)").as_deref(), Some("TD(5)"));
}

// ── User and custom keycodes ──

#[test]
fn custom_keycodes_replace_generic_users() {
    let caps = Capabilities::new(Protocol::V6).with_custom_keycodes(vec![
        CustomKeycode::new("CUSTOM_BT1", "Connect Bluetooth device 1", "BT 1"),
        CustomKeycode::new("CUSTOM_BT2", "Connect Bluetooth device 2", "BT 2"),
    ]);
    let registry = build(caps);

    assert_eq!(registry.group(KeycodeGroup::User).len(), 2);
    assert!(registry.find("USER02").is_none());
    assert_eq!(registry.find("CUSTOM_BT2").unwrap().id(), "USER01");
    assert_eq!(registry.label("USER00"), "BT 1");
    assert_eq!(
        registry.tooltip("CUSTOM_BT1").as_deref(),
        Some("USER00: Connect Bluetooth device 1")
    );
    assert_eq!(registry.deserialize("CUSTOM_BT2"), 0x7E01);
}

#[test]
fn empty_custom_list_falls_back_to_generic_users() {
    let registry = build(Capabilities::new(Protocol::V5).with_custom_keycodes(Vec::new()));
    let user = registry.group(KeycodeGroup::User);
    assert_eq!(user.len(), 16);
    assert_eq!(user[15].id(), "USER15");
    assert_eq!(registry.label("USER15"), "User 15");
}

// ── MIDI ──

#[test]
fn midi_levels_nest() {
    let none = build(Capabilities::new(Protocol::V6));
    let basic = build(Capabilities::new(Protocol::V6).with_midi(MidiLevel::Basic));
    let advanced = build(Capabilities::new(Protocol::V6).with_midi(MidiLevel::Advanced));

    assert!(none.find("MI_C").is_none());
    assert!(basic.find("MI_C").is_some());
    assert!(basic.find("MI_CH1").is_none());
    assert!(advanced.find("MI_CH1").is_some());
    assert!(advanced.find("MI_Db").is_some());
    assert!(
        advanced.group(KeycodeGroup::Midi).len() > basic.group(KeycodeGroup::Midi).len()
    );
}

// ── Protocol switch ──

#[test]
fn protocol_switch_changes_raw_values() {
    let registry = build(Capabilities::new(Protocol::V5).with_layers(4).with_macros(4));
    let v5: Vec<u16> = ["MO(1)", "M3", "RESET", "KC_MS_U", "LSFT_T(kc)"]
        .iter()
        .map(|id| registry.resolve(id).unwrap())
        .collect();

    registry.set_protocol(Protocol::V6).unwrap();
    let v6: Vec<u16> = ["MO(1)", "M3", "RESET", "KC_MS_U", "LSFT_T(kc)"]
        .iter()
        .map(|id| registry.resolve(id).unwrap())
        .collect();

    assert_eq!(v5, [0x5101, 0x5F15, 0x5C00, 0x00F0, 0x6200]);
    assert_eq!(v6, [0x5221, 0x7703, 0x7C00, 0x00CD, 0x2200]);
    // Basic keycodes are shared
    assert_eq!(registry.resolve("KC_A").unwrap(), 0x04);
}

#[test]
fn protocol_limits_rejected_before_build() {
    let registry = KeycodeRegistry::new(Protocol::V5).unwrap();
    let err = registry
        .rebuild(&Capabilities::new(Protocol::V5).with_macros(128))
        .unwrap_err();
    assert!(matches!(
        err,
        KeycodeError::CapabilityOutOfRange { what: "macros", limit: 110, .. }
    ));
    assert!(registry
        .rebuild(&Capabilities::new(Protocol::V6).with_macros(128))
        .is_ok());
}

// ── Recorder aliases ──

#[test]
fn recorder_aliases_unique_across_generations() {
    let registry = build(Capabilities::new(Protocol::V6).with_layers(4));
    registry.rebuild(&Capabilities::new(Protocol::V6).with_layers(4)).unwrap();
    assert_eq!(registry.find_by_recorder_alias("enter").unwrap().id(), "KC_ENTER");
    assert_eq!(registry.find_by_recorder_alias("left windows").unwrap().id(), "KC_LGUI");
}

// ── Capability files ──

#[test]
fn registry_from_json_snapshot() {
    let caps = Capabilities::load_from_json(
        r#"{"protocol": "v5", "layers": 2, "tapDanceCount": 3, "midi": "basic"}"#,
    )
    .unwrap();
    let registry = build(caps);
    assert_eq!(registry.protocol(), Protocol::V5);
    assert_eq!(registry.group(KeycodeGroup::TapDance).len(), 3);
    assert_eq!(registry.resolve("TD(2)").unwrap(), 0x5702);
    assert!(registry.find("MI_ALLOFF").is_some());
}
