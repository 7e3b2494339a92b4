// Vial protocol v5 keycode numbering (QMK before the 0.19 keycode overhaul)

use super::Encoding;

pub(super) const ENCODING: Encoding = Encoding {
    momentary: 0x5100,
    default_layer: 0x5200,
    toggle: 0x5300,
    tap_toggle: 0x5800,
    one_shot_layer: 0x5400,
    // QK_TO sets the ON_PRESS bit, which leaves four bits for the layer
    to: 0x5010,
    layer_tap: 0x4000,
    mod_tap: 0x6000,
    one_shot_mod: 0x5500,
    tap_dance: 0x5700,
    macro_base: 0x5F12,
    user_base: 0x5F80,
    fn_mo13: 0x5F10,
    fn_mo23: 0x5F11,
    max_layers: 16,
    // M0 (0x5F12) up to the first user keycode
    max_macros: 110,
};

pub(super) const KEYCODES: &[(&str, u16)] = &[
    // Mouse keys
    ("KC_MS_U", 0xF0),
    ("KC_MS_D", 0xF1),
    ("KC_MS_L", 0xF2),
    ("KC_MS_R", 0xF3),
    ("KC_BTN1", 0xF4),
    ("KC_BTN2", 0xF5),
    ("KC_BTN3", 0xF6),
    ("KC_BTN4", 0xF7),
    ("KC_BTN5", 0xF8),
    ("KC_WH_U", 0xF9),
    ("KC_WH_D", 0xFA),
    ("KC_WH_L", 0xFB),
    ("KC_WH_R", 0xFC),
    ("KC_ACL0", 0xFD),
    ("KC_ACL1", 0xFE),
    ("KC_ACL2", 0xFF),
    // Quantum block
    ("RESET", 0x5C00),
    ("MAGIC_SWAP_CONTROL_CAPSLOCK", 0x5C02),
    ("MAGIC_CAPSLOCK_TO_CONTROL", 0x5C03),
    ("MAGIC_SWAP_LALT_LGUI", 0x5C04),
    ("MAGIC_SWAP_RALT_RGUI", 0x5C05),
    ("MAGIC_NO_GUI", 0x5C06),
    ("MAGIC_SWAP_GRAVE_ESC", 0x5C07),
    ("MAGIC_SWAP_BACKSLASH_BACKSPACE", 0x5C08),
    ("MAGIC_HOST_NKRO", 0x5C09),
    ("MAGIC_SWAP_ALT_GUI", 0x5C0A),
    ("MAGIC_UNSWAP_CONTROL_CAPSLOCK", 0x5C0B),
    ("MAGIC_UNCAPSLOCK_TO_CONTROL", 0x5C0C),
    ("MAGIC_UNSWAP_LALT_LGUI", 0x5C0D),
    ("MAGIC_UNSWAP_RALT_RGUI", 0x5C0E),
    ("MAGIC_UNNO_GUI", 0x5C0F),
    ("MAGIC_UNSWAP_GRAVE_ESC", 0x5C10),
    ("MAGIC_UNSWAP_BACKSLASH_BACKSPACE", 0x5C11),
    ("MAGIC_UNHOST_NKRO", 0x5C12),
    ("MAGIC_UNSWAP_ALT_GUI", 0x5C13),
    ("MAGIC_TOGGLE_NKRO", 0x5C14),
    ("MAGIC_TOGGLE_ALT_GUI", 0x5C15),
    ("KC_GESC", 0x5C16),
    ("AU_ON", 0x5C17),
    ("AU_OFF", 0x5C18),
    ("AU_TOG", 0x5C19),
    ("CLICKY_TOGGLE", 0x5C1A),
    ("CLICKY_UP", 0x5C1D),
    ("CLICKY_DOWN", 0x5C1E),
    ("CLICKY_RESET", 0x5C1F),
    ("MU_ON", 0x5C20),
    ("MU_OFF", 0x5C21),
    ("MU_TOG", 0x5C22),
    ("MU_MOD", 0x5C23),
    // MIDI
    ("MI_C", 0x5C29),
    ("MI_Cs", 0x5C2A),
    ("MI_D", 0x5C2B),
    ("MI_Ds", 0x5C2C),
    ("MI_E", 0x5C2D),
    ("MI_F", 0x5C2E),
    ("MI_Fs", 0x5C2F),
    ("MI_G", 0x5C30),
    ("MI_Gs", 0x5C31),
    ("MI_A", 0x5C32),
    ("MI_As", 0x5C33),
    ("MI_B", 0x5C34),
    ("MI_C_1", 0x5C35),
    ("MI_Cs_1", 0x5C36),
    ("MI_D_1", 0x5C37),
    ("MI_Ds_1", 0x5C38),
    ("MI_E_1", 0x5C39),
    ("MI_F_1", 0x5C3A),
    ("MI_Fs_1", 0x5C3B),
    ("MI_G_1", 0x5C3C),
    ("MI_Gs_1", 0x5C3D),
    ("MI_A_1", 0x5C3E),
    ("MI_As_1", 0x5C3F),
    ("MI_B_1", 0x5C40),
    ("MI_C_2", 0x5C41),
    ("MI_Cs_2", 0x5C42),
    ("MI_D_2", 0x5C43),
    ("MI_Ds_2", 0x5C44),
    ("MI_E_2", 0x5C45),
    ("MI_F_2", 0x5C46),
    ("MI_Fs_2", 0x5C47),
    ("MI_G_2", 0x5C48),
    ("MI_Gs_2", 0x5C49),
    ("MI_A_2", 0x5C4A),
    ("MI_As_2", 0x5C4B),
    ("MI_B_2", 0x5C4C),
    ("MI_C_3", 0x5C4D),
    ("MI_Cs_3", 0x5C4E),
    ("MI_D_3", 0x5C4F),
    ("MI_Ds_3", 0x5C50),
    ("MI_E_3", 0x5C51),
    ("MI_F_3", 0x5C52),
    ("MI_Fs_3", 0x5C53),
    ("MI_G_3", 0x5C54),
    ("MI_Gs_3", 0x5C55),
    ("MI_A_3", 0x5C56),
    ("MI_As_3", 0x5C57),
    ("MI_B_3", 0x5C58),
    ("MI_C_4", 0x5C59),
    ("MI_Cs_4", 0x5C5A),
    ("MI_D_4", 0x5C5B),
    ("MI_Ds_4", 0x5C5C),
    ("MI_E_4", 0x5C5D),
    ("MI_F_4", 0x5C5E),
    ("MI_Fs_4", 0x5C5F),
    ("MI_G_4", 0x5C60),
    ("MI_Gs_4", 0x5C61),
    ("MI_A_4", 0x5C62),
    ("MI_As_4", 0x5C63),
    ("MI_B_4", 0x5C64),
    ("MI_C_5", 0x5C65),
    ("MI_Cs_5", 0x5C66),
    ("MI_D_5", 0x5C67),
    ("MI_Ds_5", 0x5C68),
    ("MI_E_5", 0x5C69),
    ("MI_F_5", 0x5C6A),
    ("MI_Fs_5", 0x5C6B),
    ("MI_G_5", 0x5C6C),
    ("MI_Gs_5", 0x5C6D),
    ("MI_A_5", 0x5C6E),
    ("MI_As_5", 0x5C6F),
    ("MI_B_5", 0x5C70),
    ("MI_OCT_N2", 0x5C71),
    ("MI_OCT_N1", 0x5C72),
    ("MI_OCT_0", 0x5C73),
    ("MI_OCT_1", 0x5C74),
    ("MI_OCT_2", 0x5C75),
    ("MI_OCT_3", 0x5C76),
    ("MI_OCT_4", 0x5C77),
    ("MI_OCT_5", 0x5C78),
    ("MI_OCT_6", 0x5C79),
    ("MI_OCT_7", 0x5C7A),
    ("MI_OCTD", 0x5C7B),
    ("MI_OCTU", 0x5C7C),
    ("MI_TRNS_N6", 0x5C7D),
    ("MI_TRNS_N5", 0x5C7E),
    ("MI_TRNS_N4", 0x5C7F),
    ("MI_TRNS_N3", 0x5C80),
    ("MI_TRNS_N2", 0x5C81),
    ("MI_TRNS_N1", 0x5C82),
    ("MI_TRNS_0", 0x5C83),
    ("MI_TRNS_1", 0x5C84),
    ("MI_TRNS_2", 0x5C85),
    ("MI_TRNS_3", 0x5C86),
    ("MI_TRNS_4", 0x5C87),
    ("MI_TRNS_5", 0x5C88),
    ("MI_TRNS_6", 0x5C89),
    ("MI_TRNSD", 0x5C8A),
    ("MI_TRNSU", 0x5C8B),
    ("MI_VEL_1", 0x5C8C),
    ("MI_VEL_2", 0x5C8D),
    ("MI_VEL_3", 0x5C8E),
    ("MI_VEL_4", 0x5C8F),
    ("MI_VEL_5", 0x5C90),
    ("MI_VEL_6", 0x5C91),
    ("MI_VEL_7", 0x5C92),
    ("MI_VEL_8", 0x5C93),
    ("MI_VEL_9", 0x5C94),
    ("MI_VEL_10", 0x5C95),
    ("MI_VELD", 0x5C96),
    ("MI_VELU", 0x5C97),
    ("MI_CH1", 0x5C98),
    ("MI_CH2", 0x5C99),
    ("MI_CH3", 0x5C9A),
    ("MI_CH4", 0x5C9B),
    ("MI_CH5", 0x5C9C),
    ("MI_CH6", 0x5C9D),
    ("MI_CH7", 0x5C9E),
    ("MI_CH8", 0x5C9F),
    ("MI_CH9", 0x5CA0),
    ("MI_CH10", 0x5CA1),
    ("MI_CH11", 0x5CA2),
    ("MI_CH12", 0x5CA3),
    ("MI_CH13", 0x5CA4),
    ("MI_CH14", 0x5CA5),
    ("MI_CH15", 0x5CA6),
    ("MI_CH16", 0x5CA7),
    ("MI_CHD", 0x5CA8),
    ("MI_CHU", 0x5CA9),
    ("MI_ALLOFF", 0x5CAA),
    ("MI_SUS", 0x5CAB),
    ("MI_PORT", 0x5CAC),
    ("MI_SOST", 0x5CAD),
    ("MI_SOFT", 0x5CAE),
    ("MI_LEG", 0x5CAF),
    ("MI_MOD", 0x5CB0),
    ("MI_MODSD", 0x5CB1),
    ("MI_MODSU", 0x5CB2),
    ("MI_BENDD", 0x5CB3),
    ("MI_BENDU", 0x5CB4),
    // Backlight and RGB
    ("BL_ON", 0x5CB5),
    ("BL_OFF", 0x5CB6),
    ("BL_DEC", 0x5CB7),
    ("BL_INC", 0x5CB8),
    ("BL_TOGG", 0x5CB9),
    ("BL_STEP", 0x5CBA),
    ("BL_BRTG", 0x5CBB),
    ("RGB_TOG", 0x5CBC),
    ("RGB_MOD", 0x5CBD),
    ("RGB_RMOD", 0x5CBE),
    ("RGB_HUI", 0x5CBF),
    ("RGB_HUD", 0x5CC0),
    ("RGB_SAI", 0x5CC1),
    ("RGB_SAD", 0x5CC2),
    ("RGB_VAI", 0x5CC3),
    ("RGB_VAD", 0x5CC4),
    ("RGB_SPI", 0x5CC5),
    ("RGB_SPD", 0x5CC6),
    ("RGB_M_P", 0x5CC7),
    ("RGB_M_B", 0x5CC8),
    ("RGB_M_R", 0x5CC9),
    ("RGB_M_SW", 0x5CCA),
    ("RGB_M_SN", 0x5CCB),
    ("RGB_M_K", 0x5CCC),
    ("RGB_M_X", 0x5CCD),
    ("RGB_M_G", 0x5CCE),
    ("RGB_M_T", 0x5CCF),
    // Space cadet
    ("KC_LSPO", 0x5CD0),
    ("KC_RSPC", 0x5CD1),
    ("KC_SFTENT", 0x5CD2),
    ("MAGIC_SWAP_LCTL_LGUI", 0x5CD3),
    ("MAGIC_UNSWAP_LCTL_LGUI", 0x5CD4),
    ("MAGIC_SWAP_RCTL_RGUI", 0x5CD5),
    ("MAGIC_UNSWAP_RCTL_RGUI", 0x5CD6),
    ("MAGIC_SWAP_CTL_GUI", 0x5CD7),
    ("MAGIC_UNSWAP_CTL_GUI", 0x5CD8),
    ("MAGIC_TOGGLE_CTL_GUI", 0x5CD9),
    ("MAGIC_EE_HANDS_LEFT", 0x5CDA),
    ("MAGIC_EE_HANDS_RIGHT", 0x5CDB),
    // Dynamic macros
    ("DYN_REC_START1", 0x5CDC),
    ("DYN_REC_START2", 0x5CDD),
    ("DYN_REC_STOP", 0x5CDE),
    ("DYN_MACRO_PLAY1", 0x5CDF),
    ("DYN_MACRO_PLAY2", 0x5CE0),
    ("KC_LCPO", 0x5CE1),
    ("KC_RCPC", 0x5CE2),
    ("KC_LAPO", 0x5CE3),
    ("KC_RAPC", 0x5CE4),
    ("CMB_ON", 0x5CE5),
    ("CMB_OFF", 0x5CE6),
    ("CMB_TOG", 0x5CE7),
    // Haptic feedback
    ("HPT_ON", 0x5CE8),
    ("HPT_OFF", 0x5CE9),
    ("HPT_TOG", 0x5CEA),
    ("HPT_RST", 0x5CEB),
    ("HPT_FBK", 0x5CEC),
    ("HPT_BUZ", 0x5CED),
    ("HPT_MODI", 0x5CEE),
    ("HPT_MODD", 0x5CEF),
    ("HPT_CONT", 0x5CF0),
    ("HPT_CONI", 0x5CF1),
    ("HPT_COND", 0x5CF2),
    ("HPT_DWLI", 0x5CF3),
    ("HPT_DWLD", 0x5CF4),
    // Auto shift
    ("KC_ASDN", 0x5CF5),
    ("KC_ASUP", 0x5CF6),
    ("KC_ASRP", 0x5CF7),
    ("KC_ASON", 0x5CF8),
    ("KC_ASOFF", 0x5CF9),
    ("KC_ASTG", 0x5CFA),
];
