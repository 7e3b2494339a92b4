// Vial protocol v6 keycode numbering (QMK 0.19 and later)

use super::Encoding;

pub(super) const ENCODING: Encoding = Encoding {
    momentary: 0x5220,
    default_layer: 0x5240,
    toggle: 0x5260,
    tap_toggle: 0x52C0,
    one_shot_layer: 0x5280,
    to: 0x5200,
    layer_tap: 0x4000,
    mod_tap: 0x2000,
    one_shot_mod: 0x52A0,
    tap_dance: 0x5700,
    macro_base: 0x7700,
    // QK_KB_0
    user_base: 0x7E00,
    // QK_TRI_LAYER_LOWER / QK_TRI_LAYER_UPPER
    fn_mo13: 0x7C77,
    fn_mo23: 0x7C78,
    max_layers: 32,
    max_macros: 128,
};

pub(super) const KEYCODES: &[(&str, u16)] = &[
    // Mouse keys
    ("KC_MS_U", 0xCD),
    ("KC_MS_D", 0xCE),
    ("KC_MS_L", 0xCF),
    ("KC_MS_R", 0xD0),
    ("KC_BTN1", 0xD1),
    ("KC_BTN2", 0xD2),
    ("KC_BTN3", 0xD3),
    ("KC_BTN4", 0xD4),
    ("KC_BTN5", 0xD5),
    ("KC_WH_U", 0xD9),
    ("KC_WH_D", 0xDA),
    ("KC_WH_L", 0xDB),
    ("KC_WH_R", 0xDC),
    ("KC_ACL0", 0xDD),
    ("KC_ACL1", 0xDE),
    ("KC_ACL2", 0xDF),
    // Magic
    ("MAGIC_SWAP_CONTROL_CAPSLOCK", 0x7000),
    ("MAGIC_UNSWAP_CONTROL_CAPSLOCK", 0x7001),
    ("MAGIC_UNCAPSLOCK_TO_CONTROL", 0x7003),
    ("MAGIC_CAPSLOCK_TO_CONTROL", 0x7004),
    ("MAGIC_SWAP_LALT_LGUI", 0x7005),
    ("MAGIC_UNSWAP_LALT_LGUI", 0x7006),
    ("MAGIC_SWAP_RALT_RGUI", 0x7007),
    ("MAGIC_UNSWAP_RALT_RGUI", 0x7008),
    ("MAGIC_UNNO_GUI", 0x7009),
    ("MAGIC_NO_GUI", 0x700A),
    ("MAGIC_SWAP_GRAVE_ESC", 0x700C),
    ("MAGIC_UNSWAP_GRAVE_ESC", 0x700D),
    ("MAGIC_SWAP_BACKSLASH_BACKSPACE", 0x700E),
    ("MAGIC_UNSWAP_BACKSLASH_BACKSPACE", 0x700F),
    ("MAGIC_HOST_NKRO", 0x7011),
    ("MAGIC_UNHOST_NKRO", 0x7012),
    ("MAGIC_TOGGLE_NKRO", 0x7013),
    ("MAGIC_SWAP_ALT_GUI", 0x7014),
    ("MAGIC_UNSWAP_ALT_GUI", 0x7015),
    ("MAGIC_TOGGLE_ALT_GUI", 0x7016),
    ("MAGIC_SWAP_LCTL_LGUI", 0x7017),
    ("MAGIC_UNSWAP_LCTL_LGUI", 0x7018),
    ("MAGIC_SWAP_RCTL_RGUI", 0x7019),
    ("MAGIC_UNSWAP_RCTL_RGUI", 0x701A),
    ("MAGIC_SWAP_CTL_GUI", 0x701B),
    ("MAGIC_UNSWAP_CTL_GUI", 0x701C),
    ("MAGIC_TOGGLE_CTL_GUI", 0x701D),
    ("MAGIC_EE_HANDS_LEFT", 0x701E),
    ("MAGIC_EE_HANDS_RIGHT", 0x701F),
    // MIDI
    ("MI_C", 0x7103),
    ("MI_Cs", 0x7104),
    ("MI_D", 0x7105),
    ("MI_Ds", 0x7106),
    ("MI_E", 0x7107),
    ("MI_F", 0x7108),
    ("MI_Fs", 0x7109),
    ("MI_G", 0x710A),
    ("MI_Gs", 0x710B),
    ("MI_A", 0x710C),
    ("MI_As", 0x710D),
    ("MI_B", 0x710E),
    ("MI_C_1", 0x710F),
    ("MI_Cs_1", 0x7110),
    ("MI_D_1", 0x7111),
    ("MI_Ds_1", 0x7112),
    ("MI_E_1", 0x7113),
    ("MI_F_1", 0x7114),
    ("MI_Fs_1", 0x7115),
    ("MI_G_1", 0x7116),
    ("MI_Gs_1", 0x7117),
    ("MI_A_1", 0x7118),
    ("MI_As_1", 0x7119),
    ("MI_B_1", 0x711A),
    ("MI_C_2", 0x711B),
    ("MI_Cs_2", 0x711C),
    ("MI_D_2", 0x711D),
    ("MI_Ds_2", 0x711E),
    ("MI_E_2", 0x711F),
    ("MI_F_2", 0x7120),
    ("MI_Fs_2", 0x7121),
    ("MI_G_2", 0x7122),
    ("MI_Gs_2", 0x7123),
    ("MI_A_2", 0x7124),
    ("MI_As_2", 0x7125),
    ("MI_B_2", 0x7126),
    ("MI_C_3", 0x7127),
    ("MI_Cs_3", 0x7128),
    ("MI_D_3", 0x7129),
    ("MI_Ds_3", 0x712A),
    ("MI_E_3", 0x712B),
    ("MI_F_3", 0x712C),
    ("MI_Fs_3", 0x712D),
    ("MI_G_3", 0x712E),
    ("MI_Gs_3", 0x712F),
    ("MI_A_3", 0x7130),
    ("MI_As_3", 0x7131),
    ("MI_B_3", 0x7132),
    ("MI_C_4", 0x7133),
    ("MI_Cs_4", 0x7134),
    ("MI_D_4", 0x7135),
    ("MI_Ds_4", 0x7136),
    ("MI_E_4", 0x7137),
    ("MI_F_4", 0x7138),
    ("MI_Fs_4", 0x7139),
    ("MI_G_4", 0x713A),
    ("MI_Gs_4", 0x713B),
    ("MI_A_4", 0x713C),
    ("MI_As_4", 0x713D),
    ("MI_B_4", 0x713E),
    ("MI_C_5", 0x713F),
    ("MI_Cs_5", 0x7140),
    ("MI_D_5", 0x7141),
    ("MI_Ds_5", 0x7142),
    ("MI_E_5", 0x7143),
    ("MI_F_5", 0x7144),
    ("MI_Fs_5", 0x7145),
    ("MI_G_5", 0x7146),
    ("MI_Gs_5", 0x7147),
    ("MI_A_5", 0x7148),
    ("MI_As_5", 0x7149),
    ("MI_B_5", 0x714A),
    ("MI_OCT_N2", 0x714B),
    ("MI_OCT_N1", 0x714C),
    ("MI_OCT_0", 0x714D),
    ("MI_OCT_1", 0x714E),
    ("MI_OCT_2", 0x714F),
    ("MI_OCT_3", 0x7150),
    ("MI_OCT_4", 0x7151),
    ("MI_OCT_5", 0x7152),
    ("MI_OCT_6", 0x7153),
    ("MI_OCT_7", 0x7154),
    ("MI_OCTD", 0x7155),
    ("MI_OCTU", 0x7156),
    ("MI_TRNS_N6", 0x7157),
    ("MI_TRNS_N5", 0x7158),
    ("MI_TRNS_N4", 0x7159),
    ("MI_TRNS_N3", 0x715A),
    ("MI_TRNS_N2", 0x715B),
    ("MI_TRNS_N1", 0x715C),
    ("MI_TRNS_0", 0x715D),
    ("MI_TRNS_1", 0x715E),
    ("MI_TRNS_2", 0x715F),
    ("MI_TRNS_3", 0x7160),
    ("MI_TRNS_4", 0x7161),
    ("MI_TRNS_5", 0x7162),
    ("MI_TRNS_6", 0x7163),
    ("MI_TRNSD", 0x7164),
    ("MI_TRNSU", 0x7165),
    ("MI_VEL_1", 0x7167),
    ("MI_VEL_2", 0x7168),
    ("MI_VEL_3", 0x7169),
    ("MI_VEL_4", 0x716A),
    ("MI_VEL_5", 0x716B),
    ("MI_VEL_6", 0x716C),
    ("MI_VEL_7", 0x716D),
    ("MI_VEL_8", 0x716E),
    ("MI_VEL_9", 0x716F),
    ("MI_VEL_10", 0x7170),
    ("MI_VELD", 0x7171),
    ("MI_VELU", 0x7172),
    ("MI_CH1", 0x7173),
    ("MI_CH2", 0x7174),
    ("MI_CH3", 0x7175),
    ("MI_CH4", 0x7176),
    ("MI_CH5", 0x7177),
    ("MI_CH6", 0x7178),
    ("MI_CH7", 0x7179),
    ("MI_CH8", 0x717A),
    ("MI_CH9", 0x717B),
    ("MI_CH10", 0x717C),
    ("MI_CH11", 0x717D),
    ("MI_CH12", 0x717E),
    ("MI_CH13", 0x717F),
    ("MI_CH14", 0x7180),
    ("MI_CH15", 0x7181),
    ("MI_CH16", 0x7182),
    ("MI_CHD", 0x7183),
    ("MI_CHU", 0x7184),
    ("MI_ALLOFF", 0x7185),
    ("MI_SUS", 0x7186),
    ("MI_PORT", 0x7187),
    ("MI_SOST", 0x7188),
    ("MI_SOFT", 0x7189),
    ("MI_LEG", 0x718A),
    ("MI_MOD", 0x718B),
    ("MI_MODSD", 0x718C),
    ("MI_MODSU", 0x718D),
    ("MI_BENDD", 0x718E),
    ("MI_BENDU", 0x718F),
    // Audio
    ("AU_ON", 0x7480),
    ("AU_OFF", 0x7481),
    ("AU_TOG", 0x7482),
    ("CLICKY_TOGGLE", 0x748A),
    ("CLICKY_UP", 0x748D),
    ("CLICKY_DOWN", 0x748E),
    ("CLICKY_RESET", 0x748F),
    ("MU_ON", 0x7490),
    ("MU_OFF", 0x7491),
    ("MU_TOG", 0x7492),
    ("MU_MOD", 0x7493),
    // Lighting
    ("BL_ON", 0x7800),
    ("BL_OFF", 0x7801),
    ("BL_TOGG", 0x7802),
    ("BL_DEC", 0x7803),
    ("BL_INC", 0x7804),
    ("BL_STEP", 0x7805),
    ("BL_BRTG", 0x7806),
    ("RGB_TOG", 0x7820),
    ("RGB_MOD", 0x7821),
    ("RGB_RMOD", 0x7822),
    ("RGB_HUI", 0x7823),
    ("RGB_HUD", 0x7824),
    ("RGB_SAI", 0x7825),
    ("RGB_SAD", 0x7826),
    ("RGB_VAI", 0x7827),
    ("RGB_VAD", 0x7828),
    ("RGB_SPI", 0x7829),
    ("RGB_SPD", 0x782A),
    ("RGB_M_P", 0x782B),
    ("RGB_M_B", 0x782C),
    ("RGB_M_R", 0x782D),
    ("RGB_M_SW", 0x782E),
    ("RGB_M_SN", 0x782F),
    ("RGB_M_K", 0x7830),
    ("RGB_M_X", 0x7831),
    ("RGB_M_G", 0x7832),
    ("RGB_M_T", 0x7833),
    // Quantum
    ("RESET", 0x7C00),
    ("KC_ASDN", 0x7C10),
    ("KC_ASUP", 0x7C11),
    ("KC_ASRP", 0x7C12),
    ("KC_ASON", 0x7C13),
    ("KC_ASOFF", 0x7C14),
    ("KC_ASTG", 0x7C15),
    ("KC_GESC", 0x7C16),
    ("KC_LCPO", 0x7C18),
    ("KC_RCPC", 0x7C19),
    ("KC_LSPO", 0x7C1A),
    ("KC_RSPC", 0x7C1B),
    ("KC_LAPO", 0x7C1C),
    ("KC_RAPC", 0x7C1D),
    ("KC_SFTENT", 0x7C1E),
    ("HPT_ON", 0x7C40),
    ("HPT_OFF", 0x7C41),
    ("HPT_TOG", 0x7C42),
    ("HPT_RST", 0x7C43),
    ("HPT_FBK", 0x7C44),
    ("HPT_BUZ", 0x7C45),
    ("HPT_MODI", 0x7C46),
    ("HPT_MODD", 0x7C47),
    ("HPT_CONT", 0x7C48),
    ("HPT_CONI", 0x7C49),
    ("HPT_COND", 0x7C4A),
    ("HPT_DWLI", 0x7C4B),
    ("HPT_DWLD", 0x7C4C),
    ("CMB_ON", 0x7C50),
    ("CMB_OFF", 0x7C51),
    ("CMB_TOG", 0x7C52),
    ("DYN_REC_START1", 0x7C53),
    ("DYN_REC_START2", 0x7C54),
    ("DYN_REC_STOP", 0x7C55),
    ("DYN_MACRO_PLAY1", 0x7C56),
    ("DYN_MACRO_PLAY2", 0x7C57),
];
