// USB HID keyboard/consumer usages shared by both protocol generations

/// Basic keycodes (`0x00..=0xFF`), identical in v5 and v6.
///
/// Mouse keys are not here: they moved between generations.
pub(super) const KEYCODES: &[(&str, u16)] = &[
    ("KC_NO", 0x00),
    ("KC_TRNS", 0x01),
    ("KC_A", 0x04),
    ("KC_B", 0x05),
    ("KC_C", 0x06),
    ("KC_D", 0x07),
    ("KC_E", 0x08),
    ("KC_F", 0x09),
    ("KC_G", 0x0A),
    ("KC_H", 0x0B),
    ("KC_I", 0x0C),
    ("KC_J", 0x0D),
    ("KC_K", 0x0E),
    ("KC_L", 0x0F),
    ("KC_M", 0x10),
    ("KC_N", 0x11),
    ("KC_O", 0x12),
    ("KC_P", 0x13),
    ("KC_Q", 0x14),
    ("KC_R", 0x15),
    ("KC_S", 0x16),
    ("KC_T", 0x17),
    ("KC_U", 0x18),
    ("KC_V", 0x19),
    ("KC_W", 0x1A),
    ("KC_X", 0x1B),
    ("KC_Y", 0x1C),
    ("KC_Z", 0x1D),
    ("KC_1", 0x1E),
    ("KC_2", 0x1F),
    ("KC_3", 0x20),
    ("KC_4", 0x21),
    ("KC_5", 0x22),
    ("KC_6", 0x23),
    ("KC_7", 0x24),
    ("KC_8", 0x25),
    ("KC_9", 0x26),
    ("KC_0", 0x27),
    ("KC_ENTER", 0x28),
    ("KC_ESCAPE", 0x29),
    ("KC_BSPACE", 0x2A),
    ("KC_TAB", 0x2B),
    ("KC_SPACE", 0x2C),
    ("KC_MINUS", 0x2D),
    ("KC_EQUAL", 0x2E),
    ("KC_LBRACKET", 0x2F),
    ("KC_RBRACKET", 0x30),
    ("KC_BSLASH", 0x31),
    ("KC_NONUS_HASH", 0x32),
    ("KC_SCOLON", 0x33),
    ("KC_QUOTE", 0x34),
    ("KC_GRAVE", 0x35),
    ("KC_COMMA", 0x36),
    ("KC_DOT", 0x37),
    ("KC_SLASH", 0x38),
    ("KC_CAPSLOCK", 0x39),
    ("KC_F1", 0x3A),
    ("KC_F2", 0x3B),
    ("KC_F3", 0x3C),
    ("KC_F4", 0x3D),
    ("KC_F5", 0x3E),
    ("KC_F6", 0x3F),
    ("KC_F7", 0x40),
    ("KC_F8", 0x41),
    ("KC_F9", 0x42),
    ("KC_F10", 0x43),
    ("KC_F11", 0x44),
    ("KC_F12", 0x45),
    ("KC_PSCREEN", 0x46),
    ("KC_SCROLLLOCK", 0x47),
    ("KC_PAUSE", 0x48),
    ("KC_INSERT", 0x49),
    ("KC_HOME", 0x4A),
    ("KC_PGUP", 0x4B),
    ("KC_DELETE", 0x4C),
    ("KC_END", 0x4D),
    ("KC_PGDOWN", 0x4E),
    ("KC_RIGHT", 0x4F),
    ("KC_LEFT", 0x50),
    ("KC_DOWN", 0x51),
    ("KC_UP", 0x52),
    ("KC_NUMLOCK", 0x53),
    ("KC_KP_SLASH", 0x54),
    ("KC_KP_ASTERISK", 0x55),
    ("KC_KP_MINUS", 0x56),
    ("KC_KP_PLUS", 0x57),
    ("KC_KP_ENTER", 0x58),
    ("KC_KP_1", 0x59),
    ("KC_KP_2", 0x5A),
    ("KC_KP_3", 0x5B),
    ("KC_KP_4", 0x5C),
    ("KC_KP_5", 0x5D),
    ("KC_KP_6", 0x5E),
    ("KC_KP_7", 0x5F),
    ("KC_KP_8", 0x60),
    ("KC_KP_9", 0x61),
    ("KC_KP_0", 0x62),
    ("KC_KP_DOT", 0x63),
    ("KC_NONUS_BSLASH", 0x64),
    ("KC_APPLICATION", 0x65),
    ("KC_KP_EQUAL", 0x67),
    ("KC_F13", 0x68),
    ("KC_F14", 0x69),
    ("KC_F15", 0x6A),
    ("KC_F16", 0x6B),
    ("KC_F17", 0x6C),
    ("KC_F18", 0x6D),
    ("KC_F19", 0x6E),
    ("KC_F20", 0x6F),
    ("KC_F21", 0x70),
    ("KC_F22", 0x71),
    ("KC_F23", 0x72),
    ("KC_F24", 0x73),
    ("KC_EXEC", 0x74),
    ("KC_HELP", 0x75),
    ("KC_SLCT", 0x77),
    ("KC_STOP", 0x78),
    ("KC_AGIN", 0x79),
    ("KC_UNDO", 0x7A),
    ("KC_CUT", 0x7B),
    ("KC_COPY", 0x7C),
    ("KC_PSTE", 0x7D),
    ("KC_FIND", 0x7E),
    ("KC__VOLUP", 0x80),
    ("KC__VOLDOWN", 0x81),
    ("KC_LCAP", 0x82),
    ("KC_LNUM", 0x83),
    ("KC_LSCR", 0x84),
    ("KC_KP_COMMA", 0x85),
    ("KC_RO", 0x87),
    ("KC_KANA", 0x88),
    ("KC_JYEN", 0x89),
    ("KC_HENK", 0x8A),
    ("KC_MHEN", 0x8B),
    ("KC_LANG1", 0x90),
    ("KC_LANG2", 0x91),
    // Consumer/system usages mapped into the basic range
    ("KC_PWR", 0xA5),
    ("KC_SLEP", 0xA6),
    ("KC_WAKE", 0xA7),
    ("KC_MUTE", 0xA8),
    ("KC_VOLU", 0xA9),
    ("KC_VOLD", 0xAA),
    ("KC_MNXT", 0xAB),
    ("KC_MPRV", 0xAC),
    ("KC_MSTP", 0xAD),
    ("KC_MPLY", 0xAE),
    ("KC_MSEL", 0xAF),
    ("KC_EJCT", 0xB0),
    ("KC_MAIL", 0xB1),
    ("KC_CALC", 0xB2),
    ("KC_MYCM", 0xB3),
    ("KC_WSCH", 0xB4),
    ("KC_WHOM", 0xB5),
    ("KC_WBAK", 0xB6),
    ("KC_WFWD", 0xB7),
    ("KC_WSTP", 0xB8),
    ("KC_WREF", 0xB9),
    ("KC_WFAV", 0xBA),
    ("KC_MFFD", 0xBB),
    ("KC_MRWD", 0xBC),
    ("KC_BRIU", 0xBD),
    ("KC_BRID", 0xBE),
    // Modifiers (HID usages 0xE0-0xE7)
    ("KC_LCTRL", 0xE0),
    ("KC_LSHIFT", 0xE1),
    ("KC_LALT", 0xE2),
    ("KC_LGUI", 0xE3),
    ("KC_RCTRL", 0xE4),
    ("KC_RSHIFT", 0xE5),
    ("KC_RALT", 0xE6),
    ("KC_RGUI", 0xE7),
];

/// Shifted symbols are `LSFT(<base key>)`.
pub(super) const SHIFTED: &[(&str, u16)] = &[
    ("KC_TILD", 0x0235),
    ("KC_EXLM", 0x021E),
    ("KC_AT", 0x021F),
    ("KC_HASH", 0x0220),
    ("KC_DLR", 0x0221),
    ("KC_PERC", 0x0222),
    ("KC_CIRC", 0x0223),
    ("KC_AMPR", 0x0224),
    ("KC_ASTR", 0x0225),
    ("KC_LPRN", 0x0226),
    ("KC_RPRN", 0x0227),
    ("KC_UNDS", 0x022D),
    ("KC_PLUS", 0x022E),
    ("KC_LCBR", 0x022F),
    ("KC_RCBR", 0x0230),
    ("KC_LT", 0x0236),
    ("KC_GT", 0x0237),
    ("KC_COLN", 0x0233),
    ("KC_PIPE", 0x0231),
    ("KC_QUES", 0x0238),
    ("KC_DQUO", 0x0234),
];
