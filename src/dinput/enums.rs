//! DirectInput 8 constant sets, bit-exact with `dinput.h`

native_enum! {
    /// `DI8DEVCLASS_*`: the device classes [`DirectInput::enum_devices`](super::DirectInput::enum_devices) can filter by.
    pub struct DeviceClass(u32);
    ALL                         = 0,
    DEVICE                      = 1,
    POINTER                     = 2,
    KEYBOARD                    = 3,
    GAMECTRL                    = 4,
}

native_enum! {
    /// `DI8DEVTYPE_*`: the low byte of `dwDevType`.
    pub struct DeviceType(u32);
    DEVICE                      = 0x11,
    MOUSE                       = 0x12,
    KEYBOARD                    = 0x13,
    JOYSTICK                    = 0x14,
    GAMEPAD                     = 0x15,
    DRIVING                     = 0x16,
    FLIGHT                      = 0x17,
    FIRST_PERSON                = 0x18,
    DEVICE_CTRL                 = 0x19,
    SCREEN_POINTER              = 0x1A,
    REMOTE                      = 0x1B,
    SUPPLEMENTAL                = 0x1C,
}

native_flags! {
    /// `DIEDFL_*`
    pub struct EnumDevicesFlags(u32);
    ALL_DEVICES                 = 0x0000_0000,
    ATTACHED_ONLY               = 0x0000_0001,
    FORCE_FEEDBACK              = 0x0000_0100,
    INCLUDE_ALIASES             = 0x0001_0000,
    INCLUDE_PHANTOMS            = 0x0002_0000,
    INCLUDE_HIDDEN              = 0x0004_0000,
}

native_flags! {
    /// `DISCL_*`: exactly one of `EXCLUSIVE` / `NONEXCLUSIVE` and one of `FOREGROUND` / `BACKGROUND`.
    pub struct CooperativeLevel(u32);
    EXCLUSIVE                   = 0x0000_0001,
    NONEXCLUSIVE                = 0x0000_0002,
    FOREGROUND                  = 0x0000_0004,
    BACKGROUND                  = 0x0000_0008,
    NOWINKEY                    = 0x0000_0010,
}

native_flags! {
    /// `DIDF_*`: how axes are reported by a data format.
    pub struct DataFormatFlags(u32);
    ABSAXIS                     = 0x0000_0001,
    RELAXIS                     = 0x0000_0002,
}

native_flags! {
    /// `DIDC_*`: [`DeviceCaps::flags`](super::DeviceCaps::flags)
    pub struct DeviceCapsFlags(u32);
    ATTACHED                    = 0x0000_0001,
    POLLED_DEVICE               = 0x0000_0002,
    EMULATED                    = 0x0000_0004,
    POLLED_DATA_FORMAT          = 0x0000_0008,
    FORCE_FEEDBACK              = 0x0000_0100,
    FF_ATTACK                   = 0x0000_0200,
    FF_FADE                     = 0x0000_0400,
    SATURATION                  = 0x0000_0800,
    POS_NEG_COEFFICIENTS        = 0x0000_1000,
    POS_NEG_SATURATION          = 0x0000_2000,
    DEADBAND                    = 0x0000_4000,
    START_DELAY                 = 0x0000_8000,
    ALIAS                       = 0x0001_0000,
    PHANTOM                     = 0x0002_0000,
    HIDDEN                      = 0x0004_0000,
}

native_enum! {
    /// `DIK_*`: keyboard scan codes, also the byte offsets into a [`keyboard_state`](super::InputDevice::keyboard_state).
    pub struct Key(u8);
    ESCAPE          = 0x01,
    KEY_1           = 0x02,
    KEY_2           = 0x03,
    KEY_3           = 0x04,
    KEY_4           = 0x05,
    KEY_5           = 0x06,
    KEY_6           = 0x07,
    KEY_7           = 0x08,
    KEY_8           = 0x09,
    KEY_9           = 0x0A,
    KEY_0           = 0x0B,
    MINUS           = 0x0C,
    EQUALS          = 0x0D,
    BACK            = 0x0E,
    TAB             = 0x0F,
    Q               = 0x10,
    W               = 0x11,
    E               = 0x12,
    R               = 0x13,
    T               = 0x14,
    Y               = 0x15,
    U               = 0x16,
    I               = 0x17,
    O               = 0x18,
    P               = 0x19,
    LBRACKET        = 0x1A,
    RBRACKET        = 0x1B,
    RETURN          = 0x1C,
    LCONTROL        = 0x1D,
    A               = 0x1E,
    S               = 0x1F,
    D               = 0x20,
    F               = 0x21,
    G               = 0x22,
    H               = 0x23,
    J               = 0x24,
    K               = 0x25,
    L               = 0x26,
    SEMICOLON       = 0x27,
    APOSTROPHE      = 0x28,
    GRAVE           = 0x29,
    LSHIFT          = 0x2A,
    BACKSLASH       = 0x2B,
    Z               = 0x2C,
    X               = 0x2D,
    C               = 0x2E,
    V               = 0x2F,
    B               = 0x30,
    N               = 0x31,
    M               = 0x32,
    COMMA           = 0x33,
    PERIOD          = 0x34,
    SLASH           = 0x35,
    RSHIFT          = 0x36,
    MULTIPLY        = 0x37,
    LMENU           = 0x38,
    SPACE           = 0x39,
    CAPITAL         = 0x3A,
    F1              = 0x3B,
    F2              = 0x3C,
    F3              = 0x3D,
    F4              = 0x3E,
    F5              = 0x3F,
    F6              = 0x40,
    F7              = 0x41,
    F8              = 0x42,
    F9              = 0x43,
    F10             = 0x44,
    NUMLOCK         = 0x45,
    SCROLL          = 0x46,
    NUMPAD7         = 0x47,
    NUMPAD8         = 0x48,
    NUMPAD9         = 0x49,
    SUBTRACT        = 0x4A,
    NUMPAD4         = 0x4B,
    NUMPAD5         = 0x4C,
    NUMPAD6         = 0x4D,
    ADD             = 0x4E,
    NUMPAD1         = 0x4F,
    NUMPAD2         = 0x50,
    NUMPAD3         = 0x51,
    NUMPAD0         = 0x52,
    DECIMAL         = 0x53,
    OEM_102         = 0x56,
    F11             = 0x57,
    F12             = 0x58,
    F13             = 0x64,
    F14             = 0x65,
    F15             = 0x66,
    KANA            = 0x70,
    ABNT_C1         = 0x73,
    CONVERT         = 0x79,
    NOCONVERT       = 0x7B,
    YEN             = 0x7D,
    ABNT_C2         = 0x7E,
    NUMPADEQUALS    = 0x8D,
    PREVTRACK       = 0x90,
    AT              = 0x91,
    COLON           = 0x92,
    UNDERLINE       = 0x93,
    KANJI           = 0x94,
    STOP            = 0x95,
    AX              = 0x96,
    UNLABELED       = 0x97,
    NEXTTRACK       = 0x99,
    NUMPADENTER     = 0x9C,
    RCONTROL        = 0x9D,
    MUTE            = 0xA0,
    CALCULATOR      = 0xA1,
    PLAYPAUSE       = 0xA2,
    MEDIASTOP       = 0xA4,
    VOLUMEDOWN      = 0xAE,
    VOLUMEUP        = 0xB0,
    WEBHOME         = 0xB2,
    NUMPADCOMMA     = 0xB3,
    DIVIDE          = 0xB5,
    SYSRQ           = 0xB7,
    RMENU           = 0xB8,
    PAUSE           = 0xC5,
    HOME            = 0xC7,
    UP              = 0xC8,
    PRIOR           = 0xC9,
    LEFT            = 0xCB,
    RIGHT           = 0xCD,
    END             = 0xCF,
    DOWN            = 0xD0,
    NEXT            = 0xD1,
    INSERT          = 0xD2,
    DELETE          = 0xD3,
    LWIN            = 0xDB,
    RWIN            = 0xDC,
    APPS            = 0xDD,
    POWER           = 0xDE,
    SLEEP           = 0xDF,
    WAKE            = 0xE3,
    WEBSEARCH       = 0xE5,
    WEBFAVORITES    = 0xE6,
    WEBREFRESH      = 0xE7,
    WEBSTOP         = 0xE8,
    WEBFORWARD      = 0xE9,
    WEBBACK         = 0xEA,
    MYCOMPUTER      = 0xEB,
    MAIL            = 0xEC,
    MEDIASELECT     = 0xED,
}

impl DeviceType {
    /// The device type stored in the low byte of a `dwDevType` value.
    pub fn from_dev_type(dev_type: u32) -> Self { Self(dev_type & 0xFF) }
}

impl Key {
    /// `true` if the high bit of this key's byte in `state` is set.
    pub fn is_down(self, state: &[u8; 256]) -> bool { state[usize::from(self.0)] & 0x80 != 0 }
}



#[test] fn values() {
    assert_eq!(DeviceClass::KEYBOARD.raw(),                     3);
    assert_eq!(DeviceClass::GAMECTRL.raw(),                     4);
    assert_eq!(DeviceType::KEYBOARD.raw(),                      0x13);
    assert_eq!(DeviceType::from_dev_type(0x0000_0412),          DeviceType::MOUSE);
    assert_eq!(DeviceType::from_dev_type(0x0000_0113),          DeviceType::KEYBOARD);
    assert_eq!(EnumDevicesFlags::ATTACHED_ONLY.bits(),          1);
    assert_eq!(CooperativeLevel::NONEXCLUSIVE.bits() | CooperativeLevel::BACKGROUND.bits(), 0x0A);
    assert_eq!(DataFormatFlags::RELAXIS.bits(),                 2);
    assert_eq!(DeviceCapsFlags::POLLED_DEVICE.bits(),           2);

    assert_eq!(Key::ESCAPE.raw(),   0x01);
    assert_eq!(Key::KEY_0.raw(),    0x0B);
    assert_eq!(Key::RETURN.raw(),   0x1C);
    assert_eq!(Key::A.raw(),        0x1E);
    assert_eq!(Key::SPACE.raw(),    0x39);
    assert_eq!(Key::F12.raw(),      0x58);
    assert_eq!(Key::LEFT.raw(),     0xCB);
    assert_eq!(Key::LWIN.raw(),     0xDB);
    assert_eq!(format!("{:?}", Key::NUMPADENTER),   "Key::NUMPADENTER");
    assert_eq!(format!("{:?}", Key(0xFF)),          "Key(0xff)");
}

#[test] fn key_state() {
    let mut state = [0u8; 256];
    state[Key::SPACE.raw() as usize] = 0x80;
    assert!( Key::SPACE.is_down(&state));
    assert!(!Key::A.is_down(&state));
}
