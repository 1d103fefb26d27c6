use super::*;



/// `DIMOUSESTATE2`, as read by [`InputDevice::mouse_state`](super::InputDevice::mouse_state) with [`mouse_format`](super::mouse_format).
///
/// Axes are relative (movement since the last read) unless the device's axis mode was changed.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MouseState {
    pub x:          i32,
    pub y:          i32,
    /// Wheel
    pub z:          i32,
    /// High bit set while held
    pub buttons:    [u8; 8],
}

impl MouseState {
    pub fn is_button_down(&self, index: usize) -> bool { self.buttons.get(index).map_or(false, |b| b & 0x80 != 0) }
}

/// `DIJOYSTATE`, as read by [`InputDevice::joystick_state`](super::InputDevice::joystick_state) with [`joystick_format`](super::joystick_format).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JoystickState {
    pub x:          i32,
    pub y:          i32,
    pub z:          i32,
    pub rx:         i32,
    pub ry:         i32,
    pub rz:         i32,
    pub sliders:    [i32; 2],
    /// Hundredths of a degree clockwise from north, or `0xFFFF` (low word) when centered.
    pub povs:       [u32; 4],
    pub buttons:    [u8; 32],
}

impl JoystickState {
    /// `None` if `pov` is centered or out of range.
    pub fn pov_degrees(&self, pov: usize) -> Option<f32> {
        let raw = *self.povs.get(pov)?;
        if raw & 0xFFFF == 0xFFFF { None } else { Some(raw as f32 / 100.0) }
    }
}

/// One buffered input event (`DIDEVICEOBJECTDATA`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ObjectData {
    /// Offset into the device's data format, e.g. a [`Key`] for keyboards.
    pub offset:     u32,
    pub data:       u32,
    /// Milliseconds, system tick count
    pub timestamp:  u32,
    pub sequence:   u32,
}

impl ObjectData {
    /// `true` for button (and key) presses, `false` for releases.
    pub fn is_press(&self) -> bool { self.data & 0x80 != 0 }
}

/// `DIDEVCAPS`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeviceCaps {
    pub flags:                  DeviceCapsFlags,
    pub dev_type:               u32,
    pub axes:                   u32,
    pub buttons:                u32,
    pub povs:                   u32,
    pub ff_sample_period:       u32,
    pub ff_min_time_resolution: u32,
    pub firmware_revision:      u32,
    pub hardware_revision:      u32,
    pub ff_driver_version:      u32,
}

impl DeviceCaps {
    pub fn device_type(&self) -> DeviceType { DeviceType::from_dev_type(self.dev_type) }
}

#[cfg(windows)] impl From<sys::DIDEVCAPS> for DeviceCaps {
    fn from(c: sys::DIDEVCAPS) -> Self {
        Self {
            flags:                  DeviceCapsFlags::from_bits(c.dwFlags),
            dev_type:               c.dwDevType,
            axes:                   c.dwAxes,
            buttons:                c.dwButtons,
            povs:                   c.dwPOVs,
            ff_sample_period:       c.dwFFSamplePeriod,
            ff_min_time_resolution: c.dwFFMinTimeResolution,
            firmware_revision:      c.dwFirmwareRevision,
            hardware_revision:      c.dwHardwareRevision,
            ff_driver_version:      c.dwFFDriverVersion,
        }
    }
}

#[cfg(windows)] impl From<sys::DIDEVICEOBJECTDATA> for ObjectData {
    fn from(d: sys::DIDEVICEOBJECTDATA) -> Self {
        Self { offset: d.dwOfs, data: d.dwData, timestamp: d.dwTimeStamp, sequence: d.dwSequence }
    }
}



#[test] fn layout() {
    use std::mem::size_of;
    assert_eq!(size_of::<MouseState>(),     20);
    assert_eq!(size_of::<JoystickState>(),  80);
}

#[cfg(windows)] #[test] fn layout_matches_native() {
    use std::mem::size_of;
    assert_eq!(size_of::<MouseState>(),     size_of::<sys::DIMOUSESTATE2>());
    assert_eq!(size_of::<JoystickState>(),  size_of::<sys::DIJOYSTATE>());
}

#[test] fn helpers() {
    let mouse = MouseState { buttons: [0x80, 0, 0, 0, 0, 0, 0, 0x80], .. MouseState::default() };
    assert!( mouse.is_button_down(0));
    assert!(!mouse.is_button_down(1));
    assert!( mouse.is_button_down(7));
    assert!(!mouse.is_button_down(8));

    let joy = JoystickState { povs: [9000, 0xFFFF_FFFF, 0, 0xFFFF], .. JoystickState::default() };
    assert_eq!(joy.pov_degrees(0), Some(90.0));
    assert_eq!(joy.pov_degrees(1), None);
    assert_eq!(joy.pov_degrees(2), Some(0.0));
    assert_eq!(joy.pov_degrees(3), None);
    assert_eq!(joy.pov_degrees(4), None);

    assert!( ObjectData { data: 0x80, .. ObjectData::default() }.is_press());
    assert!(!ObjectData { data: 0x00, .. ObjectData::default() }.is_press());
}
