use super::*;
use super::sys::*;
use crate::com::*;

use winapi::shared::guiddef::GUID;
use winapi::shared::windef::HWND;

use std::mem::size_of;
use std::ptr::null_mut;



com_wrapper! {
    /// [`IDirectInputDevice8W`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/ee417816(v=vs.85)):
    /// a keyboard, mouse or game controller.
    ///
    /// Typical use: [`set_data_format`](Self::set_data_format), [`set_cooperative_level`](Self::set_cooperative_level),
    /// [`acquire`](Self::acquire), then [`poll`](Self::poll) + read state every frame.
    /// Reads fail with `DIERR_INPUTLOST` / `DIERR_NOTACQUIRED` when focus is lost; re-acquire and read again.
    pub struct InputDevice(IDirectInputDevice8W);
}

impl InputDevice {
    /// [`IDirectInputDevice8::SetDataFormat`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/ee417925(v=vs.85)).
    /// Must be called before [`acquire`](Self::acquire).
    pub fn set_data_format(&self, format: &DataFormat) -> Result<(), Error> {
        let device = self.com("IDirectInputDevice8W::SetDataFormat")?;
        let native = format.to_native();
        let hr = unsafe { device.SetDataFormat(&native) };
        Error::check_hr("IDirectInputDevice8W::SetDataFormat", hr, "")
    }

    /// [`IDirectInputDevice8::SetCooperativeLevel`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/ee417921(v=vs.85))
    ///
    /// ### Safety
    /// `hwnd` must be a top-level window owned by this process (or null with [`CooperativeLevel::BACKGROUND`] | [`CooperativeLevel::NONEXCLUSIVE`]).
    pub unsafe fn set_cooperative_level(&self, hwnd: HWND, level: CooperativeLevel) -> Result<(), Error> {
        let device = self.com("IDirectInputDevice8W::SetCooperativeLevel")?;
        let hr = device.SetCooperativeLevel(hwnd, level.bits());
        Error::check_hr("IDirectInputDevice8W::SetCooperativeLevel", hr, "")
    }

    /// `SetProperty(DIPROP_BUFFERSIZE, ...)`: how many events [`buffered_data`](Self::buffered_data) can queue.
    /// 0 (the default) disables buffering.  Must be set while unacquired.
    pub fn set_buffer_size(&self, size: u32) -> Result<(), Error> {
        let device = self.com("IDirectInputDevice8W::SetProperty")?;
        let prop = DIPROPDWORD { diph: device_prop_header::<DIPROPDWORD>(), dwData: size };
        let hr = unsafe { device.SetProperty(DIPROP_BUFFERSIZE as *const GUID, &prop as *const DIPROPDWORD as *const DIPROPHEADER) };
        Error::check_hr("IDirectInputDevice8W::SetProperty", hr, "DIPROP_BUFFERSIZE")
    }

    /// `GetProperty(DIPROP_BUFFERSIZE, ...)`
    pub fn buffer_size(&self) -> Result<u32, Error> {
        let device = self.com("IDirectInputDevice8W::GetProperty")?;
        let mut prop = DIPROPDWORD { diph: device_prop_header::<DIPROPDWORD>(), dwData: 0 };
        let hr = unsafe { device.GetProperty(DIPROP_BUFFERSIZE as *const GUID, &mut prop as *mut DIPROPDWORD as *mut DIPROPHEADER) };
        Error::check_hr("IDirectInputDevice8W::GetProperty", hr, "DIPROP_BUFFERSIZE")?;
        Ok(prop.dwData)
    }

    /// [`IDirectInputDevice8::Acquire`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/ee417818(v=vs.85)).
    /// Acquiring an already acquired device succeeds (`S_FALSE`).
    pub fn acquire(&self) -> Result<(), Error> {
        let device = self.com("IDirectInputDevice8W::Acquire")?;
        let hr = unsafe { device.Acquire() };
        Error::check_hr("IDirectInputDevice8W::Acquire", hr, "")
    }

    /// [`IDirectInputDevice8::Unacquire`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/ee417929(v=vs.85))
    pub fn unacquire(&self) -> Result<(), Error> {
        let device = self.com("IDirectInputDevice8W::Unacquire")?;
        let hr = unsafe { device.Unacquire() };
        Error::check_hr("IDirectInputDevice8W::Unacquire", hr, "")
    }

    /// [`IDirectInputDevice8::Poll`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/ee417913(v=vs.85)).
    /// Succeeds with `DI_NOEFFECT` for devices that don't need polling.
    pub fn poll(&self) -> Result<(), Error> {
        let device = self.com("IDirectInputDevice8W::Poll")?;
        let hr = unsafe { device.Poll() };
        Error::check_hr("IDirectInputDevice8W::Poll", hr, "")
    }

    /// [`IDirectInputDevice8::GetCapabilities`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/ee417892(v=vs.85))
    pub fn capabilities(&self) -> Result<DeviceCaps, Error> {
        let device = self.com("IDirectInputDevice8W::GetCapabilities")?;
        let mut caps = DIDEVCAPS { dwSize: size_of::<DIDEVCAPS>() as u32, .. DIDEVCAPS::default() };
        let hr = unsafe { device.GetCapabilities(&mut caps) };
        Error::check_hr("IDirectInputDevice8W::GetCapabilities", hr, "")?;
        Ok(DeviceCaps::from(caps))
    }

    /// [`IDirectInputDevice8::GetDeviceInfo`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/ee417902(v=vs.85))
    pub fn info(&self) -> Result<DeviceInstance, Error> {
        let device = self.com("IDirectInputDevice8W::GetDeviceInfo")?;
        let mut info = unsafe { std::mem::zeroed::<DIDEVICEINSTANCEW>() };
        info.dwSize = size_of::<DIDEVICEINSTANCEW>() as u32;
        let hr = unsafe { device.GetDeviceInfo(&mut info) };
        Error::check_hr("IDirectInputDevice8W::GetDeviceInfo", hr, "")?;
        Ok(DeviceInstance::from(&info))
    }

    /// [`IDirectInputDevice8::GetDeviceState`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/ee417897(v=vs.85))
    /// with [`keyboard_format`]: one byte per [`Key`], high bit set while held.
    pub fn keyboard_state(&self) -> Result<[u8; 256], Error> {
        let mut state = [0u8; 256];
        self.device_state(&mut state)?;
        Ok(state)
    }

    /// [`IDirectInputDevice8::GetDeviceState`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/ee417897(v=vs.85))
    /// with [`mouse_format`].
    pub fn mouse_state(&self) -> Result<MouseState, Error> {
        let mut state = MouseState::default();
        self.device_state(&mut state)?;
        Ok(state)
    }

    /// [`IDirectInputDevice8::GetDeviceState`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/ee417897(v=vs.85))
    /// with [`joystick_format`].
    pub fn joystick_state(&self) -> Result<JoystickState, Error> {
        let mut state = JoystickState::default();
        self.device_state(&mut state)?;
        Ok(state)
    }

    /// The data format set must describe exactly `size_of::<T>()` bytes.
    fn device_state<T: Copy>(&self, state: &mut T) -> Result<(), Error> {
        let device = self.com("IDirectInputDevice8W::GetDeviceState")?;
        let hr = unsafe { device.GetDeviceState(size_of::<T>() as u32, state as *mut T as *mut _) };
        Error::check_hr("IDirectInputDevice8W::GetDeviceState", hr, "")
    }

    /// [`IDirectInputDevice8::GetDeviceData`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/ee417894(v=vs.85)):
    /// remove up to `max` buffered events.
    ///
    /// The `bool` is `true` if the buffer overflowed (`DI_BUFFEROVERFLOW`) and older events were lost.
    /// Requires a nonzero [`set_buffer_size`](Self::set_buffer_size).
    pub fn buffered_data(&self, max: u32) -> Result<(Vec<ObjectData>, bool), Error> {
        let device = self.com("IDirectInputDevice8W::GetDeviceData")?;
        let mut data = vec![DIDEVICEOBJECTDATA::default(); max as usize];
        let mut n = max;
        let hr = unsafe { device.GetDeviceData(size_of::<DIDEVICEOBJECTDATA>() as u32, data.as_mut_ptr(), &mut n, 0) };
        Error::check_hr("IDirectInputDevice8W::GetDeviceData", hr, "")?;
        data.truncate(n as usize);
        Ok((data.into_iter().map(ObjectData::from).collect(), hr == DI_BUFFEROVERFLOW))
    }

    /// The number of buffered events, without removing them.
    pub fn buffered_count(&self) -> Result<u32, Error> {
        let device = self.com("IDirectInputDevice8W::GetDeviceData")?;
        let mut n = u32::MAX;
        let hr = unsafe { device.GetDeviceData(size_of::<DIDEVICEOBJECTDATA>() as u32, null_mut(), &mut n, DIGDD_PEEK) };
        Error::check_hr("IDirectInputDevice8W::GetDeviceData", hr, "DIGDD_PEEK")?;
        Ok(n)
    }
}

fn device_prop_header<P>() -> DIPROPHEADER {
    DIPROPHEADER {
        dwSize:         size_of::<P>() as u32,
        dwHeaderSize:   size_of::<DIPROPHEADER>() as u32,
        dwObj:          0,
        dwHow:          DIPH_DEVICE,
    }
}



#[test] fn system_keyboard() {
    let di = DirectInput::create().unwrap();
    let keyboard = di.create_device(&GUID_SysKeyboard).unwrap();

    let caps = keyboard.capabilities().unwrap();
    assert_eq!(caps.device_type(), DeviceType::KEYBOARD);
    assert!(caps.flags.contains(DeviceCapsFlags::ATTACHED));
    assert!(keyboard.info().unwrap().is(&GUID_SysKeyboard));

    keyboard.set_data_format(keyboard_format()).unwrap();
    keyboard.set_buffer_size(16).unwrap();
    assert_eq!(keyboard.buffer_size().unwrap(), 16);

    let err = keyboard.keyboard_state().unwrap_err();
    assert_eq!(err.hresult(), Some(DIERR_NOTACQUIRED));
    let err = keyboard.buffered_data(16).unwrap_err();
    assert_eq!(err.hresult(), Some(DIERR_NOTACQUIRED));
}

#[test] fn background_keyboard_for_hidden_window() {
    let window = crate::utility::HiddenWindow::new();
    let di = DirectInput::create().unwrap();
    let keyboard = di.create_device(&GUID_SysKeyboard).unwrap();
    keyboard.set_data_format(keyboard_format()).unwrap();
    keyboard.set_buffer_size(8).unwrap();

    let err = unsafe { keyboard.set_cooperative_level(window.hwnd(), CooperativeLevel::EXCLUSIVE | CooperativeLevel::NONEXCLUSIVE) }.unwrap_err();
    assert_eq!(err.hresult(), Some(DIERR_INVALIDPARAM));
    assert_eq!(err.method(), "IDirectInputDevice8W::SetCooperativeLevel");

    unsafe { keyboard.set_cooperative_level(window.hwnd(), CooperativeLevel::BACKGROUND | CooperativeLevel::NONEXCLUSIVE) }.unwrap();
    keyboard.acquire().unwrap();
    keyboard.keyboard_state().unwrap();
    let (events, _overflowed) = keyboard.buffered_data(8).unwrap();
    assert!(events.len() <= 8);
    keyboard.unacquire().unwrap();
    assert_eq!(keyboard.keyboard_state().unwrap_err().hresult(), Some(DIERR_NOTACQUIRED));
}

#[test] fn system_mouse_format() {
    let di = DirectInput::create().unwrap();
    let mouse = di.create_device(&GUID_SysMouse).unwrap();
    assert_eq!(mouse.capabilities().unwrap().device_type(), DeviceType::MOUSE);
    mouse.set_data_format(mouse_format()).unwrap();
    assert_eq!(mouse.mouse_state().unwrap_err().hresult(), Some(DIERR_NOTACQUIRED));
    mouse.unacquire().unwrap();
}

#[test] fn disposed_device() {
    let di = DirectInput::create().unwrap();
    let mut keyboard = di.create_device(&GUID_SysKeyboard).unwrap();
    keyboard.dispose();
    keyboard.dispose();
    assert!(keyboard.set_data_format(keyboard_format()).unwrap_err().is_disposed());
    assert!(keyboard.acquire().unwrap_err().is_disposed());
    assert!(keyboard.poll().unwrap_err().is_disposed());
    assert!(keyboard.keyboard_state().unwrap_err().is_disposed());
    assert!(keyboard.buffered_data(4).unwrap_err().is_disposed());
    assert!(keyboard.capabilities().unwrap_err().is_disposed());
}
