use super::*;
use super::sys::*;
use crate::com::*;
use crate::utility::from_wide_nul;

use winapi::shared::guiddef::{GUID, IsEqualGUID};
use winapi::shared::minwindef::{BOOL, LPVOID};
use winapi::um::libloaderapi::GetModuleHandleW;

use std::ptr::{null, null_mut};



com_wrapper! {
    /// [`IDirectInput8W`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/ee417799(v=vs.85)):
    /// enumerates and creates [`InputDevice`]s.
    pub struct DirectInput(IDirectInput8W);
}

/// A `DIDEVICEINSTANCEW`: one enumerated device.
#[derive(Clone)]
pub struct DeviceInstance {
    /// Pass to [`DirectInput::create_device`].
    pub instance:       GUID,
    pub product:        GUID,
    pub dev_type:       u32,
    pub instance_name:  String,
    pub product_name:   String,
    pub ff_driver:      GUID,
    pub usage_page:     u16,
    pub usage:          u16,
}

impl DeviceInstance {
    pub fn device_type(&self) -> DeviceType { DeviceType::from_dev_type(self.dev_type) }

    /// The `DI8DEVTYPE*_*` subtype in the second byte of `dev_type`.
    pub fn subtype(&self) -> u8 { (self.dev_type >> 8) as u8 }

    /// `true` if `instance` is `other`'s instance GUID.
    pub fn is(&self, other: &GUID) -> bool { IsEqualGUID(&self.instance, other) }
}

impl std::fmt::Debug for DeviceInstance {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt.debug_struct("DeviceInstance")
            .field("device_type",   &self.device_type())
            .field("instance_name", &self.instance_name)
            .field("product_name",  &self.product_name)
            .finish()
    }
}

impl From<&DIDEVICEINSTANCEW> for DeviceInstance {
    fn from(i: &DIDEVICEINSTANCEW) -> Self {
        Self {
            instance:       i.guidInstance,
            product:        i.guidProduct,
            dev_type:       i.dwDevType,
            instance_name:  from_wide_nul(&i.tszInstanceName[..]),
            product_name:   from_wide_nul(&i.tszProductName[..]),
            ff_driver:      i.guidFFDriver,
            usage_page:     i.wUsagePage,
            usage:          i.wUsage,
        }
    }
}

impl DirectInput {
    /// [`DirectInput8Create`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/ee416756(v=vs.85))
    /// for the current module, `DIRECTINPUT_VERSION` 0x0800.
    #[tracing::instrument(level = "debug")]
    pub fn create() -> Result<Self, Error> {
        let hinstance = unsafe { GetModuleHandleW(null()) };
        if hinstance.is_null() {
            let gle = unsafe { winapi::um::errhandlingapi::GetLastError() };
            return Err(Error::new_gle("GetModuleHandleW", gle, "current module"));
        }
        let mut di = null_mut();
        let hr = unsafe { DirectInput8Create(hinstance, DIRECTINPUT_VERSION, &IID_IDirectInput8W, &mut di, null_mut()) };
        let di = unsafe { Self::from_raw(di as *mut IDirectInput8W) };
        let di = di.ok_or_else(|| Error::null("DirectInput8Create", hr, "IDirectInput8W is null"))?;
        tracing::debug!("created IDirectInput8W");
        Ok(di)
    }

    /// [`IDirectInput8::EnumDevices`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/ee417804(v=vs.85))
    pub fn enum_devices(&self, class: DeviceClass, flags: EnumDevicesFlags) -> Result<Vec<DeviceInstance>, Error> {
        let di = self.com("IDirectInput8W::EnumDevices")?;
        let mut devices = Vec::<DeviceInstance>::new();
        let hr = unsafe { di.EnumDevices(class.0, Some(collect_device), &mut devices as *mut Vec<DeviceInstance> as LPVOID, flags.bits()) };
        Error::check_hr("IDirectInput8W::EnumDevices", hr, "")?;
        Ok(devices)
    }

    /// [`IDirectInput8::CreateDevice`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/ee417803(v=vs.85))
    /// from an instance GUID (or [`GUID_SysKeyboard`] / [`GUID_SysMouse`]).
    pub fn create_device(&self, instance: &GUID) -> Result<InputDevice, Error> {
        let di = self.com("IDirectInput8W::CreateDevice")?;
        let mut device = null_mut();
        let hr = unsafe { di.CreateDevice(instance, &mut device, null_mut()) };
        let device = unsafe { InputDevice::from_raw(device) };
        device.ok_or_else(|| Error::null("IDirectInput8W::CreateDevice", hr, "IDirectInputDevice8W is null"))
    }

    /// [`IDirectInput8::GetDeviceStatus`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/ee417806(v=vs.85)):
    /// `true` if attached (`DI_OK`), `false` if not (`DI_NOTATTACHED`).
    pub fn device_status(&self, instance: &GUID) -> Result<bool, Error> {
        let di = self.com("IDirectInput8W::GetDeviceStatus")?;
        let hr = unsafe { di.GetDeviceStatus(instance) };
        Error::check_hr("IDirectInput8W::GetDeviceStatus", hr, "")?;
        Ok(hr == DI_OK)
    }
}

unsafe extern "system" fn collect_device(instance: *const DIDEVICEINSTANCEW, context: LPVOID) -> BOOL {
    let devices = &mut *(context as *mut Vec<DeviceInstance>);
    if let Some(instance) = instance.as_ref() { devices.push(DeviceInstance::from(instance)); }
    DIENUM_CONTINUE
}



#[test] fn create_and_enumerate() {
    let di = DirectInput::create().unwrap();
    let all = di.enum_devices(DeviceClass::ALL, EnumDevicesFlags::ALL_DEVICES).unwrap();
    let attached = di.enum_devices(DeviceClass::ALL, EnumDevicesFlags::ATTACHED_ONLY).unwrap();
    assert!(attached.len() <= all.len());
    for device in all.iter() {
        assert!(!device.instance_name.contains('\0'));
        let _ = di.device_status(&device.instance).unwrap();
    }
    for keyboard in di.enum_devices(DeviceClass::KEYBOARD, EnumDevicesFlags::ALL_DEVICES).unwrap() {
        assert_eq!(keyboard.device_type(), DeviceType::KEYBOARD, "{:?}", keyboard);
    }
}

#[test] fn disposed_direct_input() {
    let mut di = DirectInput::create().unwrap();
    di.dispose();
    di.dispose();
    assert!(di.enum_devices(DeviceClass::ALL, EnumDevicesFlags::ALL_DEVICES).unwrap_err().is_disposed());
    assert!(di.create_device(&GUID_SysKeyboard).map(|_| ()).unwrap_err().is_disposed());
    assert!(di.device_status(&GUID_SysMouse).unwrap_err().is_disposed());
}
