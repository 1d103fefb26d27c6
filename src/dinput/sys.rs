//! Raw `dinput.h` declarations, for the subset of DirectInput 8 this crate wraps
//!
//! `winapi` 0.3 doesn't cover DirectInput.  Vtable slots this crate never calls are still declared, in order,
//! with an uninhabited parameter type so they can't be called by accident.

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]

use winapi::RIDL;
use winapi::shared::basetsd::UINT_PTR;
use winapi::shared::guiddef::{GUID, LPGUID, REFGUID, REFIID};
use winapi::shared::minwindef::{BOOL, BYTE, DWORD, HINSTANCE, LPVOID, MAX_PATH, WORD};
use winapi::shared::windef::HWND;
use winapi::um::unknwnbase::{IUnknown, IUnknownVtbl, LPUNKNOWN};
use winapi::um::winnt::{HANDLE, HRESULT, LONG, LPCWSTR, WCHAR};



/// Placeholder parameter for vtable slots that are declared but never called.
pub enum Unsupported {}

pub const DIRECTINPUT_VERSION   : DWORD = 0x0800;

pub const DIENUM_STOP           : BOOL  = 0;
pub const DIENUM_CONTINUE       : BOOL  = 1;

pub const DIPH_DEVICE           : DWORD = 0;
pub const DIPH_BYOFFSET         : DWORD = 1;
pub const DIPH_BYID             : DWORD = 2;

pub const DIGDD_PEEK            : DWORD = 0x0000_0001;

pub const DIDFT_ALL             : DWORD = 0x0000_0000;
pub const DIDFT_RELAXIS         : DWORD = 0x0000_0001;
pub const DIDFT_ABSAXIS         : DWORD = 0x0000_0002;
pub const DIDFT_AXIS            : DWORD = 0x0000_0003;
pub const DIDFT_PSHBUTTON       : DWORD = 0x0000_0004;
pub const DIDFT_TGLBUTTON       : DWORD = 0x0000_0008;
pub const DIDFT_BUTTON          : DWORD = 0x0000_000C;
pub const DIDFT_POV             : DWORD = 0x0000_0010;
pub const DIDFT_ANYINSTANCE     : DWORD = 0x00FF_FF00;
pub const DIDFT_OPTIONAL        : DWORD = 0x8000_0000;

/// `DIDFT_MAKEINSTANCE(n)`
pub const fn DIDFT_MAKEINSTANCE(n: u16) -> DWORD { (n as DWORD) << 8 }

pub const DIDOI_ASPECTPOSITION  : DWORD = 0x0000_0100;

/// `MAKEDIPROP(1)`: property ids below 0x10000 are passed as small integers cast to `REFGUID`.
pub const DIPROP_BUFFERSIZE     : usize = 1;

pub type LPDIENUMDEVICESCALLBACKW = Option<unsafe extern "system" fn(lpddi: *const DIDEVICEINSTANCEW, pvRef: LPVOID) -> BOOL>;



/// [`DIDEVCAPS`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/ee416607(v=vs.85))
#[repr(C)] #[derive(Clone, Copy, Debug, Default)]
pub struct DIDEVCAPS {
    pub dwSize:                 DWORD,
    pub dwFlags:                DWORD,
    pub dwDevType:              DWORD,
    pub dwAxes:                 DWORD,
    pub dwButtons:              DWORD,
    pub dwPOVs:                 DWORD,
    pub dwFFSamplePeriod:       DWORD,
    pub dwFFMinTimeResolution:  DWORD,
    pub dwFirmwareRevision:     DWORD,
    pub dwHardwareRevision:     DWORD,
    pub dwFFDriverVersion:      DWORD,
}

/// [`DIDEVICEINSTANCEW`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/ee416610(v=vs.85))
#[repr(C)] #[derive(Clone, Copy)]
pub struct DIDEVICEINSTANCEW {
    pub dwSize:                 DWORD,
    pub guidInstance:           GUID,
    pub guidProduct:            GUID,
    pub dwDevType:              DWORD,
    pub tszInstanceName:        [WCHAR; MAX_PATH],
    pub tszProductName:         [WCHAR; MAX_PATH],
    pub guidFFDriver:           GUID,
    pub wUsagePage:             WORD,
    pub wUsage:                 WORD,
}

/// [`DIOBJECTDATAFORMAT`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/ee416625(v=vs.85))
#[repr(C)] #[derive(Clone, Copy, Debug)]
pub struct DIOBJECTDATAFORMAT {
    pub pguid:                  *const GUID,
    pub dwOfs:                  DWORD,
    pub dwType:                 DWORD,
    pub dwFlags:                DWORD,
}

/// [`DIDATAFORMAT`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/ee416604(v=vs.85))
#[repr(C)] #[derive(Clone, Copy, Debug)]
pub struct DIDATAFORMAT {
    pub dwSize:                 DWORD,
    pub dwObjSize:              DWORD,
    pub dwFlags:                DWORD,
    pub dwDataSize:             DWORD,
    pub dwNumObjs:              DWORD,
    pub rgodf:                  *mut DIOBJECTDATAFORMAT,
}

/// [`DIDEVICEOBJECTDATA`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/ee416612(v=vs.85))
#[repr(C)] #[derive(Clone, Copy, Debug, Default)]
pub struct DIDEVICEOBJECTDATA {
    pub dwOfs:                  DWORD,
    pub dwData:                 DWORD,
    pub dwTimeStamp:            DWORD,
    pub dwSequence:             DWORD,
    pub uAppData:               UINT_PTR,
}

/// [`DIPROPHEADER`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/ee416630(v=vs.85))
#[repr(C)] #[derive(Clone, Copy, Debug, Default)]
pub struct DIPROPHEADER {
    pub dwSize:                 DWORD,
    pub dwHeaderSize:           DWORD,
    pub dwObj:                  DWORD,
    pub dwHow:                  DWORD,
}

/// [`DIPROPDWORD`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/ee416628(v=vs.85))
#[repr(C)] #[derive(Clone, Copy, Debug, Default)]
pub struct DIPROPDWORD {
    pub diph:                   DIPROPHEADER,
    pub dwData:                 DWORD,
}

/// [`DIMOUSESTATE2`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/ee416631(v=vs.85))
#[repr(C)] #[derive(Clone, Copy, Debug, Default)]
pub struct DIMOUSESTATE2 {
    pub lX:                     LONG,
    pub lY:                     LONG,
    pub lZ:                     LONG,
    pub rgbButtons:             [BYTE; 8],
}

/// [`DIJOYSTATE`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/ee416627(v=vs.85))
#[repr(C)] #[derive(Clone, Copy, Debug, Default)]
pub struct DIJOYSTATE {
    pub lX:                     LONG,
    pub lY:                     LONG,
    pub lZ:                     LONG,
    pub lRx:                    LONG,
    pub lRy:                    LONG,
    pub lRz:                    LONG,
    pub rglSlider:              [LONG; 2],
    pub rgdwPOV:                [DWORD; 4],
    pub rgbButtons:             [BYTE; 32],
}



RIDL!{#[uuid(0xbf798031, 0x483a, 0x4da2, 0xaa, 0x99, 0x5d, 0x64, 0xed, 0x36, 0x97, 0x00)]
interface IDirectInput8W(IDirectInput8WVtbl): IUnknown(IUnknownVtbl) {
    fn CreateDevice(
        rguid: REFGUID,
        lplpDirectInputDevice: *mut *mut IDirectInputDevice8W,
        pUnkOuter: LPUNKNOWN,
    ) -> HRESULT,
    fn EnumDevices(
        dwDevType: DWORD,
        lpCallback: LPDIENUMDEVICESCALLBACKW,
        pvRef: LPVOID,
        dwFlags: DWORD,
    ) -> HRESULT,
    fn GetDeviceStatus(
        rguidInstance: REFGUID,
    ) -> HRESULT,
    fn RunControlPanel(
        hwndOwner: HWND,
        dwFlags: DWORD,
    ) -> HRESULT,
    fn Initialize(
        hinst: HINSTANCE,
        dwVersion: DWORD,
    ) -> HRESULT,
    fn FindDevice(
        rguidClass: REFGUID,
        ptszName: LPCWSTR,
        pguidInstance: LPGUID,
    ) -> HRESULT,
    fn EnumDevicesBySemantics(
        unsupported: Unsupported,
    ) -> HRESULT,
    fn ConfigureDevices(
        unsupported: Unsupported,
    ) -> HRESULT,
}}

RIDL!{#[uuid(0x54d41081, 0xdc15, 0x4833, 0xa4, 0x1b, 0x74, 0x8f, 0x73, 0xa3, 0x81, 0x79)]
interface IDirectInputDevice8W(IDirectInputDevice8WVtbl): IUnknown(IUnknownVtbl) {
    fn GetCapabilities(
        lpDIDevCaps: *mut DIDEVCAPS,
    ) -> HRESULT,
    fn EnumObjects(
        unsupported: Unsupported,
    ) -> HRESULT,
    fn GetProperty(
        rguidProp: REFGUID,
        pdiph: *mut DIPROPHEADER,
    ) -> HRESULT,
    fn SetProperty(
        rguidProp: REFGUID,
        pdiph: *const DIPROPHEADER,
    ) -> HRESULT,
    fn Acquire() -> HRESULT,
    fn Unacquire() -> HRESULT,
    fn GetDeviceState(
        cbData: DWORD,
        lpvData: LPVOID,
    ) -> HRESULT,
    fn GetDeviceData(
        cbObjectData: DWORD,
        rgdod: *mut DIDEVICEOBJECTDATA,
        pdwInOut: *mut DWORD,
        dwFlags: DWORD,
    ) -> HRESULT,
    fn SetDataFormat(
        lpdf: *const DIDATAFORMAT,
    ) -> HRESULT,
    fn SetEventNotification(
        hEvent: HANDLE,
    ) -> HRESULT,
    fn SetCooperativeLevel(
        hwnd: HWND,
        dwFlags: DWORD,
    ) -> HRESULT,
    fn GetObjectInfo(
        unsupported: Unsupported,
    ) -> HRESULT,
    fn GetDeviceInfo(
        pdidi: *mut DIDEVICEINSTANCEW,
    ) -> HRESULT,
    fn RunControlPanel(
        hwndOwner: HWND,
        dwFlags: DWORD,
    ) -> HRESULT,
    fn Initialize(
        hinst: HINSTANCE,
        dwVersion: DWORD,
        rguid: REFGUID,
    ) -> HRESULT,
    fn CreateEffect(
        unsupported: Unsupported,
    ) -> HRESULT,
    fn EnumEffects(
        unsupported: Unsupported,
    ) -> HRESULT,
    fn GetEffectInfo(
        unsupported: Unsupported,
    ) -> HRESULT,
    fn GetForceFeedbackState(
        pdwOut: *mut DWORD,
    ) -> HRESULT,
    fn SendForceFeedbackCommand(
        dwFlags: DWORD,
    ) -> HRESULT,
    fn EnumCreatedEffectObjects(
        unsupported: Unsupported,
    ) -> HRESULT,
    fn Escape(
        unsupported: Unsupported,
    ) -> HRESULT,
    fn Poll() -> HRESULT,
    fn SendDeviceData(
        cbObjectData: DWORD,
        rgdod: *const DIDEVICEOBJECTDATA,
        pdwInOut: *mut DWORD,
        fl: DWORD,
    ) -> HRESULT,
    fn EnumEffectsInFile(
        unsupported: Unsupported,
    ) -> HRESULT,
    fn WriteEffectToFile(
        unsupported: Unsupported,
    ) -> HRESULT,
    fn BuildActionMap(
        unsupported: Unsupported,
    ) -> HRESULT,
    fn SetActionMap(
        unsupported: Unsupported,
    ) -> HRESULT,
    fn GetImageInfo(
        unsupported: Unsupported,
    ) -> HRESULT,
}}

#[link(name = "dinput8")]
extern "system" {
    /// [`DirectInput8Create`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/ee416756(v=vs.85))
    pub fn DirectInput8Create(
        hinst: HINSTANCE,
        dwVersion: DWORD,
        riidltf: REFIID,
        ppvOut: *mut LPVOID,
        punkOuter: LPUNKNOWN,
    ) -> HRESULT;
}



const fn guid(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> GUID {
    GUID { Data1: data1, Data2: data2, Data3: data3, Data4: data4 }
}

const fn axis(data1: u32) -> GUID { guid(data1, 0xc9f3, 0x11cf, [0xbf, 0xc7, 0x44, 0x45, 0x53, 0x54, 0x00, 0x00]) }
const fn sys (data1: u32) -> GUID { guid(data1, 0xd5a0, 0x11cf, [0xbf, 0xc7, 0x44, 0x45, 0x53, 0x54, 0x00, 0x00]) }

pub const IID_IDirectInput8W        : GUID = guid(0xbf798031, 0x483a, 0x4da2, [0xaa, 0x99, 0x5d, 0x64, 0xed, 0x36, 0x97, 0x00]);
pub const IID_IDirectInputDevice8W  : GUID = guid(0x54d41081, 0xdc15, 0x4833, [0xa4, 0x1b, 0x74, 0x8f, 0x73, 0xa3, 0x81, 0x79]);

pub const GUID_SysMouse             : GUID = sys(0x6f1d2b60);
pub const GUID_SysKeyboard          : GUID = sys(0x6f1d2b61);
pub const GUID_Joystick             : GUID = sys(0x6f1d2b70);

pub const GUID_XAxis                : GUID = axis(0xa36d02e0);
pub const GUID_YAxis                : GUID = axis(0xa36d02e1);
pub const GUID_ZAxis                : GUID = axis(0xa36d02e2);
pub const GUID_RzAxis               : GUID = axis(0xa36d02e3);
pub const GUID_Slider               : GUID = axis(0xa36d02e4);
pub const GUID_Button               : GUID = axis(0xa36d02f0);
pub const GUID_POV                  : GUID = axis(0xa36d02f2);
pub const GUID_Unknown              : GUID = axis(0xa36d02f3);
pub const GUID_RxAxis               : GUID = axis(0xa36d02f4);
pub const GUID_RyAxis               : GUID = axis(0xa36d02f5);
pub const GUID_Key                  : GUID = guid(0x55728220, 0xd33c, 0x11cf, [0xbf, 0xc7, 0x44, 0x45, 0x53, 0x54, 0x00, 0x00]);



#[test] fn layout() {
    use std::mem::size_of;
    let ptr = size_of::<usize>();

    assert_eq!(size_of::<DIDEVCAPS>(),              44);
    assert_eq!(size_of::<DIDEVICEINSTANCEW>(),      1100);
    assert_eq!(size_of::<DIOBJECTDATAFORMAT>(),     if ptr == 8 { 24 } else { 16 });
    assert_eq!(size_of::<DIDATAFORMAT>(),           if ptr == 8 { 32 } else { 24 });
    assert_eq!(size_of::<DIDEVICEOBJECTDATA>(),     if ptr == 8 { 24 } else { 20 });
    assert_eq!(size_of::<DIPROPHEADER>(),           16);
    assert_eq!(size_of::<DIPROPDWORD>(),            20);
    assert_eq!(size_of::<DIMOUSESTATE2>(),          20);
    assert_eq!(size_of::<DIJOYSTATE>(),             80);
}

#[test] fn interface_ids() {
    use winapi::Interface;
    use winapi::shared::guiddef::IsEqualGUID;
    assert!(IsEqualGUID(&IDirectInput8W::uuidof(),          &IID_IDirectInput8W));
    assert!(IsEqualGUID(&IDirectInputDevice8W::uuidof(),    &IID_IDirectInputDevice8W));
    assert_eq!(GUID_SysKeyboard.Data1,  0x6f1d2b61);
    assert_eq!(GUID_Key.Data3,          0x11cf);
    assert_eq!(DIDFT_MAKEINSTANCE(3),   0x300);
}
