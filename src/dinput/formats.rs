use super::*;
use super::sys::*;
use crate::utility::SendSyncCell;

use winapi::shared::guiddef::GUID;

use std::mem::size_of;
use std::ptr::null;



/// A `DIDATAFORMAT` and the object table it points into.
///
/// [`keyboard_format`], [`mouse_format`] and [`joystick_format`] are the equivalents of
/// `c_dfDIKeyboard`, `c_dfDIMouse2` and `c_dfDIJoystick` from `dinput8.lib`.
pub struct DataFormat {
    flags:      DataFormatFlags,
    data_size:  u32,
    objects:    Vec<DIOBJECTDATAFORMAT>,
}

impl DataFormat {
    /// ### Safety
    /// Every non-null `pguid` in `objects` must point to a GUID that outlives the format,
    /// and every `dwOfs` must lie within `data_size`.
    pub unsafe fn new(flags: DataFormatFlags, data_size: u32, objects: Vec<DIOBJECTDATAFORMAT>) -> Self {
        Self { flags, data_size, objects }
    }

    pub fn flags(&self) -> DataFormatFlags { self.flags }

    /// Size of the device state this format reads, in bytes.
    pub fn data_size(&self) -> u32 { self.data_size }

    pub fn objects(&self) -> &[DIOBJECTDATAFORMAT] { &self.objects[..] }

    /// The native struct.  Only valid while `self` is borrowed.
    pub(crate) fn to_native(&self) -> DIDATAFORMAT {
        DIDATAFORMAT {
            dwSize:     size_of::<DIDATAFORMAT>() as u32,
            dwObjSize:  size_of::<DIOBJECTDATAFORMAT>() as u32,
            dwFlags:    self.flags.bits(),
            dwDataSize: self.data_size,
            dwNumObjs:  self.objects.len() as u32,
            // DirectInput only reads the table
            rgodf:      self.objects.as_ptr() as *mut _,
        }
    }
}

impl std::fmt::Debug for DataFormat {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt.debug_struct("DataFormat")
            .field("flags",     &self.flags)
            .field("data_size", &self.data_size)
            .field("objects",   &self.objects.len())
            .finish()
    }
}

fn object(guid: Option<&'static GUID>, offset: u32, ty: u32, flags: u32) -> DIOBJECTDATAFORMAT {
    DIOBJECTDATAFORMAT { pguid: guid.map_or(null(), |g| g as *const _), dwOfs: offset, dwType: ty, dwFlags: flags }
}

const AXIS      : u32 = DIDFT_AXIS      | DIDFT_ANYINSTANCE;
const BUTTON    : u32 = DIDFT_BUTTON    | DIDFT_ANYINSTANCE;
const POV       : u32 = DIDFT_POV       | DIDFT_ANYINSTANCE;

lazy_static::lazy_static! {
    static ref KEYBOARD : SendSyncCell<DataFormat> = unsafe { SendSyncCell::new(DataFormat::new(
        DataFormatFlags::RELAXIS,
        256,
        (0 ..= 255u16).map(|key| object(Some(&GUID_Key), key.into(), DIDFT_OPTIONAL | DIDFT_BUTTON | DIDFT_MAKEINSTANCE(key), 0)).collect(),
    ))};

    static ref MOUSE : SendSyncCell<DataFormat> = unsafe { SendSyncCell::new(DataFormat::new(
        DataFormatFlags::RELAXIS,
        size_of::<MouseState>() as u32,
        vec![
            object(Some(&GUID_XAxis),   0,  AXIS,                   0),
            object(Some(&GUID_YAxis),   4,  AXIS,                   0),
            object(Some(&GUID_ZAxis),   8,  DIDFT_OPTIONAL | AXIS,  0),
            object(None,                12, BUTTON,                 0),
            object(None,                13, BUTTON,                 0),
            object(None,                14, DIDFT_OPTIONAL | BUTTON, 0),
            object(None,                15, DIDFT_OPTIONAL | BUTTON, 0),
            object(None,                16, DIDFT_OPTIONAL | BUTTON, 0),
            object(None,                17, DIDFT_OPTIONAL | BUTTON, 0),
            object(None,                18, DIDFT_OPTIONAL | BUTTON, 0),
            object(None,                19, DIDFT_OPTIONAL | BUTTON, 0),
        ],
    ))};

    static ref JOYSTICK : SendSyncCell<DataFormat> = unsafe { SendSyncCell::new(DataFormat::new(
        DataFormatFlags::ABSAXIS,
        size_of::<JoystickState>() as u32,
        {
            let axes : [&'static GUID; 8] = [&GUID_XAxis, &GUID_YAxis, &GUID_ZAxis, &GUID_RxAxis, &GUID_RyAxis, &GUID_RzAxis, &GUID_Slider, &GUID_Slider];
            let axes    = axes.iter().enumerate().map(|(i, g)| object(Some(*g), 4 * i as u32, DIDFT_OPTIONAL | AXIS, DIDOI_ASPECTPOSITION));
            let povs    = (0 .. 4).map(|i| object(Some(&GUID_POV), 32 + 4 * i, DIDFT_OPTIONAL | POV, 0));
            let buttons = (0 .. 32).map(|i| object(None, 48 + i, DIDFT_OPTIONAL | BUTTON, 0));
            axes.chain(povs).chain(buttons).collect()
        },
    ))};
}

/// `c_dfDIKeyboard`: 256 bytes, one per [`Key`].
pub fn keyboard_format() -> &'static DataFormat { &KEYBOARD }

/// `c_dfDIMouse2`: a [`MouseState`].
pub fn mouse_format() -> &'static DataFormat { &MOUSE }

/// `c_dfDIJoystick`: a [`JoystickState`].
pub fn joystick_format() -> &'static DataFormat { &JOYSTICK }



#[test] fn predefined_formats() {
    let keyboard = keyboard_format();
    assert_eq!(keyboard.data_size(), 256);
    assert_eq!(keyboard.objects().len(), 256);
    assert_eq!(keyboard.objects()[0x1E].dwOfs, Key::A.raw() as u32);
    assert_eq!(keyboard.objects()[0x1E].dwType, 0x8000_1E0C);

    let mouse = mouse_format();
    assert_eq!(mouse.flags(), DataFormatFlags::RELAXIS);
    assert_eq!(mouse.data_size(), 20);
    assert_eq!(mouse.objects().len(), 11);
    assert_eq!(mouse.objects()[2].dwType, 0x80FF_FF03);
    assert_eq!(mouse.objects()[3].dwType, 0x00FF_FF0C);
    assert!(mouse.objects()[3].pguid.is_null());
    assert_eq!(mouse.objects()[10].dwOfs, 19);

    let joystick = joystick_format();
    assert_eq!(joystick.flags(), DataFormatFlags::ABSAXIS);
    assert_eq!(joystick.data_size(), 80);
    assert_eq!(joystick.objects().len(), 44);
    assert_eq!(joystick.objects()[7].dwOfs, 28);
    assert_eq!(joystick.objects()[8].dwType, 0x80FF_FF10);
    assert_eq!(joystick.objects()[12].dwOfs, 48);
    assert_eq!(joystick.objects()[43].dwOfs, 79);

    let native = mouse.to_native();
    assert_eq!(native.dwNumObjs, 11);
    assert_eq!(native.rgodf as *const _, mouse.objects().as_ptr());
}

#[test] fn shared_across_threads() {
    let ptr = keyboard_format() as *const DataFormat as usize;
    let other = std::thread::spawn(|| keyboard_format() as *const DataFormat as usize).join().unwrap();
    assert_eq!(ptr, other);
}
