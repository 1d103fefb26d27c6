//! [`HRESULT`](https://docs.microsoft.com/en-us/windows/win32/com/structure-of-com-error-codes) composition and the codes this crate surfaces

/// A native `HRESULT`: negative on failure, non-negative on success.
pub type HResult = i32;

pub const fn succeeded(hr: HResult) -> bool { hr >= 0 }
pub const fn failed   (hr: HResult) -> bool { hr <  0 }

/// `MAKE_HRESULT(sev, fac, code)`
pub const fn make_hresult(sev: u32, facility: u16, code: u16) -> HResult {
    ((sev << 31) | ((facility as u32) << 16) | (code as u32)) as HResult
}

/// `HRESULT_FROM_WIN32(x)`
pub const fn hresult_from_win32(x: u32) -> HResult {
    if x as HResult <= 0 { x as HResult } else { ((x & 0xFFFF) | (FACILITY_WIN32 << 16) | 0x8000_0000) as HResult }
}

const FACILITY_WIN32    : u32 = 7;
const FACILITY_DXGI     : u16 = 0x87A;
const FACILITY_D2D      : u16 = 0x899;
const FACILITY_WINCODEC : u16 = 0x898;

const fn dxgi_error (code: u16) -> HResult { make_hresult(1, FACILITY_DXGI, code) }
const fn dxgi_status(code: u16) -> HResult { make_hresult(0, FACILITY_DXGI, code) }
const fn d2d_error  (code: u16) -> HResult { make_hresult(1, FACILITY_D2D, code) }
const fn wic_error  (code: u16) -> HResult { make_hresult(1, FACILITY_WINCODEC, 0x2000 + code) }



// winerror.h

pub const S_OK                              : HResult = 0;
pub const S_FALSE                           : HResult = 1;
pub const E_NOTIMPL                         : HResult = 0x8000_4001_u32 as HResult;
pub const E_NOINTERFACE                     : HResult = 0x8000_4002_u32 as HResult;
pub const E_POINTER                         : HResult = 0x8000_4003_u32 as HResult;
pub const E_ABORT                           : HResult = 0x8000_4004_u32 as HResult;
pub const E_FAIL                            : HResult = 0x8000_4005_u32 as HResult;
pub const E_UNEXPECTED                      : HResult = 0x8000_FFFF_u32 as HResult;
pub const E_ACCESSDENIED                    : HResult = hresult_from_win32(5);
pub const E_HANDLE                          : HResult = hresult_from_win32(6);
pub const E_OUTOFMEMORY                     : HResult = hresult_from_win32(14);
pub const E_INVALIDARG                      : HResult = hresult_from_win32(87);
pub const RPC_E_CHANGED_MODE                : HResult = 0x8001_0106_u32 as HResult;
pub const REGDB_E_CLASSNOTREG               : HResult = 0x8004_0154_u32 as HResult;
pub const CLASS_E_NOAGGREGATION             : HResult = 0x8004_0110_u32 as HResult;

/// `WAIT_ABANDONED`, returned as a success code by [`IDXGIKeyedMutex::AcquireSync`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nf-dxgi-idxgikeyedmutex-acquiresync)
pub const WAIT_ABANDONED                    : HResult = 0x0000_0080;
/// `WAIT_TIMEOUT`, returned as a success code by [`IDXGIKeyedMutex::AcquireSync`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nf-dxgi-idxgikeyedmutex-acquiresync)
pub const WAIT_TIMEOUT                      : HResult = 0x0000_0102;

// dxgi.h / winerror.h (FACILITY_DXGI)

pub const DXGI_STATUS_OCCLUDED              : HResult = dxgi_status(0x01);
pub const DXGI_ERROR_INVALID_CALL           : HResult = dxgi_error(0x01);
pub const DXGI_ERROR_NOT_FOUND              : HResult = dxgi_error(0x02);
pub const DXGI_ERROR_MORE_DATA              : HResult = dxgi_error(0x03);
pub const DXGI_ERROR_UNSUPPORTED            : HResult = dxgi_error(0x04);
pub const DXGI_ERROR_DEVICE_REMOVED         : HResult = dxgi_error(0x05);
pub const DXGI_ERROR_DEVICE_HUNG            : HResult = dxgi_error(0x06);
pub const DXGI_ERROR_DEVICE_RESET           : HResult = dxgi_error(0x07);
pub const DXGI_ERROR_WAS_STILL_DRAWING      : HResult = dxgi_error(0x0A);
pub const DXGI_ERROR_DRIVER_INTERNAL_ERROR  : HResult = dxgi_error(0x20);
pub const DXGI_ERROR_NOT_CURRENTLY_AVAILABLE: HResult = dxgi_error(0x22);
pub const DXGI_ERROR_ACCESS_LOST            : HResult = dxgi_error(0x26);
pub const DXGI_ERROR_WAIT_TIMEOUT           : HResult = dxgi_error(0x27);

// d2derr.h

pub const D2DERR_WRONG_STATE                : HResult = d2d_error(0x01);
pub const D2DERR_NOT_INITIALIZED            : HResult = d2d_error(0x02);
pub const D2DERR_UNSUPPORTED_OPERATION      : HResult = d2d_error(0x03);
pub const D2DERR_INVALID_CALL               : HResult = d2d_error(0x0A);
pub const D2DERR_NO_HARDWARE_DEVICE         : HResult = d2d_error(0x0B);
pub const D2DERR_RECREATE_TARGET            : HResult = d2d_error(0x0C);
pub const D2DERR_WRONG_FACTORY              : HResult = d2d_error(0x12);
pub const D2DERR_PUSH_POP_UNBALANCED        : HResult = d2d_error(0x16);

// wincodec.h

pub const WINCODEC_ERR_WRONGSTATE           : HResult = wic_error(0xF04);
pub const WINCODEC_ERR_VALUEOUTOFRANGE      : HResult = wic_error(0xF05);
pub const WINCODEC_ERR_UNKNOWNIMAGEFORMAT   : HResult = wic_error(0xF07);
pub const WINCODEC_ERR_NOTINITIALIZED       : HResult = wic_error(0xF0C);
pub const WINCODEC_ERR_ALREADYLOCKED        : HResult = wic_error(0xF0D);
pub const WINCODEC_ERR_COMPONENTNOTFOUND    : HResult = wic_error(0xF50);
pub const WINCODEC_ERR_BADIMAGE             : HResult = wic_error(0xF60);
pub const WINCODEC_ERR_FRAMEMISSING         : HResult = wic_error(0xF62);
pub const WINCODEC_ERR_UNSUPPORTEDPIXELFORMAT: HResult = wic_error(0xF80);
pub const WINCODEC_ERR_UNSUPPORTEDOPERATION : HResult = wic_error(0xF81);

// dinput.h

pub const DI_OK                             : HResult = S_OK;
pub const DI_NOTATTACHED                    : HResult = S_FALSE;
/// The device buffer overflowed and some input was lost.  A success code.
pub const DI_BUFFEROVERFLOW                 : HResult = S_FALSE;
pub const DI_PROPNOEFFECT                   : HResult = S_FALSE;
pub const DI_POLLEDDEVICE                   : HResult = 0x0000_0002;
pub const DIERR_OLDDIRECTINPUTVERSION       : HResult = hresult_from_win32(1150);
pub const DIERR_BETADIRECTINPUTVERSION      : HResult = hresult_from_win32(1153);
pub const DIERR_BADDRIVERVER                : HResult = hresult_from_win32(119);
pub const DIERR_DEVICENOTREG                : HResult = REGDB_E_CLASSNOTREG;
pub const DIERR_NOTFOUND                    : HResult = hresult_from_win32(2);
pub const DIERR_INVALIDPARAM                : HResult = E_INVALIDARG;
pub const DIERR_NOTINITIALIZED              : HResult = hresult_from_win32(21);
pub const DIERR_ALREADYINITIALIZED          : HResult = hresult_from_win32(1247);
pub const DIERR_NOAGGREGATION               : HResult = CLASS_E_NOAGGREGATION;
pub const DIERR_OTHERAPPHASPRIO             : HResult = E_ACCESSDENIED;
pub const DIERR_INPUTLOST                   : HResult = hresult_from_win32(30);
pub const DIERR_ACQUIRED                    : HResult = hresult_from_win32(170);
pub const DIERR_NOTACQUIRED                 : HResult = hresult_from_win32(12);
pub const DIERR_NOTEXCLUSIVEACQUIRED        : HResult = 0x8004_0205_u32 as HResult;
pub const DIERR_NOTBUFFERED                 : HResult = 0x8004_0207_u32 as HResult;
pub const DIERR_UNPLUGGED                   : HResult = 0x8004_0209_u32 as HResult;



/// The symbolic name of a well known `HRESULT`.
///
/// Codes shared between headers (e.g. `DIERR_OTHERAPPHASPRIO == E_ACCESSDENIED`) resolve to the most general name.
pub fn hresult_name(hr: HResult) -> Option<&'static str> {
    Some(match hr {
        S_OK                                => "S_OK",
        S_FALSE                             => "S_FALSE",
        E_NOTIMPL                           => "E_NOTIMPL",
        E_NOINTERFACE                       => "E_NOINTERFACE",
        E_POINTER                           => "E_POINTER",
        E_ABORT                             => "E_ABORT",
        E_FAIL                              => "E_FAIL",
        E_UNEXPECTED                        => "E_UNEXPECTED",
        E_ACCESSDENIED                      => "E_ACCESSDENIED",
        E_HANDLE                            => "E_HANDLE",
        E_OUTOFMEMORY                       => "E_OUTOFMEMORY",
        E_INVALIDARG                        => "E_INVALIDARG",
        RPC_E_CHANGED_MODE                  => "RPC_E_CHANGED_MODE",
        REGDB_E_CLASSNOTREG                 => "REGDB_E_CLASSNOTREG",
        CLASS_E_NOAGGREGATION               => "CLASS_E_NOAGGREGATION",
        WAIT_ABANDONED                      => "WAIT_ABANDONED",
        WAIT_TIMEOUT                        => "WAIT_TIMEOUT",
        DXGI_STATUS_OCCLUDED                => "DXGI_STATUS_OCCLUDED",
        DXGI_ERROR_INVALID_CALL             => "DXGI_ERROR_INVALID_CALL",
        DXGI_ERROR_NOT_FOUND                => "DXGI_ERROR_NOT_FOUND",
        DXGI_ERROR_MORE_DATA                => "DXGI_ERROR_MORE_DATA",
        DXGI_ERROR_UNSUPPORTED              => "DXGI_ERROR_UNSUPPORTED",
        DXGI_ERROR_DEVICE_REMOVED           => "DXGI_ERROR_DEVICE_REMOVED",
        DXGI_ERROR_DEVICE_HUNG              => "DXGI_ERROR_DEVICE_HUNG",
        DXGI_ERROR_DEVICE_RESET             => "DXGI_ERROR_DEVICE_RESET",
        DXGI_ERROR_WAS_STILL_DRAWING        => "DXGI_ERROR_WAS_STILL_DRAWING",
        DXGI_ERROR_DRIVER_INTERNAL_ERROR    => "DXGI_ERROR_DRIVER_INTERNAL_ERROR",
        DXGI_ERROR_NOT_CURRENTLY_AVAILABLE  => "DXGI_ERROR_NOT_CURRENTLY_AVAILABLE",
        DXGI_ERROR_ACCESS_LOST              => "DXGI_ERROR_ACCESS_LOST",
        DXGI_ERROR_WAIT_TIMEOUT             => "DXGI_ERROR_WAIT_TIMEOUT",
        D2DERR_WRONG_STATE                  => "D2DERR_WRONG_STATE",
        D2DERR_NOT_INITIALIZED              => "D2DERR_NOT_INITIALIZED",
        D2DERR_UNSUPPORTED_OPERATION        => "D2DERR_UNSUPPORTED_OPERATION",
        D2DERR_INVALID_CALL                 => "D2DERR_INVALID_CALL",
        D2DERR_NO_HARDWARE_DEVICE           => "D2DERR_NO_HARDWARE_DEVICE",
        D2DERR_RECREATE_TARGET              => "D2DERR_RECREATE_TARGET",
        D2DERR_WRONG_FACTORY                => "D2DERR_WRONG_FACTORY",
        D2DERR_PUSH_POP_UNBALANCED          => "D2DERR_PUSH_POP_UNBALANCED",
        WINCODEC_ERR_WRONGSTATE             => "WINCODEC_ERR_WRONGSTATE",
        WINCODEC_ERR_VALUEOUTOFRANGE        => "WINCODEC_ERR_VALUEOUTOFRANGE",
        WINCODEC_ERR_UNKNOWNIMAGEFORMAT     => "WINCODEC_ERR_UNKNOWNIMAGEFORMAT",
        WINCODEC_ERR_NOTINITIALIZED         => "WINCODEC_ERR_NOTINITIALIZED",
        WINCODEC_ERR_ALREADYLOCKED          => "WINCODEC_ERR_ALREADYLOCKED",
        WINCODEC_ERR_COMPONENTNOTFOUND      => "WINCODEC_ERR_COMPONENTNOTFOUND",
        WINCODEC_ERR_BADIMAGE               => "WINCODEC_ERR_BADIMAGE",
        WINCODEC_ERR_FRAMEMISSING           => "WINCODEC_ERR_FRAMEMISSING",
        WINCODEC_ERR_UNSUPPORTEDPIXELFORMAT => "WINCODEC_ERR_UNSUPPORTEDPIXELFORMAT",
        WINCODEC_ERR_UNSUPPORTEDOPERATION   => "WINCODEC_ERR_UNSUPPORTEDOPERATION",
        DI_POLLEDDEVICE                     => "DI_POLLEDDEVICE",
        DIERR_OLDDIRECTINPUTVERSION         => "DIERR_OLDDIRECTINPUTVERSION",
        DIERR_BETADIRECTINPUTVERSION        => "DIERR_BETADIRECTINPUTVERSION",
        DIERR_BADDRIVERVER                  => "DIERR_BADDRIVERVER",
        DIERR_NOTFOUND                      => "DIERR_NOTFOUND",
        DIERR_NOTINITIALIZED                => "DIERR_NOTINITIALIZED",
        DIERR_ALREADYINITIALIZED            => "DIERR_ALREADYINITIALIZED",
        DIERR_INPUTLOST                     => "DIERR_INPUTLOST",
        DIERR_ACQUIRED                      => "DIERR_ACQUIRED",
        DIERR_NOTACQUIRED                   => "DIERR_NOTACQUIRED",
        DIERR_NOTEXCLUSIVEACQUIRED          => "DIERR_NOTEXCLUSIVEACQUIRED",
        DIERR_NOTBUFFERED                   => "DIERR_NOTBUFFERED",
        DIERR_UNPLUGGED                     => "DIERR_UNPLUGGED",
        _                                   => return None,
    })
}



/// An [`HResult`] split into its bit fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecomposedHResult {
    pub sev:        ErrorSeverity,
    pub customer:   bool,
    pub reserved:   bool,
    pub facility:   u16,
    pub code:       u16,
}

impl From<HResult> for DecomposedHResult {
    fn from(hresult: HResult) -> Self { Self {
        sev: match (hresult as u32) >> 30 {
            0b00    => ErrorSeverity::Success,
            0b01    => ErrorSeverity::Informational,
            0b10    => ErrorSeverity::Warning,
            _       => ErrorSeverity::Error,
        },
        customer:   hresult & (1 << 29) != 0,
        reserved:   hresult & (1 << 28) != 0,
        facility:   ((hresult >> 16) & 0xFFF) as u16,
        code:       hresult as u16,
    }}
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorSeverity {
    Success         = 0b00,
    Informational   = 0b01,
    Warning         = 0b10,
    Error           = 0b11,
}



#[test] fn composed_codes_match_headers() {
    let expect = [
        (E_NOINTERFACE,                     0x8000_4002_u32),
        (E_ACCESSDENIED,                    0x8007_0005),
        (E_HANDLE,                          0x8007_0006),
        (E_OUTOFMEMORY,                     0x8007_000E),
        (E_INVALIDARG,                      0x8007_0057),
        (DXGI_STATUS_OCCLUDED,              0x087A_0001),
        (DXGI_ERROR_INVALID_CALL,           0x887A_0001),
        (DXGI_ERROR_NOT_FOUND,              0x887A_0002),
        (DXGI_ERROR_DEVICE_REMOVED,         0x887A_0005),
        (DXGI_ERROR_DEVICE_HUNG,            0x887A_0006),
        (DXGI_ERROR_WAS_STILL_DRAWING,      0x887A_000A),
        (DXGI_ERROR_ACCESS_LOST,            0x887A_0026),
        (DXGI_ERROR_WAIT_TIMEOUT,           0x887A_0027),
        (D2DERR_RECREATE_TARGET,            0x8899_000C),
        (D2DERR_WRONG_FACTORY,              0x8899_0012),
        (WINCODEC_ERR_WRONGSTATE,           0x8898_2F04),
        (WINCODEC_ERR_UNKNOWNIMAGEFORMAT,   0x8898_2F07),
        (WINCODEC_ERR_COMPONENTNOTFOUND,    0x8898_2F50),
        (WINCODEC_ERR_UNSUPPORTEDPIXELFORMAT, 0x8898_2F80),
        (DIERR_INPUTLOST,                   0x8007_001E),
        (DIERR_NOTACQUIRED,                 0x8007_000C),
        (DIERR_ACQUIRED,                    0x8007_00AA),
        (DIERR_NOTFOUND,                    0x8007_0002),
        (DIERR_OLDDIRECTINPUTVERSION,       0x8007_047E),
        (DIERR_BETADIRECTINPUTVERSION,      0x8007_0481),
        (DIERR_NOTINITIALIZED,              0x8007_0015),
        (DIERR_ALREADYINITIALIZED,          0x8007_04DF),
    ];
    for &(hr, native) in expect.iter() {
        assert_eq!(hr as u32, native, "{:?} != 0x{:08x}", hresult_name(hr), native);
    }
}

#[test] fn hresult_from_win32_passes_through_non_positive() {
    assert_eq!(hresult_from_win32(0), S_OK);
    assert_eq!(hresult_from_win32(0x8000_4005), E_FAIL);
}

#[test] fn success_codes_are_not_failures() {
    for &hr in [S_OK, S_FALSE, DXGI_STATUS_OCCLUDED, WAIT_TIMEOUT, WAIT_ABANDONED, DI_POLLEDDEVICE].iter() {
        assert!(succeeded(hr));
        assert!(!failed(hr));
    }
    for &hr in [E_FAIL, DXGI_ERROR_DEVICE_REMOVED, D2DERR_RECREATE_TARGET, DIERR_INPUTLOST].iter() {
        assert!(failed(hr));
    }
}

#[test] fn decompose() {
    let d = DecomposedHResult::from(DXGI_ERROR_DEVICE_REMOVED);
    assert_eq!(d.sev,       ErrorSeverity::Warning);
    assert_eq!(d.facility,  0x87A);
    assert_eq!(d.code,      5);
    assert!(!d.customer);

    let d = DecomposedHResult::from(S_OK);
    assert_eq!(d.sev,       ErrorSeverity::Success);
    assert_eq!(d.facility,  0);
}

#[test] fn names() {
    assert_eq!(hresult_name(DXGI_ERROR_NOT_FOUND),    Some("DXGI_ERROR_NOT_FOUND"));
    assert_eq!(hresult_name(DIERR_OTHERAPPHASPRIO),   Some("E_ACCESSDENIED"));
    assert_eq!(hresult_name(0x1234_5678),             None);
}

#[cfg(windows)] #[test] fn matches_winapi() {
    use winapi::shared::winerror;

    assert_eq!(S_OK,                                winerror::S_OK);
    assert_eq!(S_FALSE,                             winerror::S_FALSE);
    assert_eq!(E_NOTIMPL,                           winerror::E_NOTIMPL);
    assert_eq!(E_NOINTERFACE,                       winerror::E_NOINTERFACE);
    assert_eq!(E_POINTER,                           winerror::E_POINTER);
    assert_eq!(E_ABORT,                             winerror::E_ABORT);
    assert_eq!(E_FAIL,                              winerror::E_FAIL);
    assert_eq!(E_UNEXPECTED,                        winerror::E_UNEXPECTED);
    assert_eq!(E_ACCESSDENIED,                      winerror::E_ACCESSDENIED);
    assert_eq!(E_HANDLE,                            winerror::E_HANDLE);
    assert_eq!(E_OUTOFMEMORY,                       winerror::E_OUTOFMEMORY);
    assert_eq!(E_INVALIDARG,                        winerror::E_INVALIDARG);
    assert_eq!(RPC_E_CHANGED_MODE,                  winerror::RPC_E_CHANGED_MODE);
    assert_eq!(REGDB_E_CLASSNOTREG,                 winerror::REGDB_E_CLASSNOTREG);
    assert_eq!(CLASS_E_NOAGGREGATION,               winerror::CLASS_E_NOAGGREGATION);
    assert_eq!(DXGI_STATUS_OCCLUDED,                winerror::DXGI_STATUS_OCCLUDED);
    assert_eq!(DXGI_ERROR_INVALID_CALL,             winerror::DXGI_ERROR_INVALID_CALL);
    assert_eq!(DXGI_ERROR_NOT_FOUND,                winerror::DXGI_ERROR_NOT_FOUND);
    assert_eq!(DXGI_ERROR_MORE_DATA,                winerror::DXGI_ERROR_MORE_DATA);
    assert_eq!(DXGI_ERROR_UNSUPPORTED,              winerror::DXGI_ERROR_UNSUPPORTED);
    assert_eq!(DXGI_ERROR_DEVICE_REMOVED,           winerror::DXGI_ERROR_DEVICE_REMOVED);
    assert_eq!(DXGI_ERROR_DEVICE_HUNG,              winerror::DXGI_ERROR_DEVICE_HUNG);
    assert_eq!(DXGI_ERROR_DEVICE_RESET,             winerror::DXGI_ERROR_DEVICE_RESET);
    assert_eq!(DXGI_ERROR_WAS_STILL_DRAWING,        winerror::DXGI_ERROR_WAS_STILL_DRAWING);
    assert_eq!(DXGI_ERROR_DRIVER_INTERNAL_ERROR,    winerror::DXGI_ERROR_DRIVER_INTERNAL_ERROR);
    assert_eq!(DXGI_ERROR_NOT_CURRENTLY_AVAILABLE,  winerror::DXGI_ERROR_NOT_CURRENTLY_AVAILABLE);
    assert_eq!(DXGI_ERROR_ACCESS_LOST,              winerror::DXGI_ERROR_ACCESS_LOST);
    assert_eq!(DXGI_ERROR_WAIT_TIMEOUT,             winerror::DXGI_ERROR_WAIT_TIMEOUT);
    assert_eq!(D2DERR_WRONG_STATE,                  winerror::D2DERR_WRONG_STATE);
    assert_eq!(D2DERR_NOT_INITIALIZED,              winerror::D2DERR_NOT_INITIALIZED);
    assert_eq!(D2DERR_UNSUPPORTED_OPERATION,        winerror::D2DERR_UNSUPPORTED_OPERATION);
    assert_eq!(D2DERR_INVALID_CALL,                 winerror::D2DERR_INVALID_CALL);
    assert_eq!(D2DERR_NO_HARDWARE_DEVICE,           winerror::D2DERR_NO_HARDWARE_DEVICE);
    assert_eq!(D2DERR_RECREATE_TARGET,              winerror::D2DERR_RECREATE_TARGET);
    assert_eq!(D2DERR_WRONG_FACTORY,                winerror::D2DERR_WRONG_FACTORY);
    assert_eq!(D2DERR_PUSH_POP_UNBALANCED,          winerror::D2DERR_PUSH_POP_UNBALANCED);
    assert_eq!(WINCODEC_ERR_WRONGSTATE,             winerror::WINCODEC_ERR_WRONGSTATE);
    assert_eq!(WINCODEC_ERR_VALUEOUTOFRANGE,        winerror::WINCODEC_ERR_VALUEOUTOFRANGE);
    assert_eq!(WINCODEC_ERR_UNKNOWNIMAGEFORMAT,     winerror::WINCODEC_ERR_UNKNOWNIMAGEFORMAT);
    assert_eq!(WINCODEC_ERR_NOTINITIALIZED,         winerror::WINCODEC_ERR_NOTINITIALIZED);
    assert_eq!(WINCODEC_ERR_ALREADYLOCKED,          winerror::WINCODEC_ERR_ALREADYLOCKED);
    assert_eq!(WINCODEC_ERR_COMPONENTNOTFOUND,      winerror::WINCODEC_ERR_COMPONENTNOTFOUND);
    assert_eq!(WINCODEC_ERR_BADIMAGE,               winerror::WINCODEC_ERR_BADIMAGE);
    assert_eq!(WINCODEC_ERR_FRAMEMISSING,           winerror::WINCODEC_ERR_FRAMEMISSING);
    assert_eq!(WINCODEC_ERR_UNSUPPORTEDPIXELFORMAT, winerror::WINCODEC_ERR_UNSUPPORTEDPIXELFORMAT);
    assert_eq!(WINCODEC_ERR_UNSUPPORTEDOPERATION,   winerror::WINCODEC_ERR_UNSUPPORTEDOPERATION);
    assert_eq!(WAIT_TIMEOUT,                        winerror::WAIT_TIMEOUT as HResult);
    assert_eq!(WAIT_ABANDONED,                      winapi::um::winbase::WAIT_ABANDONED as HResult);
}
