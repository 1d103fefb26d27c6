use super::hresult::*;

use std::fmt::{self, Debug, Display, Formatter};



/// What went wrong, as reported by the native side (or by a wrapper that's already been disposed).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The native call returned a failure [`HResult`].
    HResult(HResult),

    /// The native call failed and reported a `GetLastError()` value.
    LastError(u32),

    /// The wrapper had already released its reference to the named interface.
    Disposed(&'static str),

    /// Something else, described by [`Error::note`].
    Other,
}

/// A DirectX / COM error of some sort.
///
/// Most errors carry the [`HResult`] returned by the native method.
/// A few carry a `GetLastError()` value, and calling a method on a disposed wrapper produces [`ErrorKind::Disposed`]
/// instead of forwarding the call.
///
/// ### See Also
/// * [System Error Codes](https://docs.microsoft.com/en-us/windows/win32/debug/system-error-codes)
/// * [hresult.info](https://www.hresult.info/)
#[derive(Clone)]
pub struct Error {
    pub(crate) method:  &'static str,
    pub(crate) kind:    ErrorKind,
    pub(crate) note:    &'static str,
}

impl Error {
    /// The native method (or wrapper method) that failed, e.g. `"IDXGISwapChain::Present"`.
    pub fn method(&self) -> &'static str { self.method }
    pub fn kind(&self) -> ErrorKind { self.kind }
    pub fn note(&self) -> &'static str { self.note }

    /// The failing `HRESULT`.  `GetLastError()` values are converted with `HRESULT_FROM_WIN32`.
    pub fn hresult(&self) -> Option<HResult> {
        match self.kind {
            ErrorKind::HResult(hr)      => Some(hr),
            ErrorKind::LastError(gle)   => Some(hresult_from_win32(gle)),
            ErrorKind::Disposed(_)      => None,
            ErrorKind::Other            => None,
        }
    }

    pub fn as_decomposed_hresult(&self) -> Option<DecomposedHResult> { self.hresult().map(DecomposedHResult::from) }

    /// `true` if this error came from calling a method on a disposed wrapper.
    pub fn is_disposed(&self) -> bool { matches!(self.kind, ErrorKind::Disposed(_)) }
}

impl Error {
    pub(crate) fn check_hr(method: &'static str, hr: HResult, note: &'static str) -> Result<(), Self> {
        if succeeded(hr) {
            Ok(())
        } else {
            Err(Self::new_hr(method, hr, note))
        }
    }

    pub(crate) fn new(method: &'static str, note: &'static str) -> Self {
        Self { method, kind: ErrorKind::Other, note }
    }

    pub(crate) fn new_hr(method: &'static str, hr: HResult, note: &'static str) -> Self {
        tracing::debug!("{} failed with HRESULT == 0x{:08x} {}", method, hr as u32, note);
        Self { method, kind: ErrorKind::HResult(hr), note }
    }

    #[cfg(any(test, all(windows, feature = "dinput")))]
    pub(crate) fn new_gle(method: &'static str, error: u32, note: &'static str) -> Self {
        tracing::debug!("{} failed with GetLastError() == 0x{:08x} {}", method, error, note);
        Self { method, kind: ErrorKind::LastError(error), note }
    }

    pub(crate) fn disposed(method: &'static str, interface: &'static str) -> Self {
        Self { method, kind: ErrorKind::Disposed(interface), note: "" }
    }

    /// A native call succeeded (or claimed to) but left its out-pointer null.
    pub(crate) fn null(method: &'static str, hr: HResult, note: &'static str) -> Self {
        if failed(hr) { Self::new_hr(method, hr, note) } else { Self::new(method, note) }
    }
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        write!(fmt, "{} failed", self.method)?;
        match self.kind {
            ErrorKind::HResult(hr) => {
                write!(fmt, " with HRESULT == 0x{:08x}", hr as u32)?;
                if let Some(name) = hresult_name(hr) { write!(fmt, " ({})", name)?; }
            },
            ErrorKind::LastError(gle)       => write!(fmt, " with GetLastError() == 0x{:08x}", gle)?,
            ErrorKind::Disposed(interface)  => write!(fmt, ": {} has already been disposed", interface)?,
            ErrorKind::Other                => {},
        }
        if !self.note.is_empty() { write!(fmt, " ({})", self.note)?; }
        Ok(())
    }
}

impl Debug for Error {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result { Display::fmt(self, fmt) }
}

impl std::error::Error for Error {}



#[test] fn display() {
    assert_eq!(
        Error::new_hr("IDXGIFactory1::EnumAdapters1", DXGI_ERROR_NOT_FOUND, "").to_string(),
        "IDXGIFactory1::EnumAdapters1 failed with HRESULT == 0x887a0002 (DXGI_ERROR_NOT_FOUND)"
    );
    assert_eq!(
        Error::new_hr("Foo::Bar", 0x8123_4567_u32 as HResult, "bar is null").to_string(),
        "Foo::Bar failed with HRESULT == 0x81234567 (bar is null)"
    );
    assert_eq!(
        Error::disposed("SwapChain::present", "IDXGISwapChain").to_string(),
        "SwapChain::present failed: IDXGISwapChain has already been disposed"
    );
    assert_eq!(
        Error::new_gle("DestroyWindow", 1400, "").to_string(),
        "DestroyWindow failed with GetLastError() == 0x00000578"
    );
}

#[test] fn check_hr() {
    assert!(Error::check_hr("a", S_OK,    "").is_ok());
    assert!(Error::check_hr("a", S_FALSE, "").is_ok());
    let err = Error::check_hr("a", E_INVALIDARG, "").unwrap_err();
    assert_eq!(err.hresult(), Some(E_INVALIDARG));
    assert!(!err.is_disposed());
}

#[test] fn hresult_of_kinds() {
    assert_eq!(Error::new_gle("x", 5, "").hresult(), Some(E_ACCESSDENIED));
    assert_eq!(Error::disposed("x", "IUnknown").hresult(), None);
    assert!(Error::disposed("x", "IUnknown").is_disposed());
    assert_eq!(Error::null("x", S_OK, "y is null").kind(), ErrorKind::Other);
    assert_eq!(Error::null("x", E_FAIL, "y is null").kind(), ErrorKind::HResult(E_FAIL));
}
