use crate::com::*;

use winapi::shared::dxgi::IDXGIKeyedMutex;



/// The non-error outcomes of [`KeyedMutex::acquire_sync`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AcquireOutcome {
    /// `S_OK`
    Acquired,

    /// `WAIT_ABANDONED`: the previous owner released the surface's device without releasing the mutex.
    /// The mutex is not held.
    Abandoned,

    /// `WAIT_TIMEOUT`: the timeout elapsed first.  The mutex is not held.
    TimedOut,
}

impl AcquireOutcome {
    pub(crate) fn from_hresult(hr: HResult) -> Result<Self, Error> {
        match hr {
            WAIT_ABANDONED  => Ok(AcquireOutcome::Abandoned),
            WAIT_TIMEOUT    => Ok(AcquireOutcome::TimedOut),
            hr              => Error::check_hr("IDXGIKeyedMutex::AcquireSync", hr, "").map(|()| AcquireOutcome::Acquired),
        }
    }
}

com_wrapper! {
    /// [`IDXGIKeyedMutex`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nn-dxgi-idxgikeyedmutex):
    /// synchronizes access to a surface shared between devices.
    pub struct KeyedMutex(IDXGIKeyedMutex);
}

impl KeyedMutex {
    /// `INFINITE`
    pub const INFINITE : u32 = 0xFFFF_FFFF;

    /// [`IDXGIKeyedMutex::AcquireSync`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nf-dxgi-idxgikeyedmutex-acquiresync)
    ///
    /// Blocks the calling thread for up to `timeout_ms` milliseconds.
    pub fn acquire_sync(&self, key: u64, timeout_ms: u32) -> Result<AcquireOutcome, Error> {
        let mutex = self.com("IDXGIKeyedMutex::AcquireSync")?;
        let hr = unsafe { mutex.AcquireSync(key, timeout_ms) };
        AcquireOutcome::from_hresult(hr)
    }

    /// [`IDXGIKeyedMutex::ReleaseSync`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nf-dxgi-idxgikeyedmutex-releasesync)
    pub fn release_sync(&self, key: u64) -> Result<(), Error> {
        let mutex = self.com("IDXGIKeyedMutex::ReleaseSync")?;
        let hr = unsafe { mutex.ReleaseSync(key) };
        Error::check_hr("IDXGIKeyedMutex::ReleaseSync", hr, "")
    }
}



#[test] fn acquire_outcomes() {
    assert_eq!(AcquireOutcome::from_hresult(S_OK).unwrap(),             AcquireOutcome::Acquired);
    assert_eq!(AcquireOutcome::from_hresult(WAIT_ABANDONED).unwrap(),   AcquireOutcome::Abandoned);
    assert_eq!(AcquireOutcome::from_hresult(WAIT_TIMEOUT).unwrap(),     AcquireOutcome::TimedOut);

    let err = AcquireOutcome::from_hresult(DXGI_ERROR_INVALID_CALL).unwrap_err();
    assert_eq!(err.hresult(), Some(DXGI_ERROR_INVALID_CALL));
    assert_eq!(err.method(), "IDXGIKeyedMutex::AcquireSync");

    // DXGI_ERROR_WAIT_TIMEOUT is a failure, unlike WAIT_TIMEOUT
    assert_eq!(AcquireOutcome::from_hresult(DXGI_ERROR_WAIT_TIMEOUT).unwrap_err().hresult(), Some(DXGI_ERROR_WAIT_TIMEOUT));
}
