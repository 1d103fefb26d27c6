use super::*;

use winapi::Interface;
use winapi::um::combaseapi::{CoInitializeEx, CoUninitialize};
use winapi::um::objbase::{COINIT_APARTMENTTHREADED, COINIT_MULTITHREADED};
use winapi::um::unknwnbase::IUnknown;

use std::marker::PhantomData;
use std::ptr::null_mut;



/// The COM threading model to initialize the current thread with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Apartment {
    /// `COINIT_APARTMENTTHREADED`
    SingleThreaded,

    /// `COINIT_MULTITHREADED`
    MultiThreaded,
}

impl Default for Apartment {
    fn default() -> Self { Apartment::MultiThreaded }
}

/// Keeps COM initialized on the current thread until dropped.
///
/// Required before creating WIC objects.  Direct3D, DXGI, Direct2D and DirectInput don't need it.
#[must_use = "COM is uninitialized again when this guard is dropped"]
pub struct ComInit {
    _not_send: PhantomData<*const ()>,
}

/// [`CoInitializeEx`](https://docs.microsoft.com/en-us/windows/win32/api/combaseapi/nf-combaseapi-coinitializeex)
///
/// Nested initialization with the same model succeeds (`S_FALSE`).
/// Requesting a different model than the thread already has fails with `RPC_E_CHANGED_MODE`.
pub fn initialize(apartment: Apartment) -> Result<ComInit, Error> {
    let coinit = match apartment {
        Apartment::SingleThreaded   => COINIT_APARTMENTTHREADED,
        Apartment::MultiThreaded    => COINIT_MULTITHREADED,
    };
    let hr = unsafe { CoInitializeEx(null_mut(), coinit) };
    Error::check_hr("CoInitializeEx", hr, "")?;
    tracing::trace!(?apartment, "COM initialized");
    Ok(ComInit { _not_send: PhantomData })
}

impl Drop for ComInit {
    fn drop(&mut self) { unsafe { CoUninitialize() } }
}



/// <code>[IUnknown::QueryInterface](https://docs.microsoft.com/en-us/windows/win32/api/unknwn/nf-unknwn-iunknown-queryinterface(refiid_void))(__uuidof(I), ...)</code>
///
/// Failures carry the `HRESULT` `QueryInterface` actually returned (usually, but not always, `E_NOINTERFACE`).
pub fn query_interface<I: Interface, J: Interface>(com: &mcom::Rc<J>, method: &'static str) -> Result<mcom::Rc<I>, Error> {
    let unknown = com.as_ptr() as *mut IUnknown;
    let mut out = null_mut();
    let hr = unsafe { (*unknown).QueryInterface(&I::uuidof(), &mut out) };
    let out = unsafe { mcom::Rc::from_raw_opt(out as *mut I) };
    out.ok_or_else(|| Error::null(method, hr, "QueryInterface returned null"))
}



#[test] fn nested_initialize() {
    let _outer = initialize(Apartment::MultiThreaded).unwrap();
    let _inner = initialize(Apartment::MultiThreaded).unwrap();
    let err = initialize(Apartment::SingleThreaded).map(|_| ()).unwrap_err();
    assert_eq!(err.hresult(), Some(RPC_E_CHANGED_MODE));
}

#[cfg(feature = "dxgi")] #[test] fn query_interface_hresults() {
    use winapi::shared::dxgi::{IDXGIAdapter, IDXGIFactory, IDXGIFactory1};

    let factory = crate::dxgi::Factory::create().unwrap();
    let factory = factory.as_com().unwrap();
    let base = query_interface::<IDXGIFactory, IDXGIFactory1>(factory, "IDXGIFactory1::QueryInterface").unwrap();
    assert!(base.as_ptr() as usize != 0);

    let err = query_interface::<IDXGIAdapter, IDXGIFactory1>(factory, "IDXGIFactory1::QueryInterface").map(|_| ()).unwrap_err();
    assert_eq!(err.hresult(), Some(E_NOINTERFACE));
    assert_eq!(err.method(), "IDXGIFactory1::QueryInterface");
}
