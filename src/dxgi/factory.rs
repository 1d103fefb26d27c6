use super::*;
use crate::com::*;
use crate::com::DXGI_ERROR_NOT_FOUND;

use winapi::Interface;
use winapi::shared::dxgi::*;
use winapi::shared::windef::HWND;
use winapi::um::unknwnbase::IUnknown;

use std::ptr::null_mut;



com_wrapper! {
    /// [`IDXGIFactory1`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nn-dxgi-idxgifactory1):
    /// enumerates adapters and creates swap chains.
    pub struct Factory(IDXGIFactory1);
}

impl Factory {
    /// [`CreateDXGIFactory1`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nf-dxgi-createdxgifactory1)
    #[tracing::instrument(level = "debug")]
    pub fn create() -> Result<Self, Error> {
        let mut factory = null_mut();
        let hr = unsafe { CreateDXGIFactory1(&IDXGIFactory1::uuidof(), &mut factory) };
        let factory = unsafe { mcom::Rc::from_raw_opt(factory as *mut IDXGIFactory1) };
        let factory = factory.ok_or_else(|| Error::null("CreateDXGIFactory1", hr, "IDXGIFactory1 is null"))?;
        tracing::debug!("created IDXGIFactory1");
        Ok(Self::from_com(factory))
    }

    /// [`IDXGIFactory1::EnumAdapters1`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nf-dxgi-idxgifactory1-enumadapters1)
    ///
    /// Returns `Ok(None)` once `index` runs past the last adapter (`DXGI_ERROR_NOT_FOUND`).
    pub fn enum_adapters(&self, index: u32) -> Result<Option<Adapter>, Error> {
        let factory = self.com("IDXGIFactory1::EnumAdapters1")?;
        let mut adapter = null_mut();
        let hr = unsafe { factory.EnumAdapters1(index, &mut adapter) };
        if hr == DXGI_ERROR_NOT_FOUND { return Ok(None); }
        let adapter = unsafe { mcom::Rc::from_raw_opt(adapter) };
        let adapter = adapter.ok_or_else(|| Error::null("IDXGIFactory1::EnumAdapters1", hr, "IDXGIAdapter1 is null"))?;
        Ok(Some(Adapter::from_com(adapter)))
    }

    /// Every adapter, in `EnumAdapters1` order.  The adapter with the primary output comes first.
    pub fn adapters(&self) -> Result<Vec<Adapter>, Error> {
        let mut adapters = Vec::new();
        while let Some(adapter) = self.enum_adapters(adapters.len() as u32)? {
            adapters.push(adapter);
        }
        Ok(adapters)
    }

    /// [`IDXGIFactory::MakeWindowAssociation`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nf-dxgi-idxgifactory-makewindowassociation)
    ///
    /// ### Safety
    /// `hwnd` must be null or a valid window handle.
    pub unsafe fn make_window_association(&self, hwnd: HWND, flags: WindowAssociationFlags) -> Result<(), Error> {
        let factory = self.com("IDXGIFactory::MakeWindowAssociation")?;
        let hr = factory.MakeWindowAssociation(hwnd, flags.bits());
        Error::check_hr("IDXGIFactory::MakeWindowAssociation", hr, "")
    }

    /// [`IDXGIFactory::GetWindowAssociation`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nf-dxgi-idxgifactory-getwindowassociation)
    pub fn get_window_association(&self) -> Result<HWND, Error> {
        let factory = self.com("IDXGIFactory::GetWindowAssociation")?;
        let mut hwnd = null_mut();
        let hr = unsafe { factory.GetWindowAssociation(&mut hwnd) };
        Error::check_hr("IDXGIFactory::GetWindowAssociation", hr, "")?;
        Ok(hwnd)
    }

    /// [`IDXGIFactory::CreateSwapChain`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nf-dxgi-idxgifactory-createswapchain)
    ///
    /// `device` is the rendering device, e.g. an `ID3D11Device` (see `d3d11::Device::as_unknown`).
    ///
    /// ### Safety
    /// `desc.output_window` must be a valid window handle.
    pub unsafe fn create_swap_chain(&self, device: &mcom::Rc<IUnknown>, desc: &SwapChainDesc) -> Result<SwapChain, Error> {
        let factory = self.com("IDXGIFactory::CreateSwapChain")?;
        let mut desc = DXGI_SWAP_CHAIN_DESC::from(*desc);
        let mut swap_chain = null_mut();
        let hr = factory.CreateSwapChain(device.as_ptr(), &mut desc, &mut swap_chain);
        let swap_chain = mcom::Rc::from_raw_opt(swap_chain);
        let swap_chain = swap_chain.ok_or_else(|| Error::null("IDXGIFactory::CreateSwapChain", hr, "IDXGISwapChain is null"))?;
        Ok(SwapChain::from_com(swap_chain))
    }

    /// [`IDXGIFactory1::IsCurrent`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nf-dxgi-idxgifactory1-iscurrent):
    /// `false` once the adapter list has changed and a new factory should be created.
    pub fn is_current(&self) -> Result<bool, Error> {
        let factory = self.com("IDXGIFactory1::IsCurrent")?;
        Ok(unsafe { factory.IsCurrent() } != 0)
    }
}



#[test] fn enumerate_adapters() {
    let factory = Factory::create().unwrap();
    assert!(factory.is_current().unwrap());

    let adapters = factory.adapters().unwrap();
    assert!(factory.enum_adapters(adapters.len() as u32).unwrap().is_none());
    assert!(factory.enum_adapters(!0).unwrap().is_none());
    for adapter in adapters.iter() {
        let desc = adapter.desc().unwrap();
        assert!(!desc.description.is_empty());
        assert!(!desc.description.contains('\0'));
    }
}

#[test] fn dispose_is_idempotent() {
    let mut factory = Factory::create().unwrap();
    factory.dispose();
    factory.dispose();
    assert!(factory.is_disposed());

    let err = factory.enum_adapters(0).unwrap_err();
    assert!(err.is_disposed());
    assert_eq!(err.kind(), ErrorKind::Disposed("IDXGIFactory1"));
    assert_eq!(err.method(), "IDXGIFactory1::EnumAdapters1");
    assert!(factory.adapters().unwrap_err().is_disposed());
    assert!(factory.get_window_association().unwrap_err().is_disposed());
    assert!(factory.as_com().is_err());
}
