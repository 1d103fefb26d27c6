use super::*;
use crate::com::*;
use crate::com::DXGI_STATUS_OCCLUDED;

use winapi::Interface;
use winapi::shared::dxgi::*;
use winapi::shared::minwindef::{BOOL, FALSE, TRUE};

use std::ptr::null_mut;



/// The non-error outcomes of [`SwapChain::present`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PresentStatus {
    /// `S_OK` (or another success code without a dedicated meaning here)
    Ok,

    /// `DXGI_STATUS_OCCLUDED`: the window is hidden or minimized and nothing was shown.
    /// Callers typically throttle rendering until a [`PresentFlags::TEST`] present returns [`PresentStatus::Ok`] again.
    Occluded,
}

impl PresentStatus {
    pub(crate) fn from_hresult(hr: HResult) -> Result<Self, Error> {
        if hr == DXGI_STATUS_OCCLUDED { return Ok(PresentStatus::Occluded); }
        Error::check_hr("IDXGISwapChain::Present", hr, "")?;
        Ok(PresentStatus::Ok)
    }
}

com_wrapper! {
    /// [`IDXGISwapChain`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nn-dxgi-idxgiswapchain)
    pub struct SwapChain(IDXGISwapChain);
}

impl SwapChain {
    /// [`IDXGISwapChain::Present`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nf-dxgi-idxgiswapchain-present)
    pub fn present(&self, sync_interval: u32, flags: PresentFlags) -> Result<PresentStatus, Error> {
        let swap_chain = self.com("IDXGISwapChain::Present")?;
        let hr = unsafe { swap_chain.Present(sync_interval, flags.bits()) };
        PresentStatus::from_hresult(hr)
    }

    /// [`IDXGISwapChain::GetBuffer`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nf-dxgi-idxgiswapchain-getbuffer),
    /// typically as an `ID3D11Texture2D`.
    pub fn buffer<I: Interface>(&self, index: u32) -> Result<mcom::Rc<I>, Error> {
        let swap_chain = self.com("IDXGISwapChain::GetBuffer")?;
        let mut buffer = null_mut();
        let hr = unsafe { swap_chain.GetBuffer(index, &I::uuidof(), &mut buffer) };
        let buffer = unsafe { mcom::Rc::from_raw_opt(buffer as *mut I) };
        buffer.ok_or_else(|| Error::null("IDXGISwapChain::GetBuffer", hr, "buffer is null"))
    }

    /// [`buffer`](Self::buffer) as an `IDXGISurface`.
    pub fn surface(&self, index: u32) -> Result<Surface, Error> {
        self.buffer::<IDXGISurface>(index).map(Surface::from_com)
    }

    /// [`IDXGISwapChain::GetDesc`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nf-dxgi-idxgiswapchain-getdesc)
    pub fn desc(&self) -> Result<SwapChainDesc, Error> {
        let swap_chain = self.com("IDXGISwapChain::GetDesc")?;
        let mut desc = unsafe { std::mem::zeroed() };
        let hr = unsafe { swap_chain.GetDesc(&mut desc) };
        Error::check_hr("IDXGISwapChain::GetDesc", hr, "")?;
        Ok(SwapChainDesc::from(desc))
    }

    /// [`IDXGISwapChain::ResizeBuffers`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nf-dxgi-idxgiswapchain-resizebuffers)
    ///
    /// Every outstanding reference to the old buffers (render target views included) must be released first,
    /// or this fails with `DXGI_ERROR_INVALID_CALL`.
    /// `0` keeps the current buffer count / uses the window's client size, [`Format::UNKNOWN`] keeps the current format.
    pub fn resize_buffers(&self, buffer_count: u32, width: u32, height: u32, format: Format, flags: SwapChainFlags) -> Result<(), Error> {
        let swap_chain = self.com("IDXGISwapChain::ResizeBuffers")?;
        let hr = unsafe { swap_chain.ResizeBuffers(buffer_count, width, height, format.0, flags.bits()) };
        Error::check_hr("IDXGISwapChain::ResizeBuffers", hr, "")
    }

    /// [`IDXGISwapChain::SetFullscreenState`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nf-dxgi-idxgiswapchain-setfullscreenstate)
    ///
    /// `target == None` lets DXGI pick the output containing most of the window.
    pub fn set_fullscreen_state(&self, fullscreen: bool, target: Option<&Output>) -> Result<(), Error> {
        let swap_chain = self.com("IDXGISwapChain::SetFullscreenState")?;
        let target = match target {
            Some(output) => output.as_com()?.as_ptr(),
            None => null_mut(),
        };
        let hr = unsafe { swap_chain.SetFullscreenState(if fullscreen { TRUE } else { FALSE }, target) };
        Error::check_hr("IDXGISwapChain::SetFullscreenState", hr, "")
    }

    /// [`IDXGISwapChain::GetFullscreenState`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nf-dxgi-idxgiswapchain-getfullscreenstate)
    pub fn fullscreen_state(&self) -> Result<(bool, Option<Output>), Error> {
        let swap_chain = self.com("IDXGISwapChain::GetFullscreenState")?;
        let mut fullscreen : BOOL = FALSE;
        let mut target = null_mut();
        let hr = unsafe { swap_chain.GetFullscreenState(&mut fullscreen, &mut target) };
        let target = unsafe { Output::from_raw(target) };
        Error::check_hr("IDXGISwapChain::GetFullscreenState", hr, "")?;
        Ok((fullscreen != FALSE, target))
    }

    /// [`IDXGISwapChain::GetContainingOutput`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nf-dxgi-idxgiswapchain-getcontainingoutput)
    pub fn containing_output(&self) -> Result<Output, Error> {
        let swap_chain = self.com("IDXGISwapChain::GetContainingOutput")?;
        let mut output = null_mut();
        let hr = unsafe { swap_chain.GetContainingOutput(&mut output) };
        let output = unsafe { Output::from_raw(output) };
        output.ok_or_else(|| Error::null("IDXGISwapChain::GetContainingOutput", hr, "IDXGIOutput is null"))
    }

    /// [`IDXGISwapChain::GetLastPresentCount`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nf-dxgi-idxgiswapchain-getlastpresentcount)
    pub fn last_present_count(&self) -> Result<u32, Error> {
        let swap_chain = self.com("IDXGISwapChain::GetLastPresentCount")?;
        let mut count = 0;
        let hr = unsafe { swap_chain.GetLastPresentCount(&mut count) };
        Error::check_hr("IDXGISwapChain::GetLastPresentCount", hr, "")?;
        Ok(count)
    }
}



#[test] fn present_statuses() {
    use crate::com::{S_OK, DXGI_ERROR_DEVICE_REMOVED};

    assert_eq!(PresentStatus::from_hresult(S_OK).unwrap(),                  PresentStatus::Ok);
    assert_eq!(PresentStatus::from_hresult(DXGI_STATUS_OCCLUDED).unwrap(),  PresentStatus::Occluded);
    assert_eq!(PresentStatus::from_hresult(0x087A_0005).unwrap(),           PresentStatus::Ok); // DXGI_STATUS_MODE_CHANGED

    let err = PresentStatus::from_hresult(DXGI_ERROR_DEVICE_REMOVED).unwrap_err();
    assert_eq!(err.hresult(), Some(DXGI_ERROR_DEVICE_REMOVED));
    assert_eq!(err.method(), "IDXGISwapChain::Present");
}
