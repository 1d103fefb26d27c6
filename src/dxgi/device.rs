use crate::com::*;
use super::Adapter;

use winapi::shared::dxgi::{IDXGIAdapter1, IDXGIDevice};

use std::ptr::null_mut;



com_wrapper! {
    /// [`IDXGIDevice`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nn-dxgi-idxgidevice):
    /// the DXGI side of a rendering device.  Get one from `d3d11::Device::to_dxgi_device`.
    pub struct Device(IDXGIDevice);
}

impl Device {
    /// [`IDXGIDevice::GetAdapter`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nf-dxgi-idxgidevice-getadapter)
    pub fn adapter(&self) -> Result<Adapter, Error> {
        let device = self.com("IDXGIDevice::GetAdapter")?;
        let mut adapter = null_mut();
        let hr = unsafe { device.GetAdapter(&mut adapter) };
        let adapter = unsafe { mcom::Rc::from_raw_opt(adapter) };
        let adapter = adapter.ok_or_else(|| Error::null("IDXGIDevice::GetAdapter", hr, "IDXGIAdapter is null"))?;
        // Every adapter since Windows 7 implements IDXGIAdapter1
        let adapter = query_interface::<IDXGIAdapter1, _>(&adapter, "IDXGIDevice::GetAdapter")?;
        Ok(Adapter::from_com(adapter))
    }

    /// [`IDXGIDevice::GetGPUThreadPriority`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nf-dxgi-idxgidevice-getgputhreadpriority)
    pub fn gpu_thread_priority(&self) -> Result<i32, Error> {
        let device = self.com("IDXGIDevice::GetGPUThreadPriority")?;
        let mut priority = 0;
        let hr = unsafe { device.GetGPUThreadPriority(&mut priority) };
        Error::check_hr("IDXGIDevice::GetGPUThreadPriority", hr, "")?;
        Ok(priority)
    }

    /// [`IDXGIDevice::SetGPUThreadPriority`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nf-dxgi-idxgidevice-setgputhreadpriority)
    ///
    /// `priority` must be in `-7 ..= 7`, otherwise `E_INVALIDARG`.
    pub fn set_gpu_thread_priority(&self, priority: i32) -> Result<(), Error> {
        let device = self.com("IDXGIDevice::SetGPUThreadPriority")?;
        let hr = unsafe { device.SetGPUThreadPriority(priority) };
        Error::check_hr("IDXGIDevice::SetGPUThreadPriority", hr, "")
    }
}
