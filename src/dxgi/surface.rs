use super::*;
use crate::com::*;

use winapi::shared::dxgi::IDXGISurface;



com_wrapper! {
    /// [`IDXGISurface`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nn-dxgi-idxgisurface):
    /// 2D image data, e.g. a swap chain buffer or a `d3d11::Texture2D`.
    /// Direct2D can render into one via `d2d1::Factory::create_dxgi_surface_render_target`.
    pub struct Surface(IDXGISurface);
}

impl Surface {
    /// [`IDXGISurface::GetDesc`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nf-dxgi-idxgisurface-getdesc)
    pub fn desc(&self) -> Result<SurfaceDesc, Error> {
        let surface = self.com("IDXGISurface::GetDesc")?;
        let mut desc = unsafe { std::mem::zeroed() };
        let hr = unsafe { surface.GetDesc(&mut desc) };
        Error::check_hr("IDXGISurface::GetDesc", hr, "")?;
        Ok(SurfaceDesc::from(desc))
    }
}
