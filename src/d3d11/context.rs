use super::*;
use crate::com::*;

use winapi::um::d3d11::*;

use std::ptr::null_mut;



com_wrapper! {
    /// [`ID3D11DeviceContext`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/nn-d3d11-id3d11devicecontext):
    /// records and submits rendering commands.  Not thread safe.
    pub struct DeviceContext(ID3D11DeviceContext);
}

impl DeviceContext {
    /// [`ID3D11DeviceContext::ClearRenderTargetView`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/nf-d3d11-id3d11devicecontext-clearrendertargetview)
    pub fn clear_render_target_view(&self, rtv: &RenderTargetView, rgba: [f32; 4]) -> Result<(), Error> {
        let context = self.com("ID3D11DeviceContext::ClearRenderTargetView")?;
        let rtv = rtv.as_com()?;
        unsafe { context.ClearRenderTargetView(rtv.as_ptr(), &rgba) };
        Ok(())
    }

    /// [`ID3D11DeviceContext::OMSetRenderTargets`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/nf-d3d11-id3d11devicecontext-omsetrendertargets)
    /// without a depth stencil view.
    pub fn set_render_targets(&self, rtvs: &[&RenderTargetView]) -> Result<(), Error> {
        let context = self.com("ID3D11DeviceContext::OMSetRenderTargets")?;
        let rtvs = rtvs.iter().map(|rtv| rtv.as_com().map(|rtv| rtv.as_ptr())).collect::<Result<Vec<_>, _>>()?;
        unsafe { context.OMSetRenderTargets(rtvs.len() as _, rtvs.as_ptr(), null_mut()) };
        Ok(())
    }

    /// [`ID3D11DeviceContext::RSSetViewports`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/nf-d3d11-id3d11devicecontext-rssetviewports)
    pub fn set_viewports(&self, viewports: &[Viewport]) -> Result<(), Error> {
        let context = self.com("ID3D11DeviceContext::RSSetViewports")?;
        let viewports = viewports.iter().copied().map(D3D11_VIEWPORT::from).collect::<Vec<_>>();
        unsafe { context.RSSetViewports(viewports.len() as _, viewports.as_ptr()) };
        Ok(())
    }

    /// [`ID3D11DeviceContext::Map`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/nf-d3d11-id3d11devicecontext-map)
    ///
    /// With [`MapFlags::DO_NOT_WAIT`], a resource still in use by the GPU fails with `DXGI_ERROR_WAS_STILL_DRAWING`.
    pub fn map(&self, resource: &impl Resource, subresource: u32, map_type: MapType, flags: MapFlags) -> Result<MappedSubresource, Error> {
        let context = self.com("ID3D11DeviceContext::Map")?;
        let resource = resource.as_resource()?;
        let mut mapped = unsafe { std::mem::zeroed::<D3D11_MAPPED_SUBRESOURCE>() };
        let hr = unsafe { context.Map(resource.as_ptr(), subresource, map_type.0, flags.bits(), &mut mapped) };
        Error::check_hr("ID3D11DeviceContext::Map", hr, "")?;
        Ok(MappedSubresource { data: mapped.pData.cast(), row_pitch: mapped.RowPitch, depth_pitch: mapped.DepthPitch })
    }

    /// [`ID3D11DeviceContext::Unmap`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/nf-d3d11-id3d11devicecontext-unmap)
    pub fn unmap(&self, resource: &impl Resource, subresource: u32) -> Result<(), Error> {
        let context = self.com("ID3D11DeviceContext::Unmap")?;
        let resource = resource.as_resource()?;
        unsafe { context.Unmap(resource.as_ptr(), subresource) };
        Ok(())
    }

    /// [`ID3D11DeviceContext::CopyResource`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/nf-d3d11-id3d11devicecontext-copyresource)
    pub fn copy_resource(&self, dst: &impl Resource, src: &impl Resource) -> Result<(), Error> {
        let context = self.com("ID3D11DeviceContext::CopyResource")?;
        let dst = dst.as_resource()?;
        let src = src.as_resource()?;
        unsafe { context.CopyResource(dst.as_ptr(), src.as_ptr()) };
        Ok(())
    }

    /// [`ID3D11DeviceContext::UpdateSubresource`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/nf-d3d11-id3d11devicecontext-updatesubresource)
    /// of the whole subresource.
    ///
    /// ### Safety
    /// `data` must cover the entire subresource as laid out by `row_pitch` / `depth_pitch`.
    pub unsafe fn update_subresource(&self, dst: &impl Resource, subresource: u32, data: &[u8], row_pitch: u32, depth_pitch: u32) -> Result<(), Error> {
        let context = self.com("ID3D11DeviceContext::UpdateSubresource")?;
        let dst = dst.as_resource()?;
        context.UpdateSubresource(dst.as_ptr(), subresource, std::ptr::null(), data.as_ptr().cast(), row_pitch, depth_pitch);
        Ok(())
    }

    /// [`ID3D11DeviceContext::Flush`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/nf-d3d11-id3d11devicecontext-flush)
    pub fn flush(&self) -> Result<(), Error> {
        let context = self.com("ID3D11DeviceContext::Flush")?;
        unsafe { context.Flush() };
        Ok(())
    }

    /// [`ID3D11DeviceContext::ClearState`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/nf-d3d11-id3d11devicecontext-clearstate):
    /// unbind everything, releasing the context's references to views and resources.
    pub fn clear_state(&self) -> Result<(), Error> {
        let context = self.com("ID3D11DeviceContext::ClearState")?;
        unsafe { context.ClearState() };
        Ok(())
    }

    /// [`ID3D11DeviceContext::Draw`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/nf-d3d11-id3d11devicecontext-draw)
    /// with whatever pipeline state is currently bound.
    pub fn draw(&self, vertex_count: u32, start_vertex: u32) -> Result<(), Error> {
        let context = self.com("ID3D11DeviceContext::Draw")?;
        unsafe { context.Draw(vertex_count, start_vertex) };
        Ok(())
    }
}
