use super::*;
use crate::com::*;
use crate::{dxgi, wic};

use winapi::Interface;
use winapi::um::d2d1::*;

use std::ptr::null_mut;



com_wrapper! {
    /// [`ID2D1Factory`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nn-d2d1-id2d1factory):
    /// creates Direct2D render targets.
    pub struct Factory(ID2D1Factory);
}

impl Factory {
    /// [`D2D1CreateFactory`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-d2d1createfactory)
    ///
    /// `factory_type` is passed through as-is: a [`FactoryType::SINGLE_THREADED`] factory and everything it creates
    /// must stay on one thread, [`FactoryType::MULTI_THREADED`] serializes access internally.
    /// [`DebugLevel`]s other than `NONE` require the debug layer (Graphics Tools) to be installed.
    #[tracing::instrument(level = "debug")]
    pub fn create(factory_type: FactoryType, debug_level: DebugLevel) -> Result<Self, Error> {
        let options = D2D1_FACTORY_OPTIONS { debugLevel: debug_level.0 };
        let mut factory = null_mut();
        let hr = unsafe { D2D1CreateFactory(factory_type.0, &ID2D1Factory::uuidof(), &options, &mut factory) };
        let factory = unsafe { mcom::Rc::from_raw_opt(factory as *mut ID2D1Factory) };
        let factory = factory.ok_or_else(|| Error::null("D2D1CreateFactory", hr, "ID2D1Factory is null"))?;
        tracing::debug!("created ID2D1Factory");
        Ok(Self::from_com(factory))
    }

    /// [`ID2D1Factory::GetDesktopDpi`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-id2d1factory-getdesktopdpi):
    /// `(dpi_x, dpi_y)` as of the last [`reload_system_metrics`](Self::reload_system_metrics).
    pub fn desktop_dpi(&self) -> Result<(f32, f32), Error> {
        let factory = self.com("ID2D1Factory::GetDesktopDpi")?;
        let (mut x, mut y) = (0.0, 0.0);
        unsafe { factory.GetDesktopDpi(&mut x, &mut y) };
        Ok((x, y))
    }

    /// [`ID2D1Factory::ReloadSystemMetrics`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-id2d1factory-reloadsystemmetrics)
    pub fn reload_system_metrics(&self) -> Result<(), Error> {
        let factory = self.com("ID2D1Factory::ReloadSystemMetrics")?;
        let hr = unsafe { factory.ReloadSystemMetrics() };
        Error::check_hr("ID2D1Factory::ReloadSystemMetrics", hr, "")
    }

    /// [`ID2D1Factory::CreateHwndRenderTarget`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-id2d1factory-createhwndrendertarget(constd2d1_render_target_properties__constd2d1_hwnd_render_target_properties__id2d1hwndrendertarget))
    ///
    /// ### Safety
    /// `hwnd_properties.hwnd` must be a valid window handle.
    pub unsafe fn create_hwnd_render_target(&self, properties: &RenderTargetProperties, hwnd_properties: &HwndRenderTargetProperties) -> Result<HwndRenderTarget, Error> {
        let factory = self.com("ID2D1Factory::CreateHwndRenderTarget")?;
        let properties = D2D1_RENDER_TARGET_PROPERTIES::from(*properties);
        let hwnd_properties = D2D1_HWND_RENDER_TARGET_PROPERTIES::from(*hwnd_properties);
        let mut target = null_mut();
        let hr = factory.CreateHwndRenderTarget(&properties, &hwnd_properties, &mut target);
        let target = HwndRenderTarget::from_raw(target);
        target.ok_or_else(|| Error::null("ID2D1Factory::CreateHwndRenderTarget", hr, "ID2D1HwndRenderTarget is null"))
    }

    /// [`ID2D1Factory::CreateWicBitmapRenderTarget`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-id2d1factory-createwicbitmaprendertarget(iwicbitmap_constd2d1_render_target_properties__id2d1rendertarget))
    ///
    /// The bitmap must use a format Direct2D can render to, e.g. [`wic::pixel_format::PBGRA32`] with
    /// [`AlphaMode::PREMULTIPLIED`].  Hardware render targets aren't supported here.
    pub fn create_wic_bitmap_render_target(&self, bitmap: &wic::Bitmap, properties: &RenderTargetProperties) -> Result<RenderTarget, Error> {
        let factory = self.com("ID2D1Factory::CreateWicBitmapRenderTarget")?;
        let bitmap = bitmap.as_com()?;
        let properties = D2D1_RENDER_TARGET_PROPERTIES::from(*properties);
        let mut target = null_mut();
        let hr = unsafe { factory.CreateWicBitmapRenderTarget(bitmap.as_ptr(), &properties, &mut target) };
        let target = unsafe { RenderTarget::from_raw(target) };
        target.ok_or_else(|| Error::null("ID2D1Factory::CreateWicBitmapRenderTarget", hr, "ID2D1RenderTarget is null"))
    }

    /// [`ID2D1Factory::CreateDxgiSurfaceRenderTarget`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-id2d1factory-createdxgisurfacerendertarget(idxgisurface_constd2d1_render_target_properties__id2d1rendertarget))
    ///
    /// The surface's device must have been created with `d3d11::CreateDeviceFlags::BGRA_SUPPORT`.
    pub fn create_dxgi_surface_render_target(&self, surface: &dxgi::Surface, properties: &RenderTargetProperties) -> Result<RenderTarget, Error> {
        let factory = self.com("ID2D1Factory::CreateDxgiSurfaceRenderTarget")?;
        let surface = surface.as_com()?;
        let properties = D2D1_RENDER_TARGET_PROPERTIES::from(*properties);
        let mut target = null_mut();
        let hr = unsafe { factory.CreateDxgiSurfaceRenderTarget(surface.as_ptr(), &properties, &mut target) };
        let target = unsafe { RenderTarget::from_raw(target) };
        target.ok_or_else(|| Error::null("ID2D1Factory::CreateDxgiSurfaceRenderTarget", hr, "ID2D1RenderTarget is null"))
    }
}



#[test] fn create_and_dispose() {
    let mut factory = Factory::create(FactoryType::SINGLE_THREADED, DebugLevel::NONE).unwrap();
    factory.reload_system_metrics().unwrap();
    let (x, y) = factory.desktop_dpi().unwrap();
    assert!(x > 0.0 && y > 0.0);

    factory.dispose();
    factory.dispose();
    assert!(factory.desktop_dpi().unwrap_err().is_disposed());
    assert!(factory.reload_system_metrics().unwrap_err().is_disposed());
}
