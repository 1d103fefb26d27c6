use super::*;
use crate::com::*;
use crate::wic;

use winapi::shared::windef::HWND;
use winapi::um::d2d1::*;

use std::ptr::{null, null_mut};



com_wrapper! {
    /// [`ID2D1RenderTarget`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nn-d2d1-id2d1rendertarget)
    ///
    /// Drawing calls are only valid between [`begin_draw`](Self::begin_draw) and [`end_draw`](Self::end_draw).
    /// Errors from drawing calls are deferred: they're reported by `end_draw` (or [`flush`](Self::flush)).
    pub struct RenderTarget(ID2D1RenderTarget);
}

com_wrapper! {
    /// [`ID2D1HwndRenderTarget`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nn-d2d1-id2d1hwndrendertarget):
    /// a render target presenting to a window.  Draw through [`render_target`](Self::render_target).
    pub struct HwndRenderTarget(ID2D1HwndRenderTarget);
}

/// Direct2D brushes, as accepted by the [`RenderTarget`] drawing methods.
pub trait Brush {
    /// The base `ID2D1Brush` reference, unless disposed.
    fn as_brush(&self) -> Result<&mcom::Rc<ID2D1Brush>, Error>;
}

impl RenderTarget {
    /// [`ID2D1RenderTarget::BeginDraw`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-id2d1rendertarget-begindraw)
    pub fn begin_draw(&self) -> Result<(), Error> {
        let target = self.com("ID2D1RenderTarget::BeginDraw")?;
        unsafe { target.BeginDraw() };
        Ok(())
    }

    /// [`ID2D1RenderTarget::EndDraw`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-id2d1rendertarget-enddraw)
    ///
    /// `D2DERR_RECREATE_TARGET` means the device was lost: discard this target and everything created from it.
    pub fn end_draw(&self) -> Result<(), Error> {
        let target = self.com("ID2D1RenderTarget::EndDraw")?;
        let hr = unsafe { target.EndDraw(null_mut(), null_mut()) };
        Error::check_hr("ID2D1RenderTarget::EndDraw", hr, "")
    }

    /// [`ID2D1RenderTarget::Flush`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-id2d1rendertarget-flush)
    pub fn flush(&self) -> Result<(), Error> {
        let target = self.com("ID2D1RenderTarget::Flush")?;
        let hr = unsafe { target.Flush(null_mut(), null_mut()) };
        Error::check_hr("ID2D1RenderTarget::Flush", hr, "")
    }

    /// [`ID2D1RenderTarget::Clear`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-id2d1rendertarget-clear(constd2d1_color_f_))
    pub fn clear(&self, color: ColorF) -> Result<(), Error> {
        let target = self.com("ID2D1RenderTarget::Clear")?;
        let color = D2D1_COLOR_F::from(color);
        unsafe { target.Clear(&color) };
        Ok(())
    }

    /// [`ID2D1RenderTarget::DrawLine`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-id2d1rendertarget-drawline)
    pub fn draw_line(&self, p0: Point2F, p1: Point2F, brush: &impl Brush, stroke_width: f32) -> Result<(), Error> {
        let target = self.com("ID2D1RenderTarget::DrawLine")?;
        let brush = brush.as_brush()?;
        unsafe { target.DrawLine(p0.into(), p1.into(), brush.as_ptr(), stroke_width, null_mut()) };
        Ok(())
    }

    /// [`ID2D1RenderTarget::DrawRectangle`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-id2d1rendertarget-drawrectangle(constd2d1_rect_f__id2d1brush_float_id2d1strokestyle))
    pub fn draw_rectangle(&self, rect: RectF, brush: &impl Brush, stroke_width: f32) -> Result<(), Error> {
        let target = self.com("ID2D1RenderTarget::DrawRectangle")?;
        let brush = brush.as_brush()?;
        let rect = D2D1_RECT_F::from(rect);
        unsafe { target.DrawRectangle(&rect, brush.as_ptr(), stroke_width, null_mut()) };
        Ok(())
    }

    /// [`ID2D1RenderTarget::FillRectangle`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-id2d1rendertarget-fillrectangle(constd2d1_rect_f__id2d1brush))
    pub fn fill_rectangle(&self, rect: RectF, brush: &impl Brush) -> Result<(), Error> {
        let target = self.com("ID2D1RenderTarget::FillRectangle")?;
        let brush = brush.as_brush()?;
        let rect = D2D1_RECT_F::from(rect);
        unsafe { target.FillRectangle(&rect, brush.as_ptr()) };
        Ok(())
    }

    /// [`ID2D1RenderTarget::DrawEllipse`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-id2d1rendertarget-drawellipse(constd2d1_ellipse__id2d1brush_float_id2d1strokestyle))
    pub fn draw_ellipse(&self, ellipse: Ellipse, brush: &impl Brush, stroke_width: f32) -> Result<(), Error> {
        let target = self.com("ID2D1RenderTarget::DrawEllipse")?;
        let brush = brush.as_brush()?;
        let ellipse = D2D1_ELLIPSE::from(ellipse);
        unsafe { target.DrawEllipse(&ellipse, brush.as_ptr(), stroke_width, null_mut()) };
        Ok(())
    }

    /// [`ID2D1RenderTarget::FillEllipse`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-id2d1rendertarget-fillellipse(constd2d1_ellipse__id2d1brush))
    pub fn fill_ellipse(&self, ellipse: Ellipse, brush: &impl Brush) -> Result<(), Error> {
        let target = self.com("ID2D1RenderTarget::FillEllipse")?;
        let brush = brush.as_brush()?;
        let ellipse = D2D1_ELLIPSE::from(ellipse);
        unsafe { target.FillEllipse(&ellipse, brush.as_ptr()) };
        Ok(())
    }

    /// [`ID2D1RenderTarget::DrawBitmap`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-id2d1rendertarget-drawbitmap(id2d1bitmap_constd2d1_rect_f__float_d2d1_bitmap_interpolation_mode_constd2d1_rect_f_))
    ///
    /// `dst == None` draws at the origin at the bitmap's DIP size, `src == None` draws the whole bitmap.
    pub fn draw_bitmap(&self, bitmap: &Bitmap, dst: Option<RectF>, opacity: f32, mode: BitmapInterpolationMode, src: Option<RectF>) -> Result<(), Error> {
        let target = self.com("ID2D1RenderTarget::DrawBitmap")?;
        let bitmap = bitmap.as_com()?;
        let dst = dst.map(D2D1_RECT_F::from);
        let src = src.map(D2D1_RECT_F::from);
        unsafe { target.DrawBitmap(
            bitmap.as_ptr(),
            dst.as_ref().map_or(null(), |r| r as *const _),
            opacity,
            mode.0,
            src.as_ref().map_or(null(), |r| r as *const _),
        )};
        Ok(())
    }

    /// [`ID2D1RenderTarget::SetTransform`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-id2d1rendertarget-settransform(constd2d1_matrix_3x2_f_))
    pub fn set_transform(&self, transform: &Matrix3x2F) -> Result<(), Error> {
        let target = self.com("ID2D1RenderTarget::SetTransform")?;
        let transform = D2D1_MATRIX_3X2_F::from(*transform);
        unsafe { target.SetTransform(&transform) };
        Ok(())
    }

    /// [`ID2D1RenderTarget::GetTransform`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-id2d1rendertarget-gettransform)
    pub fn transform(&self) -> Result<Matrix3x2F, Error> {
        let target = self.com("ID2D1RenderTarget::GetTransform")?;
        let mut transform = D2D1_MATRIX_3X2_F::from(Matrix3x2F::identity());
        unsafe { target.GetTransform(&mut transform) };
        Ok(Matrix3x2F::from(transform))
    }

    /// [`ID2D1RenderTarget::SetAntialiasMode`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-id2d1rendertarget-setantialiasmode)
    pub fn set_antialias_mode(&self, mode: AntialiasMode) -> Result<(), Error> {
        let target = self.com("ID2D1RenderTarget::SetAntialiasMode")?;
        unsafe { target.SetAntialiasMode(mode.0) };
        Ok(())
    }

    /// [`ID2D1RenderTarget::GetAntialiasMode`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-id2d1rendertarget-getantialiasmode)
    pub fn antialias_mode(&self) -> Result<AntialiasMode, Error> {
        let target = self.com("ID2D1RenderTarget::GetAntialiasMode")?;
        Ok(AntialiasMode(unsafe { target.GetAntialiasMode() }))
    }

    /// [`ID2D1RenderTarget::SetDpi`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-id2d1rendertarget-setdpi):
    /// `(0.0, 0.0)` resets to the factory's system DPI.
    pub fn set_dpi(&self, dpi_x: f32, dpi_y: f32) -> Result<(), Error> {
        let target = self.com("ID2D1RenderTarget::SetDpi")?;
        unsafe { target.SetDpi(dpi_x, dpi_y) };
        Ok(())
    }

    /// [`ID2D1RenderTarget::GetDpi`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-id2d1rendertarget-getdpi)
    pub fn dpi(&self) -> Result<(f32, f32), Error> {
        let target = self.com("ID2D1RenderTarget::GetDpi")?;
        let (mut x, mut y) = (0.0, 0.0);
        unsafe { target.GetDpi(&mut x, &mut y) };
        Ok((x, y))
    }

    /// [`ID2D1RenderTarget::CreateSolidColorBrush`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-id2d1rendertarget-createsolidcolorbrush(constd2d1_color_f__id2d1solidcolorbrush))
    pub fn create_solid_color_brush(&self, color: ColorF) -> Result<SolidColorBrush, Error> {
        let target = self.com("ID2D1RenderTarget::CreateSolidColorBrush")?;
        let color = D2D1_COLOR_F::from(color);
        let mut brush = null_mut();
        let hr = unsafe { target.CreateSolidColorBrush(&color, null(), &mut brush) };
        let brush = unsafe { SolidColorBrush::from_raw(brush) };
        brush.ok_or_else(|| Error::null("ID2D1RenderTarget::CreateSolidColorBrush", hr, "ID2D1SolidColorBrush is null"))
    }

    /// [`ID2D1RenderTarget::CreateBitmapFromWicBitmap`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-id2d1rendertarget-createbitmapfromwicbitmap(iwicbitmapsource_id2d1bitmap))
    ///
    /// `source` must already be in a format the target accepts, typically [`wic::pixel_format::PBGRA32`]
    /// (use a [`wic::FormatConverter`] first), otherwise this fails with `WINCODEC_ERR_UNSUPPORTEDPIXELFORMAT`.
    pub fn create_bitmap_from_wic_bitmap(&self, source: &impl wic::BitmapSource) -> Result<Bitmap, Error> {
        let target = self.com("ID2D1RenderTarget::CreateBitmapFromWicBitmap")?;
        let source = source.as_source()?;
        let mut bitmap = null_mut();
        let hr = unsafe { target.CreateBitmapFromWicBitmap(source.as_ptr(), null(), &mut bitmap) };
        let bitmap = unsafe { Bitmap::from_raw(bitmap) };
        bitmap.ok_or_else(|| Error::null("ID2D1RenderTarget::CreateBitmapFromWicBitmap", hr, "ID2D1Bitmap is null"))
    }
}

impl HwndRenderTarget {
    /// The drawing interface of this target.
    pub fn render_target(&self) -> Result<RenderTarget, Error> {
        let target = self.com("HwndRenderTarget::render_target")?;
        Ok(RenderTarget::from_com(target.up_ref().clone()))
    }

    /// [`ID2D1HwndRenderTarget::CheckWindowState`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-id2d1hwndrendertarget-checkwindowstate):
    /// [`WindowState::OCCLUDED`] while the window is hidden, drawing can be skipped.
    pub fn check_window_state(&self) -> Result<WindowState, Error> {
        let target = self.com("ID2D1HwndRenderTarget::CheckWindowState")?;
        Ok(WindowState(unsafe { target.CheckWindowState() }))
    }

    /// [`ID2D1HwndRenderTarget::Resize`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-id2d1hwndrendertarget-resize(constd2d1_size_u_)),
    /// typically in response to `WM_SIZE`.
    pub fn resize(&self, pixel_size: SizeU) -> Result<(), Error> {
        let target = self.com("ID2D1HwndRenderTarget::Resize")?;
        let size = D2D1_SIZE_U::from(pixel_size);
        let hr = unsafe { target.Resize(&size) };
        Error::check_hr("ID2D1HwndRenderTarget::Resize", hr, "")
    }

    /// [`ID2D1HwndRenderTarget::GetHwnd`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-id2d1hwndrendertarget-gethwnd)
    pub fn hwnd(&self) -> Result<HWND, Error> {
        let target = self.com("ID2D1HwndRenderTarget::GetHwnd")?;
        Ok(unsafe { target.GetHwnd() })
    }
}



#[cfg(test)] fn pbgra_target(width: u32, height: u32) -> (crate::com::ComInit, wic::Bitmap, RenderTarget) {
    let com = crate::com::initialize(Apartment::MultiThreaded).unwrap();
    let wic = wic::ImagingFactory::create().unwrap();
    let bitmap = wic.create_bitmap(width, height, &wic::pixel_format::PBGRA32, wic::BitmapCreateCacheOption::CACHE_ON_LOAD).unwrap();
    let factory = Factory::create(FactoryType::SINGLE_THREADED, DebugLevel::NONE).unwrap();
    let properties = RenderTargetProperties {
        type_:          RenderTargetType::SOFTWARE,
        pixel_format:   PixelFormat::new(crate::dxgi::Format::B8G8R8A8_UNORM, AlphaMode::PREMULTIPLIED),
        .. RenderTargetProperties::default()
    };
    let target = factory.create_wic_bitmap_render_target(&bitmap, &properties).unwrap();
    (com, bitmap, target)
}

#[test] fn draw_into_wic_bitmap() {
    let (_com, bitmap, target) = pbgra_target(8, 8);
    target.set_dpi(96.0, 96.0).unwrap();
    assert_eq!(target.dpi().unwrap(), (96.0, 96.0));
    target.set_antialias_mode(AntialiasMode::ALIASED).unwrap();
    assert_eq!(target.antialias_mode().unwrap(), AntialiasMode::ALIASED);

    let blue = target.create_solid_color_brush(ColorF::new(0.0, 0.0, 1.0, 1.0)).unwrap();
    target.begin_draw().unwrap();
    target.clear(ColorF::new(1.0, 0.0, 0.0, 1.0)).unwrap();
    target.fill_rectangle(RectF::new(0.0, 0.0, 4.0, 8.0), &blue).unwrap();
    target.end_draw().unwrap();

    let lock = bitmap.lock(None, wic::BitmapLockFlags::READ).unwrap();
    let stride = lock.stride().unwrap() as usize;
    let data = lock.data().unwrap();
    for y in 0 .. 8 {
        for x in 0 .. 8 {
            let px = &data[y * stride + x * 4 ..][..4];
            let expected = if x < 4 { [0xFF, 0x00, 0x00, 0xFF] } else { [0x00, 0x00, 0xFF, 0xFF] }; // BGRA
            assert_eq!(px, &expected[..], "pixel ({}, {})", x, y);
        }
    }
}

#[test] fn transforms_round_trip() {
    let (_com, _bitmap, target) = pbgra_target(4, 4);
    assert_eq!(target.transform().unwrap(), Matrix3x2F::identity());
    let m = Matrix3x2F::translation(1.0, 2.0) * Matrix3x2F::scale(2.0, 2.0, Point2F::default());
    target.set_transform(&m).unwrap();
    assert_eq!(target.transform().unwrap(), m);
}

#[test] fn draw_wic_bitmap_and_strokes() {
    let (_com, bitmap, target) = pbgra_target(4, 4);
    let wic = wic::ImagingFactory::create().unwrap();
    let green = [0x00u8, 0xFF, 0x00, 0xFF].repeat(4);
    let source = wic.create_bitmap_from_memory(2, 2, &wic::pixel_format::PBGRA32, 8, &green[..]).unwrap();
    let d2d_bitmap = target.create_bitmap_from_wic_bitmap(&source).unwrap();
    let (dpi_x, _) = d2d_bitmap.dpi().unwrap();
    assert!(dpi_x > 0.0);

    target.set_dpi(96.0, 96.0).unwrap();
    target.begin_draw().unwrap();
    target.clear(ColorF::TRANSPARENT).unwrap();
    target.draw_bitmap(&d2d_bitmap, Some(RectF::new(0.0, 0.0, 4.0, 4.0)), 1.0, BitmapInterpolationMode::NEAREST_NEIGHBOR, None).unwrap();
    target.end_draw().unwrap();

    {
        let lock = bitmap.lock(None, wic::BitmapLockFlags::READ).unwrap();
        let stride = lock.stride().unwrap() as usize;
        let data = lock.data().unwrap();
        for y in 0 .. 4 { assert_eq!(&data[y * stride ..][..16], &green[..]); }
    }

    let brush = target.create_solid_color_brush(ColorF::BLACK).unwrap();
    brush.set_opacity(0.5).unwrap();
    assert_eq!(brush.opacity().unwrap(), 0.5);
    brush.set_color(ColorF::WHITE).unwrap();

    target.begin_draw().unwrap();
    target.draw_line(Point2F::new(0.0, 0.0), Point2F::new(4.0, 4.0), &brush, 1.0).unwrap();
    target.draw_rectangle(RectF::new(0.5, 0.5, 3.5, 3.5), &brush, 1.0).unwrap();
    target.draw_ellipse(Ellipse::new(Point2F::new(2.0, 2.0), 1.0, 1.0), &brush, 1.0).unwrap();
    target.fill_ellipse(Ellipse::new(Point2F::new(2.0, 2.0), 0.5, 0.5), &brush).unwrap();
    target.flush().unwrap();
    target.end_draw().unwrap();
}

#[test] fn disposed_render_target() {
    let (_com, _bitmap, mut target) = pbgra_target(1, 1);
    let mut brush = target.create_solid_color_brush(ColorF::WHITE).unwrap();
    brush.dispose();
    assert!(target.fill_rectangle(RectF::new(0.0, 0.0, 1.0, 1.0), &brush).unwrap_err().is_disposed());
    assert!(brush.opacity().unwrap_err().is_disposed());

    target.dispose();
    target.dispose();
    assert!(target.begin_draw().unwrap_err().is_disposed());
    assert!(target.end_draw().unwrap_err().is_disposed());
    assert!(target.clear(ColorF::BLACK).unwrap_err().is_disposed());
    assert!(target.create_solid_color_brush(ColorF::BLACK).map(|_| ()).unwrap_err().is_disposed());
}

#[test] fn hwnd_render_target_for_hidden_window() {
    let window = crate::utility::HiddenWindow::new();
    let factory = Factory::create(FactoryType::SINGLE_THREADED, DebugLevel::NONE).unwrap();
    let properties = RenderTargetProperties { type_: RenderTargetType::SOFTWARE, .. RenderTargetProperties::default() };
    let hwnd_properties = HwndRenderTargetProperties { pixel_size: SizeU::new(16, 8), .. HwndRenderTargetProperties::new(window.hwnd()) };
    let mut hwnd_target = unsafe { factory.create_hwnd_render_target(&properties, &hwnd_properties) }.unwrap();
    assert_eq!(hwnd_target.hwnd().unwrap(), window.hwnd());
    hwnd_target.check_window_state().unwrap();
    hwnd_target.resize(SizeU::new(32, 16)).unwrap();

    let target = hwnd_target.render_target().unwrap();
    let brush = target.create_solid_color_brush(ColorF::WHITE).unwrap();
    target.begin_draw().unwrap();
    target.clear(ColorF::BLACK).unwrap();
    target.fill_rectangle(RectF::new(0.0, 0.0, 8.0, 8.0), &brush).unwrap();
    target.end_draw().unwrap();

    hwnd_target.dispose();
    hwnd_target.dispose();
    assert!(hwnd_target.hwnd().unwrap_err().is_disposed());
    assert!(hwnd_target.check_window_state().unwrap_err().is_disposed());
    assert!(hwnd_target.resize(SizeU::new(1, 1)).unwrap_err().is_disposed());
    assert!(hwnd_target.render_target().map(|_| ()).unwrap_err().is_disposed());
}
