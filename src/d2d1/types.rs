//! Plain Direct2D structures, laid out exactly like their native counterparts

use super::*;
use crate::dxgi;

#[cfg(windows)] use winapi::shared::windef::HWND;
#[cfg(windows)] use winapi::um::d2d1::*;
#[cfg(windows)] use winapi::um::dcommon::D2D1_PIXEL_FORMAT;

use std::ops::Mul;



/// [`D2D1_COLOR_F`](https://docs.microsoft.com/en-us/windows/win32/direct2d/d2d1-color-f): straight (not premultiplied) RGBA
#[repr(C)] #[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorF { pub r: f32, pub g: f32, pub b: f32, pub a: f32 }

impl ColorF {
    pub const BLACK         : ColorF = ColorF::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE         : ColorF = ColorF::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT   : ColorF = ColorF::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self { Self { r, g, b, a } }

    /// `0xRRGGBB` plus a separate alpha, like `D2D1::ColorF(rgb, a)`.
    pub fn from_rgb(rgb: u32, a: f32) -> Self {
        let [_, r, g, b] = rgb.to_be_bytes();
        Self { r: f32::from(r) / 255.0, g: f32::from(g) / 255.0, b: f32::from(b) / 255.0, a }
    }
}

/// [`D2D1_POINT_2F`](https://docs.microsoft.com/en-us/windows/win32/direct2d/d2d1-point-2f)
#[repr(C)] #[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2F { pub x: f32, pub y: f32 }

impl Point2F {
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }
}

/// [`D2D1_RECT_F`](https://docs.microsoft.com/en-us/windows/win32/direct2d/d2d1-rect-f)
#[repr(C)] #[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectF { pub left: f32, pub top: f32, pub right: f32, pub bottom: f32 }

impl RectF {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self { Self { left, top, right, bottom } }
    pub fn width (&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}

/// [`D2D1_SIZE_U`](https://docs.microsoft.com/en-us/windows/win32/direct2d/d2d1-size-u)
#[repr(C)] #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SizeU { pub width: u32, pub height: u32 }

impl SizeU {
    pub const fn new(width: u32, height: u32) -> Self { Self { width, height } }
}

/// [`D2D1_ELLIPSE`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/ns-d2d1-d2d1_ellipse)
#[repr(C)] #[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Ellipse { pub point: Point2F, pub radius_x: f32, pub radius_y: f32 }

impl Ellipse {
    pub const fn new(point: Point2F, radius_x: f32, radius_y: f32) -> Self { Self { point, radius_x, radius_y } }
}

/// [`D2D1_MATRIX_3X2_F`](https://docs.microsoft.com/en-us/windows/win32/direct2d/d2d1-matrix-3x2-f):
/// a row-vector affine transform, `[x y 1] * M`.
#[repr(C)] #[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix3x2F {
    pub m11: f32, pub m12: f32,
    pub m21: f32, pub m22: f32,
    pub dx:  f32, pub dy:  f32,
}

impl Matrix3x2F {
    pub const fn identity() -> Self { Self { m11: 1.0, m12: 0.0, m21: 0.0, m22: 1.0, dx: 0.0, dy: 0.0 } }
    pub const fn translation(dx: f32, dy: f32) -> Self { Self { dx, dy, .. Self::identity() } }

    /// Scale by `(sx, sy)` about `center`.
    pub fn scale(sx: f32, sy: f32, center: Point2F) -> Self {
        Self { m11: sx, m22: sy, dx: center.x - sx * center.x, dy: center.y - sy * center.y, .. Self::identity() }
    }

    pub fn transform_point(&self, p: Point2F) -> Point2F {
        Point2F { x: p.x * self.m11 + p.y * self.m21 + self.dx, y: p.x * self.m12 + p.y * self.m22 + self.dy }
    }
}

impl Default for Matrix3x2F {
    fn default() -> Self { Self::identity() }
}

/// `a * b` applies `a` first, then `b`.
impl Mul for Matrix3x2F {
    type Output = Self;
    fn mul(self, b: Self) -> Self {
        let a = self;
        Self {
            m11: a.m11 * b.m11 + a.m12 * b.m21,
            m12: a.m11 * b.m12 + a.m12 * b.m22,
            m21: a.m21 * b.m11 + a.m22 * b.m21,
            m22: a.m21 * b.m12 + a.m22 * b.m22,
            dx:  a.dx  * b.m11 + a.dy  * b.m21 + b.dx,
            dy:  a.dx  * b.m12 + a.dy  * b.m22 + b.dy,
        }
    }
}

/// [`D2D1_PIXEL_FORMAT`](https://docs.microsoft.com/en-us/windows/win32/api/dcommon/ns-dcommon-d2d1_pixel_format)
#[repr(C)] #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelFormat { pub format: dxgi::Format, pub alpha_mode: AlphaMode }

impl PixelFormat {
    pub const fn new(format: dxgi::Format, alpha_mode: AlphaMode) -> Self { Self { format, alpha_mode } }
}

/// [`D2D1_RENDER_TARGET_PROPERTIES`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/ns-d2d1-d2d1_render_target_properties)
///
/// The default picks the render target type and pixel format automatically and uses the system DPI.
#[repr(C)] #[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderTargetProperties {
    pub type_:          RenderTargetType,
    pub pixel_format:   PixelFormat,
    pub dpi_x:          f32,
    pub dpi_y:          f32,
    pub usage:          RenderTargetUsage,
    pub min_level:      FeatureLevel,
}

/// [`D2D1_HWND_RENDER_TARGET_PROPERTIES`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/ns-d2d1-d2d1_hwnd_render_target_properties)
#[cfg(windows)]
#[derive(Clone, Copy, Debug)]
pub struct HwndRenderTargetProperties {
    pub hwnd:               HWND,
    /// `0x0` uses the window's client size.
    pub pixel_size:         SizeU,
    pub present_options:    PresentOptions,
}

#[cfg(windows)]
impl HwndRenderTargetProperties {
    pub fn new(hwnd: HWND) -> Self { Self { hwnd, pixel_size: SizeU::default(), present_options: PresentOptions::NONE } }
}



#[cfg(windows)] impl From<ColorF>      for D2D1_COLOR_F     { fn from(c: ColorF ) -> Self { Self { r: c.r, g: c.g, b: c.b, a: c.a } } }
#[cfg(windows)] impl From<D2D1_COLOR_F> for ColorF          { fn from(c: D2D1_COLOR_F) -> Self { Self { r: c.r, g: c.g, b: c.b, a: c.a } } }
#[cfg(windows)] impl From<Point2F>     for D2D1_POINT_2F    { fn from(p: Point2F) -> Self { Self { x: p.x, y: p.y } } }
#[cfg(windows)] impl From<RectF>       for D2D1_RECT_F      { fn from(r: RectF  ) -> Self { Self { left: r.left, top: r.top, right: r.right, bottom: r.bottom } } }
#[cfg(windows)] impl From<SizeU>       for D2D1_SIZE_U      { fn from(s: SizeU  ) -> Self { Self { width: s.width, height: s.height } } }
#[cfg(windows)] impl From<Ellipse>     for D2D1_ELLIPSE     { fn from(e: Ellipse) -> Self { Self { point: e.point.into(), radiusX: e.radius_x, radiusY: e.radius_y } } }

#[cfg(windows)] impl From<Matrix3x2F> for D2D1_MATRIX_3X2_F {
    fn from(m: Matrix3x2F) -> Self { Self { matrix: [[m.m11, m.m12], [m.m21, m.m22], [m.dx, m.dy]] } }
}

#[cfg(windows)] impl From<D2D1_MATRIX_3X2_F> for Matrix3x2F {
    fn from(m: D2D1_MATRIX_3X2_F) -> Self {
        let [[m11, m12], [m21, m22], [dx, dy]] = m.matrix;
        Self { m11, m12, m21, m22, dx, dy }
    }
}

#[cfg(windows)] impl From<PixelFormat> for D2D1_PIXEL_FORMAT {
    fn from(p: PixelFormat) -> Self { Self { format: p.format.0, alphaMode: p.alpha_mode.0 } }
}

#[cfg(windows)] impl From<RenderTargetProperties> for D2D1_RENDER_TARGET_PROPERTIES {
    fn from(p: RenderTargetProperties) -> Self { Self {
        _type:          p.type_.0,
        pixelFormat:    p.pixel_format.into(),
        dpiX:           p.dpi_x,
        dpiY:           p.dpi_y,
        usage:          p.usage.0,
        minLevel:       p.min_level.0,
    }}
}

#[cfg(windows)] impl From<HwndRenderTargetProperties> for D2D1_HWND_RENDER_TARGET_PROPERTIES {
    fn from(p: HwndRenderTargetProperties) -> Self { Self {
        hwnd:           p.hwnd,
        pixelSize:      p.pixel_size.into(),
        presentOptions: p.present_options.0,
    }}
}



#[test] fn layout() {
    use std::mem::size_of;
    assert_eq!(size_of::<ColorF>(),                 16);
    assert_eq!(size_of::<Point2F>(),                8);
    assert_eq!(size_of::<RectF>(),                  16);
    assert_eq!(size_of::<SizeU>(),                  8);
    assert_eq!(size_of::<Ellipse>(),                16);
    assert_eq!(size_of::<Matrix3x2F>(),             24);
    assert_eq!(size_of::<PixelFormat>(),            8);
    assert_eq!(size_of::<RenderTargetProperties>(), 28);
}

#[cfg(windows)] #[test] fn layout_matches_winapi() {
    use std::mem::size_of;
    assert_eq!(size_of::<ColorF>(),                 size_of::<D2D1_COLOR_F>());
    assert_eq!(size_of::<Ellipse>(),                size_of::<D2D1_ELLIPSE>());
    assert_eq!(size_of::<Matrix3x2F>(),             size_of::<D2D1_MATRIX_3X2_F>());
    assert_eq!(size_of::<RenderTargetProperties>(), size_of::<D2D1_RENDER_TARGET_PROPERTIES>());
}

#[test] fn colors() {
    assert_eq!(ColorF::from_rgb(0xFF8000, 0.5), ColorF::new(1.0, 128.0 / 255.0, 0.0, 0.5));
    assert_eq!(ColorF::default(), ColorF::TRANSPARENT);
}

#[test] fn transforms() {
    let p = Point2F::new(2.0, 3.0);
    assert_eq!(Matrix3x2F::identity().transform_point(p), p);
    assert_eq!(Matrix3x2F::default(), Matrix3x2F::identity());
    assert_eq!(Matrix3x2F::translation(10.0, 20.0).transform_point(p), Point2F::new(12.0, 23.0));
    assert_eq!(Matrix3x2F::scale(2.0, 4.0, Point2F::default()).transform_point(p), Point2F::new(4.0, 12.0));
    assert_eq!(Matrix3x2F::scale(2.0, 2.0, Point2F::new(1.0, 1.0)).transform_point(Point2F::new(1.0, 1.0)), Point2F::new(1.0, 1.0));

    // scale first, then translate
    let m = Matrix3x2F::scale(2.0, 2.0, Point2F::default()) * Matrix3x2F::translation(1.0, 0.0);
    assert_eq!(m.transform_point(p), Point2F::new(5.0, 6.0));
    let m = Matrix3x2F::translation(1.0, 0.0) * Matrix3x2F::scale(2.0, 2.0, Point2F::default());
    assert_eq!(m.transform_point(p), Point2F::new(6.0, 6.0));
}

#[test] fn render_target_properties_default() {
    let p = RenderTargetProperties::default();
    assert_eq!(p.type_,                     RenderTargetType::DEFAULT);
    assert_eq!(p.pixel_format.format,       dxgi::Format::UNKNOWN);
    assert_eq!(p.pixel_format.alpha_mode,   AlphaMode::UNKNOWN);
    assert_eq!((p.dpi_x, p.dpi_y),          (0.0, 0.0));
    assert_eq!(p.min_level,                 FeatureLevel::DEFAULT);
}
