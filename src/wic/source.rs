use super::*;
use crate::com::*;
use crate::com::E_INVALIDARG;

use winapi::shared::guiddef::GUID;
use winapi::um::wincodec::*;

use std::convert::TryFrom;



/// [`IWICBitmapSource`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nn-wincodec-iwicbitmapsource):
/// anything WIC can read pixels from.
///
/// Implemented by [`Bitmap`], [`BitmapFrameDecode`], [`FormatConverter`] and [`BitmapScaler`].
pub trait BitmapSource {
    fn as_source(&self) -> Result<&mcom::Rc<IWICBitmapSource>, Error>;

    /// [`IWICBitmapSource::GetSize`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicbitmapsource-getsize):
    /// `(width, height)` in pixels.
    fn size(&self) -> Result<(u32, u32), Error> {
        let source = self.as_source()?;
        let (mut w, mut h) = (0, 0);
        let hr = unsafe { source.GetSize(&mut w, &mut h) };
        Error::check_hr("IWICBitmapSource::GetSize", hr, "")?;
        Ok((w, h))
    }

    /// [`IWICBitmapSource::GetPixelFormat`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicbitmapsource-getpixelformat):
    /// one of [`pixel_format`]'s GUIDs, or another registered format.
    fn pixel_format(&self) -> Result<GUID, Error> {
        let source = self.as_source()?;
        let mut format = pixel_format::DONT_CARE;
        let hr = unsafe { source.GetPixelFormat(&mut format) };
        Error::check_hr("IWICBitmapSource::GetPixelFormat", hr, "")?;
        Ok(format)
    }

    /// [`IWICBitmapSource::GetResolution`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicbitmapsource-getresolution):
    /// `(dpi_x, dpi_y)`.
    fn resolution(&self) -> Result<(f64, f64), Error> {
        let source = self.as_source()?;
        let (mut x, mut y) = (0.0, 0.0);
        let hr = unsafe { source.GetResolution(&mut x, &mut y) };
        Error::check_hr("IWICBitmapSource::GetResolution", hr, "")?;
        Ok((x, y))
    }

    /// [`IWICBitmapSource::CopyPixels`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicbitmapsource-copypixels)
    /// of `rect` (or the whole image), `stride` bytes per row.
    ///
    /// Fails with `E_INVALIDARG` without calling into WIC if `buffer` can't hold `stride * rows` bytes, or is 4 GiB or larger.
    fn copy_pixels(&self, rect: Option<Rect>, stride: u32, buffer: &mut [u8]) -> Result<(), Error> {
        let source = self.as_source()?;
        let rows = match rect {
            Some(rect)  => rect.height.max(0) as u32,
            None        => self.size()?.1,
        };
        let size = buffer_size("IWICBitmapSource::CopyPixels", buffer.len(), stride, rows)?;
        let rect = rect.map(WICRect::from);
        let prc = rect.as_ref().map_or(std::ptr::null(), |r| r as *const _);
        let hr = unsafe { source.CopyPixels(prc, stride, size, buffer.as_mut_ptr()) };
        Error::check_hr("IWICBitmapSource::CopyPixels", hr, "")
    }

    /// Copy every pixel into a new `stride * height` buffer.
    fn to_vec(&self, stride: u32) -> Result<Vec<u8>, Error> {
        let (_, height) = self.size()?;
        let mut buffer = vec![0u8; stride as usize * height as usize];
        self.copy_pixels(None, stride, &mut buffer[..])?;
        Ok(buffer)
    }
}

/// `len` as the `UINT cbBufferSize` WIC takes, if it covers `stride * rows` bytes.
pub(crate) fn buffer_size(method: &'static str, len: usize, stride: u32, rows: u32) -> Result<u32, Error> {
    if (len as u64) < u64::from(stride) * u64::from(rows) {
        return Err(Error::new_hr(method, E_INVALIDARG, "buffer is smaller than stride * rows"));
    }
    u32::try_from(len).map_err(|_| Error::new_hr(method, E_INVALIDARG, "buffer is 4 GiB or larger"))
}

impl BitmapSource for Bitmap {
    fn as_source(&self) -> Result<&mcom::Rc<IWICBitmapSource>, Error> { Ok(self.as_com()?.up_ref()) }
}

impl BitmapSource for BitmapFrameDecode {
    fn as_source(&self) -> Result<&mcom::Rc<IWICBitmapSource>, Error> { Ok(self.as_com()?.up_ref()) }
}

impl BitmapSource for FormatConverter {
    fn as_source(&self) -> Result<&mcom::Rc<IWICBitmapSource>, Error> { Ok(self.as_com()?.up_ref()) }
}

impl BitmapSource for BitmapScaler {
    fn as_source(&self) -> Result<&mcom::Rc<IWICBitmapSource>, Error> { Ok(self.as_com()?.up_ref()) }
}



#[test] fn buffer_sizes() {
    assert_eq!(buffer_size("CopyPixels", 24, 12, 2).unwrap(), 24);
    assert_eq!(buffer_size("CopyPixels", 30, 12, 2).unwrap(), 30);
    assert_eq!(buffer_size("CopyPixels", 23, 12, 2).unwrap_err().hresult(), Some(E_INVALIDARG));
    assert_eq!(buffer_size("CopyPixels", 0, u32::MAX, u32::MAX).unwrap_err().hresult(), Some(E_INVALIDARG));
}

#[cfg(target_pointer_width = "64")] #[test] fn buffer_sizes_past_u32() {
    let len = u32::MAX as usize + 1;
    let err = buffer_size("CopyPixels", len, 4, 16).unwrap_err();
    assert_eq!(err.hresult(), Some(E_INVALIDARG));
    assert_eq!(buffer_size("CopyPixels", u32::MAX as usize, 4, 16).unwrap(), u32::MAX);
}
