use super::*;
use crate::com::*;
#[cfg(test)] use crate::com::E_INVALIDARG;
use super::source::buffer_size;

use winapi::shared::guiddef::GUID;
use winapi::um::wincodec::*;

use std::ptr::null_mut;



com_wrapper! {
    /// [`IWICBitmapEncoder`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nn-wincodec-iwicbitmapencoder):
    /// writes frames into a [`Stream`] in one [`container_format`].
    pub struct BitmapEncoder(IWICBitmapEncoder);
}

com_wrapper! {
    /// [`IWICBitmapFrameEncode`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nn-wincodec-iwicbitmapframeencode)
    pub struct BitmapFrameEncode(IWICBitmapFrameEncode);
}

impl BitmapEncoder {
    /// [`IWICBitmapEncoder::Initialize`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicbitmapencoder-initialize)
    pub fn initialize(&self, stream: &Stream, cache: BitmapEncoderCacheOption) -> Result<(), Error> {
        let encoder = self.com("IWICBitmapEncoder::Initialize")?;
        let stream = stream.as_stream()?;
        let hr = unsafe { encoder.Initialize(stream.as_ptr(), cache.0) };
        Error::check_hr("IWICBitmapEncoder::Initialize", hr, "")
    }

    /// [`IWICBitmapEncoder::GetContainerFormat`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicbitmapencoder-getcontainerformat)
    pub fn container_format(&self) -> Result<GUID, Error> {
        let encoder = self.com("IWICBitmapEncoder::GetContainerFormat")?;
        let mut format = pixel_format::DONT_CARE;
        let hr = unsafe { encoder.GetContainerFormat(&mut format) };
        Error::check_hr("IWICBitmapEncoder::GetContainerFormat", hr, "")?;
        Ok(format)
    }

    /// [`IWICBitmapEncoder::CreateNewFrame`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicbitmapencoder-createnewframe)
    ///
    /// The encoder options property bag is released immediately, so frames always encode with the codec's defaults.
    pub fn create_new_frame(&self) -> Result<BitmapFrameEncode, Error> {
        let encoder = self.com("IWICBitmapEncoder::CreateNewFrame")?;
        let mut frame = null_mut();
        let mut options = null_mut();
        let hr = unsafe { encoder.CreateNewFrame(&mut frame, &mut options) };
        drop(unsafe { mcom::Rc::from_raw_opt(options) });
        let frame = unsafe { BitmapFrameEncode::from_raw(frame) };
        frame.ok_or_else(|| Error::null("IWICBitmapEncoder::CreateNewFrame", hr, "IWICBitmapFrameEncode is null"))
    }

    /// [`IWICBitmapEncoder::Commit`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicbitmapencoder-commit):
    /// finish the file.  Every frame must have been committed first.
    pub fn commit(&self) -> Result<(), Error> {
        let encoder = self.com("IWICBitmapEncoder::Commit")?;
        let hr = unsafe { encoder.Commit() };
        Error::check_hr("IWICBitmapEncoder::Commit", hr, "")
    }
}

impl BitmapFrameEncode {
    /// [`IWICBitmapFrameEncode::Initialize`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicbitmapframeencode-initialize)
    /// with default encoder options.
    pub fn initialize(&self) -> Result<(), Error> {
        let frame = self.com("IWICBitmapFrameEncode::Initialize")?;
        let hr = unsafe { frame.Initialize(null_mut()) };
        Error::check_hr("IWICBitmapFrameEncode::Initialize", hr, "")
    }

    /// [`IWICBitmapFrameEncode::SetSize`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicbitmapframeencode-setsize)
    pub fn set_size(&self, width: u32, height: u32) -> Result<(), Error> {
        let frame = self.com("IWICBitmapFrameEncode::SetSize")?;
        let hr = unsafe { frame.SetSize(width, height) };
        Error::check_hr("IWICBitmapFrameEncode::SetSize", hr, "")
    }

    /// [`IWICBitmapFrameEncode::SetResolution`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicbitmapframeencode-setresolution)
    pub fn set_resolution(&self, dpi_x: f64, dpi_y: f64) -> Result<(), Error> {
        let frame = self.com("IWICBitmapFrameEncode::SetResolution")?;
        let hr = unsafe { frame.SetResolution(dpi_x, dpi_y) };
        Error::check_hr("IWICBitmapFrameEncode::SetResolution", hr, "")
    }

    /// [`IWICBitmapFrameEncode::SetPixelFormat`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicbitmapframeencode-setpixelformat):
    /// request `format`, returning the closest format the codec supports.
    /// Pixels passed to [`write_pixels`](Self::write_pixels) must be in the returned format.
    pub fn set_pixel_format(&self, format: &GUID) -> Result<GUID, Error> {
        let frame = self.com("IWICBitmapFrameEncode::SetPixelFormat")?;
        let mut format = *format;
        let hr = unsafe { frame.SetPixelFormat(&mut format) };
        Error::check_hr("IWICBitmapFrameEncode::SetPixelFormat", hr, "")?;
        Ok(format)
    }

    /// [`IWICBitmapFrameEncode::WritePixels`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicbitmapframeencode-writepixels)
    /// of `lines` rows, `stride` bytes apart.  May be called repeatedly to append rows.
    ///
    /// Fails with `E_INVALIDARG` without calling into WIC if `pixels` can't hold `stride * lines` bytes, or is 4 GiB or larger.
    pub fn write_pixels(&self, lines: u32, stride: u32, pixels: &[u8]) -> Result<(), Error> {
        let frame = self.com("IWICBitmapFrameEncode::WritePixels")?;
        let size = buffer_size("IWICBitmapFrameEncode::WritePixels", pixels.len(), stride, lines)?;
        // the encoder only reads from pbPixels
        let hr = unsafe { frame.WritePixels(lines, stride, size, pixels.as_ptr() as *mut _) };
        Error::check_hr("IWICBitmapFrameEncode::WritePixels", hr, "")
    }

    /// [`IWICBitmapFrameEncode::WriteSource`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicbitmapframeencode-writesource)
    /// of `rect` (or all) of `source`, converting pixel formats as needed.
    pub fn write_source(&self, source: &impl BitmapSource, rect: Option<Rect>) -> Result<(), Error> {
        let frame = self.com("IWICBitmapFrameEncode::WriteSource")?;
        let source = source.as_source()?;
        let mut rect = rect.map(WICRect::from);
        let prc = rect.as_mut().map_or(null_mut(), |r| r as *mut _);
        let hr = unsafe { frame.WriteSource(source.as_ptr(), prc) };
        Error::check_hr("IWICBitmapFrameEncode::WriteSource", hr, "")
    }

    /// [`IWICBitmapFrameEncode::Commit`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicbitmapframeencode-commit)
    pub fn commit(&self) -> Result<(), Error> {
        let frame = self.com("IWICBitmapFrameEncode::Commit")?;
        let hr = unsafe { frame.Commit() };
        Error::check_hr("IWICBitmapFrameEncode::Commit", hr, "")
    }
}



#[cfg(test)] fn temp_png(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("dxbind-{}-{}.png", name, std::process::id()))
}

#[test] fn png_round_trip_through_file() {
    use winapi::shared::guiddef::IsEqualGUID;

    let _com = initialize(Apartment::MultiThreaded).unwrap();
    let wic = ImagingFactory::create().unwrap();
    let path = temp_png("round-trip");
    let pixels : Vec<u8> = (0 .. 3 * 2).flat_map(|i| [i as u8 * 10, 0x80, 0xFF - i as u8, 0xFF]).collect();

    {
        let stream = wic.create_stream().unwrap();
        stream.initialize_from_filename(&path, DesiredAccess::GENERIC_WRITE).unwrap();
        let encoder = wic.create_encoder(&container_format::PNG).unwrap();
        encoder.initialize(&stream, BitmapEncoderCacheOption::NO_CACHE).unwrap();
        assert!(IsEqualGUID(&encoder.container_format().unwrap(), &container_format::PNG));

        let frame = encoder.create_new_frame().unwrap();
        frame.initialize().unwrap();
        frame.set_size(3, 2).unwrap();
        frame.set_resolution(96.0, 96.0).unwrap();
        let format = frame.set_pixel_format(&pixel_format::BGRA32).unwrap();
        assert!(IsEqualGUID(&format, &pixel_format::BGRA32));
        frame.write_pixels(1, 12, &pixels[..12]).unwrap();
        frame.write_pixels(1, 12, &pixels[12..]).unwrap();
        assert_eq!(frame.write_pixels(1, 12, &pixels[..4]).unwrap_err().hresult(), Some(E_INVALIDARG));
        frame.commit().unwrap();
        encoder.commit().unwrap();
    }

    let decoder = wic.create_decoder_from_filename(&path, DesiredAccess::GENERIC_READ, DecodeOptions::METADATA_CACHE_ON_DEMAND).unwrap();
    assert!(IsEqualGUID(&decoder.container_format().unwrap(), &container_format::PNG));
    assert_eq!(decoder.frame_count().unwrap(), 1);
    assert!(decoder.frame(1).is_err());
    let frame = decoder.frame(0).unwrap();
    assert_eq!(frame.size().unwrap(), (3, 2));

    let converter = wic.create_format_converter().unwrap();
    converter.initialize(&frame, &pixel_format::BGRA32, BitmapDitherType::NONE, 0.0, BitmapPaletteType::CUSTOM).unwrap();
    assert_eq!(converter.to_vec(12).unwrap(), pixels);

    drop((converter, frame, decoder));
    let _ = std::fs::remove_file(&path);
}

#[test] fn decode_from_memory_and_rewrite() {
    let _com = initialize(Apartment::MultiThreaded).unwrap();
    let wic = ImagingFactory::create().unwrap();
    let path = temp_png("memory");

    {
        let gray = [0x00u8, 0x40, 0x80, 0xC0];
        let source = wic.create_bitmap_from_memory(2, 2, &pixel_format::GRAY8, 2, &gray[..]).unwrap();
        let stream = wic.create_stream().unwrap();
        stream.initialize_from_filename(&path, DesiredAccess::GENERIC_WRITE).unwrap();
        let encoder = wic.create_encoder(&container_format::PNG).unwrap();
        encoder.initialize(&stream, BitmapEncoderCacheOption::NO_CACHE).unwrap();
        let frame = encoder.create_new_frame().unwrap();
        frame.initialize().unwrap();
        frame.write_source(&source, None).unwrap();
        frame.commit().unwrap();
        encoder.commit().unwrap();
    }

    let bytes : &'static mut [u8] = Box::leak(std::fs::read(&path).unwrap().into_boxed_slice());
    let _ = std::fs::remove_file(&path);
    let stream = wic.create_stream().unwrap();
    stream.initialize_from_memory(bytes).unwrap();
    let decoder = wic.create_decoder_from_stream(&stream, DecodeOptions::METADATA_CACHE_ON_LOAD).unwrap();
    let frame = decoder.frame(0).unwrap();
    assert_eq!(frame.size().unwrap(), (2, 2));

    let converter = wic.create_format_converter().unwrap();
    converter.initialize(&frame, &pixel_format::GRAY8, BitmapDitherType::NONE, 0.0, BitmapPaletteType::CUSTOM).unwrap();
    assert_eq!(converter.to_vec(2).unwrap(), vec![0x00, 0x40, 0x80, 0xC0]);
}

#[test] fn disposed_encoder() {
    let _com = initialize(Apartment::MultiThreaded).unwrap();
    let wic = ImagingFactory::create().unwrap();
    let mut stream = wic.create_stream().unwrap();
    let mut encoder = wic.create_encoder(&container_format::BMP).unwrap();

    stream.dispose();
    assert!(stream.as_stream().is_err());
    assert!(encoder.initialize(&stream, BitmapEncoderCacheOption::NO_CACHE).unwrap_err().is_disposed());

    encoder.dispose();
    encoder.dispose();
    assert!(encoder.commit().unwrap_err().is_disposed());
    assert!(encoder.create_new_frame().map(|_| ()).unwrap_err().is_disposed());
}
