use super::*;
use crate::com::*;
#[cfg(test)] use crate::com::E_INVALIDARG;
use super::source::buffer_size;
use crate::utility::path_to_wide_nul;

use winapi::Interface;
use winapi::shared::guiddef::GUID;
use winapi::shared::wtypesbase::CLSCTX_INPROC_SERVER;
use winapi::um::combaseapi::CoCreateInstance;
use winapi::um::wincodec::*;

use std::path::Path;
use std::ptr::{null, null_mut};



com_wrapper! {
    /// [`IWICImagingFactory`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nn-wincodec-iwicimagingfactory):
    /// creates every other WIC object.
    pub struct ImagingFactory(IWICImagingFactory);
}

impl ImagingFactory {
    /// `CoCreateInstance(CLSID_WICImagingFactory, ...)`
    ///
    /// COM must already be initialized on this thread (see [`com::initialize`](crate::com::initialize)),
    /// otherwise this fails with `CO_E_NOTINITIALIZED`.
    #[tracing::instrument(level = "debug")]
    pub fn create() -> Result<Self, Error> {
        let mut factory = null_mut();
        let hr = unsafe { CoCreateInstance(&CLSID_WICImagingFactory, null_mut(), CLSCTX_INPROC_SERVER, &IWICImagingFactory::uuidof(), &mut factory) };
        let factory = unsafe { mcom::Rc::from_raw_opt(factory as *mut IWICImagingFactory) };
        let factory = factory.ok_or_else(|| Error::null("CoCreateInstance", hr, "IWICImagingFactory is null"))?;
        tracing::debug!("created IWICImagingFactory");
        Ok(Self::from_com(factory))
    }

    /// [`IWICImagingFactory::CreateDecoderFromFilename`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicimagingfactory-createdecoderfromfilename)
    ///
    /// The container format is sniffed from the file contents.
    pub fn create_decoder_from_filename(&self, path: impl AsRef<Path>, access: DesiredAccess, options: DecodeOptions) -> Result<BitmapDecoder, Error> {
        let factory = self.com("IWICImagingFactory::CreateDecoderFromFilename")?;
        let path = path_to_wide_nul(path.as_ref());
        let mut decoder = null_mut();
        let hr = unsafe { factory.CreateDecoderFromFilename(path.as_ptr(), null(), access.bits(), options.0, &mut decoder) };
        let decoder = unsafe { BitmapDecoder::from_raw(decoder) };
        decoder.ok_or_else(|| Error::null("IWICImagingFactory::CreateDecoderFromFilename", hr, "IWICBitmapDecoder is null"))
    }

    /// [`IWICImagingFactory::CreateDecoderFromStream`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicimagingfactory-createdecoderfromstream)
    pub fn create_decoder_from_stream(&self, stream: &Stream, options: DecodeOptions) -> Result<BitmapDecoder, Error> {
        let factory = self.com("IWICImagingFactory::CreateDecoderFromStream")?;
        let stream = stream.as_stream()?;
        let mut decoder = null_mut();
        let hr = unsafe { factory.CreateDecoderFromStream(stream.as_ptr(), null(), options.0, &mut decoder) };
        let decoder = unsafe { BitmapDecoder::from_raw(decoder) };
        decoder.ok_or_else(|| Error::null("IWICImagingFactory::CreateDecoderFromStream", hr, "IWICBitmapDecoder is null"))
    }

    /// [`IWICImagingFactory::CreateFormatConverter`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicimagingfactory-createformatconverter)
    pub fn create_format_converter(&self) -> Result<FormatConverter, Error> {
        let factory = self.com("IWICImagingFactory::CreateFormatConverter")?;
        let mut converter = null_mut();
        let hr = unsafe { factory.CreateFormatConverter(&mut converter) };
        let converter = unsafe { FormatConverter::from_raw(converter) };
        converter.ok_or_else(|| Error::null("IWICImagingFactory::CreateFormatConverter", hr, "IWICFormatConverter is null"))
    }

    /// [`IWICImagingFactory::CreateBitmapScaler`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicimagingfactory-createbitmapscaler)
    pub fn create_bitmap_scaler(&self) -> Result<BitmapScaler, Error> {
        let factory = self.com("IWICImagingFactory::CreateBitmapScaler")?;
        let mut scaler = null_mut();
        let hr = unsafe { factory.CreateBitmapScaler(&mut scaler) };
        let scaler = unsafe { BitmapScaler::from_raw(scaler) };
        scaler.ok_or_else(|| Error::null("IWICImagingFactory::CreateBitmapScaler", hr, "IWICBitmapScaler is null"))
    }

    /// [`IWICImagingFactory::CreateBitmap`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicimagingfactory-createbitmap):
    /// a new, zero filled bitmap.
    pub fn create_bitmap(&self, width: u32, height: u32, format: &GUID, cache: BitmapCreateCacheOption) -> Result<Bitmap, Error> {
        let factory = self.com("IWICImagingFactory::CreateBitmap")?;
        let mut bitmap = null_mut();
        let hr = unsafe { factory.CreateBitmap(width, height, format, cache.0, &mut bitmap) };
        let bitmap = unsafe { Bitmap::from_raw(bitmap) };
        bitmap.ok_or_else(|| Error::null("IWICImagingFactory::CreateBitmap", hr, "IWICBitmap is null"))
    }

    /// [`IWICImagingFactory::CreateBitmapFromMemory`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicimagingfactory-createbitmapfrommemory):
    /// a new bitmap holding a copy of `pixels`.
    ///
    /// Fails with `E_INVALIDARG` without calling into WIC if `pixels` can't hold `stride * height` bytes, or is 4 GiB or larger.
    pub fn create_bitmap_from_memory(&self, width: u32, height: u32, format: &GUID, stride: u32, pixels: &[u8]) -> Result<Bitmap, Error> {
        let factory = self.com("IWICImagingFactory::CreateBitmapFromMemory")?;
        let size = buffer_size("IWICImagingFactory::CreateBitmapFromMemory", pixels.len(), stride, height)?;
        let mut bitmap = null_mut();
        // WIC copies out of, but never writes to, pbBuffer
        let hr = unsafe { factory.CreateBitmapFromMemory(width, height, format, stride, size, pixels.as_ptr() as *mut _, &mut bitmap) };
        let bitmap = unsafe { Bitmap::from_raw(bitmap) };
        bitmap.ok_or_else(|| Error::null("IWICImagingFactory::CreateBitmapFromMemory", hr, "IWICBitmap is null"))
    }

    /// [`IWICImagingFactory::CreateBitmapFromSource`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicimagingfactory-createbitmapfromsource):
    /// a lockable bitmap with `source`'s size, format and pixels.
    pub fn create_bitmap_from_source(&self, source: &impl BitmapSource, cache: BitmapCreateCacheOption) -> Result<Bitmap, Error> {
        let factory = self.com("IWICImagingFactory::CreateBitmapFromSource")?;
        let source = source.as_source()?;
        let mut bitmap = null_mut();
        let hr = unsafe { factory.CreateBitmapFromSource(source.as_ptr(), cache.0, &mut bitmap) };
        let bitmap = unsafe { Bitmap::from_raw(bitmap) };
        bitmap.ok_or_else(|| Error::null("IWICImagingFactory::CreateBitmapFromSource", hr, "IWICBitmap is null"))
    }

    /// [`IWICImagingFactory::CreateStream`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicimagingfactory-createstream):
    /// an uninitialized stream.
    pub fn create_stream(&self) -> Result<Stream, Error> {
        let factory = self.com("IWICImagingFactory::CreateStream")?;
        let mut stream = null_mut();
        let hr = unsafe { factory.CreateStream(&mut stream) };
        let stream = unsafe { Stream::from_raw(stream) };
        stream.ok_or_else(|| Error::null("IWICImagingFactory::CreateStream", hr, "IWICStream is null"))
    }

    /// [`IWICImagingFactory::CreateEncoder`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicimagingfactory-createencoder)
    /// for one of the [`container_format`]s.
    pub fn create_encoder(&self, container: &GUID) -> Result<BitmapEncoder, Error> {
        let factory = self.com("IWICImagingFactory::CreateEncoder")?;
        let mut encoder = null_mut();
        let hr = unsafe { factory.CreateEncoder(container, null(), &mut encoder) };
        let encoder = unsafe { BitmapEncoder::from_raw(encoder) };
        encoder.ok_or_else(|| Error::null("IWICImagingFactory::CreateEncoder", hr, "IWICBitmapEncoder is null"))
    }
}



#[test] fn create_bitmaps() {
    let _com = initialize(Apartment::MultiThreaded).unwrap();
    let wic = ImagingFactory::create().unwrap();

    let bitmap = wic.create_bitmap(3, 2, &pixel_format::BGRA32, BitmapCreateCacheOption::CACHE_ON_LOAD).unwrap();
    assert_eq!(bitmap.size().unwrap(), (3, 2));
    assert!(winapi::shared::guiddef::IsEqualGUID(&bitmap.pixel_format().unwrap(), &pixel_format::BGRA32));
    assert_eq!(bitmap.to_vec(12).unwrap().len(), 24);

    let pixels = (0 .. 6).collect::<Vec<u8>>();
    let gray = wic.create_bitmap_from_memory(3, 2, &pixel_format::GRAY8, 3, &pixels[..]).unwrap();
    assert_eq!(gray.to_vec(3).unwrap(), pixels);
    assert_eq!(gray.to_vec(4).unwrap(), vec![0, 1, 2, 0, 3, 4, 5, 0]);

    let mut row = [0u8; 3];
    gray.copy_pixels(Some(Rect::new(0, 1, 3, 1)), 3, &mut row[..]).unwrap();
    assert_eq!(row, [3, 4, 5]);
    let err = gray.copy_pixels(None, 3, &mut row[..]).unwrap_err();
    assert_eq!(err.hresult(), Some(E_INVALIDARG));

    let err = wic.create_bitmap_from_memory(3, 2, &pixel_format::GRAY8, 3, &pixels[..5]).map(|_| ()).unwrap_err();
    assert_eq!(err.hresult(), Some(E_INVALIDARG));

    let copy = wic.create_bitmap_from_source(&gray, BitmapCreateCacheOption::CACHE_ON_LOAD).unwrap();
    assert_eq!(copy.to_vec(3).unwrap(), pixels);
}

#[test] fn disposed_factory() {
    let _com = initialize(Apartment::MultiThreaded).unwrap();
    let mut wic = ImagingFactory::create().unwrap();
    wic.dispose();
    wic.dispose();
    assert!(wic.create_stream().map(|_| ()).unwrap_err().is_disposed());
    assert!(wic.create_format_converter().map(|_| ()).unwrap_err().is_disposed());
    assert!(wic.create_bitmap(1, 1, &pixel_format::PBGRA32, BitmapCreateCacheOption::NO_CACHE).map(|_| ()).unwrap_err().is_disposed());
}
