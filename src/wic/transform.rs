use super::*;
use crate::com::*;

use winapi::shared::guiddef::GUID;
use winapi::um::wincodec::*;

use std::ptr::null_mut;



com_wrapper! {
    /// [`IWICFormatConverter`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nn-wincodec-iwicformatconverter):
    /// a [`BitmapSource`] converting another source's pixels to a different [`pixel_format`].
    pub struct FormatConverter(IWICFormatConverter);
}

com_wrapper! {
    /// [`IWICBitmapScaler`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nn-wincodec-iwicbitmapscaler):
    /// a [`BitmapSource`] resampling another source to a different size.
    pub struct BitmapScaler(IWICBitmapScaler);
}

impl FormatConverter {
    /// [`IWICFormatConverter::Initialize`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicformatconverter-initialize)
    /// without a custom palette.  May only be called once.
    ///
    /// `alpha_threshold` is a percentage (0.0 ..= 100.0), only used when converting to a paletted format.
    pub fn initialize(&self, source: &impl BitmapSource, format: &GUID, dither: BitmapDitherType, alpha_threshold: f64, palette_type: BitmapPaletteType) -> Result<(), Error> {
        let converter = self.com("IWICFormatConverter::Initialize")?;
        let source = source.as_source()?;
        let hr = unsafe { converter.Initialize(source.as_ptr(), format, dither.0, null_mut(), alpha_threshold, palette_type.0) };
        Error::check_hr("IWICFormatConverter::Initialize", hr, "")
    }

    /// [`IWICFormatConverter::CanConvert`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicformatconverter-canconvert)
    pub fn can_convert(&self, src: &GUID, dst: &GUID) -> Result<bool, Error> {
        let converter = self.com("IWICFormatConverter::CanConvert")?;
        let mut can = 0;
        let hr = unsafe { converter.CanConvert(src, dst, &mut can) };
        Error::check_hr("IWICFormatConverter::CanConvert", hr, "")?;
        Ok(can != 0)
    }
}

impl BitmapScaler {
    /// [`IWICBitmapScaler::Initialize`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicbitmapscaler-initialize).
    /// May only be called once.
    pub fn initialize(&self, source: &impl BitmapSource, width: u32, height: u32, mode: BitmapInterpolationMode) -> Result<(), Error> {
        let scaler = self.com("IWICBitmapScaler::Initialize")?;
        let source = source.as_source()?;
        let hr = unsafe { scaler.Initialize(source.as_ptr(), width, height, mode.0) };
        Error::check_hr("IWICBitmapScaler::Initialize", hr, "")
    }
}



#[test] fn convert_and_scale() {
    let _com = initialize(Apartment::MultiThreaded).unwrap();
    let wic = ImagingFactory::create().unwrap();
    let bgr = [0x10u8, 0x20, 0x30, 0x40, 0x50, 0x60];
    let source = wic.create_bitmap_from_memory(2, 1, &pixel_format::BGR24, 6, &bgr[..]).unwrap();

    let converter = wic.create_format_converter().unwrap();
    assert!(converter.can_convert(&pixel_format::BGR24, &pixel_format::BGRA32).unwrap());
    converter.initialize(&source, &pixel_format::BGRA32, BitmapDitherType::NONE, 0.0, BitmapPaletteType::CUSTOM).unwrap();
    assert_eq!(converter.size().unwrap(), (2, 1));
    assert!(winapi::shared::guiddef::IsEqualGUID(&converter.pixel_format().unwrap(), &pixel_format::BGRA32));
    assert_eq!(converter.to_vec(8).unwrap(), vec![0x10, 0x20, 0x30, 0xFF, 0x40, 0x50, 0x60, 0xFF]);

    let scaler = wic.create_bitmap_scaler().unwrap();
    scaler.initialize(&converter, 4, 2, BitmapInterpolationMode::NEAREST_NEIGHBOR).unwrap();
    assert_eq!(scaler.size().unwrap(), (4, 2));
    let scaled = scaler.to_vec(16).unwrap();
    assert_eq!(&scaled[..4],    &[0x10, 0x20, 0x30, 0xFF]);
    assert_eq!(&scaled[28..],   &[0x40, 0x50, 0x60, 0xFF]);
}

#[test] fn uninitialized_converter() {
    let _com = initialize(Apartment::MultiThreaded).unwrap();
    let wic = ImagingFactory::create().unwrap();
    let mut converter = wic.create_format_converter().unwrap();
    assert!(converter.size().is_err());

    converter.dispose();
    assert!(converter.can_convert(&pixel_format::BGR24, &pixel_format::BGRA32).unwrap_err().is_disposed());
    assert!(converter.size().unwrap_err().is_disposed());
}
