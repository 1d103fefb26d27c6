//! Windows Imaging Component constant sets, bit-exact with `wincodec.h`

native_enum! {
    /// [`WICDecodeOptions`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/ne-wincodec-wicdecodeoptions)
    pub struct DecodeOptions(u32);
    METADATA_CACHE_ON_DEMAND    = 0,
    METADATA_CACHE_ON_LOAD      = 1,
}

native_enum! {
    /// [`WICBitmapDitherType`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/ne-wincodec-wicbitmapdithertype)
    pub struct BitmapDitherType(u32);
    NONE                        = 0,
    SOLID                       = 0,
    ORDERED_4X4                 = 1,
    ORDERED_8X8                 = 2,
    ORDERED_16X16               = 3,
    SPIRAL_4X4                  = 4,
    SPIRAL_8X8                  = 5,
    DUAL_SPIRAL_4X4             = 6,
    DUAL_SPIRAL_8X8             = 7,
    ERROR_DIFFUSION             = 8,
}

native_enum! {
    /// [`WICBitmapPaletteType`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/ne-wincodec-wicbitmappalettetype)
    pub struct BitmapPaletteType(u32);
    CUSTOM                      = 0,
    MEDIAN_CUT                  = 1,
    FIXED_BW                    = 2,
    FIXED_HALFTONE_8            = 3,
    FIXED_HALFTONE_27           = 4,
    FIXED_HALFTONE_64           = 5,
    FIXED_HALFTONE_125          = 6,
    FIXED_HALFTONE_216          = 7,
    FIXED_WEB_PALETTE           = 7,
    FIXED_HALFTONE_252          = 8,
    FIXED_HALFTONE_256          = 9,
    FIXED_GRAY_4                = 10,
    FIXED_GRAY_16               = 11,
    FIXED_GRAY_256              = 12,
}

native_enum! {
    /// [`WICBitmapCreateCacheOption`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/ne-wincodec-wicbitmapcreatecacheoption)
    pub struct BitmapCreateCacheOption(u32);
    NO_CACHE                    = 0,
    CACHE_ON_DEMAND             = 1,
    CACHE_ON_LOAD               = 2,
}

native_enum! {
    /// [`WICBitmapEncoderCacheOption`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/ne-wincodec-wicbitmapencodercacheoption)
    pub struct BitmapEncoderCacheOption(u32);
    CACHE_IN_MEMORY             = 0,
    CACHE_TEMP_FILE             = 1,
    NO_CACHE                    = 2,
}

native_enum! {
    /// [`WICBitmapInterpolationMode`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/ne-wincodec-wicbitmapinterpolationmode)
    pub struct BitmapInterpolationMode(u32);
    NEAREST_NEIGHBOR            = 0,
    LINEAR                      = 1,
    CUBIC                       = 2,
    FANT                        = 3,
    /// Windows 10+
    HIGH_QUALITY_CUBIC          = 4,
}

native_flags! {
    /// [`WICBitmapLockFlags`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/ne-wincodec-wicbitmaplockflags)
    pub struct BitmapLockFlags(u32);
    READ                        = 1,
    WRITE                       = 2,
}

native_flags! {
    /// `dwDesiredAccess` of [`IWICImagingFactory::CreateDecoderFromFilename`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicimagingfactory-createdecoderfromfilename)
    /// and [`IWICStream::InitializeFromFilename`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicstream-initializefromfilename)
    pub struct DesiredAccess(u32);
    GENERIC_READ                = 0x8000_0000,
    GENERIC_WRITE               = 0x4000_0000,
}



#[test] fn values() {
    assert_eq!(DecodeOptions::METADATA_CACHE_ON_LOAD.raw(),         1);
    assert_eq!(BitmapDitherType::NONE,                              BitmapDitherType::SOLID);
    assert_eq!(BitmapDitherType::ERROR_DIFFUSION.raw(),             8);
    assert_eq!(BitmapPaletteType::FIXED_WEB_PALETTE,                BitmapPaletteType::FIXED_HALFTONE_216);
    assert_eq!(BitmapPaletteType::FIXED_GRAY_256.raw(),             12);
    assert_eq!(BitmapCreateCacheOption::CACHE_ON_LOAD.raw(),        2);
    assert_eq!(BitmapEncoderCacheOption::NO_CACHE.raw(),            2);
    assert_eq!(BitmapInterpolationMode::FANT.raw(),                 3);
    assert_eq!((BitmapLockFlags::READ | BitmapLockFlags::WRITE).bits(), 3);
    assert_eq!((DesiredAccess::GENERIC_READ | DesiredAccess::GENERIC_WRITE).bits(), 0xC000_0000);

    assert_eq!(format!("{:?}", BitmapDitherType::SOLID),            "BitmapDitherType::NONE");
    assert_eq!(format!("{:?}", BitmapLockFlags::READ | BitmapLockFlags::WRITE), "BitmapLockFlags(READ | WRITE)");
}

#[cfg(windows)] #[test] fn matches_winapi() {
    use winapi::um::wincodec::*;
    use winapi::um::winnt::{GENERIC_READ, GENERIC_WRITE};

    assert_eq!(DecodeOptions::METADATA_CACHE_ON_DEMAND.raw(),       WICDecodeMetadataCacheOnDemand);
    assert_eq!(BitmapDitherType::ORDERED_8X8.raw(),                 WICBitmapDitherTypeOrdered8x8);
    assert_eq!(BitmapDitherType::ERROR_DIFFUSION.raw(),             WICBitmapDitherTypeErrorDiffusion);
    assert_eq!(BitmapPaletteType::MEDIAN_CUT.raw(),                 WICBitmapPaletteTypeMedianCut);
    assert_eq!(BitmapPaletteType::FIXED_GRAY_16.raw(),              WICBitmapPaletteTypeFixedGray16);
    assert_eq!(BitmapCreateCacheOption::CACHE_ON_DEMAND.raw(),      WICBitmapCacheOnDemand);
    assert_eq!(BitmapEncoderCacheOption::CACHE_TEMP_FILE.raw(),     WICBitmapEncoderCacheTempFile);
    assert_eq!(BitmapInterpolationMode::CUBIC.raw(),                WICBitmapInterpolationModeCubic);
    assert_eq!(BitmapLockFlags::WRITE.bits(),                       WICBitmapLockWrite);
    assert_eq!(DesiredAccess::GENERIC_READ.bits(),                  GENERIC_READ);
    assert_eq!(DesiredAccess::GENERIC_WRITE.bits(),                 GENERIC_WRITE);
}
