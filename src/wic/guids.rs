//! Well known WIC GUIDs, bit-exact with `wincodec.h`

use winapi::shared::guiddef::GUID;



const fn guid(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> GUID {
    GUID { Data1: data1, Data2: data2, Data3: data3, Data4: data4 }
}

/// `GUID_ContainerFormat*`: identifies an image file format (and the codec to use for it).
pub mod container_format {
    use super::*;

    pub const BMP   : GUID = guid(0x0af1d87e, 0xfcfe, 0x4188, [0xbd, 0xeb, 0xa7, 0x90, 0x64, 0x71, 0xcb, 0xe3]);
    pub const PNG   : GUID = guid(0x1b7cfaf4, 0x713f, 0x473c, [0xbb, 0xcd, 0x61, 0x37, 0x42, 0x5f, 0xae, 0xaf]);
    pub const ICO   : GUID = guid(0xa3a860c4, 0x338f, 0x4c17, [0x91, 0x9a, 0xfb, 0xa4, 0xb5, 0x62, 0x8f, 0x21]);
    pub const JPEG  : GUID = guid(0x19e4a5aa, 0x5662, 0x4fc5, [0xa0, 0xc0, 0x17, 0x58, 0x02, 0x8e, 0x10, 0x57]);
    pub const TIFF  : GUID = guid(0x163bcc30, 0xe2e9, 0x4f0b, [0x96, 0x1d, 0xa3, 0xe9, 0xfd, 0xb7, 0x88, 0xa3]);
    pub const GIF   : GUID = guid(0x1f8a5601, 0x7d4d, 0x4cbd, [0x9c, 0x82, 0x1b, 0xc8, 0xd4, 0xee, 0xb9, 0xa5]);
    pub const WMP   : GUID = guid(0x57a37caa, 0x367a, 0x4540, [0x91, 0x6b, 0xf1, 0x83, 0xc5, 0x09, 0x3a, 0x4b]);
}

/// `GUID_WICPixelFormat*`: channel order, bit depth and alpha handling of pixel data.
///
/// Direct2D renders to and from [`PBGRA32`](pixel_format::PBGRA32).
pub mod pixel_format {
    use super::*;

    const fn native(last: u8) -> GUID { guid(0x6fddc324, 0x4e03, 0x4bfe, [0xb1, 0x85, 0x3d, 0x77, 0x76, 0x8d, 0xc9, last]) }

    pub const DONT_CARE     : GUID = native(0x00);
    pub const BLACK_WHITE   : GUID = native(0x05);
    pub const GRAY8         : GUID = native(0x08);
    pub const GRAY16        : GUID = native(0x0b);
    pub const BGR24         : GUID = native(0x0c);
    pub const RGB24         : GUID = native(0x0d);
    pub const BGR32         : GUID = native(0x0e);
    pub const BGRA32        : GUID = native(0x0f);
    /// 32bpp BGRA with premultiplied alpha
    pub const PBGRA32       : GUID = native(0x10);
    pub const RGBA64        : GUID = native(0x16);
    pub const RGBA128_FLOAT : GUID = native(0x19);
    pub const RGBA32        : GUID = guid(0xf5c7ad2d, 0x6a8d, 0x43dd, [0xa7, 0xa8, 0xa2, 0x99, 0x35, 0x26, 0x1a, 0xe9]);
    /// 32bpp RGBA with premultiplied alpha
    pub const PRGBA32       : GUID = guid(0x3cc4a650, 0xa527, 0x4d37, [0xa9, 0x16, 0x31, 0x42, 0xc7, 0xeb, 0xed, 0xba]);

    /// Bytes per pixel of the formats above, or `None` for unknown / sub-byte formats.
    pub fn bytes_per_pixel(format: &GUID) -> Option<u32> {
        use winapi::shared::guiddef::IsEqualGUID;
        let table : [(&GUID, u32); 11] = [
            (&GRAY8, 1), (&GRAY16, 2), (&BGR24, 3), (&RGB24, 3), (&BGR32, 4), (&BGRA32, 4),
            (&PBGRA32, 4), (&RGBA32, 4), (&PRGBA32, 4), (&RGBA64, 8), (&RGBA128_FLOAT, 16),
        ];
        table.iter().find(|(f, _)| IsEqualGUID(f, format)).map(|(_, bpp)| *bpp)
    }
}



#[test] fn matches_winapi() {
    use winapi::shared::guiddef::IsEqualGUID;
    use winapi::um::wincodec::*;

    assert!(IsEqualGUID(&container_format::BMP,     &GUID_ContainerFormatBmp));
    assert!(IsEqualGUID(&container_format::PNG,     &GUID_ContainerFormatPng));
    assert!(IsEqualGUID(&container_format::ICO,     &GUID_ContainerFormatIco));
    assert!(IsEqualGUID(&container_format::JPEG,    &GUID_ContainerFormatJpeg));
    assert!(IsEqualGUID(&container_format::TIFF,    &GUID_ContainerFormatTiff));
    assert!(IsEqualGUID(&container_format::GIF,     &GUID_ContainerFormatGif));
    assert!(IsEqualGUID(&container_format::WMP,     &GUID_ContainerFormatWmp));

    assert!(IsEqualGUID(&pixel_format::DONT_CARE,   &GUID_WICPixelFormatDontCare));
    assert!(IsEqualGUID(&pixel_format::GRAY8,       &GUID_WICPixelFormat8bppGray));
    assert!(IsEqualGUID(&pixel_format::BGR24,       &GUID_WICPixelFormat24bppBGR));
    assert!(IsEqualGUID(&pixel_format::BGRA32,      &GUID_WICPixelFormat32bppBGRA));
    assert!(IsEqualGUID(&pixel_format::PBGRA32,     &GUID_WICPixelFormat32bppPBGRA));
    assert!(IsEqualGUID(&pixel_format::RGBA32,      &GUID_WICPixelFormat32bppRGBA));
    assert!(IsEqualGUID(&pixel_format::PRGBA32,     &GUID_WICPixelFormat32bppPRGBA));
}

#[test] fn bytes_per_pixel() {
    assert_eq!(pixel_format::bytes_per_pixel(&pixel_format::PBGRA32),   Some(4));
    assert_eq!(pixel_format::bytes_per_pixel(&pixel_format::BGR24),     Some(3));
    assert_eq!(pixel_format::bytes_per_pixel(&pixel_format::GRAY8),     Some(1));
    assert_eq!(pixel_format::bytes_per_pixel(&container_format::PNG),   None);
}
