//! DXGI constant sets, bit-exact with `dxgiformat.h`, `dxgitype.h` and `dxgi.h`

native_enum! {
    /// [`DXGI_FORMAT`](https://docs.microsoft.com/en-us/windows/win32/api/dxgiformat/ne-dxgiformat-dxgi_format)
    pub struct Format(u32);
    UNKNOWN                     = 0,
    R32G32B32A32_TYPELESS       = 1,
    R32G32B32A32_FLOAT          = 2,
    R32G32B32A32_UINT           = 3,
    R32G32B32A32_SINT           = 4,
    R32G32B32_TYPELESS          = 5,
    R32G32B32_FLOAT             = 6,
    R32G32B32_UINT              = 7,
    R32G32B32_SINT              = 8,
    R16G16B16A16_TYPELESS       = 9,
    R16G16B16A16_FLOAT          = 10,
    R16G16B16A16_UNORM          = 11,
    R16G16B16A16_UINT           = 12,
    R16G16B16A16_SNORM          = 13,
    R16G16B16A16_SINT           = 14,
    R32G32_TYPELESS             = 15,
    R32G32_FLOAT                = 16,
    R32G32_UINT                 = 17,
    R32G32_SINT                 = 18,
    R32G8X24_TYPELESS           = 19,
    D32_FLOAT_S8X24_UINT        = 20,
    R32_FLOAT_X8X24_TYPELESS    = 21,
    X32_TYPELESS_G8X24_UINT     = 22,
    R10G10B10A2_TYPELESS        = 23,
    R10G10B10A2_UNORM           = 24,
    R10G10B10A2_UINT            = 25,
    R11G11B10_FLOAT             = 26,
    R8G8B8A8_TYPELESS           = 27,
    R8G8B8A8_UNORM              = 28,
    R8G8B8A8_UNORM_SRGB         = 29,
    R8G8B8A8_UINT               = 30,
    R8G8B8A8_SNORM              = 31,
    R8G8B8A8_SINT               = 32,
    R16G16_TYPELESS             = 33,
    R16G16_FLOAT                = 34,
    R16G16_UNORM                = 35,
    R16G16_UINT                 = 36,
    R16G16_SNORM                = 37,
    R16G16_SINT                 = 38,
    R32_TYPELESS                = 39,
    D32_FLOAT                   = 40,
    R32_FLOAT                   = 41,
    R32_UINT                    = 42,
    R32_SINT                    = 43,
    R24G8_TYPELESS              = 44,
    D24_UNORM_S8_UINT           = 45,
    R24_UNORM_X8_TYPELESS       = 46,
    X24_TYPELESS_G8_UINT        = 47,
    R8G8_TYPELESS               = 48,
    R8G8_UNORM                  = 49,
    R8G8_UINT                   = 50,
    R8G8_SNORM                  = 51,
    R8G8_SINT                   = 52,
    R16_TYPELESS                = 53,
    R16_FLOAT                   = 54,
    D16_UNORM                   = 55,
    R16_UNORM                   = 56,
    R16_UINT                    = 57,
    R16_SNORM                   = 58,
    R16_SINT                    = 59,
    R8_TYPELESS                 = 60,
    R8_UNORM                    = 61,
    R8_UINT                     = 62,
    R8_SNORM                    = 63,
    R8_SINT                     = 64,
    A8_UNORM                    = 65,
    R1_UNORM                    = 66,
    R9G9B9E5_SHAREDEXP          = 67,
    R8G8_B8G8_UNORM             = 68,
    G8R8_G8B8_UNORM             = 69,
    BC1_TYPELESS                = 70,
    BC1_UNORM                   = 71,
    BC1_UNORM_SRGB              = 72,
    BC2_TYPELESS                = 73,
    BC2_UNORM                   = 74,
    BC2_UNORM_SRGB              = 75,
    BC3_TYPELESS                = 76,
    BC3_UNORM                   = 77,
    BC3_UNORM_SRGB              = 78,
    BC4_TYPELESS                = 79,
    BC4_UNORM                   = 80,
    BC4_SNORM                   = 81,
    BC5_TYPELESS                = 82,
    BC5_UNORM                   = 83,
    BC5_SNORM                   = 84,
    B5G6R5_UNORM                = 85,
    B5G5R5A1_UNORM              = 86,
    B8G8R8A8_UNORM              = 87,
    B8G8R8X8_UNORM              = 88,
    R10G10B10_XR_BIAS_A2_UNORM  = 89,
    B8G8R8A8_TYPELESS           = 90,
    B8G8R8A8_UNORM_SRGB         = 91,
    B8G8R8X8_TYPELESS           = 92,
    B8G8R8X8_UNORM_SRGB         = 93,
    BC6H_TYPELESS               = 94,
    BC6H_UF16                   = 95,
    BC6H_SF16                   = 96,
    BC7_TYPELESS                = 97,
    BC7_UNORM                   = 98,
    BC7_UNORM_SRGB              = 99,
    AYUV                        = 100,
    Y410                        = 101,
    Y416                        = 102,
    NV12                        = 103,
    P010                        = 104,
    P016                        = 105,
    OPAQUE_420                  = 106,
    YUY2                        = 107,
    Y210                        = 108,
    Y216                        = 109,
    NV11                        = 110,
    AI44                        = 111,
    IA44                        = 112,
    P8                          = 113,
    A8P8                        = 114,
    B4G4R4A4_UNORM              = 115,
}

impl Format {
    /// `BC1` ..= `BC7`: 4x4 texel blocks, so one row of blocks covers four rows of texels.
    pub fn is_block_compressed(self) -> bool {
        (Self::BC1_TYPELESS.0 ..= Self::BC5_SNORM.0).contains(&self.0) ||
        (Self::BC6H_TYPELESS.0 ..= Self::BC7_UNORM_SRGB.0).contains(&self.0)
    }

    /// Bits per texel, or per 4x4 block for block compressed formats.
    ///
    /// `None` for `UNKNOWN`, `R1_UNORM`, the 2-texel packed formats (`R8G8_B8G8`, `YUY2`, ...) and planar or palettized video formats.
    pub fn bits_per_element(self) -> Option<u32> {
        match self.0 {
            1   ..= 4                           => Some(128),   // R32G32B32A32
            5   ..= 8                           => Some(96),    // R32G32B32
            9   ..= 22                          => Some(64),    // R16G16B16A16, R32G32, R32G8X24
            23  ..= 47                          => Some(32),
            48  ..= 59                          => Some(16),    // R8G8, R16
            60  ..= 65                          => Some(8),     // R8, A8
            67                                  => Some(32),    // R9G9B9E5
            70  ..= 72 | 79 ..= 81              => Some(64),    // BC1, BC4
            73  ..= 78 | 82 ..= 84 | 94 ..= 99  => Some(128),   // BC2, BC3, BC5, BC6H, BC7
            85  | 86 | 115                      => Some(16),
            87  ..= 93                          => Some(32),    // B8G8R8A8, B8G8R8X8, R10G10B10_XR_BIAS_A2
            100 | 101                           => Some(32),    // AYUV, Y410
            102                                 => Some(64),    // Y416
            _                                   => None,
        }
    }
}

native_flags! {
    /// [`DXGI_USAGE`](https://docs.microsoft.com/en-us/windows/win32/direct3ddxgi/dxgi-usage)
    pub struct Usage(u32);
    SHADER_INPUT                = 0x0000_0010,
    RENDER_TARGET_OUTPUT        = 0x0000_0020,
    BACK_BUFFER                 = 0x0000_0040,
    SHARED                      = 0x0000_0080,
    READ_ONLY                   = 0x0000_0100,
    DISCARD_ON_PRESENT          = 0x0000_0200,
    UNORDERED_ACCESS            = 0x0000_0400,
}

native_enum! {
    /// [`DXGI_SWAP_EFFECT`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/ne-dxgi-dxgi_swap_effect)
    pub struct SwapEffect(u32);
    DISCARD                     = 0,
    SEQUENTIAL                  = 1,
    FLIP_SEQUENTIAL             = 3,
    FLIP_DISCARD                = 4,
}

native_flags! {
    /// [`DXGI_SWAP_CHAIN_FLAG`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/ne-dxgi-dxgi_swap_chain_flag)
    pub struct SwapChainFlags(u32);
    NONPREROTATED                       = 1,
    ALLOW_MODE_SWITCH                   = 2,
    GDI_COMPATIBLE                      = 4,
    RESTRICTED_CONTENT                  = 8,
    RESTRICT_SHARED_RESOURCE_DRIVER     = 16,
    DISPLAY_ONLY                        = 32,
    FRAME_LATENCY_WAITABLE_OBJECT       = 64,
    FOREGROUND_LAYER                    = 128,
    FULLSCREEN_VIDEO                    = 256,
    YUV_VIDEO                           = 512,
    HW_PROTECTED                        = 1024,
    ALLOW_TEARING                       = 2048,
}

native_flags! {
    /// [`DXGI_PRESENT`](https://docs.microsoft.com/en-us/windows/win32/direct3ddxgi/dxgi-present)
    pub struct PresentFlags(u32);
    TEST                        = 0x0000_0001,
    DO_NOT_SEQUENCE             = 0x0000_0002,
    RESTART                     = 0x0000_0004,
    DO_NOT_WAIT                 = 0x0000_0008,
    STEREO_PREFER_RIGHT         = 0x0000_0010,
    STEREO_TEMPORARY_MONO       = 0x0000_0020,
    RESTRICT_TO_OUTPUT          = 0x0000_0040,
    USE_DURATION                = 0x0000_0100,
    ALLOW_TEARING               = 0x0000_0200,
}

native_flags! {
    /// `DXGI_MWA_*` flags for [`IDXGIFactory::MakeWindowAssociation`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nf-dxgi-idxgifactory-makewindowassociation)
    pub struct WindowAssociationFlags(u32);
    NO_WINDOW_CHANGES           = 1 << 0,
    NO_ALT_ENTER                = 1 << 1,
    NO_PRINT_SCREEN             = 1 << 2,
}

native_enum! {
    /// [`DXGI_MODE_SCANLINE_ORDER`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/legacy/bb173067(v=vs.85))
    pub struct ModeScanlineOrder(u32);
    UNSPECIFIED                 = 0,
    PROGRESSIVE                 = 1,
    UPPER_FIELD_FIRST           = 2,
    LOWER_FIELD_FIRST           = 3,
}

native_enum! {
    /// [`DXGI_MODE_SCALING`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/legacy/bb173066(v=vs.85))
    pub struct ModeScaling(u32);
    UNSPECIFIED                 = 0,
    CENTERED                    = 1,
    STRETCHED                   = 2,
}

native_enum! {
    /// [`DXGI_MODE_ROTATION`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/legacy/bb173065(v=vs.85))
    pub struct ModeRotation(u32);
    UNSPECIFIED                 = 0,
    IDENTITY                    = 1,
    ROTATE90                    = 2,
    ROTATE180                   = 3,
    ROTATE270                   = 4,
}

native_flags! {
    /// [`DXGI_ADAPTER_FLAG`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/ne-dxgi-dxgi_adapter_flag)
    pub struct AdapterFlags(u32);
    REMOTE                      = 1,
    SOFTWARE                    = 2,
}

native_flags! {
    /// `DXGI_ENUM_MODES_*` flags for [`IDXGIOutput::GetDisplayModeList`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nf-dxgi-idxgioutput-getdisplaymodelist)
    pub struct EnumModesFlags(u32);
    INTERLACED                  = 1,
    SCALING                     = 2,
}



#[test] fn format_values() {
    assert_eq!(Format::UNKNOWN.raw(),               0);
    assert_eq!(Format::R32G32B32A32_FLOAT.raw(),    2);
    assert_eq!(Format::R8G8B8A8_UNORM.raw(),        28);
    assert_eq!(Format::R8G8B8A8_UNORM_SRGB.raw(),   29);
    assert_eq!(Format::D24_UNORM_S8_UINT.raw(),     45);
    assert_eq!(Format::R16_UINT.raw(),              57);
    assert_eq!(Format::R32_UINT.raw(),              42);
    assert_eq!(Format::BC1_UNORM.raw(),             71);
    assert_eq!(Format::B8G8R8A8_UNORM.raw(),        87);
    assert_eq!(Format::B8G8R8A8_UNORM_SRGB.raw(),   91);
    assert_eq!(Format::BC7_UNORM_SRGB.raw(),        99);
    assert_eq!(Format::NV12.raw(),                  103);
    assert_eq!(Format::OPAQUE_420.raw(),            106);
    assert_eq!(Format::B4G4R4A4_UNORM.raw(),        115);
}

#[test] fn format_names_are_contiguous() {
    for raw in 0 ..= 115 { assert!(Format(raw).name().is_some(), "DXGI_FORMAT {} has no name", raw); }
    assert_eq!(Format(116).name(), None);
    assert_eq!(format!("{:?}", Format::B8G8R8A8_UNORM), "Format::B8G8R8A8_UNORM");
    assert_eq!(format!("{:?}", Format(200)), "Format(0xc8)");
}

#[test] fn block_compression() {
    assert!( Format::BC1_UNORM.is_block_compressed());
    assert!( Format::BC5_SNORM.is_block_compressed());
    assert!( Format::BC7_UNORM_SRGB.is_block_compressed());
    assert!(!Format::B5G6R5_UNORM.is_block_compressed());
    assert!(!Format::B8G8R8A8_UNORM.is_block_compressed());
}

#[test] fn element_sizes() {
    assert_eq!(Format::R32G32B32A32_FLOAT.bits_per_element(),   Some(128));
    assert_eq!(Format::R32G32B32_FLOAT.bits_per_element(),      Some(96));
    assert_eq!(Format::D32_FLOAT_S8X24_UINT.bits_per_element(), Some(64));
    assert_eq!(Format::R8G8B8A8_UNORM.bits_per_element(),       Some(32));
    assert_eq!(Format::X24_TYPELESS_G8_UINT.bits_per_element(), Some(32));
    assert_eq!(Format::R16_UINT.bits_per_element(),             Some(16));
    assert_eq!(Format::A8_UNORM.bits_per_element(),             Some(8));
    assert_eq!(Format::BC1_UNORM.bits_per_element(),            Some(64));
    assert_eq!(Format::BC4_SNORM.bits_per_element(),            Some(64));
    assert_eq!(Format::BC3_UNORM.bits_per_element(),            Some(128));
    assert_eq!(Format::BC7_UNORM_SRGB.bits_per_element(),       Some(128));
    assert_eq!(Format::B5G6R5_UNORM.bits_per_element(),         Some(16));
    assert_eq!(Format::B8G8R8X8_UNORM_SRGB.bits_per_element(),  Some(32));
    assert_eq!(Format::B4G4R4A4_UNORM.bits_per_element(),       Some(16));
    assert_eq!(Format::UNKNOWN.bits_per_element(),              None);
    assert_eq!(Format::R1_UNORM.bits_per_element(),             None);
    assert_eq!(Format::R8G8_B8G8_UNORM.bits_per_element(),      None);
    assert_eq!(Format::NV12.bits_per_element(),                 None);
    assert_eq!(Format::YUY2.bits_per_element(),                 None);
    assert_eq!(Format(116).bits_per_element(),                  None);
}

#[test] fn flag_values() {
    assert_eq!((Usage::RENDER_TARGET_OUTPUT | Usage::SHADER_INPUT).bits(), 0x30);
    assert_eq!(Usage::BACK_BUFFER.bits(),                       0x40);
    assert_eq!(SwapEffect::FLIP_DISCARD.raw(),                  4);
    assert_eq!(SwapChainFlags::ALLOW_MODE_SWITCH.bits(),        2);
    assert_eq!(SwapChainFlags::ALLOW_TEARING.bits(),            2048);
    assert_eq!(PresentFlags::TEST.bits(),                       1);
    assert_eq!(PresentFlags::ALLOW_TEARING.bits(),              0x200);
    assert_eq!(WindowAssociationFlags::NO_ALT_ENTER.bits(),     2);
    assert_eq!(ModeRotation::ROTATE270.raw(),                   4);
    assert_eq!(AdapterFlags::SOFTWARE.bits(),                   2);
}

#[test] fn flag_algebra() {
    let mut f = PresentFlags::empty();
    assert!(f.is_empty());
    f |= PresentFlags::DO_NOT_WAIT;
    f |= PresentFlags::RESTART;
    assert!(f.contains(PresentFlags::DO_NOT_WAIT));
    assert!(!f.contains(PresentFlags::DO_NOT_WAIT | PresentFlags::TEST));
    assert!(f.intersects(PresentFlags::DO_NOT_WAIT | PresentFlags::TEST));
    assert_eq!(f & PresentFlags::RESTART, PresentFlags::RESTART);
    assert_eq!(format!("{:?}", f), "PresentFlags(RESTART | DO_NOT_WAIT)");
    assert_eq!(format!("{:?}", PresentFlags::from_bits(0x8001)), "PresentFlags(TEST | 0x8000)");
}

#[cfg(windows)] #[test] fn matches_winapi() {
    use winapi::shared::dxgi::*;
    use winapi::shared::dxgiformat::*;
    use winapi::shared::dxgitype::*;

    assert_eq!(Format::R8G8B8A8_UNORM.raw(),    DXGI_FORMAT_R8G8B8A8_UNORM);
    assert_eq!(Format::B8G8R8A8_UNORM.raw(),    DXGI_FORMAT_B8G8R8A8_UNORM);
    assert_eq!(Format::D32_FLOAT.raw(),         DXGI_FORMAT_D32_FLOAT);
    assert_eq!(Format::NV12.raw(),              DXGI_FORMAT_NV12);
    assert_eq!(Format::B4G4R4A4_UNORM.raw(),    DXGI_FORMAT_B4G4R4A4_UNORM);
    assert_eq!(Usage::RENDER_TARGET_OUTPUT.bits(), DXGI_USAGE_RENDER_TARGET_OUTPUT);
    assert_eq!(SwapEffect::SEQUENTIAL.raw(),    DXGI_SWAP_EFFECT_SEQUENTIAL);
    assert_eq!(SwapChainFlags::GDI_COMPATIBLE.bits(), DXGI_SWAP_CHAIN_FLAG_GDI_COMPATIBLE);
    assert_eq!(PresentFlags::TEST.bits(),       DXGI_PRESENT_TEST);
    assert_eq!(PresentFlags::RESTART.bits(),    DXGI_PRESENT_RESTART);
    assert_eq!(WindowAssociationFlags::NO_ALT_ENTER.bits(), DXGI_MWA_NO_ALT_ENTER);
    assert_eq!(ModeScaling::STRETCHED.raw(),    DXGI_MODE_SCALING_STRETCHED);
    assert_eq!(ModeRotation::ROTATE90.raw(),    DXGI_MODE_ROTATION_ROTATE90);
    assert_eq!(EnumModesFlags::SCALING.bits(),  DXGI_ENUM_MODES_SCALING);
}
