//! Direct3D 11 constant sets, bit-exact with `d3dcommon.h` and `d3d11.h`

native_enum! {
    /// [`D3D_DRIVER_TYPE`](https://docs.microsoft.com/en-us/windows/win32/api/d3dcommon/ne-d3dcommon-d3d_driver_type)
    pub struct DriverType(u32);
    UNKNOWN                     = 0,
    HARDWARE                    = 1,
    REFERENCE                   = 2,
    NULL                        = 3,
    SOFTWARE                    = 4,
    WARP                        = 5,
}

native_enum! {
    /// [`D3D_FEATURE_LEVEL`](https://docs.microsoft.com/en-us/windows/win32/api/d3dcommon/ne-d3dcommon-d3d_feature_level)
    pub struct FeatureLevel(u32);
    LEVEL_1_0_CORE              = 0x1000,
    LEVEL_9_1                   = 0x9100,
    LEVEL_9_2                   = 0x9200,
    LEVEL_9_3                   = 0x9300,
    LEVEL_10_0                  = 0xa000,
    LEVEL_10_1                  = 0xa100,
    LEVEL_11_0                  = 0xb000,
    LEVEL_11_1                  = 0xb100,
    LEVEL_12_0                  = 0xc000,
    LEVEL_12_1                  = 0xc100,
}

impl FeatureLevel {
    /// `(major, minor)`, e.g. `(11, 1)` for [`FeatureLevel::LEVEL_11_1`].
    pub fn version(self) -> (u32, u32) { (self.0 >> 12, (self.0 >> 8) & 0xF) }
}

native_flags! {
    /// [`D3D11_CREATE_DEVICE_FLAG`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/ne-d3d11-d3d11_create_device_flag)
    pub struct CreateDeviceFlags(u32);
    SINGLETHREADED                                  = 0x001,
    DEBUG                                           = 0x002,
    SWITCH_TO_REF                                   = 0x004,
    PREVENT_INTERNAL_THREADING_OPTIMIZATIONS        = 0x008,
    BGRA_SUPPORT                                    = 0x020,
    DEBUGGABLE                                      = 0x040,
    PREVENT_ALTERING_LAYER_SETTINGS_FROM_REGISTRY   = 0x080,
    DISABLE_GPU_TIMEOUT                             = 0x100,
    VIDEO_SUPPORT                                   = 0x800,
}

native_enum! {
    /// [`D3D11_USAGE`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/ne-d3d11-d3d11_usage)
    pub struct Usage(u32);
    DEFAULT                     = 0,
    IMMUTABLE                   = 1,
    DYNAMIC                     = 2,
    STAGING                     = 3,
}

native_flags! {
    /// [`D3D11_BIND_FLAG`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/ne-d3d11-d3d11_bind_flag)
    pub struct BindFlags(u32);
    VERTEX_BUFFER               = 0x001,
    INDEX_BUFFER                = 0x002,
    CONSTANT_BUFFER             = 0x004,
    SHADER_RESOURCE             = 0x008,
    STREAM_OUTPUT               = 0x010,
    RENDER_TARGET               = 0x020,
    DEPTH_STENCIL               = 0x040,
    UNORDERED_ACCESS            = 0x080,
    DECODER                     = 0x200,
    VIDEO_ENCODER               = 0x400,
}

native_flags! {
    /// [`D3D11_CPU_ACCESS_FLAG`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/ne-d3d11-d3d11_cpu_access_flag)
    pub struct CpuAccessFlags(u32);
    WRITE                       = 0x1_0000,
    READ                        = 0x2_0000,
}

native_flags! {
    /// [`D3D11_RESOURCE_MISC_FLAG`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/ne-d3d11-d3d11_resource_misc_flag)
    pub struct ResourceMiscFlags(u32);
    GENERATE_MIPS                       = 0x0_0001,
    SHARED                              = 0x0_0002,
    TEXTURECUBE                         = 0x0_0004,
    DRAWINDIRECT_ARGS                   = 0x0_0010,
    BUFFER_ALLOW_RAW_VIEWS              = 0x0_0020,
    BUFFER_STRUCTURED                   = 0x0_0040,
    RESOURCE_CLAMP                      = 0x0_0080,
    SHARED_KEYEDMUTEX                   = 0x0_0100,
    GDI_COMPATIBLE                      = 0x0_0200,
    SHARED_NTHANDLE                     = 0x0_0800,
    RESTRICTED_CONTENT                  = 0x0_1000,
    RESTRICT_SHARED_RESOURCE            = 0x0_2000,
    RESTRICT_SHARED_RESOURCE_DRIVER     = 0x0_4000,
    GUARDED                             = 0x0_8000,
    TILE_POOL                           = 0x2_0000,
    TILED                               = 0x4_0000,
    HW_PROTECTED                        = 0x8_0000,
}

native_enum! {
    /// [`D3D11_MAP`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/ne-d3d11-d3d11_map)
    pub struct MapType(u32);
    READ                        = 1,
    WRITE                       = 2,
    READ_WRITE                  = 3,
    WRITE_DISCARD               = 4,
    WRITE_NO_OVERWRITE          = 5,
}

native_flags! {
    /// [`D3D11_MAP_FLAG`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/ne-d3d11-d3d11_map_flag)
    pub struct MapFlags(u32);
    DO_NOT_WAIT                 = 0x10_0000,
}

native_flags! {
    /// [`D3D11_FORMAT_SUPPORT`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/ne-d3d11-d3d11_format_support)
    pub struct FormatSupport(u32);
    BUFFER                          = 0x0000_0001,
    IA_VERTEX_BUFFER                = 0x0000_0002,
    IA_INDEX_BUFFER                 = 0x0000_0004,
    SO_BUFFER                       = 0x0000_0008,
    TEXTURE1D                       = 0x0000_0010,
    TEXTURE2D                       = 0x0000_0020,
    TEXTURE3D                       = 0x0000_0040,
    TEXTURECUBE                     = 0x0000_0080,
    SHADER_LOAD                     = 0x0000_0100,
    SHADER_SAMPLE                   = 0x0000_0200,
    SHADER_SAMPLE_COMPARISON        = 0x0000_0400,
    SHADER_SAMPLE_MONO_TEXT         = 0x0000_0800,
    MIP                             = 0x0000_1000,
    MIP_AUTOGEN                     = 0x0000_2000,
    RENDER_TARGET                   = 0x0000_4000,
    BLENDABLE                       = 0x0000_8000,
    DEPTH_STENCIL                   = 0x0001_0000,
    CPU_LOCKABLE                    = 0x0002_0000,
    MULTISAMPLE_RESOLVE             = 0x0004_0000,
    DISPLAY                         = 0x0008_0000,
    CAST_WITHIN_BIT_LAYOUT          = 0x0010_0000,
    MULTISAMPLE_RENDERTARGET        = 0x0020_0000,
    MULTISAMPLE_LOAD                = 0x0040_0000,
    SHADER_GATHER                   = 0x0080_0000,
    BACK_BUFFER_CAST                = 0x0100_0000,
    TYPED_UNORDERED_ACCESS_VIEW     = 0x0200_0000,
    SHADER_GATHER_COMPARISON        = 0x0400_0000,
    DECODER_OUTPUT                  = 0x0800_0000,
    VIDEO_PROCESSOR_OUTPUT          = 0x1000_0000,
    VIDEO_PROCESSOR_INPUT           = 0x2000_0000,
    VIDEO_ENCODER                   = 0x4000_0000,
}



#[test] fn values() {
    assert_eq!(DriverType::WARP.raw(),                  5);
    assert_eq!(FeatureLevel::LEVEL_9_1.raw(),           0x9100);
    assert_eq!(FeatureLevel::LEVEL_11_1.raw(),          0xb100);
    assert_eq!(FeatureLevel::LEVEL_12_1.raw(),          0xc100);
    assert_eq!(CreateDeviceFlags::BGRA_SUPPORT.bits(),  0x20);
    assert_eq!(CreateDeviceFlags::VIDEO_SUPPORT.bits(), 0x800);
    assert_eq!(Usage::STAGING.raw(),                    3);
    assert_eq!(BindFlags::RENDER_TARGET.bits(),         0x20);
    assert_eq!(CpuAccessFlags::READ.bits(),             0x20000);
    assert_eq!(ResourceMiscFlags::SHARED_KEYEDMUTEX.bits(), 0x100);
    assert_eq!(MapType::WRITE_DISCARD.raw(),            4);
    assert_eq!(MapFlags::DO_NOT_WAIT.bits(),            0x100000);
    assert_eq!(FormatSupport::TEXTURE2D.bits(),         0x20);
    assert_eq!(FormatSupport::VIDEO_ENCODER.bits(),     0x4000_0000);
}

#[test] fn feature_level_versions() {
    assert_eq!(FeatureLevel::LEVEL_9_3.version(),       (9, 3));
    assert_eq!(FeatureLevel::LEVEL_10_0.version(),      (10, 0));
    assert_eq!(FeatureLevel::LEVEL_11_1.version(),      (11, 1));
    assert!(FeatureLevel::LEVEL_11_0 > FeatureLevel::LEVEL_10_1);
    assert_eq!(format!("{:?}", FeatureLevel::LEVEL_11_0), "FeatureLevel::LEVEL_11_0");
}

#[cfg(windows)] #[test] fn matches_winapi() {
    use winapi::um::d3dcommon::*;
    use winapi::um::d3d11::*;

    assert_eq!(DriverType::HARDWARE.raw(),              D3D_DRIVER_TYPE_HARDWARE);
    assert_eq!(DriverType::WARP.raw(),                  D3D_DRIVER_TYPE_WARP);
    assert_eq!(FeatureLevel::LEVEL_10_1.raw(),          D3D_FEATURE_LEVEL_10_1);
    assert_eq!(FeatureLevel::LEVEL_11_1.raw(),          D3D_FEATURE_LEVEL_11_1);
    assert_eq!(CreateDeviceFlags::DEBUG.bits(),         D3D11_CREATE_DEVICE_DEBUG);
    assert_eq!(CreateDeviceFlags::BGRA_SUPPORT.bits(),  D3D11_CREATE_DEVICE_BGRA_SUPPORT);
    assert_eq!(Usage::DYNAMIC.raw(),                    D3D11_USAGE_DYNAMIC);
    assert_eq!(BindFlags::SHADER_RESOURCE.bits(),       D3D11_BIND_SHADER_RESOURCE);
    assert_eq!(CpuAccessFlags::WRITE.bits(),            D3D11_CPU_ACCESS_WRITE);
    assert_eq!(ResourceMiscFlags::TEXTURECUBE.bits(),   D3D11_RESOURCE_MISC_TEXTURECUBE);
    assert_eq!(MapType::READ.raw(),                     D3D11_MAP_READ);
    assert_eq!(FormatSupport::RENDER_TARGET.bits(),     D3D11_FORMAT_SUPPORT_RENDER_TARGET);
}
