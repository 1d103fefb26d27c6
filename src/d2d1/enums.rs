//! Direct2D constant sets, bit-exact with `d2d1.h` and `dcommon.h`

native_enum! {
    /// [`D2D1_FACTORY_TYPE`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/ne-d2d1-d2d1_factory_type)
    pub struct FactoryType(u32);
    SINGLE_THREADED             = 0,
    MULTI_THREADED              = 1,
}

native_enum! {
    /// [`D2D1_DEBUG_LEVEL`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/ne-d2d1-d2d1_debug_level)
    pub struct DebugLevel(u32);
    NONE                        = 0,
    ERROR                       = 1,
    WARNING                     = 2,
    INFORMATION                 = 3,
}

native_enum! {
    /// [`D2D1_ALPHA_MODE`](https://docs.microsoft.com/en-us/windows/win32/api/dcommon/ne-dcommon-d2d1_alpha_mode)
    pub struct AlphaMode(u32);
    UNKNOWN                     = 0,
    PREMULTIPLIED               = 1,
    STRAIGHT                    = 2,
    IGNORE                      = 3,
}

native_enum! {
    /// [`D2D1_ANTIALIAS_MODE`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/ne-d2d1-d2d1_antialias_mode)
    pub struct AntialiasMode(u32);
    PER_PRIMITIVE               = 0,
    ALIASED                     = 1,
}

native_enum! {
    /// [`D2D1_BITMAP_INTERPOLATION_MODE`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/ne-d2d1-d2d1_bitmap_interpolation_mode)
    pub struct BitmapInterpolationMode(u32);
    NEAREST_NEIGHBOR            = 0,
    LINEAR                      = 1,
}

native_enum! {
    /// [`D2D1_RENDER_TARGET_TYPE`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/ne-d2d1-d2d1_render_target_type)
    pub struct RenderTargetType(u32);
    DEFAULT                     = 0,
    SOFTWARE                    = 1,
    HARDWARE                    = 2,
}

native_flags! {
    /// [`D2D1_RENDER_TARGET_USAGE`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/ne-d2d1-d2d1_render_target_usage)
    pub struct RenderTargetUsage(u32);
    NONE                        = 0,
    FORCE_BITMAP_REMOTING       = 1,
    GDI_COMPATIBLE              = 2,
}

native_enum! {
    /// [`D2D1_FEATURE_LEVEL`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/ne-d2d1-d2d1_feature_level)
    pub struct FeatureLevel(u32);
    DEFAULT                     = 0,
    LEVEL_9                     = 0x9100,
    LEVEL_10                    = 0xa000,
}

native_flags! {
    /// [`D2D1_PRESENT_OPTIONS`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/ne-d2d1-d2d1_present_options)
    pub struct PresentOptions(u32);
    NONE                        = 0,
    RETAIN_CONTENTS             = 1,
    IMMEDIATELY                 = 2,
}

native_flags! {
    /// [`D2D1_WINDOW_STATE`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/ne-d2d1-d2d1_window_state)
    pub struct WindowState(u32);
    NONE                        = 0,
    OCCLUDED                    = 1,
}



#[test] fn values() {
    assert_eq!(FactoryType::MULTI_THREADED.raw(),               1);
    assert_eq!(DebugLevel::INFORMATION.raw(),                   3);
    assert_eq!(AlphaMode::PREMULTIPLIED.raw(),                  1);
    assert_eq!(AlphaMode::IGNORE.raw(),                         3);
    assert_eq!(AntialiasMode::ALIASED.raw(),                    1);
    assert_eq!(BitmapInterpolationMode::LINEAR.raw(),           1);
    assert_eq!(RenderTargetType::HARDWARE.raw(),                2);
    assert_eq!(RenderTargetUsage::GDI_COMPATIBLE.bits(),        2);
    assert_eq!(FeatureLevel::LEVEL_10.raw(),                    0xa000);
    assert_eq!(PresentOptions::IMMEDIATELY.bits(),              2);
    assert_eq!(WindowState::OCCLUDED.bits(),                    1);
    assert_eq!(format!("{:?}", WindowState::empty()),           "WindowState()");
    assert_eq!(format!("{:?}", WindowState::OCCLUDED),          "WindowState(OCCLUDED)");
}

#[cfg(windows)] #[test] fn matches_winapi() {
    use winapi::um::d2d1::*;
    use winapi::um::dcommon::*;

    assert_eq!(FactoryType::SINGLE_THREADED.raw(),              D2D1_FACTORY_TYPE_SINGLE_THREADED);
    assert_eq!(DebugLevel::WARNING.raw(),                       D2D1_DEBUG_LEVEL_WARNING);
    assert_eq!(AlphaMode::STRAIGHT.raw(),                       D2D1_ALPHA_MODE_STRAIGHT);
    assert_eq!(AntialiasMode::PER_PRIMITIVE.raw(),              D2D1_ANTIALIAS_MODE_PER_PRIMITIVE);
    assert_eq!(BitmapInterpolationMode::NEAREST_NEIGHBOR.raw(), D2D1_BITMAP_INTERPOLATION_MODE_NEAREST_NEIGHBOR);
    assert_eq!(RenderTargetType::SOFTWARE.raw(),                D2D1_RENDER_TARGET_TYPE_SOFTWARE);
    assert_eq!(RenderTargetUsage::FORCE_BITMAP_REMOTING.bits(), D2D1_RENDER_TARGET_USAGE_FORCE_BITMAP_REMOTING);
    assert_eq!(FeatureLevel::LEVEL_9.raw(),                     D2D1_FEATURE_LEVEL_9);
    assert_eq!(PresentOptions::RETAIN_CONTENTS.bits(),          D2D1_PRESENT_OPTIONS_RETAIN_CONTENTS);
    assert_eq!(WindowState::OCCLUDED.bits(),                    D2D1_WINDOW_STATE_OCCLUDED);
}
