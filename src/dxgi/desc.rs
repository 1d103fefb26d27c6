//! Descriptors passed to / returned from DXGI, converted field-by-field from the native structs

use super::*;

#[cfg(windows)] use crate::utility::from_wide_nul;

#[cfg(windows)] use winapi::shared::dxgi::*;
#[cfg(windows)] use winapi::shared::dxgitype::*;
#[cfg(windows)] use winapi::shared::minwindef::{FALSE, TRUE};
#[cfg(windows)] use winapi::shared::windef::{HMONITOR, HWND, RECT};



/// [`DXGI_RATIONAL`](https://docs.microsoft.com/en-us/windows/win32/api/dxgicommon/ns-dxgicommon-dxgi_rational)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rational {
    pub numerator:      u32,
    pub denominator:    u32,
}

/// [`DXGI_SAMPLE_DESC`](https://docs.microsoft.com/en-us/windows/win32/api/dxgicommon/ns-dxgicommon-dxgi_sample_desc)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SampleDesc {
    pub count:          u32,
    pub quality:        u32,
}

/// One sample, no multisampling.
impl Default for SampleDesc {
    fn default() -> Self { Self { count: 1, quality: 0 } }
}

/// [`DXGI_MODE_DESC`](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/legacy/bb173064(v=vs.85))
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ModeDesc {
    pub width:              u32,
    pub height:             u32,
    pub refresh_rate:       Rational,
    pub format:             Format,
    pub scanline_ordering:  ModeScanlineOrder,
    pub scaling:            ModeScaling,
}

/// [`DXGI_ADAPTER_DESC1`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/ns-dxgi-dxgi_adapter_desc1)
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AdapterDesc {
    pub description:                String,
    pub vendor_id:                  u32,
    pub device_id:                  u32,
    pub sub_sys_id:                 u32,
    pub revision:                   u32,
    pub dedicated_video_memory:     usize,
    pub dedicated_system_memory:    usize,
    pub shared_system_memory:       usize,
    /// `(LowPart, HighPart)`
    pub adapter_luid:               (u32, i32),
    pub flags:                      AdapterFlags,
}

impl AdapterDesc {
    /// `DXGI_ADAPTER_FLAG_SOFTWARE`, e.g. the "Microsoft Basic Render Driver" (WARP).
    pub fn is_software(&self) -> bool { self.flags.contains(AdapterFlags::SOFTWARE) }
}

/// [`DXGI_SURFACE_DESC`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/ns-dxgi-dxgi_surface_desc)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SurfaceDesc {
    pub width:          u32,
    pub height:         u32,
    pub format:         Format,
    pub sample_desc:    SampleDesc,
}

/// [`DXGI_OUTPUT_DESC`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/ns-dxgi-dxgi_output_desc)
#[cfg(windows)]
#[derive(Clone, Copy, Debug)]
pub struct OutputDesc {
    pub device_name:            [u16; 32],
    pub desktop_coordinates:    RECT,
    pub attached_to_desktop:    bool,
    pub rotation:               ModeRotation,
    pub monitor:                HMONITOR,
}

#[cfg(windows)]
impl OutputDesc {
    /// `DeviceName`, e.g. `\\.\DISPLAY1`
    pub fn device_name(&self) -> String { from_wide_nul(&self.device_name) }
}

/// [`DXGI_SWAP_CHAIN_DESC`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/ns-dxgi-dxgi_swap_chain_desc)
#[cfg(windows)]
#[derive(Clone, Copy, Debug)]
pub struct SwapChainDesc {
    pub buffer_desc:    ModeDesc,
    pub sample_desc:    SampleDesc,
    pub buffer_usage:   Usage,
    pub buffer_count:   u32,
    pub output_window:  HWND,
    pub windowed:       bool,
    pub swap_effect:    SwapEffect,
    pub flags:          SwapChainFlags,
}

#[cfg(windows)]
impl SwapChainDesc {
    /// A windowed, double buffered, `B8G8R8A8_UNORM` flip-discard swap chain sized to the window's client area.
    pub fn windowed(output_window: HWND) -> Self {
        Self {
            buffer_desc:    ModeDesc { format: Format::B8G8R8A8_UNORM, .. ModeDesc::default() },
            sample_desc:    SampleDesc::default(),
            buffer_usage:   Usage::RENDER_TARGET_OUTPUT,
            buffer_count:   2,
            output_window,
            windowed:       true,
            swap_effect:    SwapEffect::FLIP_DISCARD,
            flags:          SwapChainFlags::empty(),
        }
    }
}



#[cfg(windows)] impl From<DXGI_RATIONAL> for Rational {
    fn from(n: DXGI_RATIONAL) -> Self { Self { numerator: n.Numerator, denominator: n.Denominator } }
}

#[cfg(windows)] impl From<Rational> for DXGI_RATIONAL {
    fn from(r: Rational) -> Self { Self { Numerator: r.numerator, Denominator: r.denominator } }
}

#[cfg(windows)] impl From<DXGI_SAMPLE_DESC> for SampleDesc {
    fn from(n: DXGI_SAMPLE_DESC) -> Self { Self { count: n.Count, quality: n.Quality } }
}

#[cfg(windows)] impl From<SampleDesc> for DXGI_SAMPLE_DESC {
    fn from(s: SampleDesc) -> Self { Self { Count: s.count, Quality: s.quality } }
}

#[cfg(windows)] impl From<DXGI_MODE_DESC> for ModeDesc {
    fn from(n: DXGI_MODE_DESC) -> Self { Self {
        width:              n.Width,
        height:             n.Height,
        refresh_rate:       n.RefreshRate.into(),
        format:             Format(n.Format),
        scanline_ordering:  ModeScanlineOrder(n.ScanlineOrdering),
        scaling:            ModeScaling(n.Scaling),
    }}
}

#[cfg(windows)] impl From<ModeDesc> for DXGI_MODE_DESC {
    fn from(m: ModeDesc) -> Self { Self {
        Width:              m.width,
        Height:             m.height,
        RefreshRate:        m.refresh_rate.into(),
        Format:             m.format.0,
        ScanlineOrdering:   m.scanline_ordering.0,
        Scaling:            m.scaling.0,
    }}
}

#[cfg(windows)] impl From<DXGI_ADAPTER_DESC1> for AdapterDesc {
    fn from(n: DXGI_ADAPTER_DESC1) -> Self { Self {
        description:                from_wide_nul(&n.Description),
        vendor_id:                  n.VendorId,
        device_id:                  n.DeviceId,
        sub_sys_id:                 n.SubSysId,
        revision:                   n.Revision,
        dedicated_video_memory:     n.DedicatedVideoMemory,
        dedicated_system_memory:    n.DedicatedSystemMemory,
        shared_system_memory:       n.SharedSystemMemory,
        adapter_luid:               (n.AdapterLuid.LowPart, n.AdapterLuid.HighPart),
        flags:                      AdapterFlags(n.Flags),
    }}
}

#[cfg(windows)] impl From<DXGI_SURFACE_DESC> for SurfaceDesc {
    fn from(n: DXGI_SURFACE_DESC) -> Self { Self {
        width:          n.Width,
        height:         n.Height,
        format:         Format(n.Format),
        sample_desc:    n.SampleDesc.into(),
    }}
}

#[cfg(windows)] impl From<DXGI_OUTPUT_DESC> for OutputDesc {
    fn from(n: DXGI_OUTPUT_DESC) -> Self { Self {
        device_name:            n.DeviceName,
        desktop_coordinates:    n.DesktopCoordinates,
        attached_to_desktop:    n.AttachedToDesktop != FALSE,
        rotation:               ModeRotation(n.Rotation),
        monitor:                n.Monitor,
    }}
}

#[cfg(windows)] impl From<DXGI_SWAP_CHAIN_DESC> for SwapChainDesc {
    fn from(n: DXGI_SWAP_CHAIN_DESC) -> Self { Self {
        buffer_desc:    n.BufferDesc.into(),
        sample_desc:    n.SampleDesc.into(),
        buffer_usage:   Usage(n.BufferUsage),
        buffer_count:   n.BufferCount,
        output_window:  n.OutputWindow,
        windowed:       n.Windowed != FALSE,
        swap_effect:    SwapEffect(n.SwapEffect),
        flags:          SwapChainFlags(n.Flags),
    }}
}

#[cfg(windows)] impl From<SwapChainDesc> for DXGI_SWAP_CHAIN_DESC {
    fn from(d: SwapChainDesc) -> Self { Self {
        BufferDesc:     d.buffer_desc.into(),
        SampleDesc:     d.sample_desc.into(),
        BufferUsage:    d.buffer_usage.0,
        BufferCount:    d.buffer_count,
        OutputWindow:   d.output_window,
        Windowed:       if d.windowed { TRUE } else { FALSE },
        SwapEffect:     d.swap_effect.0,
        Flags:          d.flags.0,
    }}
}



#[test] fn defaults() {
    assert_eq!(SampleDesc::default(), SampleDesc { count: 1, quality: 0 });
    assert_eq!(ModeDesc::default().format, Format::UNKNOWN);
    assert!(!AdapterDesc::default().is_software());
    assert!(AdapterDesc { flags: AdapterFlags::SOFTWARE, .. Default::default() }.is_software());
}

#[cfg(windows)] #[test] fn swap_chain_desc_to_native() {
    let desc = SwapChainDesc::windowed(std::ptr::null_mut());
    let native = DXGI_SWAP_CHAIN_DESC::from(desc);
    assert_eq!(native.BufferDesc.Format,    winapi::shared::dxgiformat::DXGI_FORMAT_B8G8R8A8_UNORM);
    assert_eq!(native.SampleDesc.Count,     1);
    assert_eq!(native.BufferUsage,          DXGI_USAGE_RENDER_TARGET_OUTPUT);
    assert_eq!(native.BufferCount,          2);
    assert_eq!(native.Windowed,             TRUE);
    assert_eq!(native.SwapEffect,           DXGI_SWAP_EFFECT_FLIP_DISCARD);

    let back = SwapChainDesc::from(native);
    assert_eq!(back.buffer_desc,    desc.buffer_desc);
    assert_eq!(back.swap_effect,    SwapEffect::FLIP_DISCARD);
    assert!(back.windowed);
}
