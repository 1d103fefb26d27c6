//! Resource descriptors, converted field-by-field from the native structs

use super::*;
use crate::dxgi;

#[cfg(windows)] use winapi::um::d3d11::*;



/// [`D3D11_TEXTURE2D_DESC`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/ns-d3d11-d3d11_texture2d_desc)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Texture2dDesc {
    pub width:              u32,
    pub height:             u32,
    pub mip_levels:         u32,
    pub array_size:         u32,
    pub format:             dxgi::Format,
    pub sample_desc:        dxgi::SampleDesc,
    pub usage:              Usage,
    pub bind_flags:         BindFlags,
    pub cpu_access_flags:   CpuAccessFlags,
    pub misc_flags:         ResourceMiscFlags,
}

impl Texture2dDesc {
    /// A single mip, single slice, [`Usage::DEFAULT`] texture with no bind flags.
    pub fn new(width: u32, height: u32, format: dxgi::Format) -> Self {
        Self {
            width,
            height,
            mip_levels:         1,
            array_size:         1,
            format,
            sample_desc:        dxgi::SampleDesc::default(),
            usage:              Usage::DEFAULT,
            bind_flags:         BindFlags::empty(),
            cpu_access_flags:   CpuAccessFlags::empty(),
            misc_flags:         ResourceMiscFlags::empty(),
        }
    }

    /// Rows of data in the top mip (rows of 4x4 blocks for block compressed formats).
    pub fn rows(&self) -> u32 {
        if self.format.is_block_compressed() { blocks(self.height) } else { self.height }
    }

    /// Bytes of texel data in one row of the top mip, or `None` if [`dxgi::Format::bits_per_element`] doesn't know the format.
    pub fn row_bytes(&self) -> Option<u64> {
        let bits = u64::from(self.format.bits_per_element()?);
        let elements = if self.format.is_block_compressed() { blocks(self.width) } else { self.width };
        Some(u64::from(elements) * bits / 8)
    }
}

fn blocks(texels: u32) -> u32 { texels / 4 + (texels % 4 != 0) as u32 }

/// [`D3D11_BUFFER_DESC`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/ns-d3d11-d3d11_buffer_desc)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BufferDesc {
    pub byte_width:             u32,
    pub usage:                  Usage,
    pub bind_flags:             BindFlags,
    pub cpu_access_flags:       CpuAccessFlags,
    pub misc_flags:             ResourceMiscFlags,
    pub structure_byte_stride:  u32,
}

/// [`D3D11_SUBRESOURCE_DATA`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/ns-d3d11-d3d11_subresource_data)
#[derive(Clone, Copy, Debug)]
pub struct SubresourceData<'a> {
    pub data:           &'a [u8],
    pub row_pitch:      u32,
    pub slice_pitch:    u32,
}

#[cfg(any(test, windows))] impl SubresourceData<'_> {
    /// Check that `data` covers the top mip of `desc` as laid out by `row_pitch`.
    pub(crate) fn validate_top_mip(&self, desc: &Texture2dDesc) -> Result<(), &'static str> {
        if desc.mip_levels != 1 || desc.array_size != 1 { return Err("initial data requires mip_levels == 1 and array_size == 1"); }
        let row_bytes = desc.row_bytes().ok_or("initial data isn't supported for this format")?;
        if u64::from(self.row_pitch) < row_bytes { return Err("row_pitch is smaller than one row of texels"); }
        let rows = u64::from(desc.rows());
        let required = if rows == 0 { 0 } else { u64::from(self.row_pitch) * (rows - 1) + row_bytes };
        if (self.data.len() as u64) < required { return Err("initial data is smaller than row_pitch * (rows - 1) + one row"); }
        Ok(())
    }
}

/// [`D3D11_VIEWPORT`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/ns-d3d11-d3d11_viewport)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub top_left_x:     f32,
    pub top_left_y:     f32,
    pub width:          f32,
    pub height:         f32,
    pub min_depth:      f32,
    pub max_depth:      f32,
}

impl Viewport {
    /// `(0, 0) .. (width, height)`, depth `0 ..= 1`.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self { width: width as f32, height: height as f32, max_depth: 1.0, .. Self::default() }
    }
}

/// [`D3D11_MAPPED_SUBRESOURCE`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/ns-d3d11-d3d11_mapped_subresource),
/// valid until the matching `DeviceContext::unmap`.
#[derive(Clone, Copy, Debug)]
pub struct MappedSubresource {
    pub data:           *mut u8,
    pub row_pitch:      u32,
    pub depth_pitch:    u32,
}

impl MappedSubresource {
    /// ### Safety
    /// The subresource must still be mapped, and `len` bytes must lie within it.
    pub unsafe fn as_slice(&self, len: usize) -> &[u8] { std::slice::from_raw_parts(self.data, len) }

    /// ### Safety
    /// The subresource must still be mapped for writing, and `len` bytes must lie within it.
    pub unsafe fn as_slice_mut(&mut self, len: usize) -> &mut [u8] { std::slice::from_raw_parts_mut(self.data, len) }
}



#[cfg(windows)] impl From<D3D11_TEXTURE2D_DESC> for Texture2dDesc {
    fn from(n: D3D11_TEXTURE2D_DESC) -> Self { Self {
        width:              n.Width,
        height:             n.Height,
        mip_levels:         n.MipLevels,
        array_size:         n.ArraySize,
        format:             dxgi::Format(n.Format),
        sample_desc:        n.SampleDesc.into(),
        usage:              Usage(n.Usage),
        bind_flags:         BindFlags(n.BindFlags),
        cpu_access_flags:   CpuAccessFlags(n.CPUAccessFlags),
        misc_flags:         ResourceMiscFlags(n.MiscFlags),
    }}
}

#[cfg(windows)] impl From<Texture2dDesc> for D3D11_TEXTURE2D_DESC {
    fn from(d: Texture2dDesc) -> Self { Self {
        Width:              d.width,
        Height:             d.height,
        MipLevels:          d.mip_levels,
        ArraySize:          d.array_size,
        Format:             d.format.0,
        SampleDesc:         d.sample_desc.into(),
        Usage:              d.usage.0,
        BindFlags:          d.bind_flags.0,
        CPUAccessFlags:     d.cpu_access_flags.0,
        MiscFlags:          d.misc_flags.0,
    }}
}

#[cfg(windows)] impl From<D3D11_BUFFER_DESC> for BufferDesc {
    fn from(n: D3D11_BUFFER_DESC) -> Self { Self {
        byte_width:             n.ByteWidth,
        usage:                  Usage(n.Usage),
        bind_flags:             BindFlags(n.BindFlags),
        cpu_access_flags:       CpuAccessFlags(n.CPUAccessFlags),
        misc_flags:             ResourceMiscFlags(n.MiscFlags),
        structure_byte_stride:  n.StructureByteStride,
    }}
}

#[cfg(windows)] impl From<BufferDesc> for D3D11_BUFFER_DESC {
    fn from(d: BufferDesc) -> Self { Self {
        ByteWidth:              d.byte_width,
        Usage:                  d.usage.0,
        BindFlags:              d.bind_flags.0,
        CPUAccessFlags:         d.cpu_access_flags.0,
        MiscFlags:              d.misc_flags.0,
        StructureByteStride:    d.structure_byte_stride,
    }}
}

#[cfg(windows)] impl From<Viewport> for D3D11_VIEWPORT {
    fn from(v: Viewport) -> Self { Self {
        TopLeftX:   v.top_left_x,
        TopLeftY:   v.top_left_y,
        Width:      v.width,
        Height:     v.height,
        MinDepth:   v.min_depth,
        MaxDepth:   v.max_depth,
    }}
}

#[cfg(windows)] impl<'a> From<SubresourceData<'a>> for D3D11_SUBRESOURCE_DATA {
    fn from(d: SubresourceData<'a>) -> Self { Self {
        pSysMem:            d.data.as_ptr().cast(),
        SysMemPitch:        d.row_pitch,
        SysMemSlicePitch:   d.slice_pitch,
    }}
}



#[test] fn texture_rows() {
    assert_eq!(Texture2dDesc::new(16, 10, dxgi::Format::B8G8R8A8_UNORM).rows(), 10);
    assert_eq!(Texture2dDesc::new(16, 10, dxgi::Format::BC1_UNORM).rows(), 3);
    assert_eq!(Texture2dDesc::new(16, 12, dxgi::Format::BC7_UNORM).rows(), 3);
}

#[test] fn texture_rows_near_u32_max() {
    assert_eq!(Texture2dDesc::new(16, u32::MAX, dxgi::Format::BC1_UNORM).rows(), 0x4000_0000);
    assert_eq!(Texture2dDesc::new(16, u32::MAX - 3, dxgi::Format::BC1_UNORM).rows(), 0x3FFF_FFFF);
    assert_eq!(Texture2dDesc::new(u32::MAX, 1, dxgi::Format::BC7_UNORM).row_bytes(), Some(0x4000_0000 * 16));
}

#[test] fn texture_row_bytes() {
    assert_eq!(Texture2dDesc::new(1000, 1, dxgi::Format::R8G8B8A8_UNORM).row_bytes(), Some(4000));
    assert_eq!(Texture2dDesc::new(10, 1, dxgi::Format::R16_UINT).row_bytes(), Some(20));
    assert_eq!(Texture2dDesc::new(10, 1, dxgi::Format::BC1_UNORM).row_bytes(), Some(3 * 8));
    assert_eq!(Texture2dDesc::new(10, 1, dxgi::Format::BC3_UNORM).row_bytes(), Some(3 * 16));
    assert_eq!(Texture2dDesc::new(10, 1, dxgi::Format::NV12).row_bytes(), None);
}

#[test] fn initial_data_validation() {
    let desc = Texture2dDesc::new(1000, 1, dxgi::Format::R8G8B8A8_UNORM);
    assert!(SubresourceData { data: &[], row_pitch: 0, slice_pitch: 0 }.validate_top_mip(&desc).is_err());
    assert!(SubresourceData { data: &[0; 4000], row_pitch: 0, slice_pitch: 0 }.validate_top_mip(&desc).is_err());
    assert!(SubresourceData { data: &[0; 3999], row_pitch: 4000, slice_pitch: 0 }.validate_top_mip(&desc).is_err());
    assert!(SubresourceData { data: &[0; 4000], row_pitch: 4000, slice_pitch: 0 }.validate_top_mip(&desc).is_ok());

    // the last row doesn't need padding out to row_pitch
    let desc = Texture2dDesc::new(2, 2, dxgi::Format::R8G8B8A8_UNORM);
    assert!(SubresourceData { data: &[0; 24], row_pitch: 16, slice_pitch: 0 }.validate_top_mip(&desc).is_ok());
    assert!(SubresourceData { data: &[0; 23], row_pitch: 16, slice_pitch: 0 }.validate_top_mip(&desc).is_err());

    let desc = Texture2dDesc::new(8, 8, dxgi::Format::BC1_UNORM);
    assert!(SubresourceData { data: &[0; 32], row_pitch: 16, slice_pitch: 0 }.validate_top_mip(&desc).is_ok());
    assert!(SubresourceData { data: &[0; 32], row_pitch: 8, slice_pitch: 0 }.validate_top_mip(&desc).is_err());

    let unknown = Texture2dDesc::new(2, 2, dxgi::Format::NV12);
    assert!(SubresourceData { data: &[0; 1024], row_pitch: 64, slice_pitch: 0 }.validate_top_mip(&unknown).is_err());

    let mut mips = Texture2dDesc::new(2, 2, dxgi::Format::R8G8B8A8_UNORM);
    mips.mip_levels = 2;
    assert!(SubresourceData { data: &[0; 1024], row_pitch: 8, slice_pitch: 0 }.validate_top_mip(&mips).is_err());
}

#[test] fn viewport_from_size() {
    let vp = Viewport::from_size(640, 480);
    assert_eq!((vp.top_left_x, vp.top_left_y, vp.width, vp.height), (0.0, 0.0, 640.0, 480.0));
    assert_eq!((vp.min_depth, vp.max_depth), (0.0, 1.0));
}
