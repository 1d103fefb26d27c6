use super::*;
use crate::com::*;
use crate::dxgi;

use winapi::shared::dxgi::IDXGIDevice;
use winapi::um::d3d11::*;
use winapi::um::unknwnbase::IUnknown;

use std::ptr::null_mut;



/// Parameters for [`create_device`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceOptions {
    /// Must be [`DriverType::UNKNOWN`] when an explicit adapter is passed to [`create_device`].
    pub driver_type:    DriverType,
    pub flags:          CreateDeviceFlags,
    /// Tried in order.  Empty means the runtime's default list (`11_0` down to `9_1`).
    pub feature_levels: Vec<FeatureLevel>,
}

impl Default for DeviceOptions {
    /// Hardware device, `BGRA_SUPPORT` (required for Direct2D interop), feature levels `11_1` down to `9_1`.
    fn default() -> Self {
        Self {
            driver_type:    DriverType::HARDWARE,
            flags:          CreateDeviceFlags::BGRA_SUPPORT,
            feature_levels: vec![
                FeatureLevel::LEVEL_11_1,
                FeatureLevel::LEVEL_11_0,
                FeatureLevel::LEVEL_10_1,
                FeatureLevel::LEVEL_10_0,
                FeatureLevel::LEVEL_9_3,
                FeatureLevel::LEVEL_9_2,
                FeatureLevel::LEVEL_9_1,
            ],
        }
    }
}

impl DeviceOptions {
    /// [`DeviceOptions::default`], but on the WARP software rasterizer.
    pub fn warp() -> Self { Self { driver_type: DriverType::WARP, .. Self::default() } }
}

/// [`D3D11CreateDevice`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/nf-d3d11-d3d11createdevice)
///
/// `adapter == None` uses the default adapter.
/// If `options.feature_levels` includes `11_1` and only the Direct3D 11.0 runtime is installed, creation is retried without it.
#[tracing::instrument(level = "debug", skip(adapter))]
pub fn create_device(adapter: Option<&dxgi::Adapter>, options: &DeviceOptions) -> Result<(Device, DeviceContext, FeatureLevel), Error> {
    let adapter = match adapter {
        Some(adapter) => Some(adapter.as_adapter()?),
        None => None,
    };
    let adapter_ptr = adapter.as_ref().map_or(null_mut(), |a| a.as_ptr());

    let create = |levels: &[FeatureLevel]| {
        let levels = levels.iter().map(|l| l.0).collect::<Vec<_>>();
        let mut device = null_mut();
        let mut feature_level = 0;
        let mut immediate_context = null_mut();
        let hr = unsafe { D3D11CreateDevice(
            adapter_ptr,
            options.driver_type.0,
            null_mut(), // software
            options.flags.bits(),
            if levels.is_empty() { std::ptr::null() } else { levels.as_ptr() },
            levels.len() as _,
            D3D11_SDK_VERSION,
            &mut device,
            &mut feature_level,
            &mut immediate_context,
        )};
        let device              = unsafe { mcom::Rc::from_raw_opt(device) };
        let immediate_context   = unsafe { mcom::Rc::from_raw_opt(immediate_context) };
        (hr, device, immediate_context, feature_level)
    };

    let (mut hr, mut device, mut immediate_context, mut feature_level) = create(&options.feature_levels[..]);
    if hr == E_INVALIDARG && device.is_none() && options.feature_levels.contains(&FeatureLevel::LEVEL_11_1) {
        let without_11_1 = options.feature_levels.iter().copied().filter(|l| *l != FeatureLevel::LEVEL_11_1).collect::<Vec<_>>();
        if !without_11_1.is_empty() {
            tracing::debug!("D3D11CreateDevice rejected D3D_FEATURE_LEVEL_11_1, retrying without it");
            let retry = create(&without_11_1[..]);
            hr = retry.0; device = retry.1; immediate_context = retry.2; feature_level = retry.3;
        }
    }

    let device              = device            .ok_or_else(|| Error::null("D3D11CreateDevice", hr, "ID3D11Device is null"))?;
    let immediate_context   = immediate_context .ok_or_else(|| Error::null("D3D11CreateDevice", hr, "ID3D11DeviceContext is null"))?;
    let feature_level = FeatureLevel(feature_level);
    tracing::debug!(?feature_level, "created ID3D11Device");
    Ok((Device::from_com(device), DeviceContext::from_com(immediate_context), feature_level))
}



com_wrapper! {
    /// [`ID3D11Device`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/nn-d3d11-id3d11device):
    /// creates resources and views.  Free threaded.
    pub struct Device(ID3D11Device);
}

impl Device {
    /// [`ID3D11Device::GetFeatureLevel`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/nf-d3d11-id3d11device-getfeaturelevel)
    pub fn feature_level(&self) -> Result<FeatureLevel, Error> {
        let device = self.com("ID3D11Device::GetFeatureLevel")?;
        Ok(FeatureLevel(unsafe { device.GetFeatureLevel() }))
    }

    /// [`ID3D11Device::GetCreationFlags`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/nf-d3d11-id3d11device-getcreationflags)
    pub fn creation_flags(&self) -> Result<CreateDeviceFlags, Error> {
        let device = self.com("ID3D11Device::GetCreationFlags")?;
        Ok(CreateDeviceFlags(unsafe { device.GetCreationFlags() }))
    }

    /// [`ID3D11Device::GetDeviceRemovedReason`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/nf-d3d11-id3d11device-getdeviceremovedreason):
    /// `Ok(())` while the device is alive, otherwise the `DXGI_ERROR_DEVICE_*` reason.
    pub fn device_removed_reason(&self) -> Result<(), Error> {
        let device = self.com("ID3D11Device::GetDeviceRemovedReason")?;
        let hr = unsafe { device.GetDeviceRemovedReason() };
        Error::check_hr("ID3D11Device::GetDeviceRemovedReason", hr, "")
    }

    /// [`ID3D11Device::GetImmediateContext`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/nf-d3d11-id3d11device-getimmediatecontext)
    pub fn immediate_context(&self) -> Result<DeviceContext, Error> {
        let device = self.com("ID3D11Device::GetImmediateContext")?;
        let mut context = null_mut();
        unsafe { device.GetImmediateContext(&mut context) };
        let context = unsafe { DeviceContext::from_raw(context) };
        context.ok_or_else(|| Error::new("ID3D11Device::GetImmediateContext", "ID3D11DeviceContext is null"))
    }

    /// [`ID3D11Device::CheckFormatSupport`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/nf-d3d11-id3d11device-checkformatsupport)
    ///
    /// Formats the device doesn't support at all fail with `E_FAIL`.
    pub fn check_format_support(&self, format: dxgi::Format) -> Result<FormatSupport, Error> {
        let device = self.com("ID3D11Device::CheckFormatSupport")?;
        let mut support = 0;
        let hr = unsafe { device.CheckFormatSupport(format.0, &mut support) };
        Error::check_hr("ID3D11Device::CheckFormatSupport", hr, "")?;
        Ok(FormatSupport(support))
    }

    /// [`ID3D11Device::CreateTexture2D`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/nf-d3d11-id3d11device-createtexture2d)
    ///
    /// `initial` fills the top mip of a single slice texture.  `row_pitch` must cover one row of texels
    /// (or 4x4 blocks), and `data` must hold `row_pitch * (rows - 1)` bytes plus one more row.
    /// Formats without a known [`dxgi::Format::bits_per_element`] can't take initial data.
    pub fn create_texture2d(&self, desc: &Texture2dDesc, initial: Option<SubresourceData>) -> Result<Texture2D, Error> {
        let device = self.com("ID3D11Device::CreateTexture2D")?;
        let initial = match initial {
            None => None,
            Some(data) => {
                data.validate_top_mip(desc).map_err(|note| Error::new_hr("ID3D11Device::CreateTexture2D", E_INVALIDARG, note))?;
                Some(D3D11_SUBRESOURCE_DATA::from(data))
            },
        };
        let native = D3D11_TEXTURE2D_DESC::from(*desc);
        let mut texture = null_mut();
        let hr = unsafe { device.CreateTexture2D(&native, initial.as_ref().map_or(std::ptr::null(), |i| i as *const _), &mut texture) };
        let texture = unsafe { Texture2D::from_raw(texture) };
        texture.ok_or_else(|| Error::null("ID3D11Device::CreateTexture2D", hr, "ID3D11Texture2D is null"))
    }

    /// [`ID3D11Device::CreateBuffer`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/nf-d3d11-id3d11device-createbuffer)
    ///
    /// `initial` must hold at least `desc.byte_width` bytes.
    pub fn create_buffer(&self, desc: &BufferDesc, initial: Option<&[u8]>) -> Result<Buffer, Error> {
        let device = self.com("ID3D11Device::CreateBuffer")?;
        let initial = match initial {
            None => None,
            Some(data) if data.len() < desc.byte_width as usize => {
                return Err(Error::new_hr("ID3D11Device::CreateBuffer", E_INVALIDARG, "initial data is smaller than byte_width"));
            },
            Some(data) => Some(D3D11_SUBRESOURCE_DATA::from(SubresourceData { data, row_pitch: 0, slice_pitch: 0 })),
        };
        let native = D3D11_BUFFER_DESC::from(*desc);
        let mut buffer = null_mut();
        let hr = unsafe { device.CreateBuffer(&native, initial.as_ref().map_or(std::ptr::null(), |i| i as *const _), &mut buffer) };
        let buffer = unsafe { Buffer::from_raw(buffer) };
        buffer.ok_or_else(|| Error::null("ID3D11Device::CreateBuffer", hr, "ID3D11Buffer is null"))
    }

    /// [`ID3D11Device::CreateRenderTargetView`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/nf-d3d11-id3d11device-createrendertargetview)
    /// of the whole texture, in the texture's own format.
    pub fn create_render_target_view(&self, texture: &Texture2D) -> Result<RenderTargetView, Error> {
        let device = self.com("ID3D11Device::CreateRenderTargetView")?;
        let resource = texture.as_resource()?;
        let mut rtv = null_mut();
        let hr = unsafe { device.CreateRenderTargetView(resource.as_ptr(), std::ptr::null(), &mut rtv) };
        let rtv = unsafe { RenderTargetView::from_raw(rtv) };
        rtv.ok_or_else(|| Error::null("ID3D11Device::CreateRenderTargetView", hr, "ID3D11RenderTargetView is null"))
    }

    /// [`ID3D11Device::CreateShaderResourceView`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/nf-d3d11-id3d11device-createshaderresourceview)
    /// of every mip of the texture, in the texture's own format.
    pub fn create_shader_resource_view(&self, texture: &Texture2D) -> Result<ShaderResourceView, Error> {
        let device = self.com("ID3D11Device::CreateShaderResourceView")?;
        let resource = texture.as_resource()?;
        let mut srv = null_mut();
        let hr = unsafe { device.CreateShaderResourceView(resource.as_ptr(), std::ptr::null(), &mut srv) };
        let srv = unsafe { ShaderResourceView::from_raw(srv) };
        srv.ok_or_else(|| Error::null("ID3D11Device::CreateShaderResourceView", hr, "ID3D11ShaderResourceView is null"))
    }

    /// <code>[IUnknown::QueryInterface](https://docs.microsoft.com/en-us/windows/win32/api/unknwn/nf-unknwn-iunknown-queryinterface(refiid_void))(__uuidof([IDXGIDevice](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nn-dxgi-idxgidevice)), ...)</code>
    pub fn to_dxgi_device(&self) -> Result<dxgi::Device, Error> {
        let device = self.com("Device::to_dxgi_device")?;
        query_interface::<IDXGIDevice, _>(device, "Device::to_dxgi_device").map(dxgi::Device::from_com)
    }

    /// The device as `IUnknown`, as consumed by `dxgi::Factory::create_swap_chain`.
    pub fn as_unknown(&self) -> Result<mcom::Rc<IUnknown>, Error> {
        Ok(self.com("Device::as_unknown")?.up_ref().clone())
    }
}



#[test] fn warp_device() {
    let (device, context, feature_level) = create_device(None, &DeviceOptions::warp()).unwrap();
    assert!(feature_level >= FeatureLevel::LEVEL_10_0);
    assert_eq!(device.feature_level().unwrap(), feature_level);
    assert!(device.creation_flags().unwrap().contains(CreateDeviceFlags::BGRA_SUPPORT));
    device.device_removed_reason().unwrap();
    assert!(device.check_format_support(dxgi::Format::B8G8R8A8_UNORM).unwrap().contains(FormatSupport::TEXTURE2D | FormatSupport::RENDER_TARGET));
    assert!(device.immediate_context().unwrap().as_com().unwrap().as_ptr() == context.as_com().unwrap().as_ptr());
}

#[test] fn device_to_factory() {
    let (device, _context, _) = create_device(None, &DeviceOptions::warp()).unwrap();
    let adapter = device.to_dxgi_device().unwrap().adapter().unwrap();
    assert!(!adapter.desc().unwrap().description.is_empty());
    let factory = adapter.parent_factory().unwrap();
    assert!(factory.is_current().unwrap());
}

#[test] fn explicit_adapter() {
    let factory = dxgi::Factory::create().unwrap();
    let adapter = match factory.enum_adapters(0).unwrap() { Some(a) => a, None => return };
    let options = DeviceOptions { driver_type: DriverType::UNKNOWN, .. DeviceOptions::default() };
    let (device, _context, _) = create_device(Some(&adapter), &options).unwrap();
    let used = device.to_dxgi_device().unwrap().adapter().unwrap().desc().unwrap();
    assert_eq!(used.adapter_luid, adapter.desc().unwrap().adapter_luid);

    // an explicit adapter requires D3D_DRIVER_TYPE_UNKNOWN
    let err = create_device(Some(&adapter), &DeviceOptions::warp()).map(|_| ()).unwrap_err();
    assert_eq!(err.hresult(), Some(E_INVALIDARG));
}

#[test] fn clear_and_read_back() {
    let (device, context, _) = create_device(None, &DeviceOptions::warp()).unwrap();

    let mut desc = Texture2dDesc::new(4, 4, dxgi::Format::B8G8R8A8_UNORM);
    desc.bind_flags = BindFlags::RENDER_TARGET;
    let target = device.create_texture2d(&desc, None).unwrap();
    assert_eq!(target.desc().unwrap(), desc);
    assert_eq!(target.to_dxgi_surface().unwrap().desc().unwrap().width, 4);

    let rtv = device.create_render_target_view(&target).unwrap();
    context.set_render_targets(&[&rtv]).unwrap();
    context.set_viewports(&[Viewport::from_size(4, 4)]).unwrap();
    context.clear_render_target_view(&rtv, [1.0, 0.0, 0.0, 1.0]).unwrap();

    let mut staging_desc = Texture2dDesc::new(4, 4, dxgi::Format::B8G8R8A8_UNORM);
    staging_desc.usage = Usage::STAGING;
    staging_desc.cpu_access_flags = CpuAccessFlags::READ;
    let staging = device.create_texture2d(&staging_desc, None).unwrap();
    context.copy_resource(&staging, &target).unwrap();

    let mapped = context.map(&staging, 0, MapType::READ, MapFlags::empty()).unwrap();
    assert!(mapped.row_pitch >= 16);
    let texels = unsafe { mapped.as_slice(mapped.row_pitch as usize * 3 + 16) };
    for row in 0 .. 4 {
        let row = &texels[row * mapped.row_pitch as usize ..][..16];
        assert_eq!(row, &[0x00, 0x00, 0xFF, 0xFF].repeat(4)[..]); // BGRA
    }
    context.unmap(&staging, 0).unwrap();
    context.clear_state().unwrap();
    context.flush().unwrap();
}

#[test] fn initial_data() {
    let (device, context, _) = create_device(None, &DeviceOptions::warp()).unwrap();

    let mut desc = Texture2dDesc::new(2, 2, dxgi::Format::R8G8B8A8_UNORM);
    desc.usage = Usage::STAGING;
    desc.cpu_access_flags = CpuAccessFlags::READ;
    let pixels = [1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];
    let texture = device.create_texture2d(&desc, Some(SubresourceData { data: &pixels, row_pitch: 8, slice_pitch: 16 })).unwrap();

    let mapped = context.map(&texture, 0, MapType::READ, MapFlags::empty()).unwrap();
    let texels = unsafe { mapped.as_slice(mapped.row_pitch as usize + 8) };
    assert_eq!(&texels[..8], &pixels[..8]);
    assert_eq!(&texels[mapped.row_pitch as usize ..][..8], &pixels[8..]);
    context.unmap(&texture, 0).unwrap();

    let err = device.create_texture2d(&desc, Some(SubresourceData { data: &pixels[..15], row_pitch: 8, slice_pitch: 16 })).map(|_| ()).unwrap_err();
    assert_eq!(err.hresult(), Some(E_INVALIDARG));
    let err = device.create_texture2d(&desc, Some(SubresourceData { data: &[], row_pitch: 0, slice_pitch: 0 })).map(|_| ()).unwrap_err();
    assert_eq!(err.hresult(), Some(E_INVALIDARG));
    let wide = Texture2dDesc { width: 1000, height: 1, .. desc };
    let err = device.create_texture2d(&wide, Some(SubresourceData { data: &pixels, row_pitch: 0, slice_pitch: 0 })).map(|_| ()).unwrap_err();
    assert_eq!(err.hresult(), Some(E_INVALIDARG));

    let buffer_desc = BufferDesc { byte_width: 16, usage: Usage::IMMUTABLE, bind_flags: BindFlags::VERTEX_BUFFER, .. BufferDesc::default() };
    let buffer = device.create_buffer(&buffer_desc, Some(&pixels[..])).unwrap();
    assert_eq!(buffer.desc().unwrap().byte_width, 16);
    assert!(device.create_buffer(&buffer_desc, Some(&pixels[..8])).map(|_| ()).unwrap_err().hresult() == Some(E_INVALIDARG));
}

#[test] fn disposed_device_and_context() {
    let (mut device, mut context, _) = create_device(None, &DeviceOptions::warp()).unwrap();
    let texture = device.create_texture2d(&Texture2dDesc::new(1, 1, dxgi::Format::B8G8R8A8_UNORM), None).unwrap();

    device.dispose();
    device.dispose();
    assert!(device.feature_level().unwrap_err().is_disposed());
    assert!(device.create_texture2d(&Texture2dDesc::new(1, 1, dxgi::Format::B8G8R8A8_UNORM), None).map(|_| ()).unwrap_err().is_disposed());
    assert!(device.to_dxgi_device().map(|_| ()).unwrap_err().is_disposed());

    // the context keeps the device alive
    context.flush().unwrap();
    context.dispose();
    assert!(context.flush().unwrap_err().is_disposed());
    assert!(context.map(&texture, 0, MapType::READ, MapFlags::empty()).map(|_| ()).unwrap_err().is_disposed());
}
