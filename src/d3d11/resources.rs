use super::*;
use crate::com::*;
use crate::dxgi;

use winapi::shared::dxgi::{IDXGIKeyedMutex, IDXGISurface};
use winapi::um::d3d11::*;



/// [`ID3D11Resource`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/nn-d3d11-id3d11resource)s:
/// anything [`DeviceContext::map`], [`DeviceContext::copy_resource`] etc. accept.
pub trait Resource {
    /// The base `ID3D11Resource` reference, unless disposed.
    fn as_resource(&self) -> Result<&mcom::Rc<ID3D11Resource>, Error>;
}

com_wrapper! {
    /// [`ID3D11Texture2D`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/nn-d3d11-id3d11texture2d)
    pub struct Texture2D(ID3D11Texture2D);
}

com_wrapper! {
    /// [`ID3D11Buffer`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/nn-d3d11-id3d11buffer)
    pub struct Buffer(ID3D11Buffer);
}

com_wrapper! {
    /// [`ID3D11RenderTargetView`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/nn-d3d11-id3d11rendertargetview)
    pub struct RenderTargetView(ID3D11RenderTargetView);
}

com_wrapper! {
    /// [`ID3D11ShaderResourceView`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/nn-d3d11-id3d11shaderresourceview)
    pub struct ShaderResourceView(ID3D11ShaderResourceView);
}

impl Resource for Texture2D {
    fn as_resource(&self) -> Result<&mcom::Rc<ID3D11Resource>, Error> { Ok(self.com("Texture2D::as_resource")?.up_ref()) }
}

impl Resource for Buffer {
    fn as_resource(&self) -> Result<&mcom::Rc<ID3D11Resource>, Error> { Ok(self.com("Buffer::as_resource")?.up_ref()) }
}

impl Texture2D {
    /// [`ID3D11Texture2D::GetDesc`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/nf-d3d11-id3d11texture2d-getdesc)
    pub fn desc(&self) -> Result<Texture2dDesc, Error> {
        let texture = self.com("ID3D11Texture2D::GetDesc")?;
        let mut desc = unsafe { std::mem::zeroed() };
        unsafe { texture.GetDesc(&mut desc) };
        Ok(Texture2dDesc::from(desc))
    }

    /// The same texture as an `IDXGISurface` (single mip, single slice textures only).
    pub fn to_dxgi_surface(&self) -> Result<dxgi::Surface, Error> {
        let texture = self.com("Texture2D::to_dxgi_surface")?;
        query_interface::<IDXGISurface, _>(texture, "Texture2D::to_dxgi_surface").map(dxgi::Surface::from_com)
    }

    /// The texture's `IDXGIKeyedMutex`.  Only textures created with [`ResourceMiscFlags::SHARED_KEYEDMUTEX`] have one.
    pub fn to_keyed_mutex(&self) -> Result<dxgi::KeyedMutex, Error> {
        let texture = self.com("Texture2D::to_keyed_mutex")?;
        query_interface::<IDXGIKeyedMutex, _>(texture, "Texture2D::to_keyed_mutex").map(dxgi::KeyedMutex::from_com)
    }
}

impl Buffer {
    /// [`ID3D11Buffer::GetDesc`](https://docs.microsoft.com/en-us/windows/win32/api/d3d11/nf-d3d11-id3d11buffer-getdesc)
    pub fn desc(&self) -> Result<BufferDesc, Error> {
        let buffer = self.com("ID3D11Buffer::GetDesc")?;
        let mut desc = unsafe { std::mem::zeroed() };
        unsafe { buffer.GetDesc(&mut desc) };
        Ok(BufferDesc::from(desc))
    }
}



#[test] fn keyed_mutex_on_shared_texture() {
    let (device, _context, _) = create_device(None, &DeviceOptions::warp()).unwrap();
    let mut desc = Texture2dDesc::new(4, 4, dxgi::Format::B8G8R8A8_UNORM);
    desc.bind_flags = BindFlags::RENDER_TARGET | BindFlags::SHADER_RESOURCE;
    desc.misc_flags = ResourceMiscFlags::SHARED_KEYEDMUTEX;
    let texture = device.create_texture2d(&desc, None).unwrap();
    let mut mutex = texture.to_keyed_mutex().unwrap();

    assert_eq!(mutex.acquire_sync(0, dxgi::KeyedMutex::INFINITE).unwrap(), dxgi::AcquireOutcome::Acquired);
    mutex.release_sync(1).unwrap();
    assert_eq!(mutex.acquire_sync(0, 0).unwrap(), dxgi::AcquireOutcome::TimedOut);
    assert_eq!(mutex.acquire_sync(1, 0).unwrap(), dxgi::AcquireOutcome::Acquired);
    mutex.release_sync(0).unwrap();

    mutex.dispose();
    mutex.dispose();
    assert!(mutex.acquire_sync(0, 0).unwrap_err().is_disposed());
    assert!(mutex.release_sync(0).unwrap_err().is_disposed());

    let plain = device.create_texture2d(&Texture2dDesc::new(4, 4, dxgi::Format::B8G8R8A8_UNORM), None).unwrap();
    assert_eq!(plain.to_keyed_mutex().map(|_| ()).unwrap_err().hresult(), Some(E_NOINTERFACE));
}

#[test] fn swap_chain_for_hidden_window() {
    let window = crate::utility::HiddenWindow::new();
    let (device, context, _) = create_device(None, &DeviceOptions::warp()).unwrap();
    let factory = device.to_dxgi_device().unwrap().adapter().unwrap().parent_factory().unwrap();
    unsafe { factory.make_window_association(window.hwnd(), dxgi::WindowAssociationFlags::NO_ALT_ENTER) }.unwrap();
    let device_unknown = device.as_unknown().unwrap();
    let mut swap_chain = unsafe { factory.create_swap_chain(&device_unknown, &dxgi::SwapChainDesc::windowed(window.hwnd())) }.unwrap();

    let desc = swap_chain.desc().unwrap();
    assert_eq!(desc.output_window, window.hwnd());
    assert_eq!(desc.buffer_count, 2);
    assert!(desc.windowed);
    assert_eq!(desc.buffer_desc.format, dxgi::Format::B8G8R8A8_UNORM);
    assert!(desc.buffer_desc.width > 0 && desc.buffer_desc.height > 0);
    assert!(!swap_chain.fullscreen_state().unwrap().0);

    {
        let back_buffer = Texture2D::from_com(swap_chain.buffer::<ID3D11Texture2D>(0).unwrap());
        assert_eq!(back_buffer.desc().unwrap().width, desc.buffer_desc.width);
        assert_eq!(swap_chain.surface(0).unwrap().desc().unwrap().height, desc.buffer_desc.height);
        let rtv = device.create_render_target_view(&back_buffer).unwrap();
        context.clear_render_target_view(&rtv, [0.0, 0.0, 1.0, 1.0]).unwrap();
        context.clear_state().unwrap();
    }
    context.flush().unwrap();

    // hidden windows may report DXGI_STATUS_OCCLUDED, which is still a success
    swap_chain.present(0, dxgi::PresentFlags::empty()).unwrap();
    swap_chain.present(0, dxgi::PresentFlags::TEST).unwrap();
    swap_chain.last_present_count().unwrap();

    swap_chain.resize_buffers(0, 32, 16, dxgi::Format::UNKNOWN, dxgi::SwapChainFlags::empty()).unwrap();
    let resized = swap_chain.desc().unwrap();
    assert_eq!((resized.buffer_desc.width, resized.buffer_desc.height), (32, 16));

    swap_chain.dispose();
    swap_chain.dispose();
    assert!(swap_chain.present(0, dxgi::PresentFlags::empty()).unwrap_err().is_disposed());
    assert!(swap_chain.desc().unwrap_err().is_disposed());
    assert!(swap_chain.buffer::<ID3D11Texture2D>(0).map(|_| ()).unwrap_err().is_disposed());
}
