use super::*;
use crate::com::*;
use crate::com::DXGI_ERROR_NOT_FOUND;

use winapi::Interface;
use winapi::shared::dxgi::*;

use std::ptr::null_mut;



com_wrapper! {
    /// [`IDXGIAdapter1`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nn-dxgi-idxgiadapter1):
    /// a display subsystem (one or more GPUs, DACs and video memory).
    pub struct Adapter(IDXGIAdapter1);
}

impl Adapter {
    /// [`IDXGIAdapter1::GetDesc1`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nf-dxgi-idxgiadapter1-getdesc1)
    pub fn desc(&self) -> Result<AdapterDesc, Error> {
        let adapter = self.com("IDXGIAdapter1::GetDesc1")?;
        let mut desc = unsafe { std::mem::zeroed() };
        let hr = unsafe { adapter.GetDesc1(&mut desc) };
        Error::check_hr("IDXGIAdapter1::GetDesc1", hr, "")?;
        Ok(AdapterDesc::from(desc))
    }

    /// [`IDXGIAdapter::EnumOutputs`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nf-dxgi-idxgiadapter-enumoutputs)
    ///
    /// Returns `Ok(None)` once `index` runs past the last output.  Software adapters have no outputs.
    pub fn enum_outputs(&self, index: u32) -> Result<Option<Output>, Error> {
        let adapter = self.com("IDXGIAdapter::EnumOutputs")?;
        let mut output = null_mut();
        let hr = unsafe { adapter.EnumOutputs(index, &mut output) };
        if hr == DXGI_ERROR_NOT_FOUND { return Ok(None); }
        let output = unsafe { mcom::Rc::from_raw_opt(output) };
        let output = output.ok_or_else(|| Error::null("IDXGIAdapter::EnumOutputs", hr, "IDXGIOutput is null"))?;
        Ok(Some(Output::from_com(output)))
    }

    pub fn outputs(&self) -> Result<Vec<Output>, Error> {
        let mut outputs = Vec::new();
        while let Some(output) = self.enum_outputs(outputs.len() as u32)? {
            outputs.push(output);
        }
        Ok(outputs)
    }

    /// [`IDXGIObject::GetParent`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nf-dxgi-idxgiobject-getparent)
    pub fn parent_factory(&self) -> Result<Factory, Error> {
        let adapter = self.com("IDXGIObject::GetParent")?;
        let mut factory = null_mut();
        let hr = unsafe { adapter.GetParent(&IDXGIFactory1::uuidof(), &mut factory) };
        let factory = unsafe { mcom::Rc::from_raw_opt(factory as *mut IDXGIFactory1) };
        let factory = factory.ok_or_else(|| Error::null("IDXGIObject::GetParent", hr, "IDXGIFactory1 is null"))?;
        Ok(Factory::from_com(factory))
    }

    /// The base `IDXGIAdapter` reference, as consumed by `D3D11CreateDevice`.
    pub fn as_adapter(&self) -> Result<mcom::Rc<IDXGIAdapter>, Error> {
        Ok(self.com("Adapter::as_adapter")?.up_ref().clone())
    }
}



#[test] fn walk_outputs_and_parent() {
    let factory = Factory::create().unwrap();
    for adapter in factory.adapters().unwrap() {
        let outputs = adapter.outputs().unwrap();
        assert!(adapter.enum_outputs(outputs.len() as u32).unwrap().is_none());
        assert!(adapter.parent_factory().unwrap().is_current().unwrap());
    }
}

#[test] fn disposed_adapter() {
    let factory = Factory::create().unwrap();
    let mut adapter = match factory.enum_adapters(0).unwrap() { Some(a) => a, None => return };
    adapter.dispose();
    assert!(adapter.desc().unwrap_err().is_disposed());
    assert!(adapter.outputs().unwrap_err().is_disposed());
    assert!(adapter.parent_factory().unwrap_err().is_disposed());
    assert!(adapter.as_adapter().is_err());
}
