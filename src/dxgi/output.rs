use super::*;
use crate::com::*;

use winapi::shared::dxgi::IDXGIOutput;
use winapi::shared::dxgitype::DXGI_MODE_DESC;

use std::ptr::null_mut;



com_wrapper! {
    /// [`IDXGIOutput`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nn-dxgi-idxgioutput):
    /// an adapter output, such as a monitor.
    pub struct Output(IDXGIOutput);
}

impl Output {
    /// [`IDXGIOutput::GetDesc`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nf-dxgi-idxgioutput-getdesc)
    pub fn desc(&self) -> Result<OutputDesc, Error> {
        let output = self.com("IDXGIOutput::GetDesc")?;
        let mut desc = unsafe { std::mem::zeroed() };
        let hr = unsafe { output.GetDesc(&mut desc) };
        Error::check_hr("IDXGIOutput::GetDesc", hr, "")?;
        Ok(OutputDesc::from(desc))
    }

    /// [`IDXGIOutput::WaitForVBlank`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nf-dxgi-idxgioutput-waitforvblank)
    ///
    /// Blocks the calling thread until the next vertical blank.
    pub fn wait_for_vblank(&self) -> Result<(), Error> {
        let output = self.com("IDXGIOutput::WaitForVBlank")?;
        let hr = unsafe { output.WaitForVBlank() };
        Error::check_hr("IDXGIOutput::WaitForVBlank", hr, "")
    }

    /// [`IDXGIOutput::GetDisplayModeList`](https://docs.microsoft.com/en-us/windows/win32/api/dxgi/nf-dxgi-idxgioutput-getdisplaymodelist)
    ///
    /// Display modes matching `format`, queried with the count-then-fill pair of calls.
    pub fn display_modes(&self, format: Format, flags: EnumModesFlags) -> Result<Vec<ModeDesc>, Error> {
        let output = self.com("IDXGIOutput::GetDisplayModeList")?;
        loop {
            let mut n = 0;
            let hr = unsafe { output.GetDisplayModeList(format.0, flags.bits(), &mut n, null_mut()) };
            Error::check_hr("IDXGIOutput::GetDisplayModeList", hr, "counting modes")?;
            if n == 0 { return Ok(Vec::new()); }

            let mut modes = vec![unsafe { std::mem::zeroed::<DXGI_MODE_DESC>() }; n as usize];
            let hr = unsafe { output.GetDisplayModeList(format.0, flags.bits(), &mut n, modes.as_mut_ptr()) };
            // the mode list changed between calls (e.g. a monitor was attached)
            if hr == DXGI_ERROR_MORE_DATA { continue; }
            Error::check_hr("IDXGIOutput::GetDisplayModeList", hr, "")?;
            modes.truncate(n as usize);
            return Ok(modes.into_iter().map(ModeDesc::from).collect());
        }
    }
}



#[test] fn describe_outputs() {
    let factory = Factory::create().unwrap();
    for adapter in factory.adapters().unwrap() {
        for output in adapter.outputs().unwrap() {
            let desc = output.desc().unwrap();
            assert!(desc.device_name().starts_with(r"\\.\"), "{:?}", desc.device_name());

            // remote sessions report DXGI_ERROR_NOT_CURRENTLY_AVAILABLE
            let modes = output.display_modes(Format::R8G8B8A8_UNORM, EnumModesFlags::empty()).unwrap_or_default();
            for mode in modes.iter() {
                assert_eq!(mode.format, Format::R8G8B8A8_UNORM);
                assert!(mode.width > 0 && mode.height > 0);
            }
        }
    }
}
