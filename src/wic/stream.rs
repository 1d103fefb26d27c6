use super::*;
use crate::com::*;
use crate::utility::path_to_wide_nul;

use winapi::um::objidlbase::IStream;
use winapi::um::wincodec::*;

use std::path::Path;



com_wrapper! {
    /// [`IWICStream`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nn-wincodec-iwicstream):
    /// an `IStream` over a file or a memory block, to decode from or encode into.
    pub struct Stream(IWICStream);
}

impl Stream {
    /// The stream as a plain `IStream`.
    pub fn as_stream(&self) -> Result<&mcom::Rc<IStream>, Error> {
        Ok(self.com("Stream::as_stream")?.up_ref())
    }

    /// [`IWICStream::InitializeFromFilename`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicstream-initializefromfilename)
    ///
    /// [`DesiredAccess::GENERIC_WRITE`] creates (or truncates) the file.
    pub fn initialize_from_filename(&self, path: impl AsRef<Path>, access: DesiredAccess) -> Result<(), Error> {
        let stream = self.com("IWICStream::InitializeFromFilename")?;
        let path = path_to_wide_nul(path.as_ref());
        let hr = unsafe { stream.InitializeFromFilename(path.as_ptr(), access.bits()) };
        Error::check_hr("IWICStream::InitializeFromFilename", hr, "")
    }

    /// [`IWICStream::InitializeFromMemory`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicstream-initializefrommemory)
    ///
    /// The stream reads from and writes into `buffer` directly, and can't grow past its end.
    /// Decoders and encoders keep their own reference to the stream, so `buffer` must outlive every one of them.
    pub fn initialize_from_memory(&self, buffer: &'static mut [u8]) -> Result<(), Error> {
        let stream = self.com("IWICStream::InitializeFromMemory")?;
        let hr = unsafe { stream.InitializeFromMemory(buffer.as_mut_ptr(), buffer.len() as u32) };
        Error::check_hr("IWICStream::InitializeFromMemory", hr, "")
    }
}
