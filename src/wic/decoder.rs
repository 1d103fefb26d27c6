use super::*;
use crate::com::*;

use winapi::shared::guiddef::GUID;
use winapi::um::wincodec::*;

use std::ptr::null_mut;



com_wrapper! {
    /// [`IWICBitmapDecoder`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nn-wincodec-iwicbitmapdecoder):
    /// one decoded image file, made of one or more frames.
    pub struct BitmapDecoder(IWICBitmapDecoder);
}

com_wrapper! {
    /// [`IWICBitmapFrameDecode`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nn-wincodec-iwicbitmapframedecode):
    /// a single decoded frame; pixels are decoded lazily when copied.
    pub struct BitmapFrameDecode(IWICBitmapFrameDecode);
}

impl BitmapDecoder {
    /// [`IWICBitmapDecoder::GetContainerFormat`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicbitmapdecoder-getcontainerformat):
    /// one of [`container_format`]'s GUIDs.
    pub fn container_format(&self) -> Result<GUID, Error> {
        let decoder = self.com("IWICBitmapDecoder::GetContainerFormat")?;
        let mut format = pixel_format::DONT_CARE;
        let hr = unsafe { decoder.GetContainerFormat(&mut format) };
        Error::check_hr("IWICBitmapDecoder::GetContainerFormat", hr, "")?;
        Ok(format)
    }

    /// [`IWICBitmapDecoder::GetFrameCount`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicbitmapdecoder-getframecount)
    pub fn frame_count(&self) -> Result<u32, Error> {
        let decoder = self.com("IWICBitmapDecoder::GetFrameCount")?;
        let mut count = 0;
        let hr = unsafe { decoder.GetFrameCount(&mut count) };
        Error::check_hr("IWICBitmapDecoder::GetFrameCount", hr, "")?;
        Ok(count)
    }

    /// [`IWICBitmapDecoder::GetFrame`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicbitmapdecoder-getframe)
    ///
    /// Out of range indices fail with `WINCODEC_ERR_FRAMEMISSING` (or `E_INVALIDARG`, depending on the codec).
    pub fn frame(&self, index: u32) -> Result<BitmapFrameDecode, Error> {
        let decoder = self.com("IWICBitmapDecoder::GetFrame")?;
        let mut frame = null_mut();
        let hr = unsafe { decoder.GetFrame(index, &mut frame) };
        let frame = unsafe { BitmapFrameDecode::from_raw(frame) };
        frame.ok_or_else(|| Error::null("IWICBitmapDecoder::GetFrame", hr, "IWICBitmapFrameDecode is null"))
    }
}
