use super::*;
use crate::com::*;

use winapi::um::wincodec::*;

use std::ptr::null_mut;



com_wrapper! {
    /// [`IWICBitmap`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nn-wincodec-iwicbitmap):
    /// an in-memory, lockable [`BitmapSource`].
    pub struct Bitmap(IWICBitmap);
}

com_wrapper! {
    /// [`IWICBitmapLock`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nn-wincodec-iwicbitmaplock):
    /// direct access to a [`Bitmap`]'s pixels until dropped or disposed.
    pub struct BitmapLock(IWICBitmapLock);
}

impl Bitmap {
    /// [`IWICBitmap::Lock`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicbitmap-lock)
    /// `rect` (or the whole bitmap).
    ///
    /// Any number of [`BitmapLockFlags::READ`] locks may coexist.  A [`BitmapLockFlags::WRITE`] lock is exclusive:
    /// locking again while it's alive fails with `WINCODEC_ERR_ALREADYLOCKED`.
    pub fn lock(&self, rect: Option<Rect>, flags: BitmapLockFlags) -> Result<BitmapLock, Error> {
        let bitmap = self.com("IWICBitmap::Lock")?;
        let rect = match rect {
            Some(rect)  => rect,
            None        => { let (w, h) = self.size()?; Rect::whole(w, h) },
        };
        let rect = WICRect::from(rect);
        let mut lock = null_mut();
        let hr = unsafe { bitmap.Lock(&rect, flags.bits(), &mut lock) };
        let lock = unsafe { BitmapLock::from_raw(lock) };
        lock.ok_or_else(|| Error::null("IWICBitmap::Lock", hr, "IWICBitmapLock is null"))
    }

    /// [`IWICBitmap::SetResolution`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicbitmap-setresolution)
    pub fn set_resolution(&self, dpi_x: f64, dpi_y: f64) -> Result<(), Error> {
        let bitmap = self.com("IWICBitmap::SetResolution")?;
        let hr = unsafe { bitmap.SetResolution(dpi_x, dpi_y) };
        Error::check_hr("IWICBitmap::SetResolution", hr, "")
    }
}

impl BitmapLock {
    /// [`IWICBitmapLock::GetStride`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicbitmaplock-getstride):
    /// bytes between the starts of consecutive rows of [`data`](Self::data).
    pub fn stride(&self) -> Result<u32, Error> {
        let lock = self.com("IWICBitmapLock::GetStride")?;
        let mut stride = 0;
        let hr = unsafe { lock.GetStride(&mut stride) };
        Error::check_hr("IWICBitmapLock::GetStride", hr, "")?;
        Ok(stride)
    }

    /// [`IWICBitmapLock::GetSize`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicbitmaplock-getsize):
    /// `(width, height)` of the locked rectangle.
    pub fn size(&self) -> Result<(u32, u32), Error> {
        let lock = self.com("IWICBitmapLock::GetSize")?;
        let (mut w, mut h) = (0, 0);
        let hr = unsafe { lock.GetSize(&mut w, &mut h) };
        Error::check_hr("IWICBitmapLock::GetSize", hr, "")?;
        Ok((w, h))
    }

    /// [`IWICBitmapLock::GetDataPointer`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicbitmaplock-getdatapointer)
    pub fn data(&self) -> Result<&[u8], Error> {
        let (ptr, len) = self.data_pointer()?;
        Ok(unsafe { std::slice::from_raw_parts(ptr, len) })
    }

    /// [`IWICBitmapLock::GetDataPointer`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/nf-wincodec-iwicbitmaplock-getdatapointer)
    ///
    /// Writes only reach the bitmap if it was locked with [`BitmapLockFlags::WRITE`].
    pub fn data_mut(&mut self) -> Result<&mut [u8], Error> {
        let (ptr, len) = self.data_pointer()?;
        Ok(unsafe { std::slice::from_raw_parts_mut(ptr, len) })
    }

    fn data_pointer(&self) -> Result<(*mut u8, usize), Error> {
        let lock = self.com("IWICBitmapLock::GetDataPointer")?;
        let mut len = 0;
        let mut ptr = null_mut();
        let hr = unsafe { lock.GetDataPointer(&mut len, &mut ptr) };
        Error::check_hr("IWICBitmapLock::GetDataPointer", hr, "")?;
        if ptr.is_null() { return Err(Error::new("IWICBitmapLock::GetDataPointer", "data pointer is null")); }
        Ok((ptr, len as usize))
    }
}



#[test] fn lock_write_then_read() {
    let _com = initialize(Apartment::MultiThreaded).unwrap();
    let wic = ImagingFactory::create().unwrap();
    let bitmap = wic.create_bitmap(4, 3, &pixel_format::GRAY8, BitmapCreateCacheOption::CACHE_ON_LOAD).unwrap();

    {
        let mut lock = bitmap.lock(None, BitmapLockFlags::WRITE).unwrap();
        assert_eq!(lock.size().unwrap(), (4, 3));
        let stride = lock.stride().unwrap() as usize;
        assert!(stride >= 4);
        let data = lock.data_mut().unwrap();
        for y in 0 .. 3 { for x in 0 .. 4 { data[y * stride + x] = (y * 4 + x) as u8; } }

        let err = bitmap.lock(None, BitmapLockFlags::WRITE).map(|_| ()).unwrap_err();
        assert_eq!(err.hresult(), Some(crate::com::WINCODEC_ERR_ALREADYLOCKED));
    }

    let lock = bitmap.lock(Some(Rect::new(1, 1, 2, 2)), BitmapLockFlags::READ).unwrap();
    assert_eq!(lock.size().unwrap(), (2, 2));
    let stride = lock.stride().unwrap() as usize;
    let data = lock.data().unwrap();
    assert_eq!(&data[..2],          &[5, 6]);
    assert_eq!(&data[stride..][..2], &[9, 10]);
    drop(lock);

    assert_eq!(bitmap.to_vec(4).unwrap(), (0 .. 12).collect::<Vec<u8>>());
}

#[test] fn resolution() {
    let _com = initialize(Apartment::MultiThreaded).unwrap();
    let wic = ImagingFactory::create().unwrap();
    let mut bitmap = wic.create_bitmap(1, 1, &pixel_format::PBGRA32, BitmapCreateCacheOption::CACHE_ON_LOAD).unwrap();
    bitmap.set_resolution(144.0, 72.0).unwrap();
    assert_eq!(bitmap.resolution().unwrap(), (144.0, 72.0));

    bitmap.dispose();
    assert!(bitmap.set_resolution(96.0, 96.0).unwrap_err().is_disposed());
    assert!(bitmap.resolution().unwrap_err().is_disposed());
    assert!(bitmap.lock(None, BitmapLockFlags::READ).map(|_| ()).unwrap_err().is_disposed());
}
