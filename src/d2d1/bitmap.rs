use crate::com::*;

use winapi::um::d2d1::ID2D1Bitmap;



com_wrapper! {
    /// [`ID2D1Bitmap`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nn-d2d1-id2d1bitmap):
    /// device dependent image data, bound to the render target that created it.
    pub struct Bitmap(ID2D1Bitmap);
}

impl Bitmap {
    /// [`ID2D1Bitmap::GetDpi`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-id2d1bitmap-getdpi)
    pub fn dpi(&self) -> Result<(f32, f32), Error> {
        let bitmap = self.com("ID2D1Bitmap::GetDpi")?;
        let (mut x, mut y) = (0.0, 0.0);
        unsafe { bitmap.GetDpi(&mut x, &mut y) };
        Ok((x, y))
    }
}
