use super::*;
use crate::com::*;

use winapi::um::d2d1::*;



com_wrapper! {
    /// [`ID2D1SolidColorBrush`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nn-d2d1-id2d1solidcolorbrush)
    pub struct SolidColorBrush(ID2D1SolidColorBrush);
}

impl Brush for SolidColorBrush {
    fn as_brush(&self) -> Result<&mcom::Rc<ID2D1Brush>, Error> { Ok(self.com("SolidColorBrush::as_brush")?.up_ref()) }
}

impl SolidColorBrush {
    /// [`ID2D1SolidColorBrush::SetColor`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-id2d1solidcolorbrush-setcolor(constd2d1_color_f_))
    pub fn set_color(&self, color: ColorF) -> Result<(), Error> {
        let brush = self.com("ID2D1SolidColorBrush::SetColor")?;
        let color = D2D1_COLOR_F::from(color);
        unsafe { brush.SetColor(&color) };
        Ok(())
    }

    /// [`ID2D1Brush::SetOpacity`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-id2d1brush-setopacity)
    pub fn set_opacity(&self, opacity: f32) -> Result<(), Error> {
        let brush = self.com("ID2D1Brush::SetOpacity")?;
        unsafe { brush.SetOpacity(opacity) };
        Ok(())
    }

    /// [`ID2D1Brush::GetOpacity`](https://docs.microsoft.com/en-us/windows/win32/api/d2d1/nf-d2d1-id2d1brush-getopacity)
    pub fn opacity(&self) -> Result<f32, Error> {
        let brush = self.com("ID2D1Brush::GetOpacity")?;
        Ok(unsafe { brush.GetOpacity() })
    }
}
