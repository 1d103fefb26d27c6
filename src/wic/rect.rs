/// [`WICRect`](https://docs.microsoft.com/en-us/windows/win32/api/wincodec/ns-wincodec-wicrect):
/// a pixel rectangle, by origin and extent.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x:      i32,
    pub y:      i32,
    pub width:  i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self { Self { x, y, width, height } }

    /// The rectangle covering an entire `width` x `height` image.
    pub const fn whole(width: u32, height: u32) -> Self { Self::new(0, 0, width as i32, height as i32) }
}

#[cfg(windows)] impl From<Rect> for winapi::um::wincodec::WICRect {
    fn from(r: Rect) -> Self { Self { X: r.x, Y: r.y, Width: r.width, Height: r.height } }
}



#[test] fn layout() {
    assert_eq!(std::mem::size_of::<Rect>(), 16);
    assert_eq!(Rect::whole(3, 4), Rect::new(0, 0, 3, 4));
}

#[cfg(windows)] #[test] fn layout_matches_winapi() {
    use winapi::um::wincodec::WICRect;
    assert_eq!(std::mem::size_of::<Rect>(), std::mem::size_of::<WICRect>());
    let r = WICRect::from(Rect::new(1, 2, 3, 4));
    assert_eq!((r.X, r.Y, r.Width, r.Height), (1, 2, 3, 4));
}
