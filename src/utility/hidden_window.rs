//! An invisible window, for tests of APIs that insist on an `HWND`

use super::to_wide_nul;

use winapi::shared::windef::HWND;
use winapi::um::libloaderapi::GetModuleHandleW;
use winapi::um::winuser::{CreateWindowExW, DestroyWindow, WS_OVERLAPPEDWINDOW};

use std::ptr::{null, null_mut};



/// A 64x64 `STATIC` window that's never shown.  Destroyed on drop, which must happen on the creating thread.
pub(crate) struct HiddenWindow(HWND);

impl HiddenWindow {
    pub fn new() -> Self {
        let class = to_wide_nul("STATIC");
        let title = to_wide_nul("dxbind test window");
        let hwnd = unsafe { CreateWindowExW(
            0, class.as_ptr(), title.as_ptr(), WS_OVERLAPPEDWINDOW,
            0, 0, 64, 64,
            null_mut(), null_mut(), GetModuleHandleW(null()), null_mut(),
        )};
        assert!(!hwnd.is_null(), "CreateWindowExW failed");
        Self(hwnd)
    }

    pub fn hwnd(&self) -> HWND { self.0 }
}

impl Drop for HiddenWindow {
    fn drop(&mut self) { unsafe { DestroyWindow(self.0) }; }
}
