//! [DirectInput 8](https://docs.microsoft.com/en-us/previous-versions/windows/desktop/ee416842(v=vs.85)) related functions and types
//!
//! Keyboards, mice and game controllers, read by polling or through a per-device event buffer.

mod enums;                              pub use enums::*;
mod state;                              pub use state::*;

#[cfg(windows)] pub mod sys;
#[cfg(windows)] mod device;             #[cfg(windows)] pub use device::*;
#[cfg(windows)] mod direct_input;       #[cfg(windows)] pub use direct_input::*;
#[cfg(windows)] mod formats;            #[cfg(windows)] pub use formats::*;

#[cfg(windows)] pub use sys::{GUID_SysKeyboard, GUID_SysMouse, GUID_Joystick};
