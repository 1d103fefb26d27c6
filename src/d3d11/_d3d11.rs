//! [Direct3D 11](https://docs.microsoft.com/en-us/windows/win32/direct3d11/atoc-dx-graphics-direct3d-11) related functions and types

mod desc;                               pub use desc::*;
mod enums;                              pub use enums::*;

#[cfg(windows)] mod context;            #[cfg(windows)] pub use context::*;
#[cfg(windows)] mod device;             #[cfg(windows)] pub use device::*;
#[cfg(windows)] mod resources;          #[cfg(windows)] pub use resources::*;
