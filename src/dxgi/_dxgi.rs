//! [DXGI](https://docs.microsoft.com/en-us/windows/win32/direct3ddxgi/dx-graphics-dxgi) related functions and types

mod desc;                               pub use desc::*;
mod enums;                              pub use enums::*;

#[cfg(windows)] mod adapter;            #[cfg(windows)] pub use adapter::*;
#[cfg(windows)] mod device;             #[cfg(windows)] pub use device::*;
#[cfg(windows)] mod factory;            #[cfg(windows)] pub use factory::*;
#[cfg(windows)] mod keyed_mutex;        #[cfg(windows)] pub use keyed_mutex::*;
#[cfg(windows)] mod output;             #[cfg(windows)] pub use output::*;
#[cfg(windows)] mod surface;            #[cfg(windows)] pub use surface::*;
#[cfg(windows)] mod swap_chain;         #[cfg(windows)] pub use swap_chain::*;
