//! [Direct2D](https://docs.microsoft.com/en-us/windows/win32/direct2d/direct2d-portal) related functions and types

mod enums;                              pub use enums::*;
mod types;                              pub use types::*;

#[cfg(windows)] mod bitmap;             #[cfg(windows)] pub use bitmap::*;
#[cfg(windows)] mod brush;              #[cfg(windows)] pub use brush::*;
#[cfg(windows)] mod factory;            #[cfg(windows)] pub use factory::*;
#[cfg(windows)] mod render_target;      #[cfg(windows)] pub use render_target::*;
