//! [Windows Imaging Component](https://docs.microsoft.com/en-us/windows/win32/wic/-wic-lh) related functions and types
//!
//! Every WIC object requires COM to be initialized on the creating thread, see [`crate::com::initialize`].

mod enums;                              pub use enums::*;
mod rect;                               pub use rect::*;

#[cfg(windows)] mod guids;              #[cfg(windows)] pub use guids::*;
#[cfg(windows)] mod bitmap;             #[cfg(windows)] pub use bitmap::*;
#[cfg(windows)] mod decoder;            #[cfg(windows)] pub use decoder::*;
#[cfg(windows)] mod encoder;            #[cfg(windows)] pub use encoder::*;
#[cfg(windows)] mod factory;            #[cfg(windows)] pub use factory::*;
#[cfg(windows)] mod source;             #[cfg(windows)] pub use source::*;
#[cfg(windows)] mod stream;             #[cfg(windows)] pub use stream::*;
#[cfg(windows)] mod transform;          #[cfg(windows)] pub use transform::*;
