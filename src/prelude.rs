//! Traits most code wants in scope, plus the crates that appear in this crate's public API.



// crates

#[cfg(windows)] pub use ::mcom;
#[cfg(windows)] pub use ::winapi;



// traits

#[doc(no_inline)] pub use crate::com::Dispose;
#[cfg(all(windows, feature = "d2d1" ))] #[doc(no_inline)] pub use crate::d2d1::Brush;
#[cfg(all(windows, feature = "d3d11"))] #[doc(no_inline)] pub use crate::d3d11::Resource;
#[cfg(all(windows, feature = "wic"  ))] #[doc(no_inline)] pub use crate::wic::BitmapSource;
