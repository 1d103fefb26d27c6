#![deny(unreachable_patterns)]
//! Thin, disposal-checked bindings over Direct2D, Direct3D 11, DXGI, DirectInput 8 and WIC.
//!
//! Every wrapper owns exactly one COM reference, forwards calls as-is, and can be
//! [`dispose`](com::Dispose::dispose)d early.  Calls on a disposed wrapper fail instead of reaching native code.

#[macro_use] #[path = "macros/_macros.rs"] mod macros;

#[path = "com/_com.rs"          ] pub mod com;
#[path = "utility/_utility.rs"  ] pub(crate) mod utility;
#[path = "prelude.rs"           ] pub mod prelude;

#[cfg(feature = "d2d1"  )] #[path = "d2d1/_d2d1.rs"     ] pub mod d2d1;
#[cfg(feature = "d3d11" )] #[path = "d3d11/_d3d11.rs"   ] pub mod d3d11;
#[cfg(feature = "dinput")] #[path = "dinput/_dinput.rs" ] pub mod dinput;
#[cfg(feature = "dxgi"  )] #[path = "dxgi/_dxgi.rs"     ] pub mod dxgi;
#[cfg(feature = "wic"   )] #[path = "wic/_wic.rs"       ] pub mod wic;
