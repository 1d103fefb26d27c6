//! Misc. utility types and functions

mod send_sync_cell;             #[allow(unused_imports)] pub(crate) use send_sync_cell::*;
mod wide;                       #[allow(unused_imports)] pub(crate) use wide::*;
#[cfg(all(test, windows))] mod hidden_window;   #[cfg(all(test, windows))] pub(crate) use hidden_window::*;
