//! COM ownership, HRESULTs and errors shared by every API family

mod error;                      pub use error::*;
mod handle;                     pub use handle::*;
mod hresult;                    pub use hresult::*;
#[cfg(windows)] mod apartment;  #[cfg(windows)] pub use apartment::*;
