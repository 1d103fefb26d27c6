//! Declarative helpers shared by every API family

#[macro_use] mod native;
#[cfg(windows)] #[macro_use] mod com_wrapper;
