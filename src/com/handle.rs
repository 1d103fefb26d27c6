use super::Error;



/// Explicit, idempotent release of a wrapper's native reference.
///
/// Dropping a wrapper releases it too; `dispose` only lets callers release early.
/// Once disposed, every forwarding method of the wrapper returns an [`Error`] for which
/// [`is_disposed`](Error::is_disposed) is `true`, without touching the native object.
pub trait Dispose {
    /// Release the native reference.  Does nothing if already released.
    fn dispose(&mut self);

    /// `true` once [`dispose`](Self::dispose) has been called (or the reference was handed out).
    fn is_disposed(&self) -> bool;
}

/// A slot owning exactly one native reference until released.
pub struct Handle<T> {
    value:      Option<T>,
    interface:  &'static str,
}

impl<T> Handle<T> {
    /// Own `value`, a reference to `interface` (used only in error messages and logs).
    pub fn new(interface: &'static str, value: T) -> Self {
        Self { value: Some(value), interface }
    }

    pub fn interface(&self) -> &'static str { self.interface }

    /// The owned reference, or a disposed [`Error`] attributed to `method`.
    pub fn get(&self, method: &'static str) -> Result<&T, Error> {
        self.value.as_ref().ok_or_else(|| Error::disposed(method, self.interface))
    }

    pub fn is_disposed(&self) -> bool { self.value.is_none() }

    /// Drop the owned reference.  Returns `false` if there was nothing left to release.
    pub fn release(&mut self) -> bool {
        match self.value.take() {
            Some(value) => {
                drop(value);
                tracing::trace!(interface = self.interface, "released");
                true
            },
            None => false,
        }
    }

    /// Move the owned reference out without releasing it.  The handle behaves as disposed afterwards.
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }
}

impl<T> Dispose for Handle<T> {
    fn dispose(&mut self) { self.release(); }
    fn is_disposed(&self) -> bool { self.value.is_none() }
}



#[cfg(test)] use std::cell::Cell;
#[cfg(test)] use std::rc::Rc;

#[cfg(test)] struct Releases(Rc<Cell<u32>>);
#[cfg(test)] impl Drop for Releases { fn drop(&mut self) { self.0.set(self.0.get() + 1); } }

#[test] fn release_once() {
    let count = Rc::new(Cell::new(0));
    let mut h = Handle::new("IUnknown", Releases(count.clone()));
    assert!(!h.is_disposed());
    assert!(h.get("test").is_ok());

    assert!( h.release());  assert_eq!(count.get(), 1);
    assert!(!h.release());  assert_eq!(count.get(), 1);
    h.dispose();            assert_eq!(count.get(), 1);
    assert!(h.is_disposed());

    drop(h);                assert_eq!(count.get(), 1);
}

#[test] fn get_after_dispose() {
    let mut h = Handle::new("IDXGISwapChain", 42);
    assert_eq!(*h.get("SwapChain::present").unwrap(), 42);
    h.dispose();
    let err = h.get("SwapChain::present").unwrap_err();
    assert!(err.is_disposed());
    assert_eq!(err.method(), "SwapChain::present");
    assert_eq!(err.kind(), super::ErrorKind::Disposed("IDXGISwapChain"));
}

#[test] fn drop_without_dispose_releases() {
    let count = Rc::new(Cell::new(0));
    drop(Handle::new("IUnknown", Releases(count.clone())));
    assert_eq!(count.get(), 1);
}

#[test] fn take_hands_out_ownership() {
    let count = Rc::new(Cell::new(0));
    let mut h = Handle::new("IUnknown", Releases(count.clone()));
    let taken = h.take().unwrap();
    assert!(h.is_disposed());
    assert!(!h.release());
    assert_eq!(count.get(), 0);
    drop(taken);
    assert_eq!(count.get(), 1);
}
