use std::ops::Deref;



/// Mark a value as Send + Sync, even if `T` isn't.
///
/// Used for immutable native tables (e.g. DirectInput data formats) that embed raw pointers to `'static` data.
pub struct SendSyncCell<T>(T);

impl<T> SendSyncCell<T> {
    /// Mark a value as Send + Sync, even if `T` isn't.
    ///
    /// ### Safety
    ///
    /// `T` must be safe to send and share between threads.
    /// In practice: every pointer it contains points to immutable `'static` data.
    pub const unsafe fn new(value: T) -> Self { Self(value) }
}

unsafe impl<T> Send for SendSyncCell<T> {}
unsafe impl<T> Sync for SendSyncCell<T> {}

impl<T> Deref for SendSyncCell<T> {
    type Target = T;
    fn deref(&self) -> &T { &self.0 }
}



#[test] fn shares_raw_pointer_table() {
    static VALUE : u32 = 7;
    lazy_static::lazy_static! {
        static ref TABLE : SendSyncCell<[*const u32; 2]> = unsafe { SendSyncCell::new([&VALUE as *const u32, std::ptr::null()]) };
    }
    let t = std::thread::spawn(|| unsafe { *TABLE[0] }).join().unwrap();
    assert_eq!(t, 7);
    assert!(TABLE[1].is_null());
}
