/// Declare a wrapper owning exactly one COM reference.
///
/// The generated type forwards nothing by itself: it provides construction (`from_com`, `from_raw`),
/// access to the reference (`as_com`, `into_com`), a private `com(method)` accessor that fails once disposed,
/// and [`Dispose`](crate::com::Dispose).
macro_rules! com_wrapper {
    (
        $(#[$attr:meta])*
        pub struct $name:ident($iface:ident);
    ) => {
        $(#[$attr])*
        pub struct $name {
            com: $crate::com::Handle<::mcom::Rc<$iface>>,
        }

        #[allow(dead_code)]
        impl $name {
            /// Wrap an owned reference.
            pub fn from_com(com: ::mcom::Rc<$iface>) -> Self {
                Self { com: $crate::com::Handle::new(::std::stringify!($iface), com) }
            }

            /// Take ownership of `ptr`, or return `None` if it's null.
            ///
            /// ### Safety
            /// `ptr` must be null, or an owned reference to a live object implementing the interface.
            pub unsafe fn from_raw(ptr: *mut $iface) -> ::std::option::Option<Self> {
                ::mcom::Rc::from_raw_opt(ptr).map(Self::from_com)
            }

            /// The wrapped reference, unless disposed.
            pub fn as_com(&self) -> ::std::result::Result<&::mcom::Rc<$iface>, $crate::com::Error> {
                self.com.get(::std::concat!(::std::stringify!($name), "::as_com"))
            }

            /// Give up ownership of the wrapped reference without releasing it.
            pub fn into_com(mut self) -> ::std::option::Option<::mcom::Rc<$iface>> {
                self.com.take()
            }

            fn com(&self, method: &'static str) -> ::std::result::Result<&::mcom::Rc<$iface>, $crate::com::Error> {
                self.com.get(method)
            }
        }

        impl $crate::com::Dispose for $name {
            fn dispose(&mut self) { self.com.release(); }
            fn is_disposed(&self) -> bool { self.com.is_disposed() }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, fmt: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                fmt.debug_struct(::std::stringify!($name))
                    .field("interface", &::std::stringify!($iface))
                    .field("disposed",  &self.com.is_disposed())
                    .finish()
            }
        }
    };
}
