/// Declare a `#[repr(transparent)]` newtype mirroring a native enumeration.
///
/// Every member becomes an associated constant carrying the exact native value.
/// Values the crate doesn't know about (e.g. returned by a newer runtime) remain representable.
macro_rules! native_enum {
    (
        $(#[$attr:meta])*
        pub struct $name:ident($raw:ty);
        $(
            $(#[$cattr:meta])*
            $konst:ident = $value:expr,
        )*
    ) => {
        $(#[$attr])*
        #[repr(transparent)]
        #[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub $raw);

        #[allow(non_upper_case_globals)]
        impl $name {
            $(
                $(#[$cattr])*
                pub const $konst : Self = Self($value);
            )*

            /// The native value.
            pub const fn raw(self) -> $raw { self.0 }

            /// The native member name, if `self` is a known member.
            pub fn name(self) -> ::std::option::Option<&'static str> {
                $( if self == Self::$konst { return ::std::option::Option::Some(::std::stringify!($konst)); } )*
                ::std::option::Option::None
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, fmt: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self.name() {
                    ::std::option::Option::Some(name)   => ::std::write!(fmt, "{}::{}", ::std::stringify!($name), name),
                    ::std::option::Option::None         => ::std::write!(fmt, "{}({:#x})", ::std::stringify!($name), self.0),
                }
            }
        }

        impl ::std::convert::From<$name> for $raw {
            fn from(value: $name) -> $raw { value.0 }
        }
    };
}

/// Declare a `#[repr(transparent)]` newtype mirroring a native flag set.
///
/// Like [`native_enum!`], plus bit operators and `contains`/`intersects`.
macro_rules! native_flags {
    (
        $(#[$attr:meta])*
        pub struct $name:ident($raw:ty);
        $(
            $(#[$cattr:meta])*
            $konst:ident = $value:expr,
        )*
    ) => {
        $(#[$attr])*
        #[repr(transparent)]
        #[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub $raw);

        #[allow(non_upper_case_globals)]
        #[allow(dead_code)]
        impl $name {
            $(
                $(#[$cattr])*
                pub const $konst : Self = Self($value);
            )*

            /// No bits set.
            pub const fn empty() -> Self { Self(0) }

            /// The native value.
            pub const fn bits(self) -> $raw { self.0 }

            /// Wrap a native value as-is, unknown bits included.
            pub const fn from_bits(bits: $raw) -> Self { Self(bits) }

            pub const fn is_empty(self) -> bool { self.0 == 0 }

            /// `true` if every bit of `other` is set in `self`.
            pub const fn contains(self, other: Self) -> bool { self.0 & other.0 == other.0 }

            /// `true` if any bit of `other` is set in `self`.
            pub const fn intersects(self, other: Self) -> bool { self.0 & other.0 != 0 }
        }

        impl ::std::ops::BitOr          for $name { type Output = Self; fn bitor (self, rhs: Self) -> Self { Self(self.0 | rhs.0) } }
        impl ::std::ops::BitAnd         for $name { type Output = Self; fn bitand(self, rhs: Self) -> Self { Self(self.0 & rhs.0) } }
        impl ::std::ops::BitOrAssign    for $name { fn bitor_assign (&mut self, rhs: Self) { self.0 |= rhs.0; } }
        impl ::std::ops::BitAndAssign   for $name { fn bitand_assign(&mut self, rhs: Self) { self.0 &= rhs.0; } }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, fmt: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::write!(fmt, "{}(", ::std::stringify!($name))?;
                // anything already cleared from `rest` has been written
                let mut rest = self.0;
                $(
                    let bits = Self::$konst.0;
                    if bits != 0 && rest & bits == bits {
                        if rest != self.0 { fmt.write_str(" | ")?; }
                        fmt.write_str(::std::stringify!($konst))?;
                        rest &= !bits;
                    }
                )*
                if rest != 0 {
                    if rest != self.0 { fmt.write_str(" | ")?; }
                    ::std::write!(fmt, "{:#x}", rest)?;
                }
                fmt.write_str(")")
            }
        }

        impl ::std::convert::From<$name> for $raw {
            fn from(value: $name) -> $raw { value.0 }
        }
    };
}



#[cfg(test)] native_flags! {
    pub struct Bits(u32);
    A   = 1,
    B   = 2,
    AB  = 3,
    C   = 8,
}

#[test] fn flags_debug() {
    assert_eq!(format!("{:?}", Bits::empty()),                  "Bits()");
    assert_eq!(format!("{:?}", Bits::C),                        "Bits(C)");
    assert_eq!(format!("{:?}", Bits::AB),                       "Bits(A | B)");
    assert_eq!(format!("{:?}", Bits::from_bits(0x13)),          "Bits(A | B | 0x10)");
    assert_eq!(format!("{:?}", Bits::from_bits(0x10)),          "Bits(0x10)");
    assert_eq!(format!("{:?}", Bits::C | Bits::from_bits(0x20)), "Bits(C | 0x20)");
}
