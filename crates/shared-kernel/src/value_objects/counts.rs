// crates/shared-kernel/src/value_objects/counts.rs
use std::ops::AddAssign;

macro_rules! count_value_object {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(usize);

        impl $name {
            #[inline]
            pub const fn new(value: usize) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn zero() -> Self {
                Self(0)
            }

            #[inline]
            pub const fn value(self) -> usize {
                self.0
            }
        }

        impl AddAssign<usize> for $name {
            fn add_assign(&mut self, rhs: usize) {
                self.0 += rhs;
            }
        }
    };
}

count_value_object!(
    /// Length of the raw, undecoded input in bytes.
    ByteCount
);

count_value_object!(
    /// Number of Unicode scalar values in the decoded text.
    CharCount
);

count_value_object!(
    /// Number of maximal non-whitespace runs.
    WordCount
);

count_value_object!(
    /// Number of `\n` terminators; an unterminated final line is not included.
    LineCount
);
