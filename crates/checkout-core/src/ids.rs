//! Strongly typed, zero-cost identifier wrappers.
//!
//! Both IDs are 1-based: register numbers run `1..=n` and customers are
//! numbered in input order starting at 1.  They are `Copy + Ord + Hash` so
//! they sort and key maps without ceremony.

use std::fmt;

/// Generate a typed 1-based ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) => $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The first valid ID.
            pub const FIRST: $name = $name(1);

            /// Zero-based slot for direct `Vec` indexing.
            ///
            /// # Panics
            /// Panics in debug mode on the (invalid) ID 0.
            #[inline(always)]
            pub fn slot(self) -> usize {
                self.0 as usize - 1
            }

            /// The following ID.
            #[inline(always)]
            pub fn next(self) -> $name {
                $name(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, " #{}"), self.0)
            }
        }
    };
}

typed_id! {
    /// Sequence number of a customer in input order.
    pub struct CustomerId(u32) => "customer";
}

typed_id! {
    /// Register number, `1..=n`.  Register `n` is the training register.
    pub struct RegisterId(u32) => "register";
}
