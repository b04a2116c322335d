//! Strongly-typed handles passed across the boundary.
//!
//! A handle packs an arena slot and that slot's generation into one `u64`:
//! low 32 bits hold `slot + 1`, high 32 bits the generation. Zero is never a
//! live handle and doubles as the failure sentinel.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! new_handle {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Ord, PartialOrd,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Failure sentinel.
            pub const INVALID: Self = Self(0);

            pub const fn new(v: u64) -> Self {
                Self(v)
            }
            pub const fn get(self) -> u64 {
                self.0
            }
            pub const fn from_parts(slot: u32, generation: u32) -> Self {
                Self(((generation as u64) << 32) | (slot as u64 + 1))
            }
            /// Arena slot, or `None` for the sentinel.
            pub const fn slot(self) -> Option<usize> {
                let low = (self.0 & 0xFFFF_FFFF) as usize;
                if low == 0 {
                    None
                } else {
                    Some(low - 1)
                }
            }
            pub const fn generation(self) -> u32 {
                (self.0 >> 32) as u32
            }
            pub const fn is_valid(self) -> bool {
                self.0 & 0xFFFF_FFFF != 0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({:#x})", stringify!($name), self.0)
            }
        }
    };
}

new_handle!(TableHandle);
new_handle!(GroupHandle);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_unpack() {
        let h = TableHandle::from_parts(7, 3);
        assert_eq!(h.slot(), Some(7));
        assert_eq!(h.generation(), 3);
        assert!(h.is_valid());
        assert!(!TableHandle::INVALID.is_valid());
        assert_eq!(TableHandle::INVALID.slot(), None);
    }

    #[test]
    fn generations_make_distinct_handles() {
        assert_ne!(GroupHandle::from_parts(0, 0), GroupHandle::from_parts(0, 1));
    }
}
