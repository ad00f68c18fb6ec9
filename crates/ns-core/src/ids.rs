//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into per-agent and per-node `Vec`s, but callers should
//! prefer the `.index()` helpers for clarity.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID": the inner type's `MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Build from a `Vec` index.
            ///
            /// # Panics
            /// Panics in debug mode if `i` does not fit the inner type.  Only
            /// layer counts are checked up front; callers keep agent and node
            /// counts below the inner type's `MAX`.
            #[inline(always)]
            pub fn from_index(i: usize) -> Self {
                debug_assert!(i < <$inner>::MAX as usize);
                $name(i as $inner)
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of an agent in per-agent storage.
    pub struct AgentId(u32);
}

typed_id! {
    /// Dense index of a graph node, assigned at graph construction.
    ///
    /// External node labels of any hashable type are remapped to `NodeId`s
    /// by the graph builders; all simulation lookups use the dense index.
    pub struct NodeId(u32);
}

typed_id! {
    /// Index of a layer in a multilayer graph space.  `u16` is ample: a
    /// layer per season, and seasons per year are few.
    pub struct LayerId(u16);
}
