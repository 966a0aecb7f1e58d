//! Small hash based containers that work with and without `std`.
//!
//! - [`OrderedSet`] keeps unique elements in insertion order with O(1)
//!   membership tests.
//! - [`Set`] keeps unique elements without any order.
//! - [`TypeMap`] stores at most one value per distinct type.
//!
//! With the `serde` feature both sets (de)serialize as a sequence of their
//! elements. The `json` feature adds JSON helpers and the [`Error`] type.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std as alloc;

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "json")]
mod error;
#[cfg(feature = "json")]
mod json;
pub mod ordered_set;
#[cfg(feature = "serde")]
mod serde;
pub mod set;
pub mod type_map;

#[cfg(feature = "json")]
pub use self::error::{Error, Result};
pub use self::ordered_set::OrderedSet;
pub use self::set::Set;
pub use self::type_map::{TypeKey, TypeMap, Value};

/// The hasher used by the sets unless another one is given.
pub use hashbrown::DefaultHashBuilder;

/// A slot index referencing an element in the vector of an [`OrderedSet`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct SlotIndex(usize);

impl SlotIndex {
    /// Returns the raw `usize` index of the [`SlotIndex`].
    pub fn index(self) -> usize {
        self.0
    }
}
