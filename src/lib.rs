//! # slicemap
//!
//! Zero-value maps and aliasing growable slices.
//!
//! ## Overview
//!
//! This library models two container contracts that many languages build in
//! but Rust's standard library expresses differently:
//!
//! - **Map**: a key-unique map whose lookups report presence explicitly and
//!   fall back to the value type's zero value on a miss
//! - **Slice**: a growable sequence with decoupled length and capacity, whose
//!   sub-range views share backing storage until a reallocating append
//!   detaches them
//! - **Zero values**: an explicit per-type default used by both containers
//! - **Tour**: console walkthroughs printing the behaviour of each container
//!
//! ## Feature Flags
//!
//! - `map`: the [`map::Map`] container
//! - `slice`: the [`slice::Slice`] container
//! - `tour`: console demonstration routines and the `slicemap-tour` binary
//! - `serde`: serialization support for both containers
//! - `fxhash` / `ahash`: faster hashers for [`map::Map`]
//!
//! ## Example
//!
//! ```rust
//! use slicemap::prelude::*;
//!
//! let mut map: Map<String, i32> = Map::new();
//! map.set("k1".to_string(), 7);
//! assert_eq!(map.get("k1").into_pair(), (7, true));
//! assert_eq!(map.get("k3").into_pair(), (0, false));
//!
//! let letters = slice!["a", "b", "c", "d"];
//! let middle = letters.subrange(1, 3).unwrap();
//! middle.set(0, "B").unwrap();
//! assert_eq!(letters.to_string(), "[a B c d]");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use slicemap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::zero::zero_value;

    #[cfg(feature = "map")]
    pub use crate::map::{Lookup, Map};

    #[cfg(feature = "slice")]
    pub use crate::slice;
    #[cfg(feature = "slice")]
    pub use crate::slice::{Slice, SliceError, SliceIter};
}

pub mod zero;

#[cfg(feature = "map")]
pub mod map;

#[cfg(feature = "slice")]
pub mod slice;

#[cfg(feature = "tour")]
pub mod tour;
