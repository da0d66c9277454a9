//! Error types for slice operations.
//!
//! Slice misuse falls into two classes: a malformed allocation request
//! ([`SliceError::InvalidArgument`]) and an access outside the valid bounds
//! ([`SliceError::IndexOutOfRange`] or [`SliceError::RangeOutOfRange`]).
//! Neither leaves a partial mutation behind.

use std::fmt;

/// Which limit a sub-range was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundKind {
    /// The view's length.
    Length,
    /// The view's capacity.
    Capacity,
}

impl fmt::Display for BoundKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length => write!(formatter, "length"),
            Self::Capacity => write!(formatter, "capacity"),
        }
    }
}

/// Errors produced by [`Slice`](super::Slice) operations.
///
/// # Examples
///
/// ```rust
/// use slicemap::slice::{Slice, SliceError};
///
/// let error = Slice::<i32>::make(5, Some(3)).unwrap_err();
/// assert_eq!(error, SliceError::InvalidArgument { length: 5, capacity: 3 });
/// assert_eq!(error.to_string(), "makeslice: cap out of range (len 5, cap 3)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliceError {
    /// An allocation asked for less capacity than length, or for more than
    /// can be allocated.
    InvalidArgument {
        /// The requested length.
        length: usize,
        /// The requested capacity.
        capacity: usize,
    },
    /// An index was outside `[0, length)`.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The view's length.
        length: usize,
    },
    /// A sub-range violated `low <= high <= limit`.
    RangeOutOfRange {
        /// Inclusive lower bound.
        low: usize,
        /// Exclusive upper bound.
        high: usize,
        /// The limit `high` was checked against.
        limit: usize,
        /// Whether `limit` is the length or the capacity.
        bound: BoundKind,
    },
}

impl SliceError {
    /// Returns `true` for the out-of-range class (index or sub-range).
    #[inline]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange { .. } | Self::RangeOutOfRange { .. }
        )
    }
}

impl fmt::Display for SliceError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { length, capacity } => write!(
                formatter,
                "makeslice: cap out of range (len {length}, cap {capacity})"
            ),
            Self::IndexOutOfRange { index, length } => write!(
                formatter,
                "index out of range [{index}] with length {length}"
            ),
            Self::RangeOutOfRange {
                low,
                high,
                limit,
                bound,
            } => write!(
                formatter,
                "slice bounds out of range [{low}:{high}] with {bound} {limit}"
            ),
        }
    }
}

impl std::error::Error for SliceError {}
