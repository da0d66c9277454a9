//! Growable sequences with aliasing sub-range views.
//!
//! This module provides [`Slice`], a view of `length` elements starting at
//! `offset` inside a shared backing buffer that holds `capacity` slots from
//! that offset onward.
//!
//! # Aliasing
//!
//! Cloning a slice, or taking a sub-range of it, copies only the view. Every
//! view over the same backing buffer sees writes made through any other:
//!
//! ```rust
//! use slicemap::slice;
//!
//! let letters = slice!["a", "b", "c", "d", "e"];
//! let middle = letters.subrange(1, 4).unwrap();
//! middle.set(0, "B").unwrap();
//! assert_eq!(letters.get(1).unwrap(), "B");
//! ```
//!
//! [`Slice::append`] writes in place while spare capacity remains, and
//! otherwise moves the elements to a fresh buffer. Only the returned view
//! sees the new buffer; every other view keeps the old one.
//!
//! ```rust
//! use slicemap::slice::Slice;
//!
//! let full = Slice::<i32>::make(2, None).unwrap();
//! let grown = full.append([7]);
//! grown.set(0, 1).unwrap();
//! assert!(!grown.shares_storage(&full));
//! assert_eq!(full.get(0).unwrap(), 0);
//! ```
//!
//! # Nil and empty
//!
//! [`Slice::nil`] (also [`Default`]) has no backing buffer at all, while
//! [`Slice::empty`] has one with no room. Both have length zero and compare
//! equal; only [`Slice::is_nil`] tells them apart.

mod error;
mod growth;

pub use error::{BoundKind, SliceError};

use std::cell::RefCell;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Bound, RangeBounds};
use std::rc::Rc;

use growth::grow_capacity;

type Backing<T> = Rc<RefCell<Vec<T>>>;

// =============================================================================
// Slice Definition
// =============================================================================

/// A view into a shared, growable backing buffer.
///
/// # Time Complexity
///
/// | Operation  | Complexity           |
/// |------------|----------------------|
/// | `make`     | O(capacity)          |
/// | `get`      | O(1)                 |
/// | `set`      | O(1)                 |
/// | `append`   | O(k) amortized       |
/// | `subrange` | O(1)                 |
/// | `copy`     | O(min(len(dst), len(src))) |
/// | `equal`    | O(N)                 |
pub struct Slice<T> {
    backing: Option<Backing<T>>,
    offset: usize,
    length: usize,
    capacity: usize,
}

impl<T> Slice<T> {
    /// Returns the nil slice: no backing buffer, length and capacity zero.
    #[inline]
    #[must_use]
    pub const fn nil() -> Self {
        Self {
            backing: None,
            offset: 0,
            length: 0,
            capacity: 0,
        }
    }

    /// Returns a non-nil slice with length and capacity zero.
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::from_buffer(Vec::new(), 0)
    }

    fn from_buffer(buffer: Vec<T>, length: usize) -> Self {
        let capacity = buffer.len();
        Self {
            backing: Some(Rc::new(RefCell::new(buffer))),
            offset: 0,
            length,
            capacity,
        }
    }

    /// Returns `true` if this is the nil slice.
    #[inline]
    pub const fn is_nil(&self) -> bool {
        self.backing.is_none()
    }

    /// Number of elements visible through this view.
    #[inline]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the view has no elements. Nil slices are empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of slots from this view's start to the end of its backing buffer.
    #[inline]
    pub const fn cap(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if both views point into the same backing buffer.
    pub fn shares_storage(&self, other: &Self) -> bool {
        match (&self.backing, &other.backing) {
            (Some(left), Some(right)) => Rc::ptr_eq(left, right),
            _ => false,
        }
    }

    /// Runs `action` over the visible elements.
    ///
    /// # Panics
    ///
    /// Panics if `action` writes through any view of the same backing buffer.
    pub fn with_elements<R>(&self, action: impl FnOnce(&[T]) -> R) -> R {
        match &self.backing {
            Some(backing) => {
                let buffer = backing.borrow();
                action(&buffer[self.offset..self.offset + self.length])
            }
            None => action(&[]),
        }
    }

    /// Overwrites the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SliceError::IndexOutOfRange`] if `index >= len()`; nothing is
    /// written in that case.
    pub fn set(&self, index: usize, value: T) -> Result<(), SliceError> {
        match &self.backing {
            Some(backing) if index < self.length => {
                backing.borrow_mut()[self.offset + index] = value;
                Ok(())
            }
            _ => Err(self.index_error(index)),
        }
    }

    /// Returns a view of `[low, high)` sharing this view's backing buffer.
    ///
    /// The result has length `high - low` and capacity `cap() - low`.
    ///
    /// # Errors
    ///
    /// Returns [`SliceError::RangeOutOfRange`] unless
    /// `low <= high <= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicemap::slice;
    ///
    /// let letters = slice!["a", "b", "c", "d", "e", "f"];
    /// assert_eq!(letters.subrange(2, 5).unwrap().to_string(), "[c d e]");
    /// assert!(letters.subrange(4, 7).is_err());
    /// ```
    pub fn subrange(&self, low: usize, high: usize) -> Result<Self, SliceError> {
        self.view(low, high, self.length, BoundKind::Length)
    }

    /// Like [`Slice::subrange`], but `high` may reach into spare capacity.
    ///
    /// # Errors
    ///
    /// Returns [`SliceError::RangeOutOfRange`] unless
    /// `low <= high <= cap()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicemap::slice::Slice;
    ///
    /// let numbers = Slice::<i32>::make(1, Some(4)).unwrap();
    /// assert_eq!(numbers.reslice(0, 4).unwrap().len(), 4);
    /// ```
    pub fn reslice(&self, low: usize, high: usize) -> Result<Self, SliceError> {
        self.view(low, high, self.capacity, BoundKind::Capacity)
    }

    /// Range-syntax form of [`Slice::subrange`]: `2..5`, `..5`, `2..`, `..`.
    ///
    /// # Errors
    ///
    /// Same as [`Slice::subrange`].
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Result<Self, SliceError> {
        let low = match range.start_bound() {
            Bound::Included(&low) => low,
            Bound::Excluded(&low) => low.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let high = match range.end_bound() {
            Bound::Included(&high) => high.saturating_add(1),
            Bound::Excluded(&high) => high,
            Bound::Unbounded => self.length,
        };
        self.subrange(low, high)
    }

    fn view(
        &self,
        low: usize,
        high: usize,
        limit: usize,
        bound: BoundKind,
    ) -> Result<Self, SliceError> {
        if low > high || high > limit {
            return Err(SliceError::RangeOutOfRange {
                low,
                high,
                limit,
                bound,
            });
        }
        Ok(Self {
            backing: self.backing.clone(),
            offset: self.offset + low,
            length: high - low,
            capacity: self.capacity - low,
        })
    }

    const fn index_error(&self, index: usize) -> SliceError {
        SliceError::IndexOutOfRange {
            index,
            length: self.length,
        }
    }
}

impl<T: Default> Slice<T> {
    /// Allocates a slice of `length` zero values with room for `capacity`.
    ///
    /// `capacity` defaults to `length`. Every slot up to the capacity holds
    /// the zero value of `T`.
    ///
    /// # Errors
    ///
    /// Returns [`SliceError::InvalidArgument`] if `capacity < length`, or if
    /// `capacity` elements of `T` cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicemap::slice::Slice;
    ///
    /// let strings = Slice::<String>::make(3, None).unwrap();
    /// assert_eq!(strings.to_string(), "[  ]");
    /// assert_eq!((strings.len(), strings.cap()), (3, 3));
    /// ```
    pub fn make(length: usize, capacity: Option<usize>) -> Result<Self, SliceError> {
        let capacity = capacity.unwrap_or(length);
        if capacity < length {
            return Err(SliceError::InvalidArgument { length, capacity });
        }
        let mut buffer = Vec::new();
        if buffer.try_reserve_exact(capacity).is_err() {
            return Err(SliceError::InvalidArgument { length, capacity });
        }
        buffer.resize_with(capacity, T::default);
        Ok(Self::from_buffer(buffer, length))
    }

    /// Allocates an empty slice with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`SliceError::InvalidArgument`] if `capacity` elements cannot
    /// be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, SliceError> {
        Self::make(0, Some(capacity))
    }
}

impl<T: Clone> Slice<T> {
    /// Returns a copy of the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SliceError::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<T, SliceError> {
        match &self.backing {
            Some(backing) if index < self.length => {
                Ok(backing.borrow()[self.offset + index].clone())
            }
            _ => Err(self.index_error(index)),
        }
    }

    /// Iterates over copies of the visible elements.
    #[inline]
    pub const fn iter(&self) -> SliceIter<'_, T> {
        SliceIter {
            slice: self,
            position: 0,
        }
    }

    /// Copies the visible elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.with_elements(<[T]>::to_vec)
    }

    /// Copies `min(len(destination), len(source))` elements from `source`
    /// into `destination` and returns that count.
    ///
    /// `destination` is never resized. Overlapping views of one backing
    /// buffer copy as if through a temporary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicemap::slice::Slice;
    /// use slicemap::slice;
    ///
    /// let source = slice![1, 2, 3];
    /// let destination = Slice::<i32>::make(2, None).unwrap();
    /// assert_eq!(Slice::copy(&destination, &source), 2);
    /// assert_eq!(destination.to_string(), "[1 2]");
    /// ```
    pub fn copy(destination: &Self, source: &Self) -> usize {
        let count = destination.length.min(source.length);
        if count == 0 {
            return 0;
        }
        let elements = source.with_elements(|elements| elements[..count].to_vec());
        if let Some(backing) = &destination.backing {
            let mut buffer = backing.borrow_mut();
            let start = destination.offset;
            for (slot, element) in buffer[start..start + count].iter_mut().zip(elements) {
                *slot = element;
            }
        }
        count
    }
}

impl<T: Clone + Default> Slice<T> {
    /// Appends `values`, returning the view that holds the result.
    ///
    /// With enough spare capacity the values are written into the shared
    /// backing buffer, overwriting whatever other views saw in those slots,
    /// and the returned view shares that buffer. Otherwise the elements move
    /// to a new, larger buffer that only the returned view sees. Always use
    /// the returned view.
    ///
    /// Appending nothing returns a copy of this view, so a nil slice stays nil.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicemap::slice;
    ///
    /// let letters = slice!["a", "b", "c"];
    /// let letters = letters.append(["d"]);
    /// let letters = letters.append(["e", "f"]);
    /// assert_eq!(letters.to_string(), "[a b c d e f]");
    /// ```
    #[must_use = "append may reallocate; the returned slice is the current view"]
    pub fn append<I>(&self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = values.into_iter().collect();
        if values.is_empty() {
            return self.clone();
        }
        let needed = self.length + values.len();

        if needed <= self.capacity
            && let Some(backing) = &self.backing
        {
            let start = self.offset + self.length;
            let mut buffer = backing.borrow_mut();
            for (slot, value) in buffer[start..start + values.len()].iter_mut().zip(values) {
                *slot = value;
            }
            return Self {
                backing: Some(Rc::clone(backing)),
                offset: self.offset,
                length: needed,
                capacity: self.capacity,
            };
        }

        let new_capacity = grow_capacity(self.capacity, needed);
        tracing::debug!(
            old_capacity = self.capacity,
            new_capacity,
            length = needed,
            "append reallocated backing storage"
        );
        let mut buffer = Vec::with_capacity(new_capacity);
        self.with_elements(|elements| buffer.extend_from_slice(elements));
        buffer.extend(values);
        buffer.resize_with(new_capacity, T::default);
        Self::from_buffer(buffer, needed)
    }
}

impl<T: PartialEq> Slice<T> {
    /// Returns `true` if both views have the same length and equal elements.
    ///
    /// Nil and empty slices are equal.
    pub fn equal(left: &Self, right: &Self) -> bool {
        left.length == right.length
            && left.with_elements(|left| right.with_elements(|right| left == right))
    }
}

impl<T> Slice<Slice<T>> {
    /// Builds a two-level slice whose rows may differ in length.
    ///
    /// Row `i` has `row_lengths[i]` elements and element `(i, j)` is
    /// `element(i, j)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicemap::slice::Slice;
    ///
    /// let triangle = Slice::jagged([1, 2, 3], |row, column| row + column);
    /// assert_eq!(triangle.to_string(), "[[0] [1 2] [2 3 4]]");
    /// ```
    pub fn jagged<L, F>(row_lengths: L, mut element: F) -> Self
    where
        L: IntoIterator<Item = usize>,
        F: FnMut(usize, usize) -> T,
    {
        row_lengths
            .into_iter()
            .enumerate()
            .map(|(row, length)| {
                (0..length)
                    .map(|column| element(row, column))
                    .collect::<Slice<T>>()
            })
            .collect()
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Iterator over copies of a [`Slice`]'s elements.
///
/// Each step reads the backing buffer afresh, so writes made through other
/// views during iteration are observed.
pub struct SliceIter<'a, T> {
    slice: &'a Slice<T>,
    position: usize,
}

impl<T: Clone> Iterator for SliceIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.slice.get(self.position).ok()?;
        self.position += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.slice.length.saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for SliceIter<'_, T> {}

impl<T: Clone> FusedIterator for SliceIter<'_, T> {}

impl<'a, T: Clone> IntoIterator for &'a Slice<T> {
    type Item = T;
    type IntoIter = SliceIter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Literal Macro
// =============================================================================

/// Creates a [`Slice`] from a list of elements, like `vec!`.
///
/// `slice![]` is the empty (non-nil) slice.
///
/// # Examples
///
/// ```rust
/// use slicemap::slice;
///
/// let letters = slice!["g", "h", "i"];
/// assert_eq!(letters.to_string(), "[g h i]");
/// assert!(!slice![0_u8; 0].is_nil());
/// ```
#[macro_export]
macro_rules! slice {
    () => {
        $crate::slice::Slice::empty()
    };
    ($element:expr; $count:expr) => {
        $crate::slice::Slice::from(vec![$element; $count])
    };
    ($($element:expr),+ $(,)?) => {
        $crate::slice::Slice::from(vec![$($element),+])
    };
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for Slice<T> {
    /// Copies the view, not the elements.
    fn clone(&self) -> Self {
        Self {
            backing: self.backing.clone(),
            offset: self.offset,
            length: self.length,
            capacity: self.capacity,
        }
    }
}

impl<T> Default for Slice<T> {
    #[inline]
    fn default() -> Self {
        Self::nil()
    }
}

impl<T> From<Vec<T>> for Slice<T> {
    fn from(elements: Vec<T>) -> Self {
        let length = elements.len();
        Self::from_buffer(elements, length)
    }
}

impl<T, const N: usize> From<[T; N]> for Slice<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from(Vec::from(elements))
    }
}

impl<T> FromIterator<T> for Slice<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: PartialEq> PartialEq for Slice<T> {
    fn eq(&self, other: &Self) -> bool {
        Self::equal(self, other)
    }
}

impl<T: Eq> Eq for Slice<T> {}

impl<T: fmt::Debug> fmt::Debug for Slice<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_elements(|elements| formatter.debug_list().entries(elements).finish())
    }
}

impl<T: fmt::Display> fmt::Display for Slice<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_elements(|elements| {
            write!(formatter, "[")?;
            for (position, element) in elements.iter().enumerate() {
                if position > 0 {
                    write!(formatter, " ")?;
                }
                write!(formatter, "{element}")?;
            }
            write!(formatter, "]")
        })
    }
}

// =============================================================================
// Serde Support
// =============================================================================

/// Nil serializes as `null`; every other slice as a sequence of its visible
/// elements.
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Slice<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if self.is_nil() {
            serializer.serialize_none()
        } else {
            self.with_elements(|elements| serializer.collect_seq(elements))
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Slice<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let elements = <Option<Vec<T>> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(elements.map_or_else(Self::nil, Self::from))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_nil_and_empty_differ_only_in_nilness() {
        let nil: Slice<i32> = Slice::nil();
        let empty: Slice<i32> = Slice::empty();

        assert!(nil.is_nil());
        assert!(!empty.is_nil());
        assert_eq!(nil.len(), 0);
        assert_eq!(empty.len(), 0);
        assert_eq!(nil, empty);
    }

    #[rstest]
    fn test_make_zero_fills_capacity() {
        let numbers = Slice::<i32>::make(2, Some(5)).unwrap();
        assert_eq!(numbers.to_vec(), vec![0, 0]);
        assert_eq!(numbers.reslice(0, 5).unwrap().to_vec(), vec![0; 5]);
    }

    #[rstest]
    fn test_make_rejects_capacity_below_length() {
        let result = Slice::<i32>::make(3, Some(2));
        assert_eq!(
            result.unwrap_err(),
            SliceError::InvalidArgument {
                length: 3,
                capacity: 2
            }
        );
    }

    #[rstest]
    #[case(usize::MAX / 2)]
    #[case(usize::MAX)]
    fn test_make_rejects_unallocatable_capacity(#[case] capacity: usize) {
        assert_eq!(
            Slice::<u64>::make(0, Some(capacity)).unwrap_err(),
            SliceError::InvalidArgument {
                length: 0,
                capacity
            }
        );
        assert!(Slice::<u64>::with_capacity(capacity).is_err());
    }

    #[rstest]
    #[case(3)]
    #[case(10)]
    fn test_index_out_of_range(#[case] index: usize) {
        let numbers = slice![1, 2, 3];
        assert_eq!(
            numbers.get(index),
            Err(SliceError::IndexOutOfRange { index, length: 3 })
        );
        assert!(numbers.set(index, 9).is_err());
        assert_eq!(numbers.to_vec(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_index_on_nil() {
        let nil: Slice<i32> = Slice::nil();
        assert!(nil.get(0).is_err());
        assert!(nil.set(0, 1).is_err());
    }

    #[rstest]
    fn test_append_in_place_shares_storage() {
        let numbers = Slice::<i32>::make(1, Some(3)).unwrap();
        let appended = numbers.append([5]);

        assert!(appended.shares_storage(&numbers));
        assert_eq!(appended.cap(), 3);
        assert_eq!(numbers.reslice(0, 2).unwrap().to_vec(), vec![0, 5]);
    }

    #[rstest]
    fn test_append_beyond_capacity_detaches() {
        let numbers = slice![1, 2];
        let appended = numbers.append([3]);

        assert!(!appended.shares_storage(&numbers));
        assert_eq!(appended.cap(), 4);
        appended.set(0, 100).unwrap();
        assert_eq!(numbers.to_vec(), vec![1, 2]);
    }

    #[rstest]
    fn test_append_to_subrange_overwrites_original() {
        let numbers = slice![1, 2, 3, 4];
        let head = numbers.subrange(0, 2).unwrap();
        let head = head.append([30]);

        assert_eq!(numbers.to_vec(), vec![1, 2, 30, 4]);
        assert_eq!(head.to_vec(), vec![1, 2, 30]);
    }

    #[rstest]
    fn test_append_nothing_keeps_nil() {
        let nil: Slice<i32> = Slice::nil();
        assert!(nil.append([]).is_nil());
        assert!(!nil.append([1]).is_nil());
    }

    #[rstest]
    fn test_copy_stops_at_shorter_length() {
        let source = slice![1, 2];
        let destination = slice![0, 0, 0];
        assert_eq!(Slice::copy(&destination, &source), 2);
        assert_eq!(destination.to_vec(), vec![1, 2, 0]);
    }

    #[rstest]
    fn test_copy_between_overlapping_views() {
        let numbers = slice![1, 2, 3, 4, 5];
        let tail = numbers.subrange(1, 5).unwrap();
        assert_eq!(Slice::copy(&tail, &numbers), 4);
        assert_eq!(numbers.to_vec(), vec![1, 1, 2, 3, 4]);
    }

    #[rstest]
    fn test_copy_into_nil() {
        let nil: Slice<i32> = Slice::nil();
        assert_eq!(Slice::copy(&nil, &slice![1, 2]), 0);
    }

    #[rstest]
    #[case(2, 5, &["c", "d", "e"])]
    #[case(0, 0, &[])]
    #[case(6, 6, &[])]
    #[case(0, 6, &["a", "b", "c", "d", "e", "f"])]
    fn test_subrange_contents(
        #[case] low: usize,
        #[case] high: usize,
        #[case] expected: &[&str],
    ) {
        let letters = slice!["a", "b", "c", "d", "e", "f"];
        let view = letters.subrange(low, high).unwrap();
        assert_eq!(view.len(), high - low);
        assert_eq!(view.to_vec(), expected);
    }

    #[rstest]
    #[case(3, 2)]
    #[case(0, 7)]
    #[case(7, 7)]
    fn test_subrange_rejects_bad_bounds(#[case] low: usize, #[case] high: usize) {
        let letters = slice!["a", "b", "c", "d", "e", "f"];
        let error = letters.subrange(low, high).unwrap_err();
        assert_eq!(
            error,
            SliceError::RangeOutOfRange {
                low,
                high,
                limit: 6,
                bound: BoundKind::Length
            }
        );
    }

    #[rstest]
    fn test_subrange_capacity_counts_from_low() {
        let numbers = Slice::<i32>::make(4, Some(10)).unwrap();
        let view = numbers.subrange(1, 3).unwrap();
        assert_eq!(view.cap(), 9);
        assert!(view.reslice(0, 9).is_ok());
        assert!(view.reslice(0, 10).is_err());
    }

    #[rstest]
    fn test_slice_range_forms() {
        let letters = slice!["a", "b", "c", "d", "e", "f"];
        assert_eq!(letters.slice(2..5).unwrap().to_string(), "[c d e]");
        assert_eq!(letters.slice(..5).unwrap().to_string(), "[a b c d e]");
        assert_eq!(letters.slice(2..).unwrap().to_string(), "[c d e f]");
        assert_eq!(letters.slice(1..=2).unwrap().to_string(), "[b c]");
        assert_eq!(letters.slice(..).unwrap(), letters);
        assert!(letters.slice(..=usize::MAX).is_err());
    }

    #[rstest]
    fn test_iter_is_exact_size() {
        let numbers = slice![1, 2, 3];
        let mut iter = numbers.iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.collect::<Vec<_>>(), vec![2, 3]);
    }

    #[rstest]
    fn test_display_nested() {
        let nested = Slice::jagged([1, 2, 3], |row, column| row + column);
        assert_eq!(nested.to_string(), "[[0] [1 2] [2 3 4]]");
    }

    #[rstest]
    fn test_debug() {
        assert_eq!(format!("{:?}", slice!["a", "b"]), r#"["a", "b"]"#);
        assert_eq!(format!("{:?}", Slice::<i32>::nil()), "[]");
    }
}
