//! Zero values.
//!
//! Every container in this crate falls back to a per-type zero value: a map
//! lookup that misses, and every freshly allocated slot of a slice. The zero
//! value of a type is its [`Default`] value, named explicitly here so call
//! sites read as "the zero value" rather than "some default".
//!
//! | Type               | Zero value |
//! |--------------------|------------|
//! | integers, floats   | `0`        |
//! | `bool`             | `false`    |
//! | `String`, `&str`   | `""`       |
//! | [`crate::slice::Slice`] | nil   |

/// Returns the zero value of `T`.
///
/// # Examples
///
/// ```rust
/// use slicemap::zero::zero_value;
///
/// let count: i32 = zero_value();
/// let name: String = zero_value();
/// assert_eq!(count, 0);
/// assert!(name.is_empty());
/// ```
#[inline]
#[must_use]
pub fn zero_value<T: Default>() -> T {
    T::default()
}

/// Returns `true` if `value` equals the zero value of its type.
///
/// # Examples
///
/// ```rust
/// use slicemap::zero::is_zero_value;
///
/// assert!(is_zero_value(&0_u8));
/// assert!(!is_zero_value(&"apple"));
/// ```
#[inline]
#[must_use]
pub fn is_zero_value<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}
