//! The result of a map lookup.

use std::fmt;

/// A value paired with a flag saying whether its key was present.
///
/// A missing key produces the zero value of `V` with `present == false`, so a
/// stored zero and an absent key stay distinguishable.
///
/// # Examples
///
/// ```rust
/// use slicemap::map::Map;
///
/// let map = Map::from([("zero".to_string(), 0)]);
///
/// let stored = map.get("zero");
/// let missing = map.get("other");
/// assert_eq!(stored.value(), missing.value());
/// assert!(stored.is_present());
/// assert!(!missing.is_present());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lookup<V> {
    value: V,
    present: bool,
}

impl<V> Lookup<V> {
    /// A lookup that found `value`.
    #[inline]
    pub const fn found(value: V) -> Self {
        Self {
            value,
            present: true,
        }
    }

    /// A lookup that missed, carrying the zero value of `V`.
    #[inline]
    pub fn missing() -> Self
    where
        V: Default,
    {
        Self {
            value: V::default(),
            present: false,
        }
    }

    /// The looked-up value, or the zero value on a miss.
    #[inline]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Whether the key was present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        self.present
    }

    /// Consumes the lookup, returning only the value.
    #[inline]
    pub fn into_value(self) -> V {
        self.value
    }

    /// Consumes the lookup, returning `(value, present)`.
    #[inline]
    pub fn into_pair(self) -> (V, bool) {
        (self.value, self.present)
    }

    /// Converts to an `Option`, dropping the zero value on a miss.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicemap::map::Lookup;
    ///
    /// assert_eq!(Lookup::found(3).into_option(), Some(3));
    /// assert_eq!(Lookup::<i32>::missing().into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<V> {
        self.present.then_some(self.value)
    }
}

impl<V> From<Lookup<V>> for (V, bool) {
    #[inline]
    fn from(lookup: Lookup<V>) -> Self {
        lookup.into_pair()
    }
}

impl<V: fmt::Display> fmt::Display for Lookup<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({},{})", self.value, self.present)
    }
}
