//! Key/value map with zero-value lookups.
//!
//! This module provides [`Map`], a mutable key-unique map whose lookups
//! return a [`Lookup`]: the stored value with `present == true`, or the zero
//! value of the value type with `present == false`.
//!
//! # Examples
//!
//! ```rust
//! use slicemap::map::Map;
//!
//! let mut map: Map<String, i32> = Map::new();
//! map.set("k1".to_string(), 7);
//! map.set("k2".to_string(), 13);
//! assert_eq!(map.to_string(), "map[k1:7 k2:13]");
//!
//! map.delete("k2");
//! assert_eq!(map.to_string(), "map[k1:7]");
//!
//! map.clear();
//! assert_eq!(map.get("k2").into_pair(), (0, false));
//! ```
//!
//! # Hashing
//!
//! The default hasher is the standard library's `RandomState`. The `fxhash`
//! feature switches to `rustc-hash` and the `ahash` feature to `ahash`;
//! `fxhash` wins when both are enabled.

mod lookup;

pub use lookup::Lookup;

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::hash::Hash;

// =============================================================================
// Hasher Selection
// =============================================================================

#[cfg(feature = "fxhash")]
type MapHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type MapHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type MapHasher = std::collections::hash_map::RandomState;

// =============================================================================
// Map Definition
// =============================================================================

/// A mutable map from unique keys to values.
///
/// Iteration order is unspecified. [`Display`](fmt::Display) sorts entries by
/// key so the rendering is stable: `map[k1:7 k2:13]`.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `set`     | O(1) avg   |
/// | `get`     | O(1) avg   |
/// | `delete`  | O(1) avg   |
/// | `clear`   | O(N)       |
/// | `len`     | O(1)       |
/// | `equal`   | O(N) avg   |
#[derive(Clone)]
pub struct Map<K, V> {
    entries: HashMap<K, V, MapHasher>,
}

impl<K, V> Map<K, V> {
    /// Creates an empty map.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::with_hasher(MapHasher::default()),
        }
    }

    /// Returns the number of distinct keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry. The map stays usable.
    pub fn clear(&mut self) {
        tracing::trace!(removed = self.entries.len(), "map cleared");
        self.entries.clear();
    }

    /// Iterates over entries in unspecified order.
    #[inline]
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.entries.iter()
    }
}

impl<K: Hash + Eq, V> Map<K, V> {
    /// Inserts `value` under `key`, replacing any previous value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicemap::map::Map;
    ///
    /// let mut map = Map::new();
    /// map.set("key", 1);
    /// map.set("key", 2);
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(*map.get("key").value(), 2);
    /// ```
    #[inline]
    pub fn set(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    /// Looks up `key`, reporting presence alongside the value.
    ///
    /// A missing key yields the zero value of `V` and `present == false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicemap::map::Map;
    ///
    /// let map = Map::from([("k1".to_string(), 7)]);
    /// assert_eq!(map.get("k1").into_pair(), (7, true));
    /// assert_eq!(map.get("k3").into_pair(), (0, false));
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Lookup<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone + Default,
    {
        self.entries
            .get(key)
            .map_or_else(Lookup::missing, |value| Lookup::found(value.clone()))
    }

    /// Looks up `key`, returning only the value.
    ///
    /// A stored zero value and a missing key are indistinguishable here; use
    /// [`Map::get`] when that matters.
    pub fn value_or_zero<Q>(&self, key: &Q) -> V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone + Default,
    {
        self.get(key).into_value()
    }

    /// Borrows the value stored under `key`, if any.
    #[inline]
    pub fn get_ref<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    /// Returns `true` if `key` is present.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Removes `key`. Does nothing if it is absent.
    #[inline]
    pub fn delete<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.remove(key);
    }

    /// Returns `true` if both maps hold the same keys with equal values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicemap::map::Map;
    ///
    /// let left = Map::from([("foo", 1), ("bar", 2)]);
    /// let right = Map::from([("bar", 2), ("foo", 1)]);
    /// assert!(Map::equal(&left, &right));
    /// ```
    pub fn equal(left: &Self, right: &Self) -> bool
    where
        V: PartialEq,
    {
        left.len() == right.len()
            && left
                .entries
                .iter()
                .all(|(key, value)| right.entries.get(key) == Some(value))
    }
}

impl<K: Ord, V> Map<K, V> {
    /// Returns the keys in ascending order.
    pub fn sorted_keys(&self) -> Vec<&K> {
        let mut keys: Vec<&K> = self.entries.keys().collect();
        keys.sort_unstable();
        keys
    }

    fn sorted_entries(&self) -> Vec<(&K, &V)> {
        let mut entries: Vec<(&K, &V)> = self.entries.iter().collect();
        entries.sort_unstable_by(|(left, _), (right, _)| left.cmp(right));
        entries
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for Map<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V, const N: usize> From<[(K, V); N]> for Map<K, V> {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq, V> Extend<(K, V)> for Map<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<'a, K, V> IntoIterator for &'a Map<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for Map<K, V> {
    type Item = (K, V);
    type IntoIter = hash_map::IntoIter<K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for Map<K, V> {
    fn eq(&self, other: &Self) -> bool {
        Self::equal(self, other)
    }
}

impl<K: Hash + Eq, V: Eq> Eq for Map<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Map<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<K: Ord + fmt::Display, V: fmt::Display> fmt::Display for Map<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "map[")?;
        for (position, (key, value)) in self.sorted_entries().into_iter().enumerate() {
            if position > 0 {
                write!(formatter, " ")?;
            }
            write!(formatter, "{key}:{value}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K: serde::Serialize, V: serde::Serialize> serde::Serialize for Map<K, V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.entries.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for Map<K, V>
where
    K: serde::Deserialize<'de> + Hash + Eq,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = <HashMap<K, V, MapHasher> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self { entries })
    }
}

// =============================================================================
// Tests
// =============================================================================
