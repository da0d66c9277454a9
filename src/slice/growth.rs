//! Capacity growth for reallocating appends.

/// Below this capacity a reallocation doubles; at or above it, growth tapers
/// toward 1.25x.
const SMALL_SLICE_THRESHOLD: usize = 256;

/// Computes the capacity of a new backing buffer that must hold `needed`
/// elements, given the exhausted capacity `old_capacity`.
///
/// The result is always at least `needed` and grows monotonically with
/// `old_capacity`.
pub(super) fn grow_capacity(old_capacity: usize, needed: usize) -> usize {
    let doubled = old_capacity.saturating_mul(2);
    if needed > doubled {
        return needed;
    }
    if old_capacity < SMALL_SLICE_THRESHOLD {
        return doubled;
    }
    let mut capacity = old_capacity;
    while capacity < needed {
        capacity = capacity.saturating_add((capacity + 3 * SMALL_SLICE_THRESHOLD) / 4);
    }
    capacity
}
