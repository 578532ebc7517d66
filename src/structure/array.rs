//! Flat numeric arrays for the sort and search steppers.

use crate::engine::rng::VizRng;

/// Bar heights used by the sort visualizer: 10..=359 on a 400-high canvas.
const SORT_VALUE_MIN: i64 = 10;
const SORT_VALUE_MAX: i64 = 359;

/// Search values are small two-digit-ish numbers: 0..=99.
const SEARCH_VALUE_MAX: i64 = 99;

/// Generate an array of random bar heights for sorting.
#[must_use]
pub fn generate_sort(rng: &mut VizRng, size: usize) -> Vec<i64> {
    (0..size)
        .map(|_| rng.gen_range_i64(SORT_VALUE_MIN, SORT_VALUE_MAX))
        .collect()
}

/// Generate an array of random values for linear search.
#[must_use]
pub fn generate_search(rng: &mut VizRng, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range_i64(0, SEARCH_VALUE_MAX)).collect()
}

/// Generate a sorted array for binary search.
#[must_use]
pub fn generate_search_sorted(rng: &mut VizRng, len: usize) -> Vec<i64> {
    let mut values = generate_search(rng, len);
    values.sort_unstable();
    values
}
