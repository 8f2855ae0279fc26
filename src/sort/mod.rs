//! In-place integer sorts.

pub(crate) mod insertion;
pub mod merge_sort;
pub mod quick_sort;

/// Returns `true` if `v` is in non-descending order.
pub fn is_sorted(v: &[i32]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}
