//! Worst-case linear order statistic selection using the median-of-medians pivot.
//!
//! The pivot of every round is the median of the group medians, which is guaranteed to have at
//! least roughly 30% of the range on either side of it. Each round therefore discards a constant
//! fraction of the range, unlike a randomly chosen pivot which only does so on average.

use std::cmp;

use crate::sort::insertion::insertion_sort;
use crate::{Error, Metrics, Result};

const GROUP: usize = 5;

/// Ranges of at most this many elements are insertion sorted and indexed directly.
const CUTOFF: usize = 32;

/// Returns the element that would be at position `k` (0-based) if `v` was sorted.
///
/// Works on a private copy, `v` is left untouched. The copy is accounted as `v.len()` allocation
/// units.
pub fn select(v: &[i32], k: usize, metrics: &mut Metrics) -> Result<i32> {
    check_args(v.len(), k)?;

    let mut copy = v.to_vec();
    metrics.add_alloc(copy.len());

    select_in_place(&mut copy, k, metrics)
}

/// Like [`select`] but reorders `v` itself instead of a copy. The multiset of elements in `v` is
/// preserved.
pub fn select_in_place(v: &mut [i32], k: usize, metrics: &mut Metrics) -> Result<i32> {
    check_args(v.len(), k)?;

    metrics.start_timer();
    let value = select_rec(v, k, metrics);
    metrics.stop_timer();

    Ok(value)
}

fn check_args(len: usize, k: usize) -> Result<()> {
    if len == 0 {
        return Err(Error::EmptyInput);
    }

    if k >= len {
        return Err(Error::IndexOutOfRange { k, len });
    }

    Ok(())
}

fn select_rec(v: &mut [i32], k: usize, metrics: &mut Metrics) -> i32 {
    metrics.on_enter();

    let len = v.len();
    if len <= CUTOFF {
        insertion_sort(v, metrics);
        let value = v[k];
        metrics.on_exit();
        return value;
    }

    // Sort every group of 5 and gather the medians in v[..groups]. Slot g always lies in a group
    // that was already visited, so no unvisited group gets disturbed.
    let groups = len.div_ceil(GROUP);
    for g in 0..groups {
        let start = g * GROUP;
        let end = cmp::min(start + GROUP, len);
        insertion_sort(&mut v[start..end], metrics);
        swap(v, g, start + (end - start) / 2, metrics);
    }

    let pivot = select_rec(&mut v[..groups], groups / 2, metrics);

    let (lt_end, gt_start) = partition3(v, pivot, metrics);

    let value = if k < lt_end {
        select_rec(&mut v[..lt_end], k, metrics)
    } else if k < gt_start {
        pivot
    } else {
        select_rec(&mut v[gt_start..], k - gt_start, metrics)
    };

    metrics.on_exit();
    value
}

/// Three-way partition around `pivot`.
///
/// Returns `(lt_end, gt_start)` so that `v[..lt_end] < pivot`, `v[lt_end..gt_start] == pivot` and
/// `v[gt_start..] > pivot`.
fn partition3(v: &mut [i32], pivot: i32, metrics: &mut Metrics) -> (usize, usize) {
    let mut lt_end = 0;
    let mut i = 0;
    let mut gt_start = v.len();

    while i < gt_start {
        metrics.comparisons += 1;
        if v[i] < pivot {
            swap(v, lt_end, i, metrics);
            lt_end += 1;
            i += 1;
            continue;
        }

        metrics.comparisons += 1;
        if v[i] > pivot {
            gt_start -= 1;
            swap(v, i, gt_start, metrics);
        } else {
            i += 1;
        }
    }

    (lt_end, gt_start)
}

#[inline]
fn swap(v: &mut [i32], a: usize, b: usize, metrics: &mut Metrics) {
    if a != b {
        v.swap(a, b);
        metrics.swaps += 1;
    }
}
