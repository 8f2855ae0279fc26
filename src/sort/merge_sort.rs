//! Top-down merge sort with an insertion sort base case and a skip-merge fast path.

use crate::sort::insertion::insertion_sort;
use crate::Metrics;

sort_impl!("merge_sort_stable");

/// Ranges of at most this many elements are insertion sorted instead of being split further.
const INSERTION_CUTOFF: usize = 24;

/// Sorts `v` in ascending order. The sort is stable.
pub fn sort(v: &mut [i32], metrics: &mut Metrics) {
    metrics.start_timer();

    let len = v.len();
    if len > 1 {
        // Allocated once and shared by all frames, each merge only uses the window matching its
        // own range.
        let mut buf = vec![0; len];
        metrics.add_alloc(len);

        merge_sort(v, &mut buf, metrics);
    }

    metrics.stop_timer();
}

fn merge_sort(v: &mut [i32], buf: &mut [i32], metrics: &mut Metrics) {
    debug_assert_eq!(v.len(), buf.len());
    metrics.on_enter();

    let len = v.len();
    if len <= INSERTION_CUTOFF {
        insertion_sort(v, metrics);
        metrics.on_exit();
        return;
    }

    let mid = len / 2;
    {
        let (v_left, v_right) = v.split_at_mut(mid);
        let (buf_left, buf_right) = buf.split_at_mut(mid);
        merge_sort(v_left, buf_left, metrics);
        merge_sort(v_right, buf_right, metrics);
    }

    // Both halves are sorted, if they are already in order relative to each other there is
    // nothing left to do.
    metrics.comparisons += 1;
    if v[mid - 1] > v[mid] {
        merge(v, mid, buf, metrics);
    }

    metrics.on_exit();
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` through `buf` back into `v`.
fn merge(v: &mut [i32], mid: usize, buf: &mut [i32], metrics: &mut Metrics) {
    let len = v.len();

    let mut left = 0;
    let mut right = mid;
    let mut out = 0;

    while left < mid && right < len {
        metrics.comparisons += 1;

        // Taking from the left run on ties is what makes the sort stable.
        if v[left] <= v[right] {
            buf[out] = v[left];
            left += 1;
        } else {
            buf[out] = v[right];
            right += 1;
        }
        out += 1;
    }

    // At most one of the runs still has elements left.
    let left_rest = mid - left;
    buf[out..out + left_rest].copy_from_slice(&v[left..mid]);
    out += left_rest;
    buf[out..].copy_from_slice(&v[right..]);

    v.copy_from_slice(buf);
    metrics.swaps += len as u64;
}
