//! Randomized quicksort that only recurses into the smaller partition.

use std::mem;

use rand::Rng;

use crate::Metrics;

sort_impl!("quick_sort_unstable");

/// Sorts `v` in ascending order, drawing pivots from the thread-local generator.
pub fn sort(v: &mut [i32], metrics: &mut Metrics) {
    sort_with_rng(v, &mut rand::thread_rng(), metrics);
}

/// Sorts `v` in ascending order, drawing pivots from `rng`.
///
/// Passing a seeded generator makes the sequence of pivots, and with it every counter except the
/// elapsed time, reproducible.
pub fn sort_with_rng<R>(v: &mut [i32], rng: &mut R, metrics: &mut Metrics)
where
    R: Rng + ?Sized,
{
    metrics.start_timer();
    quicksort(v, rng, metrics);
    metrics.stop_timer();
}

fn quicksort<R>(mut v: &mut [i32], rng: &mut R, metrics: &mut Metrics)
where
    R: Rng + ?Sized,
{
    while v.len() > 1 {
        metrics.on_enter();

        let pivot_pos = partition(v, rng, metrics);

        let (left, right) = mem::take(&mut v).split_at_mut(pivot_pos);
        let right = &mut right[1..];

        // Recursing only into the smaller side bounds the stack depth to O(log n), no matter how
        // unlucky the pivots are. The larger side is handled by the next loop iteration.
        if left.len() < right.len() {
            if left.len() > 1 {
                quicksort(left, rng, metrics);
            }
            v = right;
        } else {
            if right.len() > 1 {
                quicksort(right, rng, metrics);
            }
            v = left;
        }

        metrics.on_exit();
    }
}

/// Lomuto partition around a uniformly random pivot.
///
/// Returns the final position of the pivot, everything before it is `<=` and everything after it
/// is `>` the pivot.
fn partition<R>(v: &mut [i32], rng: &mut R, metrics: &mut Metrics) -> usize
where
    R: Rng + ?Sized,
{
    let last = v.len() - 1;

    let pivot_pos = rng.gen_range(0..v.len());
    let pivot = v[pivot_pos];
    swap(v, pivot_pos, last, metrics);

    let mut lt_count = 0;
    for r in 0..last {
        metrics.comparisons += 1;
        if v[r] <= pivot {
            swap(v, lt_count, r, metrics);
            lt_count += 1;
        }
    }

    swap(v, lt_count, last, metrics);

    lt_count
}

#[inline]
fn swap(v: &mut [i32], a: usize, b: usize, metrics: &mut Metrics) {
    v.swap(a, b);
    metrics.swaps += 1;
}
