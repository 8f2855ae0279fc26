use crate::Metrics;

/// Sorts `v` in place by shifting each element left past every larger predecessor.
///
/// Every predecessor test counts as one comparison and every shift as one swap. Equal elements are
/// never shifted past each other, so the sort is stable.
pub(crate) fn insertion_sort(v: &mut [i32], metrics: &mut Metrics) {
    for i in 1..v.len() {
        let tmp = v[i];
        let mut hole = i;

        while hole > 0 {
            metrics.comparisons += 1;
            if v[hole - 1] <= tmp {
                break;
            }

            v[hole] = v[hole - 1];
            metrics.swaps += 1;
            hole -= 1;
        }

        v[hole] = tmp;
    }
}
