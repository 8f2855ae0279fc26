//! O(n log n) closest pair of points by divide and conquer.
//!
//! The points are sorted by x once, and split at the x-median on every level. Each level also gets
//! its own y-ordered view of the points in its x-range, which the strip step needs to look at only
//! a constant number of neighbours per point.
//!
//! The y-ordered views hold indices into the x-sorted array. That keeps them cheap to filter and
//! lets points that share the split x-coordinate be assigned to the side that owns them in the
//! x-order with a single index test.

use std::fmt;

use crate::geometry::Point2D;
use crate::{Error, Metrics, Result};

/// Ranges of at most this many points are solved by comparing all pairs.
const CUTOFF: usize = 32;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClosestPairResult {
    pub a: Point2D,
    pub b: Point2D,
    pub distance: f64,
}

impl ClosestPairResult {
    fn new(a: Point2D, b: Point2D, distance: f64) -> Self {
        Self { a, b, distance }
    }
}

impl fmt::Display for ClosestPairResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} : {}", self.a, self.b, self.distance)
    }
}

/// Finds the two points in `points` with the smallest Euclidean distance.
///
/// Among pairs with equal distance the first one found wins. Coordinates are expected to be
/// finite.
pub fn closest(points: &[Point2D], metrics: &mut Metrics) -> Result<ClosestPairResult> {
    if points.len() < 2 {
        return Err(Error::NotEnoughPoints { len: points.len() });
    }

    metrics.start_timer();

    let mut px = points.to_vec();
    px.sort_by(|a, b| a.x().total_cmp(&b.x()));

    let mut py = (0..px.len()).collect::<Vec<_>>();
    py.sort_by(|&a, &b| px[a].y().total_cmp(&px[b].y()));

    metrics.add_alloc(2 * points.len());

    let result = solve(&px, &py, 0, px.len(), metrics);

    metrics.stop_timer();
    Ok(result)
}

/// Solves `px[lo..hi]`, `py` is the y-ordered view of exactly that range.
fn solve(
    px: &[Point2D],
    py: &[usize],
    lo: usize,
    hi: usize,
    metrics: &mut Metrics,
) -> ClosestPairResult {
    metrics.on_enter();

    let len = hi - lo;
    if len <= CUTOFF {
        let best = brute_force(&px[lo..hi], metrics);
        metrics.on_exit();
        return best;
    }

    let mid = lo + len / 2;
    let mid_x = px[mid].x();
    let min_x = px[lo].x();
    let max_x = px[hi - 1].x();

    let mut py_left = Vec::with_capacity(len);
    let mut py_right = Vec::with_capacity(len);
    for &i in py {
        let x = px[i].x();
        if x < min_x || x > max_x {
            continue;
        }

        if x < mid_x || (x == mid_x && (lo..mid).contains(&i)) {
            py_left.push(i);
        } else {
            py_right.push(i);
        }
    }
    metrics.add_alloc(py_left.len() + py_right.len());

    let left = solve(px, &py_left, lo, mid, metrics);
    let right = solve(px, &py_right, mid, hi, metrics);
    let mut best = if right.distance < left.distance {
        right
    } else {
        left
    };

    // Only points closer than `delta` to the dividing line can form a better pair across it.
    let delta = best.distance;
    let mut strip = Vec::with_capacity(py.len());
    for &i in py {
        metrics.comparisons += 1;
        if (px[i].x() - mid_x).abs() < delta {
            strip.push(px[i]);
        }
    }
    metrics.add_alloc(strip.len());

    for (i, a) in strip.iter().enumerate() {
        for b in &strip[(i + 1)..] {
            if b.y() - a.y() >= delta {
                break;
            }

            let d = distance(a, b, metrics);
            if d < best.distance {
                best = ClosestPairResult::new(*a, *b, d);
            }
        }
    }

    metrics.on_exit();
    best
}

fn brute_force(points: &[Point2D], metrics: &mut Metrics) -> ClosestPairResult {
    let mut best = ClosestPairResult::new(
        points[0],
        points[1],
        distance(&points[0], &points[1], metrics),
    );

    for (i, a) in points.iter().enumerate() {
        for b in &points[(i + 1)..] {
            let d = distance(a, b, metrics);
            if d < best.distance {
                best = ClosestPairResult::new(*a, *b, d);
            }
        }
    }

    best
}

#[inline]
fn distance(a: &Point2D, b: &Point2D, metrics: &mut Metrics) -> f64 {
    metrics.comparisons += 1;
    a.distance(b)
}
