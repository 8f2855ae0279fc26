//! Provides a set of input patterns useful for testing and benchmarking the algorithms.
//!
//! All patterns derive from one seed per process, so re-running with `OVERRIDE_SEED=<seed>`
//! reproduces the exact inputs of an earlier run.

use std::env;
use std::str::FromStr;

use rand::prelude::*;

use zipf::ZipfDistribution;

use once_cell::sync::OnceCell;

use crate::Point2D;

// --- Public ---

pub fn random(size: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(size)
}

pub fn random_uniform<R>(size: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_rng();

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(size: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law
    if size == 0 {
        return Vec::new();
    }

    let mut rng = new_rng();

    match ZipfDistribution::new(size, exponent) {
        Ok(dist) => (0..size).map(|_| dist.sample(&mut rng) as i32).collect(),
        Err(()) => random_vec(size),
    }
}

pub fn random_sorted(size: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    //  ^      ^
    //  |      |
    // sorted  |
    //     unsorted

    let mut v = random_vec(size);
    let sorted_size = ((size as f64) * (sorted_percent / 100.0)).round() as usize;

    v[0..sorted_size].sort_unstable();

    v
}

pub fn all_equal(size: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..size).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(size: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..size as i32).collect::<Vec<_>>()
}

pub fn descending(size: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..size as i32).rev().collect::<Vec<_>>()
}

pub fn saw_mixed(size: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if size == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(size);
    let chunks_size = (size / saw_count.max(1)).max(1);
    let saw_directions = random_uniform((size / chunks_size) + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunks_size).enumerate() {
        if saw_directions[i] == 0 {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(size: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(size);

    let first_half = &mut vals[0..(size / 2)];
    first_half.sort();

    let second_half = &mut vals[(size / 2)..size];
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// Points with both coordinates uniform in `[0, side)`.
pub fn random_points(size: usize, side: f64) -> Vec<Point2D> {
    let mut rng = new_rng();

    (0..size)
        .map(|_| Point2D::new(rng.gen::<f64>() * side, rng.gen::<f64>() * side))
        .collect()
}

/// Points on the integer grid `[0, side)²`. With `size` close to or above `side²` many points
/// share coordinates or coincide.
pub fn random_grid_points(size: usize, side: u32) -> Vec<Point2D> {
    let mut rng = new_rng();
    let side = side.max(1);

    (0..size)
        .map(|_| {
            Point2D::new(
                rng.gen_range(0..side) as f64,
                rng.gen_range(0..side) as f64,
            )
        })
        .collect()
}

pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    *SEED.get_or_init(|| -> u64 {
        env::var("OVERRIDE_SEED")
            .ok()
            .and_then(|seed| u64::from_str(&seed).ok())
            .unwrap_or_else(|| thread_rng().gen())
    })
}

// --- Private ---

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

fn random_vec(size: usize) -> Vec<i32> {
    let mut rng = new_rng();

    (0..size).map(|_| rng.gen::<i32>()).collect()
}
