//! Runs one algorithm on deterministically generated input and produces the metrics record that
//! the CLI prints and appends to its log.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use rand::distributions::Uniform;
use rand::prelude::*;

use crate::geometry::closest_pair;
use crate::select;
use crate::sort::{self, merge_sort, quick_sort};
use crate::{ClosestPairResult, Error, Metrics, Point2D, Result};

/// Generated integers are drawn from this half-open range.
const INT_RANGE: (i32, i32) = (-1_000_000, 1_000_000);

/// Generated points have both coordinates in `[0, POINT_SIDE)`.
const POINT_SIDE: f64 = 1000.0;

/// Header matching the fields of [`RunReport::csv_record`].
pub const CSV_HEADER: &str =
    "algorithm,n,comparisons,swaps,allocations,maxRecursionDepth,elapsedNanos";

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    #[value(name = "mergesort")]
    MergeSort,
    #[value(name = "quicksort")]
    QuickSort,
    #[value(name = "select")]
    Select,
    #[value(name = "closest")]
    Closest,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::MergeSort,
        Algorithm::QuickSort,
        Algorithm::Select,
        Algorithm::Closest,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::MergeSort => "mergesort",
            Algorithm::QuickSort => "quicksort",
            Algorithm::Select => "select",
            Algorithm::Closest => "closest",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| Error::UnknownAlgorithm { name: s.to_owned() })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Sorted { verified: bool },
    Selected { k: usize, value: i32 },
    ClosestPair(ClosestPairResult),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Sorted { verified } => write!(f, "sorted: {verified}"),
            Outcome::Selected { k, value } => write!(f, "k={k} -> {value}"),
            Outcome::ClosestPair(result) => write!(f, "closest: {result}"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RunReport {
    pub algorithm: Algorithm,
    pub n: usize,
    pub outcome: Outcome,
    pub metrics: Metrics,
}

impl RunReport {
    /// One newline terminated line with the fields listed in [`CSV_HEADER`].
    pub fn csv_record(&self) -> String {
        format!(
            "{},{},{},{},{},{},{}\n",
            self.algorithm,
            self.n,
            self.metrics.comparisons,
            self.metrics.swaps,
            self.metrics.allocations,
            self.metrics.max_recursion_depth,
            self.metrics.elapsed_nanos()
        )
    }
}

/// Generates `n` inputs from `seed` and runs `algorithm` on them with a fresh [`Metrics`].
///
/// The same `algorithm`, `n` and `seed` always produce the same input, and with it the same
/// outcome and counters. Quicksort draws its pivots from the same seeded stream.
pub fn run(algorithm: Algorithm, n: usize, seed: u64) -> Result<RunReport> {
    let mut rng = StdRng::seed_from_u64(seed);

    let (outcome, metrics) = match algorithm {
        Algorithm::MergeSort => {
            let mut v = generate_ints(&mut rng, n);
            let ((), metrics) = Metrics::measure(|m| merge_sort::sort(&mut v, m));
            let verified = sort::is_sorted(&v);
            (Outcome::Sorted { verified }, metrics)
        }
        Algorithm::QuickSort => {
            let mut v = generate_ints(&mut rng, n);
            let ((), metrics) =
                Metrics::measure(|m| quick_sort::sort_with_rng(&mut v, &mut rng, m));
            let verified = sort::is_sorted(&v);
            (Outcome::Sorted { verified }, metrics)
        }
        Algorithm::Select => {
            let v = generate_ints(&mut rng, n);
            let k = n / 2;
            let (value, metrics) = Metrics::measure(|m| select::select(&v, k, m));
            (Outcome::Selected { k, value: value? }, metrics)
        }
        Algorithm::Closest => {
            let points = generate_points(&mut rng, n);
            let (result, metrics) = Metrics::measure(|m| closest_pair::closest(&points, m));
            (Outcome::ClosestPair(result?), metrics)
        }
    };

    Ok(RunReport {
        algorithm,
        n,
        outcome,
        metrics,
    })
}

/// Appends the record of `report` to the file at `path`, creating it if needed.
pub fn append_record(path: &Path, report: &RunReport) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(report.csv_record().as_bytes())
}

fn generate_ints<R: Rng>(rng: &mut R, n: usize) -> Vec<i32> {
    let dist = Uniform::new(INT_RANGE.0, INT_RANGE.1);

    (0..n).map(|_| rng.sample(dist)).collect()
}

fn generate_points<R: Rng>(rng: &mut R, n: usize) -> Vec<Point2D> {
    (0..n)
        .map(|_| Point2D::new(rng.gen::<f64>() * POINT_SIDE, rng.gen::<f64>() * POINT_SIDE))
        .collect()
}
