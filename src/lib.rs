//! Divide-and-conquer algorithms instrumented with a shared [`Metrics`] ledger.
//!
//! Every algorithm takes its input plus a `&mut Metrics` and records comparisons, element moves,
//! scratch allocations, recursion depth and wall-clock time in the same way, so runs of different
//! algorithms can be compared record by record.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort(v: &mut [i32], metrics: &mut crate::Metrics) {
                sort(v, metrics);
            }
        }
    };
}

pub mod error;
pub mod geometry;
pub mod metrics;
pub mod patterns;
pub mod runner;
pub mod select;
pub mod sort;

pub use error::{Error, Result};
pub use geometry::{ClosestPairResult, Point2D};
pub use metrics::Metrics;

/// Common shape of the instrumented in-place sorts, used by the test harness and the benches to
/// run the same suite against every implementation.
pub trait Sort {
    fn name() -> String;

    fn sort(v: &mut [i32], metrics: &mut Metrics);
}
