//! Instrumentation ledger shared by all algorithms.
//!
//! A [`Metrics`] is created by the caller, handed to exactly one top-level algorithm call as
//! `&mut Metrics` and read once the call returns. Recursive frames receive the same reference, so
//! the counters describe the whole call tree.
//!
//! The type holds plain counters without any synchronization. Exclusive borrows make concurrent
//! mutation of one instance impossible in safe code; give each thread its own instance and merge
//! the results afterwards if that is ever needed.

use std::fmt;
use std::time::{Duration, Instant};

#[derive(Clone, Debug, Default)]
pub struct Metrics {
    /// Element comparisons, and for closest pair also distance computations and strip tests.
    pub comparisons: u64,
    /// Element relocations: swaps, insertion sort shifts and merge placements.
    pub swaps: u64,
    /// Logically allocated elements of scratch storage, not bytes.
    pub allocations: u64,
    /// Deepest nesting of recursive frames observed so far.
    pub max_recursion_depth: u32,
    recursion_depth: u32,
    started_at: Option<Instant>,
    elapsed: Duration,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` with a fresh zero-valued instance and hands it back together with the result.
    ///
    /// Use this when the caller has no ledger of its own. Every invocation gets a new instance.
    pub fn measure<R>(f: impl FnOnce(&mut Metrics) -> R) -> (R, Metrics) {
        let mut metrics = Metrics::new();
        let result = f(&mut metrics);
        (result, metrics)
    }

    pub fn start_timer(&mut self) {
        self.started_at = Some(Instant::now());
    }

    pub fn stop_timer(&mut self) {
        debug_assert_eq!(self.recursion_depth, 0, "unbalanced on_enter/on_exit");

        if let Some(started_at) = self.started_at.take() {
            self.elapsed = started_at.elapsed();
        }
    }

    /// Must be paired with exactly one [`Metrics::on_exit`] on every path out of the frame.
    #[inline]
    pub fn on_enter(&mut self) {
        self.recursion_depth += 1;
        if self.recursion_depth > self.max_recursion_depth {
            self.max_recursion_depth = self.recursion_depth;
        }
    }

    #[inline]
    pub fn on_exit(&mut self) {
        debug_assert!(self.recursion_depth > 0);
        self.recursion_depth = self.recursion_depth.saturating_sub(1);
    }

    #[inline]
    pub fn add_alloc(&mut self, units: usize) {
        self.allocations += units as u64;
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn elapsed_nanos(&self) -> u128 {
        self.elapsed.as_nanos()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Metrics{{comparisons={}, swaps={}, allocations={}, maxRecursionDepth={}, elapsedNanos={}}}",
            self.comparisons,
            self.swaps,
            self.allocations,
            self.max_recursion_depth,
            self.elapsed_nanos()
        )
    }
}
