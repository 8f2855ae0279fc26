//! Planar geometry on `f64` points.

pub mod closest_pair;
mod point;

pub use closest_pair::ClosestPairResult;
pub use point::Point2D;
