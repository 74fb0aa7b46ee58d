//! Lane detector orchestrating the per-frame pipeline.
//!
//! Stages, leaf to root:
//! - [`crate::roi`] masks and crops the fixed trapezoidal region where the
//!   lane boundary is expected, remembering the crop offset.
//! - [`crate::edges`] reduces the sub-image to a binary edge map.
//! - [`crate::hough`] extracts raw line segments from the edge map.
//! - [`crate::fit`] fits each segment, averages the surviving models, and
//!   reconstructs the final endpoints at two fixed frame heights.
//!
//! The detector holds only immutable parameters; `detect` takes `&self`
//! and every intermediate buffer lives within one call, so frames can be
//! processed concurrently ([`LaneDetector::detect_all`] does so with a
//! rayon parallel map).

pub mod params;
mod pipeline;

pub use params::LaneParams;
pub use pipeline::{detect_lane, LaneDetector};
