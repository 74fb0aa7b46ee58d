#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod image;
pub mod types;

// Stage modules — public so tools can run stages in isolation.
pub mod edges;
pub mod fit;
pub mod hough;
pub mod roi;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{detect_lane, LaneDetector, LaneParams};
pub use crate::types::{Lane, LaneReport, LineModel, RawSegment};

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::image::FrameRgb8;
    pub use crate::{detect_lane, Lane, LaneDetector, LaneParams, LaneReport};
}
