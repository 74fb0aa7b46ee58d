use serde::{Deserialize, Serialize};

/// Raw line segment in ROI-local pixel coordinates, as produced by the
/// probabilistic Hough extractor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSegment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl RawSegment {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// The same segment translated by `(dx, dy)`.
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x1: self.x1 + dx,
            y1: self.y1 + dy,
            x2: self.x2 + dx,
            y2: self.y2 + dy,
        }
    }
}

/// Linear model `y = slope * x + intercept` in full-frame coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineModel {
    pub slope: f32,
    pub intercept: f32,
}

/// Detected lane boundary: two endpoints in full-frame pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lane {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

/// Per-frame detection outcome with lightweight diagnostics.
#[derive(Clone, Debug, Default, Serialize)]
pub struct LaneReport {
    /// The detected lane, absent when the frame yields no usable segments.
    pub lane: Option<Lane>,
    /// Raw segments returned by the Hough extractor.
    pub raw_segments: usize,
    /// Segments skipped because their two-point fit was degenerate.
    pub degenerate_fits: usize,
    /// Wall-clock time spent on this frame, in milliseconds.
    pub latency_ms: f64,
}
