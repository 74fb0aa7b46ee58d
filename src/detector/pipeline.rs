use super::params::LaneParams;
use crate::edges::detect_edges;
use crate::fit::{aggregate_segments, reconstruct};
use crate::hough::hough_segments;
use crate::image::FrameRgb8;
use crate::roi::region_of_interest;
use crate::types::{Lane, LaneReport};
use log::debug;
use rayon::prelude::*;
use std::time::Instant;

/// Per-frame lane detector. Stateless between frames.
#[derive(Clone, Debug, Default)]
pub struct LaneDetector {
    params: LaneParams,
}

impl LaneDetector {
    pub fn new(params: LaneParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &LaneParams {
        &self.params
    }

    /// Detect the dominant lane boundary in one frame.
    ///
    /// All per-segment failures are contained here: degenerate fits are
    /// skipped, an empty survivor set or a non-invertible aggregate slope
    /// is reported as an absent lane, never as a fault.
    pub fn detect(&self, frame: FrameRgb8<'_>) -> LaneReport {
        let t0 = Instant::now();
        let mut report = LaneReport::default();

        let region = region_of_interest(frame, &self.params.roi);
        let edge_map = detect_edges(&region.image, &self.params.edge);

        match hough_segments(&edge_map, &self.params.hough, frame.h) {
            Some(segments) => {
                report.raw_segments = segments.len();
                let agg = aggregate_segments(&segments, region.offset);
                report.degenerate_fits = agg.degenerate;
                if let Some(model) = agg.model {
                    report.lane = reconstruct(
                        &model,
                        frame.h,
                        self.params.sample_y_low_frac,
                        self.params.sample_y_high_frac,
                    );
                }
            }
            None => debug!("detect: no edge pixels inside the ROI"),
        }

        report.latency_ms = t0.elapsed().as_secs_f64() * 1000.0;
        report
    }

    /// Detect over a batch of frames in parallel. Frames are independent,
    /// so this is a plain data-parallel map.
    pub fn detect_all(&self, frames: &[FrameRgb8<'_>]) -> Vec<LaneReport> {
        frames.par_iter().map(|&frame| self.detect(frame)).collect()
    }
}

/// One-shot detection with default parameters.
pub fn detect_lane(frame: FrameRgb8<'_>) -> Option<Lane> {
    LaneDetector::default().detect(frame).lane
}
