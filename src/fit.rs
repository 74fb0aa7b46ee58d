//! Two-point line fitting, model aggregation, and endpoint reconstruction.
//!
//! Each raw segment, translated into full-frame coordinates, yields one
//! `(slope, intercept)` estimate by solving the 2×2 Vandermonde system
//! through its endpoints. A vertical or coincident-endpoint segment makes
//! that system singular; the fit is tagged [`SegmentFit::Degenerate`] and
//! the segment is skipped — it never contaminates the average and never
//! aborts the frame. Surviving models are averaged component-wise (mean of
//! slopes, mean of intercepts — not a joint refit), which tolerates left-
//! and right-edge detections of the same marking as long as most segments
//! share an orientation. No further outlier rejection is applied.

use crate::types::{Lane, LineModel, RawSegment};
use log::debug;
use nalgebra::{Matrix2, Vector2};

/// Tagged outcome of fitting one segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentFit {
    Valid(LineModel),
    /// The two endpoints do not determine a finite-slope line.
    Degenerate,
}

/// Fit `y = slope * x + intercept` through the segment's two endpoints.
pub fn fit_segment(seg: &RawSegment) -> SegmentFit {
    let a = Matrix2::new(seg.x1 as f32, 1.0, seg.x2 as f32, 1.0);
    let b = Vector2::new(seg.y1 as f32, seg.y2 as f32);
    match a.lu().solve(&b) {
        Some(sol) if sol.x.is_finite() && sol.y.is_finite() => SegmentFit::Valid(LineModel {
            slope: sol.x,
            intercept: sol.y,
        }),
        _ => SegmentFit::Degenerate,
    }
}

/// Aggregation outcome over one frame's raw segments.
#[derive(Clone, Copy, Debug, Default)]
pub struct AggregateFit {
    /// Mean model over all valid fits; `None` when no fit survived.
    pub model: Option<LineModel>,
    /// Segments whose fit contributed to the mean.
    pub valid: usize,
    /// Segments skipped as degenerate.
    pub degenerate: usize,
}

/// Translate each segment by the ROI `offset`, fit it, and average the
/// surviving models.
pub fn aggregate_segments(segments: &[RawSegment], offset: (i32, i32)) -> AggregateFit {
    let mut sum_slope = 0.0f32;
    let mut sum_intercept = 0.0f32;
    let mut valid = 0usize;
    let mut degenerate = 0usize;

    for seg in segments {
        let translated = seg.translated(offset.0, offset.1);
        match fit_segment(&translated) {
            SegmentFit::Valid(model) => {
                sum_slope += model.slope;
                sum_intercept += model.intercept;
                valid += 1;
            }
            SegmentFit::Degenerate => {
                degenerate += 1;
                debug!("aggregate_segments: skipping degenerate fit for {translated:?}");
            }
        }
    }

    let model = (valid > 0).then(|| LineModel {
        slope: sum_slope / valid as f32,
        intercept: sum_intercept / valid as f32,
    });
    if model.is_none() {
        debug!("aggregate_segments: no valid fits among {} segments", segments.len());
    }
    AggregateFit {
        model,
        valid,
        degenerate,
    }
}

/// Aggregate slopes below this magnitude cannot be inverted into a lane;
/// such frames are reported as "no lane" rather than clamped or faulted.
pub const MIN_SLOPE: f32 = 1e-6;

/// Sample the aggregate line at two fixed frame heights and return integer
/// endpoints. `None` when the slope is too close to horizontal to invert.
pub fn reconstruct(
    model: &LineModel,
    frame_h: usize,
    y_low_frac: f64,
    y_high_frac: f64,
) -> Option<Lane> {
    if !model.slope.is_finite() || !model.intercept.is_finite() || model.slope.abs() < MIN_SLOPE {
        debug!("reconstruct: rejecting non-invertible aggregate {model:?}");
        return None;
    }
    // Sample rows in f64 so the truncating cast matches the ROI vertex math.
    let y1 = (frame_h as f64 * y_low_frac) as i32;
    let y2 = (frame_h as f64 * y_high_frac) as i32;
    let x1 = (y1 as f32 - model.intercept) / model.slope;
    let x2 = (y2 as f32 - model.intercept) / model.slope;
    if !x1.is_finite() || !x2.is_finite() {
        return None;
    }
    Some(Lane {
        x1: x1 as i32,
        y1,
        x2: x2 as i32,
        y2,
    })
}
