//! Parameter types configuring the detector stages.
//!
//! Every threshold of the pipeline is a named knob with the default tuned
//! for the target footage; nothing in the stage code is hard-coded. All
//! structs deserialize from JSON so tools can override any subset.

use crate::edges::EdgeParams;
use crate::hough::HoughParams;
use crate::roi::RoiFractions;
use serde::{Deserialize, Serialize};

/// Detector-wide parameters controlling the per-frame pipeline.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LaneParams {
    /// Trapezoidal region-of-interest proportions.
    pub roi: RoiFractions,
    /// Blur / binarization / hysteresis settings of the edge cascade.
    pub edge: EdgeParams,
    /// Probabilistic Hough extraction settings.
    pub hough: HoughParams,
    /// Upper endpoint sample height, as a fraction of frame height.
    pub sample_y_low_frac: f64,
    /// Lower endpoint sample height, as a fraction of frame height.
    pub sample_y_high_frac: f64,
}

impl Default for LaneParams {
    fn default() -> Self {
        Self {
            roi: RoiFractions::default(),
            edge: EdgeParams::default(),
            hough: HoughParams::default(),
            sample_y_low_frac: 0.30,
            sample_y_high_frac: 0.65,
        }
    }
}
