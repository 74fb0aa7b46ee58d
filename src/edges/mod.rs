//! Edge detection over the masked ROI sub-image.
//!
//! The cascade is fixed and tuned for the contrast of the target footage:
//!
//! 1. Luma conversion (BT.601 weights) to a float intensity image.
//! 2. Normalized box blur with a square kernel to suppress texture noise.
//! 3. Global binarization at a fixed intensity threshold.
//! 4. Canny-style edge extraction: Sobel gradients, direction-aligned
//!    non-maximum suppression, and double-threshold hysteresis.
//!
//! There is no adaptive behavior; every knob lives in [`EdgeParams`].

pub mod canny;
pub mod grad;

pub use canny::canny_edges;
pub use grad::{sobel_gradients, Grad};

use crate::image::{ImageF32, ImageU8, RgbBuffer};
use log::debug;
use serde::{Deserialize, Serialize};

/// Fixed parameters of the edge-detection cascade.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeParams {
    /// Side of the square box-blur kernel in pixels (odd).
    pub blur_kernel_size: usize,
    /// Intensity binarization threshold; pixels at or above map to 255.
    pub binary_threshold: u8,
    /// Hysteresis low gradient-magnitude threshold.
    pub low_threshold: f32,
    /// Hysteresis high gradient-magnitude threshold.
    pub high_threshold: f32,
}

impl Default for EdgeParams {
    fn default() -> Self {
        Self {
            blur_kernel_size: 19,
            binary_threshold: 150,
            low_threshold: 200.0,
            high_threshold: 205.0,
        }
    }
}

/// Run the full cascade on a masked ROI sub-image, producing a binary edge
/// map (255 = edge) of the same extent.
pub fn detect_edges(sub: &RgbBuffer, params: &EdgeParams) -> ImageU8 {
    let gray = luma(sub);
    let blurred = box_blur(&gray, params.blur_kernel_size);
    let binary = binarize(&blurred, params.binary_threshold);
    let edges = canny_edges(&binary, params.low_threshold, params.high_threshold);
    debug!(
        "detect_edges: {}x{} sub-image, {} edge pixels",
        sub.w,
        sub.h,
        edges.data.iter().filter(|&&v| v != 0).count()
    );
    edges
}

/// BT.601 luma conversion of an interleaved RGB buffer, kept in [0, 255].
pub fn luma(sub: &RgbBuffer) -> ImageF32 {
    let mut out = ImageF32::new(sub.w, sub.h);
    for (dst, px) in out.data.iter_mut().zip(sub.data.chunks_exact(3)) {
        *dst = 0.299 * px[0] as f32 + 0.587 * px[1] as f32 + 0.114 * px[2] as f32;
    }
    out
}

/// Normalized box blur with clamped borders, separable in two passes.
pub fn box_blur(l: &ImageF32, kernel: usize) -> ImageF32 {
    let w = l.w;
    let h = l.h;
    if w == 0 || h == 0 || kernel <= 1 {
        return l.clone();
    }
    let r = (kernel / 2) as isize;
    let norm = 1.0 / (2 * r + 1) as f32;

    // Horizontal pass
    let mut tmp = ImageF32::new(w, h);
    for y in 0..h {
        let src = l.row(y);
        let dst = tmp.row_mut(y);
        for x in 0..w {
            let mut sum = 0.0;
            for dx in -r..=r {
                let xx = (x as isize + dx).clamp(0, w as isize - 1) as usize;
                sum += src[xx];
            }
            dst[x] = sum * norm;
        }
    }

    // Vertical pass
    let mut out = ImageF32::new(w, h);
    for y in 0..h {
        let dst = out.row_mut(y);
        for (x, out_px) in dst.iter_mut().enumerate() {
            let mut sum = 0.0;
            for dy in -r..=r {
                let yy = (y as isize + dy).clamp(0, h as isize - 1) as usize;
                sum += tmp.get(x, yy);
            }
            *out_px = sum * norm;
        }
    }
    out
}

/// Fixed-threshold binarization: values at or above `threshold` become 255.
pub fn binarize(l: &ImageF32, threshold: u8) -> ImageF32 {
    let mut out = ImageF32::new(l.w, l.h);
    let t = threshold as f32;
    for (dst, &v) in out.data.iter_mut().zip(l.data.iter()) {
        *dst = if v >= t { 255.0 } else { 0.0 };
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_strip(w: usize, h: usize, split_x: usize) -> RgbBuffer {
        let mut sub = RgbBuffer::new(w, h);
        for y in 0..h {
            for x in 0..w {
                let v = if x < split_x { 0 } else { 255 };
                sub.set(x, y, [v, v, v]);
            }
        }
        sub
    }

    #[test]
    fn luma_of_gray_pixel_is_identity() {
        let mut sub = RgbBuffer::new(2, 1);
        sub.set(0, 0, [100, 100, 100]);
        sub.set(1, 0, [0, 0, 0]);
        let l = luma(&sub);
        assert!((l.get(0, 0) - 100.0).abs() < 0.5);
        assert_eq!(l.get(1, 0), 0.0);
    }

    #[test]
    fn box_blur_preserves_constant_image() {
        let mut img = ImageF32::new(8, 8);
        img.data.fill(170.0);
        let blurred = box_blur(&img, 5);
        for &v in &blurred.data {
            assert!((v - 170.0).abs() < 1e-3);
        }
    }

    #[test]
    fn cascade_marks_the_intensity_step() {
        let sub = gradient_strip(64, 64, 32);
        let edges = detect_edges(&sub, &EdgeParams::default());
        let count = edges.data.iter().filter(|&&v| v != 0).count();
        assert!(count > 0, "a hard step must survive the cascade");
        // Edges must hug the step, not the flat halves.
        for y in 0..edges.h {
            for x in 0..edges.w {
                if edges.get(x, y) != 0 {
                    assert!(
                        (x as isize - 32).unsigned_abs() < 16,
                        "edge pixel ({x},{y}) too far from the step"
                    );
                }
            }
        }
    }

    #[test]
    fn flat_image_has_no_edges() {
        let sub = gradient_strip(32, 32, 0);
        let edges = detect_edges(&sub, &EdgeParams::default());
        assert!(edges.data.iter().all(|&v| v == 0));
    }
}
