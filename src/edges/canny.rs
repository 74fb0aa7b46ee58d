//! Canny-style edge extraction: Sobel gradients, direction-aligned
//! non-maximum suppression, and double-threshold hysteresis.
//!
//! NMS compares each pixel's magnitude against its two neighbors along the
//! quantized gradient direction (4 bins: 0°, 45°, 90°, 135°) and keeps only
//! strict local maxima. Hysteresis then seeds from pixels above the high
//! threshold and grows through 8-connected pixels above the low threshold.
//! The outermost 1-pixel frame is ignored to keep neighbor lookups in
//! bounds.

use super::grad::sobel_gradients;
use crate::image::{ImageF32, ImageU8};

const TAN_22_5_DEG: f32 = 0.41421356237;

/// Detect edges in a single-channel image; returns a binary map (255 = edge).
pub fn canny_edges(l: &ImageF32, low: f32, high: f32) -> ImageU8 {
    let w = l.w;
    let h = l.h;
    let mut out = ImageU8::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }

    let grad = sobel_gradients(l);

    // 0 = suppressed, 1 = weak candidate, 2 = strong seed
    let mut class = vec![0u8; w * h];
    let mut seeds = Vec::new();
    for y in 1..h - 1 {
        let mag_prev = grad.mag.row(y - 1);
        let mag_row = grad.mag.row(y);
        let mag_next = grad.mag.row(y + 1);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);

        for x in 1..w - 1 {
            let mag = mag_row[x];
            if mag < low {
                continue;
            }

            let gx = gx_row[x];
            let gy = gy_row[x];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();
            let same_sign = (gx >= 0.0 && gy >= 0.0) || (gx <= 0.0 && gy <= 0.0);

            let (neighbor1, neighbor2) = if abs_gx >= abs_gy {
                if abs_gy <= abs_gx * TAN_22_5_DEG {
                    (mag_row[x - 1], mag_row[x + 1])
                } else if same_sign {
                    (mag_prev[x + 1], mag_next[x - 1])
                } else {
                    (mag_prev[x - 1], mag_next[x + 1])
                }
            } else if abs_gx <= abs_gy * TAN_22_5_DEG {
                (mag_prev[x], mag_next[x])
            } else if same_sign {
                (mag_prev[x + 1], mag_next[x - 1])
            } else {
                (mag_prev[x - 1], mag_next[x + 1])
            };

            // Strict on one side, non-strict on the other: a two-pixel
            // plateau (the normal case on a binarized input) keeps exactly
            // one of the tied pixels.
            if mag <= neighbor1 || mag < neighbor2 {
                continue;
            }

            let idx = y * w + x;
            if mag >= high {
                class[idx] = 2;
                seeds.push(idx);
            } else {
                class[idx] = 1;
            }
        }
    }

    // Grow strong seeds through 8-connected weak candidates.
    let mut stack = seeds;
    while let Some(idx) = stack.pop() {
        out.data[idx] = 255;
        let x = idx % w;
        let y = idx / w;
        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                if nx < 0 || ny < 0 || nx >= w as i32 || ny >= h as i32 {
                    continue;
                }
                let nidx = ny as usize * w + nx as usize;
                if class[nidx] == 1 && out.data[nidx] == 0 {
                    class[nidx] = 2;
                    stack.push(nidx);
                }
            }
        }
    }

    out
}
