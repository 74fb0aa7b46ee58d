//! Region-of-interest selection.
//!
//! The lane boundary is expected inside a fixed-proportion trapezoid in the
//! lower-middle part of the frame. This module rasterizes that trapezoid
//! into a binary mask, zeroes everything outside it, and crops to the
//! trapezoid's axis-aligned bounding box. The crop offset is carried along
//! so downstream stages can translate ROI-local coordinates back into the
//! full frame.

use crate::image::{FrameRgb8, ImageU8, RgbBuffer};
use serde::{Deserialize, Serialize};

/// Trapezoid vertex positions as fractions of the frame dimensions.
///
/// The quadrilateral is `(x_bottom_left, y_bottom)`, `(x_bottom_right,
/// y_bottom)`, `(x_bottom_right, y_top)`, `(x_top_left, y_top)` — the right
/// edge is vertical, the left edge slants inward toward the top.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiFractions {
    pub x_bottom_left: f64,
    pub x_bottom_right: f64,
    pub x_top_left: f64,
    pub y_bottom: f64,
    pub y_top: f64,
}

impl Default for RoiFractions {
    fn default() -> Self {
        Self {
            x_bottom_left: 0.17,
            x_bottom_right: 0.43,
            x_top_left: 0.31,
            y_bottom: 0.58,
            y_top: 0.39,
        }
    }
}

impl RoiFractions {
    /// Vertex pixel coordinates for a `w × h` frame, in the order
    /// bottom-left, bottom-right, top-right, top-left.
    ///
    /// The fraction-to-pixel products are evaluated in f64 before the
    /// truncating cast; in f32 the round-off flips rows such as
    /// `0.39 * 600` to 233 instead of 234.
    pub fn vertices(&self, w: usize, h: usize) -> [[i32; 2]; 4] {
        let x_bl = (self.x_bottom_left * w as f64) as i32;
        let x_br = (self.x_bottom_right * w as f64) as i32;
        let x_tl = (self.x_top_left * w as f64) as i32;
        let y_bottom = (self.y_bottom * h as f64) as i32;
        let y_top = (self.y_top * h as f64) as i32;
        [
            [x_bl, y_bottom],
            [x_br, y_bottom],
            [x_br, y_top],
            [x_tl, y_top],
        ]
    }
}

/// Masked ROI sub-image plus its origin in full-frame coordinates.
#[derive(Clone, Debug)]
pub struct RoiRegion {
    /// Masked crop of the frame; pixels outside the trapezoid are black.
    pub image: RgbBuffer,
    /// Offset `(x, y)` of the crop's top-left corner in the frame.
    pub offset: (i32, i32),
}

/// Extract the masked ROI sub-image from `frame`.
///
/// Unusually small frames can produce an empty bounding box; the result is
/// then a zero-area image and downstream stages find no segments.
pub fn region_of_interest(frame: FrameRgb8<'_>, fractions: &RoiFractions) -> RoiRegion {
    let verts = fractions.vertices(frame.w, frame.h);
    let [bl, br, _tr, tl] = verts;
    let (x0, x1) = (bl[0], br[0]);
    let (y0, y1) = (tl[1], bl[1]);

    if x1 <= x0 || y1 <= y0 {
        return RoiRegion {
            image: RgbBuffer::new(0, 0),
            offset: (x0, y0),
        };
    }

    let w = (x1 - x0) as usize;
    let h = (y1 - y0) as usize;
    let mask = quad_mask(w, h, x0, y0, &verts);

    let mut image = RgbBuffer::new(w, h);
    for y in 0..h {
        let fy = (y0 as usize) + y;
        for x in 0..w {
            if mask.get(x, y) != 0 {
                let fx = (x0 as usize) + x;
                image.set(x, y, frame.get(fx, fy));
            }
        }
    }

    RoiRegion {
        image,
        offset: (x0, y0),
    }
}

/// Rasterize the convex quadrilateral into a `w × h` mask whose origin is
/// at `(x0, y0)` in frame coordinates. Boundary pixels count as inside.
fn quad_mask(w: usize, h: usize, x0: i32, y0: i32, verts: &[[i32; 2]; 4]) -> ImageU8 {
    let mut mask = ImageU8::new(w, h);
    for y in 0..h {
        let py = y0 + y as i32;
        let row = mask.row_mut(y);
        for (x, out) in row.iter_mut().enumerate() {
            let px = x0 + x as i32;
            if inside_convex(px, py, verts) {
                *out = 255;
            }
        }
    }
    mask
}

/// Point-in-convex-polygon test via consistent cross-product signs.
fn inside_convex(px: i32, py: i32, verts: &[[i32; 2]; 4]) -> bool {
    let mut sign = 0i64;
    for i in 0..4 {
        let a = verts[i];
        let b = verts[(i + 1) % 4];
        let cross =
            (b[0] - a[0]) as i64 * (py - a[1]) as i64 - (b[1] - a[1]) as i64 * (px - a[0]) as i64;
        if cross != 0 {
            if sign == 0 {
                sign = cross.signum();
            } else if sign != cross.signum() {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::FrameRgb8;

    fn solid_frame(w: usize, h: usize, px: [u8; 3]) -> Vec<u8> {
        let mut data = vec![0u8; 3 * w * h];
        for chunk in data.chunks_exact_mut(3) {
            chunk.copy_from_slice(&px);
        }
        data
    }

    #[test]
    fn vertex_rows_follow_double_precision_truncation() {
        // f32 products land just below the integer and truncate one pixel
        // short (233 / 347 here).
        let verts = RoiFractions::default().vertices(1000, 600);
        assert_eq!(verts, [[170, 348], [430, 348], [430, 234], [310, 234]]);
    }

    #[test]
    fn roi_crop_matches_bounding_box() {
        let (w, h) = (1000usize, 600usize);
        let data = solid_frame(w, h, [200, 200, 200]);
        let frame = FrameRgb8 {
            w,
            h,
            stride: 3 * w,
            data: &data,
        };
        let region = region_of_interest(frame, &RoiFractions::default());
        assert_eq!(region.offset, (170, 234));
        assert_eq!(region.image.w, 430 - 170);
        assert_eq!(region.image.h, 348 - 234);
    }

    #[test]
    fn pixels_outside_quad_are_zeroed() {
        for (w, h) in [(50usize, 50usize), (320, 240), (1000, 600)] {
            let data = solid_frame(w, h, [255, 255, 255]);
            let frame = FrameRgb8 {
                w,
                h,
                stride: 3 * w,
                data: &data,
            };
            let fractions = RoiFractions::default();
            let verts = fractions.vertices(w, h);
            let region = region_of_interest(frame, &fractions);
            for y in 0..region.image.h {
                for x in 0..region.image.w {
                    let px = region.offset.0 + x as i32;
                    let py = region.offset.1 + y as i32;
                    if !inside_convex(px, py, &verts) {
                        assert_eq!(
                            region.image.get(x, y),
                            [0, 0, 0],
                            "pixel ({px},{py}) outside the trapezoid must be black"
                        );
                    } else {
                        assert_eq!(region.image.get(x, y), [255, 255, 255]);
                    }
                }
            }
        }
    }

    #[test]
    fn tiny_frame_degenerates_to_empty_region() {
        let data = solid_frame(2, 2, [10, 10, 10]);
        let frame = FrameRgb8 {
            w: 2,
            h: 2,
            stride: 6,
            data: &data,
        };
        let region = region_of_interest(frame, &RoiFractions::default());
        assert_eq!(region.image.w * region.image.h, 0);
    }
}
