//! Probabilistic Hough transform over a binary edge map.
//!
//! Edge pixels are visited in randomized order; each visited pixel votes
//! for every discretized line orientation. When a (rho, theta) cell crosses
//! the vote threshold, the supporting line is walked in both directions
//! through the edge map, tolerating gaps up to a limit. A walk long enough
//! to pass the minimum-length test becomes a [`RawSegment`]; its support
//! pixels are erased from the map and their votes retracted so one physical
//! edge is not reported twice.
//!
//! Randomization uses a fixed-seed xorshift generator, so extraction is
//! deterministic for a given edge map and parameter set.
//!
//! The length and gap thresholds are expressed as fractions of the full
//! frame height, not of the cropped ROI: the expected lane-marking scale
//! follows the source footage, not the crop.

use crate::image::ImageU8;
use crate::types::RawSegment;
use log::debug;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Parameters of the probabilistic Hough extractor.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughParams {
    /// Rho (distance) resolution of the accumulator, in pixels.
    pub rho_resolution: f32,
    /// Angular resolution of the accumulator, in radians.
    pub angle_resolution: f32,
    /// Accumulator votes required before a line is traced.
    pub vote_threshold: i32,
    /// Minimum accepted segment length, as a fraction of frame height.
    pub min_length_frac: f64,
    /// Maximum bridged gap within one segment, as a fraction of frame height.
    pub max_gap_frac: f64,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            rho_resolution: 1.0,
            angle_resolution: PI / 180.0,
            vote_threshold: 30,
            min_length_frac: 0.06,
            max_gap_frac: 0.1,
        }
    }
}

const RNG_SEED: u64 = 0x853c_49e6_748f_ea9b;

/// Fixed-point scale for the sub-pixel line walk.
const SHIFT: i32 = 16;

struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    #[inline]
    fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

/// Extract line segments from `edges`, with length/gap thresholds scaled by
/// `frame_h`, the FULL frame height.
///
/// Returns `None` when the edge map holds no edge pixels at all (the
/// transform never ran) and `Some(segments)` — possibly empty — otherwise.
/// Callers treat both as "no candidate lines".
pub fn hough_segments(
    edges: &ImageU8,
    params: &HoughParams,
    frame_h: usize,
) -> Option<Vec<RawSegment>> {
    let w = edges.w as i32;
    let h = edges.h as i32;
    let min_len = (params.min_length_frac * frame_h as f64) as i32;
    let max_gap = (params.max_gap_frac * frame_h as f64) as i32;

    let mut nz: Vec<(i32, i32)> = Vec::new();
    for y in 0..edges.h {
        let row = edges.row(y);
        for (x, &v) in row.iter().enumerate() {
            if v != 0 {
                nz.push((x as i32, y as i32));
            }
        }
    }
    if nz.is_empty() {
        return None;
    }
    let total_points = nz.len();

    let mut mask: Vec<u8> = edges.data.iter().map(|&v| u8::from(v != 0)).collect();

    let irho = 1.0 / params.rho_resolution;
    let numangle = (PI / params.angle_resolution).round().max(1.0) as usize;
    let numrho = (((w + h) as f32 * 2.0 + 1.0) * irho).round() as usize;
    let rho_offset = (numrho as i32 - 1) / 2;
    let mut accum = vec![0i32; numangle * numrho];
    let trig: Vec<(f32, f32)> = (0..numangle)
        .map(|n| {
            let a = n as f32 * params.angle_resolution;
            (a.cos() * irho, a.sin() * irho)
        })
        .collect();

    let mut rng = XorShift64::new(RNG_SEED);
    let mut segments = Vec::new();
    let mut remaining = nz.len();

    while remaining > 0 {
        let pick = (rng.next() % remaining as u64) as usize;
        let (x0, y0) = nz[pick];
        nz[pick] = nz[remaining - 1];
        remaining -= 1;

        if mask[(y0 * w + x0) as usize] == 0 {
            continue; // consumed by an earlier segment
        }

        // Vote for every orientation and remember the strongest column.
        let mut max_votes = params.vote_threshold - 1;
        let mut best_n = None;
        for (n, &(c, s)) in trig.iter().enumerate() {
            let r = (x0 as f32 * c + y0 as f32 * s).round() as i32 + rho_offset;
            let cell = &mut accum[n * numrho + r as usize];
            *cell += 1;
            if *cell > max_votes {
                max_votes = *cell;
                best_n = Some(n);
            }
        }
        let Some(best_n) = best_n else {
            continue;
        };

        // Walk the supporting line in both directions with gap tolerance.
        // The accumulator angle is the line normal; the tangent is its
        // perpendicular.
        let a = best_n as f32 * params.angle_resolution;
        let (dir_x, dir_y) = (-a.sin(), a.cos());
        let xflag = dir_x.abs() > dir_y.abs();
        let (sx, sy, dx0, dy0) = if xflag {
            (
                x0,
                (y0 << SHIFT) + (1 << (SHIFT - 1)),
                if dir_x > 0.0 { 1 } else { -1 },
                (dir_y * (1 << SHIFT) as f32 / dir_x.abs()).round() as i32,
            )
        } else {
            (
                (x0 << SHIFT) + (1 << (SHIFT - 1)),
                y0,
                (dir_x * (1 << SHIFT) as f32 / dir_y.abs()).round() as i32,
                if dir_y > 0.0 { 1 } else { -1 },
            )
        };

        let mut line_ends = [(x0, y0); 2];
        for (k, end) in line_ends.iter_mut().enumerate() {
            let (dx, dy) = if k == 0 { (dx0, dy0) } else { (-dx0, -dy0) };
            let (mut x, mut y) = (sx, sy);
            let mut gap = 0;
            loop {
                let (i1, j1) = if xflag { (x, y >> SHIFT) } else { (x >> SHIFT, y) };
                if i1 < 0 || i1 >= w || j1 < 0 || j1 >= h {
                    break;
                }
                if mask[(j1 * w + i1) as usize] != 0 {
                    gap = 0;
                    *end = (i1, j1);
                } else {
                    gap += 1;
                    if gap > max_gap {
                        break;
                    }
                }
                x += dx;
                y += dy;
            }
        }

        let (ex0, ey0) = line_ends[0];
        let (ex1, ey1) = line_ends[1];
        let good_line = (ex1 - ex0).abs() >= min_len || (ey1 - ey0).abs() >= min_len;

        // Erase the support between the two ends; retract the votes of a
        // confirmed line so its pixels cannot seed another one.
        for (k, &end) in line_ends.iter().enumerate() {
            let (dx, dy) = if k == 0 { (dx0, dy0) } else { (-dx0, -dy0) };
            let (mut x, mut y) = (sx, sy);
            loop {
                let (i1, j1) = if xflag { (x, y >> SHIFT) } else { (x >> SHIFT, y) };
                let m = (j1 * w + i1) as usize;
                if mask[m] != 0 {
                    if good_line {
                        for (n, &(c, s)) in trig.iter().enumerate() {
                            let r = (i1 as f32 * c + j1 as f32 * s).round() as i32 + rho_offset;
                            accum[n * numrho + r as usize] -= 1;
                        }
                    }
                    mask[m] = 0;
                }
                if (i1, j1) == end {
                    break;
                }
                x += dx;
                y += dy;
            }
        }

        if good_line {
            segments.push(RawSegment::new(ex0, ey0, ex1, ey1));
        }
    }

    debug!(
        "hough_segments: {total_points} edge pixels -> {} segments (min_len={min_len}, max_gap={max_gap})",
        segments.len()
    );
    Some(segments)
}
