/// Renders a dark road surface with one bright lane band following
/// `y = slope * x + intercept`, drawn for `x` in `[x_start, x_end)`.
///
/// The band is thick enough to survive the detector's box blur and its end
/// caps are near-vertical, so they either fall below the minimum segment
/// length or are dropped as degenerate fits.
pub fn road_frame(
    width: usize,
    height: usize,
    slope: f32,
    intercept: f32,
    x_start: usize,
    x_end: usize,
    thickness: f32,
) -> Vec<u8> {
    assert!(width > 0 && height > 0, "frame dimensions must be positive");

    let mut data = vec![0u8; 3 * width * height];
    for px in data.chunks_exact_mut(3) {
        px.copy_from_slice(&[30, 30, 30]);
    }

    let half = thickness / 2.0;
    let norm = (slope * slope + 1.0).sqrt();
    for y in 0..height {
        for x in x_start..x_end.min(width) {
            let dist = (slope * x as f32 - y as f32 + intercept).abs() / norm;
            if dist <= half {
                let i = 3 * (y * width + x);
                data[i..i + 3].copy_from_slice(&[255, 255, 255]);
            }
        }
    }
    data
}
