use lane_detector::image::FrameRgb8;
use lane_detector::{LaneDetector, LaneParams};

fn main() {
    // Demo stub: runs the detector on a fake black frame
    let w = 1280usize;
    let h = 720usize;
    let rgb = vec![0u8; 3 * w * h];
    let frame = FrameRgb8 {
        w,
        h,
        stride: 3 * w,
        data: &rgb,
    };

    let detector = LaneDetector::new(LaneParams::default());
    let report = detector.detect(frame);
    match report.lane {
        Some(lane) => println!(
            "lane=({},{})-({},{}) latency_ms={:.3}",
            lane.x1, lane.y1, lane.x2, lane.y2, report.latency_ms
        ),
        None => println!(
            "no lane (segments={} degenerate={}) latency_ms={:.3}",
            report.raw_segments, report.degenerate_fits, report.latency_ms
        ),
    }
}
