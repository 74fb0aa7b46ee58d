mod common;

use common::synthetic_image::road_frame;
use lane_detector::fit::{aggregate_segments, reconstruct};
use lane_detector::image::FrameRgb8;
use lane_detector::types::RawSegment;
use lane_detector::{detect_lane, LaneDetector, LaneParams};

fn frame_view(data: &[u8], w: usize, h: usize) -> FrameRgb8<'_> {
    FrameRgb8 {
        w,
        h,
        stride: 3 * w,
        data,
    }
}

/// A straight marking through the ROI. For a 1000×600 frame the default
/// trapezoid occupies x in [170, 430), y in [234, 348); the line runs from
/// (200, 330) to (400, 250), well inside it.
#[test]
fn synthetic_line_slope_is_recovered() {
    let (w, h) = (1000usize, 600usize);
    let slope = (250.0 - 330.0) / (400.0 - 200.0); // -0.4
    let intercept = 330.0 - slope * 200.0;
    let data = road_frame(w, h, slope, intercept, 200, 400, 16.0);

    let detector = LaneDetector::new(LaneParams::default());
    let report = detector.detect(frame_view(&data, w, h));

    assert!(report.raw_segments > 0, "band edges should yield segments");
    let lane = report.lane.expect("a clean marking must be detected");
    assert_eq!((lane.y1, lane.y2), (180, 390));

    let implied = (lane.y2 - lane.y1) as f32 / (lane.x2 - lane.x1) as f32;
    let rel_err = (implied - slope).abs() / slope.abs();
    assert!(
        rel_err < 0.05,
        "implied slope {implied} deviates {:.1}% from rendered {slope}",
        rel_err * 100.0
    );
}

#[test]
fn blank_frame_reports_no_lane() {
    let (w, h) = (640usize, 480usize);
    let data = vec![0u8; 3 * w * h];
    let report = LaneDetector::default().detect(frame_view(&data, w, h));
    assert!(report.lane.is_none());
    assert_eq!(report.raw_segments, 0);
    assert_eq!(report.degenerate_fits, 0);
}

#[test]
fn textured_but_laneless_frame_reports_no_lane() {
    // Uniform mid-gray below the binarization threshold: edge map is empty.
    let (w, h) = (320usize, 240usize);
    let data = vec![100u8; 3 * w * h];
    assert!(detect_lane(frame_view(&data, w, h)).is_none());
}

/// Stage composition on a 1000×600 frame: the ROI crop origin is
/// (170, 234), one ROI-local segment (0,0)-(100,50). After translation and
/// reconstruction at y = 180 and y = 390 the recomputed slope must stay 0.5.
#[test]
fn reference_scenario_round_trip() {
    let seg = RawSegment::new(0, 0, 100, 50);
    let agg = aggregate_segments(&[seg], (170, 234));
    let model = agg.model.expect("single well-formed segment must fit");
    assert!((model.slope - 0.5).abs() < 1e-5);

    let lane = reconstruct(&model, 600, 0.30, 0.65).expect("slope 0.5 is invertible");
    assert_eq!((lane.y1, lane.y2), (180, 390));
    let recomputed = (lane.y2 - lane.y1) as f32 / (lane.x2 - lane.x1) as f32;
    assert!((recomputed - 0.5).abs() < 0.01);
}

#[test]
fn batch_detection_matches_sequential() {
    let (w, h) = (1000usize, 600usize);
    let slope = -0.45;
    let intercept = 335.0 - slope * 210.0;
    let lane_frame = road_frame(w, h, slope, intercept, 210, 390, 16.0);
    let blank = vec![0u8; 3 * w * h];

    let frames = [
        frame_view(&lane_frame, w, h),
        frame_view(&blank, w, h),
        frame_view(&lane_frame, w, h),
    ];

    let detector = LaneDetector::new(LaneParams::default());
    let batch = detector.detect_all(&frames);
    assert_eq!(batch.len(), 3);
    for (report, frame) in batch.iter().zip(frames) {
        assert_eq!(report.lane, detector.detect(frame).lane);
    }
    assert!(batch[0].lane.is_some());
    assert!(batch[1].lane.is_none());
    assert_eq!(batch[0].lane, batch[2].lane);
}
