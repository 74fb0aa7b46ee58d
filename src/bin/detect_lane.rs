use lane_detector::config::detector::load_config;
use lane_detector::edges::detect_edges;
use lane_detector::image::io::{load_rgb_image, save_gray_u8, write_json_file};
use lane_detector::roi::region_of_interest;
use lane_detector::LaneDetector;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let frame_buffer = load_rgb_image(&config.input)?;
    let frame = frame_buffer.as_view();

    let detector = LaneDetector::new(config.params);
    let report = detector.detect(frame);

    if let Some(edge_path) = &config.output.edge_map {
        let region = region_of_interest(frame, &detector.params().roi);
        let edge_map = detect_edges(&region.image, &detector.params().edge);
        save_gray_u8(&edge_map, edge_path)?;
        println!("Saved ROI edge map to {}", edge_path.display());
    }

    write_json_file(&config.output.report_json, &report)?;

    match report.lane {
        Some(lane) => println!(
            "Lane ({},{}) -> ({},{}) from {} segments in {:.3} ms",
            lane.x1, lane.y1, lane.x2, lane.y2, report.raw_segments, report.latency_ms
        ),
        None => println!(
            "No lane detected ({} segments, {} degenerate fits)",
            report.raw_segments, report.degenerate_fits
        ),
    }
    println!("Saved report to {}", config.output.report_json.display());

    Ok(())
}

fn usage() -> String {
    "Usage: detect-lane <config.json>".to_string()
}
