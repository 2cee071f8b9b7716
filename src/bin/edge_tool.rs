use edge_detector::config::load_config;
use edge_detector::edges::{magnitude_map, sobel_gradients};
use edge_detector::image::io::{load_rgba_raw, save_rgba_raw, write_json_file};
use edge_detector::{EdgeDetector, EdgeError};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), EdgeError> {
    let config_path = env::args()
        .nth(1)
        .ok_or_else(|| EdgeError::Config(usage()))?;
    let config = load_config(Path::new(&config_path))?;

    let input = load_rgba_raw(&config.input.path, config.input.width, config.input.height)?;
    let detector = EdgeDetector::new(config.edge.clone());
    let report = detector.process(&input);

    save_rgba_raw(&report.output, &config.output.edges_image)?;
    write_json_file(&config.output.report_json, &report)?;

    if let Some(path) = &config.output.magnitude_image {
        let field = sobel_gradients(&detector.preprocess(&input));
        save_rgba_raw(&magnitude_map(&field), path)?;
        println!("Saved Sobel magnitude map to {}", path.display());
    }

    println!(
        "Saved {} edge map ({} edge pixels) to {}",
        report.operator,
        report.edge_count,
        config.output.edges_image.display()
    );
    println!("Saved report to {}", config.output.report_json.display());

    Ok(())
}

fn usage() -> String {
    "Usage: edge_tool <config.json>".to_string()
}
