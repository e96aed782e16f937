use zip_puzzle::detect::{self, HoughLineDetector};
use zip_puzzle::GridDetectParams;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: scan_photo <image_path>");
        return Ok(());
    };

    let img = detect::load_gray(path)?;
    let detector = HoughLineDetector::default();
    let geometry = detect::detect_grid(&img, &detector, &GridDetectParams::default())?;

    println!(
        "detected a {} x {} cell grid ({} intersections)",
        geometry.num_rows(),
        geometry.num_cols(),
        geometry.intersections.len()
    );

    Ok(())
}
