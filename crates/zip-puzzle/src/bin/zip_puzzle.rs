use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use zip_puzzle::detect::{self, HoughLineDetector};
use zip_puzzle::render::{render_grid, render_path};
use zip_puzzle::{find_path, GridDetectParams, LabelGrid};
use zip_puzzle_core::{init_with_level, CellOcr, GrayImageView};

/// Scan and solve Zip number-path puzzles.
#[derive(Parser)]
#[command(name = "zip-puzzle", version, about)]
struct Cli {
    /// Verbose logging (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Recover the grid from a puzzle photograph and solve it.
    Scan {
        /// Puzzle photograph (any format the `image` crate decodes).
        image: PathBuf,

        /// Pre-labeled grid file standing in for OCR: one row per line,
        /// "*" or digits per cell.
        #[arg(long)]
        labels: Option<PathBuf>,

        /// Clustering distance threshold in pixels.
        #[arg(long)]
        eps: Option<f32>,

        /// JSON file with the full grid-detection parameters.
        #[arg(long)]
        params: Option<PathBuf>,
    },

    /// Solve a pre-labeled textual grid without touching an image.
    Solve {
        /// Grid file: one row per line, "*" or digits per cell.
        grid: PathBuf,
    },
}

/// OCR stand-in that recognizes nothing; every cell becomes a wildcard.
///
/// A real recognizer plugs in through the `CellOcr` trait; without one,
/// scanned grids carry only their geometry and `--labels` supplies the
/// digits.
struct NullOcr;

impl CellOcr for NullOcr {
    fn recognize(&mut self, _cell: &GrayImageView<'_>) -> String {
        String::new()
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let _ = init_with_level(level);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match cli.command {
        Command::Solve { grid } => {
            let grid: LabelGrid = std::fs::read_to_string(&grid)?.parse()?;
            Ok(solve_and_print(&grid))
        }
        Command::Scan {
            image,
            labels,
            eps,
            params,
        } => {
            let mut params: GridDetectParams = match params {
                Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
                None => GridDetectParams::default(),
            };
            if let Some(eps) = eps {
                params.cluster_eps = eps;
            }

            let img = detect::load_gray(&image)?;
            let detector = HoughLineDetector::default();
            let geometry = detect::detect_grid(&img, &detector, &params)?;
            println!(
                "Detected a {} x {} cell grid",
                geometry.num_rows(),
                geometry.num_cols()
            );

            let grid: LabelGrid = match labels {
                Some(path) => std::fs::read_to_string(path)?.parse()?,
                None => detect::label_grid(&img, &geometry, &mut NullOcr),
            };
            Ok(solve_and_print(&grid))
        }
    }
}

fn solve_and_print(grid: &LabelGrid) -> ExitCode {
    println!("Extracted grid:");
    println!("{}", render_grid(grid));

    if grid.is_empty() {
        eprintln!("grid has no cells");
        return ExitCode::FAILURE;
    }

    match find_path(grid) {
        Some(path) => {
            println!();
            println!("Path over grid:");
            println!("{}", render_path(grid.rows(), grid.cols(), &path));
            ExitCode::SUCCESS
        }
        None => {
            println!();
            println!("No path satisfies the ordering constraints.");
            ExitCode::FAILURE
        }
    }
}
