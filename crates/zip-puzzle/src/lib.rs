//! High-level facade crate for the `zip-puzzle-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of the underlying crates
//! - (feature-gated) end-to-end helpers that run a line detector and an
//!   OCR capability over an `image::GrayImage`
//! - plain-text rendering of label grids and solved paths
//!
//! ## Quickstart
//!
//! ```
//! use zip_puzzle::{find_path, LabelGrid};
//! use zip_puzzle::render::render_grid;
//!
//! let grid: LabelGrid = "1 | * | 2".parse()?;
//! println!("{}", render_grid(&grid));
//!
//! let path = find_path(&grid);
//! assert!(path.is_some());
//! # Ok::<(), zip_puzzle::core::ParseGridError>(())
//! ```
//!
//! ## API map
//! - `zip_puzzle::core`: core types (segments, clustering, cells, grids).
//! - `zip_puzzle::grid`: grid-geometry recovery and cell labeling.
//! - `zip_puzzle::solver`: order-constrained Hamiltonian path search.
//! - `zip_puzzle::detect` (feature `image`): end-to-end helpers from
//!   `image::GrayImage`, including the bundled Canny + Hough line detector.
//! - `zip_puzzle::render`: textual grid and path rendering.

pub use zip_puzzle_core as core;
pub use zip_puzzle_grid as grid;
pub use zip_puzzle_solver as solver;

pub use zip_puzzle_core::{CellCoord, CellOcr, Label, LabelGrid, LineDetector};
pub use zip_puzzle_grid::{GridDetectError, GridDetectParams, GridDetector, GridGeometry};
pub use zip_puzzle_solver::find_path;

pub mod render;

#[cfg(feature = "image")]
pub mod detect;
