//! Grid-geometry recovery for Zip puzzle photographs.
//!
//! Turns raw line-segment detections into a clean, ordered set of grid
//! boundaries and labeled cells:
//! 1. Classify raw segments as vertical or horizontal by slope.
//! 2. Cluster near-duplicate positions into one boundary per grid line.
//! 3. Cross the boundaries into intersections, derive the bounding
//!    rectangle and clamp everything to it.
//! 4. Cut cell regions between consecutive boundaries (row-major).
//! 5. Drive a [`CellOcr`](zip_puzzle_core::CellOcr) over the cells to
//!    produce the label grid.
//!
//! ## Quickstart
//!
//! ```
//! use zip_puzzle_grid::{GridDetectParams, GridDetector};
//! use zip_puzzle_core::LineSegment;
//!
//! let detector = GridDetector::new(GridDetectParams::default());
//!
//! let segments: Vec<LineSegment> = Vec::new();
//! assert!(detector.detect_from_segments(&segments).is_err());
//! ```

mod detector;
mod error;
mod labeler;
mod params;

pub use detector::{GridDetector, GridGeometry};
pub use error::GridDetectError;
pub use labeler::label_cells;
pub use params::GridDetectParams;
