//! Core types and utilities for Zip puzzle grid recovery and solving.
//!
//! This crate is intentionally small and purely geometric: raw line
//! segments, 1-D boundary clustering, cell regions and the label grid. It
//! does *not* depend on any concrete line detector, OCR engine or image
//! codec; those enter through the [`LineDetector`] and [`CellOcr`] seams.

mod bounds;
mod capability;
mod cells;
mod cluster;
mod grid;
mod image;
mod logger;
mod segment;

pub use bounds::GridBounds;
pub use capability::{CellOcr, LineDetector};
pub use cells::{segment_cells, CellRect};
pub use cluster::cluster_positions;
pub use grid::{CellCoord, Label, LabelGrid, ParseGridError};
pub use image::{GrayImage, GrayImageView};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;
pub use logger::init_with_level;

pub use segment::{classify_segments, LineSegment, Orientation};
