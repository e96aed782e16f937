//! End-to-end helpers over `image::GrayImage`.
//!
//! The bundled [`HoughLineDetector`] plays the role of the external
//! image-processing capability; any other [`LineDetector`] slots in the
//! same way, which is how the tests drive the pipeline without images.

use crate::render;
use log::info;
use zip_puzzle_core::{CellCoord, CellOcr, GrayImageView, LabelGrid, LineDetector, LineSegment};
use zip_puzzle_grid::{label_cells, GridDetectError, GridDetectParams, GridDetector, GridGeometry};
use zip_puzzle_solver::find_path;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced by the end-to-end helpers.
#[derive(thiserror::Error, Debug)]
pub enum DetectError {
    #[error("cannot decode image: {0}")]
    ImageLoad(#[from] ::image::ImageError),

    #[error(transparent)]
    Grid(#[from] GridDetectError),
}

/// Canny edge detection followed by a Hough line transform, converted to
/// finite segments spanning the image.
#[derive(Clone, Debug)]
pub struct HoughLineDetector {
    /// Low hysteresis threshold for the Canny edge detector.
    pub canny_low: f32,
    /// High hysteresis threshold for the Canny edge detector.
    pub canny_high: f32,
    /// Minimal Hough accumulator votes for a line.
    pub vote_threshold: u32,
    /// Non-maximum suppression radius in Hough space.
    pub suppression_radius: u32,
}

impl Default for HoughLineDetector {
    fn default() -> Self {
        Self {
            canny_low: 50.0,
            canny_high: 150.0,
            vote_threshold: 100,
            suppression_radius: 8,
        }
    }
}

impl LineDetector for HoughLineDetector {
    fn detect_lines(&self, image: &GrayImageView<'_>) -> Vec<LineSegment> {
        let Some(gray) = ::image::GrayImage::from_raw(
            image.width as u32,
            image.height as u32,
            image.data.to_vec(),
        ) else {
            return Vec::new();
        };

        let edges = imageproc::edges::canny(&gray, self.canny_low, self.canny_high);
        let options = imageproc::hough::LineDetectionOptions {
            vote_threshold: self.vote_threshold,
            suppression_radius: self.suppression_radius,
        };
        let lines = imageproc::hough::detect_lines(&edges, options);

        lines
            .iter()
            .map(|line| polar_to_segment(line, image.width as f32, image.height as f32))
            .collect()
    }
}

/// Span a polar Hough line across the image as a finite segment.
///
/// Endpoints are ordered toward positive x (positive y for exact
/// verticals) so that downstream slope classification sees a canonical
/// direction.
fn polar_to_segment(
    line: &imageproc::hough::PolarLine,
    width: f32,
    height: f32,
) -> LineSegment {
    let theta = (line.angle_in_degrees as f32).to_radians();
    let (sin, cos) = theta.sin_cos();

    // Closest point to the origin, then extend along the line direction.
    let (px, py) = (line.r * cos, line.r * sin);
    let reach = width.hypot(height);
    let (dx, dy) = (-sin, cos);

    let (x1, y1) = (px - dx * reach, py - dy * reach);
    let (x2, y2) = (px + dx * reach, py + dy * reach);

    if x1 < x2 || (x1 == x2 && y1 <= y2) {
        LineSegment::new(x1, y1, x2, y2)
    } else {
        LineSegment::new(x2, y2, x1, y1)
    }
}

/// Load an image from disk and convert it to 8-bit grayscale.
///
/// Fails before any detection work when the file cannot be read or
/// decoded.
pub fn load_gray(path: impl AsRef<std::path::Path>) -> Result<::image::GrayImage, DetectError> {
    let img = ::image::ImageReader::open(path)
        .map_err(::image::ImageError::IoError)?
        .decode()?;
    Ok(img.to_luma8())
}

/// Borrow an `image::GrayImage` as the lightweight core view type.
pub fn gray_view(img: &::image::GrayImage) -> GrayImageView<'_> {
    GrayImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Run line detection and grid-geometry recovery on a grayscale image.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip_all, fields(width = img.width(), height = img.height()))
)]
pub fn detect_grid(
    img: &::image::GrayImage,
    detector: &dyn LineDetector,
    params: &GridDetectParams,
) -> Result<GridGeometry, DetectError> {
    let view = gray_view(img);
    let segments = detector.detect_lines(&view);
    info!("line detector produced {} segments", segments.len());

    Ok(GridDetector::new(params.clone()).detect_from_segments(&segments)?)
}

/// Label every cell of a recovered grid through the OCR capability.
pub fn label_grid<O: CellOcr + ?Sized>(
    img: &::image::GrayImage,
    geometry: &GridGeometry,
    ocr: &mut O,
) -> LabelGrid {
    let view = gray_view(img);
    label_cells(
        &view,
        &geometry.cells(),
        geometry.num_rows(),
        geometry.num_cols(),
        ocr,
    )
}

/// Result of a full scan: recovered geometry, the label grid, and the
/// solved path when one exists.
#[derive(Clone, Debug)]
pub struct PuzzleScan {
    pub geometry: GridGeometry,
    pub grid: LabelGrid,
    pub path: Option<Vec<CellCoord>>,
}

impl PuzzleScan {
    /// Plain-text rendering of the extracted grid.
    pub fn render_grid(&self) -> String {
        render::render_grid(&self.grid)
    }

    /// Plain-text step overlay of the solved path, if any.
    pub fn render_path(&self) -> Option<String> {
        self.path
            .as_deref()
            .map(|path| render::render_path(self.grid.rows(), self.grid.cols(), path))
    }
}

/// Run the whole pipeline end-to-end: recover the grid, label it, and
/// search for the path.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip_all, fields(width = img.width(), height = img.height()))
)]
pub fn solve_image<O: CellOcr + ?Sized>(
    img: &::image::GrayImage,
    detector: &dyn LineDetector,
    params: &GridDetectParams,
    ocr: &mut O,
) -> Result<PuzzleScan, DetectError> {
    let geometry = detect_grid(img, detector, params)?;
    info!(
        "recovered a {} x {} cell grid",
        geometry.num_rows(),
        geometry.num_cols()
    );

    let grid = label_grid(img, &geometry, ocr);
    let path = find_path(&grid);

    Ok(PuzzleScan {
        geometry,
        grid,
        path,
    })
}
