use crate::{GridDetectError, GridDetectParams};
use log::{debug, info};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use zip_puzzle_core::{
    classify_segments, cluster_positions, segment_cells, CellRect, GridBounds, LineSegment,
};

/// Recovered grid geometry: ordered boundary positions, their
/// intersections and the bounding rectangle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridGeometry {
    /// Clustered x coordinates of the vertical grid lines, ascending.
    pub boundary_xs: Vec<i32>,
    /// Clustered y coordinates of the horizontal grid lines, ascending.
    pub boundary_ys: Vec<i32>,
    /// Cross product of the boundary positions.
    pub intersections: Vec<Point2<i32>>,
    pub bounds: GridBounds,
}

impl GridGeometry {
    pub fn num_rows(&self) -> usize {
        self.boundary_ys.len().saturating_sub(1)
    }

    pub fn num_cols(&self) -> usize {
        self.boundary_xs.len().saturating_sub(1)
    }

    /// Cell regions between consecutive boundaries, row-major.
    pub fn cells(&self) -> Vec<CellRect> {
        segment_cells(&self.boundary_xs, &self.boundary_ys)
    }
}

/// Grid-geometry recovery pipeline.
pub struct GridDetector {
    params: GridDetectParams,
}

impl GridDetector {
    pub fn new(params: GridDetectParams) -> Self {
        Self { params }
    }

    #[inline]
    pub fn params(&self) -> &GridDetectParams {
        &self.params
    }

    /// Recover the grid geometry from raw line-segment detections.
    ///
    /// Fails fast when no segments were detected, when either axis has no
    /// positions left after classification, or when too few intersections
    /// remain to form a grid.
    pub fn detect_from_segments(
        &self,
        segments: &[LineSegment],
    ) -> Result<GridGeometry, GridDetectError> {
        if segments.is_empty() {
            return Err(GridDetectError::NoLinesDetected);
        }

        // 1. Split by slope.
        let (vertical, horizontal) = classify_segments(
            segments,
            self.params.horizontal_max_angle,
            self.params.vertical_min_angle,
        );
        info!(
            "{} vertical and {} horizontal of {} raw segments",
            vertical.len(),
            horizontal.len(),
            segments.len()
        );

        // 2. One boundary per run of near-duplicate positions.
        let xs: Vec<f32> = vertical.iter().map(|s| s.p1.x).collect();
        let ys: Vec<f32> = horizontal.iter().map(|s| s.p1.y).collect();

        let boundary_xs = cluster_positions(&xs, self.params.cluster_eps)
            .ok_or(GridDetectError::EmptyPositions { axis: "vertical" })?;
        let boundary_ys = cluster_positions(&ys, self.params.cluster_eps)
            .ok_or(GridDetectError::EmptyPositions { axis: "horizontal" })?;
        info!(
            "{} vertical and {} horizontal grid lines after clustering",
            boundary_xs.len(),
            boundary_ys.len()
        );

        // 3. Cross the boundaries and bound the grid.
        let intersections: Vec<Point2<i32>> = boundary_xs
            .iter()
            .flat_map(|&x| boundary_ys.iter().map(move |&y| Point2::new(x, y)))
            .collect();
        debug!("{} boundary intersections", intersections.len());

        if intersections.len() < self.params.min_intersections {
            return Err(GridDetectError::InsufficientIntersections {
                found: intersections.len(),
                needed: self.params.min_intersections,
            });
        }

        let Some(bounds) = GridBounds::from_points(&intersections) else {
            return Err(GridDetectError::InsufficientIntersections {
                found: 0,
                needed: self.params.min_intersections,
            });
        };

        // Bounds come from the same point set, so this clamp cannot drop
        // anything today; it guards corner strategies that are not a plain
        // min/max.
        let intersections = bounds.filter_points(&intersections);
        let boundary_xs = bounds.filter_xs(&boundary_xs);
        let boundary_ys = bounds.filter_ys(&boundary_ys);

        Ok(GridGeometry {
            boundary_xs,
            boundary_ys,
            intersections,
            bounds,
        })
    }
}
