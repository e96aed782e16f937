use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_3, FRAC_PI_6};

/// Parameters of the grid-geometry recovery pipeline.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GridDetectParams {
    /// Distance threshold (pixels) for merging near-duplicate boundary
    /// coordinates into one grid line.
    pub cluster_eps: f32,

    /// Segments with `|atan2(dy, dx)|` strictly below this are horizontal
    /// (radians).
    pub horizontal_max_angle: f32,

    /// Segments with `|atan2(dy, dx)|` strictly above this are vertical
    /// (radians). Segments between the two thresholds are discarded.
    pub vertical_min_angle: f32,

    /// Minimal number of boundary intersections required to form a grid.
    pub min_intersections: usize,
}

impl Default for GridDetectParams {
    fn default() -> Self {
        Self {
            cluster_eps: 10.0,
            horizontal_max_angle: FRAC_PI_6,
            vertical_min_angle: FRAC_PI_3,
            min_intersections: 4,
        }
    }
}
