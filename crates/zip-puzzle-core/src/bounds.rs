use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding rectangle over a set of grid intersections.
///
/// The corners are exactly the four min/max combinations per axis.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GridBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl GridBounds {
    /// Bounding rectangle of a point set; `None` when the set is empty.
    pub fn from_points(points: &[Point2<i32>]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };

        for point in &points[1..] {
            bounds.min_x = bounds.min_x.min(point.x);
            bounds.min_y = bounds.min_y.min(point.y);
            bounds.max_x = bounds.max_x.max(point.x);
            bounds.max_y = bounds.max_y.max(point.y);
        }

        Some(bounds)
    }

    /// The four corners: top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [Point2<i32>; 4] {
        [
            Point2::new(self.min_x, self.min_y),
            Point2::new(self.max_x, self.min_y),
            Point2::new(self.min_x, self.max_y),
            Point2::new(self.max_x, self.max_y),
        ]
    }

    pub fn contains_x(&self, x: i32) -> bool {
        self.min_x <= x && x <= self.max_x
    }

    pub fn contains_y(&self, y: i32) -> bool {
        self.min_y <= y && y <= self.max_y
    }

    pub fn contains(&self, point: &Point2<i32>) -> bool {
        self.contains_x(point.x) && self.contains_y(point.y)
    }

    /// Keep only points inside the rectangle (inclusive).
    ///
    /// With bounds derived from the same point set this removes nothing;
    /// the clamp is the contract for bounds that come from elsewhere (or
    /// from a future corner strategy that is not a plain min/max).
    pub fn filter_points(&self, points: &[Point2<i32>]) -> Vec<Point2<i32>> {
        points
            .iter()
            .copied()
            .filter(|p| self.contains(p))
            .collect()
    }

    /// Keep only x coordinates inside the horizontal extent (inclusive).
    pub fn filter_xs(&self, xs: &[i32]) -> Vec<i32> {
        xs.iter().copied().filter(|&x| self.contains_x(x)).collect()
    }

    /// Keep only y coordinates inside the vertical extent (inclusive).
    pub fn filter_ys(&self, ys: &[i32]) -> Vec<i32> {
        ys.iter().copied().filter(|&y| self.contains_y(y)).collect()
    }
}
