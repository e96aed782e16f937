use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// A raw line segment in image pixel coordinates.
///
/// Segments are ephemeral: a [`LineDetector`](crate::LineDetector) produces
/// them and the classifier consumes them once.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub p1: Point2<f32>,
    pub p2: Point2<f32>,
}

/// Axis class of a segment.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl LineSegment {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            p1: Point2::new(x1, y1),
            p2: Point2::new(x2, y2),
        }
    }

    /// Classify the segment by slope.
    ///
    /// Exact verticals (`dx == 0`) and horizontals (`dy == 0`)
    /// short-circuit. Otherwise the absolute `atan2` angle decides: below
    /// `horizontal_max_angle` is horizontal, above `vertical_min_angle` is
    /// vertical, and anything in the band between the two thresholds is too
    /// oblique to belong to either axis (`None`).
    pub fn classify(
        &self,
        horizontal_max_angle: f32,
        vertical_min_angle: f32,
    ) -> Option<Orientation> {
        let dx = self.p2.x - self.p1.x;
        let dy = self.p2.y - self.p1.y;

        if dx == 0.0 {
            return Some(Orientation::Vertical);
        }
        if dy == 0.0 {
            return Some(Orientation::Horizontal);
        }

        let angle = dy.atan2(dx).abs();
        if angle < horizontal_max_angle {
            Some(Orientation::Horizontal)
        } else if angle > vertical_min_angle {
            Some(Orientation::Vertical)
        } else {
            None
        }
    }
}

/// Partition segments into `(vertical, horizontal)` lists.
///
/// Both lists preserve the input order; oblique segments are dropped.
pub fn classify_segments(
    segments: &[LineSegment],
    horizontal_max_angle: f32,
    vertical_min_angle: f32,
) -> (Vec<LineSegment>, Vec<LineSegment>) {
    let mut vertical = Vec::new();
    let mut horizontal = Vec::new();

    for segment in segments {
        match segment.classify(horizontal_max_angle, vertical_min_angle) {
            Some(Orientation::Vertical) => vertical.push(*segment),
            Some(Orientation::Horizontal) => horizontal.push(*segment),
            None => {}
        }
    }

    (vertical, horizontal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_3, FRAC_PI_6};

    fn classify(segment: LineSegment) -> Option<Orientation> {
        segment.classify(FRAC_PI_6, FRAC_PI_3)
    }

    #[test]
    fn pure_axis_segments_short_circuit() {
        assert_eq!(
            Some(Orientation::Vertical),
            classify(LineSegment::new(5.0, 0.0, 5.0, 90.0))
        );
        assert_eq!(
            Some(Orientation::Horizontal),
            classify(LineSegment::new(0.0, 7.0, 80.0, 7.0))
        );
    }

    #[test]
    fn slope_decides_near_axis_segments() {
        // ~5.7° above horizontal.
        assert_eq!(
            Some(Orientation::Horizontal),
            classify(LineSegment::new(0.0, 0.0, 100.0, 10.0))
        );
        // ~84°, nearly vertical.
        assert_eq!(
            Some(Orientation::Vertical),
            classify(LineSegment::new(0.0, 0.0, 10.0, 100.0))
        );
    }

    #[test]
    fn oblique_segments_are_discarded() {
        // 45° falls inside [π/6, π/3].
        assert_eq!(None, classify(LineSegment::new(0.0, 0.0, 50.0, 50.0)));
        assert_eq!(None, classify(LineSegment::new(0.0, 0.0, 50.0, -50.0)));
    }

    #[test]
    fn threshold_comparisons_are_strict() {
        // With both thresholds set to the segment's own angle, neither
        // the horizontal nor the vertical comparison passes.
        let segment = LineSegment::new(0.0, 0.0, 1.0, 1.0);
        let angle = 1.0f32.atan2(1.0);
        assert_eq!(None, segment.classify(angle, angle));
    }

    #[test]
    fn partition_preserves_input_order() {
        let segments = vec![
            LineSegment::new(10.0, 0.0, 10.0, 50.0),
            LineSegment::new(0.0, 0.0, 40.0, 40.0),
            LineSegment::new(0.0, 20.0, 50.0, 20.0),
            LineSegment::new(30.0, 0.0, 30.0, 50.0),
            LineSegment::new(0.0, 5.0, 50.0, 5.0),
        ];

        let (vertical, horizontal) = classify_segments(&segments, FRAC_PI_6, FRAC_PI_3);

        assert_eq!(2, vertical.len());
        assert_eq!(2, horizontal.len());
        assert_eq!(10.0, vertical[0].p1.x);
        assert_eq!(30.0, vertical[1].p1.x);
        assert_eq!(20.0, horizontal[0].p1.y);
        assert_eq!(5.0, horizontal[1].p1.y);
    }
}
