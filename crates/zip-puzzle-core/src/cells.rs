use serde::{Deserialize, Serialize};

/// Half-open pixel region `[x0, x1) × [y0, y1)` of one grid cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CellRect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl CellRect {
    pub fn width(&self) -> u32 {
        (self.x1 - self.x0).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (self.y1 - self.y0).max(0) as u32
    }
}

/// Cut cell regions from ordered boundary positions.
///
/// Cells are emitted row-major: the cell at row `j`, column `i` spans
/// `xs[i]..xs[i+1]` horizontally and `ys[j]..ys[j+1]` vertically. Fewer
/// than two boundaries on either axis yields no cells.
pub fn segment_cells(xs: &[i32], ys: &[i32]) -> Vec<CellRect> {
    if xs.len() < 2 || ys.len() < 2 {
        return Vec::new();
    }

    let mut cells = Vec::with_capacity((xs.len() - 1) * (ys.len() - 1));
    for span_y in ys.windows(2) {
        for span_x in xs.windows(2) {
            cells.push(CellRect {
                x0: span_x[0],
                y0: span_y[0],
                x1: span_x[1],
                y1: span_y[1],
            });
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_row_major_between_consecutive_boundaries() {
        let xs = [0, 10, 25];
        let ys = [0, 40, 90];

        let cells = segment_cells(&xs, &ys);

        assert_eq!(4, cells.len());
        // Top row first, left to right.
        assert_eq!(
            CellRect {
                x0: 0,
                y0: 0,
                x1: 10,
                y1: 40
            },
            cells[0]
        );
        assert_eq!(
            CellRect {
                x0: 10,
                y0: 0,
                x1: 25,
                y1: 40
            },
            cells[1]
        );
        assert_eq!(
            CellRect {
                x0: 0,
                y0: 40,
                x1: 10,
                y1: 90
            },
            cells[2]
        );
        assert_eq!(
            CellRect {
                x0: 10,
                y0: 40,
                x1: 25,
                y1: 90
            },
            cells[3]
        );
    }

    #[test]
    fn too_few_boundaries_yield_no_cells() {
        assert!(segment_cells(&[5], &[0, 10]).is_empty());
        assert!(segment_cells(&[0, 10], &[7]).is_empty());
        assert!(segment_cells(&[], &[]).is_empty());
    }

    #[test]
    fn rect_extent_accessors() {
        let rect = CellRect {
            x0: 4,
            y0: 10,
            x1: 9,
            y1: 12,
        };
        assert_eq!(5, rect.width());
        assert_eq!(2, rect.height());
    }
}
