//! Plain-text rendering of label grids and solved paths.

use zip_puzzle_core::{CellCoord, LabelGrid};

/// Render the grid one row per line, cells joined with `" | "`.
pub fn render_grid(grid: &LabelGrid) -> String {
    grid.iter_rows()
        .map(|row| {
            row.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a path as a step-number overlay over a `rows x cols` grid.
///
/// Each visited cell shows its zero-based step as two digits; cells the
/// path never reached stay blank (useful when rendering a partial path).
pub fn render_path(rows: usize, cols: usize, path: &[CellCoord]) -> String {
    let mut steps = vec!["  ".to_string(); rows * cols];
    for (step, cell) in path.iter().enumerate() {
        if cell.row < rows && cell.col < cols {
            steps[cell.row * cols + cell.col] = format!("{step:02}");
        }
    }

    (0..rows)
        .map(|row| steps[row * cols..(row + 1) * cols].join(" | "))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_rows_are_pipe_joined() {
        let grid: LabelGrid = "1 | * | 2\n* | 12 | *".parse().expect("valid grid");
        assert_eq!("1 | * | 2\n* | 12 | *", render_grid(&grid));
    }

    #[test]
    fn path_overlay_numbers_every_step() {
        let path = [
            CellCoord::new(0, 0),
            CellCoord::new(0, 1),
            CellCoord::new(1, 1),
            CellCoord::new(1, 0),
        ];
        assert_eq!("00 | 01\n03 | 02", render_path(2, 2, &path));
    }

    #[test]
    fn unvisited_cells_stay_blank() {
        let path = [CellCoord::new(0, 0)];
        assert_eq!("00 |   \n   |   ", render_path(2, 2, &path));
    }
}
