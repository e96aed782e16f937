use log::debug;
use zip_puzzle_core::{CellCoord, Label, LabelGrid};

/// Neighbor exploration order: up, down, left, right.
const NEIGHBOR_STEPS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Search for a path visiting every cell exactly once that passes through
/// the numbered cells in strictly increasing order, starting at the cell
/// labeled "1" and ending on the highest-numbered cell.
///
/// The first path found under the fixed neighbor order is returned, so
/// the result is deterministic but not chosen for shape or length. `None`
/// is the normal negative outcome: no ordering-respecting Hamiltonian
/// path exists, including the trivial case of a grid without a "1".
pub fn find_path(grid: &LabelGrid) -> Option<Vec<CellCoord>> {
    let (numbers, start, terminal) = scan_waypoints(grid)?;

    let total_cells = grid.len();
    let mut search = Search {
        rows: grid.rows(),
        cols: grid.cols(),
        numbers,
        visited: vec![false; total_cells],
        path: Vec::with_capacity(total_cells),
        total_cells,
        terminal,
    };

    if search.visit(start, 1, 1) {
        Some(search.path)
    } else {
        None
    }
}

/// One pass over the grid: the numeric view of every cell, the mandatory
/// start ("1") and the mandatory terminal (highest number).
fn scan_waypoints(grid: &LabelGrid) -> Option<(Vec<Option<u32>>, CellCoord, CellCoord)> {
    let mut numbers = Vec::with_capacity(grid.len());
    let mut start = None;
    let mut highest: Option<(u32, CellCoord)> = None;

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let cell = CellCoord::new(row, col);
            let number = grid.get(cell).and_then(Label::as_number);

            if let Some(value) = number {
                if value == 1 {
                    start = Some(cell);
                }
                if highest.is_none_or(|(best, _)| value > best) {
                    highest = Some((value, cell));
                }
            }
            numbers.push(number);
        }
    }

    let Some(start) = start else {
        debug!("no cell labeled 1, nothing to solve");
        return None;
    };
    let (_, terminal) = highest?;
    Some((numbers, start, terminal))
}

/// Backtracking state owned by one search invocation.
struct Search {
    rows: usize,
    cols: usize,
    /// Numeric view of the grid, row-major; `None` for wildcards.
    numbers: Vec<Option<u32>>,
    visited: Vec<bool>,
    path: Vec<CellCoord>,
    total_cells: usize,
    terminal: CellCoord,
}

impl Search {
    #[inline]
    fn index(&self, cell: CellCoord) -> usize {
        cell.row * self.cols + cell.col
    }

    /// One backtracking step at `cell`.
    ///
    /// `expected` is the next required number and `depth` counts the cells
    /// visited including this one. Returns true when a complete path was
    /// found, leaving it in `self.path`; otherwise restores the state and
    /// returns false.
    fn visit(&mut self, cell: CellCoord, expected: u32, depth: usize) -> bool {
        let index = self.index(cell);
        if self.visited[index] {
            return false;
        }
        self.visited[index] = true;
        self.path.push(cell);

        let mut expected = expected;
        if let Some(number) = self.numbers[index] {
            if number != expected {
                return self.backtrack(index);
            }
            expected += 1;
        }

        if depth == self.total_cells {
            // A Hamiltonian-length path only counts when it ends on the
            // highest-numbered cell.
            if cell == self.terminal {
                return true;
            }
            return self.backtrack(index);
        }

        for (d_row, d_col) in NEIGHBOR_STEPS {
            let Some(next) = self.neighbor(cell, d_row, d_col) else {
                continue;
            };
            if !self.admissible(next, expected) {
                continue;
            }
            if self.visit(next, expected, depth + 1) {
                return true;
            }
        }

        self.backtrack(index)
    }

    fn backtrack(&mut self, index: usize) -> bool {
        self.visited[index] = false;
        self.path.pop();
        false
    }

    fn neighbor(&self, cell: CellCoord, d_row: i32, d_col: i32) -> Option<CellCoord> {
        let row = cell.row as i32 + d_row;
        let col = cell.col as i32 + d_col;
        if row < 0 || col < 0 || row >= self.rows as i32 || col >= self.cols as i32 {
            return None;
        }
        Some(CellCoord::new(row as usize, col as usize))
    }

    /// A cell may be stepped into when it is unconstrained or carries
    /// exactly the next required number; the search never looks ahead
    /// past the immediately next waypoint.
    fn admissible(&self, cell: CellCoord, expected: u32) -> bool {
        match self.numbers[self.index(cell)] {
            None => true,
            Some(number) => number == expected,
        }
    }
}
