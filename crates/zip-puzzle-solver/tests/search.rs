use zip_puzzle_core::{CellCoord, Label, LabelGrid};
use zip_puzzle_solver::find_path;

/// 5x5 puzzle with waypoints reachable by a boustrophedon walk.
fn waypoint_grid() -> LabelGrid {
    "1 | * | * | * | 2\n\
     * | * | * | * | *\n\
     3 | * | * | * | *\n\
     * | * | * | * | *\n\
     * | * | * | * | 4"
        .parse()
        .expect("valid grid")
}

fn assert_path_invariants(grid: &LabelGrid, path: &[CellCoord]) {
    assert_eq!(grid.len(), path.len());

    let mut seen = vec![false; grid.len()];
    for cell in path {
        let index = cell.row * grid.cols() + cell.col;
        assert!(!seen[index], "cell {cell:?} visited twice");
        seen[index] = true;
    }

    for pair in path.windows(2) {
        let step = pair[0].row.abs_diff(pair[1].row) + pair[0].col.abs_diff(pair[1].col);
        assert_eq!(1, step, "consecutive cells must be 4-adjacent: {pair:?}");
    }

    let numbers: Vec<u32> = path
        .iter()
        .filter_map(|&cell| grid.get(cell).and_then(Label::as_number))
        .collect();
    assert_eq!(1, numbers[0]);
    assert!(numbers.windows(2).all(|pair| pair[1] == pair[0] + 1));
}

#[test]
fn solves_a_5x5_puzzle_and_honors_every_invariant() {
    let grid = waypoint_grid();
    let path = find_path(&grid).expect("puzzle is solvable");

    assert_path_invariants(&grid, &path);
    assert_eq!(
        Some(&Label::Digits("4".into())),
        grid.get(*path.last().expect("non-empty"))
    );
}

#[test]
fn identical_grids_yield_identical_paths() {
    let first = find_path(&waypoint_grid()).expect("solvable");
    let second = find_path(&waypoint_grid()).expect("solvable");
    assert_eq!(first, second);
}

#[test]
fn densely_numbered_puzzle_is_solved_in_order() {
    let grid: LabelGrid = "1 | * | 2\n\
                           * | * | *\n\
                           4 | * | 3"
        .parse()
        .expect("valid grid");

    let path = find_path(&grid).expect("solvable");
    assert_path_invariants(&grid, &path);
    assert_eq!(CellCoord::new(2, 0), *path.last().expect("non-empty"));
}

#[test]
fn lone_start_in_a_larger_grid_cannot_terminate() {
    // "1" is both start and highest number, so the path would have to end
    // where it began; impossible once there is more than one cell.
    let grid: LabelGrid = "1 | * | *".parse().expect("valid grid");
    assert_eq!(None, find_path(&grid));
}
