//! Order-constrained Hamiltonian path search over a label grid.
//!
//! Given a grid of wildcard and numbered cells, finds a path that visits
//! every cell exactly once, passes through the numbered cells in strictly
//! increasing order starting at "1", and ends on the highest number.
//!
//! ## Quickstart
//!
//! ```
//! use zip_puzzle_core::LabelGrid;
//! use zip_puzzle_solver::find_path;
//!
//! let grid: LabelGrid = "1 | * | 2".parse().unwrap();
//! let path = find_path(&grid).expect("solvable");
//! assert_eq!(3, path.len());
//! ```

mod solver;

pub use solver::find_path;
