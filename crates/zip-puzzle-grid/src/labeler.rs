use log::debug;
use zip_puzzle_core::{CellOcr, CellRect, GrayImageView, Label, LabelGrid};

/// Label every cell region through the OCR capability.
///
/// Cells are visited in row-major order; each recognized string is reduced
/// to its digits, with a digit-free result becoming the wildcard. When
/// fewer cell regions than `rows * cols` are supplied (a geometry/detector
/// mismatch) the remaining grid positions stay wildcards, so a partially
/// detected grid still reaches the solver instead of failing outright.
pub fn label_cells<O: CellOcr + ?Sized>(
    image: &GrayImageView<'_>,
    cells: &[CellRect],
    rows: usize,
    cols: usize,
    ocr: &mut O,
) -> LabelGrid {
    if cells.len() < rows * cols {
        debug!(
            "{} cell regions for {} grid positions, padding with wildcards",
            cells.len(),
            rows * cols
        );
    }

    LabelGrid::from_fn(rows, cols, |cell| {
        let index = cell.row * cols + cell.col;
        match cells.get(index) {
            Some(rect) => {
                let region = image.crop(*rect);
                Label::from_recognized(&ocr.recognize(&region.as_view()))
            }
            None => Label::Wildcard,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use zip_puzzle_core::{CellCoord, GrayImage};

    /// Hands out preset strings in call order.
    struct ScriptedOcr {
        responses: Vec<&'static str>,
        calls: usize,
    }

    impl ScriptedOcr {
        fn new(responses: Vec<&'static str>) -> Self {
            Self {
                responses,
                calls: 0,
            }
        }
    }

    impl CellOcr for ScriptedOcr {
        fn recognize(&mut self, _cell: &GrayImageView<'_>) -> String {
            let response = self.responses.get(self.calls).copied().unwrap_or("");
            self.calls += 1;
            response.to_string()
        }
    }

    fn test_image() -> GrayImage {
        GrayImage {
            width: 20,
            height: 20,
            data: vec![0; 400],
        }
    }

    fn cell_grid(rows: i32, cols: i32, size: i32) -> Vec<CellRect> {
        let mut cells = Vec::new();
        for row in 0..rows {
            for col in 0..cols {
                cells.push(CellRect {
                    x0: col * size,
                    y0: row * size,
                    x1: (col + 1) * size,
                    y1: (row + 1) * size,
                });
            }
        }
        cells
    }

    #[test]
    fn labels_cells_in_row_major_order() {
        let image = test_image();
        let mut ocr = ScriptedOcr::new(vec!["1", "", " 2\n", "junk"]);

        let grid = label_cells(&image.as_view(), &cell_grid(2, 2, 10), 2, 2, &mut ocr);

        assert_eq!(4, ocr.calls);
        assert_eq!(
            Some(&Label::Digits("1".into())),
            grid.get(CellCoord::new(0, 0))
        );
        assert_eq!(Some(&Label::Wildcard), grid.get(CellCoord::new(0, 1)));
        assert_eq!(
            Some(&Label::Digits("2".into())),
            grid.get(CellCoord::new(1, 0))
        );
        assert_eq!(Some(&Label::Wildcard), grid.get(CellCoord::new(1, 1)));
    }

    #[test]
    fn missing_cell_regions_are_padded_with_wildcards() {
        let image = test_image();
        let mut ocr = ScriptedOcr::new(vec!["1", "2"]);

        // Only two regions for a 2x2 grid.
        let grid = label_cells(&image.as_view(), &cell_grid(1, 2, 10), 2, 2, &mut ocr);

        assert_eq!(2, grid.rows());
        assert_eq!(2, grid.cols());
        assert_eq!(2, ocr.calls, "OCR runs only for existing regions");
        assert_eq!(
            Some(&Label::Digits("1".into())),
            grid.get(CellCoord::new(0, 0))
        );
        assert_eq!(Some(&Label::Wildcard), grid.get(CellCoord::new(1, 0)));
        assert_eq!(Some(&Label::Wildcard), grid.get(CellCoord::new(1, 1)));
    }

    #[test]
    fn zero_dimension_grid_is_empty() {
        let image = test_image();
        let mut ocr = ScriptedOcr::new(vec![]);

        let grid = label_cells(&image.as_view(), &[], 0, 0, &mut ocr);
        assert!(grid.is_empty());
    }
}
