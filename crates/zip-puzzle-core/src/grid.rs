use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Content of one grid cell after recognition.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Label {
    /// No digits recognized; freely traversable at any point of the path.
    Wildcard,
    /// Raw recognized digit string, kept as-is (leading zeros included).
    Digits(String),
}

impl Label {
    /// Build a label from raw recognizer output.
    ///
    /// Non-digit characters are stripped; a digit-free remainder becomes
    /// the wildcard. No numeric range validation happens here.
    pub fn from_recognized(text: &str) -> Self {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            Label::Wildcard
        } else {
            Label::Digits(digits)
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Label::Wildcard)
    }

    /// Numeric value of the label, if any.
    ///
    /// A digit string too long for `u32` yields `None`; such a cell
    /// behaves as unconstrained.
    pub fn as_number(&self) -> Option<u32> {
        match self {
            Label::Wildcard => None,
            Label::Digits(digits) => digits.parse().ok(),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Wildcard => f.write_str("*"),
            Label::Digits(digits) => f.write_str(digits),
        }
    }
}

/// Integer cell coordinates `(row, col)` in the label grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CellCoord {
    pub row: usize,
    pub col: usize,
}

impl CellCoord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Row-major grid of cell labels.
///
/// Dimensions are fixed at construction and never change afterwards.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct LabelGrid {
    rows: usize,
    cols: usize,
    labels: Vec<Label>,
}

impl LabelGrid {
    /// Build a grid by evaluating `fill` for every cell in row-major order.
    pub fn from_fn(rows: usize, cols: usize, mut fill: impl FnMut(CellCoord) -> Label) -> Self {
        let mut labels = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                labels.push(fill(CellCoord::new(row, col)));
            }
        }
        Self { rows, cols, labels }
    }

    /// Build a grid from a row-major label list.
    ///
    /// `None` when the list length does not match `rows * cols`.
    pub fn from_labels(rows: usize, cols: usize, labels: Vec<Label>) -> Option<Self> {
        if labels.len() != rows * cols {
            return None;
        }
        Some(Self { rows, cols, labels })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, cell: CellCoord) -> Option<&Label> {
        if cell.row >= self.rows || cell.col >= self.cols {
            return None;
        }
        self.labels.get(cell.row * self.cols + cell.col)
    }

    /// Iterate over the rows as label slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Label]> {
        self.labels.chunks(self.cols.max(1))
    }
}

/// Errors produced when parsing a textual grid.
#[derive(thiserror::Error, Debug)]
pub enum ParseGridError {
    #[error("grid text contains no rows")]
    Empty,

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid cell token {token:?} (expected \"*\" or digits)")]
    InvalidToken { token: String },
}

/// Parse a textual grid: one row per line, cells separated by `|` or by
/// whitespace, each cell either `*` or a digit string.
impl FromStr for LabelGrid {
    type Err = ParseGridError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<Label>> = Vec::new();

        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let tokens: Vec<&str> = if line.contains('|') {
                line.split('|').map(str::trim).collect()
            } else {
                line.split_whitespace().collect()
            };

            let mut row = Vec::with_capacity(tokens.len());
            for token in tokens {
                row.push(parse_token(token)?);
            }

            if let Some(first) = rows.first() {
                if row.len() != first.len() {
                    return Err(ParseGridError::RaggedRow {
                        row: rows.len(),
                        expected: first.len(),
                        got: row.len(),
                    });
                }
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(ParseGridError::Empty);
        }

        let num_rows = rows.len();
        let num_cols = rows[0].len();
        let labels: Vec<Label> = rows.into_iter().flatten().collect();
        Ok(Self {
            rows: num_rows,
            cols: num_cols,
            labels,
        })
    }
}

fn parse_token(token: &str) -> Result<Label, ParseGridError> {
    if token == "*" {
        return Ok(Label::Wildcard);
    }
    if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
        return Ok(Label::Digits(token.to_string()));
    }
    Err(ParseGridError::InvalidToken {
        token: token.to_string(),
    })
}
