use std::fmt;

use serde::{Deserialize, Serialize};

/// A `(row, column)` coordinate inside a matrix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatrixPoint {
    pub row: usize,
    pub column: usize,
}

impl MatrixPoint {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Point for a flat offset under row-major layout with `columns` columns.
    ///
    /// A zero-column layout maps every offset to `(0, 0)`.
    pub fn from_offset(offset: usize, columns: usize) -> Self {
        if columns == 0 {
            return Self::default();
        }
        Self {
            row: offset / columns,
            column: offset % columns,
        }
    }

    /// Flat offset of this point in a row-major layout with `columns` columns.
    #[inline]
    pub fn to_offset(&self, columns: usize) -> usize {
        self.row * columns + self.column
    }
}

impl From<(usize, usize)> for MatrixPoint {
    fn from(value: (usize, usize)) -> Self {
        MatrixPoint::new(value.0, value.1)
    }
}

impl From<MatrixPoint> for (usize, usize) {
    fn from(value: MatrixPoint) -> Self {
        (value.row, value.column)
    }
}

impl fmt::Display for MatrixPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
