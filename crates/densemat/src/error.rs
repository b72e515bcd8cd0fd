use std::error::Error;
use std::fmt;

/// Which dimension a row/column range refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Precondition failures reported by `DenseMatrix`.
///
/// All variants are recoverable: the matrix is left untouched when one of
/// them is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Flat index at or past the end of the buffer.
    IndexOutOfRange { index: usize, len: usize },
    /// `(row, column)` outside the current shape.
    PointOutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
    /// `start + count` runs past the dimension (or `start` is past it, for insertion).
    RangeOutOfBounds {
        axis: Axis,
        start: usize,
        count: usize,
        len: usize,
    },
    /// Buffer length does not equal `rows * columns`.
    ShapeMismatch { rows: usize, columns: usize, len: usize },
}

impl MatrixError {
    pub fn is_out_of_range(&self) -> bool {
        !matches!(self, MatrixError::ShapeMismatch { .. })
    }
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::IndexOutOfRange { index, len } => {
                write!(f, "flat index {} out of range for matrix of size {}", index, len)
            }
            MatrixError::PointOutOfRange {
                row,
                column,
                rows,
                columns,
            } => write!(
                f,
                "point ({}, {}) out of range for matrix of shape ({}, {})",
                row, column, rows, columns
            ),
            MatrixError::RangeOutOfBounds {
                axis,
                start,
                count,
                len,
            } => write!(
                f,
                "{} range starting at {} with count {} exceeds {} {}s",
                axis, start, count, len, axis
            ),
            MatrixError::ShapeMismatch { rows, columns, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, columns, len
            ),
        }
    }
}

impl Error for MatrixError {}
