//! Row and column insertion/removal, done in place on the row-major buffer.
//!
//! Row edits are contiguous range edits because rows are already packed.
//! Column edits have to re-pack every row: removal compacts left-to-right,
//! insertion expands right-to-left, and both move each surviving element at
//! most once.
use std::iter;

use crate::error::{Axis, MatrixError};
use crate::math::matrix::DenseMatrix;

fn check_removal(axis: Axis, start: usize, count: usize, len: usize) -> Result<(), MatrixError> {
    match start.checked_add(count) {
        Some(end) if end <= len => Ok(()),
        _ => Err(MatrixError::RangeOutOfBounds {
            axis,
            start,
            count,
            len,
        }),
    }
}

fn check_insertion(axis: Axis, start: usize, count: usize, len: usize) -> Result<(), MatrixError> {
    if start > len {
        return Err(MatrixError::RangeOutOfBounds {
            axis,
            start,
            count,
            len,
        });
    }
    Ok(())
}

impl<T> DenseMatrix<T> {
    /// Removes `count` rows starting at `start`.
    ///
    /// Removing every row resets the matrix to `(0, 0)`.
    pub fn remove_rows(&mut self, start: usize, count: usize) -> Result<(), MatrixError> {
        check_removal(Axis::Row, start, count, self.rows)?;
        if count >= self.rows {
            log::debug!("remove_rows: removing all {} rows, resetting", self.rows);
            self.reset();
            return Ok(());
        }
        if count == 0 {
            return Ok(());
        }

        let begin = start * self.columns;
        self.data.drain(begin..begin + count * self.columns);
        log::trace!(
            "remove_rows: ({}, {}) -> ({}, {})",
            self.rows,
            self.columns,
            self.rows - count,
            self.columns
        );
        self.rows -= count;
        Ok(())
    }

    pub fn remove_row(&mut self, row: usize) -> Result<(), MatrixError> {
        self.remove_rows(row, 1)
    }

    /// Removes `count` columns starting at `start`.
    ///
    /// Removing every column resets the matrix to `(0, 0)` rather than
    /// leaving a `(rows, 0)` shape.
    pub fn remove_columns(&mut self, start: usize, count: usize) -> Result<(), MatrixError> {
        check_removal(Axis::Column, start, count, self.columns)?;
        if count >= self.columns {
            log::debug!(
                "remove_columns: removing all {} columns, resetting",
                self.columns
            );
            self.reset();
            return Ok(());
        }
        if count == 0 {
            return Ok(());
        }

        let old_columns = self.columns;
        let new_columns = old_columns - count;
        let new_len = self.rows * new_columns;

        // Source offsets grow strictly with the destination and never fall
        // behind it, so each source slot is read before anything lands on it.
        // Slots left of `start` in row 0 are already in place.
        for dst in start..new_len {
            let row = dst / new_columns;
            let column = dst % new_columns;
            let src = if column < start {
                row * old_columns + column
            } else {
                row * old_columns + column + count
            };
            if src != dst {
                self.data.swap(dst, src);
            }
        }
        self.data.truncate(new_len);

        log::trace!(
            "remove_columns: ({}, {}) -> ({}, {})",
            self.rows,
            old_columns,
            self.rows,
            new_columns
        );
        self.columns = new_columns;
        Ok(())
    }

    pub fn remove_column(&mut self, column: usize) -> Result<(), MatrixError> {
        self.remove_columns(column, 1)
    }
}

impl<T: Clone> DenseMatrix<T> {
    /// Inserts `count` rows of `value` so that the first new row has index
    /// `start`. `start == rows` appends.
    pub fn insert_rows(&mut self, start: usize, count: usize, value: T) -> Result<(), MatrixError> {
        check_insertion(Axis::Row, start, count, self.rows)?;
        if count == 0 {
            return Ok(());
        }

        let at = start * self.columns;
        self.data
            .splice(at..at, iter::repeat(value).take(count * self.columns));
        log::trace!(
            "insert_rows: ({}, {}) -> ({}, {})",
            self.rows,
            self.columns,
            self.rows + count,
            self.columns
        );
        self.rows += count;
        Ok(())
    }

    pub fn insert_row(&mut self, row: usize, value: T) -> Result<(), MatrixError> {
        self.insert_rows(row, 1, value)
    }

    /// Inserts `count` columns of `value` so that the first new column has
    /// index `start`. `start == columns` appends.
    pub fn insert_columns(
        &mut self,
        start: usize,
        count: usize,
        value: T,
    ) -> Result<(), MatrixError> {
        check_insertion(Axis::Column, start, count, self.columns)?;
        if count == 0 {
            return Ok(());
        }

        let old_columns = self.columns;
        let new_columns = old_columns + count;
        let new_len = self.rows * new_columns;
        self.data.resize(new_len, value.clone());

        // Mirror of the removal walk: sources shrink strictly with the
        // destination and never pass it.
        for dst in (start..new_len).rev() {
            let row = dst / new_columns;
            let column = dst % new_columns;
            if column >= start && column < start + count {
                self.data[dst] = value.clone();
                continue;
            }
            let src = if column < start {
                row * old_columns + column
            } else {
                row * old_columns + column - count
            };
            if src != dst {
                self.data.swap(dst, src);
            }
        }

        log::trace!(
            "insert_columns: ({}, {}) -> ({}, {})",
            self.rows,
            old_columns,
            self.rows,
            new_columns
        );
        self.columns = new_columns;
        Ok(())
    }

    pub fn insert_column(&mut self, column: usize, value: T) -> Result<(), MatrixError> {
        self.insert_columns(column, 1, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_by_three() -> DenseMatrix<i32> {
        DenseMatrix::from_shape_vec((3, 3), (0..9).collect()).unwrap()
    }

    #[test]
    fn remove_middle_column() {
        let mut m = three_by_three();
        m.remove_column(1).unwrap();
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m.as_slice(), &[0, 2, 3, 5, 6, 8]);
    }

    #[test]
    fn remove_leading_and_trailing_columns() {
        let mut m = DenseMatrix::from_shape_vec((2, 4), (0..8).collect::<Vec<i32>>()).unwrap();
        m.remove_columns(0, 2).unwrap();
        assert_eq!(m.as_slice(), &[2, 3, 6, 7]);

        let mut m = DenseMatrix::from_shape_vec((2, 4), (0..8).collect::<Vec<i32>>()).unwrap();
        m.remove_columns(2, 2).unwrap();
        assert_eq!(m.as_slice(), &[0, 1, 4, 5]);
    }

    #[test]
    fn remove_all_columns_resets() {
        let mut m = three_by_three();
        m.remove_columns(0, 3).unwrap();
        assert_eq!(m.shape(), (0, 0));
        assert!(m.is_empty());
    }

    #[test]
    fn remove_columns_rejects_overrun() {
        let mut m = three_by_three();
        let err = m.remove_columns(2, 2).unwrap_err();
        assert_eq!(
            err,
            MatrixError::RangeOutOfBounds {
                axis: Axis::Column,
                start: 2,
                count: 2,
                len: 3
            }
        );
        assert_eq!(m, three_by_three());
        assert!(m.remove_columns(usize::MAX, 2).is_err());
    }

    #[test]
    fn remove_zero_columns_is_noop() {
        let mut m = three_by_three();
        m.remove_columns(1, 0).unwrap();
        assert_eq!(m, three_by_three());
    }

    #[test]
    fn remove_middle_row() {
        let mut m = three_by_three();
        m.remove_row(1).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.as_slice(), &[0, 1, 2, 6, 7, 8]);
    }

    #[test]
    fn remove_all_rows_resets() {
        let mut m = three_by_three();
        m.remove_rows(0, 3).unwrap();
        assert_eq!(m.shape(), (0, 0));
        assert!(m.remove_row(0).is_err());
    }

    #[test]
    fn insert_middle_column() {
        let mut m = DenseMatrix::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
        m.insert_columns(1, 2, 0).unwrap();
        assert_eq!(m.shape(), (2, 4));
        assert_eq!(m.as_slice(), &[1, 0, 0, 2, 3, 0, 0, 4]);
    }

    #[test]
    fn insert_columns_at_edges() {
        let mut m = DenseMatrix::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
        m.insert_column(0, 9).unwrap();
        assert_eq!(m.as_slice(), &[9, 1, 2, 9, 3, 4]);
        m.insert_column(3, 7).unwrap();
        assert_eq!(m.as_slice(), &[9, 1, 2, 7, 9, 3, 4, 7]);
        assert!(m.insert_column(5, 0).is_err());
    }

    #[test]
    fn insert_rows_then_remove_restores() {
        let mut m = three_by_three();
        m.insert_rows(1, 2, -1).unwrap();
        assert_eq!(m.shape(), (5, 3));
        assert_eq!(m.row_slice(1), &[-1, -1, -1]);
        assert_eq!(m.row_slice(3), &[3, 4, 5]);
        m.remove_rows(1, 2).unwrap();
        assert_eq!(m, three_by_three());
    }
}
