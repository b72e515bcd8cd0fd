use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use num_traits::{One, Zero};

use crate::error::MatrixError;
use crate::math::cursor::{Cursor, CursorMut, PointIter, RowMajorCursor};
use crate::math::point::MatrixPoint;

/// Dense two-dimensional container over a single row-major buffer.
///
/// The buffer always holds exactly `rows * columns` elements and the element
/// at `(r, c)` lives at flat offset `r * columns + c`. A matrix may carry a
/// shape with a zero dimension (e.g. `(3, 0)`); [`DenseMatrix::reset`] is the
/// only way back to the `(0, 0)` shape apart from full row/column removal.
///
/// Structural mutations (`resize`, `reset`, row/column insertion and removal)
/// change what every flat offset means. Cursors borrow the matrix, so the
/// borrow checker already forbids holding one across such a call.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DenseMatrix<T> {
    pub(super) data: Vec<T>,
    pub(super) rows: usize,
    pub(super) columns: usize,
}

impl<T> Default for DenseMatrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DenseMatrix<T> {
    /// Empty `(0, 0)` matrix.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            columns: 0,
        }
    }

    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, MatrixError> {
        let (rows, columns) = shape;
        if data.len() != rows * columns {
            return Err(MatrixError::ShapeMismatch {
                rows,
                columns,
                len: data.len(),
            });
        }
        Ok(Self {
            data,
            rows,
            columns,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Number of stored elements, `rows * columns`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.columns && self.columns != 0
    }

    pub fn is_column_vector(&self) -> bool {
        self.columns == 1 && self.rows > 0
    }

    pub fn is_row_vector(&self) -> bool {
        self.rows == 1 && self.columns > 0
    }

    pub fn is_vector(&self) -> bool {
        self.is_column_vector() || self.is_row_vector()
    }

    fn point_offset(&self, point: MatrixPoint) -> Result<usize, MatrixError> {
        if point.row >= self.rows || point.column >= self.columns {
            return Err(MatrixError::PointOutOfRange {
                row: point.row,
                column: point.column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(point.to_offset(self.columns))
    }

    fn flat_offset(&self, index: usize) -> Result<usize, MatrixError> {
        if index >= self.data.len() {
            return Err(MatrixError::IndexOutOfRange {
                index,
                len: self.data.len(),
            });
        }
        Ok(index)
    }

    /// Element at `point`, or `PointOutOfRange` when either coordinate is past
    /// the current shape.
    pub fn at<P: Into<MatrixPoint>>(&self, point: P) -> Result<&T, MatrixError> {
        let offset = self.point_offset(point.into())?;
        Ok(&self.data[offset])
    }

    pub fn at_mut<P: Into<MatrixPoint>>(&mut self, point: P) -> Result<&mut T, MatrixError> {
        let offset = self.point_offset(point.into())?;
        Ok(&mut self.data[offset])
    }

    pub fn at_flat(&self, index: usize) -> Result<&T, MatrixError> {
        let offset = self.flat_offset(index)?;
        Ok(&self.data[offset])
    }

    pub fn at_flat_mut(&mut self, index: usize) -> Result<&mut T, MatrixError> {
        let offset = self.flat_offset(index)?;
        Ok(&mut self.data[offset])
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "row index out of bounds");
        let start = row * self.columns;
        &self.data[start..start + self.columns]
    }

    pub fn row_slice_mut(&mut self, row: usize) -> &mut [T] {
        assert!(row < self.rows, "row index out of bounds");
        let start = row * self.columns;
        &mut self.data[start..start + self.columns]
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Row-major iteration yielding each element with its coordinates.
    pub fn indexed_iter(&self) -> PointIter<'_, T> {
        PointIter::new(self.begin(), self.end())
    }

    pub fn begin(&self) -> Cursor<'_, T> {
        RowMajorCursor::begin(self)
    }

    pub fn end(&self) -> Cursor<'_, T> {
        RowMajorCursor::end(self)
    }

    pub fn begin_at<P: Into<MatrixPoint>>(&self, point: P) -> Cursor<'_, T> {
        let point = point.into();
        RowMajorCursor::begin_at(self, point.row, point.column)
    }

    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        RowMajorCursor::begin(self)
    }

    pub fn begin_at_mut<P: Into<MatrixPoint>>(&mut self, point: P) -> CursorMut<'_, T> {
        let point = point.into();
        RowMajorCursor::begin_at(self, point.row, point.column)
    }

    pub fn mapv<U, F>(&self, mut f: F) -> DenseMatrix<U>
    where
        F: FnMut(&T) -> U,
    {
        DenseMatrix {
            data: self.data.iter().map(|v| f(v)).collect(),
            rows: self.rows,
            columns: self.columns,
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Drops every element and forces the shape to `(0, 0)`.
    pub fn reset(&mut self) {
        log::trace!("reset: ({}, {}) -> (0, 0)", self.rows, self.columns);
        self.data.clear();
        self.rows = 0;
        self.columns = 0;
    }
}

impl<T: Clone> DenseMatrix<T> {
    /// `rows x columns` matrix with every element set to `value`.
    pub fn from_elem(rows: usize, columns: usize, value: T) -> Self {
        Self {
            data: vec![value; rows * columns],
            rows,
            columns,
        }
    }

    /// Matrix seeded from `init` in row-major order.
    ///
    /// `init` is padded with `fill` or truncated to `rows * columns`; its
    /// length is not checked against the shape.
    pub fn with_values<I>(rows: usize, columns: usize, init: I, fill: T) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut data: Vec<T> = init.into_iter().collect();
        data.resize(rows * columns, fill);
        Self {
            data,
            rows,
            columns,
        }
    }

    /// Flat resize: values keep their flat offsets up to the smaller of the
    /// two sizes and new slots receive `value`. This does not remap rows and
    /// columns, so 2-D positions shift whenever the column count changes.
    pub fn resize(&mut self, rows: usize, columns: usize, value: T) {
        log::trace!(
            "resize: ({}, {}) -> ({}, {})",
            self.rows,
            self.columns,
            rows,
            columns
        );
        self.data.resize(rows * columns, value);
        self.rows = rows;
        self.columns = columns;
    }

    /// Overwrites every element with `value`; the shape is unchanged.
    pub fn fill(&mut self, value: T) {
        let len = self.data.len();
        self.data.clear();
        self.data.resize(len, value);
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }
}

impl<T: Clone + Default> DenseMatrix<T> {
    /// `rows x columns` matrix of `T::default()`.
    pub fn with_shape(rows: usize, columns: usize) -> Self {
        Self::from_elem(rows, columns, T::default())
    }

    pub fn resize_default(&mut self, rows: usize, columns: usize) {
        self.resize(rows, columns, T::default());
    }

    /// Sets every element back to `T::default()`.
    pub fn clear(&mut self) {
        self.fill(T::default());
    }
}

impl<T: Clone + Zero> DenseMatrix<T> {
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self::from_elem(rows, columns, T::zero())
    }
}

impl<T: Clone + One> DenseMatrix<T> {
    pub fn ones(rows: usize, columns: usize) -> Self {
        Self::from_elem(rows, columns, T::one())
    }
}

impl<T> Index<usize> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.at_flat(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for DenseMatrix<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.flat_offset(index) {
            Ok(offset) => &mut self.data[offset],
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> Index<MatrixPoint> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, point: MatrixPoint) -> &Self::Output {
        match self.at(point) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<MatrixPoint> for DenseMatrix<T> {
    fn index_mut(&mut self, point: MatrixPoint) -> &mut Self::Output {
        match self.point_offset(point) {
            Ok(offset) => &mut self.data[offset],
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self[MatrixPoint::from(index)]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self[MatrixPoint::from(index)]
    }
}

impl<T: fmt::Display> fmt::Display for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for row in 0..self.rows {
            write!(f, "[")?;
            for (idx, value) in self.row_slice(row).iter().enumerate() {
                write!(f, "{}", value)?;
                if idx + 1 != self.columns {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
            if row + 1 != self.rows {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
