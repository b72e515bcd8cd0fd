//! Random-access cursors over a matrix's row-major buffer.
//!
//! A cursor is a flat offset plus a borrowed matrix. It never copies data;
//! row and column are derived from the offset on demand. The same type walks
//! forward and backward and supports offset jumps, distance and ordering.
use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Add, AddAssign, Deref, DerefMut, Sub, SubAssign};

use crate::math::matrix::DenseMatrix;
use crate::math::point::MatrixPoint;

/// Cursor bound to `M`, a shared or exclusive borrow of a [`DenseMatrix`].
///
/// A default-constructed cursor is unbound: it can be moved around and
/// compared, but dereferencing it or asking for its coordinates panics.
#[derive(Clone, Copy)]
pub struct RowMajorCursor<M> {
    matrix: Option<M>,
    offset: usize,
}

/// Read-only cursor.
pub type Cursor<'a, T> = RowMajorCursor<&'a DenseMatrix<T>>;

/// Cursor that can write through to the matrix.
pub type CursorMut<'a, T> = RowMajorCursor<&'a mut DenseMatrix<T>>;

impl<M> Default for RowMajorCursor<M> {
    fn default() -> Self {
        Self {
            matrix: None,
            offset: 0,
        }
    }
}

impl<M> RowMajorCursor<M> {
    /// True when the cursor is bound to a matrix.
    pub fn is_valid(&self) -> bool {
        self.matrix.is_some()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn advance(&mut self, n: usize) -> &mut Self {
        self.offset += n;
        self
    }

    pub fn retreat(&mut self, n: usize) -> &mut Self {
        assert!(
            n <= self.offset,
            "cursor retreated before the first element"
        );
        self.offset -= n;
        self
    }

    /// Moves by a signed number of elements.
    pub fn jump(&mut self, delta: isize) -> &mut Self {
        if delta >= 0 {
            self.advance(delta.unsigned_abs())
        } else {
            self.retreat(delta.unsigned_abs())
        }
    }

    /// Signed distance `self - other`, in elements.
    pub fn offset_from<N>(&self, other: &RowMajorCursor<N>) -> isize {
        self.offset as isize - other.offset as isize
    }
}

impl<T, M> RowMajorCursor<M>
where
    M: Deref<Target = DenseMatrix<T>>,
{
    pub fn begin(matrix: M) -> Self {
        Self {
            matrix: Some(matrix),
            offset: 0,
        }
    }

    pub fn end(matrix: M) -> Self {
        let offset = matrix.len();
        Self {
            matrix: Some(matrix),
            offset,
        }
    }

    /// Cursor at `(row, column)`. Not bounds-checked until dereferenced.
    pub fn begin_at(matrix: M, row: usize, column: usize) -> Self {
        let offset = row * matrix.columns() + column;
        Self {
            matrix: Some(matrix),
            offset,
        }
    }

    fn bound(&self) -> &DenseMatrix<T> {
        match self.matrix.as_deref() {
            Some(matrix) => matrix,
            None => panic!("cursor is not bound to a matrix"),
        }
    }

    pub fn row(&self) -> usize {
        self.point().row
    }

    pub fn column(&self) -> usize {
        self.point().column
    }

    pub fn point(&self) -> MatrixPoint {
        MatrixPoint::from_offset(self.offset, self.bound().columns())
    }

    /// True when the cursor is bound and points at an element.
    pub fn is_dereferenceable(&self) -> bool {
        self.matrix
            .as_deref()
            .is_some_and(|matrix| self.offset < matrix.len())
    }

    pub fn get(&self) -> &T {
        let matrix = self.bound();
        assert!(
            self.offset < matrix.len(),
            "cursor offset {} is past the end of a matrix of size {}",
            self.offset,
            matrix.len()
        );
        &matrix.as_slice()[self.offset]
    }
}

impl<T, M> RowMajorCursor<M>
where
    M: DerefMut<Target = DenseMatrix<T>>,
{
    pub fn get_mut(&mut self) -> &mut T {
        let offset = self.offset;
        let matrix = match self.matrix.as_deref_mut() {
            Some(matrix) => matrix,
            None => panic!("cursor is not bound to a matrix"),
        };
        assert!(
            offset < matrix.len(),
            "cursor offset {} is past the end of a matrix of size {}",
            offset,
            matrix.len()
        );
        &mut matrix.as_mut_slice()[offset]
    }
}

impl<'a, T> RowMajorCursor<&'a DenseMatrix<T>> {
    /// Like [`RowMajorCursor::get`], but the reference lives as long as the
    /// matrix borrow rather than the cursor.
    pub fn value(&self) -> &'a T {
        let matrix: &'a DenseMatrix<T> = match self.matrix {
            Some(matrix) => matrix,
            None => panic!("cursor is not bound to a matrix"),
        };
        assert!(
            self.offset < matrix.len(),
            "cursor offset {} is past the end of a matrix of size {}",
            self.offset,
            matrix.len()
        );
        &matrix.as_slice()[self.offset]
    }
}

impl<T, M> Deref for RowMajorCursor<M>
where
    M: Deref<Target = DenseMatrix<T>>,
{
    type Target = T;

    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T, M> DerefMut for RowMajorCursor<M>
where
    M: DerefMut<Target = DenseMatrix<T>>,
{
    fn deref_mut(&mut self) -> &mut T {
        self.get_mut()
    }
}

impl<M> fmt::Debug for RowMajorCursor<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowMajorCursor")
            .field("bound", &self.is_valid())
            .field("offset", &self.offset)
            .finish()
    }
}

impl<M, N> PartialEq<RowMajorCursor<N>> for RowMajorCursor<M> {
    fn eq(&self, other: &RowMajorCursor<N>) -> bool {
        self.offset_from(other) == 0
    }
}

impl<M> Eq for RowMajorCursor<M> {}

impl<M, N> PartialOrd<RowMajorCursor<N>> for RowMajorCursor<M> {
    fn partial_cmp(&self, other: &RowMajorCursor<N>) -> Option<Ordering> {
        Some(self.offset_from(other).cmp(&0))
    }
}

impl<M> Ord for RowMajorCursor<M> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.offset_from(other).cmp(&0)
    }
}

impl<M> AddAssign<usize> for RowMajorCursor<M> {
    fn add_assign(&mut self, n: usize) {
        self.advance(n);
    }
}

impl<M> SubAssign<usize> for RowMajorCursor<M> {
    fn sub_assign(&mut self, n: usize) {
        self.retreat(n);
    }
}

impl<M> Add<usize> for RowMajorCursor<M> {
    type Output = Self;

    fn add(mut self, n: usize) -> Self {
        self.advance(n);
        self
    }
}

impl<M> Sub<usize> for RowMajorCursor<M> {
    type Output = Self;

    fn sub(mut self, n: usize) -> Self {
        self.retreat(n);
        self
    }
}

/// Iterator over `(MatrixPoint, &T)` pairs between two read cursors.
pub struct PointIter<'a, T> {
    front: Cursor<'a, T>,
    back: Cursor<'a, T>,
}

impl<'a, T> Clone for PointIter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T> fmt::Debug for PointIter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointIter")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

impl<'a, T> PointIter<'a, T> {
    pub fn new(front: Cursor<'a, T>, back: Cursor<'a, T>) -> Self {
        Self { front, back }
    }
}

impl<'a, T> Iterator for PointIter<'a, T> {
    type Item = (MatrixPoint, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = (self.front.point(), self.front.value());
        self.front.advance(1);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.offset_from(&self.front).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for PointIter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back.retreat(1);
        Some((self.back.point(), self.back.value()))
    }
}

impl<'a, T> ExactSizeIterator for PointIter<'a, T> {}

impl<'a, T> FusedIterator for PointIter<'a, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting(rows: usize, columns: usize) -> DenseMatrix<usize> {
        DenseMatrix::with_values(rows, columns, 0..rows * columns, 0)
    }

    #[test]
    fn unbound_cursor_is_invalid() {
        let cursor: Cursor<'_, i32> = RowMajorCursor::default();
        assert!(!cursor.is_valid());
        assert!(!cursor.is_dereferenceable());
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn jump_moves_both_ways() {
        let m = counting(3, 4);
        let mut cursor = m.begin();
        cursor.jump(7);
        assert_eq!(cursor.point(), MatrixPoint::new(1, 3));
        cursor.jump(-5);
        assert_eq!(cursor.point(), MatrixPoint::new(0, 2));
        assert_eq!(*cursor, 2);
    }

    #[test]
    fn offset_from_is_signed() {
        let m = counting(2, 2);
        let a = m.begin() + 1;
        let b = m.end();
        assert_eq!(b.offset_from(&a), 3);
        assert_eq!(a.offset_from(&b), -3);
        assert!(a < b);
        assert!(b > a);
        assert!(a != b);
    }

    #[test]
    fn zero_columns_report_origin() {
        let m: DenseMatrix<u8> = DenseMatrix::with_shape(4, 0);
        let cursor = m.begin() + 3;
        assert_eq!(cursor.row(), 0);
        assert_eq!(cursor.column(), 0);
    }

    #[test]
    fn cursor_mut_writes_through() {
        let mut m = counting(2, 3);
        {
            let mut cursor = m.begin_at_mut((1, 1));
            *cursor = 40;
            cursor.retreat(1);
            *cursor.get_mut() += 30;
        }
        assert_eq!(m.as_slice(), &[0, 1, 2, 33, 40, 5]);
    }

    #[test]
    fn point_iter_meets_in_the_middle() {
        let m = counting(2, 2);
        let mut iter = m.indexed_iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some((MatrixPoint::new(0, 0), &0)));
        assert_eq!(iter.next_back(), Some((MatrixPoint::new(1, 1), &3)));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next(), Some((MatrixPoint::new(0, 1), &1)));
        assert_eq!(iter.next_back(), Some((MatrixPoint::new(1, 0), &2)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn point_iter_clones_without_clone_elements() {
        struct Opaque(u32);

        let m = DenseMatrix::from_shape_vec((1, 3), (0..3).map(Opaque).collect()).unwrap();
        let mut iter = m.indexed_iter();
        iter.next();
        let rest = iter.clone();
        assert_eq!(iter.map(|(_, v)| v.0).sum::<u32>(), 3);
        assert_eq!(rest.len(), 2);
        assert_eq!(rest.map(|(p, _)| p.column).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    #[should_panic(expected = "before the first element")]
    fn retreat_past_start_panics() {
        let m = counting(1, 1);
        let mut cursor = m.begin();
        cursor.retreat(1);
    }
}
