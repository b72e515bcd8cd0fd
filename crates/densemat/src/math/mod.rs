//! Dense row-major matrix storage and its traversal cursors.
//!
//! `DenseMatrix` owns a single contiguous buffer; `RowMajorCursor` walks that
//! buffer by flat offset and derives `(row, column)` on demand. Row and column
//! insertion/removal live in `editing` and work in place on the buffer.
pub mod cursor;
mod editing;
pub mod matrix;
pub mod point;

pub use cursor::{Cursor, CursorMut, PointIter, RowMajorCursor};
pub use matrix::DenseMatrix;
pub use point::MatrixPoint;
