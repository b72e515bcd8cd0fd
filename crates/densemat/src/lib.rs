//! densemat: dense two-dimensional containers over row-major storage.
//!
//! The crate provides `DenseMatrix<T>`, a matrix that owns one contiguous
//! buffer, random-access cursors that map flat offsets to coordinates without
//! copying data, and in-place structural edits (resize, row/column insertion
//! and removal) that keep the buffer row-major packed.
//!
//! Construction recipes can be described with `config::MatrixConfig` and
//! loaded from JSON.
pub mod config;
pub mod error;
pub mod math;

pub use error::{Axis, MatrixError};
pub use math::{Cursor, CursorMut, DenseMatrix, MatrixPoint, RowMajorCursor};
