/*!
 * Row and column views into a matrix.
 *
 * A [Matrix] can be looked at as a collection of rows or as a collection of columns. Each of
 * these views comes in a read only and a mutable flavour, giving four kinds of collection, and
 * each collection hands out the matching kind of line, each of which hands out the matching
 * kind of element iterator:
 *
 * | collection | line | element iterator | collection iterator |
 * |---|---|---|---|
 * | [MatrixRows] | [MatrixRow] | [RowIterator] | [RowsIterator] |
 * | [MatrixRowsMut] | [MatrixRowMut] | [RowIteratorMut] | [RowsIteratorMut] |
 * | [MatrixColumns] | [MatrixColumn] | [ColumnIterator] | [ColumnsIterator] |
 * | [MatrixColumnsMut] | [MatrixColumnMut] | [ColumnIteratorMut] | [ColumnsIteratorMut] |
 *
 * None of these types own or copy any elements. Each is one generic type instantiated four
 * times over two descriptors: an [Axis] marker ([RowAxis] or [ColumnAxis]) that supplies the
 * indexing arithmetic, and a source that is either a `&Matrix<T>` or a `&mut Matrix<T>`
 * (described by [MatrixRef] and [MatrixMut]) that decides whether elements can be written.
 *
 * Every mutable type converts into its read only counterpart with [From] (or borrows one with
 * `as_const`), but never the other way around:
 *
 * ```compile_fail
 * use matrix_lines::matrices::Matrix;
 * use matrix_lines::matrices::views::{MatrixRow, MatrixRowMut};
 * let mut matrix = Matrix::new(2, 2, 0);
 * let row: MatrixRow<i32> = matrix.row(0);
 * // there is no way back from a read only row to a mutable one
 * let row: MatrixRowMut<i32> = MatrixRowMut::from(row);
 * ```
 *
 * ```
 * use matrix_lines::matrices::Matrix;
 * use matrix_lines::matrices::views::MatrixRow;
 * let mut matrix = Matrix::new(2, 2, 0);
 * let mut row = matrix.row_mut(1);
 * row[0] = 5;
 * let row = MatrixRow::from(row);
 * assert_eq!(row.get(0), &5);
 * ```
 */

use std::fmt;

use sealed::sealed;

use crate::matrices::contracts::assert_invariant;
use crate::matrices::errors::ContractViolation;
use crate::matrices::{Column, Matrix, Row};

mod collections;
mod iterators;
mod lines;
mod traits;

pub use collections::*;
pub use iterators::*;
pub use lines::*;

pub use crate::matrices::iterators::{
    ColumnIterator, ColumnIteratorMut, ElementEnd, ElementIterator, RowIterator, RowIteratorMut,
};

/**
 * A shared/immutable reference to a matrix that views are built on.
 *
 * This is implemented for `&Matrix<T>` and `&mut Matrix<T>`. Views over a `&Matrix<T>` are
 * read only and can be freely copied, views over a `&mut Matrix<T>` can also modify elements
 * but are unique.
 */
pub trait MatrixRef<T> {
    /**
     * The matrix being viewed.
     */
    fn matrix(&self) -> &Matrix<T>;
}

/**
 * A unique/mutable reference to a matrix that views are built on.
 *
 * See [MatrixRef].
 */
pub trait MatrixMut<T>: MatrixRef<T> {
    /**
     * The matrix being viewed, for modifying its elements.
     */
    fn matrix_mut(&mut self) -> &mut Matrix<T>;
}

/**
 * Orientation of a line of a matrix.
 *
 * An axis knows how many lines a matrix has along it, how long each of those lines is, and
 * where the element at some offset along some line lives in the row major buffer. This trait
 * is sealed, the only axes are [RowAxis] and [ColumnAxis].
 */
#[sealed]
pub trait Axis: Copy + Default + fmt::Debug {
    /**
     * Human readable name of a line along this axis, for diagnostics.
     */
    const NAME: &'static str;

    /**
     * Number of lines along this axis in a matrix of the given size.
     */
    fn lines(rows: Row, columns: Column) -> usize;

    /**
     * Number of elements in each line along this axis in a matrix of the given size.
     */
    fn length(rows: Row, columns: Column) -> usize;

    /**
     * Flattened storage position of the element at `offset` along `line`. The arguments must
     * already be in range.
     */
    fn position(line: usize, offset: usize, rows: Row, columns: Column) -> usize;
}

/**
 * The axis of rows: a matrix has `rows` of them, each `columns` long.
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct RowAxis;

#[sealed]
impl Axis for RowAxis {
    const NAME: &'static str = "row";

    #[inline]
    fn lines(rows: Row, _columns: Column) -> usize {
        rows
    }

    #[inline]
    fn length(_rows: Row, columns: Column) -> usize {
        columns
    }

    #[inline]
    fn position(line: usize, offset: usize, _rows: Row, columns: Column) -> usize {
        line * columns + offset
    }
}

/**
 * The axis of columns: a matrix has `columns` of them, each `rows` long.
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct ColumnAxis;

#[sealed]
impl Axis for ColumnAxis {
    const NAME: &'static str = "column";

    #[inline]
    fn lines(_rows: Row, columns: Column) -> usize {
        columns
    }

    #[inline]
    fn length(rows: Row, _columns: Column) -> usize {
        rows
    }

    #[inline]
    fn position(line: usize, offset: usize, _rows: Row, columns: Column) -> usize {
        line + columns * offset
    }
}

pub(crate) fn lines_of<T, A: Axis>(matrix: &Matrix<T>) -> usize {
    A::lines(matrix.row_count(), matrix.column_count())
}

pub(crate) fn length_of<T, A: Axis>(matrix: &Matrix<T>) -> usize {
    A::length(matrix.row_count(), matrix.column_count())
}

#[track_caller]
pub(crate) fn check_line<T, A: Axis>(matrix: &Matrix<T>, line: usize) {
    let lines = lines_of::<T, A>(matrix);
    assert_invariant(line < lines, || ContractViolation::LineOutOfRange {
        axis: A::NAME,
        line,
        lines,
    });
}

/**
 * Flattened storage position of `offset` along `line`, panicking if either is out of range.
 */
#[track_caller]
pub(crate) fn checked_position<T, A: Axis>(matrix: &Matrix<T>, line: usize, offset: usize) -> usize {
    check_line::<T, A>(matrix, line);
    let (rows, columns) = matrix.size();
    let length = A::length(rows, columns);
    assert_invariant(offset < length, || ContractViolation::OffsetOutOfRange {
        axis: A::NAME,
        line,
        offset,
        length,
    });
    A::position(line, offset, rows, columns)
}

pub(crate) fn try_position<T, A: Axis>(matrix: &Matrix<T>, line: usize, offset: usize) -> Option<usize> {
    let (rows, columns) = matrix.size();
    if line < A::lines(rows, columns) && offset < A::length(rows, columns) {
        Some(A::position(line, offset, rows, columns))
    } else {
        None
    }
}

/**
 * Views over the same matrix are compared by address, not by value.
 */
pub(crate) fn same_matrix<T>(a: &Matrix<T>, b: &Matrix<T>) -> bool {
    std::ptr::eq(a, b)
}

/**
 * Address of a matrix for end positions that must not borrow it.
 */
pub(crate) fn matrix_address<T>(matrix: &Matrix<T>) -> *const () {
    (matrix as *const Matrix<T>).cast()
}

#[test]
fn test_positions_agree_between_axes() {
    // 3x4 matrix, every (row, column) pair must flatten to the same place from both axes
    let (rows, columns) = (3, 4);
    for row in 0..rows {
        for column in 0..columns {
            assert_eq!(
                RowAxis::position(row, column, rows, columns),
                ColumnAxis::position(column, row, rows, columns)
            );
        }
    }
    assert_eq!(RowAxis::lines(rows, columns), ColumnAxis::length(rows, columns));
    assert_eq!(ColumnAxis::lines(rows, columns), RowAxis::length(rows, columns));
}

#[test]
fn test_try_position_rejects_both_bounds() {
    let matrix = Matrix::new(2, 3, ());
    assert_eq!(try_position::<(), RowAxis>(&matrix, 1, 2), Some(5));
    assert_eq!(try_position::<(), RowAxis>(&matrix, 2, 0), None);
    assert_eq!(try_position::<(), RowAxis>(&matrix, 0, 3), None);
    assert_eq!(try_position::<(), ColumnAxis>(&matrix, 2, 1), Some(5));
    assert_eq!(try_position::<(), ColumnAxis>(&matrix, 3, 0), None);
    assert_eq!(try_position::<(), ColumnAxis>(&matrix, 0, 2), None);
}
