/*!
 * Generic matrix type.
 *
 * A [Matrix] is a fixed size two dimensional container. Its size is chosen when it is created
 * and never changes afterwards. Besides accessing single elements by (row, column), a matrix
 * can be viewed as a collection of rows or as a collection of columns, see
 * [views](crate::matrices::views) for the proxy types involved.
 *
 * ```
 * use matrix_lines::matrices::Matrix;
 * let mut matrix = Matrix::new(3, 4, 0);
 * matrix[0][2] = 7;
 * let columns: Vec<Vec<i32>> = matrix
 *     .columns()
 *     .into_iter()
 *     .map(|column| column.into_iter().copied().collect())
 *     .collect();
 * assert_eq!(columns[2], vec![7, 0, 0]);
 * ```
 */

use std::fmt;
use std::ops::{Index, IndexMut};

pub mod contracts;
pub mod errors;
pub mod iterators;
pub mod views;

use crate::matrices::contracts::assert_invariant;
use crate::matrices::errors::ContractViolation;
use crate::matrices::views::{
    MatrixColumn, MatrixColumnMut, MatrixColumns, MatrixColumnsMut, MatrixLines, MatrixRow,
    MatrixRowMut, MatrixRows, MatrixRowsMut,
};

/**
 * A dense matrix of some type, stored as a single buffer in row major order.
 *
 * The matrix exclusively owns its elements. All of the row and column views it hands out
 * borrow the matrix, so the borrow checker prevents a view from outliving the matrix or
 * observing it after it has been moved from.
 *
 * Cloning a matrix duplicates the buffer, so the clone can be modified independently:
 * ```
 * use matrix_lines::matrices::Matrix;
 * let original = Matrix::new(2, 2, 1);
 * let mut copy = original.clone();
 * copy[0][0] = 9;
 * assert_eq!(original, Matrix::new(2, 2, 1));
 * assert_eq!(copy.get(0, 0), 9);
 * ```
 */
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: Row,
    columns: Column,
}

/// The maximum row and column lengths are usize, due to the internal storage being backed by
/// a Vec
pub type Row = usize;
pub type Column = usize;

/**
 * Methods for matrices of any type, including non numerical types such as bool.
 */
impl<T> Matrix<T> {
    /**
     * Returns the dimensionality of this matrix in Row, Column format
     */
    pub fn size(&self) -> (Row, Column) {
        (self.rows, self.columns)
    }

    /**
     * Gets the number of rows in this matrix.
     */
    pub fn row_count(&self) -> Row {
        self.rows
    }

    /**
     * Gets the number of columns in this matrix.
     */
    pub fn column_count(&self) -> Column {
        self.columns
    }

    /**
     * Returns true if this matrix has no elements, which is the case when it has no rows
     * or no columns.
     */
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /**
     * Returns a view of this matrix as a collection of its rows.
     *
     * This view is read only, and is what you get for any matrix you only hold a shared
     * reference to. Use [rows_mut](Matrix::rows_mut) for rows you can write through.
     */
    pub fn rows(&self) -> MatrixRows<'_, T> {
        MatrixLines::new(self)
    }

    /**
     * Returns a view of this matrix as a collection of its rows that can modify the elements.
     */
    pub fn rows_mut(&mut self) -> MatrixRowsMut<'_, T> {
        MatrixLines::new(self)
    }

    /**
     * Returns a view of this matrix as a collection of its columns.
     */
    pub fn columns(&self) -> MatrixColumns<'_, T> {
        MatrixLines::new(self)
    }

    /**
     * Returns a view of this matrix as a collection of its columns that can modify the
     * elements.
     */
    pub fn columns_mut(&mut self) -> MatrixColumnsMut<'_, T> {
        MatrixLines::new(self)
    }

    /**
     * Returns a view of a single row, equivalent to `self.rows().get(row)`.
     * Rows are 0 indexed.
     */
    #[track_caller]
    pub fn row(&self, row: Row) -> MatrixRow<'_, T> {
        self.rows().get(row)
    }

    /**
     * Returns a view of a single row that can modify its elements.
     * Rows are 0 indexed.
     */
    #[track_caller]
    pub fn row_mut(&mut self, row: Row) -> MatrixRowMut<'_, T> {
        self.rows_mut().into_line(row)
    }

    /**
     * Returns a view of a single column, equivalent to `self.columns().get(column)`.
     * Columns are 0 indexed.
     */
    #[track_caller]
    pub fn column(&self, column: Column) -> MatrixColumn<'_, T> {
        self.columns().get(column)
    }

    /**
     * Returns a view of a single column that can modify its elements.
     * Columns are 0 indexed.
     */
    #[track_caller]
    pub fn column_mut(&mut self, column: Column) -> MatrixColumnMut<'_, T> {
        self.columns_mut().into_line(column)
    }

    /**
     * Gets a reference to the value at this row and column if the index is in range,
     * otherwise returns None.
     */
    pub fn try_get_reference(&self, row: Row, column: Column) -> Option<&T> {
        if row < self.rows && column < self.columns {
            Some(&self.data[row * self.columns + column])
        } else {
            None
        }
    }

    /**
     * Gets a mutable reference to the value at this row and column if the index is in range,
     * otherwise returns None.
     */
    pub fn try_get_reference_mut(&mut self, row: Row, column: Column) -> Option<&mut T> {
        if row < self.rows && column < self.columns {
            Some(&mut self.data[row * self.columns + column])
        } else {
            None
        }
    }

    /**
     * Gets a reference to the value at this row and column. Rows and Columns are 0 indexed.
     *
     * # Panics
     *
     * If the index is out of range.
     */
    #[track_caller]
    pub fn get_reference(&self, row: Row, column: Column) -> &T {
        self.check_index(row, column);
        &self.data[row * self.columns + column]
    }

    /**
     * Gets a mutable reference to the value at this row and column.
     * Rows and Columns are 0 indexed.
     *
     * # Panics
     *
     * If the index is out of range.
     */
    #[track_caller]
    pub fn get_reference_mut(&mut self, row: Row, column: Column) -> &mut T {
        self.check_index(row, column);
        &mut self.data[row * self.columns + column]
    }

    /**
     * Sets a new value to this row and column. Rows and Columns are 0 indexed.
     *
     * # Panics
     *
     * If the index is out of range.
     */
    #[track_caller]
    pub fn set(&mut self, row: Row, column: Column, value: T) {
        *self.get_reference_mut(row, column) = value;
    }

    #[track_caller]
    fn check_index(&self, row: Row, column: Column) {
        assert_invariant(row < self.rows && column < self.columns, || {
            ContractViolation::IndexOutOfRange {
                row,
                column,
                size: self.size(),
            }
        });
    }

    /**
     * Reads one element of the row major buffer. This goes through a pointer to the element
     * rather than indexing the Vec so that no reference to the rest of the buffer is formed,
     * as mutable element iterators may be holding references to other elements.
     */
    #[track_caller]
    pub(crate) fn flat_reference(&self, index: usize) -> &T {
        self.check_storage_index(index);
        // Safety: the index was just checked to be inside the buffer
        unsafe { &*self.data.as_ptr().add(index) }
    }

    /**
     * Mutable counterpart of [flat_reference](Matrix::flat_reference).
     */
    #[track_caller]
    pub(crate) fn flat_reference_mut(&mut self, index: usize) -> &mut T {
        self.check_storage_index(index);
        // Safety: the index was just checked to be inside the buffer, and we hold the only
        // path to it through `&mut self`
        unsafe { &mut *self.data.as_mut_ptr().add(index) }
    }

    #[track_caller]
    fn check_storage_index(&self, index: usize) {
        let length = self.data.len();
        assert_invariant(index < length, || ContractViolation::StorageIndexOutOfRange {
            index,
            length,
        });
    }
}

/**
 * Methods for matrices with types that can be copied, but still not neccessarily numerical.
 */
impl<T: Clone> Matrix<T> {
    /**
     * Creates a matrix with `rows` rows and `columns` columns with every element initialised
     * to the provided value.
     *
     * ```
     * use matrix_lines::matrices::Matrix;
     * let matrix = Matrix::new(3, 4, 0.0);
     * assert_eq!((3, 4), matrix.size());
     * ```
     *
     * # Panics
     *
     * If `rows * columns` does not fit in a usize. Failing to allocate the buffer aborts the
     * program, as for any other Rust collection.
     */
    #[track_caller]
    pub fn new(rows: Row, columns: Column, value: T) -> Matrix<T> {
        let elements = rows.checked_mul(columns);
        assert_invariant(elements.is_some(), || ContractViolation::DimensionsOverflow {
            rows,
            columns,
        });
        let elements = elements.unwrap_or_default();
        log::trace!("Allocating {}x{} matrix of {} elements", rows, columns, elements);
        Matrix {
            data: vec![value; elements],
            rows,
            columns,
        }
    }

    /**
     * Gets a copy of the value at this row and column. Rows and Columns are 0 indexed.
     *
     * # Panics
     *
     * If the index is out of range.
     */
    #[track_caller]
    pub fn get(&self, row: Row, column: Column) -> T {
        self.get_reference(row, column).clone()
    }
}

/**
 * A default matrix has no rows and no columns.
 *
 * This is also what is left behind when taking a matrix out of a place with
 * [`std::mem::take`](std::mem::take).
 */
impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Matrix {
            data: Vec::new(),
            rows: 0,
            columns: 0,
        }
    }
}

/**
 * Any matrix of a Cloneable type implements Clone.
 */
impl<T: Clone> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        log::trace!("Cloning {}x{} matrix", self.rows, self.columns);
        Matrix {
            data: self.data.clone(),
            rows: self.rows,
            columns: self.columns,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.rows = source.rows;
        self.columns = source.columns;
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("data", &self.data)
            .finish()
    }
}

/**
 * PartialEq is implemented as two matrices are equal if and only if all their elements
 * are equal and they have the same size.
 */
impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.rows != other.rows {
            return false;
        }
        if self.columns != other.columns {
            return false;
        }
        // with the same size the row major buffers line up elementwise
        self.data == other.data
    }
}

impl<T: Eq> Eq for Matrix<T> {}

/**
 * Indexing a matrix with a row yields that row as a slice, so `matrix[row][column]`
 * addresses a single element.
 */
impl<T> Index<Row> for Matrix<T> {
    type Output = [T];

    #[track_caller]
    fn index(&self, row: Row) -> &[T] {
        assert_invariant(row < self.rows, || ContractViolation::LineOutOfRange {
            axis: "row",
            line: row,
            lines: self.rows,
        });
        let start = row * self.columns;
        &self.data[start..start + self.columns]
    }
}

impl<T> IndexMut<Row> for Matrix<T> {
    #[track_caller]
    fn index_mut(&mut self, row: Row) -> &mut [T] {
        assert_invariant(row < self.rows, || ContractViolation::LineOutOfRange {
            axis: "row",
            line: row,
            lines: self.rows,
        });
        let start = row * self.columns;
        &mut self.data[start..start + self.columns]
    }
}

impl<T> Index<(Row, Column)> for Matrix<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, (row, column): (Row, Column)) -> &T {
        self.get_reference(row, column)
    }
}

impl<T> IndexMut<(Row, Column)> for Matrix<T> {
    #[track_caller]
    fn index_mut(&mut self, (row, column): (Row, Column)) -> &mut T {
        self.get_reference_mut(row, column)
    }
}

/**
 * Any matrix of a Displayable type implements Display, printing each row on its own line.
 *
 * ```
 * use matrix_lines::matrices::Matrix;
 * let mut matrix = Matrix::new(2, 2, 0);
 * matrix[1][0] = 3;
 * assert_eq!(matrix.to_string(), "[ 0, 0\n  3, 0 ]");
 * ```
 */
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for (i, row) in self.rows().into_iter().enumerate() {
            if i > 0 {
                write!(f, "  ")?;
            }
            for (j, value) in row.into_iter().enumerate() {
                // pass the formatter on so precision and width flags apply to every element
                fmt::Display::fmt(value, f)?;
                if j < self.columns - 1 {
                    write!(f, ", ")?;
                }
            }
            if i < self.rows - 1 {
                writeln!(f)?;
            }
        }
        write!(f, " ]")
    }
}

#[test]
fn test_row_major_layout() {
    let mut matrix = Matrix::new(2, 3, 0);
    matrix.set(1, 0, 4);
    matrix.set(0, 2, 2);
    assert_eq!(matrix.data, vec![0, 0, 2, 4, 0, 0]);
    assert_eq!(&matrix[1], &[4, 0, 0]);
    assert_eq!(matrix[(0, 2)], 2);
}

#[test]
fn test_clone_from_takes_source_dimensions() {
    let source = Matrix::new(1, 4, 'x');
    let mut target = Matrix::new(3, 3, 'y');
    target.clone_from(&source);
    assert_eq!(target.size(), (1, 4));
    assert_eq!(target, source);
}

#[test]
#[should_panic(expected = "more elements than can be addressed")]
fn test_overflowing_dimensions() {
    Matrix::new(usize::MAX, 2, 0u8);
}

#[test]
#[should_panic(expected = "storage index 6 out of range for 6 elements")]
fn test_storage_index_past_end() {
    let matrix = Matrix::new(2, 3, 0u8);
    matrix.flat_reference(6);
}
