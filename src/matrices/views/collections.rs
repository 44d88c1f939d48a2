use std::fmt;
use std::marker::PhantomData;

use lender::IntoLender;

use crate::matrices::Matrix;
use crate::matrices::views::{
    Axis, ColumnAxis, LinesEnd, LinesIterator, MatrixLine, MatrixRef, RowAxis, check_line,
    lines_of,
};

/**
 * A matrix viewed as a collection of its rows or of its columns.
 *
 * The collection is only a borrow of the matrix, it does not copy any elements. Indexing it
 * gives a [MatrixLine] for one row or column and iterating it gives each line in order. The
 * read only collections can be iterated with a normal [Iterator], the mutable collections hand
 * out lines that borrow the collection and so are iterated as a [Lender](lender::Lender):
 *
 * ```
 * use lender::prelude::*;
 * use matrix_lines::matrices::Matrix;
 * let mut matrix = Matrix::new(2, 3, 1);
 * let mut rows = matrix.rows_mut().into_lender();
 * while let Some(mut row) = rows.next() {
 *     let line = row.line();
 *     for element in row.iter_mut() {
 *         *element += line;
 *     }
 * }
 * assert_eq!(
 *     matrix.columns().into_iter().map(|column| column.into_iter().sum()).collect::<Vec<usize>>(),
 *     vec![3, 3, 3]
 * );
 * ```
 */
pub struct MatrixLines<T, S, A> {
    source: S,
    _type: PhantomData<T>,
    _axis: PhantomData<A>,
}

/**
 * The read only rows of a matrix.
 */
pub type MatrixRows<'a, T> = MatrixLines<T, &'a Matrix<T>, RowAxis>;

/**
 * The rows of a matrix, which can modify the elements.
 */
pub type MatrixRowsMut<'a, T> = MatrixLines<T, &'a mut Matrix<T>, RowAxis>;

/**
 * The read only columns of a matrix.
 */
pub type MatrixColumns<'a, T> = MatrixLines<T, &'a Matrix<T>, ColumnAxis>;

/**
 * The columns of a matrix, which can modify the elements.
 */
pub type MatrixColumnsMut<'a, T> = MatrixLines<T, &'a mut Matrix<T>, ColumnAxis>;

impl<T, S, A> MatrixLines<T, S, A>
where
    S: MatrixRef<T>,
    A: Axis,
{
    pub(crate) fn new(source: S) -> MatrixLines<T, S, A> {
        MatrixLines {
            source,
            _type: PhantomData,
            _axis: PhantomData,
        }
    }

    /**
     * The number of lines in this collection, which is the number of rows in the matrix for
     * a collection of rows and the number of columns for a collection of columns.
     */
    pub fn len(&self) -> usize {
        lines_of::<T, A>(self.source.matrix())
    }

    /**
     * Returns true if there are no lines in this collection.
     */
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a, T, A: Axis> MatrixLines<T, &'a Matrix<T>, A> {
    /**
     * Gets the line at this index.
     *
     * # Panics
     *
     * If the index is not less than [len](MatrixLines::len).
     */
    #[track_caller]
    pub fn get(&self, line: usize) -> MatrixLine<T, &'a Matrix<T>, A> {
        check_line::<T, A>(self.source, line);
        MatrixLine::new(self.source, line)
    }

    /**
     * Gets the line at this index if it is in range, otherwise returns None.
     */
    pub fn try_get(&self, line: usize) -> Option<MatrixLine<T, &'a Matrix<T>, A>> {
        if line < self.len() {
            Some(MatrixLine::new(self.source, line))
        } else {
            None
        }
    }

    /**
     * Same as [get](MatrixLines::get), provided so read only and mutable collections can
     * be turned into a single line the same way.
     */
    #[track_caller]
    pub fn into_line(self, line: usize) -> MatrixLine<T, &'a Matrix<T>, A> {
        self.get(line)
    }

    /**
     * Returns an iterator positioned at the first line.
     */
    pub fn begin(&self) -> LinesIterator<T, &'a Matrix<T>, A> {
        LinesIterator::new(self.source, 0)
    }

    /**
     * Returns an iterator positioned one past the last line.
     */
    pub fn end(&self) -> LinesIterator<T, &'a Matrix<T>, A> {
        LinesIterator::new(self.source, self.len())
    }

    /**
     * Returns an iterator over every line, the same iterator as [begin](MatrixLines::begin).
     */
    pub fn iter(&self) -> LinesIterator<T, &'a Matrix<T>, A> {
        self.begin()
    }
}

impl<'a, T, A: Axis> MatrixLines<T, &'a mut Matrix<T>, A> {
    /**
     * Borrows this collection as a read only collection.
     */
    pub fn as_const(&self) -> MatrixLines<T, &Matrix<T>, A> {
        MatrixLines::new(&*self.source)
    }

    /**
     * Gets a read only view of the line at this index.
     *
     * # Panics
     *
     * If the index is not less than [len](MatrixLines::len).
     */
    #[track_caller]
    pub fn get(&self, line: usize) -> MatrixLine<T, &Matrix<T>, A> {
        self.as_const().get(line)
    }

    /**
     * Gets a read only view of the line at this index if it is in range, otherwise returns
     * None.
     */
    pub fn try_get(&self, line: usize) -> Option<MatrixLine<T, &Matrix<T>, A>> {
        self.as_const().try_get(line)
    }

    /**
     * Gets the line at this index, borrowing this collection for as long as the line is used.
     *
     * # Panics
     *
     * If the index is not less than [len](MatrixLines::len).
     */
    #[track_caller]
    pub fn get_mut(&mut self, line: usize) -> MatrixLine<T, &mut Matrix<T>, A> {
        check_line::<T, A>(self.source, line);
        MatrixLine::new(&mut *self.source, line)
    }

    /**
     * Gets the line at this index if it is in range, otherwise returns None.
     */
    pub fn try_get_mut(&mut self, line: usize) -> Option<MatrixLine<T, &mut Matrix<T>, A>> {
        if line < self.len() {
            Some(MatrixLine::new(&mut *self.source, line))
        } else {
            None
        }
    }

    /**
     * Consumes this collection to get the line at this index, which keeps the full borrow of
     * the matrix.
     *
     * # Panics
     *
     * If the index is not less than [len](MatrixLines::len).
     */
    #[track_caller]
    pub fn into_line(self, line: usize) -> MatrixLine<T, &'a mut Matrix<T>, A> {
        check_line::<T, A>(self.source, line);
        MatrixLine::new(self.source, line)
    }

    /**
     * Returns an iterator positioned at the first line, which hands out lines that can modify
     * the elements.
     */
    pub fn begin(&mut self) -> LinesIterator<T, &mut Matrix<T>, A> {
        LinesIterator::new(&mut *self.source, 0)
    }

    /**
     * Returns the position one past the last line. It does not borrow the collection, so it
     * can be held while an iterator from [begin](MatrixLines::begin) runs up to it.
     */
    pub fn end(&self) -> LinesEnd<A> {
        LinesEnd::new(&*self.source)
    }

    /**
     * Returns a read only iterator over every line.
     */
    pub fn iter(&self) -> LinesIterator<T, &Matrix<T>, A> {
        LinesIterator::new(&*self.source, 0)
    }

    /**
     * Returns a lending iterator over every line, the same iterator as
     * [begin](MatrixLines::begin).
     */
    pub fn iter_mut(&mut self) -> LinesIterator<T, &mut Matrix<T>, A> {
        self.begin()
    }
}

/**
 * A mutable collection can be converted into a read only collection of the same matrix, but
 * a read only collection can never become a mutable one.
 *
 * ```compile_fail
 * use matrix_lines::matrices::Matrix;
 * use matrix_lines::matrices::views::MatrixRowsMut;
 * let matrix = Matrix::new(2, 2, 0);
 * let rows = MatrixRowsMut::from(matrix.rows());
 * ```
 */
impl<'a, T, A: Axis> From<MatrixLines<T, &'a mut Matrix<T>, A>>
    for MatrixLines<T, &'a Matrix<T>, A>
{
    fn from(lines: MatrixLines<T, &'a mut Matrix<T>, A>) -> Self {
        let source: &'a Matrix<T> = lines.source;
        MatrixLines::new(source)
    }
}

impl<T, A: Axis> Clone for MatrixLines<T, &Matrix<T>, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, A: Axis> Copy for MatrixLines<T, &Matrix<T>, A> {}

impl<'a, T, A: Axis> IntoIterator for MatrixLines<T, &'a Matrix<T>, A> {
    type Item = MatrixLine<T, &'a Matrix<T>, A>;
    type IntoIter = LinesIterator<T, &'a Matrix<T>, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin()
    }
}

impl<'a, T, A: Axis> IntoLender for MatrixLines<T, &'a mut Matrix<T>, A> {
    type Lender = LinesIterator<T, &'a mut Matrix<T>, A>;

    #[inline]
    fn into_lender(self) -> Self::Lender {
        LinesIterator::new(self.source, 0)
    }
}

impl<T, S, A> fmt::Debug for MatrixLines<T, S, A>
where
    T: fmt::Debug,
    S: MatrixRef<T>,
    A: Axis,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let matrix = self.source.matrix();
        f.debug_list()
            .entries((0..self.len()).map(|line| MatrixLine::<T, &Matrix<T>, A>::new(matrix, line)))
            .finish()
    }
}

#[test]
fn test_collections_count_lines() {
    let matrix = Matrix::new(3, 4, 0u8);
    assert_eq!(matrix.rows().len(), 3);
    assert_eq!(matrix.columns().len(), 4);
    assert!(matrix.rows().try_get(3).is_none());
    assert!(matrix.columns().try_get(3).is_some());
    let empty = Matrix::new(0, 4, 0u8);
    assert!(empty.rows().is_empty());
    assert_eq!(empty.columns().len(), 4);
    assert!(empty.column(3).is_empty());
}

#[test]
fn test_mutable_collection_lines_write_through() {
    let mut matrix = Matrix::new(2, 2, 0);
    let mut columns = matrix.columns_mut();
    columns.get_mut(1)[0] = 4;
    if let Some(mut column) = columns.try_get_mut(0) {
        column[1] = 2;
    }
    assert!(columns.try_get_mut(2).is_none());
    assert_eq!(columns.get(1).get(0), &4);
    assert_eq!(matrix.to_string(), "[ 0, 4\n  2, 0 ]");
}

#[test]
fn test_debug_lists_every_line() {
    let mut matrix = Matrix::new(2, 2, 0);
    matrix[0][1] = 1;
    assert_eq!(
        format!("{:?}", matrix.columns()),
        "[column 0 [0, 0], column 1 [1, 0]]"
    );
}
