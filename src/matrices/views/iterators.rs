use std::fmt;
use std::iter::{ExactSizeIterator, FusedIterator};
use std::marker::PhantomData;

use lender::{ExactSizeLender, FusedLender, Lend, Lender, Lending};

use crate::matrices::Matrix;
use crate::matrices::contracts::assert_invariant;
use crate::matrices::errors::ContractViolation;
use crate::matrices::views::{
    Axis, ColumnAxis, MatrixLine, MatrixMut, MatrixRef, RowAxis, check_line, lines_of,
    matrix_address, same_matrix,
};

/**
 * An iterator over the rows or columns of a matrix.
 *
 * For a 2x2 matrix such as `[ 1, 2; 3, 4]`: ie
 * ```ignore
 * [
 *   1, 2
 *   3, 4
 * ]
 * ```
 * A rows iterator goes through the lines [1, 2] and [3, 4], and a columns iterator through
 * [1, 3] and [2, 4].
 *
 * The iterator keeps a single [MatrixLine] which it moves along the matrix as it is advanced,
 * `get` returns a reference to that line. The read only iterators also implement [Iterator]
 * yielding copies of the line, the mutable iterators implement [Lender] instead since each
 * line they lend borrows the iterator.
 */
pub struct LinesIterator<T, S, A> {
    held: MatrixLine<T, S, A>,
}

/**
 * A read only iterator over the rows of a matrix.
 */
pub type RowsIterator<'a, T> = LinesIterator<T, &'a Matrix<T>, RowAxis>;

/**
 * An iterator over the rows of a matrix which can modify the elements.
 */
pub type RowsIteratorMut<'a, T> = LinesIterator<T, &'a mut Matrix<T>, RowAxis>;

/**
 * A read only iterator over the columns of a matrix.
 */
pub type ColumnsIterator<'a, T> = LinesIterator<T, &'a Matrix<T>, ColumnAxis>;

/**
 * An iterator over the columns of a matrix which can modify the elements.
 */
pub type ColumnsIteratorMut<'a, T> = LinesIterator<T, &'a mut Matrix<T>, ColumnAxis>;

impl<T, S, A> LinesIterator<T, S, A>
where
    S: MatrixRef<T>,
    A: Axis,
{
    pub(crate) fn new(source: S, line: usize) -> LinesIterator<T, S, A> {
        LinesIterator {
            held: MatrixLine::new(source, line),
        }
    }

    /**
     * Index of the line this iterator is positioned at, which is the number of lines in the
     * matrix at the end position.
     */
    pub fn position(&self) -> usize {
        self.held.line
    }

    /**
     * The total number of lines this iterator runs over.
     */
    pub fn lines(&self) -> usize {
        lines_of::<T, A>(self.held.source.matrix())
    }

    /**
     * Returns true if this iterator is at its end position, one past the last line.
     */
    pub fn is_end(&self) -> bool {
        self.held.line >= self.lines()
    }

    /**
     * Gets the line at the current position.
     *
     * # Panics
     *
     * If the iterator is at its end position.
     */
    #[track_caller]
    pub fn get(&self) -> &MatrixLine<T, S, A> {
        check_line::<T, A>(self.held.source.matrix(), self.held.line);
        &self.held
    }

    /**
     * Moves this iterator on to the next line, returning the moved iterator. Advancing from
     * the last line reaches the end position.
     *
     * # Panics
     *
     * If the iterator is already at its end position.
     */
    #[track_caller]
    pub fn advance(&mut self) -> &mut Self {
        let position = self.held.line;
        let end = self.lines();
        assert_invariant(position < end, || ContractViolation::AdvancePastEnd {
            axis: A::NAME,
            position,
            end,
        });
        self.held.line += 1;
        self
    }

    fn remaining(&self) -> usize {
        self.lines().saturating_sub(self.held.line)
    }
}

impl<T, S, A> LinesIterator<T, S, A>
where
    S: MatrixMut<T>,
    A: Axis,
{
    /**
     * Gets the line at the current position for modifying its elements.
     *
     * # Panics
     *
     * If the iterator is at its end position.
     */
    #[track_caller]
    pub fn get_mut(&mut self) -> &mut MatrixLine<T, S, A> {
        check_line::<T, A>(self.held.source.matrix(), self.held.line);
        &mut self.held
    }
}

impl<T, A: Axis> LinesIterator<T, &Matrix<T>, A> {
    /**
     * Moves this iterator on to the next line, returning a copy of the iterator from before
     * it moved.
     *
     * # Panics
     *
     * If the iterator is already at its end position.
     */
    #[track_caller]
    pub fn post_advance(&mut self) -> Self {
        let previous = *self;
        self.advance();
        previous
    }
}

/**
 * Two iterators are equal if they are over the same matrix and at the same line. The matrix
 * is compared by address.
 */
impl<T, S, S2, A> PartialEq<LinesIterator<T, S2, A>> for LinesIterator<T, S, A>
where
    S: MatrixRef<T>,
    S2: MatrixRef<T>,
    A: Axis,
{
    fn eq(&self, other: &LinesIterator<T, S2, A>) -> bool {
        same_matrix(self.held.source.matrix(), other.held.source.matrix())
            && self.held.line == other.held.line
    }
}

/**
 * The position one past the last line of a matrix, as returned by
 * [MatrixLines::end](crate::matrices::views::MatrixLines::end) on a mutable collection.
 *
 * It holds no borrow of the matrix, so it can be taken before a mutable iterator and compared
 * against it while that iterator runs:
 *
 * ```
 * use matrix_lines::matrices::Matrix;
 * let mut matrix = Matrix::new(3, 2, 0);
 * let mut rows = matrix.rows_mut();
 * let end = rows.end();
 * let mut iterator = rows.begin();
 * while iterator != end {
 *     let line = iterator.position();
 *     iterator.get_mut()[1] = line;
 *     iterator.advance();
 * }
 * assert_eq!(matrix.column(1).iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
 * ```
 */
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct LinesEnd<A> {
    matrix: *const (),
    position: usize,
    _axis: PhantomData<A>,
}

impl<A: Axis> LinesEnd<A> {
    pub(crate) fn new<T>(matrix: &Matrix<T>) -> LinesEnd<A> {
        LinesEnd {
            matrix: matrix_address(matrix),
            position: lines_of::<T, A>(matrix),
            _axis: PhantomData,
        }
    }

    /**
     * The number of lines in the matrix, which is the position of an iterator at its end.
     */
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<T, S: MatrixRef<T>, A: Axis> PartialEq<LinesEnd<A>> for LinesIterator<T, S, A> {
    fn eq(&self, other: &LinesEnd<A>) -> bool {
        matrix_address(self.held.source.matrix()) == other.matrix
            && self.held.line == other.position
    }
}

impl<T, S: MatrixRef<T>, A: Axis> PartialEq<LinesIterator<T, S, A>> for LinesEnd<A> {
    fn eq(&self, other: &LinesIterator<T, S, A>) -> bool {
        other == self
    }
}

/**
 * A mutable iterator can be converted into a read only iterator at the same position, but a
 * read only iterator can never become a mutable one.
 *
 * ```compile_fail
 * use matrix_lines::matrices::Matrix;
 * use matrix_lines::matrices::views::RowsIteratorMut;
 * let matrix = Matrix::new(2, 2, 0);
 * let iterator = RowsIteratorMut::from(matrix.rows().begin());
 * ```
 */
impl<'a, T, A: Axis> From<LinesIterator<T, &'a mut Matrix<T>, A>>
    for LinesIterator<T, &'a Matrix<T>, A>
{
    fn from(iterator: LinesIterator<T, &'a mut Matrix<T>, A>) -> Self {
        LinesIterator {
            held: MatrixLine::from(iterator.held),
        }
    }
}

impl<T, A: Axis> Clone for LinesIterator<T, &Matrix<T>, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, A: Axis> Copy for LinesIterator<T, &Matrix<T>, A> {}

impl<T, S, A> fmt::Debug for LinesIterator<T, S, A>
where
    S: MatrixRef<T>,
    A: Axis,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinesIterator")
            .field("axis", &A::NAME)
            .field("position", &self.held.line)
            .field("lines", &self.lines())
            .finish()
    }
}

impl<'a, T, A: Axis> Iterator for LinesIterator<T, &'a Matrix<T>, A> {
    type Item = MatrixLine<T, &'a Matrix<T>, A>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_end() {
            return None;
        }
        let line = self.held;
        self.held.line += 1;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T, A: Axis> FusedIterator for LinesIterator<T, &Matrix<T>, A> {}
impl<T, A: Axis> ExactSizeIterator for LinesIterator<T, &Matrix<T>, A> {}

impl<'lend, T, A: Axis> Lending<'lend> for LinesIterator<T, &mut Matrix<T>, A> {
    type Lend = MatrixLine<T, &'lend mut Matrix<T>, A>;
}

impl<T, A: Axis> Lender for LinesIterator<T, &mut Matrix<T>, A> {
    #[inline]
    fn next(&mut self) -> Option<Lend<'_, Self>> {
        if self.is_end() {
            return None;
        }
        let line = self.held.line;
        self.held.line += 1;
        Some(MatrixLine::new(&mut *self.held.source, line))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T, A: Axis> ExactSizeLender for LinesIterator<T, &mut Matrix<T>, A> {
    fn len(&self) -> usize {
        self.remaining()
    }
}

impl<T, A: Axis> FusedLender for LinesIterator<T, &mut Matrix<T>, A> {}

#[test]
fn test_lines_iterator_walks_every_line() {
    let mut matrix = Matrix::new(3, 2, 0);
    matrix[2][1] = 5;
    let rows = matrix.rows();
    let mut iterator = rows.begin();
    let end = rows.end();
    let mut visited = Vec::new();
    while iterator != end {
        visited.push(iterator.get().line());
        iterator.advance();
    }
    assert_eq!(visited, vec![0, 1, 2]);
    assert!(iterator.is_end());
    assert_eq!(rows.iter().len(), 3);
    assert_eq!(rows.iter().last().map(|row| *row.get(1)), Some(5));
}

#[test]
fn test_held_line_moves_with_iterator() {
    let matrix = Matrix::new(2, 2, 'a');
    let columns = matrix.columns();
    let mut iterator = columns.begin();
    assert_eq!(iterator.get().line(), 0);
    let previous = iterator.post_advance();
    assert_eq!(previous.get().line(), 0);
    assert_eq!(iterator.get().line(), 1);
    assert_eq!(iterator.position(), 1);
}

#[test]
fn test_mutable_lines_lend_writable_lines() {
    let mut matrix = Matrix::new(2, 3, 0);
    {
        let mut columns = matrix.columns_mut();
        let mut lender = columns.iter_mut();
        assert_eq!(lender.len(), 3);
        while let Some(mut column) = lender.next() {
            let line = column.line();
            column[1] = line + 1;
        }
        assert!(lender.is_end());
        assert!(lender.next().is_none());
    }
    assert_eq!(&matrix[1], &[1, 2, 3]);
    assert_eq!(&matrix[0], &[0, 0, 0]);
}

#[test]
#[should_panic(expected = "column 2 out of range, matrix has 2 columns")]
fn test_end_cannot_be_dereferenced() {
    let matrix = Matrix::new(2, 2, 0);
    matrix.columns().end().get();
}

#[test]
fn test_mutable_lines_run_from_begin_to_end() {
    let mut matrix = Matrix::new(2, 3, 0);
    let other = Matrix::new(2, 3, 0);
    let mut columns = matrix.columns_mut();
    let end = columns.end();
    assert_eq!(end.position(), 3);
    assert!(end != LinesEnd::<ColumnAxis>::new(&other));
    let mut iterator = columns.begin();
    let mut visited = 0;
    while iterator != end {
        iterator.get_mut()[0] = visited + 1;
        iterator.advance();
        visited += 1;
    }
    assert_eq!(visited, 3);
    assert!(end == iterator);
    assert_eq!(&matrix[0], &[1, 2, 3]);
}
