/*!
 * Iterators over the elements of a single row or column of a Matrix.
 *
 * An [ElementIterator] is a position along one line of a matrix: the matrix, which row or
 * column, and an offset along it. As a cursor it can be dereferenced with `get`, moved on
 * with `advance` and compared for equality with another position, and it also implements
 * [Iterator] so it works with the rest of the standard library.
 *
 * For a 2x2 matrix such as `[ 1, 2; 3, 4]`: ie
 * ```ignore
 * [
 *   1, 2
 *   3, 4
 * ]
 * ```
 * Depending on the row iterator you want to obtain, can either iterate through 1, 2 or 3, 4,
 * and depending on the column iterator through 1, 3 or 2, 4.
 */

use std::fmt;
use std::iter::{ExactSizeIterator, FusedIterator};
use std::marker::PhantomData;

use crate::matrices::Matrix;
use crate::matrices::contracts::assert_invariant;
use crate::matrices::errors::ContractViolation;
use crate::matrices::views::{
    Axis, ColumnAxis, MatrixMut, MatrixRef, RowAxis, check_line, checked_position, length_of,
    lines_of, matrix_address, same_matrix, try_position,
};

/**
 * A forward iterator over the elements of one row or column of a matrix.
 *
 * The iterator starts at some offset along its line and can be advanced one element at a
 * time up to the offset one past the last element, which is its end position. At the end
 * position it can no longer be dereferenced or advanced.
 *
 * ```
 * use matrix_lines::matrices::Matrix;
 * let mut matrix = Matrix::new(2, 3, 0);
 * matrix[1][2] = 5;
 * let row = matrix.row(1);
 * let mut iterator = row.begin();
 * let end = row.end();
 * let mut total = 0;
 * while iterator != end {
 *     total += iterator.get();
 *     iterator.advance();
 * }
 * assert_eq!(total, 5);
 * ```
 */
pub struct ElementIterator<T, S, A> {
    source: S,
    line: usize,
    offset: usize,
    _type: PhantomData<T>,
    _axis: PhantomData<A>,
}

/**
 * A read only iterator over a row of a matrix.
 */
pub type RowIterator<'a, T> = ElementIterator<T, &'a Matrix<T>, RowAxis>;

/**
 * An iterator over a row of a matrix which can modify the elements.
 */
pub type RowIteratorMut<'a, T> = ElementIterator<T, &'a mut Matrix<T>, RowAxis>;

/**
 * A read only iterator over a column of a matrix.
 */
pub type ColumnIterator<'a, T> = ElementIterator<T, &'a Matrix<T>, ColumnAxis>;

/**
 * An iterator over a column of a matrix which can modify the elements.
 */
pub type ColumnIteratorMut<'a, T> = ElementIterator<T, &'a mut Matrix<T>, ColumnAxis>;

impl<T, S, A> ElementIterator<T, S, A>
where
    S: MatrixRef<T>,
    A: Axis,
{
    pub(crate) fn new(source: S, line: usize, offset: usize) -> ElementIterator<T, S, A> {
        ElementIterator {
            source,
            line,
            offset,
            _type: PhantomData,
            _axis: PhantomData,
        }
    }

    /**
     * Which row or column of the matrix this iterator runs along.
     */
    pub fn line(&self) -> usize {
        self.line
    }

    /**
     * The current offset along the line, equal to the length of the line at the end
     * position.
     */
    pub fn offset(&self) -> usize {
        self.offset
    }

    /**
     * Returns true if this iterator is at its end position, one past the last element.
     */
    pub fn is_end(&self) -> bool {
        self.offset >= length_of::<T, A>(self.source.matrix())
    }

    /**
     * Gets a reference to the element at the current position.
     *
     * # Panics
     *
     * If the iterator is at its end position.
     */
    #[track_caller]
    pub fn get(&self) -> &T {
        let matrix = self.source.matrix();
        matrix.flat_reference(checked_position::<T, A>(matrix, self.line, self.offset))
    }

    /**
     * Moves this iterator on to the next element, returning the moved iterator. Advancing
     * from the last element reaches the end position.
     *
     * # Panics
     *
     * If the iterator is already at its end position.
     */
    #[track_caller]
    pub fn advance(&mut self) -> &mut Self {
        let matrix = self.source.matrix();
        check_line::<T, A>(matrix, self.line);
        let end = length_of::<T, A>(matrix);
        let position = self.offset;
        assert_invariant(position < end, || ContractViolation::AdvancePastEnd {
            axis: A::NAME,
            position,
            end,
        });
        self.offset += 1;
        self
    }

    fn remaining(&self) -> usize {
        let matrix = self.source.matrix();
        if self.line < lines_of::<T, A>(matrix) {
            length_of::<T, A>(matrix).saturating_sub(self.offset)
        } else {
            0
        }
    }
}

impl<T, S, A> ElementIterator<T, S, A>
where
    S: MatrixMut<T>,
    A: Axis,
{
    /**
     * Gets a mutable reference to the element at the current position.
     *
     * # Panics
     *
     * If the iterator is at its end position.
     */
    #[track_caller]
    pub fn get_mut(&mut self) -> &mut T {
        let index = checked_position::<T, A>(self.source.matrix(), self.line, self.offset);
        self.source.matrix_mut().flat_reference_mut(index)
    }
}

impl<T, A: Axis> ElementIterator<T, &Matrix<T>, A> {
    /**
     * Moves this iterator on to the next element, returning a copy of the iterator from
     * before it moved.
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
 * Two iterators are equal if they are over the same matrix, along the same line, and at the
 * same offset. The matrix is compared by address, so iterators over two equal but distinct
 * matrices are never equal.
 */
impl<T, S, S2, A> PartialEq<ElementIterator<T, S2, A>> for ElementIterator<T, S, A>
where
    S: MatrixRef<T>,
    S2: MatrixRef<T>,
    A: Axis,
{
    fn eq(&self, other: &ElementIterator<T, S2, A>) -> bool {
        same_matrix(self.source.matrix(), other.source.matrix())
            && self.line == other.line
            && self.offset == other.offset
    }
}

/**
 * The end position of a line, one past its last element, which holds no borrow of the
 * matrix.
 *
 * Mutable lines hand this out from `end` so that the mutable iterator from `begin` can be
 * created afterwards and still be compared against it:
 *
 * ```
 * use matrix_lines::matrices::Matrix;
 * let mut matrix = Matrix::new(2, 3, 1);
 * let mut row = matrix.row_mut(1);
 * let end = row.end();
 * let mut iterator = row.begin();
 * while iterator != end {
 *     *iterator.get_mut() += 1;
 *     iterator.advance();
 * }
 * assert_eq!(&matrix[1], &[2, 2, 2]);
 * ```
 *
 * The matrix is only remembered by address, an end position can never be used to reach
 * any elements.
 */
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ElementEnd<A> {
    matrix: *const (),
    line: usize,
    offset: usize,
    _axis: PhantomData<A>,
}

impl<A: Axis> ElementEnd<A> {
    pub(crate) fn new<T>(matrix: &Matrix<T>, line: usize) -> ElementEnd<A> {
        ElementEnd {
            matrix: matrix_address(matrix),
            line,
            offset: length_of::<T, A>(matrix),
            _axis: PhantomData,
        }
    }

    /**
     * Which row or column of the matrix this is the end of.
     */
    pub fn line(&self) -> usize {
        self.line
    }

    /**
     * The offset of the end position, which is the length of the line.
     */
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl<T, S, A> PartialEq<ElementEnd<A>> for ElementIterator<T, S, A>
where
    S: MatrixRef<T>,
    A: Axis,
{
    fn eq(&self, other: &ElementEnd<A>) -> bool {
        matrix_address(self.source.matrix()) == other.matrix
            && self.line == other.line
            && self.offset == other.offset
    }
}

impl<T, S, A> PartialEq<ElementIterator<T, S, A>> for ElementEnd<A>
where
    S: MatrixRef<T>,
    A: Axis,
{
    fn eq(&self, other: &ElementIterator<T, S, A>) -> bool {
        other == self
    }
}

/**
 * A mutable iterator can be converted into a read only iterator at the same position, but a
 * read only iterator can never become a mutable one.
 *
 * ```compile_fail
 * use matrix_lines::matrices::Matrix;
 * use matrix_lines::matrices::iterators::RowIteratorMut;
 * let matrix = Matrix::new(1, 1, 0);
 * let iterator = matrix.row(0).begin();
 * let iterator = RowIteratorMut::from(iterator);
 * ```
 */
impl<'a, T, A: Axis> From<ElementIterator<T, &'a mut Matrix<T>, A>>
    for ElementIterator<T, &'a Matrix<T>, A>
{
    fn from(iterator: ElementIterator<T, &'a mut Matrix<T>, A>) -> Self {
        let ElementIterator { source, line, offset, .. } = iterator;
        let source: &'a Matrix<T> = source;
        ElementIterator::new(source, line, offset)
    }
}

impl<T, A: Axis> Clone for ElementIterator<T, &Matrix<T>, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, A: Axis> Copy for ElementIterator<T, &Matrix<T>, A> {}

impl<T, S, A> fmt::Debug for ElementIterator<T, S, A>
where
    S: MatrixRef<T>,
    A: Axis,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementIterator")
            .field("axis", &A::NAME)
            .field("line", &self.line)
            .field("offset", &self.offset)
            .finish()
    }
}

impl<'a, T, A: Axis> Iterator for ElementIterator<T, &'a Matrix<T>, A> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let matrix: &'a Matrix<T> = self.source;
        let index = try_position::<T, A>(matrix, self.line, self.offset)?;
        self.offset += 1;
        Some(matrix.flat_reference(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T, A: Axis> FusedIterator for ElementIterator<T, &Matrix<T>, A> {}
impl<T, A: Axis> ExactSizeIterator for ElementIterator<T, &Matrix<T>, A> {}

impl<'a, T, A: Axis> Iterator for ElementIterator<T, &'a mut Matrix<T>, A> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = try_position::<T, A>(self.source, self.line, self.offset)?;
        self.offset += 1;
        let element: *mut T = self.source.flat_reference_mut(index);
        // Safety: the offset only ever moves forward, so every element of the line is yielded
        // at most once, and `get`/`get_mut` only touch the element at the current offset which
        // has not been yielded yet. We hold the exclusive borrow of the matrix for 'a, so
        // nothing else can reach the element while the returned reference is alive.
        Some(unsafe { &mut *element })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T, A: Axis> FusedIterator for ElementIterator<T, &mut Matrix<T>, A> {}
impl<T, A: Axis> ExactSizeIterator for ElementIterator<T, &mut Matrix<T>, A> {}

#[test]
fn test_row_and_column_iterators_visit_in_order() {
    let mut matrix = Matrix::new(2, 3, 0);
    let mut number = 1;
    for row in 0..2 {
        for column in 0..3 {
            matrix.set(row, column, number);
            number += 1;
        }
    }
    // [ 1, 2, 3
    //   4, 5, 6 ]
    let row: Vec<i32> = matrix.row(1).iter().copied().collect();
    assert_eq!(row, vec![4, 5, 6]);
    let column: Vec<i32> = matrix.column(2).iter().copied().collect();
    assert_eq!(column, vec![3, 6]);
    assert_eq!(matrix.column(0).iter().len(), 2);
}

#[test]
fn test_post_advance_returns_old_position() {
    let matrix = Matrix::new(1, 3, 0);
    let row = matrix.row(0);
    let mut iterator = row.begin();
    let before = iterator.post_advance();
    assert_eq!(before, row.begin());
    assert_eq!(iterator.offset(), 1);
    assert_ne!(before, iterator);
}

#[test]
fn test_mutable_iterator_yields_each_element_once() {
    let mut matrix = Matrix::new(3, 2, 0);
    {
        let column = matrix.column_mut(1);
        let references: Vec<&mut i32> = column.into_iter().collect();
        assert_eq!(references.len(), 3);
        for (i, element) in references.into_iter().enumerate() {
            *element = i as i32 + 10;
        }
    }
    assert_eq!(matrix.column(1).iter().copied().collect::<Vec<_>>(), vec![10, 11, 12]);
    assert_eq!(matrix.column(0).iter().copied().collect::<Vec<_>>(), vec![0, 0, 0]);
}

#[test]
#[should_panic(expected = "cannot advance row iterator at position 2 past its end 2")]
fn test_advancing_end_panics() {
    let matrix = Matrix::new(1, 2, 0);
    let mut iterator = matrix.row(0).end();
    iterator.advance();
}

#[test]
fn test_end_position_matches_iterator_at_end() {
    let mut matrix = Matrix::new(3, 2, 0);
    let mut column = matrix.column_mut(0);
    let end = column.end();
    assert_eq!(end.offset(), 3);
    let mut iterator = column.begin();
    let mut visited = 0;
    while iterator != end {
        *iterator.get_mut() = visited;
        visited += 1;
        iterator.advance();
    }
    assert_eq!(visited, 3);
    assert!(iterator.is_end());
    assert_eq!(end, iterator);
    let other = Matrix::new(3, 2, 0);
    assert_ne!(ElementEnd::<ColumnAxis>::new(&other, 0), other.column(1).end());
    assert_eq!(ElementEnd::<ColumnAxis>::new(&other, 1), other.column(1).end());
    assert_eq!(matrix.column(0).iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
}
