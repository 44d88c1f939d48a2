use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use crate::matrices::Matrix;
use crate::matrices::iterators::{ElementEnd, ElementIterator};
use crate::matrices::views::{
    Axis, ColumnAxis, MatrixMut, MatrixRef, RowAxis, checked_position, length_of, lines_of,
    try_position,
};

/**
 * A single row or column of a matrix.
 *
 * A line is a lightweight handle, it holds only the matrix reference it was created from and
 * which row or column of that matrix it stands for. Indexing a line, or iterating through it,
 * reads and writes the elements stored in the matrix directly.
 *
 * Lines are created by indexing or iterating a [MatrixLines](crate::matrices::views::MatrixLines)
 * collection, or from the `row`/`column` methods on [Matrix].
 *
 * ```
 * use matrix_lines::matrices::Matrix;
 * let mut matrix = Matrix::new(3, 2, 0);
 * let mut column = matrix.column_mut(1);
 * assert_eq!(column.len(), 3);
 * column[2] = 8;
 * for element in column.iter_mut() {
 *     *element += 1;
 * }
 * assert_eq!(matrix.row(2).iter().copied().collect::<Vec<_>>(), vec![0, 9]);
 * ```
 *
 * There are no methods to change which line a handle refers to, all mutation happens on the
 * elements it exposes.
 */
pub struct MatrixLine<T, S, A> {
    pub(super) source: S,
    pub(super) line: usize,
    _type: PhantomData<T>,
    _axis: PhantomData<A>,
}

/**
 * A read only row of a matrix.
 */
pub type MatrixRow<'a, T> = MatrixLine<T, &'a Matrix<T>, RowAxis>;

/**
 * A row of a matrix which can modify its elements.
 */
pub type MatrixRowMut<'a, T> = MatrixLine<T, &'a mut Matrix<T>, RowAxis>;

/**
 * A read only column of a matrix.
 */
pub type MatrixColumn<'a, T> = MatrixLine<T, &'a Matrix<T>, ColumnAxis>;

/**
 * A column of a matrix which can modify its elements.
 */
pub type MatrixColumnMut<'a, T> = MatrixLine<T, &'a mut Matrix<T>, ColumnAxis>;

impl<T, S, A> MatrixLine<T, S, A>
where
    S: MatrixRef<T>,
    A: Axis,
{
    pub(crate) fn new(source: S, line: usize) -> MatrixLine<T, S, A> {
        MatrixLine {
            source,
            line,
            _type: PhantomData,
            _axis: PhantomData,
        }
    }

    /**
     * Which row or column of the matrix this line is. Lines are 0 indexed.
     */
    pub fn line(&self) -> usize {
        self.line
    }

    /**
     * The number of elements in this line, which is the number of columns in the matrix for
     * a row and the number of rows in the matrix for a column.
     */
    pub fn len(&self) -> usize {
        length_of::<T, A>(self.source.matrix())
    }

    /**
     * Returns true if this line has no elements.
     */
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a, T, A: Axis> MatrixLine<T, &'a Matrix<T>, A> {
    /**
     * Gets a reference to the element at this offset along the line.
     *
     * # Panics
     *
     * If the offset is not less than [len](MatrixLine::len).
     */
    #[track_caller]
    pub fn get(&self, offset: usize) -> &'a T {
        let matrix: &'a Matrix<T> = self.source;
        matrix.flat_reference(checked_position::<T, A>(matrix, self.line, offset))
    }

    /**
     * Gets a reference to the element at this offset along the line if the offset is in
     * range, otherwise returns None.
     */
    pub fn try_get(&self, offset: usize) -> Option<&'a T> {
        let matrix: &'a Matrix<T> = self.source;
        try_position::<T, A>(matrix, self.line, offset).map(|index| matrix.flat_reference(index))
    }

    /**
     * Returns an iterator positioned at the first element of this line.
     */
    pub fn begin(&self) -> ElementIterator<T, &'a Matrix<T>, A> {
        ElementIterator::new(self.source, self.line, 0)
    }

    /**
     * Returns an iterator positioned one past the last element of this line. It compares
     * equal to an iterator from [begin](MatrixLine::begin) once that has been advanced
     * through every element, and cannot be dereferenced or advanced itself.
     */
    pub fn end(&self) -> ElementIterator<T, &'a Matrix<T>, A> {
        ElementIterator::new(self.source, self.line, self.len())
    }

    /**
     * Returns an iterator over references to the elements of this line, this is the same
     * iterator as [begin](MatrixLine::begin).
     */
    pub fn iter(&self) -> ElementIterator<T, &'a Matrix<T>, A> {
        self.begin()
    }
}

impl<T, A: Axis> MatrixLine<T, &mut Matrix<T>, A> {
    /**
     * Borrows this line as a read only line.
     */
    pub fn as_const(&self) -> MatrixLine<T, &Matrix<T>, A> {
        MatrixLine::new(&*self.source, self.line)
    }

    /**
     * Gets a reference to the element at this offset along the line.
     *
     * # Panics
     *
     * If the offset is not less than [len](MatrixLine::len).
     */
    #[track_caller]
    pub fn get(&self, offset: usize) -> &T {
        self.as_const().get(offset)
    }

    /**
     * Gets a reference to the element at this offset along the line if the offset is in
     * range, otherwise returns None.
     */
    pub fn try_get(&self, offset: usize) -> Option<&T> {
        self.as_const().try_get(offset)
    }

    /**
     * Gets a mutable reference to the element at this offset along the line.
     *
     * # Panics
     *
     * If the offset is not less than [len](MatrixLine::len).
     */
    #[track_caller]
    pub fn get_mut(&mut self, offset: usize) -> &mut T {
        let index = checked_position::<T, A>(self.source, self.line, offset);
        self.source.flat_reference_mut(index)
    }

    /**
     * Gets a mutable reference to the element at this offset along the line if the offset is
     * in range, otherwise returns None.
     */
    pub fn try_get_mut(&mut self, offset: usize) -> Option<&mut T> {
        let index = try_position::<T, A>(self.source, self.line, offset)?;
        Some(self.source.flat_reference_mut(index))
    }

    /**
     * Returns an iterator positioned at the first element of this line which can modify the
     * elements it passes over.
     *
     * Since the iterator borrows this line exclusively, take the [end](MatrixLine::end)
     * position to compare against before calling this, or use
     * [is_end](ElementIterator::is_end).
     */
    pub fn begin(&mut self) -> ElementIterator<T, &mut Matrix<T>, A> {
        ElementIterator::new(&mut *self.source, self.line, 0)
    }

    /**
     * Returns the position one past the last element of this line. It does not borrow the
     * line, so it can be held while an iterator from [begin](MatrixLine::begin) runs up
     * to it.
     */
    pub fn end(&self) -> ElementEnd<A> {
        ElementEnd::new(&*self.source, self.line)
    }

    /**
     * Returns a read only iterator over references to the elements of this line.
     */
    pub fn iter(&self) -> ElementIterator<T, &Matrix<T>, A> {
        ElementIterator::new(&*self.source, self.line, 0)
    }

    /**
     * Returns an iterator over mutable references to the elements of this line, this is the
     * same iterator as [begin](MatrixLine::begin).
     */
    pub fn iter_mut(&mut self) -> ElementIterator<T, &mut Matrix<T>, A> {
        self.begin()
    }
}

/**
 * A mutable line can be converted into a read only line of the same matrix, but a read only
 * line can never become a mutable one.
 *
 * ```compile_fail
 * use matrix_lines::matrices::Matrix;
 * use matrix_lines::matrices::views::MatrixColumnMut;
 * let matrix = Matrix::new(2, 2, 0);
 * let column = MatrixColumnMut::from(matrix.column(0));
 * ```
 */
impl<'a, T, A: Axis> From<MatrixLine<T, &'a mut Matrix<T>, A>> for MatrixLine<T, &'a Matrix<T>, A> {
    fn from(line: MatrixLine<T, &'a mut Matrix<T>, A>) -> Self {
        let MatrixLine { source, line, .. } = line;
        let source: &'a Matrix<T> = source;
        MatrixLine::new(source, line)
    }
}

impl<T, A: Axis> Clone for MatrixLine<T, &Matrix<T>, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, A: Axis> Copy for MatrixLine<T, &Matrix<T>, A> {}

impl<'a, T, A: Axis> IntoIterator for MatrixLine<T, &'a Matrix<T>, A> {
    type Item = &'a T;
    type IntoIter = ElementIterator<T, &'a Matrix<T>, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin()
    }
}

/**
 * Consuming a mutable line gives an iterator of mutable references that live as long as the
 * borrow of the matrix the line was created from.
 */
impl<'a, T, A: Axis> IntoIterator for MatrixLine<T, &'a mut Matrix<T>, A> {
    type Item = &'a mut T;
    type IntoIter = ElementIterator<T, &'a mut Matrix<T>, A>;

    fn into_iter(self) -> Self::IntoIter {
        ElementIterator::new(self.source, self.line, 0)
    }
}

impl<T, S, A> Index<usize> for MatrixLine<T, S, A>
where
    S: MatrixRef<T>,
    A: Axis,
{
    type Output = T;

    #[track_caller]
    fn index(&self, offset: usize) -> &T {
        let matrix = self.source.matrix();
        matrix.flat_reference(checked_position::<T, A>(matrix, self.line, offset))
    }
}

impl<T, S, A> IndexMut<usize> for MatrixLine<T, S, A>
where
    S: MatrixMut<T>,
    A: Axis,
{
    #[track_caller]
    fn index_mut(&mut self, offset: usize) -> &mut T {
        let index = checked_position::<T, A>(self.source.matrix(), self.line, offset);
        self.source.matrix_mut().flat_reference_mut(index)
    }
}

/**
 * Prints the elements of the line, not the whole matrix it belongs to.
 */
impl<T, S, A> fmt::Debug for MatrixLine<T, S, A>
where
    T: fmt::Debug,
    S: MatrixRef<T>,
    A: Axis,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let matrix = self.source.matrix();
        write!(f, "{} {} ", A::NAME, self.line)?;
        if self.line >= lines_of::<T, A>(matrix) {
            return write!(f, "(out of range)");
        }
        f.debug_list()
            .entries((0..self.len()).map(|offset| &self[offset]))
            .finish()
    }
}

#[test]
fn test_row_and_column_lines_address_same_elements() {
    let mut matrix = Matrix::new(3, 4, 0);
    let mut number = 0;
    for row in 0..3 {
        for column in 0..4 {
            matrix.set(row, column, number);
            number += 1;
        }
    }
    let row = matrix.row(1);
    let column = matrix.column(2);
    assert_eq!(row.len(), 4);
    assert_eq!(column.len(), 3);
    assert!(std::ptr::eq(row.get(2), column.get(1)));
    assert_eq!(column.try_get(3), None);
    assert_eq!(format!("{:?}", column), "column 2 [2, 6, 10]");
}

#[test]
fn test_mutable_line_writes_through() {
    let mut matrix = Matrix::new(2, 2, 'a');
    {
        let mut column = matrix.column_mut(0);
        *column.get_mut(1) = 'b';
        assert_eq!(column.try_get_mut(2), None);
        assert_eq!(column.get(1), &'b');
    }
    assert_eq!(matrix.get(1, 0), 'b');
}

#[test]
fn test_mutable_line_runs_from_begin_to_end() {
    let mut matrix = Matrix::new(2, 3, 0);
    let mut row = matrix.row_mut(0);
    let end = row.end();
    let mut iterator = row.begin();
    let mut offset = 0;
    while iterator != end {
        *iterator.get_mut() = offset;
        offset += 1;
        iterator.advance();
    }
    assert_eq!(offset, row.len());
    assert_eq!(&matrix[0], &[0, 1, 2]);
}
