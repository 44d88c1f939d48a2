/*!
 * Trait implementations for [MatrixRef](MatrixRef) and [MatrixMut](MatrixMut).
 *
 * These implementations are written here but Rust docs will display them on the
 * traits' pages.
 *
 * A shared reference to a [Matrix](Matrix) is a MatrixRef, and an exclusive reference to a
 * Matrix is both a MatrixRef and a MatrixMut. These are the only two sources the row and
 * column views are instantiated over.
 */

use crate::matrices::Matrix;
use crate::matrices::views::{MatrixMut, MatrixRef};

/**
 * A shared reference to a Matrix implements MatrixRef.
 */
impl<'source, T> MatrixRef<T> for &'source Matrix<T> {
    #[inline]
    fn matrix(&self) -> &Matrix<T> {
        self
    }
}

/**
 * An exclusive reference to a Matrix implements MatrixRef.
 */
impl<'source, T> MatrixRef<T> for &'source mut Matrix<T> {
    #[inline]
    fn matrix(&self) -> &Matrix<T> {
        self
    }
}

/**
 * An exclusive reference to a Matrix implements MatrixMut.
 */
impl<'source, T> MatrixMut<T> for &'source mut Matrix<T> {
    #[inline]
    fn matrix_mut(&mut self) -> &mut Matrix<T> {
        self
    }
}
