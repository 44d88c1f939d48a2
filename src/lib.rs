/*!
 * A fixed size dense [Matrix](./matrices/struct.Matrix.html) that can be read and written
 * through row and column views.
 *
 * A matrix can be looked at as a collection of its rows or of its columns. Each line of that
 * collection is a lightweight handle into the matrix's storage, and can itself be walked element
 * by element. Every view comes in a read only and a mutable flavour, and the borrow checker
 * keeps the mutable ones unique.
 *
 * ```
 * use matrix_lines::matrices::Matrix;
 * let mut matrix = Matrix::new(3, 4, 0);
 * matrix[0][2] = 7;
 * for row in matrix.rows() {
 *     assert_eq!(row.len(), 4);
 * }
 * let column = matrix.column(2);
 * assert_eq!(column.iter().copied().collect::<Vec<_>>(), vec![7, 0, 0]);
 * ```
 *
 * See the [views](./matrices/views/index.html) module for an overview of the view types, and
 * [errors](./matrices/errors/index.html) for what happens when a view is misused.
 */

pub mod matrices;
