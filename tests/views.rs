extern crate matrix_lines;

#[cfg(test)]
mod tests {
    use lender::for_;
    use lender::prelude::*;
    use matrix_lines::matrices::Matrix;
    use matrix_lines::matrices::views::{
        ColumnIterator, MatrixColumn, MatrixColumns, MatrixRow, MatrixRows, RowsIterator,
    };

    fn drain_rows(matrix: &Matrix<i32>) -> Vec<Vec<i32>> {
        matrix
            .rows()
            .into_iter()
            .map(|row| row.into_iter().copied().collect())
            .collect()
    }

    fn drain_columns(matrix: &Matrix<i32>) -> Vec<Vec<i32>> {
        matrix
            .columns()
            .into_iter()
            .map(|column| column.into_iter().copied().collect())
            .collect()
    }

    #[test]
    fn check_three_by_four_example() {
        let mut matrix = Matrix::new(3, 4, 0);
        matrix[0][2] = 7;
        let rows = drain_rows(&matrix);
        assert_eq!(vec![vec![0, 0, 7, 0], vec![0; 4], vec![0; 4]], rows);
        let columns = drain_columns(&matrix);
        assert_eq!(4, columns.len());
        assert!(columns.iter().all(|column| column.len() == 3));
        assert_eq!(vec![7, 0, 0], columns[2]);

        let mut matrix = Matrix::new(3, 4, 0);
        matrix[1][2] = 7;
        assert_eq!(
            vec![vec![0, 0, 0, 0], vec![0, 0, 7, 0], vec![0, 0, 0, 0]],
            drain_rows(&matrix)
        );
        assert_eq!(vec![0, 7, 0], drain_columns(&matrix)[2]);
    }

    #[test]
    fn check_two_by_two_copy_example() {
        let original = Matrix::new(2, 2, 1);
        let mut copy = original.clone();
        copy[0][0] = 9;
        assert_eq!(vec![vec![1, 1], vec![1, 1]], drain_rows(&original));
        assert_eq!(vec![vec![9, 1], vec![1, 1]], drain_rows(&copy));
    }

    #[test]
    fn check_rows_and_columns_share_storage() {
        let mut matrix = Matrix::new(3, 2, 0);
        for r in 0..3 {
            for c in 0..2 {
                let from_row: *const i32 = &matrix[r][c];
                let mut iterator = matrix.columns().get(c).begin();
                for _ in 0..r {
                    iterator.advance();
                }
                assert!(std::ptr::eq(from_row, iterator.get()));
            }
        }
        matrix.row_mut(2)[1] = 6;
        assert_eq!(&6, matrix.column(1).get(2));
        *matrix.column_mut(0).get_mut(1) = 4;
        assert_eq!(4, matrix.row(1)[0]);
    }

    #[test]
    fn check_cursor_protocol_matches_iterator() {
        let mut matrix = Matrix::new(2, 3, 0);
        matrix[1][1] = 2;
        let columns: MatrixColumns<i32> = matrix.columns();
        let mut lines = columns.begin();
        let end = columns.end();
        let mut drained = Vec::new();
        while lines != end {
            let column = lines.get();
            let mut elements: ColumnIterator<i32> = column.begin();
            while elements != column.end() {
                drained.push(*elements.get());
                elements.advance();
            }
            lines.advance();
        }
        let flattened: Vec<i32> = drain_columns(&matrix).into_iter().flatten().collect();
        assert_eq!(flattened, drained);
        assert_eq!(vec![0, 0, 0, 2, 0, 0], drained);
    }

    #[test]
    fn check_draining_is_restartable() {
        let mut matrix = Matrix::new(3, 3, 0);
        matrix[2][0] = 1;
        matrix[0][2] = 2;
        let rows: MatrixRows<i32> = matrix.rows();
        let first: Vec<usize> = rows.iter().map(|row| row.line()).collect();
        let second: Vec<usize> = rows.iter().map(|row| row.line()).collect();
        assert_eq!(first, second);
        assert_eq!(rows.len(), first.len());
        let row = rows.get(0);
        assert_eq!(
            row.iter().collect::<Vec<_>>(),
            row.iter().collect::<Vec<_>>()
        );
        assert_eq!(row.len(), row.iter().count());
    }

    #[test]
    fn check_post_advance() {
        let matrix = Matrix::new(2, 2, 0);
        let rows = matrix.rows();
        let mut iterator: RowsIterator<i32> = rows.begin();
        let old = iterator.post_advance();
        assert_eq!(rows.begin(), old);
        assert_eq!(1, iterator.position());
        iterator.post_advance();
        assert_eq!(rows.end(), iterator);
    }

    #[test]
    fn check_mutable_to_const_conversions() {
        let mut matrix = Matrix::new(2, 3, 0);
        matrix[1][2] = 8;
        let expected: *const i32 = matrix.get_reference(1, 2);

        let row = MatrixRow::from(matrix.row_mut(1));
        assert!(std::ptr::eq(expected, row.get(2)));

        let column = MatrixColumn::from(matrix.column_mut(2));
        assert!(std::ptr::eq(expected, column.get(1)));

        let columns = MatrixColumns::from(matrix.columns_mut());
        assert!(std::ptr::eq(expected, columns.get(2).get(1)));

        let mut column = matrix.column_mut(2);
        let mut iterator = column.begin();
        iterator.advance();
        let iterator = ColumnIterator::from(iterator);
        assert!(std::ptr::eq(expected, iterator.get()));

        let mut rows = matrix.rows_mut();
        let mut lines = rows.begin();
        lines.advance();
        let lines = RowsIterator::from(lines);
        assert!(std::ptr::eq(expected, lines.get().get(2)));
    }

    #[test]
    fn check_as_const_borrows() {
        let mut matrix = Matrix::new(2, 2, 0);
        let mut rows = matrix.rows_mut();
        rows.get_mut(0)[1] = 3;
        assert_eq!(&3, rows.as_const().get(0).get(1));
        assert_eq!(rows.end(), rows.as_const().end());
        let mut row = rows.into_line(0);
        row[0] = 1;
        assert_eq!(vec![&1, &3], row.as_const().iter().collect::<Vec<_>>());
        assert_eq!(vec![vec![1, 3], vec![0, 0]], drain_rows(&matrix));
    }

    #[test]
    fn check_lending_mutable_lines() {
        let mut matrix = Matrix::new(3, 2, 0);
        let mut rows = matrix.rows_mut().into_lender();
        while let Some(mut row) = rows.next() {
            let line = row.line() as i32;
            for (offset, element) in row.iter_mut().enumerate() {
                *element = line * 10 + offset as i32;
            }
        }
        assert_eq!(vec![vec![0, 1], vec![10, 11], vec![20, 21]], drain_rows(&matrix));

        let mut columns = matrix.columns_mut();
        let mut lender = columns.iter_mut();
        while !lender.is_end() {
            for element in lender.get_mut().iter_mut() {
                *element += 100;
            }
            lender.advance();
        }
        assert_eq!(vec![vec![100, 110, 120], vec![101, 111, 121]], drain_columns(&matrix));
    }

    #[test]
    fn check_for_lender_macro() {
        let mut matrix = Matrix::new(2, 2, 1);
        for_!(mut column in matrix.columns_mut() {
            let line = column.line();
            column[line] = 0;
        });
        assert_eq!(vec![vec![0, 1], vec![1, 0]], drain_rows(&matrix));
    }

    #[test]
    fn check_mutable_element_iterator_runs_to_end() {
        let mut matrix = Matrix::new(2, 3, 1);
        let mut row = matrix.row_mut(0);
        let mut iterator = row.begin();
        while !iterator.is_end() {
            *iterator.get_mut() *= 2;
            iterator.advance();
        }
        assert_eq!(3, iterator.offset());
        assert_eq!(vec![vec![2, 2, 2], vec![1, 1, 1]], drain_rows(&matrix));
    }

    #[test]
    fn check_mutable_views_stop_at_end_taken_first() {
        let mut matrix = Matrix::new(2, 3, 1);
        let mut column = matrix.column_mut(2);
        let end = column.end();
        let mut elements = column.begin();
        while elements != end {
            *elements.get_mut() = 5;
            elements.advance();
        }
        assert_eq!(end, elements);

        let mut rows = matrix.rows_mut();
        let end = rows.end();
        let mut lines = rows.begin();
        while lines != end {
            lines.get_mut()[0] = 0;
            lines.advance();
        }
        assert_eq!(2, end.position());
        assert_eq!(vec![vec![0, 1, 5], vec![0, 1, 5]], drain_rows(&matrix));
    }

    #[test]
    fn check_iterator_equality_needs_same_matrix() {
        let a = Matrix::new(2, 2, 0);
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a.row(0).begin(), b.row(0).begin());
        assert_ne!(a.rows().begin(), b.rows().begin());
        assert_ne!(a.row(0).begin(), a.row(1).begin());
        assert_eq!(a.row(1).end(), a.rows().get(1).end());
    }

    #[test]
    fn check_debug_output() {
        let mut matrix = Matrix::new(2, 3, 0);
        matrix[1][0] = 4;
        assert_eq!("row 1 [4, 0, 0]", format!("{:?}", matrix.row(1)));
        assert_eq!("column 0 [0, 4]", format!("{:?}", matrix.column_mut(0)));
        assert_eq!(
            "[row 0 [0, 0, 0], row 1 [4, 0, 0]]",
            format!("{:?}", matrix.rows())
        );
    }
}
